//! Built-in label lists used when the config file does not override them.

pub const EMOTIONS: [&str; 12] = [
    "Sad",
    "Angry",
    "Anxious",
    "Lonely",
    "Insecure",
    "Overwhelmed",
    "Embarrassed",
    "Stuck",
    "Ashamed",
    "Tired",
    "Guilty",
    "Frustrated",
];

pub const COMMON_THOUGHTS: [&str; 12] = [
    "I'm uncomfortable in my body",
    "I ate too much",
    "I feel gross",
    "My clothes don't fit right",
    "Why do I look like this?",
    "I don't look like I used to",
    "I wish I could disappear",
    "I look different from everyone else",
    "I hate how I look in photos",
    "I hate how I look in the mirror",
    "People are judging my body",
    "I should've skipped that meal",
];

pub const GROUNDING_ACTIVITIES: [&str; 5] = [
    "Stretch to your favorite song",
    "Write yourself a letter",
    "Drink water",
    "Go for a walk outside",
    "Call or text a friend",
];

/// Body-appreciation statements shown by the daily check-in.
pub const CHECK_IN_PHRASES: [&str; 10] = [
    "I respect my body.",
    "I feel good about my body.",
    "I feel that my body has at least some good qualities.",
    "I take a positive attitude towards my body.",
    "I am attentive to my body's needs.",
    "I feel love for my body.",
    "I appreciate the different and unique characteristics of my body.",
    "My behavior reveals my positive attitude toward my body; for example, I walk holding my head high and smiling.",
    "I am comfortable in my body.",
    "I feel like I am beautiful even if I am different from media images of attractive people.",
];

pub fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
