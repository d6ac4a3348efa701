use crate::domain::model::EmotionSelection;
use std::collections::BTreeSet;

/// 將情緒清單轉為小寫並以自然語句連接
///
/// `["Sad"]` → `sad`, `["Sad", "Angry"]` → `sad and angry`,
/// `["Sad", "Angry", "Tired"]` → `sad, angry, and tired`.
/// Order is kept as given; callers sort first.
pub fn join_emotions<S: AsRef<str>>(labels: &[S]) -> String {
    let lowered: Vec<String> = labels.iter().map(|l| l.as_ref().to_lowercase()).collect();

    match lowered.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{} and {}", first, second),
        [rest @ .., last] => format!("{}, and {}", rest.join(", "), last),
    }
}

/// 解析逗號分隔的情緒輸入（去除空白、每個字首大寫、去重）
pub fn parse_emotion_input(input: &str) -> BTreeSet<String> {
    input
        .split(',')
        .map(|piece| capitalize_words(piece.trim()))
        .filter(|piece| !piece.is_empty())
        .collect()
}

/// Upper-cases the first letter of every word and lower-cases the rest.
pub fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;

    for ch in text.chars() {
        if ch.is_alphanumeric() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = ch.is_whitespace() || ch == '-';
        }
    }

    out
}

impl EmotionSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels
                .into_iter()
                .map(Into::into)
                .filter(|l: &String| !l.trim().is_empty())
                .collect(),
        }
    }

    pub fn from_input(input: &str) -> Self {
        Self {
            labels: parse_emotion_input(input),
        }
    }

    /// Quick-pick behaviour: selects the label, or deselects it if already selected.
    /// Returns whether the label is selected afterwards.
    pub fn toggle(&mut self, label: &str) -> bool {
        if self.labels.remove(label) {
            false
        } else {
            self.labels.insert(label.to_string());
            true
        }
    }

    /// Replaces the whole selection with what was typed.
    pub fn replace_from_input(&mut self, input: &str) {
        self.labels = parse_emotion_input(input);
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Labels in alphabetical order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    /// The selection rendered back into the text field, e.g. `Angry, Sad`.
    pub fn as_input_text(&self) -> String {
        self.labels().collect::<Vec<_>>().join(", ")
    }

    pub fn joined(&self) -> String {
        let labels: Vec<&str> = self.labels().collect();
        join_emotions(&labels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_emotions() {
        let empty: [&str; 0] = [];
        assert_eq!(join_emotions(&empty), "");
        assert_eq!(join_emotions(&["Sad"]), "sad");
        assert_eq!(join_emotions(&["Sad", "Angry"]), "sad and angry");
        assert_eq!(
            join_emotions(&["Sad", "Angry", "Tired"]),
            "sad, angry, and tired"
        );
        assert_eq!(
            join_emotions(&["a", "b", "c", "d"]),
            "a, b, c, and d"
        );
    }

    #[test]
    fn test_parse_emotion_input() {
        let parsed = parse_emotion_input(" sad,  ANGRY , , sad, left out");
        let labels: Vec<&str> = parsed.iter().map(String::as_str).collect();
        assert_eq!(labels, vec!["Angry", "Left Out", "Sad"]);
    }

    #[test]
    fn test_capitalize_words() {
        assert_eq!(capitalize_words("over WHELMED"), "Over Whelmed");
        assert_eq!(capitalize_words("self-conscious"), "Self-Conscious");
        assert_eq!(capitalize_words(""), "");
    }

    #[test]
    fn test_toggle_and_sorted_join() {
        let mut selection = EmotionSelection::new();
        assert!(selection.toggle("Tired"));
        assert!(selection.toggle("Sad"));
        assert!(selection.toggle("Angry"));
        assert_eq!(selection.joined(), "angry, sad, and tired");
        assert_eq!(selection.as_input_text(), "Angry, Sad, Tired");

        assert!(!selection.toggle("Sad"));
        assert!(!selection.contains("Sad"));
        assert_eq!(selection.joined(), "angry and tired");
    }

    #[test]
    fn test_replace_from_input_discards_previous() {
        let mut selection = EmotionSelection::from_labels(["Lonely"]);
        selection.replace_from_input("stuck");
        assert_eq!(selection.len(), 1);
        assert!(selection.contains("Stuck"));
        assert!(!selection.contains("Lonely"));
    }
}
