//! First-person rewriting of supportive phrases.
//!
//! A phrase written to a friend ("You are enough, be gentle with yourself")
//! is turned into self-talk ("I am enough, be gentle with myself") by a fixed
//! sequence of steps:
//!
//! 1. contractions (`you're` → `I'm`, straight or curly apostrophe)
//! 2. fixed phrases (`you are worthy` → `I am worthy`, `thank you` → `thank myself`)
//! 3. standalone pronouns (`your` → `my`, `you` → `I`), case-sensitive
//! 4. lone lowercase `i` → `I`
//! 5. first character upper-cased
//! 6. `need it` / `need to it` → `need`
//!
//! Step order matters: phrases must be rewritten before the bare pronoun rule
//! would break them apart, and contractions must go first because the
//! apostrophe defeats word-boundary matching.

use regex::{Captures, Regex};
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy)]
enum Replacement {
    /// Regex replacement template, `${1}` style group references allowed.
    Template(&'static str),
    /// Replace the match with the word unless group 1 (a trailing apostrophe)
    /// participated; stands in for a `(?!['’])` lookahead.
    UnlessApostrophe(&'static str),
}

#[derive(Debug)]
struct RewriteRule {
    pattern: Regex,
    replacement: Replacement,
}

impl RewriteRule {
    fn new(pattern: &str, replacement: Replacement) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("built-in rewrite pattern must compile"),
            replacement,
        }
    }

    fn apply(&self, text: &str) -> String {
        match self.replacement {
            Replacement::Template(template) => {
                self.pattern.replace_all(text, template).into_owned()
            }
            Replacement::UnlessApostrophe(word) => self
                .pattern
                .replace_all(text, |caps: &Captures| {
                    if caps.get(1).is_some() {
                        caps[0].to_string()
                    } else {
                        word.to_string()
                    }
                })
                .into_owned(),
        }
    }
}

#[derive(Debug)]
enum Step {
    Rules {
        name: &'static str,
        rules: Vec<RewriteRule>,
    },
    CapitalizeFirst,
}

impl Step {
    fn rules(name: &'static str, table: &[(&str, Replacement)]) -> Self {
        Step::Rules {
            name,
            rules: table
                .iter()
                .map(|(pattern, replacement)| RewriteRule::new(pattern, *replacement))
                .collect(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Step::Rules { name, .. } => *name,
            Step::CapitalizeFirst => "capitalize_first",
        }
    }

    fn apply(&self, text: String) -> String {
        match self {
            Step::Rules { rules, .. } => rules.iter().fold(text, |acc, rule| rule.apply(&acc)),
            Step::CapitalizeFirst => capitalize_first(&text),
        }
    }
}

use Replacement::{Template, UnlessApostrophe};

const CONTRACTIONS: &[(&str, Replacement)] = &[
    (r"(?i)you['’]re", Template("I'm")),
    (r"(?i)you['’]d", Template("I'd")),
    (r"(?i)you['’]ve", Template("I've")),
    (r"(?i)you['’]ll", Template("I'll")),
];

const PHRASES: &[(&str, Replacement)] = &[
    (r"(?i)\bi love you\b", Template("I love myself")),
    (r"(?i)\bproud of you\b", Template("proud of myself")),
    (r"(?i)\bremind you\b", Template("remind myself")),
    (r"(?i)\bcare about you\b", Template("care about myself")),
    (r"(?i)\bfor you\b", Template("for myself")),
    (r"(?i)\byou are beautiful\b", Template("I am beautiful")),
    (r"(?i)\byou are worthy\b", Template("I am worthy")),
    (r"(?i)\byou are enough\b", Template("I am enough")),
    (r"(?i)\byou are safe\b", Template("I am safe")),
    (r"(?i)\byou are loved\b", Template("I am loved")),
    (r"(?i)\byou are strong\b", Template("I am strong")),
    (r"(?i)\byou matter\b", Template("I matter")),
    (r"(?i)\byou belong\b", Template("I belong")),
    (r"(?i)\byou got this\b", Template("I got this")),
    (
        r"(?i)(support|love|remind|trust|forgive|care about|help|thank|appreciate) you\b",
        Template("${1} myself"),
    ),
];

// Case-sensitive on purpose: "YOU" is left alone.
const PRONOUNS: &[(&str, Replacement)] = &[
    (r"\byourself\b", Template("myself")),
    (r"\bYourself\b", Template("Myself")),
    (r"\byour\b", Template("my")),
    (r"\bYour\b", Template("My")),
    (r"\byours\b", Template("mine")),
    (r"\bYours\b", Template("Mine")),
    (r"\byou\b(['’])?", UnlessApostrophe("I")),
    (r"\bYou\b(['’])?", UnlessApostrophe("I")),
];

const LONE_I: &[(&str, Replacement)] = &[(r"\bi\b", Template("I"))];

const NEED_IT: &[(&str, Replacement)] = &[(r"(?i)(need (it|to it))\b", Template("need"))];

/// Ordered rewrite pipeline turning second-person advice into first person.
#[derive(Debug)]
pub struct FirstPersonRewriter {
    steps: Vec<Step>,
}

impl FirstPersonRewriter {
    pub fn new() -> Self {
        Self {
            steps: vec![
                Step::rules("contractions", CONTRACTIONS),
                Step::rules("phrases", PHRASES),
                Step::rules("pronouns", PRONOUNS),
                Step::rules("lone_i", LONE_I),
                Step::CapitalizeFirst,
                Step::rules("need_it", NEED_IT),
            ],
        }
    }

    /// Names of the steps in the order they run.
    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(Step::name).collect()
    }

    pub fn rewrite(&self, input: &str) -> String {
        self.steps.iter().fold(input.to_string(), |text, step| {
            let rewritten = step.apply(text);
            tracing::trace!(step = step.name(), output = %rewritten, "rewrite step");
            rewritten
        })
    }
}

impl Default for FirstPersonRewriter {
    fn default() -> Self {
        Self::new()
    }
}

static REWRITER: LazyLock<FirstPersonRewriter> = LazyLock::new(FirstPersonRewriter::new);

/// Rewrites `input` into first person using the shared rewriter.
pub fn rewrite_to_first_person(input: &str) -> String {
    REWRITER.rewrite(input)
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(rewrite_to_first_person(""), "");
    }

    #[test]
    fn test_contractions_both_apostrophes() {
        assert_eq!(rewrite_to_first_person("You're amazing"), "I'm amazing");
        assert_eq!(rewrite_to_first_person("you’d be okay"), "I'd be okay");
        assert_eq!(
            rewrite_to_first_person("YOU'VE done enough"),
            "I've done enough"
        );
        assert_eq!(
            rewrite_to_first_person("tomorrow you'll feel lighter"),
            "Tomorrow I'll feel lighter"
        );
    }

    #[test]
    fn test_fixed_phrases() {
        assert_eq!(rewrite_to_first_person("I love you"), "I love myself");
        assert_eq!(
            rewrite_to_first_person("You are worthy of love"),
            "I am worthy of love"
        );
        assert_eq!(rewrite_to_first_person("YOU ARE SAFE here"), "I am safe here");
        assert_eq!(
            rewrite_to_first_person("I'm so proud of you"),
            "I'm so proud of myself"
        );
    }

    #[test]
    fn test_parametrized_verb_phrase() {
        assert_eq!(
            rewrite_to_first_person("thank you for trying"),
            "Thank myself for trying"
        );
        assert_eq!(
            rewrite_to_first_person("I forgive you"),
            "I forgive myself"
        );
    }

    #[test]
    fn test_verb_rule_matches_inside_longer_words() {
        assert_eq!(
            rewrite_to_first_person("I distrust you"),
            "I distrust myself"
        );
        assert_eq!(rewrite_to_first_person("glove you"), "Glove myself");
    }

    #[test]
    fn test_pronouns_keep_case() {
        assert_eq!(
            rewrite_to_first_person("Your feelings are valid"),
            "My feelings are valid"
        );
        assert_eq!(rewrite_to_first_person("that one is yours"), "That one is mine");
        assert_eq!(
            rewrite_to_first_person("Remind yourself that you matter"),
            "Remind myself that I matter"
        );
    }

    #[test]
    fn test_uppercase_you_is_untouched() {
        assert_eq!(rewrite_to_first_person("I SEE YOU"), "I SEE YOU");
    }

    #[test]
    fn test_you_before_apostrophe_is_kept() {
        assert_eq!(rewrite_to_first_person("and you's fine"), "And you's fine");
        assert_eq!(rewrite_to_first_person("and you’s fine"), "And you’s fine");
        assert_eq!(rewrite_to_first_person("You’"), "You’");
        assert_eq!(rewrite_to_first_person("it was you'"), "It was you'");
    }

    #[test]
    fn test_lone_i_is_capitalized() {
        assert_eq!(
            rewrite_to_first_person("it's hard but i think you can"),
            "It's hard but I think I can"
        );
    }

    #[test]
    fn test_need_it_cleanup() {
        assert_eq!(rewrite_to_first_person("you need it"), "I need");
        assert_eq!(rewrite_to_first_person("you need to it"), "I need");
        assert_eq!(
            rewrite_to_first_person("you need items"),
            "I need items"
        );
    }

    #[test]
    fn test_step_order() {
        let rewriter = FirstPersonRewriter::new();
        assert_eq!(
            rewriter.step_names(),
            vec![
                "contractions",
                "phrases",
                "pronouns",
                "lone_i",
                "capitalize_first",
                "need_it"
            ]
        );
    }

    #[test]
    fn test_capitalize_first_multibyte() {
        assert_eq!(capitalize_first("élan"), "Élan");
        assert_eq!(capitalize_first(""), "");
    }
}
