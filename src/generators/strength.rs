// src/generators/strength.rs
use crate::models::StrengthLabel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthReport {
    pub length: usize,
    pub categories: usize,
    pub label: StrengthLabel,
}

/// Scores length and ASCII class diversity. Non-ASCII characters only add to the length.
pub fn analyze(password: &str) -> StrengthReport {
    let length = password.chars().count();

    let categories = [
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| c.is_ascii_punctuation()),
    ]
    .iter()
    .filter(|present| **present)
    .count();

    let label = if length < 8 || categories < 2 {
        StrengthLabel::Weak
    } else if length < 12 || categories < 3 {
        StrengthLabel::Medium
    } else {
        StrengthLabel::Strong
    };

    StrengthReport { length, categories, label }
}

pub fn classify(password: &str) -> StrengthLabel {
    analyze(password).label
}
