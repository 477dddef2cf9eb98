//! Normalisation and tokenisation.

use unicode_segmentation::UnicodeSegmentation;

/// Lowercase `text` and rejoin its Unicode words with single spaces.
///
/// Punctuation, symbols and whitespace runs fall away between words, while
/// combining marks stay attached to the letters they modify.
///
/// # Examples
/// ```
/// use campus_text::preprocess_text;
///
/// assert_eq!(preprocess_text("  Hello,\tWORLD!! "), "hello world");
/// ```
#[must_use]
pub fn preprocess_text(text: &str) -> String {
    text.to_lowercase()
        .unicode_words()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split lowercased text on Unicode word boundaries (UAX #29).
///
/// No stopword filtering happens here; see
/// [`TextAnalyzer::tokens`](crate::TextAnalyzer::tokens) for that.
///
/// # Examples
/// ```
/// use campus_text::tokenize;
///
/// assert_eq!(tokenize("Go-kart race"), vec!["go", "kart", "race"]);
/// assert_eq!(tokenize("篮球比赛"), vec!["篮", "球", "比", "赛"]);
/// ```
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .unicode_words()
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "")]
    #[case("...!!!", "")]
    #[case("Ça va?", "ça va")]
    #[case("AI/ML   meetup", "ai ml meetup")]
    #[case("周末，读书会", "周 末 读 书 会")]
    #[case("नमस्ते, दुनिया!", "नमस्ते दुनिया")]
    fn preprocessing_normalises(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(preprocess_text(input), expected);
    }

    #[rstest]
    fn tokenize_keeps_digits() {
        assert_eq!(tokenize("Room 101"), vec!["room", "101"]);
    }

    #[rstest]
    fn combining_marks_stay_inside_words() {
        assert_eq!(tokenize("संस्कृत कार्यशाला"), vec!["संस्कृत", "कार्यशाला"]);
    }

    #[rstest]
    fn tokenize_of_blank_text_is_empty() {
        assert!(tokenize(" \n\t ").is_empty());
    }
}
