//! Property-based tests for output classification

use proptest::prelude::*;
use shellport::classifier::{classify, classify_line};
use shellport::LineCategory;

proptest! {
    #[test]
    fn test_classify_doesnt_panic(s in "\\PC*") {
        let _ = classify(&s);
    }

    #[test]
    fn test_never_more_lines_than_non_blank_input(s in "[a-zA-Z0-9 :\\\\\r\n]{0,200}") {
        let non_blank = s.lines().filter(|line| !line.trim().is_empty()).count();
        prop_assert!(classify(&s).len() <= non_blank);
    }

    #[test]
    fn test_classified_lines_are_not_blank(s in "[a-z \t\r\n]{0,200}") {
        for line in classify(&s) {
            prop_assert!(!line.text.trim().is_empty());
        }
    }

    #[test]
    fn test_leading_digit_is_output(digits in "[0-9]{1,6}", rest in "[ a-zA-Z]{0,30}") {
        let line = format!("{}{} error", digits, rest);
        prop_assert_eq!(classify_line(&line), LineCategory::Output);
    }

    #[test]
    fn test_error_word_without_listing_prefix(prefix in "[A-Z][a-z ]{0,10}", word in "(error|ERROR|Fail|FAILED)") {
        let line = format!("{} {}", prefix, word);
        prop_assert_eq!(classify_line(&line), LineCategory::Error);
    }
}
