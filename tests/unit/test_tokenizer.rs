//! Unit Tests for Argument Tokenization

use shellport::tokenizer::{split_first, tokenize, unquote};

#[test]
fn test_whitespace_runs_collapse() {
    assert_eq!(tokenize("  cp   a.txt\tb.txt  "), vec!["cp", "a.txt", "b.txt"]);
}

#[test]
fn test_quoted_path_keeps_spaces() {
    assert_eq!(
        tokenize("file1.txt \"my doc.txt\""),
        vec!["file1.txt", "my doc.txt"]
    );
}

#[test]
fn test_adjacent_quoted_segments_join() {
    assert_eq!(tokenize("\"a b\"\"c d\""), vec!["a bc d"]);
}

#[test]
fn test_empty_quotes_produce_nothing() {
    assert!(tokenize("\"\"").is_empty());
    assert_eq!(tokenize("a \"\" b"), vec!["a", "b"]);
}

#[test]
fn test_unterminated_quote() {
    assert_eq!(tokenize("\"never closed"), vec!["never closed"]);
}

#[test]
fn test_windows_paths_untouched() {
    assert_eq!(
        tokenize("C:\\Users\\me \"D:\\My Files\\\""),
        vec!["C:\\Users\\me", "D:\\My Files\\"]
    );
}

#[test]
fn test_unquote_rest_of_line() {
    assert_eq!(unquote("my notes.txt"), "my notes.txt");
    assert_eq!(unquote("  \"my notes.txt\""), "my notes.txt");
    assert_eq!(unquote(""), "");
}

#[test]
fn test_split_first_word() {
    assert_eq!(split_first("alice:staff my file.txt"), Some(("alice:staff", "my file.txt")));
    assert_eq!(split_first("  755   script.sh  "), Some(("755", "script.sh")));
    assert_eq!(split_first(""), None);
}
