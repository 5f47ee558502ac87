//! The total escaper

use tgmd_babel::escape_literal_text;

#[test]
fn test_escapes_special_characters() {
    assert_eq!(
        escape_literal_text("Text with * and _ and []"),
        "Text with \\* and \\_ and \\[\\]"
    );
}

#[test]
fn test_escapes_every_reserved_character() {
    assert_eq!(
        escape_literal_text("_*[]()~`>#+=-|{}.!\\"),
        "\\_\\*\\[\\]\\(\\)\\~\\`\\>\\#\\+\\=\\-\\|\\{\\}\\.\\!\\\\"
    );
}

#[test]
fn test_already_escaped_text_is_escaped_again() {
    assert_eq!(
        escape_literal_text("Already \\*escaped\\*"),
        "Already \\\\\\*escaped\\\\\\*"
    );
}

#[test]
fn test_unreserved_punctuation_is_kept() {
    assert_eq!(escape_literal_text("$5? 100% & more"), "$5? 100% & more");
}
