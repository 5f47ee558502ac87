//! Property tests for span extraction, restoration and escaping

use proptest::prelude::*;
use tgmd_babel::common::placeholder::{extract, restore};
use tgmd_babel::{convert_markdown, escape_literal_text, to_plain_text, ConversionOptions};

fn has_private_use(text: &str) -> bool {
    text.chars().any(|c| ('\u{E000}'..='\u{F8FF}').contains(&c))
}

proptest! {
    #[test]
    fn prop_restore_is_identity_without_spans(text in "[a-z *_~.!()#\\-\n]{0,60}") {
        let (shielded, spans) = extract(&text);
        prop_assert!(spans.is_empty());
        prop_assert_eq!(restore(&shielded, &spans), text);
    }

    #[test]
    fn prop_no_token_survives_restore(text in "[a-z \\[\\]()`*_\n]{0,60}") {
        let (shielded, spans) = extract(&text);
        let restored = restore(&shielded, &spans);
        prop_assert!(!has_private_use(&restored), "token left in {:?}", restored);
    }

    #[test]
    fn prop_conversion_leaves_no_internal_markers(text in "[ -~\n]{0,80}") {
        let converted = convert_markdown(&text, &ConversionOptions::default());
        prop_assert!(!has_private_use(&converted), "marker left in {:?}", converted);
    }

    #[test]
    fn prop_plain_text_undoes_escaping(text in "[ -~]{0,60}") {
        prop_assert_eq!(to_plain_text(&escape_literal_text(&text)), text);
    }
}

#[test]
fn test_escaping_twice_doubles_backslashes() {
    // Escaping is not idempotent: the second pass escapes the first pass's backslashes.
    let once = escape_literal_text("a.b");
    assert_eq!(once, "a\\.b");
    assert_eq!(escape_literal_text(&once), "a\\\\\\.b");
}
