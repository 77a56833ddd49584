#![cfg(test)]
//! The desktop shell inlines the shared theme (`ui/assets/theme/main.css`)
//! instead of shipping a stylesheet next to the binary. A truncated or moved
//! file would only show up as an unstyled window, so fail here instead.

use ui::THEME_CSS_INLINE;

#[test]
fn embedded_css_file_exists_and_is_not_empty() {
    assert!(
        !THEME_CSS_INLINE.trim().is_empty(),
        "Embedded theme is empty. If this is intentional, remove the test."
    );
}

#[test]
fn embedded_css_contains_expected_tokens() {
    let required = ["--color-bg", "--color-accent", "body {", ".button--primary"];
    for token in required {
        assert!(
            THEME_CSS_INLINE.contains(token),
            "Expected token `{token}` missing from embedded CSS"
        );
    }
}
