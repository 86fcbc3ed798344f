#![cfg(test)]
//! The desktop binary embeds `ui/assets/theme/main.css` at compile time; a broken
//! path or a truncated file would only show up as an unstyled window at runtime.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const BOTTOM_NAV_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/bottom_nav.css"
));

#[test]
fn embedded_css_is_present() {
    assert!(!EMBEDDED_CSS.trim().is_empty(), "embedded theme is empty");
    assert!(!BOTTOM_NAV_CSS.trim().is_empty(), "bottom nav stylesheet is empty");
}

#[test]
fn theme_defines_palette_tokens() {
    for token in ["--color-bg", "--color-good", "--color-bad", "--bottom-nav-height", "body {"] {
        assert!(EMBEDDED_CSS.contains(token), "`{token}` missing from embedded theme");
    }
}

#[test]
fn bottom_nav_highlights_active_link() {
    assert!(BOTTOM_NAV_CSS.contains(".bottom-nav__item--active"));
    assert!(BOTTOM_NAV_CSS.contains("var(--bottom-nav-height"));
}
