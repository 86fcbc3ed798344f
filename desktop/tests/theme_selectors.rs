#![cfg(test)]
/*!
Selectors the shared components render must stay defined in the unified theme
(`ui/assets/theme/main.css`). A plain substring check is enough to catch a rename
on one side only.

When markup changes a class name, update the theme and this list together.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".mobile-layout {",
    ".mobile-layout__content",
    ".page {",
    ".page__header",
    ".badge",
    ".btn {",
    ".btn--ghost",
    ".btn--dark",
    // Control panel
    ".camera__stream",
    ".camera__lost",
    ".camera__overlay",
    ".counters__total-value",
    ".counter--small",
    ".counter--medium",
    ".counter--large",
    ".control-btn--start",
    ".control-btn--stop",
    ".control-btn--active",
    ".control-btn--neutral",
    ".health__track",
    ".health__fill--cpu",
    ".health__fill--mem",
    ".health__fill--stg",
    ".health__fill--ok",
    ".health__fill--hot",
    // Analytics
    ".donut__segment--large",
    ".donut__segment--medium",
    ".donut__segment--small",
    ".legend__swatch--good",
    ".legend__swatch--bad",
    ".quality-chart__fill--bad",
    ".batch-list__row",
    ".batch-list__row--active",
    ".analytics__empty",
    ".analytics__hint",
    ".archive-menu__option",
    ".archive-menu__chip",
    ".archive-menu__change",
    // Notifications
    ".notifications__empty",
    ".notification-card--warning",
    ".notification-card--success",
    ".notification-card__icon--info",
    // Responsive block
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|sel| !THEME_CSS.contains(**sel))
        .collect();

    assert!(
        missing.is_empty(),
        "missing {} selector(s) in unified theme:\n{}",
        missing.len(),
        missing.iter().map(|s| s.to_string()).collect::<Vec<_>>().join("\n")
    );
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "embedded theme unexpectedly small ({non_ws_len} non-whitespace chars)"
    );
}
