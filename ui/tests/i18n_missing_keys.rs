//! Shipped bundles agree with the fallback: same message ids, no duplicates, and
//! the same `$variables` in every message.

use std::collections::{BTreeMap, BTreeSet};

const EN_US: &str = include_str!("../i18n/en-US/cacaosort-ui.ftl");
const ES_ES: &str = include_str!("../i18n/es-ES/cacaosort-ui.ftl");

const TRANSLATIONS: &[(&str, &str)] = &[("es-ES", ES_ES)];

/// Message id -> variables referenced in its value. Panics on duplicate ids.
fn messages(locale: &str, ftl: &str) -> BTreeMap<String, BTreeSet<String>> {
    let mut out = BTreeMap::new();
    for line in ftl.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('.') {
            continue;
        }
        let Some((id, value)) = trimmed.split_once('=') else {
            continue;
        };
        let id = id.trim();
        if id.is_empty() || id.contains(char::is_whitespace) {
            continue;
        }
        let previous = out.insert(id.to_string(), variables(value));
        assert!(previous.is_none(), "{locale}: duplicate message id {id}");
    }
    out
}

fn variables(value: &str) -> BTreeSet<String> {
    value
        .split('$')
        .skip(1)
        .map(|tail| {
            tail.chars()
                .take_while(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
                .collect::<String>()
        })
        .filter(|name| !name.is_empty())
        .collect()
}

#[test]
fn fallback_is_well_formed() {
    let fallback = messages("en-US", EN_US);
    assert!(fallback.contains_key("nav-control-panel"));
    assert_eq!(
        fallback.get("analytics-filtering"),
        Some(&BTreeSet::from(["year".to_string()]))
    );
}

#[test]
fn translations_match_fallback() {
    let fallback = messages("en-US", EN_US);
    let mut failures = Vec::new();

    for (locale, ftl) in TRANSLATIONS {
        let translated = messages(locale, ftl);
        for (id, vars) in &fallback {
            match translated.get(id) {
                None => failures.push(format!("{locale}: missing {id}")),
                Some(found) if found != vars => failures.push(format!(
                    "{locale}: {id} uses {found:?}, fallback uses {vars:?}"
                )),
                Some(_) => {}
            }
        }
        for id in translated.keys().filter(|id| !fallback.contains_key(*id)) {
            failures.push(format!("{locale}: {id} is not in the fallback"));
        }
    }

    assert!(failures.is_empty(), "{}", failures.join("\n"));
}
