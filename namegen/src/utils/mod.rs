use std::borrow::Cow;

/// Fallback used when cleaning a feature name leaves no letters behind.
const FALLBACK_FEATURE: &str = "Aot";

pub fn version() -> String {
    format!("NAMEGEN v{}", env!("CARGO_PKG_VERSION"))
}

/// Reduce a feature label to its letters, upper-casing the start of each word
/// so that separators collapse, e.g. "my feature-name" becomes "MyFeatureName".
pub fn clean_feature_name(name: &str) -> String {
    let mut clean = String::new();
    let mut last_not_letter = true;

    for ch in name.chars() {
        if !ch.is_alphabetic() {
            last_not_letter = true;
            continue;
        }
        if last_not_letter {
            clean.extend(ch.to_uppercase());
        } else {
            clean.push(ch);
        }
        last_not_letter = false;
    }

    if clean.is_empty() {
        FALLBACK_FEATURE.to_string()
    } else {
        clean
    }
}

pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Replace nested-type separators so the name stays a plain dotted identifier.
pub fn normalize_nested_name(name: &str) -> Cow<'_, str> {
    if name.contains('$') {
        Cow::Owned(name.replace('$', "_"))
    } else {
        Cow::Borrowed(name)
    }
}
