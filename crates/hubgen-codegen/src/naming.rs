//! Identifier resolution: free-text labels to legal symbol names.
//!
//! Device labels, room names, and attribute names are arbitrary human text.
//! [`identifier`] maps any label to a legal TypeScript symbol, and is pure:
//! the same label always yields the same name, which the cross-module
//! reference tables depend on. Uniqueness is *not* guaranteed here; that is
//! the naming context's job.

use std::cmp::Ordering;

/// Resolve a label to a PascalCase type name.
///
/// Steps: strip apostrophes, transliterate to ASCII, lowercase, split on runs
/// of characters outside `[a-zA-Z0-9_$]`, capitalize each segment's first
/// letter, concatenate, and `$`-prefix a leading digit.
///
/// # Examples
///
/// ```
/// use hubgen_codegen::naming::identifier;
///
/// assert_eq!(identifier("Porch Light"), "PorchLight");
/// assert_eq!(identifier("Mike's Room"), "MikesRoom");
/// assert_eq!(identifier("3rd Floor"), "$3rdFloor");
/// assert_eq!(identifier("Light_a1"), "Light_a1");
/// ```
pub fn identifier(label: &str) -> String {
    let ascii = deunicode::deunicode(&label.replace('\'', ""));
    let lower = ascii.to_lowercase();

    let mut result = String::new();
    let mut segment_start = true;
    for ch in lower.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' || ch == '$' {
            if segment_start {
                result.extend(ch.to_uppercase());
                segment_start = false;
            } else {
                result.push(ch);
            }
        } else {
            segment_start = true;
        }
    }

    if result.starts_with(|c: char| c.is_ascii_digit()) {
        result.insert(0, '$');
    }
    result
}

/// The value/method-name variant of [`identifier`]: same name with the first
/// letter lowered.
///
/// ```
/// use hubgen_codegen::naming::identifier_lower;
///
/// assert_eq!(identifier_lower("Porch Light"), "porchLight");
/// ```
pub fn identifier_lower(label: &str) -> String {
    lower_first(&identifier(label))
}

/// Lower-case the first character, leaving the rest untouched.
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    }
}

/// Order two raw ids by their resolved identifiers. Used wherever nested
/// collections must be emitted in identifier order.
pub fn compare_identifiers(a: &str, b: &str) -> Ordering {
    identifier(a).cmp(&identifier(b))
}

/// Case-insensitive human ordering for labels, with the raw label as a
/// deterministic tie-break.
pub fn label_sort_key(label: &str) -> (String, String) {
    (label.to_lowercase(), label.to_string())
}

#[cfg(test)]
#[path = "naming/naming_tests.rs"]
mod naming_tests;
