//! Input key to Go field identifier conversion.

use std::collections::BTreeMap;

/// Convert a key to PascalCase.
///
/// `_`, `-`, `.` and spaces separate words and are dropped; digits are kept
/// and start a new word. Letters that are already upper case stay upper
/// case, so `myKey` becomes `MyKey` and `HTTP_URL` becomes `HTTPURL`. Any
/// other character is dropped.
pub fn to_camel(key: &str) -> String {
    let key = key.trim();
    let mut out = String::with_capacity(key.len());
    let mut cap_next = true;

    for c in key.chars() {
        if c.is_ascii_alphabetic() {
            out.push(if cap_next { c.to_ascii_uppercase() } else { c });
            cap_next = false;
        } else if c.is_ascii_digit() {
            out.push(c);
            cap_next = true;
        } else {
            cap_next = matches!(c, '_' | '-' | '.' | ' ');
        }
    }

    out
}

/// Lower-case the first character, leaving the rest untouched.
///
/// Strings of zero or one character are lower-cased entirely.
pub fn first_lower(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) if chars.as_str().is_empty() => first.to_lowercase().collect(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    }
}

/// Field identifier for an input key: camelCase with a lower-case head.
pub fn field_identifier(key: &str) -> String {
    first_lower(&to_camel(key))
}

/// Whether `ident` can stand as a Go field name.
///
/// Conversion only emits ASCII letters and digits, so this fails for an
/// empty result (a key of only separators or symbols) or a leading digit.
pub fn is_usable_identifier(ident: &str) -> bool {
    ident
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
}

/// Identifiers produced by more than one key, with the colliding keys.
///
/// The generator still emits every field; this only exists so a collision
/// can be reported.
pub fn duplicate_identifiers<'a, I>(keys: I) -> BTreeMap<String, Vec<&'a str>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut by_ident: BTreeMap<String, Vec<&'a str>> = BTreeMap::new();
    for key in keys {
        by_ident.entry(field_identifier(key)).or_default().push(key);
    }
    by_ident.retain(|_, keys| keys.len() > 1);
    by_ident
}
