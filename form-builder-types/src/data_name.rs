/// Derive the machine-readable data name of a field from its label.
///
/// The label is lower-cased and trimmed, every run of whitespace becomes a
/// single `_`, and everything outside `[a-z0-9_]` is dropped.
///
/// # Example
/// ```
/// use form_builder_types::derive_data_name;
///
/// assert_eq!(derive_data_name("  Home   Address! "), "home_address");
/// assert_eq!(derive_data_name("E-mail (work)"), "email_work");
/// ```
pub fn derive_data_name(label: &str) -> String {
    let lowered = label.to_lowercase();
    let mut name = String::with_capacity(lowered.len());
    let mut in_whitespace = false;

    for ch in lowered.trim().chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                name.push('_');
                in_whitespace = true;
            }
            continue;
        }
        in_whitespace = false;
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_' {
            name.push(ch);
        }
    }

    name
}

/// Check whether `name` only contains characters allowed in a data name.
pub fn is_valid_data_name(name: &str) -> bool {
    name.chars()
        .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_')
}
