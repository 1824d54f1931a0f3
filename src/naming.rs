//! Identifier normalization for generated type and member names.
//!
//! Container and field names in `appsettings.json` come straight from the
//! remote store (`employee_card`, `empnr`, `dim-1`). Every identifier the
//! generator renders goes through [`to_pascal_case`] first.

/// Convert an arbitrary identifier to PascalCase
///
/// The input is split into maximal runs of ASCII alphanumeric characters.
/// Separator runs are dropped, the first character of each word is uppercased
/// and the rest of the word is left as-is, so embedded capitals survive.
///
/// Empty input is returned unchanged. Callers holding an optional name map it
/// through (`name.map(to_pascal_case)`), which leaves `None` untouched.
///
/// # Example
///
/// ```rust
/// use voldelig::naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("employee_card"), "EmployeeCard");
/// assert_eq!(to_pascal_case("job-costLine"), "JobCostLine");
/// assert_eq!(to_pascal_case(""), "");
/// ```
#[must_use]
pub fn to_pascal_case(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }
    input
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(capitalize)
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Render a PascalCase identifier the way serde's `SCREAMING_SNAKE_CASE`
/// rename rule does for enum variants.
pub(crate) fn to_screaming_snake_case(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 4);
    for (i, ch) in ident.char_indices() {
        if i > 0 && ch.is_uppercase() {
            out.push('_');
        }
        out.push(ch.to_ascii_uppercase());
    }
    out
}
