use crate::form::modes::FieldSpec;

/// Builtin suggestions for a field, extended with configured extras.
/// Order is preserved; earlier entries win the prefix match.
pub fn candidates(field: &FieldSpec, extras: &[String]) -> Vec<String> {
    let mut list: Vec<String> = field.suggestions.iter().map(|s| s.to_string()).collect();
    for extra in extras {
        if !list.iter().any(|existing| existing == extra) {
            list.push(extra.clone());
        }
    }
    list
}

/// First candidate whose prefix matches the typed input, case-insensitive.
/// Empty input yields nothing.
pub fn best_match<'a>(candidates: &'a [String], input: &str) -> Option<&'a str> {
    if input.is_empty() {
        return None;
    }
    let needle = input.to_lowercase();
    candidates
        .iter()
        .find(|candidate| candidate.to_lowercase().starts_with(&needle))
        .map(String::as_str)
}
