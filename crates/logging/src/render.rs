//! crates/logging/src/render.rs
//! Placeholder substitution for message templates.

use crate::context::Context;
use crate::value::format_value;

/// Returns the placeholder token a context key substitutes.
///
/// Keys are wrapped in braces unless they already contain `{` or `}`, in
/// which case the caller has spelled out the exact token.
///
/// ```
/// use logging::placeholder_token;
///
/// assert_eq!(placeholder_token("name"), "{name}");
/// assert_eq!(placeholder_token("na{me"), "na{me");
/// ```
#[must_use]
pub fn placeholder_token(key: &str) -> String {
    if key.contains(['{', '}']) {
        key.to_owned()
    } else {
        format!("{{{key}}}")
    }
}

/// Substitutes every context entry into `template` in a single pass.
///
/// Scanning runs left to right; at each position the longest matching token
/// wins and the scan resumes after it, so replacement text is never scanned
/// again. Tokens that do not occur are ignored and unmatched braces stay in
/// place.
///
/// ```
/// use logging::{Context, render_message};
///
/// let context = Context::new().with("name", "World");
/// assert_eq!(render_message("Hello {name}", &context), "Hello World");
/// ```
#[must_use]
pub fn render_message(template: &str, context: &Context) -> String {
    let mut replacements: Vec<(String, String)> = Vec::with_capacity(context.len());
    for (key, value) in context.iter() {
        let token = placeholder_token(key);
        let text = format_value(value, 1);
        if let Some(slot) = replacements.iter_mut().find(|(existing, _)| *existing == token) {
            slot.1 = text;
        } else {
            replacements.push((token, text));
        }
    }
    if replacements.is_empty() {
        return template.to_owned();
    }
    // Stable sort: among equal lengths the earlier context entry is tried first.
    replacements.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(next) = rest.chars().next() {
        if let Some((token, text)) = replacements
            .iter()
            .find(|(token, _)| rest.starts_with(token.as_str()))
        {
            out.push_str(text);
            rest = &rest[token.len()..];
        } else {
            out.push(next);
            rest = &rest[next.len_utf8()..];
        }
    }
    out
}
