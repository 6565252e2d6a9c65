//! Recursive stringifier for [`Value`].

use time::OffsetDateTime;
use time::format_description::FormatItem;
use time::macros::format_description;

use super::{Collection, Object, Structured, Value};

const UNSERIALIZABLE_PLACEHOLDER: &str = "*UNSERIALIZABLE*";

/// Extended ISO-8601 with milliseconds and a `+HH:MM` offset.
const DATE_TIME_FORMAT: &[FormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3][offset_hour sign:mandatory]:[offset_minute]"
);

/// Renders `value` as log text.
///
/// `depth` is the indentation level used when the value is a multi-entry
/// collection: entries are indented by `depth` tabs and the closing bracket
/// by `depth - 1`. Top-level callers pass `1`.
///
/// ```
/// use logging::{Collection, Value, format_value};
///
/// assert_eq!(format_value(&Value::Null, 1), "null");
/// assert_eq!(format_value(&Value::list(["x"]), 1), "[x]");
///
/// let pair = Collection::new().with("a", 1).with("b", 2);
/// assert_eq!(format_value(&pair.into(), 1), "[\n\t\"a\" => 1\n\t\"b\" => 2\n]");
/// ```
#[must_use]
pub fn format_value(value: &Value, depth: usize) -> String {
    match value {
        Value::Resource(resource) => format!("resource({})", resource.kind()),
        Value::Object(object) => format_object(object),
        Value::Null => "null".to_owned(),
        Value::Bool(flag) => flag.to_string(),
        Value::Collection(collection) => format_collection(collection, depth),
        Value::Int(number) => number.to_string(),
        Value::UInt(number) => number.to_string(),
        Value::Float(number) => format_float(*number),
        Value::String(text) => text.clone(),
    }
}

fn format_object(object: &Object) -> String {
    match object {
        Object::DateTime(at) => format_date_time(*at),
        Object::Interval(interval) => interval.to_string(),
        Object::Renderable(value) => value.render(),
        Object::Structured(structured) => format_structured(structured),
    }
}

fn format_date_time(at: OffsetDateTime) -> String {
    at.format(DATE_TIME_FORMAT)
        .unwrap_or_else(|_| at.to_string())
}

fn format_structured(structured: &Structured) -> String {
    // Captured trees are already depth bounded.
    let body = structured
        .fields()
        .and_then(|fields| serde_json::to_string(fields).ok())
        .unwrap_or_else(|| UNSERIALIZABLE_PLACEHOLDER.to_owned());
    format!("{}({body})", structured.type_name())
}

fn format_collection(collection: &Collection, depth: usize) -> String {
    if collection.is_empty() {
        return "[]".to_owned();
    }
    if let Some(only) = collection.single_positional() {
        return format!("[{}]", format_value(only, depth));
    }

    let indent = "\t".repeat(depth);
    let mut out = String::from("[\n");
    for (key, value) in collection.iter() {
        out.push_str(&indent);
        out.push_str(&key.to_string());
        out.push_str(" => ");
        out.push_str(&format_value(value, depth + 1));
        out.push('\n');
    }
    out.push_str(&"\t".repeat(depth.saturating_sub(1)));
    out.push(']');
    out
}

fn format_float(number: f64) -> String {
    if number.is_nan() {
        "NAN".to_owned()
    } else if number.is_infinite() {
        if number.is_sign_negative() { "-INF" } else { "INF" }.to_owned()
    } else {
        number.to_string()
    }
}
