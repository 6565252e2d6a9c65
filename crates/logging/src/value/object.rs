use std::fmt;
use std::sync::Arc;

use time::OffsetDateTime;

use super::Interval;
use super::bounded::to_bounded_value;

/// Values that know how to present themselves in a log line.
///
/// Implement this for domain types whose log text should differ from a field
/// dump. The formatter calls [`render`](Self::render) verbatim.
pub trait Renderable: Send + Sync {
    /// Returns the text written in place of the value.
    fn render(&self) -> String;
}

struct DisplayRenderable<T>(T);

impl<T> Renderable for DisplayRenderable<T>
where
    T: fmt::Display + Send + Sync,
{
    fn render(&self) -> String {
        self.0.to_string()
    }
}

/// Opaque handle to something outside the process, such as a stream or a
/// socket. Only its kind is rendered.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Resource {
    kind: String,
}

impl Resource {
    /// Creates a handle of the given kind.
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }

    /// Returns the handle kind.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }
}

/// Object captured field-by-field through `serde`.
#[derive(Clone, Debug, PartialEq)]
pub struct Structured {
    type_name: String,
    fields: Option<serde_json::Value>,
}

impl Structured {
    /// Serializes `value` into a detached field tree.
    ///
    /// Nesting is cut off at [`MAX_STRUCTURE_DEPTH`](crate::MAX_STRUCTURE_DEPTH)
    /// while serializing, so values whose `Serialize` implementation follows a
    /// reference cycle are captured too. A value whose `Serialize`
    /// implementation fails is kept with no fields and renders a placeholder
    /// instead.
    #[must_use]
    pub fn capture<T>(value: &T) -> Self
    where
        T: serde::Serialize + ?Sized,
    {
        Self {
            type_name: short_type_name(std::any::type_name::<T>()),
            fields: to_bounded_value(value).ok(),
        }
    }

    /// Builds a structured object from an explicit name and field tree.
    ///
    /// The tree is cut off at the same depth as [`capture`](Self::capture).
    #[must_use]
    pub fn from_parts(type_name: impl Into<String>, fields: &serde_json::Value) -> Self {
        Self {
            type_name: type_name.into(),
            fields: to_bounded_value(fields).ok(),
        }
    }

    /// Returns the unqualified type name.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Returns the captured fields, if serialization succeeded.
    #[must_use]
    pub const fn fields(&self) -> Option<&serde_json::Value> {
        self.fields.as_ref()
    }
}

/// Object-like context values, in formatter priority order.
#[derive(Clone)]
pub enum Object {
    /// A point in time with a UTC offset.
    DateTime(OffsetDateTime),
    /// A calendar interval.
    Interval(Interval),
    /// A value providing its own log text.
    Renderable(Arc<dyn Renderable>),
    /// Any other object, rendered as its type name and serialized fields.
    Structured(Structured),
}

impl Object {
    /// Wraps a [`Renderable`] value.
    pub fn renderable<R>(value: R) -> Self
    where
        R: Renderable + 'static,
    {
        Self::Renderable(Arc::new(value))
    }

    /// Wraps a value rendered through its `Display` implementation.
    pub fn display<T>(value: T) -> Self
    where
        T: fmt::Display + Send + Sync + 'static,
    {
        Self::renderable(DisplayRenderable(value))
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DateTime(at) => f.debug_tuple("DateTime").field(at).finish(),
            Self::Interval(interval) => f.debug_tuple("Interval").field(interval).finish(),
            Self::Renderable(value) => f.debug_tuple("Renderable").field(&value.render()).finish(),
            Self::Structured(structured) => f.debug_tuple("Structured").field(structured).finish(),
        }
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::DateTime(a), Self::DateTime(b)) => a == b,
            (Self::Interval(a), Self::Interval(b)) => a == b,
            (Self::Renderable(a), Self::Renderable(b)) => Arc::ptr_eq(a, b),
            (Self::Structured(a), Self::Structured(b)) => a == b,
            _ => false,
        }
    }
}

/// Drops module paths from a type name while keeping generic arguments.
fn short_type_name(full: &str) -> String {
    let (head, generics) = full.find('<').map_or((full, ""), |at| full.split_at(at));
    let base = head.rsplit("::").next().unwrap_or(head);
    format!("{base}{generics}")
}
