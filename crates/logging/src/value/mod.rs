//! crates/logging/src/value/mod.rs
//! Context values interpolated into log messages.
//!
//! [`Value`] is the closed set of shapes a context entry can take. The
//! formatter in [`format`] dispatches over it with an exhaustive match, so
//! adding a variant forces every rendering path to handle it.

mod bounded;
mod collection;
mod format;
mod interval;
mod object;

pub use collection::{Collection, Key};
pub use bounded::MAX_STRUCTURE_DEPTH;
pub use format::format_value;
pub use interval::Interval;
pub use object::{Object, Renderable, Resource, Structured};

use std::collections::BTreeMap;

use time::OffsetDateTime;

/// A single context value.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    /// Absence of a value.
    #[default]
    Null,
    /// A boolean flag.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// An unsigned integer too large for [`Value::Int`] or naturally unsigned.
    UInt(u64),
    /// A floating point number.
    Float(f64),
    /// Text.
    String(String),
    /// An opaque handle to an external resource such as an open stream.
    Resource(Resource),
    /// An object: a point in time, an interval, a renderable value, or a
    /// structure captured through `serde`.
    Object(Object),
    /// An ordered collection keyed by integers or strings.
    Collection(Collection),
}

impl Value {
    /// Captures any `serde` serializable value as a structured object.
    ///
    /// ```
    /// use logging::{Value, format_value};
    ///
    /// #[derive(serde::Serialize)]
    /// struct Point {
    ///     x: i32,
    ///     y: i32,
    /// }
    ///
    /// let value = Value::structured(&Point { x: 1, y: 2 });
    /// assert_eq!(format_value(&value, 1), r#"Point({"x":1,"y":2})"#);
    /// ```
    #[must_use]
    pub fn structured<T>(value: &T) -> Self
    where
        T: serde::Serialize + ?Sized,
    {
        Self::Object(Object::Structured(Structured::capture(value)))
    }

    /// Wraps a value implementing [`Renderable`].
    #[must_use]
    pub fn renderable<R>(value: R) -> Self
    where
        R: Renderable + 'static,
    {
        Self::Object(Object::renderable(value))
    }

    /// Wraps a value whose [`Display`](std::fmt::Display) output is its log text.
    #[must_use]
    pub fn display<T>(value: T) -> Self
    where
        T: std::fmt::Display + Send + Sync + 'static,
    {
        Self::Object(Object::display(value))
    }

    /// Creates a resource handle of the given kind.
    #[must_use]
    pub fn resource(kind: impl Into<String>) -> Self {
        Self::Resource(Resource::new(kind))
    }

    /// Builds an integer-keyed list.
    #[must_use]
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Self>,
    {
        Self::Collection(Collection::list(items))
    }

    /// Reports whether the value is [`Value::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Renders the value at the top indentation level.
    #[must_use]
    pub fn to_log_string(&self) -> String {
        format_value(self, 1)
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::UInt(u64::from(value))
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

impl From<isize> for Value {
    fn from(value: isize) -> Self {
        Self::Int(value as i64)
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Self::UInt(value as u64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        // Widening through the shortest decimal keeps 0.1f32 as 0.1.
        let widened = value.to_string().parse().unwrap_or(f64::from(value));
        Self::Float(widened)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Self::String(value.to_string())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl From<OffsetDateTime> for Value {
    fn from(value: OffsetDateTime) -> Self {
        Self::Object(Object::DateTime(value))
    }
}

impl From<Interval> for Value {
    fn from(value: Interval) -> Self {
        Self::Object(Object::Interval(value))
    }
}

impl From<Resource> for Value {
    fn from(value: Resource) -> Self {
        Self::Resource(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Self::Object(value)
    }
}

impl From<Collection> for Value {
    fn from(value: Collection) -> Self {
        Self::Collection(value)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Self>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T> From<Vec<T>> for Value
where
    T: Into<Self>,
{
    fn from(items: Vec<T>) -> Self {
        Self::list(items)
    }
}

impl<K, V> From<BTreeMap<K, V>> for Value
where
    K: Into<Key>,
    V: Into<Self>,
{
    fn from(map: BTreeMap<K, V>) -> Self {
        Self::Collection(map.into_iter().collect())
    }
}
