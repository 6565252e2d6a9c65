use std::fmt;

use super::Value;

/// Key of a [`Collection`] entry.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Key {
    /// Positional key, rendered bare.
    Index(i64),
    /// Named key, rendered in double quotes.
    Name(String),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Name(name) => write!(f, "\"{name}\""),
        }
    }
}

impl From<i64> for Key {
    fn from(index: i64) -> Self {
        Self::Index(index)
    }
}

impl From<i32> for Key {
    fn from(index: i32) -> Self {
        Self::Index(i64::from(index))
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Self::Index(index as i64)
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

/// Insertion-ordered collection mixing integer and string keys.
///
/// Keys are unique: inserting an existing key replaces its value in place and
/// keeps the original position. [`push`](Self::push) appends under the next
/// free integer key, one past the largest integer key seen so far.
///
/// ```
/// use logging::{Collection, Key, Value};
///
/// let mut tags = Collection::new();
/// tags.push("first");
/// tags.insert("owner", "ops");
/// tags.push("second");
///
/// let keys: Vec<_> = tags.iter().map(|(key, _)| key.clone()).collect();
/// assert_eq!(keys, [Key::Index(0), Key::from("owner"), Key::Index(1)]);
/// assert_eq!(tags.get(&Key::Index(1)), Some(&Value::from("second")));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Collection {
    entries: Vec<(Key, Value)>,
    next_index: i64,
}

impl Collection {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_index: 0,
        }
    }

    /// Builds a list keyed `0..n`.
    #[must_use]
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        let mut collection = Self::new();
        for item in items {
            collection.push(item);
        }
        collection
    }

    /// Appends `value` under the next free integer key.
    pub fn push(&mut self, value: impl Into<Value>) {
        self.insert(Key::Index(self.next_index), value);
    }

    /// Inserts or replaces the entry stored under `key`.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        if let Key::Index(index) = key {
            self.next_index = self.next_index.max(index.saturating_add(1));
        }
        if let Some(slot) = self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            slot.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Reports whether the collection has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    /// Returns the sole element when the collection is exactly `[0 => value]`.
    pub(crate) fn single_positional(&self) -> Option<&Value> {
        match self.entries.as_slice() {
            [(Key::Index(0), value)] => Some(value),
            _ => None,
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Collection
where
    K: Into<Key>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut collection = Self::new();
        collection.extend(iter);
        collection
    }
}

impl<K, V> Extend<(K, V)> for Collection
where
    K: Into<Key>,
    V: Into<Value>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}
