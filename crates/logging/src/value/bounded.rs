//! Depth-bounded conversion of `Serialize` values into a JSON tree.
//!
//! The serializer tracks how deeply it is nested while the value is still
//! being walked. Containers at [`MAX_STRUCTURE_DEPTH`] become `"*DEPTH*"`
//! and their children are never visited, so a value whose `Serialize`
//! implementation follows a reference cycle still terminates.

use serde::ser::{self, Serialize, Serializer as _};
use serde_json::value::Serializer as JsonSerializer;
use serde_json::{Error, Map, Value as Json};

/// Nesting depth past which structured fields are replaced by a placeholder.
pub const MAX_STRUCTURE_DEPTH: usize = 32;

/// Limit on nested serializer calls of any kind, wrappers included.
const MAX_HOPS: usize = MAX_STRUCTURE_DEPTH * 4;

pub(super) const DEPTH_PLACEHOLDER: &str = "*DEPTH*";

/// Serializes `value` into an owned JSON tree, truncating deep nesting.
pub(super) fn to_bounded_value<T>(value: &T) -> Result<Json, Error>
where
    T: Serialize + ?Sized,
{
    value.serialize(BoundedSerializer::default())
}

fn depth_marker() -> Json {
    Json::String(DEPTH_PLACEHOLDER.to_owned())
}

fn key_text(key: Json) -> Result<String, Error> {
    match key {
        Json::String(text) => Ok(text),
        Json::Number(number) => Ok(number.to_string()),
        Json::Bool(flag) => Ok(flag.to_string()),
        _ => Err(ser::Error::custom("map key must be a string, number or boolean")),
    }
}

/// Position of a value in the tree being built.
///
/// `depth` counts JSON containers only. `hops` also counts transparent
/// wrappers such as `Some` and newtype structs, which add no nesting to the
/// output but still recurse.
#[derive(Clone, Copy, Debug, Default)]
struct BoundedSerializer {
    depth: usize,
    hops: usize,
}

impl BoundedSerializer {
    const fn exhausted(self) -> bool {
        self.depth >= MAX_STRUCTURE_DEPTH || self.hops >= MAX_HOPS
    }

    const fn nested(self) -> Self {
        Self {
            depth: self.depth + 1,
            hops: self.hops + 1,
        }
    }

    const fn transparent(self) -> Self {
        Self {
            depth: self.depth,
            hops: self.hops + 1,
        }
    }

    fn wrap<T>(self, value: &T) -> Result<Json, Error>
    where
        T: Serialize + ?Sized,
    {
        if self.hops >= MAX_HOPS {
            return Ok(depth_marker());
        }
        value.serialize(self.transparent())
    }

    fn variant<T>(self, variant: &'static str, value: &T) -> Result<Json, Error>
    where
        T: Serialize + ?Sized,
    {
        if self.exhausted() {
            return Ok(depth_marker());
        }
        let mut wrapper = Map::new();
        wrapper.insert(variant.to_owned(), value.serialize(self.nested())?);
        Ok(Json::Object(wrapper))
    }
}

enum Body {
    Seq(Vec<Json>),
    Map {
        entries: Map<String, Json>,
        pending_key: Option<String>,
    },
}

/// Container under construction.
///
/// `children` is `None` once the container sits at the depth limit; its
/// elements are then dropped unvisited and it renders as the placeholder.
struct Compound {
    children: Option<BoundedSerializer>,
    variant: Option<&'static str>,
    body: Body,
}

impl Compound {
    fn open(at: BoundedSerializer, variant: Option<&'static str>, body: Body) -> Self {
        // An enum variant wraps its body in a one-entry object, one level up.
        let (wrapper_truncated, container) = match variant {
            Some(_) => (at.exhausted(), at.nested()),
            None => (false, at),
        };
        let children = (!wrapper_truncated && !container.exhausted()).then(|| container.nested());
        Self {
            children,
            variant: variant.filter(|_| !wrapper_truncated),
            body,
        }
    }

    fn seq(at: BoundedSerializer, variant: Option<&'static str>, len: Option<usize>) -> Self {
        Self::open(at, variant, Body::Seq(Vec::with_capacity(len.unwrap_or(0))))
    }

    fn map(at: BoundedSerializer, variant: Option<&'static str>) -> Self {
        Self::open(
            at,
            variant,
            Body::Map {
                entries: Map::new(),
                pending_key: None,
            },
        )
    }

    fn element<T>(&mut self, value: &T) -> Result<(), Error>
    where
        T: Serialize + ?Sized,
    {
        let Some(children) = self.children else {
            return Ok(());
        };
        let item = value.serialize(children)?;
        if let Body::Seq(items) = &mut self.body {
            items.push(item);
        }
        Ok(())
    }

    fn key<T>(&mut self, key: &T) -> Result<(), Error>
    where
        T: Serialize + ?Sized,
    {
        let Some(children) = self.children else {
            return Ok(());
        };
        let text = key_text(key.serialize(children)?)?;
        if let Body::Map { pending_key, .. } = &mut self.body {
            *pending_key = Some(text);
        }
        Ok(())
    }

    fn value<T>(&mut self, value: &T) -> Result<(), Error>
    where
        T: Serialize + ?Sized,
    {
        let Some(children) = self.children else {
            return Ok(());
        };
        let item = value.serialize(children)?;
        if let Body::Map {
            entries,
            pending_key,
        } = &mut self.body
        {
            let key = pending_key
                .take()
                .ok_or_else(|| <Error as ser::Error>::custom("map value without a key"))?;
            entries.insert(key, item);
        }
        Ok(())
    }

    fn field<T>(&mut self, key: &'static str, value: &T) -> Result<(), Error>
    where
        T: Serialize + ?Sized,
    {
        let Some(children) = self.children else {
            return Ok(());
        };
        let item = value.serialize(children)?;
        if let Body::Map { entries, .. } = &mut self.body {
            entries.insert(key.to_owned(), item);
        }
        Ok(())
    }

    fn finish(self) -> Json {
        let body = match (self.children, self.body) {
            (None, _) => depth_marker(),
            (Some(_), Body::Seq(items)) => Json::Array(items),
            (Some(_), Body::Map { entries, .. }) => Json::Object(entries),
        };
        match self.variant {
            Some(name) => {
                let mut wrapper = Map::new();
                wrapper.insert(name.to_owned(), body);
                Json::Object(wrapper)
            }
            None => body,
        }
    }
}

impl ser::Serializer for BoundedSerializer {
    type Ok = Json;
    type Error = Error;
    type SerializeSeq = Compound;
    type SerializeTuple = Compound;
    type SerializeTupleStruct = Compound;
    type SerializeTupleVariant = Compound;
    type SerializeMap = Compound;
    type SerializeStruct = Compound;
    type SerializeStructVariant = Compound;

    fn serialize_bool(self, v: bool) -> Result<Json, Error> {
        JsonSerializer.serialize_bool(v)
    }

    fn serialize_i8(self, v: i8) -> Result<Json, Error> {
        JsonSerializer.serialize_i8(v)
    }

    fn serialize_i16(self, v: i16) -> Result<Json, Error> {
        JsonSerializer.serialize_i16(v)
    }

    fn serialize_i32(self, v: i32) -> Result<Json, Error> {
        JsonSerializer.serialize_i32(v)
    }

    fn serialize_i64(self, v: i64) -> Result<Json, Error> {
        JsonSerializer.serialize_i64(v)
    }

    fn serialize_i128(self, v: i128) -> Result<Json, Error> {
        JsonSerializer.serialize_i128(v)
    }

    fn serialize_u8(self, v: u8) -> Result<Json, Error> {
        JsonSerializer.serialize_u8(v)
    }

    fn serialize_u16(self, v: u16) -> Result<Json, Error> {
        JsonSerializer.serialize_u16(v)
    }

    fn serialize_u32(self, v: u32) -> Result<Json, Error> {
        JsonSerializer.serialize_u32(v)
    }

    fn serialize_u64(self, v: u64) -> Result<Json, Error> {
        JsonSerializer.serialize_u64(v)
    }

    fn serialize_u128(self, v: u128) -> Result<Json, Error> {
        JsonSerializer.serialize_u128(v)
    }

    fn serialize_f32(self, v: f32) -> Result<Json, Error> {
        JsonSerializer.serialize_f32(v)
    }

    fn serialize_f64(self, v: f64) -> Result<Json, Error> {
        JsonSerializer.serialize_f64(v)
    }

    fn serialize_char(self, v: char) -> Result<Json, Error> {
        JsonSerializer.serialize_char(v)
    }

    fn serialize_str(self, v: &str) -> Result<Json, Error> {
        JsonSerializer.serialize_str(v)
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Json, Error> {
        JsonSerializer.serialize_bytes(v)
    }

    fn serialize_none(self) -> Result<Json, Error> {
        Ok(Json::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Json, Error>
    where
        T: Serialize + ?Sized,
    {
        self.wrap(value)
    }

    fn serialize_unit(self) -> Result<Json, Error> {
        Ok(Json::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Json, Error> {
        Ok(Json::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Json, Error> {
        Ok(Json::String(variant.to_owned()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Json, Error>
    where
        T: Serialize + ?Sized,
    {
        self.wrap(value)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Json, Error>
    where
        T: Serialize + ?Sized,
    {
        self.variant(variant, value)
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<Compound, Error> {
        Ok(Compound::seq(self, None, len))
    }

    fn serialize_tuple(self, len: usize) -> Result<Compound, Error> {
        Ok(Compound::seq(self, None, Some(len)))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<Compound, Error> {
        Ok(Compound::seq(self, None, Some(len)))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<Compound, Error> {
        Ok(Compound::seq(self, Some(variant), Some(len)))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Compound, Error> {
        Ok(Compound::map(self, None))
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Compound, Error> {
        Ok(Compound::map(self, None))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Compound, Error> {
        Ok(Compound::map(self, Some(variant)))
    }
}

impl ser::SerializeSeq for Compound {
    type Ok = Json;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<(), Error>
    where
        T: Serialize + ?Sized,
    {
        self.element(value)
    }

    fn end(self) -> Result<Json, Error> {
        Ok(self.finish())
    }
}

impl ser::SerializeTuple for Compound {
    type Ok = Json;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<(), Error>
    where
        T: Serialize + ?Sized,
    {
        self.element(value)
    }

    fn end(self) -> Result<Json, Error> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleStruct for Compound {
    type Ok = Json;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<(), Error>
    where
        T: Serialize + ?Sized,
    {
        self.element(value)
    }

    fn end(self) -> Result<Json, Error> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleVariant for Compound {
    type Ok = Json;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<(), Error>
    where
        T: Serialize + ?Sized,
    {
        self.element(value)
    }

    fn end(self) -> Result<Json, Error> {
        Ok(self.finish())
    }
}

impl ser::SerializeMap for Compound {
    type Ok = Json;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<(), Error>
    where
        T: Serialize + ?Sized,
    {
        self.key(key)
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<(), Error>
    where
        T: Serialize + ?Sized,
    {
        self.value(value)
    }

    fn end(self) -> Result<Json, Error> {
        Ok(self.finish())
    }
}

impl ser::SerializeStruct for Compound {
    type Ok = Json;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<(), Error>
    where
        T: Serialize + ?Sized,
    {
        self.field(key, value)
    }

    fn end(self) -> Result<Json, Error> {
        Ok(self.finish())
    }
}

impl ser::SerializeStructVariant for Compound {
    type Ok = Json;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<(), Error>
    where
        T: Serialize + ?Sized,
    {
        self.field(key, value)
    }

    fn end(self) -> Result<Json, Error> {
        Ok(self.finish())
    }
}
