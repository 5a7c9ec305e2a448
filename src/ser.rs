//! Conversion of serde-serializable data into raw cells.
//!
//! [`RawValueSerializer`] maps the serde data model onto [`RawValue`]:
//!
//! - integers, floats, bools, chars and strings become the matching scalar;
//! - `None` and unit values become [`RawValue::Null`];
//! - sequences and tuples become [`RawValue::List`];
//! - structs and maps become an insertion-ordered [`RawValue::Map`];
//! - a newtype variant becomes a one-entry map keyed by the variant name.
//!
//! Types serde renders as strings (chrono datetimes among them) arrive as
//! [`RawValue::String`]; give their column a `TypeHint::DateTime` to have
//! them written as datetimes again.
//!
//! ```rust
//! use js_tablewriter::{to_raw_value, RawValue};
//!
//! let value = to_raw_value(&(1, "a", None::<bool>)).unwrap();
//! assert_eq!(
//!     value,
//!     RawValue::List(vec![RawValue::Integer(1), RawValue::from("a"), RawValue::Null])
//! );
//! ```

use crate::{Error, RawValue, Result};
use indexmap::IndexMap;
use serde::{ser, Serialize};

/// Convert any `T: Serialize` to a [`RawValue`].
///
/// # Errors
///
/// Returns an error for tuple and struct enum variants, and for map keys
/// that are not scalars.
pub fn to_raw_value<T>(value: &T) -> Result<RawValue>
where
    T: ?Sized + Serialize,
{
    value.serialize(RawValueSerializer)
}

/// Serializer producing [`RawValue`] trees.
pub struct RawValueSerializer;

pub struct SerializeVec {
    vec: Vec<RawValue>,
}

pub struct SerializeMap {
    map: IndexMap<String, RawValue>,
    current_key: Option<String>,
}

impl ser::Serializer for RawValueSerializer {
    type Ok = RawValue;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = ser::Impossible<RawValue, Error>;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = ser::Impossible<RawValue, Error>;

    fn serialize_bool(self, v: bool) -> Result<RawValue> {
        Ok(RawValue::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<RawValue> {
        Ok(RawValue::Integer(v as i64))
    }

    fn serialize_i16(self, v: i16) -> Result<RawValue> {
        Ok(RawValue::Integer(v as i64))
    }

    fn serialize_i32(self, v: i32) -> Result<RawValue> {
        Ok(RawValue::Integer(v as i64))
    }

    fn serialize_i64(self, v: i64) -> Result<RawValue> {
        Ok(RawValue::Integer(v))
    }

    fn serialize_u8(self, v: u8) -> Result<RawValue> {
        Ok(RawValue::Integer(v as i64))
    }

    fn serialize_u16(self, v: u16) -> Result<RawValue> {
        Ok(RawValue::Integer(v as i64))
    }

    fn serialize_u32(self, v: u32) -> Result<RawValue> {
        Ok(RawValue::Integer(v as i64))
    }

    fn serialize_u64(self, v: u64) -> Result<RawValue> {
        Ok(RawValue::from(v))
    }

    fn serialize_f32(self, v: f32) -> Result<RawValue> {
        Ok(RawValue::Float(v as f64))
    }

    fn serialize_f64(self, v: f64) -> Result<RawValue> {
        Ok(RawValue::Float(v))
    }

    fn serialize_char(self, v: char) -> Result<RawValue> {
        Ok(RawValue::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<RawValue> {
        Ok(RawValue::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<RawValue> {
        let vec = v.iter().map(|&b| RawValue::Integer(b as i64)).collect();
        Ok(RawValue::List(vec))
    }

    fn serialize_none(self) -> Result<RawValue> {
        Ok(RawValue::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<RawValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<RawValue> {
        Ok(RawValue::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<RawValue> {
        Ok(RawValue::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<RawValue> {
        Ok(RawValue::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<RawValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<RawValue>
    where
        T: ?Sized + Serialize,
    {
        let mut map = IndexMap::with_capacity(1);
        map.insert(variant.to_string(), to_raw_value(value)?);
        Ok(RawValue::Map(map))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::with_capacity(len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::with_capacity(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::with_capacity(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::unsupported_type(&format!("tuple variant {}", variant)))
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::with_capacity(len.unwrap_or(0)))
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::with_capacity(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::unsupported_type(&format!("struct variant {}", variant)))
    }
}

impl SerializeVec {
    fn with_capacity(capacity: usize) -> Self {
        SerializeVec {
            vec: Vec::with_capacity(capacity),
        }
    }
}

impl SerializeMap {
    fn with_capacity(capacity: usize) -> Self {
        SerializeMap {
            map: IndexMap::with_capacity(capacity),
            current_key: None,
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = RawValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_raw_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<RawValue> {
        Ok(RawValue::List(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = RawValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_raw_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<RawValue> {
        Ok(RawValue::List(self.vec))
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = RawValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_raw_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<RawValue> {
        Ok(RawValue::List(self.vec))
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = RawValue;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = match to_raw_value(key)? {
            RawValue::String(s) => s,
            scalar @ (RawValue::Integer(_) | RawValue::Bool(_) | RawValue::Float(_)) => {
                scalar.to_string()
            }
            _ => return Err(Error::custom("Map keys must be strings or scalars")),
        };
        self.current_key = Some(key);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, to_raw_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<RawValue> {
        Ok(RawValue::Map(self.map))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = RawValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_raw_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<RawValue> {
        Ok(RawValue::Map(self.map))
    }
}
