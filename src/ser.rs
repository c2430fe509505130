//! Conversion of any [`Serialize`] type into a [`Value`], and from there
//! into XML.
//!
//! Structs and maps become mappings, sequences, tuples and byte strings
//! become sequences. Enum variants follow the externally tagged layout: a
//! unit variant is its name as text, any other variant is a mapping with
//! the variant name as its single key.

use serde::ser::{self, Serialize};

use crate::document::Options;
use crate::error::Error;
use crate::value::{Map, Value};

/// Serialize `value` to UTF-8 encoded XML with default [`Options`].
///
/// ```rust
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let xml = dictxml::to_xml(&Point { x: 1, y: 2 })?;
/// assert_eq!(
///     xml,
///     br#"<?xml version="1.0" encoding="UTF-8" ?><root><x type="int">1</x><y type="int">2</y></root>"#
/// );
/// # Ok::<(), dictxml::Error>(())
/// ```
pub fn to_xml<T>(value: &T) -> Result<Vec<u8>, Error>
where
    T: Serialize + ?Sized,
{
    to_xml_with_options(value, &Options::default())
}

/// Serialize `value` to UTF-8 encoded XML.
pub fn to_xml_with_options<T>(value: &T, options: &Options) -> Result<Vec<u8>, Error>
where
    T: Serialize + ?Sized,
{
    Ok(options.render(&to_value(value)?))
}

/// Serialize `value` to an XML string with default [`Options`].
pub fn to_string<T>(value: &T) -> Result<String, Error>
where
    T: Serialize + ?Sized,
{
    Ok(Options::default().render_to_string(&to_value(value)?))
}

/// Convert `value` into a [`Value`].
///
/// Fails with [`Error::UnsupportedType`] when a map key is not text, a
/// character or an integer.
pub fn to_value<T>(value: &T) -> Result<Value, Error>
where
    T: Serialize + ?Sized,
{
    value.serialize(ValueSerializer)
}

struct ValueSerializer;

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SeqSerializer;
    type SerializeTuple = SeqSerializer;
    type SerializeTupleStruct = SeqSerializer;
    type SerializeTupleVariant = TupleVariantSerializer;
    type SerializeMap = MapSerializer;
    type SerializeStruct = MapSerializer;
    type SerializeStructVariant = StructVariantSerializer;

    fn serialize_bool(self, v: bool) -> Result<Value, Error> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value, Error> {
        Ok(v.into())
    }

    fn serialize_i16(self, v: i16) -> Result<Value, Error> {
        Ok(v.into())
    }

    fn serialize_i32(self, v: i32) -> Result<Value, Error> {
        Ok(v.into())
    }

    fn serialize_i64(self, v: i64) -> Result<Value, Error> {
        Ok(v.into())
    }

    fn serialize_i128(self, v: i128) -> Result<Value, Error> {
        Ok(v.into())
    }

    fn serialize_u8(self, v: u8) -> Result<Value, Error> {
        Ok(v.into())
    }

    fn serialize_u16(self, v: u16) -> Result<Value, Error> {
        Ok(v.into())
    }

    fn serialize_u32(self, v: u32) -> Result<Value, Error> {
        Ok(v.into())
    }

    fn serialize_u64(self, v: u64) -> Result<Value, Error> {
        Ok(v.into())
    }

    fn serialize_u128(self, v: u128) -> Result<Value, Error> {
        Ok(v.into())
    }

    fn serialize_f32(self, v: f32) -> Result<Value, Error> {
        Ok(v.into())
    }

    fn serialize_f64(self, v: f64) -> Result<Value, Error> {
        Ok(v.into())
    }

    fn serialize_char(self, v: char) -> Result<Value, Error> {
        Ok(v.into())
    }

    fn serialize_str(self, v: &str) -> Result<Value, Error> {
        Ok(v.into())
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value, Error> {
        Ok(v.iter().copied().collect())
    }

    fn serialize_none(self) -> Result<Value, Error> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value, Error>
    where
        T: Serialize + ?Sized,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value, Error> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value, Error> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value, Error> {
        Ok(variant.into())
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value, Error>
    where
        T: Serialize + ?Sized,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value, Error>
    where
        T: Serialize + ?Sized,
    {
        let mut map = Map::with_capacity(1);
        map.insert(variant.to_string(), to_value(value)?);
        Ok(Value::Mapping(map))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SeqSerializer, Error> {
        Ok(SeqSerializer {
            items: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<SeqSerializer, Error> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<SeqSerializer, Error> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<TupleVariantSerializer, Error> {
        Ok(TupleVariantSerializer {
            variant,
            items: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<MapSerializer, Error> {
        Ok(MapSerializer {
            map: Map::with_capacity(len.unwrap_or(0)),
            next_key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<MapSerializer, Error> {
        self.serialize_map(Some(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<StructVariantSerializer, Error> {
        Ok(StructVariantSerializer {
            variant,
            map: Map::with_capacity(len),
        })
    }
}

struct SeqSerializer {
    items: Vec<Value>,
}

impl ser::SerializeSeq for SeqSerializer {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<(), Error>
    where
        T: Serialize + ?Sized,
    {
        self.items.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value, Error> {
        Ok(Value::Sequence(self.items))
    }
}

impl ser::SerializeTuple for SeqSerializer {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<(), Error>
    where
        T: Serialize + ?Sized,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value, Error> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SeqSerializer {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<(), Error>
    where
        T: Serialize + ?Sized,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value, Error> {
        ser::SerializeSeq::end(self)
    }
}

struct TupleVariantSerializer {
    variant: &'static str,
    items: Vec<Value>,
}

impl ser::SerializeTupleVariant for TupleVariantSerializer {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<(), Error>
    where
        T: Serialize + ?Sized,
    {
        self.items.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value, Error> {
        let mut map = Map::with_capacity(1);
        map.insert(self.variant.to_string(), Value::Sequence(self.items));
        Ok(Value::Mapping(map))
    }
}

struct MapSerializer {
    map: Map,
    next_key: Option<String>,
}

/// Map keys end up as element names, so only scalar keys are accepted.
fn key_to_string(key: Value) -> Result<String, Error> {
    match key {
        Value::Text(s) => Ok(s),
        Value::Int(n) => Ok(n.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(Error::unsupported(
            format!("{:?}", other),
            other.type_tag().as_str(),
        )),
    }
}

impl ser::SerializeMap for MapSerializer {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<(), Error>
    where
        T: Serialize + ?Sized,
    {
        self.next_key = Some(key_to_string(to_value(key)?)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<(), Error>
    where
        T: Serialize + ?Sized,
    {
        let key = self
            .next_key
            .take()
            .ok_or_else(|| Error::Custom("map value serialized before its key".to_string()))?;
        self.map.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value, Error> {
        Ok(Value::Mapping(self.map))
    }
}

impl ser::SerializeStruct for MapSerializer {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<(), Error>
    where
        T: Serialize + ?Sized,
    {
        self.map.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value, Error> {
        Ok(Value::Mapping(self.map))
    }
}

struct StructVariantSerializer {
    variant: &'static str,
    map: Map,
}

impl ser::SerializeStructVariant for StructVariantSerializer {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<(), Error>
    where
        T: Serialize + ?Sized,
    {
        self.map.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value, Error> {
        let mut outer = Map::with_capacity(1);
        outer.insert(self.variant.to_string(), Value::Mapping(self.map));
        Ok(Value::Mapping(outer))
    }
}
