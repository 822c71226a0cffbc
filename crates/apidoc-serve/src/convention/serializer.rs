// Copyright (c) 2025 Zensical and contributors

// SPDX-License-Identifier: MIT
// Third-party contributions licensed under DCO

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to
// deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NON-INFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
// FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS
// IN THE SOFTWARE.

// ----------------------------------------------------------------------------

//! Serializer applying conventions.

use serde::ser::{self, Error as _, Impossible, Serialize};
use serde_json::{Error, Map, Value};

use super::Conventions;

// ----------------------------------------------------------------------------
// Type aliases
// ----------------------------------------------------------------------------

/// Serialization result.
type Result<T = Value> = std::result::Result<T, Error>;

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// Serializer applying conventions.
///
/// This serializer produces a [`Value`] like [`serde_json::to_value`], except
/// that struct field names are renamed, and null fields and map entries are
/// omitted, as specified by the [`Conventions`] it was created with.
#[derive(Clone, Copy, Debug)]
pub struct Serializer {
    /// Serialization conventions.
    conventions: Conventions,
}

/// Serializer for sequences and tuples.
#[derive(Debug)]
pub struct SerializeVec {
    /// Serialization conventions.
    conventions: Conventions,
    /// Serialized elements.
    vec: Vec<Value>,
}

/// Serializer for tuple variants.
#[derive(Debug)]
pub struct SerializeTupleVariant {
    /// Variant name.
    name: &'static str,
    /// Serialized fields.
    inner: SerializeVec,
}

/// Serializer for maps.
///
/// Maps of unknown length are structs with `#[serde(flatten)]` fields, which
/// serde serializes as maps, so their keys are field names and get renamed.
/// Maps and map-like collections always report their length.
#[derive(Debug)]
pub struct SerializeMap {
    /// Serialization conventions.
    conventions: Conventions,
    /// Serialized entries.
    map: Map<String, Value>,
    /// Key awaiting its value.
    next_key: Option<String>,
    /// Whether keys are field names.
    fields: bool,
}

/// Serializer for structs.
#[derive(Debug)]
pub struct SerializeStruct {
    /// Serialization conventions.
    conventions: Conventions,
    /// Serialized fields.
    map: Map<String, Value>,
}

/// Serializer for struct variants.
#[derive(Debug)]
pub struct SerializeStructVariant {
    /// Variant name.
    name: &'static str,
    /// Serialized fields.
    inner: SerializeStruct,
}

/// Serializer for map keys.
struct KeySerializer;

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl Serializer {
    /// Creates a serializer with the given conventions.
    #[must_use]
    pub fn new(conventions: Conventions) -> Self {
        Self { conventions }
    }

    /// Serializes a nested value with the same conventions.
    fn nested<T>(self, value: &T) -> Result
    where
        T: Serialize + ?Sized,
    {
        value.serialize(self)
    }
}

impl Conventions {
    /// Returns whether the given value is omitted from structs and maps.
    fn omits(&self, value: &Value) -> bool {
        self.omit_nulls && value.is_null()
    }
}

// ----------------------------------------------------------------------------
// Trait implementations
// ----------------------------------------------------------------------------

impl ser::Serializer for Serializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeTupleVariant;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeStruct;
    type SerializeStructVariant = SerializeStructVariant;

    fn serialize_bool(self, value: bool) -> Result {
        Ok(Value::Bool(value))
    }

    fn serialize_i8(self, value: i8) -> Result {
        Ok(Value::from(value))
    }

    fn serialize_i16(self, value: i16) -> Result {
        Ok(Value::from(value))
    }

    fn serialize_i32(self, value: i32) -> Result {
        Ok(Value::from(value))
    }

    fn serialize_i64(self, value: i64) -> Result {
        Ok(Value::from(value))
    }

    fn serialize_i128(self, value: i128) -> Result {
        ser::Serializer::serialize_i128(serde_json::value::Serializer, value)
    }

    fn serialize_u8(self, value: u8) -> Result {
        Ok(Value::from(value))
    }

    fn serialize_u16(self, value: u16) -> Result {
        Ok(Value::from(value))
    }

    fn serialize_u32(self, value: u32) -> Result {
        Ok(Value::from(value))
    }

    fn serialize_u64(self, value: u64) -> Result {
        Ok(Value::from(value))
    }

    fn serialize_u128(self, value: u128) -> Result {
        ser::Serializer::serialize_u128(serde_json::value::Serializer, value)
    }

    fn serialize_f32(self, value: f32) -> Result {
        Ok(Value::from(value))
    }

    fn serialize_f64(self, value: f64) -> Result {
        Ok(Value::from(value))
    }

    fn serialize_char(self, value: char) -> Result {
        Ok(Value::String(value.to_string()))
    }

    fn serialize_str(self, value: &str) -> Result {
        Ok(Value::String(value.to_owned()))
    }

    fn serialize_bytes(self, value: &[u8]) -> Result {
        Ok(Value::Array(value.iter().copied().map(Value::from).collect()))
    }

    fn serialize_none(self) -> Result {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result
    where
        T: Serialize + ?Sized,
    {
        self.nested(value)
    }

    fn serialize_unit(self) -> Result {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self, _name: &'static str, _index: u32, variant: &'static str,
    ) -> Result {
        Ok(Value::String(variant.to_owned()))
    }

    fn serialize_newtype_struct<T>(
        self, _name: &'static str, value: &T,
    ) -> Result
    where
        T: Serialize + ?Sized,
    {
        self.nested(value)
    }

    fn serialize_newtype_variant<T>(
        self, _name: &'static str, _index: u32, variant: &'static str,
        value: &T,
    ) -> Result
    where
        T: Serialize + ?Sized,
    {
        let mut map = Map::new();
        map.insert(variant.to_owned(), self.nested(value)?);
        Ok(Value::Object(map))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec {
            conventions: self.conventions,
            vec: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self, _name: &'static str, len: usize,
    ) -> Result<SerializeVec> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self, _name: &'static str, _index: u32, variant: &'static str,
        len: usize,
    ) -> Result<SerializeTupleVariant> {
        Ok(SerializeTupleVariant {
            name: variant,
            inner: self.serialize_seq(Some(len))?,
        })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap {
            conventions: self.conventions,
            map: Map::new(),
            next_key: None,
            fields: len.is_none(),
        })
    }

    fn serialize_struct(
        self, _name: &'static str, _len: usize,
    ) -> Result<SerializeStruct> {
        Ok(SerializeStruct {
            conventions: self.conventions,
            map: Map::new(),
        })
    }

    fn serialize_struct_variant(
        self, _name: &'static str, _index: u32, variant: &'static str,
        len: usize,
    ) -> Result<SerializeStructVariant> {
        Ok(SerializeStructVariant {
            name: variant,
            inner: self.serialize_struct(variant, len)?,
        })
    }
}

// ----------------------------------------------------------------------------

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        let value = Serializer::new(self.conventions).nested(value)?;
        self.vec.push(value);
        Ok(())
    }

    fn end(self) -> Result {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleVariant for SerializeTupleVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        ser::SerializeSeq::serialize_element(&mut self.inner, value)
    }

    fn end(self) -> Result {
        let mut map = Map::new();
        map.insert(self.name.to_owned(), Value::Array(self.inner.vec));
        Ok(Value::Object(map))
    }
}

// ----------------------------------------------------------------------------

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        self.next_key = Some(key.serialize(KeySerializer)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        let key = self.next_key.take().ok_or_else(|| {
            Error::custom("serialize_value called before serialize_key")
        })?;

        // Keys of maps are data, so they're kept as is
        let value = Serializer::new(self.conventions).nested(value)?;
        if !self.conventions.omits(&value) {
            let key = if self.fields {
                self.conventions.naming.apply(&key).into_owned()
            } else {
                key
            };
            self.map.insert(key, value);
        }
        Ok(())
    }

    fn end(self) -> Result {
        Ok(Value::Object(self.map))
    }
}

impl ser::SerializeStruct for SerializeStruct {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(
        &mut self, key: &'static str, value: &T,
    ) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        let value = Serializer::new(self.conventions).nested(value)?;
        if !self.conventions.omits(&value) {
            let key = self.conventions.naming.apply(key);
            self.map.insert(key.into_owned(), value);
        }
        Ok(())
    }

    fn end(self) -> Result {
        Ok(Value::Object(self.map))
    }
}

impl ser::SerializeStructVariant for SerializeStructVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(
        &mut self, key: &'static str, value: &T,
    ) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        ser::SerializeStruct::serialize_field(&mut self.inner, key, value)
    }

    fn end(self) -> Result {
        let mut map = Map::new();
        map.insert(self.name.to_owned(), Value::Object(self.inner.map));
        Ok(Value::Object(map))
    }
}

// ----------------------------------------------------------------------------

impl ser::Serializer for KeySerializer {
    type Ok = String;
    type Error = Error;

    type SerializeSeq = Impossible<String, Error>;
    type SerializeTuple = Impossible<String, Error>;
    type SerializeTupleStruct = Impossible<String, Error>;
    type SerializeTupleVariant = Impossible<String, Error>;
    type SerializeMap = Impossible<String, Error>;
    type SerializeStruct = Impossible<String, Error>;
    type SerializeStructVariant = Impossible<String, Error>;

    fn serialize_bool(self, value: bool) -> Result<String> {
        Ok(value.to_string())
    }

    fn serialize_i8(self, value: i8) -> Result<String> {
        Ok(value.to_string())
    }

    fn serialize_i16(self, value: i16) -> Result<String> {
        Ok(value.to_string())
    }

    fn serialize_i32(self, value: i32) -> Result<String> {
        Ok(value.to_string())
    }

    fn serialize_i64(self, value: i64) -> Result<String> {
        Ok(value.to_string())
    }

    fn serialize_u8(self, value: u8) -> Result<String> {
        Ok(value.to_string())
    }

    fn serialize_u16(self, value: u16) -> Result<String> {
        Ok(value.to_string())
    }

    fn serialize_u32(self, value: u32) -> Result<String> {
        Ok(value.to_string())
    }

    fn serialize_u64(self, value: u64) -> Result<String> {
        Ok(value.to_string())
    }

    fn serialize_f32(self, _value: f32) -> Result<String> {
        Err(key_must_be_a_string())
    }

    fn serialize_f64(self, _value: f64) -> Result<String> {
        Err(key_must_be_a_string())
    }

    fn serialize_char(self, value: char) -> Result<String> {
        Ok(value.to_string())
    }

    fn serialize_str(self, value: &str) -> Result<String> {
        Ok(value.to_owned())
    }

    fn serialize_bytes(self, _value: &[u8]) -> Result<String> {
        Err(key_must_be_a_string())
    }

    fn serialize_none(self) -> Result<String> {
        Err(key_must_be_a_string())
    }

    fn serialize_some<T>(self, _value: &T) -> Result<String>
    where
        T: Serialize + ?Sized,
    {
        Err(key_must_be_a_string())
    }

    fn serialize_unit(self) -> Result<String> {
        Err(key_must_be_a_string())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<String> {
        Err(key_must_be_a_string())
    }

    fn serialize_unit_variant(
        self, _name: &'static str, _index: u32, variant: &'static str,
    ) -> Result<String> {
        Ok(variant.to_owned())
    }

    fn serialize_newtype_struct<T>(
        self, _name: &'static str, value: &T,
    ) -> Result<String>
    where
        T: Serialize + ?Sized,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self, _name: &'static str, _index: u32, _variant: &'static str,
        _value: &T,
    ) -> Result<String>
    where
        T: Serialize + ?Sized,
    {
        Err(key_must_be_a_string())
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(key_must_be_a_string())
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(key_must_be_a_string())
    }

    fn serialize_tuple_struct(
        self, _name: &'static str, _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(key_must_be_a_string())
    }

    fn serialize_tuple_variant(
        self, _name: &'static str, _index: u32, _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(key_must_be_a_string())
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(key_must_be_a_string())
    }

    fn serialize_struct(
        self, _name: &'static str, _len: usize,
    ) -> Result<Self::SerializeStruct> {
        Err(key_must_be_a_string())
    }

    fn serialize_struct_variant(
        self, _name: &'static str, _index: u32, _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(key_must_be_a_string())
    }
}

// ----------------------------------------------------------------------------
// Functions
// ----------------------------------------------------------------------------

/// Creates the error for map keys that can't be represented as strings.
fn key_must_be_a_string() -> Error {
    Error::custom("key must be a string")
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use serde::Serialize;
    use serde_json::json;
    use std::collections::BTreeMap;

    use crate::convention::{Conventions, Naming};

    #[derive(Serialize)]
    struct Document {
        swagger: &'static str,
        base_path: Option<&'static str>,
        host: Option<&'static str>,
        paths: BTreeMap<&'static str, Option<PathItem>>,
        tags: Vec<Option<&'static str>>,
    }

    #[derive(Serialize)]
    struct PathItem {
        operation_id: &'static str,
    }

    #[derive(Serialize)]
    struct Outer {
        base_path: &'static str,
        #[serde(flatten)]
        info: Info,
    }

    #[derive(Serialize)]
    struct Info {
        api_version: &'static str,
        #[serde(flatten)]
        ext: Extensions,
        terms_of_service: Option<&'static str>,
    }

    #[derive(Serialize)]
    struct Extensions {
        x_vendor_ext: &'static str,
        paths: BTreeMap<&'static str, &'static str>,
    }

    #[derive(Serialize)]
    enum Schema {
        Reference { ref_path: &'static str },
        Tuple(u8, u8),
    }

    fn document() -> Document {
        let mut paths = BTreeMap::new();
        paths.insert("/pets/{pet_id}", Some(PathItem { operation_id: "get" }));
        paths.insert("/stores", None);
        Document {
            swagger: "2.0",
            base_path: Some("/api"),
            host: None,
            paths,
            tags: vec![Some("pets"), None],
        }
    }

    #[test]
    fn test_defaults() {
        let value = Conventions::default().to_value(&document()).unwrap();
        assert_eq!(
            value,
            json!({
                "swagger": "2.0",
                "basePath": "/api",
                "paths": {
                    "/pets/{pet_id}": { "operationId": "get" }
                },
                "tags": ["pets", null]
            })
        );
    }

    #[test]
    fn test_as_is_with_nulls() {
        let conventions = Conventions {
            naming: Naming::AsIs,
            omit_nulls: false,
        };
        let value = conventions.to_value(&document()).unwrap();
        assert_eq!(
            value,
            json!({
                "swagger": "2.0",
                "base_path": "/api",
                "host": null,
                "paths": {
                    "/pets/{pet_id}": { "operation_id": "get" },
                    "/stores": null
                },
                "tags": ["pets", null]
            })
        );
    }

    #[test]
    fn test_flattened_fields() {
        let outer = Outer {
            base_path: "/",
            info: Info {
                api_version: "v1",
                ext: Extensions {
                    x_vendor_ext: "a",
                    paths: BTreeMap::from([("/pet_store", "b")]),
                },
                terms_of_service: None,
            },
        };

        let value = Conventions::default().to_value(&outer).unwrap();
        assert_eq!(
            value,
            json!({
                "basePath": "/",
                "apiVersion": "v1",
                "xVendorExt": "a",
                "paths": { "/pet_store": "b" }
            })
        );
    }

    #[test]
    fn test_map_keys_kept() {
        let map = BTreeMap::from([("base_path", "/"), ("Info", "v1")]);
        let value = Conventions::default().to_value(&map).unwrap();
        assert_eq!(value, json!({ "base_path": "/", "Info": "v1" }));
    }

    #[test]
    fn test_variants() {
        let conventions = Conventions::default();
        let value = conventions
            .to_value(&Schema::Reference { ref_path: "#/definitions/Pet" })
            .unwrap();
        assert_eq!(
            value,
            json!({ "Reference": { "refPath": "#/definitions/Pet" } })
        );

        let value = conventions.to_value(&Schema::Tuple(1, 2)).unwrap();
        assert_eq!(value, json!({ "Tuple": [1, 2] }));
    }

    #[test]
    fn test_numeric_keys() {
        let mut responses = BTreeMap::new();
        responses.insert(200, "OK");
        responses.insert(404, "Not Found");

        let value = Conventions::default().to_value(&responses).unwrap();
        assert_eq!(value, json!({ "200": "OK", "404": "Not Found" }));
    }

    #[test]
    fn test_invalid_keys() {
        let mut map = BTreeMap::new();
        map.insert(vec![1], "invalid");

        assert!(Conventions::default().to_value(&map).is_err());
    }
}
