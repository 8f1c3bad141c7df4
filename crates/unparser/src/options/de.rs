//! Order-preserving deserialization for option values.
//!
//! `serde_json::Map` sorts keys unless the `preserve_order` feature is on, and
//! the argument order must follow the loader's key order, so the maps are
//! deserialized with hand-written visitors instead.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};

use super::{LogicalOptions, OptionMap};
use crate::value::OptionValue;

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = OptionValue;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a boolean, number, string, list, object or null")
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
        Ok(OptionValue::Bool(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(OptionValue::Integer(value))
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(i64::try_from(value).map_or(OptionValue::Float(value as f64), OptionValue::Integer))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        Ok(OptionValue::Float(value))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(OptionValue::String(value.to_owned()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
        Ok(OptionValue::String(value))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(OptionValue::Absent)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(OptionValue::Absent)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(OptionValue::List(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        MapVisitor.visit_map(map).map(OptionValue::Map)
    }
}

impl<'de> Deserialize<'de> for OptionValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

struct MapVisitor;

impl<'de> Visitor<'de> for MapVisitor {
    type Value = OptionMap;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an object mapping option names to values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = OptionMap::new();
        while let Some((key, value)) = access.next_entry::<String, OptionValue>()? {
            map.insert(key, value);
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for OptionMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(MapVisitor)
    }
}

impl<'de> Deserialize<'de> for LogicalOptions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = OptionMap::deserialize(deserializer)?;
        Self::try_from(map).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_keys_keep_first_position_and_last_value() {
        let map: OptionMap = serde_json::from_str(r#"{"a": 1, "b": 2, "a": 3}"#).unwrap();
        let entries: Vec<_> = map.iter().map(|(k, v)| (k.to_owned(), v.clone())).collect();
        assert_eq!(
            entries,
            [
                ("a".to_owned(), OptionValue::Integer(3)),
                ("b".to_owned(), OptionValue::Integer(2)),
            ]
        );
    }

    #[test]
    fn nested_objects_keep_order() {
        let value: OptionValue =
            serde_json::from_str(r#"{"spec": "dot", "output": "out.txt"}"#).unwrap();
        let OptionValue::Map(map) = value else {
            panic!("expected object");
        };
        assert_eq!(map.keys().collect::<Vec<_>>(), ["spec", "output"]);
    }

    #[test]
    fn huge_unsigned_becomes_float() {
        let value: OptionValue = serde_json::from_str("18446744073709551615").unwrap();
        assert!(matches!(value, OptionValue::Float(_)));
    }

    #[test]
    fn logical_options_deserialize_directly() {
        let options: LogicalOptions =
            serde_json::from_str(r#"{"_": ["inspect"], "bail": true}"#).unwrap();
        assert_eq!(options.positional(), ["inspect"]);

        let error = serde_json::from_str::<LogicalOptions>(r#"{"--": 5}"#).unwrap_err();
        assert!(error.to_string().contains("reserved key '--'"));
    }
}
