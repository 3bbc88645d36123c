// =============================================================================
// Serde Support
// =============================================================================
//
// Sequences serialize as sequences, associations as maps and keys as their
// natural primitive. Functions have no data representation and refuse to
// serialize.
//
// Formats such as JSON spell every map key as a string. A map key that spells
// a canonical integer or `true`/`false` comes back as that typed key, so an
// integer-keyed association survives the round trip.

use std::fmt;

use ::serde::de::{self, Deserialize, DeserializeSeed, Deserializer, MapAccess, SeqAccess, Visitor};
use ::serde::ser::{self, Serialize, SerializeMap, SerializeSeq, Serializer};

use super::{Association, Key, Sequence, Value};

impl Serialize for Key {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Boolean(boolean) => serializer.serialize_bool(*boolean),
            Self::Integer(integer) => serializer.serialize_i64(*integer),
            Self::String(string) => serializer.serialize_str(string),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Boolean(boolean) => serializer.serialize_bool(*boolean),
            Self::Integer(integer) => serializer.serialize_i64(*integer),
            Self::Float(float) => serializer.serialize_f64(*float),
            Self::String(string) => serializer.serialize_str(string),
            Self::Sequence(sequence) => {
                let elements = sequence.to_vec();
                let mut seq = serializer.serialize_seq(Some(elements.len()))?;
                for element in &elements {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Self::Association(association) => {
                let entries = association.entries();
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in &entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            Self::Function(_) => Err(ser::Error::custom("functions cannot be serialized")),
        }
    }
}

struct KeyVisitor;

impl Visitor<'_> for KeyVisitor {
    type Value = Key;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a boolean, integer or string key")
    }

    fn visit_bool<E: de::Error>(self, boolean: bool) -> Result<Key, E> {
        Ok(Key::Boolean(boolean))
    }

    fn visit_i64<E: de::Error>(self, integer: i64) -> Result<Key, E> {
        Ok(Key::Integer(integer))
    }

    fn visit_u64<E: de::Error>(self, integer: u64) -> Result<Key, E> {
        i64::try_from(integer)
            .map(Key::Integer)
            .map_err(|_| E::custom("integer key out of range"))
    }

    fn visit_str<E: de::Error>(self, string: &str) -> Result<Key, E> {
        Ok(Key::from(string))
    }

    fn visit_string<E: de::Error>(self, string: String) -> Result<Key, E> {
        Ok(Key::from(string))
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(KeyVisitor)
    }
}

/// Reads a key in map position, restoring keys a format stringified.
struct MapKeySeed;

impl<'de> DeserializeSeed<'de> for MapKeySeed {
    type Value = Key;

    fn deserialize<D>(self, deserializer: D) -> Result<Key, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(KeyVisitor).map(retype_map_key)
    }
}

fn retype_map_key(key: Key) -> Key {
    let retyped = match key.as_str() {
        Some("true") => Some(Key::Boolean(true)),
        Some("false") => Some(Key::Boolean(false)),
        Some(spelled) => spelled
            .parse::<i64>()
            .ok()
            .filter(|integer| integer.to_string() == spelled)
            .map(Key::Integer),
        None => None,
    };
    retyped.unwrap_or(key)
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("any self-describing value")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer)
    }

    fn visit_bool<E: de::Error>(self, boolean: bool) -> Result<Value, E> {
        Ok(Value::Boolean(boolean))
    }

    fn visit_i64<E: de::Error>(self, integer: i64) -> Result<Value, E> {
        Ok(Value::Integer(integer))
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_u64<E: de::Error>(self, integer: u64) -> Result<Value, E> {
        Ok(i64::try_from(integer).map_or(Value::Float(integer as f64), Value::Integer))
    }

    fn visit_f64<E: de::Error>(self, float: f64) -> Result<Value, E> {
        Ok(Value::Float(float))
    }

    fn visit_str<E: de::Error>(self, string: &str) -> Result<Value, E> {
        Ok(Value::from(string))
    }

    fn visit_string<E: de::Error>(self, string: String) -> Result<Value, E> {
        Ok(Value::from(string))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let sequence = Sequence::with_capacity(capacity);
        while let Some(element) = seq.next_element::<Value>()? {
            sequence.push(element);
        }
        Ok(Value::Sequence(sequence))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let association = Association::new();
        while let Some(key) = map.next_key_seed(MapKeySeed)? {
            let value = map.next_value::<Value>()?;
            association.insert(key, value);
        }
        Ok(Value::Association(association))
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}
