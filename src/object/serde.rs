//! `serde` support for [`Value`].
//!
//! Serialization walks the graph once to reject cycles, then writes records as
//! maps, sequences as sequences and dates as RFC 3339 strings. Function values
//! cannot be serialized. Deserialization never produces dates or functions:
//! strings stay [`Value::Text`].

use std::fmt;

use chrono::SecondsFormat;
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::{self, SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Record, Sequence, Value};

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.check_acyclic()
            .map_err(<S::Error as ser::Error>::custom)?;
        Acyclic(self).serialize(serializer)
    }
}

/// A value already known to be free of cycles.
struct Acyclic<'a>(&'a Value);

impl Serialize for Acyclic<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.0 {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(value) => serializer.serialize_bool(*value),
            Value::Integer(value) => serializer.serialize_i64(*value),
            Value::Float(value) => serializer.serialize_f64(*value),
            Value::Text(value) => serializer.serialize_str(value),
            Value::Date(value) => {
                serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            Value::Sequence(sequence) => sequence.with_values(|values| {
                let mut state = serializer.serialize_seq(Some(values.len()))?;
                for value in values {
                    state.serialize_element(&Acyclic(value))?;
                }
                state.end()
            }),
            Value::Record(record) => record.with_fields(|fields| {
                let mut state = serializer.serialize_map(Some(fields.len()))?;
                for (key, value) in fields {
                    state.serialize_entry(key, &Acyclic(value))?;
                }
                state.end()
            }),
            Value::Function(_) => Err(ser::Error::custom("cannot serialize a function value")),
        }
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("any self-describing value")
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Value, E> {
        Ok(Value::Bool(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Value, E> {
        Ok(Value::Integer(value))
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Value, E> {
        Ok(i64::try_from(value).map_or(Value::Float(value as f64), Value::Integer))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Value, E> {
        Ok(Value::Float(value))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Value, E> {
        Ok(Value::from(value))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Value, E> {
        Ok(Value::Text(value))
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

    fn visit_seq<A>(self, mut access: A) -> Result<Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = access.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut values = Vec::with_capacity(capacity);
        while let Some(value) = access.next_element()? {
            values.push(value);
        }
        Ok(Value::Sequence(Sequence::from_values(values)))
    }

    fn visit_map<A>(self, mut access: A) -> Result<Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut fields = Vec::new();
        while let Some((key, value)) = access.next_entry::<String, Value>()? {
            fields.push((key, value));
        }
        Ok(Value::Record(Record::from_entries(fields)))
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
