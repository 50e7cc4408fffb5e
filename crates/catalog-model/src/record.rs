//! Catalog records and their field values.
//!
//! A [`Record`] keeps its fields in insertion order so a record read from a
//! CSV row serializes back out with the same column order.

use std::borrow::Cow;
use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};

/// Value stored under a record field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    /// Float or integer outside `i64`, kept exactly as written.
    Number(Number),
    Boolean(bool),
}

impl FieldValue {
    /// Integer value of decimal text such as `"732"`, `"+5"` or
    /// `"18446744073709551616"`. Digits beyond `i64` are kept verbatim.
    pub fn parse_integer(text: &str) -> Option<Self> {
        if let Ok(value) = text.parse::<i64>() {
            return Some(Self::Integer(value));
        }
        let (sign, digits) = match text.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", text.strip_prefix('+').unwrap_or(text)),
        };
        if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
            return None;
        }
        let digits = digits.trim_start_matches('0');
        serde_json::from_str::<Number>(&format!("{sign}{digits}"))
            .ok()
            .map(Self::Number)
    }

    /// Text form of the value as it appears in a rendered document.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Text(value) => Cow::Borrowed(value.as_str()),
            other => Cow::Owned(other.to_string()),
        }
    }

    /// True when the text form is empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Text(value) if value.is_empty())
    }

    /// `None` for JSON `null`; arrays and objects are rejected.
    fn from_json(value: Value) -> Result<Option<Self>, &'static str> {
        match value {
            Value::Null => Ok(None),
            Value::Bool(value) => Ok(Some(Self::Boolean(value))),
            Value::Number(number) => Ok(Some(match number.as_i64() {
                Some(value) => Self::Integer(value),
                None => Self::Number(number),
            })),
            Value::String(value) => Ok(Some(Self::Text(value))),
            Value::Array(_) | Value::Object(_) => {
                Err("expected a string, number, boolean or null")
            }
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Number(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(value) => serializer.serialize_str(value),
            Self::Integer(value) => serializer.serialize_i64(*value),
            Self::Number(value) => value.serialize(serializer),
            Self::Boolean(value) => serializer.serialize_bool(*value),
        }
    }
}

/// Field value slot that tolerates JSON `null`.
struct NullableField(Option<FieldValue>);

impl<'de> Deserialize<'de> for NullableField {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        FieldValue::from_json(value)
            .map(Self)
            .map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        NullableField::deserialize(deserializer)?
            .0
            .ok_or_else(|| de::Error::custom("field value cannot be null"))
    }
}

/// One catalog entry: an ordered mapping of field name to value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field. An existing field keeps its position and takes the new value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(key, _)| *key == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Text form of a field, if present.
    pub fn text(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(FieldValue::as_text)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

struct RecordVisitor;

impl<'de> Visitor<'de> for RecordVisitor {
    type Value = Record;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object of catalog fields")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut record = Record::new();
        while let Some((name, NullableField(value))) =
            access.next_entry::<String, NullableField>()?
        {
            if let Some(value) = value {
                record.insert(name, value);
            }
        }
        Ok(record)
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RecordVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_keeps_first_position() {
        let mut record = Record::new();
        record.insert("Name", "X-Wing");
        record.insert("Pieces", 732_i64);
        record.insert("Name", "TIE Fighter");

        let names: Vec<&str> = record.field_names().collect();
        assert_eq!(names, vec!["Name", "Pieces"]);
        assert_eq!(record.text("Name").as_deref(), Some("TIE Fighter"));
    }

    #[test]
    fn parse_integer_keeps_wide_digits() {
        assert_eq!(FieldValue::parse_integer("+5"), Some(FieldValue::Integer(5)));
        assert_eq!(FieldValue::parse_integer("007"), Some(FieldValue::Integer(7)));

        let wide = FieldValue::parse_integer("99999999999999999999").unwrap();
        assert!(matches!(wide, FieldValue::Number(_)));
        assert_eq!(wide.as_text(), "99999999999999999999");
        assert_eq!(
            FieldValue::parse_integer("-00018446744073709551616")
                .unwrap()
                .as_text(),
            "-18446744073709551616"
        );

        assert_eq!(FieldValue::parse_integer("9+"), None);
        assert_eq!(FieldValue::parse_integer("-"), None);
        assert_eq!(FieldValue::parse_integer("1.5"), None);
    }

    #[test]
    fn integer_text_form() {
        assert_eq!(FieldValue::Integer(732).as_text(), "732");
        assert!(FieldValue::Text(String::new()).is_empty());
        assert!(!FieldValue::Integer(0).is_empty());
    }
}
