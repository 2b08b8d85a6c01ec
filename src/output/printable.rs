//! Values the formatters accept.
//!
//! Structured output is a compile-time capability: only types that implement
//! [`Record`] (structs and mappings) carry a JSON document. Everything else that is
//! [`Printable`] renders as text only.

use serde::{Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;
use std::hash::{BuildHasher, Hash};

/// A value that can be handed to a formatter.
pub trait Printable {
    /// Human-oriented rendering used by the text formatter.
    fn to_text(&self) -> String;

    /// Compact JSON document, present only for records and mappings.
    fn to_json(&self) -> Option<serde_json::Result<String>> {
        None
    }
}

/// Marker for struct-like and mapping-like values eligible for structured output.
pub trait Record: Serialize {
    /// Human-oriented rendering of the record.
    fn to_text(&self) -> String;
}

impl<T: Record> Printable for T {
    fn to_text(&self) -> String {
        Record::to_text(self)
    }

    fn to_json(&self) -> Option<serde_json::Result<String>> {
        Some(serde_json::to_string(self))
    }
}

macro_rules! scalar_printable {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Printable for $ty {
                fn to_text(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

scalar_printable!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    String,
);

impl Printable for str {
    fn to_text(&self) -> String {
        self.to_string()
    }
}

/// Sequences render one item per line and are never records.
impl<T: Printable> Printable for Vec<T> {
    fn to_text(&self) -> String {
        self.iter()
            .map(Printable::to_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl<K, V> Record for BTreeMap<K, V>
where
    K: Serialize + Display + Ord,
    V: Serialize + Display,
{
    fn to_text(&self) -> String {
        self.iter()
            .map(|(key, value)| format!("{}: {}", key, value))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl<K, V, S> Record for HashMap<K, V, S>
where
    K: Serialize + Display + Ord + Hash,
    V: Serialize + Display,
    S: BuildHasher,
{
    fn to_text(&self) -> String {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
            .into_iter()
            .map(|(key, value)| format!("{}: {}", key, value))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Record for serde_json::Map<String, serde_json::Value> {
    fn to_text(&self) -> String {
        self.iter()
            .map(|(key, value)| format!("{}: {}", key, value))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A record with layout-only header and footer lines.
///
/// Header and footer appear in text output only; structured output serializes the
/// body alone.
#[derive(Debug, Clone)]
pub struct Framed<T> {
    pub header: Option<String>,
    pub body: T,
    pub footer: Option<String>,
}

impl<T> Framed<T> {
    pub fn new(body: T) -> Self {
        Self {
            header: None,
            body,
            footer: None,
        }
    }

    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }
}

impl<T: Serialize> Serialize for Framed<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.body.serialize(serializer)
    }
}

impl<T: Record> Record for Framed<T> {
    fn to_text(&self) -> String {
        let mut lines = Vec::with_capacity(3);
        lines.extend(self.header.clone());
        lines.push(Record::to_text(&self.body));
        lines.extend(self.footer.clone());
        lines.join("\n")
    }
}
