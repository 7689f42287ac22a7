//! Table entries: callable operations and emitted notifications.
//!
//! Each concept lives in its own file; this module re-exports them and
//! defines [`Entry`], the `type`-discriminated union stored by the table.

mod event;
mod function;
mod mutability;
mod param;

pub use event::{EventEntry, EventKind};
pub use function::{FunctionEntry, FunctionKind};
pub use mutability::StateMutability;
pub use param::{EventParam, Param};

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::Category;

/// One declared item of the interface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entry {
    /// Function, constructor, fallback or receive entry.
    Operation(FunctionEntry),
    /// Event entry.
    Notification(EventEntry),
}

impl Entry {
    pub fn category(&self) -> Category {
        match self {
            Entry::Operation(_) => Category::Operation,
            Entry::Notification(_) => Category::Notification,
        }
    }

    /// Declared name; constructors report their kind tag.
    pub fn name(&self) -> &str {
        match self {
            Entry::Operation(function) => function.display_name(),
            Entry::Notification(event) => event.name(),
        }
    }

    pub fn signature(&self) -> String {
        match self {
            Entry::Operation(function) => function.signature(),
            Entry::Notification(event) => event.signature(),
        }
    }

    /// Input type tags in declaration order.
    pub fn input_kinds(&self) -> Vec<&str> {
        match self {
            Entry::Operation(function) => function.inputs.iter().map(|p| p.kind.as_str()).collect(),
            Entry::Notification(event) => event.inputs.iter().map(|p| p.kind.as_str()).collect(),
        }
    }

    pub fn as_operation(&self) -> Option<&FunctionEntry> {
        match self {
            Entry::Operation(function) => Some(function),
            Entry::Notification(_) => None,
        }
    }

    pub fn as_notification(&self) -> Option<&EventEntry> {
        match self {
            Entry::Notification(event) => Some(event),
            Entry::Operation(_) => None,
        }
    }
}

impl From<FunctionEntry> for Entry {
    fn from(entry: FunctionEntry) -> Self {
        Entry::Operation(entry)
    }
}

impl From<EventEntry> for Entry {
    fn from(entry: EventEntry) -> Self {
        Entry::Notification(entry)
    }
}

impl Serialize for Entry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Entry::Operation(function) => function.serialize(serializer),
            Entry::Notification(event) => event.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Entry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = JsonValue::deserialize(deserializer)?;
        // Entries without a discriminator are functions in the legacy format.
        let tag = match value.get("type") {
            None => "function".to_string(),
            Some(JsonValue::String(tag)) => tag.clone(),
            Some(other) => {
                return Err(de::Error::custom(format!(
                    "entry type must be a string, found {other}"
                )))
            }
        };

        if tag == "event" {
            return EventEntry::deserialize(value)
                .map(Entry::Notification)
                .map_err(de::Error::custom);
        }

        if FunctionKind::from_tag(&tag).is_none() {
            return Err(de::Error::custom(format!("unknown entry type: {tag}")));
        }

        let mut value = value;
        if let JsonValue::Object(map) = &mut value {
            map.entry("type").or_insert_with(|| JsonValue::from("function"));
        }
        FunctionEntry::deserialize(value)
            .map(Entry::Operation)
            .map_err(de::Error::custom)
    }
}

/// Borrowed view of an entry returned by unscoped lookups.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryRef<'a> {
    Operation(&'a FunctionEntry),
    Notification(&'a EventEntry),
}

impl<'a> EntryRef<'a> {
    pub fn category(self) -> Category {
        match self {
            EntryRef::Operation(_) => Category::Operation,
            EntryRef::Notification(_) => Category::Notification,
        }
    }

    pub fn name(self) -> &'a str {
        match self {
            EntryRef::Operation(function) => function.display_name(),
            EntryRef::Notification(event) => event.name(),
        }
    }

    pub fn signature(self) -> String {
        match self {
            EntryRef::Operation(function) => function.signature(),
            EntryRef::Notification(event) => event.signature(),
        }
    }

    pub fn as_operation(self) -> Option<&'a FunctionEntry> {
        match self {
            EntryRef::Operation(function) => Some(function),
            EntryRef::Notification(_) => None,
        }
    }

    pub fn as_notification(self) -> Option<&'a EventEntry> {
        match self {
            EntryRef::Notification(event) => Some(event),
            EntryRef::Operation(_) => None,
        }
    }

    pub fn to_entry(self) -> Entry {
        match self {
            EntryRef::Operation(function) => Entry::Operation(function.clone()),
            EntryRef::Notification(event) => Entry::Notification(event.clone()),
        }
    }
}

impl<'a> From<&'a Entry> for EntryRef<'a> {
    fn from(entry: &'a Entry) -> Self {
        match entry {
            Entry::Operation(function) => EntryRef::Operation(function),
            Entry::Notification(event) => EntryRef::Notification(event),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_on_type_field() {
        let op: Entry = serde_json::from_str(
            r#"{"constant":false,"inputs":[],"name":"withdraw","outputs":[],"payable":false,"stateMutability":"nonpayable","type":"function"}"#,
        )
        .unwrap();
        assert_eq!(op.category(), Category::Operation);
        assert_eq!(op.name(), "withdraw");

        let ev: Entry = serde_json::from_str(
            r#"{"anonymous":false,"inputs":[],"name":"Ping","type":"event"}"#,
        )
        .unwrap();
        assert_eq!(ev.category(), Category::Notification);
        assert_eq!(ev.signature(), "Ping()");
    }

    #[test]
    fn missing_type_defaults_to_function() {
        let entry: Entry = serde_json::from_str(r#"{"inputs":[],"name":"ping"}"#).unwrap();
        let function = entry.as_operation().unwrap();
        assert_eq!(function.kind, FunctionKind::Function);
        assert_eq!(function.signature(), "ping()");
    }

    #[test]
    fn rejects_unknown_discriminator() {
        let err = serde_json::from_str::<Entry>(r#"{"name":"x","type":"error"}"#).unwrap_err();
        assert!(err.to_string().contains("unknown entry type"));
        assert!(serde_json::from_str::<Entry>(r#"{"name":"x","type":7}"#).is_err());
    }

    #[test]
    fn entry_ref_round_trips_to_owned() {
        let entry: Entry = EventEntry::new("Ping", Vec::new(), false).into();
        let borrowed = EntryRef::from(&entry);
        assert_eq!(borrowed.to_entry(), entry);
        assert!(borrowed.as_operation().is_none());
    }
}
