//! The interface descriptor table.
//!
//! A table is parsed once from its JSON array representation, validated,
//! and indexed. It is never mutated afterwards, so a loaded table can be
//! shared across threads behind a plain reference or an `Arc`.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde_json::Value as JsonValue;
use tracing::{debug, trace};

use crate::entry::{Entry, EntryRef, EventEntry, FunctionEntry, FunctionKind};
use crate::error::{AbiError, AbiResult, Category};
use crate::hash::{Selector, Topic};

/// Immutable, indexed set of operation and notification entries.
#[derive(Clone, Debug)]
pub struct InterfaceTable {
    entries: Vec<Entry>,
    operations: Vec<usize>,
    notifications: Vec<usize>,
    operations_by_name: HashMap<String, usize>,
    notifications_by_name: HashMap<String, usize>,
    operations_by_signature: HashMap<String, usize>,
    notifications_by_signature: HashMap<String, usize>,
    selectors: HashMap<Selector, usize>,
    topics: HashMap<Topic, usize>,
    constructor: Option<usize>,
}

impl InterfaceTable {
    /// Builds a table from entries in declaration order.
    pub fn new(entries: Vec<Entry>) -> AbiResult<Self> {
        let mut table = Self {
            entries,
            operations: Vec::new(),
            notifications: Vec::new(),
            operations_by_name: HashMap::new(),
            notifications_by_name: HashMap::new(),
            operations_by_signature: HashMap::new(),
            notifications_by_signature: HashMap::new(),
            selectors: HashMap::new(),
            topics: HashMap::new(),
            constructor: None,
        };

        for (index, entry) in table.entries.iter().enumerate() {
            match entry {
                Entry::Operation(function) => {
                    validate_operation(function)?;
                    let signature = function.signature();
                    if table.operations_by_signature.contains_key(&signature)
                        || (function.kind == FunctionKind::Constructor
                            && table.constructor.is_some())
                    {
                        return Err(AbiError::duplicate(Category::Operation, signature));
                    }
                    if function.kind == FunctionKind::Constructor {
                        table.constructor = Some(index);
                    }
                    table
                        .operations_by_name
                        .entry(function.display_name().to_string())
                        .or_insert(index);
                    if let Some(selector) = function.selector() {
                        table.selectors.entry(selector).or_insert(index);
                    }
                    table.operations_by_signature.insert(signature, index);
                    table.operations.push(index);
                }
                Entry::Notification(event) => {
                    validate_notification(event)?;
                    let signature = event.signature();
                    if table.notifications_by_signature.contains_key(&signature) {
                        return Err(AbiError::duplicate(Category::Notification, signature));
                    }
                    table
                        .notifications_by_name
                        .entry(event.name.clone())
                        .or_insert(index);
                    if let Some(topic) = event.topic() {
                        table.topics.insert(topic, index);
                    }
                    table.notifications_by_signature.insert(signature, index);
                    table.notifications.push(index);
                }
            }
        }

        debug!(
            operations = table.operations.len(),
            notifications = table.notifications.len(),
            "interface table loaded"
        );
        Ok(table)
    }

    /// Parses the JSON array representation.
    pub fn from_json_str(json: &str) -> AbiResult<Self> {
        let entries: Vec<Entry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    pub fn from_json_value(value: JsonValue) -> AbiResult<Self> {
        let entries: Vec<Entry> = serde_json::from_value(value)?;
        Self::new(entries)
    }

    pub fn from_reader<R: Read>(reader: R) -> AbiResult<Self> {
        let entries: Vec<Entry> = serde_json::from_reader(reader)?;
        Self::new(entries)
    }

    /// Loads a table from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> AbiResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading interface table");
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn to_json_value(&self) -> AbiResult<JsonValue> {
        Ok(serde_json::to_value(&self.entries)?)
    }

    /// Re-serializes all entries in declaration order.
    pub fn to_json_string(&self) -> AbiResult<String> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }

    /// All entries in declaration order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves a name against operations first, then notifications.
    pub fn resolve(&self, name: &str) -> AbiResult<EntryRef<'_>> {
        trace!(name, "resolving entry");
        if let Some(&index) = self.operations_by_name.get(name) {
            return Ok(EntryRef::from(&self.entries[index]));
        }
        if let Some(&index) = self.notifications_by_name.get(name) {
            return Ok(EntryRef::from(&self.entries[index]));
        }
        Err(AbiError::not_found(Category::Any, name))
    }

    /// First declared operation with the given name.
    pub fn operation(&self, name: &str) -> AbiResult<&FunctionEntry> {
        self.operations_by_name
            .get(name)
            .and_then(|&index| self.entries[index].as_operation())
            .ok_or_else(|| AbiError::not_found(Category::Operation, name))
    }

    /// First declared notification with the given name.
    pub fn notification(&self, name: &str) -> AbiResult<&EventEntry> {
        self.notifications_by_name
            .get(name)
            .and_then(|&index| self.entries[index].as_notification())
            .ok_or_else(|| AbiError::not_found(Category::Notification, name))
    }

    /// Exact overload lookup by canonical signature, e.g. `addNewTable(uint32)`.
    pub fn operation_by_signature(&self, signature: &str) -> AbiResult<&FunctionEntry> {
        self.operations_by_signature
            .get(signature)
            .and_then(|&index| self.entries[index].as_operation())
            .ok_or_else(|| AbiError::not_found(Category::Operation, signature))
    }

    pub fn notification_by_signature(&self, signature: &str) -> AbiResult<&EventEntry> {
        self.notifications_by_signature
            .get(signature)
            .and_then(|&index| self.entries[index].as_notification())
            .ok_or_else(|| AbiError::not_found(Category::Notification, signature))
    }

    /// Operation addressed by the leading four bytes of call data.
    pub fn operation_by_selector(&self, selector: Selector) -> AbiResult<&FunctionEntry> {
        self.selectors
            .get(&selector)
            .and_then(|&index| self.entries[index].as_operation())
            .ok_or_else(|| {
                AbiError::not_found(Category::Operation, crate::hash::to_hex_prefixed(&selector))
            })
    }

    /// Notification whose signature hash is the given log topic.
    pub fn notification_by_topic(&self, topic: Topic) -> AbiResult<&EventEntry> {
        self.topics
            .get(&topic)
            .and_then(|&index| self.entries[index].as_notification())
            .ok_or_else(|| {
                AbiError::not_found(Category::Notification, crate::hash::to_hex_prefixed(&topic))
            })
    }

    pub fn constructor(&self) -> Option<&FunctionEntry> {
        self.constructor
            .and_then(|index| self.entries[index].as_operation())
    }

    /// Callable-operation entries in declaration order.
    pub fn list_operations(&self) -> Vec<&FunctionEntry> {
        self.operations
            .iter()
            .filter_map(|&index| self.entries[index].as_operation())
            .collect()
    }

    /// Notification entries in declaration order.
    pub fn list_notifications(&self) -> Vec<&EventEntry> {
        self.notifications
            .iter()
            .filter_map(|&index| self.entries[index].as_notification())
            .collect()
    }
}

impl PartialEq for InterfaceTable {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for InterfaceTable {}

fn validate_operation(function: &FunctionEntry) -> AbiResult<()> {
    let needs_name = function.kind == FunctionKind::Function;
    if needs_name && function.name().map_or(true, str::is_empty) {
        return Err(AbiError::MissingName {
            kind: function.kind.to_string(),
        });
    }
    if function.payable == Some(true) && function.constant == Some(true) {
        return Err(AbiError::PayableConstant {
            name: function.display_name().to_string(),
        });
    }
    for param in function.inputs.iter().chain(function.outputs()) {
        param.param_type()?;
    }
    Ok(())
}

fn validate_notification(event: &EventEntry) -> AbiResult<()> {
    if event.name.is_empty() {
        return Err(AbiError::MissingName {
            kind: "event".to_string(),
        });
    }
    for param in &event.inputs {
        param.param_type()?;
    }
    Ok(())
}
