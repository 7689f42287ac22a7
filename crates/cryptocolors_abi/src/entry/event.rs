use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use super::param::{signature, EventParam};
use crate::hash::{self, Topic};

/// Discriminator of a notification entry; serialized as `"event"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    #[default]
    Event,
}

/// A notification emitted by the remote contract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEntry {
    /// Anonymous notifications leave their signature topic out of the index.
    #[serde(default)]
    pub anonymous: bool,

    #[serde(default)]
    pub inputs: Vec<EventParam>,

    pub name: String,

    #[serde(rename = "type", default)]
    pub kind: EventKind,

    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

impl EventEntry {
    pub fn new(name: impl Into<String>, inputs: Vec<EventParam>, anonymous: bool) -> Self {
        Self {
            anonymous,
            inputs,
            name: name.into(),
            kind: EventKind::Event,
            extra: Map::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Canonical signature, e.g. `PlayerInTable(address,uint32)`.
    pub fn signature(&self) -> String {
        signature(&self.name, self.inputs.iter().map(|p| p.kind.as_str()))
    }

    /// Topic a log filter matches on; `None` for anonymous notifications.
    pub fn topic(&self) -> Option<Topic> {
        if self.anonymous {
            return None;
        }
        Some(hash::topic(&self.signature()))
    }

    /// Parameters carried as topics.
    pub fn indexed_inputs(&self) -> impl Iterator<Item = &EventParam> {
        self.inputs.iter().filter(|p| p.indexed)
    }

    /// Parameters carried in the log data section.
    pub fn data_inputs(&self) -> impl Iterator<Item = &EventParam> {
        self.inputs.iter().filter(|p| !p.indexed)
    }
}
