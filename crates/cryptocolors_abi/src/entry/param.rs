use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::error::AbiResult;
use crate::param_type::ParamType;

/// Typed, optionally named input or return slot of an operation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    /// Parameter name; empty for unnamed return slots.
    #[serde(default)]
    pub name: String,

    /// Type tag exactly as declared, e.g. `uint32[]`.
    #[serde(rename = "type")]
    pub kind: String,

    /// Keys outside the known set (`internalType`, ...), kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

impl Param {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            extra: Map::new(),
        }
    }

    /// Unnamed slot, as used for most return values.
    pub fn unnamed(kind: impl Into<String>) -> Self {
        Self::new(String::new(), kind)
    }

    pub fn param_type(&self) -> AbiResult<ParamType> {
        ParamType::parse(&self.kind)
    }
}

/// Parameter of a notification, flagged when it is part of the filter index.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventParam {
    /// Whether the value is stored as a topic rather than in the data section.
    #[serde(default)]
    pub indexed: bool,

    #[serde(default)]
    pub name: String,

    #[serde(rename = "type")]
    pub kind: String,

    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

impl EventParam {
    pub fn new(name: impl Into<String>, kind: impl Into<String>, indexed: bool) -> Self {
        Self {
            indexed,
            name: name.into(),
            kind: kind.into(),
            extra: Map::new(),
        }
    }

    pub fn param_type(&self) -> AbiResult<ParamType> {
        ParamType::parse(&self.kind)
    }
}

/// Canonical tag for a declared type, falling back to the raw tag when it
/// does not parse. Loaded tables reject unparseable tags up front.
pub(crate) fn canonical_tag(kind: &str) -> String {
    ParamType::parse(kind)
        .map(|ty| ty.canonical())
        .unwrap_or_else(|_| kind.to_string())
}

pub(crate) fn signature<'a>(name: &str, kinds: impl Iterator<Item = &'a str>) -> String {
    let types: Vec<String> = kinds.map(canonical_tag).collect();
    format!("{}({})", name, types.join(","))
}
