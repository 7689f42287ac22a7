use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use super::mutability::StateMutability;
use super::param::{signature, Param};
use crate::hash::{self, Selector};

/// Discriminator of a callable-operation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FunctionKind {
    Function,
    /// One-time initializer run at deployment.
    Constructor,
    Fallback,
    Receive,
}

impl FunctionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FunctionKind::Function => "function",
            FunctionKind::Constructor => "constructor",
            FunctionKind::Fallback => "fallback",
            FunctionKind::Receive => "receive",
        }
    }

    pub(crate) fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "function" => Some(FunctionKind::Function),
            "constructor" => Some(FunctionKind::Constructor),
            "fallback" => Some(FunctionKind::Fallback),
            "receive" => Some(FunctionKind::Receive),
            _ => None,
        }
    }
}

impl fmt::Display for FunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A remotely callable operation.
///
/// Optional flags stay `None` when the source omitted them so that
/// re-serialization reproduces the declared entry field for field. The
/// `constant`, `payable` and `state_mutability` flags are stored
/// independently and never reconciled with each other.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constant: Option<bool>,

    #[serde(default)]
    pub inputs: Vec<Param>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Vec<Param>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payable: Option<bool>,

    #[serde(
        default,
        rename = "stateMutability",
        skip_serializing_if = "Option::is_none"
    )]
    pub state_mutability: Option<StateMutability>,

    #[serde(rename = "type")]
    pub kind: FunctionKind,

    /// Keys outside the known set, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

impl FunctionEntry {
    /// Creates a named `function` entry with the flags implied by `mutability`.
    pub fn function(
        name: impl Into<String>,
        inputs: Vec<Param>,
        outputs: Vec<Param>,
        mutability: StateMutability,
    ) -> Self {
        Self {
            constant: Some(mutability.is_read_only()),
            inputs,
            name: Some(name.into()),
            outputs: Some(outputs),
            payable: Some(mutability == StateMutability::Payable),
            state_mutability: Some(mutability),
            kind: FunctionKind::Function,
            extra: Map::new(),
        }
    }

    /// Creates a constructor entry.
    pub fn constructor(inputs: Vec<Param>, mutability: StateMutability) -> Self {
        Self {
            constant: None,
            inputs,
            name: None,
            outputs: None,
            payable: Some(mutability == StateMutability::Payable),
            state_mutability: Some(mutability),
            kind: FunctionKind::Constructor,
            extra: Map::new(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Name used in signatures and listings; unnamed kinds use their tag.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(self.kind.as_str())
    }

    /// Declared return slots; empty when none are declared.
    pub fn outputs(&self) -> &[Param] {
        self.outputs.as_deref().unwrap_or(&[])
    }

    /// Declared mutability, or the one implied by the legacy flags.
    pub fn mutability(&self) -> StateMutability {
        if let Some(mutability) = self.state_mutability {
            return mutability;
        }
        match (self.payable, self.constant) {
            (Some(true), _) => StateMutability::Payable,
            (_, Some(true)) => StateMutability::View,
            _ => StateMutability::NonPayable,
        }
    }

    pub fn is_constant(&self) -> bool {
        self.constant
            .unwrap_or_else(|| self.mutability().is_read_only())
    }

    pub fn is_payable(&self) -> bool {
        self.payable
            .unwrap_or_else(|| self.mutability() == StateMutability::Payable)
    }

    /// Canonical signature, e.g. `getTableInfo(uint32)`.
    pub fn signature(&self) -> String {
        signature(
            self.display_name(),
            self.inputs.iter().map(|p| p.kind.as_str()),
        )
    }

    /// Four-byte selector callers prepend to encoded arguments.
    ///
    /// Only `function` entries are dispatched by selector; constructors,
    /// fallback and receive entries have none.
    pub fn selector(&self) -> Option<Selector> {
        if self.kind != FunctionKind::Function {
            return None;
        }
        Some(hash::selector(&self.signature()))
    }
}
