use std::fmt;

use serde::{Deserialize, Serialize};

/// Declared state mutability of an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateMutability {
    /// Reads neither state nor environment.
    Pure,
    /// Reads but never mutates remote state.
    View,
    /// Mutates state, rejects attached value.
    NonPayable,
    /// Mutates state and accepts attached value.
    Payable,
}

impl StateMutability {
    /// True for operations that can be evaluated without a transaction.
    pub fn is_read_only(self) -> bool {
        matches!(self, StateMutability::Pure | StateMutability::View)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StateMutability::Pure => "pure",
            StateMutability::View => "view",
            StateMutability::NonPayable => "nonpayable",
            StateMutability::Payable => "payable",
        }
    }
}

impl fmt::Display for StateMutability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_wire_names() {
        assert_eq!(
            serde_json::to_string(&StateMutability::NonPayable).unwrap(),
            "\"nonpayable\""
        );
        let parsed: StateMutability = serde_json::from_str("\"view\"").unwrap();
        assert_eq!(parsed, StateMutability::View);
        assert!(parsed.is_read_only());
        assert!(!StateMutability::Payable.is_read_only());
    }
}
