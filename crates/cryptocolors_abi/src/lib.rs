//! # CryptoColors ABI
//!
//! Interface descriptor table for the CryptoColors game contract.
//!
//! The table lists every remotely callable operation and every emitted
//! notification of the deployed contract, exactly as declared: names,
//! ordered parameter and return types, mutability flags and per-parameter
//! index flags. A generic call-encoding library consumes these entries to
//! build transactions and decode logs.
//!
//! ## Components
//!
//! - **Entries**: [`FunctionEntry`] and [`EventEntry`], unified as [`Entry`]
//! - **Table**: [`InterfaceTable`], an immutable, indexed entry list
//! - **Types**: [`ParamType`], the parsed external type vocabulary
//! - **Hashes**: selectors and topics derived from canonical signatures
//!
//! ## Example
//!
//! ```rust
//! use cryptocolors_abi::cryptocolors;
//!
//! let table = cryptocolors();
//! let withdraw = table.operation("withdraw").unwrap();
//! assert!(withdraw.inputs.is_empty());
//! assert!(!withdraw.is_payable());
//! assert_eq!(withdraw.signature(), "withdraw()");
//!
//! assert!(table.resolve("doesNotExist").unwrap_err().is_not_found());
//! ```

pub mod bundled;
pub mod entry;
pub mod error;
pub mod hash;
pub mod param_type;
pub mod table;

// Re-exports
pub use bundled::{cryptocolors, CRYPTOCOLORS_ABI_JSON};
pub use entry::{
    Entry, EntryRef, EventEntry, EventKind, EventParam, FunctionEntry, FunctionKind, Param,
    StateMutability,
};
pub use error::{AbiError, AbiResult, Category};
pub use hash::{Selector, Topic};
pub use param_type::ParamType;
pub use table::InterfaceTable;
