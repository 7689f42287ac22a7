//! The CryptoColors game contract's deployed interface, embedded at build time.

use once_cell::sync::Lazy;

use crate::table::InterfaceTable;

/// Raw JSON of the deployed interface.
pub const CRYPTOCOLORS_ABI_JSON: &str = include_str!("../data/cryptocolors_abi.json");

static CRYPTOCOLORS: Lazy<InterfaceTable> = Lazy::new(|| {
    InterfaceTable::from_json_str(CRYPTOCOLORS_ABI_JSON)
        .unwrap_or_else(|err| panic!("embedded CryptoColors interface is invalid: {err}"))
});

/// The shared, lazily parsed CryptoColors table.
///
/// Parsing happens once per process; every call returns the same table.
pub fn cryptocolors() -> &'static InterfaceTable {
    &CRYPTOCOLORS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_table_parses() {
        let table = InterfaceTable::from_json_str(CRYPTOCOLORS_ABI_JSON).unwrap();
        assert_eq!(table.len(), 34);
        assert_eq!(&table, cryptocolors());
    }

    #[test]
    fn repeated_access_shares_one_table() {
        assert!(std::ptr::eq(cryptocolors(), cryptocolors()));
    }
}
