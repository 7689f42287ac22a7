//! Keccak-256 based identifiers for operations and notifications.

use sha3::{Digest, Keccak256};

/// Leading four bytes of an operation signature hash.
pub type Selector = [u8; 4];

/// Full signature hash identifying a notification in the log index.
pub type Topic = [u8; 32];

/// Computes the Keccak-256 hash of the input data.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Selector of a canonical operation signature such as `withdraw()`.
pub fn selector(signature: &str) -> Selector {
    let hash = keccak256(signature.as_bytes());
    let mut out = [0u8; 4];
    out.copy_from_slice(&hash[..4]);
    out
}

/// Topic of a canonical notification signature.
pub fn topic(signature: &str) -> Topic {
    keccak256(signature.as_bytes())
}

/// Renders bytes as `0x`-prefixed lowercase hex.
pub fn to_hex_prefixed(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Parses `0x`-prefixed (or bare) hex into a fixed-size array.
pub fn from_hex_prefixed<const N: usize>(value: &str) -> Option<[u8; N]> {
    let value = value.strip_prefix("0x").unwrap_or(value);
    let bytes = hex::decode(value).ok()?;
    bytes.try_into().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keccak_of_empty_input() {
        assert_eq!(
            hex::encode(keccak256(b"")),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn well_known_selectors() {
        assert_eq!(selector("withdraw()"), [0x3c, 0xcf, 0xd6, 0x0b]);
        assert_eq!(selector("owner()"), [0x8d, 0xa5, 0xcb, 0x5b]);
        assert_eq!(
            to_hex_prefixed(&selector("transfer(address,uint256)")),
            "0xa9059cbb"
        );
    }

    #[test]
    fn well_known_topic() {
        assert_eq!(
            to_hex_prefixed(&topic("Transfer(address,address,uint256)")),
            "0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef"
        );
    }

    #[test]
    fn hex_parsing() {
        assert_eq!(from_hex_prefixed::<4>("0x3ccfd60b"), Some([0x3c, 0xcf, 0xd6, 0x0b]));
        assert_eq!(from_hex_prefixed::<4>("3ccfd60b"), Some([0x3c, 0xcf, 0xd6, 0x0b]));
        assert_eq!(from_hex_prefixed::<4>("0x3ccfd6"), None);
        assert_eq!(from_hex_prefixed::<4>("0xzz"), None);
    }
}
