//! Parsed form of the external type vocabulary referenced by table entries.
//!
//! Entries keep their original tag strings; `ParamType` exists to validate
//! those tags and to render the canonical spelling used in signatures.

use std::fmt;
use std::str::FromStr;

use crate::error::{AbiError, AbiResult};

/// Deepest array nesting accepted in a type tag.
pub const MAX_ARRAY_DEPTH: usize = 32;

/// A parameter or return type of the remote calling convention.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ParamType {
    /// Unsigned integer of the given bit width.
    Uint(usize),
    /// Signed integer of the given bit width.
    Int(usize),
    /// 20-byte account address.
    Address,
    /// Boolean.
    Bool,
    /// UTF-8 string.
    String,
    /// Dynamic byte sequence.
    Bytes,
    /// Fixed byte sequence of 1 to 32 bytes.
    FixedBytes(usize),
    /// Dynamic array.
    Array(Box<ParamType>),
    /// Fixed-length array.
    FixedArray(Box<ParamType>, usize),
}

impl ParamType {
    /// Parses a type tag such as `uint32`, `address[]` or `bytes32[4]`.
    ///
    /// Tags are matched exactly; surrounding whitespace is not accepted.
    pub fn parse(tag: &str) -> AbiResult<Self> {
        // Array suffixes are peeled right to left without recursion.
        let mut base = tag;
        let mut dims: Vec<Option<usize>> = Vec::new();
        while let Some(stripped) = base.strip_suffix(']') {
            if dims.len() == MAX_ARRAY_DEPTH {
                return Err(AbiError::invalid_type(tag));
            }
            let open = stripped
                .rfind('[')
                .ok_or_else(|| AbiError::invalid_type(tag))?;
            let len = &stripped[open + 1..];
            if len.is_empty() {
                dims.push(None);
            } else {
                let len = parse_digits(len, tag)?;
                dims.push(Some(len));
            }
            base = &stripped[..open];
        }

        let mut ty = Self::parse_elementary(base, tag)?;
        for dim in dims.into_iter().rev() {
            ty = match dim {
                None => ParamType::Array(Box::new(ty)),
                Some(len) => ParamType::FixedArray(Box::new(ty), len),
            };
        }
        Ok(ty)
    }

    fn parse_elementary(base: &str, tag: &str) -> AbiResult<Self> {
        match base {
            "address" => return Ok(ParamType::Address),
            "bool" => return Ok(ParamType::Bool),
            "string" => return Ok(ParamType::String),
            "bytes" => return Ok(ParamType::Bytes),
            "uint" => return Ok(ParamType::Uint(256)),
            "int" => return Ok(ParamType::Int(256)),
            _ => {}
        }

        if let Some(bits) = base.strip_prefix("uint") {
            return parse_width(bits, tag).map(ParamType::Uint);
        }
        if let Some(bits) = base.strip_prefix("int") {
            return parse_width(bits, tag).map(ParamType::Int);
        }
        if let Some(size) = base.strip_prefix("bytes") {
            let size = parse_digits(size, tag)?;
            if (1..=32).contains(&size) {
                return Ok(ParamType::FixedBytes(size));
            }
        }

        Err(AbiError::invalid_type(tag))
    }

    /// Canonical spelling used when hashing signatures.
    pub fn canonical(&self) -> String {
        self.to_string()
    }

    /// Whether the value is dynamically sized in the calling convention.
    pub fn is_dynamic(&self) -> bool {
        match self {
            ParamType::String | ParamType::Bytes | ParamType::Array(_) => true,
            ParamType::FixedArray(inner, _) => inner.is_dynamic(),
            _ => false,
        }
    }
}

fn parse_digits(digits: &str, tag: &str) -> AbiResult<usize> {
    // Reject signs and leading zeros so `uint032` is not silently accepted.
    if digits.is_empty()
        || digits.starts_with('0')
        || !digits.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(AbiError::invalid_type(tag));
    }
    digits.parse().map_err(|_| AbiError::invalid_type(tag))
}

fn parse_width(bits: &str, tag: &str) -> AbiResult<usize> {
    let bits = parse_digits(bits, tag)?;
    if bits % 8 != 0 || !(8..=256).contains(&bits) {
        return Err(AbiError::invalid_type(tag));
    }
    Ok(bits)
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamType::Uint(bits) => write!(f, "uint{bits}"),
            ParamType::Int(bits) => write!(f, "int{bits}"),
            ParamType::Address => f.write_str("address"),
            ParamType::Bool => f.write_str("bool"),
            ParamType::String => f.write_str("string"),
            ParamType::Bytes => f.write_str("bytes"),
            ParamType::FixedBytes(size) => write!(f, "bytes{size}"),
            ParamType::Array(inner) => write!(f, "{inner}[]"),
            ParamType::FixedArray(inner, len) => write!(f, "{inner}[{len}]"),
        }
    }
}

impl FromStr for ParamType {
    type Err = AbiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_table_vocabulary() {
        assert_eq!(ParamType::parse("uint32").unwrap(), ParamType::Uint(32));
        assert_eq!(ParamType::parse("uint256").unwrap(), ParamType::Uint(256));
        assert_eq!(ParamType::parse("address").unwrap(), ParamType::Address);
        assert_eq!(ParamType::parse("string").unwrap(), ParamType::String);
        assert_eq!(
            ParamType::parse("uint32[]").unwrap(),
            ParamType::Array(Box::new(ParamType::Uint(32)))
        );
        assert_eq!(
            ParamType::parse("address[]").unwrap(),
            ParamType::Array(Box::new(ParamType::Address))
        );
    }

    #[test]
    fn nested_and_fixed_arrays() {
        let ty = ParamType::parse("bytes32[2][]").unwrap();
        assert_eq!(
            ty,
            ParamType::Array(Box::new(ParamType::FixedArray(
                Box::new(ParamType::FixedBytes(32)),
                2
            )))
        );
        assert_eq!(ty.to_string(), "bytes32[2][]");
        assert!(ty.is_dynamic());
        assert!(!ParamType::parse("uint8[3]").unwrap().is_dynamic());
        assert!(ParamType::parse("string[3]").unwrap().is_dynamic());
    }

    #[test]
    fn aliases_expand_in_canonical_form() {
        assert_eq!(ParamType::parse("uint").unwrap().canonical(), "uint256");
        assert_eq!(ParamType::parse("int[]").unwrap().canonical(), "int256[]");
    }

    #[test]
    fn rejects_unknown_tags() {
        for tag in [
            "uint7", "uint264", "uint032", "bytes0", "bytes33", "int-8", "float", "uint32[",
            "uint32[0]", "address[x]", "",
        ] {
            let err = ParamType::parse(tag).unwrap_err();
            assert!(matches!(err, AbiError::InvalidType { .. }), "{tag}");
        }
    }

    #[test]
    fn nesting_is_capped() {
        let deepest = format!("uint8{}", "[]".repeat(MAX_ARRAY_DEPTH));
        assert_eq!(ParamType::parse(&deepest).unwrap().to_string(), deepest);

        let too_deep = format!("uint8{}", "[]".repeat(MAX_ARRAY_DEPTH + 1));
        assert!(matches!(
            ParamType::parse(&too_deep).unwrap_err(),
            AbiError::InvalidType { .. }
        ));

        let huge = format!("uint8{}", "[]".repeat(50_000));
        assert!(matches!(
            ParamType::parse(&huge).unwrap_err(),
            AbiError::InvalidType { .. }
        ));
    }

    #[test]
    fn rejects_surrounding_whitespace() {
        for tag in [" uint32 ", "uint32 ", " address", "uint32[] ", "uint32 []", "uint32[ 2]"] {
            assert!(ParamType::parse(tag).is_err(), "{tag:?}");
        }
    }
}
