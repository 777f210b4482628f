use std::fmt::{self, Debug, Display, Formatter};
use std::string::FromUtf8Error;

/// An error related to device information
#[derive(thiserror::Error)]
pub enum Error {
    /// Error converting an integer value to a Rust enum
    #[error("Invalid flag value {value} for type {context}")]
    InvalidFlag { value: i64, context: &'static str },

    /// Error parsing the canonical name of a descriptor or enum value
    #[error("Unknown name {name:?} for type {context}")]
    UnknownName { name: String, context: &'static str },

    /// Data length mismatch
    #[error("Expected data length of {expected}, got data length {actual}")]
    InvalidDataLength { expected: usize, actual: usize },

    /// The data held a different number of elements than the target type
    #[error("Expected {expected} elements for {type_name}, got {actual}")]
    InvalidElementCount {
        type_name: String,
        expected: usize,
        actual: usize,
    },

    /// String information wasn't valid UTF-8
    #[error("Invalid string data: {0}")]
    InvalidString(#[from] FromUtf8Error),

    /// The information source holds no value for the given parameter
    #[error("{context}: parameter {param} is not supported")]
    UnsupportedParam { param: String, context: &'static str },
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

/// A device information result type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn test_error_debug_matches_display() {
        let e = Error::InvalidFlag {
            value: 0x2a,
            context: "LocalMemType",
        };
        assert_eq!(format!("{:?}", e), format!("{}", e));
        assert!(dbg!(format!("{}", e)).contains("value 42 "));
    }

    #[test]
    fn test_negative_flag_value() {
        let e = Error::InvalidFlag {
            value: -1,
            context: "DeviceInfo",
        };
        assert_eq!(
            dbg!(format!("{}", e)),
            "Invalid flag value -1 for type DeviceInfo"
        );
    }

    #[test]
    fn test_utf8_error_conversion() {
        let utf8 = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let e: Error = utf8.into();
        assert!(matches!(e, Error::InvalidString(_)));
    }
}
