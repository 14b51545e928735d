#![forbid(unsafe_code)]
#![doc = "Common types and error codes for the derwalk DER/BER parser."]

pub mod error;

pub use error::*;
