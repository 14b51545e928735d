#![forbid(unsafe_code)]
#![doc = "Streaming DER/BER parser: TLV cursor, value decoders, OIDs."]

#[cfg(feature = "asn1")]
pub mod asn1;

#[cfg(feature = "oid")]
pub mod oid;
