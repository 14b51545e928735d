/// ASN.1 parse errors.
///
/// This is a closed set: the parser state after any variant other than
/// [`Asn1Error::Eof`] is indeterminate and the token tree must be treated
/// as aborted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Asn1Error {
    /// Clean end of the current scope: the cursor sits exactly on the end
    /// of the enclosing parent (at the outermost scope, the end of input).
    #[error("end of current scope")]
    Eof,

    /// Violation of X.690 or of the caller contract.
    #[error("malformed DER/BER encoding")]
    Invalid,

    /// A decoded value does not fit the implementation word, or a caller
    /// buffer is too small for the output.
    #[error("value or buffer capacity exceeded")]
    Memory,

    /// The length field uses more octets than the length word holds.
    #[error("unsupported length encoding")]
    Unsupported,
}
