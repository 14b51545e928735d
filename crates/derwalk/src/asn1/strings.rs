//! Restricted character string validation and copying (8.23).

use super::{tags, TagClass, Token};
use derwalk_types::Asn1Error;

#[derive(PartialEq)]
enum Utf8State {
    Leading,
    Continuation,
}

// PrintableString alphabet (X.680 41.4): space plus 0x27..=0x7A without
// the five excluded punctuation characters.
fn printable_char(byte: u8) -> bool {
    if byte == 0x20 {
        return true;
    }
    if !(0x27..=0x7A).contains(&byte) {
        return false;
    }
    !matches!(byte, 0x2A | 0x3B | 0x3C | 0x3E | 0x40)
}

// Permissive UTF-8 well-formedness check: leading bytes 0xD0..=0xF4 derive
// their sequence length from the high nibble, which admits some sequences
// (e.g. the surrogate range) that strict RFC 3629 decoders reject. Overlong
// 2-byte forms (0xC0/0xC1) and stray continuation bytes are rejected, and a
// buffer ending mid-sequence is malformed.
fn utf8_well_formed(data: &[u8]) -> bool {
    let mut state = Utf8State::Leading;
    let mut remaining = 0u32;

    for &byte in data {
        match state {
            Utf8State::Leading => {
                if byte < 0x80 {
                    continue;
                }

                remaining = if (0xC2..0xD0).contains(&byte) {
                    1
                } else if (0xD0..0xF5).contains(&byte) {
                    u32::from(byte >> 4) - 0xC
                } else {
                    // 0x80..=0xBF continuation, 0xC0/0xC1 overlong,
                    // 0xF5..=0xFF out of range
                    return false;
                };

                state = Utf8State::Continuation;
            }
            Utf8State::Continuation => {
                if !(0x80..0xC0).contains(&byte) {
                    return false;
                }

                remaining -= 1;
                if remaining == 0 {
                    state = Utf8State::Leading;
                }
            }
        }
    }

    state == Utf8State::Leading
}

// Charset check per tag. IA5String and T61String are restricted to
// printable ASCII: the standard allows control codes and code-page
// switching there, but without code-page negotiation we flag both as
// errors. VisibleString gets the same window.
fn validate(token: &Token<'_>) -> bool {
    if token.class != TagClass::Universal {
        return false;
    }

    match token.number {
        tags::PRINTABLE_STRING => token.data.iter().all(|&b| printable_char(b)),
        tags::IA5_STRING | tags::VISIBLE_STRING | tags::T61_STRING => {
            token.data.iter().all(|&b| (0x20..=0x7F).contains(&b))
        }
        tags::UTF8_STRING => utf8_well_formed(token.data),
        _ => false,
    }
}

impl<'a> Token<'a> {
    /// Validate the token's character set and copy its content into `buf`.
    ///
    /// Returns the written prefix of `buf`. The bytes are returned as-is:
    /// for UTF8String the well-formedness check is deliberately looser
    /// than `str::from_utf8`, so no `&str` is handed out.
    pub fn string<'b>(&self, buf: &'b mut [u8]) -> Result<&'b [u8], Asn1Error> {
        if !validate(self) {
            return Err(Asn1Error::Invalid);
        }

        if buf.len() < self.data.len() {
            return Err(Asn1Error::Memory);
        }

        let out = &mut buf[..self.data.len()];
        out.copy_from_slice(self.data);
        Ok(out)
    }

    /// Validate, then compare the content against `expected`.
    pub fn string_eq(&self, expected: &str) -> bool {
        validate(self) && self.data == expected.as_bytes()
    }
}
