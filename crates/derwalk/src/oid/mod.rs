//! Object identifier decoding and comparison.

use core::fmt;

use crate::asn1::{tags, TagClass, Token};
use derwalk_types::Asn1Error;

/// Maximum number of arcs an [`Oid`] holds.
pub const MAX_ARCS: usize = 16;

const MIN_ARCS: usize = 2;

const CONTINUATION_MASK: u8 = 0x80;
const VALUE_MASK: u8 = 0x7F;

/// An object identifier as a fixed-capacity sequence of arcs.
///
/// Unused trailing slots are always zero, so the derived ordering over the
/// backing array is the lexicographic ordering of the arc sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Oid {
    arcs: [u32; MAX_ARCS],
    num: usize,
}

impl Oid {
    /// Build an OID from explicit arc values.
    ///
    /// Intended for compile-time constants such as the [`known`] table;
    /// more than [`MAX_ARCS`] arcs is a caller bug and panics (at
    /// compile time when used in a const).
    pub const fn new(arcs: &[u32]) -> Self {
        assert!(arcs.len() <= MAX_ARCS);

        let mut out = [0u32; MAX_ARCS];
        let mut i = 0;
        while i < arcs.len() {
            out[i] = arcs[i];
            i += 1;
        }

        Oid {
            arcs: out,
            num: arcs.len(),
        }
    }

    /// The decoded arc values.
    pub fn arcs(&self) -> &[u32] {
        &self.arcs[..self.num]
    }

    /// Render the dotted form (e.g. `1.2.840.113549`) into `buf`.
    ///
    /// Fails with `Invalid` for a degenerate OID of fewer than two arcs
    /// and with `Memory` when `buf` runs out.
    pub fn to_str<'b>(&self, buf: &'b mut [u8]) -> Result<&'b str, Asn1Error> {
        use fmt::Write;

        if self.num < MIN_ARCS {
            return Err(Asn1Error::Invalid);
        }

        let mut writer = SliceWriter { buf, len: 0 };
        write!(writer, "{}", self).map_err(|_| Asn1Error::Memory)?;

        let len = writer.len;
        let written: &'b [u8] = writer.buf;
        core::str::from_utf8(&written[..len]).map_err(|_| Asn1Error::Invalid)
    }

    fn push(&mut self, arc: u32) -> Result<(), Asn1Error> {
        if self.num >= MAX_ARCS {
            return Err(Asn1Error::Memory);
        }

        self.arcs[self.num] = arc;
        self.num += 1;
        Ok(())
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, arc) in self.arcs().iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{arc}")?;
        }
        Ok(())
    }
}

/// Parse the dotted form, inverting [`Oid::to_str`] and `Display`.
///
/// Components are unsigned decimal; at least two are required. An arc
/// value past 32 bits or more than [`MAX_ARCS`] components is `Memory`.
impl core::str::FromStr for Oid {
    type Err = Asn1Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut oid = Oid::default();

        for part in s.split('.') {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(Asn1Error::Invalid);
            }

            // All-digit input only fails to parse on overflow.
            let arc: u32 = part.parse().map_err(|_| Asn1Error::Memory)?;
            oid.push(arc)?;
        }

        if oid.num < MIN_ARCS {
            return Err(Asn1Error::Invalid);
        }

        Ok(oid)
    }
}

impl<'a> Token<'a> {
    /// Decode an OBJECT IDENTIFIER (8.19).
    ///
    /// The first subidentifier is split per 8.19.4: `min(arc, 80) / 40`
    /// yields the first arc so that arcs under root 2 may exceed 39.
    pub fn oid(&self) -> Result<Oid, Asn1Error> {
        self.expect(TagClass::Universal, tags::OID)?;

        if self.data.is_empty() {
            return Err(Asn1Error::Invalid);
        }

        // 8.19.2: the series must terminate inside this token.
        if self.data[self.data.len() - 1] & CONTINUATION_MASK != 0 {
            return Err(Asn1Error::Invalid);
        }

        let mut oid = Oid::default();
        let mut arc: u32 = 0;
        let mut first_arc = true;

        for &byte in self.data {
            // 8.19.2: a subidentifier must not start with a padding octet.
            if arc == 0 && byte == 0x80 {
                return Err(Asn1Error::Invalid);
            }

            if arc > u32::MAX >> 7 {
                return Err(Asn1Error::Memory);
            }
            arc = (arc << 7) | u32::from(byte & VALUE_MASK);

            if byte & CONTINUATION_MASK != 0 {
                continue;
            }

            if first_arc {
                let root = arc.min(80) / 40;
                oid.push(root)?;
                arc -= root * 40;
                first_arc = false;
            }

            oid.push(arc)?;
            arc = 0;
        }

        Ok(oid)
    }
}

/// OIDs an X.509 consumer matches against.
pub mod known {
    use super::Oid;

    // Signature and key algorithms
    pub const RSA_ENCRYPTION: Oid = Oid::new(&[1, 2, 840, 113549, 1, 1, 1]);
    pub const SHA256_WITH_RSA_ENCRYPTION: Oid = Oid::new(&[1, 2, 840, 113549, 1, 1, 11]);
    pub const EC_PUBLIC_KEY: Oid = Oid::new(&[1, 2, 840, 10045, 2, 1]);
    pub const ECDSA_WITH_SHA256: Oid = Oid::new(&[1, 2, 840, 10045, 4, 3, 2]);

    // Digests
    pub const SHA256: Oid = Oid::new(&[2, 16, 840, 1, 101, 3, 4, 2, 1]);

    // Certificate extensions (RFC 5280)
    pub const KEY_USAGE: Oid = Oid::new(&[2, 5, 29, 15]);
    pub const SUBJECT_ALT_NAME: Oid = Oid::new(&[2, 5, 29, 17]);
    pub const BASIC_CONSTRAINTS: Oid = Oid::new(&[2, 5, 29, 19]);
    pub const EXT_KEY_USAGE: Oid = Oid::new(&[2, 5, 29, 37]);

    // Distinguished name attributes (X.520)
    pub const COMMON_NAME: Oid = Oid::new(&[2, 5, 4, 3]);
    pub const COUNTRY_NAME: Oid = Oid::new(&[2, 5, 4, 6]);
    pub const ORGANIZATION_NAME: Oid = Oid::new(&[2, 5, 4, 10]);
}

struct SliceWriter<'b> {
    buf: &'b mut [u8],
    len: usize,
}

impl fmt::Write for SliceWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let bytes = s.as_bytes();
        let end = self.len.checked_add(bytes.len()).ok_or(fmt::Error)?;
        if end > self.buf.len() {
            return Err(fmt::Error);
        }

        self.buf[self.len..end].copy_from_slice(bytes);
        self.len = end;
        Ok(())
    }
}
