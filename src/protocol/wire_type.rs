//! Wire type dan komposisi tag
//!
//! Tag = `(field_number << 3) | wire_type`. Output stream tidak pernah
//! menyusun tag sendiri; helper ini untuk layer message di atasnya.

use super::varint::decode_varint;

/// Jumlah bit rendah tag yang dipakai wire type
pub const TAG_TYPE_BITS: u32 = 3;
const TAG_TYPE_MASK: u32 = (1 << TAG_TYPE_BITS) - 1;

/// Tipe encoding field di wire
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireType {
    /// int32, int64, uint32, uint64, sint32, sint64, bool, enum
    Varint = 0,
    /// fixed64, sfixed64, double
    Fixed64 = 1,
    /// string, bytes, embedded message, packed repeated
    LengthDelimited = 2,
    /// Group start (deprecated)
    StartGroup = 3,
    /// Group end (deprecated)
    EndGroup = 4,
    /// fixed32, sfixed32, float
    Fixed32 = 5,
}

impl WireType {
    #[inline(always)]
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Varint),
            1 => Some(Self::Fixed64),
            2 => Some(Self::LengthDelimited),
            3 => Some(Self::StartGroup),
            4 => Some(Self::EndGroup),
            5 => Some(Self::Fixed32),
            _ => None,
        }
    }
}

/// Susun tag dari field number dan wire type
#[inline(always)]
pub const fn make_tag(field_number: u32, wire_type: WireType) -> u32 {
    (field_number << TAG_TYPE_BITS) | wire_type as u32
}

/// Pecah tag jadi `(field_number, wire_type)`
#[inline(always)]
pub fn split_tag(tag: u32) -> Option<(u32, WireType)> {
    let wire_type = WireType::from_u8((tag & TAG_TYPE_MASK) as u8)?;
    Some((tag >> TAG_TYPE_BITS, wire_type))
}

/// Decode tag varint dari awal `buf`.
///
/// Returns `(field_number, wire_type, bytes_read)`. None jika varint
/// tidak valid, nilainya tidak muat di u32, atau wire type tidak dikenal.
pub fn decode_tag(buf: &[u8]) -> Option<(u32, WireType, usize)> {
    let (raw, len) = decode_varint(buf)?;
    let tag = u32::try_from(raw).ok()?;
    let (field_number, wire_type) = split_tag(tag)?;
    Some((field_number, wire_type, len))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{encode_varint64, MAX_VARINT64_BYTES};

    #[test]
    fn test_make_tag() {
        assert_eq!(make_tag(1, WireType::Varint), 0x08);
        assert_eq!(make_tag(2, WireType::LengthDelimited), 0x12);
        assert_eq!(make_tag(3, WireType::Fixed32), 0x1D);
        assert_eq!(make_tag(16, WireType::Varint), 0x80);
    }

    #[test]
    fn test_split_tag() {
        assert_eq!(split_tag(0x08), Some((1, WireType::Varint)));
        assert_eq!(split_tag(0x11), Some((2, WireType::Fixed64)));
        // wire type 6 dan 7 tidak valid
        assert_eq!(split_tag(0x0E), None);
        assert_eq!(split_tag(0x0F), None);
    }

    #[test]
    fn test_decode_tag() {
        assert_eq!(decode_tag(&[0x08, 0x61]), Some((1, WireType::Varint, 1)));
        assert_eq!(decode_tag(&[0x80, 0x01]), Some((16, WireType::Varint, 2)));
        assert_eq!(decode_tag(&[0x80]), None);
    }

    #[test]
    fn test_decode_tag_rejects_values_above_u32() {
        // low 32 bit = 0x08 (field 1, varint); tidak boleh dipotong jadi tag valid
        let mut buf = [0u8; MAX_VARINT64_BYTES];
        let len = encode_varint64((1u64 << 32) | 0x08, &mut buf);
        assert_eq!(decode_tag(&buf[..len]), None);
    }
}
