//! Base-128 Varint Encoding
//!
//! Layout per byte:
//! ┌───┬───────────────┐
//! │ C │ payload (7b)  │   C = 1 jika masih ada byte berikutnya
//! └───┴───────────────┘
//!
//! Group 7-bit disusun little-endian (group paling rendah duluan).
//! Encode langsung ke stack array, tidak ada alokasi.

/// Panjang maksimum varint untuk nilai 32-bit
pub const MAX_VARINT32_BYTES: usize = 5;
/// Panjang maksimum varint untuk nilai 64-bit
pub const MAX_VARINT64_BYTES: usize = 10;

const CONTINUATION: u8 = 0x80;
const PAYLOAD_MASK: u8 = 0x7F;

/// Encode `value` ke `buf`, return jumlah byte yang terpakai (1..=5)
#[inline(always)]
pub fn encode_varint32(mut value: u32, buf: &mut [u8; MAX_VARINT32_BYTES]) -> usize {
    let mut i = 0;
    while value >= CONTINUATION as u32 {
        buf[i] = ((value as u8) & PAYLOAD_MASK) | CONTINUATION;
        value >>= 7;
        i += 1;
    }
    buf[i] = value as u8;
    i + 1
}

/// Encode `value` ke `buf`, return jumlah byte yang terpakai (1..=10)
#[inline(always)]
pub fn encode_varint64(mut value: u64, buf: &mut [u8; MAX_VARINT64_BYTES]) -> usize {
    let mut i = 0;
    while value >= CONTINUATION as u64 {
        buf[i] = ((value as u8) & PAYLOAD_MASK) | CONTINUATION;
        value >>= 7;
        i += 1;
    }
    buf[i] = value as u8;
    i + 1
}

/// Jumlah byte yang dihasilkan `encode_varint32(value)`.
///
/// Dipakai caller untuk menghitung ukuran buffer sebelum alokasi.
#[inline(always)]
pub const fn varint32_size(value: u32) -> usize {
    varint64_size(value as u64)
}

/// Jumlah byte yang dihasilkan `encode_varint64(value)`
#[inline(always)]
pub const fn varint64_size(value: u64) -> usize {
    // nol tetap butuh satu byte
    let bits = 64 - (value | 1).leading_zeros() as usize;
    (bits + 6) / 7
}

/// ZigZag encoding untuk field `sint32`: -1 -> 1, 1 -> 2, -2 -> 3, ...
#[inline(always)]
pub const fn zigzag32(n: i32) -> u32 {
    ((n << 1) ^ (n >> 31)) as u32
}

/// ZigZag encoding untuk field `sint64`
#[inline(always)]
pub const fn zigzag64(n: i64) -> u64 {
    ((n << 1) ^ (n >> 63)) as u64
}

/// Decode satu varint dari awal `buf`.
///
/// Returns `(value, bytes_read)`, atau None jika buffer terpotong,
/// varint lebih panjang dari 10 byte, atau nilainya melebihi 64 bit.
pub fn decode_varint(buf: &[u8]) -> Option<(u64, usize)> {
    let mut value = 0u64;
    for (i, &byte) in buf.iter().take(MAX_VARINT64_BYTES).enumerate() {
        // byte ke-10 hanya boleh membawa bit 63
        if i == MAX_VARINT64_BYTES - 1 && byte > 0x01 {
            return None;
        }
        value |= ((byte & PAYLOAD_MASK) as u64) << (7 * i);
        if byte & CONTINUATION == 0 {
            return Some((value, i + 1));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode32(value: u32) -> Vec<u8> {
        let mut buf = [0u8; MAX_VARINT32_BYTES];
        let len = encode_varint32(value, &mut buf);
        buf[..len].to_vec()
    }

    fn encode64(value: u64) -> Vec<u8> {
        let mut buf = [0u8; MAX_VARINT64_BYTES];
        let len = encode_varint64(value, &mut buf);
        buf[..len].to_vec()
    }

    #[test]
    fn test_known_encodings() {
        assert_eq!(encode32(0), vec![0x00]);
        assert_eq!(encode32(1), vec![0x01]);
        assert_eq!(encode32(127), vec![0x7F]);
        assert_eq!(encode32(128), vec![0x80, 0x01]);
        assert_eq!(encode32(150), vec![0x96, 0x01]);
        assert_eq!(encode32(300), vec![0xAC, 0x02]);
        assert_eq!(encode32(u32::MAX), vec![0xFF, 0xFF, 0xFF, 0xFF, 0x0F]);
    }

    #[test]
    fn test_full_width_u64() {
        let bytes = encode64(u64::MAX);
        assert_eq!(bytes.len(), MAX_VARINT64_BYTES);
        assert!(bytes[..9].iter().all(|&b| b == 0xFF));
        assert_eq!(bytes[9], 0x01);
    }

    #[test]
    fn test_negative_int32_as_u32_truncates() {
        // int32 -1 yang di-cast ke u32 jadi 0xFFFFFFFF, tetap 5 byte
        assert_eq!(encode32(-1i32 as u32), vec![0xFF, 0xFF, 0xFF, 0xFF, 0x0F]);
    }

    #[test]
    fn test_size_matches_encoded_len() {
        let samples = [
            0u64,
            1,
            127,
            128,
            16_383,
            16_384,
            (1 << 21) - 1,
            1 << 21,
            u32::MAX as u64,
            1 << 35,
            (1 << 56) - 1,
            1 << 63,
            u64::MAX,
        ];
        for &v in &samples {
            assert_eq!(varint64_size(v), encode64(v).len(), "value {}", v);
            if v <= u32::MAX as u64 {
                assert_eq!(varint32_size(v as u32), encode32(v as u32).len());
            }
        }
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode_varint(&[0x96, 0x01]), Some((150, 2)));
        assert_eq!(decode_varint(&[0x08, 0x61]), Some((8, 1)));
        assert_eq!(decode_varint(&encode64(u64::MAX)), Some((u64::MAX, 10)));
        // terpotong
        assert_eq!(decode_varint(&[0x80, 0x80]), None);
        assert_eq!(decode_varint(&[]), None);
        // lebih dari 10 byte
        assert_eq!(decode_varint(&[0xFF; 11]), None);
    }

    #[test]
    fn test_decode_rejects_bits_beyond_u64() {
        let mut bytes = [0xFFu8; MAX_VARINT64_BYTES];
        bytes[9] = 0x7F;
        assert_eq!(decode_varint(&bytes), None);

        bytes[9] = 0x02;
        assert_eq!(decode_varint(&bytes), None);

        // 0x01 di byte terakhir = bit 63, masih valid
        bytes[9] = 0x01;
        assert_eq!(decode_varint(&bytes), Some((u64::MAX, 10)));
        assert_eq!(decode_varint(&encode64(1 << 63)), Some((1 << 63, 10)));
    }

    #[test]
    fn test_zigzag() {
        assert_eq!(zigzag32(0), 0);
        assert_eq!(zigzag32(-1), 1);
        assert_eq!(zigzag32(1), 2);
        assert_eq!(zigzag32(-2), 3);
        assert_eq!(zigzag32(i32::MAX), u32::MAX - 1);
        assert_eq!(zigzag32(i32::MIN), u32::MAX);
        assert_eq!(zigzag64(-2), 3);
        assert_eq!(zigzag64(i64::MIN), u64::MAX);
    }
}
