//! Protocol Layer: Protocol Buffer Wire Encoding Helpers
//!
//! Prinsip desain:
//! - Stack-only: Encode ke array berukuran tetap, tidak ada alokasi
//! - Size-first: Ukuran hasil encode bisa dihitung sebelum buffer dibuat
//! - Unsigned only: Semua shift logical, tidak ada sign-extension

mod varint;
mod wire_type;

pub use varint::{
    decode_varint, encode_varint32, encode_varint64, varint32_size, varint64_size, zigzag32,
    zigzag64, MAX_VARINT32_BYTES, MAX_VARINT64_BYTES,
};
pub use wire_type::{decode_tag, make_tag, split_tag, WireType, TAG_TYPE_BITS};
