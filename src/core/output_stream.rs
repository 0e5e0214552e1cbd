//! Fixed-Capacity Output Stream
//!
//! Buffer dialokasi sekali saat `new`, ukuran tidak pernah berubah.
//! Setiap write dicek dulu terhadap sisa kapasitas; kalau tidak cukup,
//! tidak ada satu byte pun yang ditulis.
//!
//! Invariant: `position() + available() == capacity()`

use tracing::{trace, warn};

use super::error::{Result, WireError};
use crate::protocol::{encode_varint32, encode_varint64, MAX_VARINT32_BYTES, MAX_VARINT64_BYTES};

/// Pre-allocated output buffer untuk protocol buffer wire format
///
/// Caller harus menghitung ukuran total pesan sebelum membuat stream.
/// Byte yang belum ditulis tetap nol.
#[derive(Debug)]
pub struct OutputStream {
    buffer: Box<[u8]>,
    current: usize,
    remaining: usize,
}

impl OutputStream {
    /// Membuat stream dengan buffer `size` byte, semua nol.
    ///
    /// Size nol valid; semua write non-kosong akan gagal.
    pub fn new(size: usize) -> Self {
        trace!(capacity = size, "output stream allocated");
        Self {
            buffer: vec![0u8; size].into_boxed_slice(),
            current: 0,
            remaining: size,
        }
    }

    /// Tulis `data` apa adanya di posisi cursor.
    ///
    /// Returns [`WireError::BufferOverflow`] tanpa mengubah buffer
    /// jika sisa kapasitas kurang dari `data.len()`.
    #[inline(always)]
    pub fn write_raw(&mut self, data: &[u8]) -> Result {
        let size = data.len();
        if self.remaining < size {
            warn!(
                requested = size,
                available = self.remaining,
                position = self.current,
                "output stream doesn't have enough buffer"
            );
            return Err(WireError::BufferOverflow {
                requested: size,
                available: self.remaining,
            });
        }

        self.buffer[self.current..self.current + size].copy_from_slice(data);
        self.current += size;
        self.remaining -= size;

        debug_assert_eq!(self.current + self.remaining, self.buffer.len());
        Ok(())
    }

    /// Varint 32-bit (1..=5 byte).
    ///
    /// Nilai signed atau lebih lebar di-cast `as u32` oleh caller,
    /// jadi diinterpretasikan modulo 2^32.
    #[inline(always)]
    pub fn write_varint32(&mut self, value: u32) -> Result {
        let mut bytes = [0u8; MAX_VARINT32_BYTES];
        let size = encode_varint32(value, &mut bytes);
        self.write_raw(&bytes[..size])
    }

    /// Varint 64-bit (1..=10 byte)
    #[inline(always)]
    pub fn write_varint64(&mut self, value: u64) -> Result {
        let mut bytes = [0u8; MAX_VARINT64_BYTES];
        let size = encode_varint64(value, &mut bytes);
        self.write_raw(&bytes[..size])
    }

    /// 4 byte little-endian
    #[inline(always)]
    pub fn write_fixed32(&mut self, value: u32) -> Result {
        self.write_raw(&value.to_le_bytes())
    }

    /// 8 byte little-endian
    #[inline(always)]
    pub fn write_fixed64(&mut self, value: u64) -> Result {
        self.write_raw(&value.to_le_bytes())
    }

    /// Tag di-encode sebagai varint32. Komposisi tag tanggung jawab caller.
    #[inline(always)]
    pub fn write_tag(&mut self, tag: u32) -> Result {
        self.write_varint32(tag)
    }

    /// Seluruh buffer sesuai kapasitas, TIDAK dipotong ke cursor.
    ///
    /// Kalau stream dialokasi lebih besar dari yang ditulis, hasilnya
    /// berisi trailing zero. Pakai [`as_bytes`](Self::as_bytes) untuk
    /// region yang sudah ditulis saja.
    #[inline(always)]
    pub fn data(&self) -> &[u8] {
        &self.buffer
    }

    /// Region yang sudah ditulis: `[0, position())`
    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer[..self.current]
    }

    /// Serahkan buffer (untrimmed) ke transport
    pub fn into_inner(self) -> Box<[u8]> {
        self.buffer
    }

    /// Offset byte berikutnya yang akan ditulis
    #[inline(always)]
    pub fn position(&self) -> usize {
        self.current
    }

    /// Sisa kapasitas
    #[inline(always)]
    pub fn available(&self) -> usize {
        self.remaining
    }

    /// Kapasitas total sejak dibuat
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }
}
