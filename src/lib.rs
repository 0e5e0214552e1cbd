//! Protowire - Fixed-Capacity Protocol Buffer Wire Writer
//!
//! Arsitektur:
//! - Pre-Sized: Caller menghitung ukuran pesan, buffer dialokasi sekali
//! - Varint + Fixed: Base-128 varint dan little-endian fixed32/fixed64
//! - All-or-Nothing Writes: Overflow terdeteksi sebelum buffer diubah
//!
//! ```
//! use protowire::protocol::{make_tag, varint32_size, WireType};
//! use protowire::OutputStream;
//!
//! let tag = make_tag(1, WireType::Varint);
//! let mut stream = OutputStream::new(varint32_size(tag) + varint32_size(97));
//! stream.write_tag(tag)?;
//! stream.write_varint32(97)?;
//! assert_eq!(stream.data(), &[0x08, 0x61]);
//! # Ok::<(), protowire::WireError>(())
//! ```

pub mod core;
pub mod protocol;

pub use crate::core::{OutputStream, Result, WireError};
