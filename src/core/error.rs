//! Error type untuk operasi tulis ke output stream

use thiserror::Error;

/// Kegagalan saat menulis ke [`OutputStream`](super::OutputStream).
///
/// Overflow berarti caller salah menghitung ukuran buffer, bukan kondisi
/// sementara. Jangan retry; buang stream-nya.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireError {
    #[error("output stream doesn't have enough buffer: requested {requested} bytes, {available} available")]
    BufferOverflow { requested: usize, available: usize },
}

pub type Result<T = ()> = std::result::Result<T, WireError>;
