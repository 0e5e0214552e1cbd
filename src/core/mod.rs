//! Core module: Fixed-Capacity Wire Output Buffer
//!
//! Prinsip desain:
//! - Pre-Sized: Buffer dialokasi sekali, ukuran dihitung caller
//! - All-or-Nothing: Write yang overflow tidak menulis apa pun
//! - Typed Errors: Overflow dilaporkan lewat `Result`, bukan panic

mod error;
mod output_stream;

pub use error::{Result, WireError};
pub use output_stream::OutputStream;
