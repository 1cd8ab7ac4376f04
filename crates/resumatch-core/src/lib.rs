//! Resume keyword matching and optimization
//!
//! This crate provides the core analysis pipeline behind the resume
//! optimizer: extract plain text from an uploaded PDF or DOCX, compare it
//! against a job description by keyword-set overlap, append optimization
//! suggestions, and serialize the result back into a downloadable DOCX.
//!
//! All operations are pure and synchronous: bytes and strings in, bytes and
//! strings out. File storage, persistence, and any transport layer are the
//! caller's concern.

pub mod compare;
pub mod error;
pub mod export;
pub mod extract;
pub mod optimize;

pub use compare::{compare, tokenize, Analysis};
pub use error::ResumatchError;
pub use export::export_docx;
pub use extract::{extract_text, FileType};
pub use optimize::optimize;
