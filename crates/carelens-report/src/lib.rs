//! # carelens-report
//!
//! Write-only exports of booking results: the plain-text risk summary and
//! the paginated PDF booking document.
//!
//! Both renders are one-shot — fixed field order, no round-trip, nothing is
//! ever parsed back out of an export.

pub mod pdf;
pub mod text;

pub use pdf::{booking_pdf_bytes, pdf_file_name};
pub use text::{render_text, text_file_name};
