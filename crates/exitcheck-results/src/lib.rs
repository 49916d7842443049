//! Reading persisted exit check results back.
//!
//! The reader is lenient: a document written by an older or foreign writer
//! still yields a [`ResultDocument`], with missing fields defaulted.

mod model;
mod reader;
mod summary;

pub use model::{ResultDocument, ResultEntry, UNKNOWN_STATUS};
pub use reader::{MISSING_FILE_MARKER, parse_captured_output, parse_document, read_result_file};
