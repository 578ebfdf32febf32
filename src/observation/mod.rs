//! Observation record extraction.
//!
//! Turns the raw text body of an observation API response into
//! structured records: classify each line, resolve the field schema
//! (from a `#` header line or a caller-supplied list), pair data row
//! tokens with field names, and reduce to either the first valid
//! record or every record passing a predicate. Makes no HTTP calls;
//! one page of text in, records out.

pub mod format;
pub mod line;
pub mod record;
pub mod reduce;
pub mod schema;

pub use format::{Delimiter, SourceFormat};
pub use line::LineKind;
pub use record::ObservationRecord;
pub use schema::ObservationSchema;
