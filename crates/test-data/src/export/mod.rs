//! Export of well-known record ids to a Postman environment file.
//!
//! [`IdentifierExporter`] looks up one record per [`ExportKey`] and writes
//! the ids as environment variables. If any key has no matching record the
//! export is aborted and the target file is left as it was.

mod environment;
mod exporter;
mod keys;

pub use environment::{EnvironmentValue, PostmanEnvironment, format_exported_at};
pub use exporter::{ExportError, ExportOutcome, IdentifierExporter, LookupResults, NO_RESULT};
pub use keys::{ExportKey, Lookup};
