pub mod coerce;
pub mod dynamic;
pub mod header;
pub mod pipeline;
pub mod template_key;
pub mod unique;

pub use coerce::{Coercion, coerce, type_mismatch_message};
pub use dynamic::{DynamicRecord, dynamic_schema};
pub use header::{HeaderColumn, resolve_headers, strip_required_marker};
pub use pipeline::{
    DuplicateHeaderPolicy, ImportError, ImportOptions, RecordsValidator, import_sheet,
    run_validators,
};
pub use template_key::validate_template_key;
pub use unique::UniquenessTracker;
