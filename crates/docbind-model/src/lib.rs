pub mod cancel;
pub mod cell;
pub mod constants;
pub mod error;
pub mod export;
pub mod messages;
pub mod record;
pub mod report;
pub mod rule;
pub mod schema;
pub mod value;

pub use cancel::CancelToken;
pub use cell::{cell_name, parse_cell_name};
pub use error::FieldError;
pub use export::{
    ColumnGroup, DocumentResponse, ExportBatchItem, ExportBatchRequest, ExportRequest, GroupMode,
};
pub use record::{FieldBinding, RecordSchema};
pub use report::{ImportReport, ImportedRecord};
pub use rule::Rule;
pub use schema::{FieldSchema, SheetDescriptor};
pub use value::{FieldType, FieldValue};
