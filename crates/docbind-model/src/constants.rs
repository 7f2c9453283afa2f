//! Protocol and format constants shared by the import and export paths.
//!
//! The key-sheet constants are part of the on-disk template protocol: the
//! writer that seeds a protected template and the reader that validates it
//! must agree on these exact strings. Do not change them without reissuing
//! every protected template in circulation.

/// Sheet read when a record schema declares no sheet of its own.
pub const DEFAULT_SHEET_NAME: &str = "Sheet1";

/// Name of the hidden worksheet carrying the template key.
pub const KEY_SHEET_NAME: &str = "Key";

/// Password protecting the key sheet.
pub const KEY_SHEET_PASSWORD: &str =
    "f2f9068b283f0c9a22d0326c27769bc79cff9dfd15ed147d47bc4ad91d270fd1";

/// Cell of the key sheet holding the template key.
pub const KEY_CELL: &str = "A2";

/// Expected template key value.
pub const TEMPLATE_KEY: &str =
    "724626c32d37f9b78c22793bc1fb802748f80cb5ce4b58cedefbee3914271d66";

/// Default date format (`dd/MM/yyyy`), chrono syntax.
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

/// Default date-time format (`dd/MM/yyyy HH:mm:ss`), chrono syntax.
pub const DEFAULT_DATETIME_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Default pattern for email rules without an explicit pattern.
pub const DEFAULT_EMAIL_PATTERN: &str = r#"^(?:[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*|"(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21\x23-\x5b\x5d-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])*")@(?:(?:[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?\.)+[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?|\[(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?|[a-zA-Z0-9-]*[a-zA-Z0-9]:(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21-\x5a\x53-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])+)\])\S+"#;

/// Default pattern for phone-number rules without an explicit pattern.
pub const DEFAULT_PHONE_PATTERN: &str = r"^\+?[0-9][0-9]{3,25}$";
