use docbind_model::constants::{KEY_SHEET_NAME, KEY_SHEET_PASSWORD, TEMPLATE_KEY};
use docbind_model::{CancelToken, FieldError, GroupMode};
use docbind_report::{
    GridRegion, NOTE_CHAR_HEIGHT_PX, NOTE_CHAR_WIDTH_PX, NOTE_PADDING_PX, ReportError,
    annotate_errors, group_by_cell, group_columns, note_size, seed_key_sheet,
};
use docbind_sheet::{UmyaWorkbook, Workbook};

fn error(sheet: &str, cell: &str, message: &str) -> FieldError {
    FieldError::new("Field", sheet, cell, message)
}

#[test]
fn grouping_merges_messages_per_cell_in_encounter_order() {
    let errors = vec![
        error("Sheet1", "B3", "first"),
        error("Sheet1", "C4", "other"),
        error("Sheet1", "B3", "second"),
    ];
    let groups = group_by_cell(&errors);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].cell, "B3");
    assert_eq!(groups[0].messages, vec!["first", "second"]);
    assert_eq!(groups[0].note_body(), "first\nsecond");
    assert_eq!(groups[1].cell, "C4");
    assert_eq!(groups[1].messages, vec!["other"]);
}

#[test]
fn grouping_keeps_sheets_separate() {
    let errors = vec![
        error("A", "B3", "a1"),
        error("B", "B3", "b1"),
        error("A", "B3", "a2"),
    ];
    let groups = group_by_cell(&errors);
    assert_eq!(groups.len(), 2);
    assert_eq!((groups[0].sheet, groups[0].messages.len()), ("A", 2));
    assert_eq!((groups[1].sheet, groups[1].messages.len()), ("B", 1));
}

#[test]
fn note_size_is_a_function_of_longest_line_and_line_count() {
    let (width, height) = note_size("abc\nlonger line");
    assert_eq!(width, 11 * NOTE_CHAR_WIDTH_PX + NOTE_PADDING_PX);
    assert_eq!(height, 2 * NOTE_CHAR_HEIGHT_PX + NOTE_PADDING_PX);
    // Deterministic for the same input.
    assert_eq!(note_size("abc\nlonger line"), (width, height));
}

#[test]
fn no_errors_yields_no_output_document() {
    let mut book = UmyaWorkbook::new();
    let result = annotate_errors(&mut book, &[], &CancelToken::new()).expect("writeback");
    assert!(result.is_none());
}

#[test]
fn writeback_styles_and_annotates_each_distinct_cell_once() {
    let mut book = UmyaWorkbook::new();
    book.set_cell_text_at("Sheet1", "B3", "bad").unwrap();
    book.set_cell_text_at("Sheet1", "C4", "worse").unwrap();

    let errors = vec![
        error("Sheet1", "B3", "Value must be integer."),
        error("Sheet1", "B3", "This field is required."),
        error("Sheet1", "C4", "Invalid format."),
    ];
    let bytes = annotate_errors(&mut book, &errors, &CancelToken::new())
        .expect("writeback")
        .expect("document");

    // The output is a loadable workbook with content intact.
    let reopened = UmyaWorkbook::from_bytes(&bytes).expect("reopen");
    assert_eq!(reopened.cell_text_at("Sheet1", "B3").unwrap(), "bad");
    assert_eq!(reopened.cell_text_at("Sheet1", "C4").unwrap(), "worse");
}

#[test]
fn errors_for_absent_sheets_are_skipped() {
    let mut book = UmyaWorkbook::new();
    book.set_cell_text_at("Sheet1", "A1", "x").unwrap();
    let errors = vec![
        error("Ghost", "A1", "nobody home"),
        error("Sheet1", "A1", "real"),
    ];
    let bytes = annotate_errors(&mut book, &errors, &CancelToken::new())
        .expect("writeback")
        .expect("document");
    assert!(UmyaWorkbook::from_bytes(&bytes).is_ok());
}

#[test]
fn cancelled_writeback_returns_the_cancellation_error() {
    let mut book = UmyaWorkbook::new();
    let cancel = CancelToken::new();
    cancel.cancel();
    let result = annotate_errors(&mut book, &[error("Sheet1", "A1", "x")], &cancel);
    assert!(matches!(result, Err(ReportError::Cancelled)));
}

#[test]
fn seeded_key_sheet_carries_the_protected_template_key() {
    let mut book = UmyaWorkbook::new();
    assert!(seed_key_sheet(&mut book).expect("seed"));
    assert!(book.is_sheet_protected(KEY_SHEET_NAME).unwrap());
    book.unprotect_sheet(KEY_SHEET_NAME, KEY_SHEET_PASSWORD)
        .expect("fixed password");
    assert_eq!(
        book.cell_text_at(KEY_SHEET_NAME, "A2").unwrap(),
        TEMPLATE_KEY
    );
}

#[test]
fn seeding_twice_leaves_the_workbook_untouched() {
    let mut book = UmyaWorkbook::new();
    assert!(seed_key_sheet(&mut book).expect("seed"));
    assert!(!seed_key_sheet(&mut book).expect("second seed"));
}

#[test]
fn grouped_columns_merge_without_disturbing_values() {
    let mut book = UmyaWorkbook::new();
    // Header plus four data rows; anchor values in column A start two runs.
    book.set_cell_text("Sheet1", 0, 0, "Order").unwrap();
    book.set_cell_text("Sheet1", 0, 1, "Item").unwrap();
    book.set_cell_text("Sheet1", 1, 0, "A-1").unwrap();
    book.set_cell_text("Sheet1", 1, 1, "bolt").unwrap();
    book.set_cell_text("Sheet1", 2, 1, "nut").unwrap();
    book.set_cell_text("Sheet1", 3, 0, "A-2").unwrap();
    book.set_cell_text("Sheet1", 3, 1, "washer").unwrap();
    book.set_cell_text("Sheet1", 4, 1, "screw").unwrap();

    let region = GridRegion {
        first_row: 0,
        first_column: 0,
        row_count: 5,
    };
    group_columns(&mut book, "Sheet1", &region, &[0], GroupMode::ValueRuns).expect("group");
    assert_eq!(book.cell_text("Sheet1", 1, 0).unwrap(), "A-1");

    group_columns(&mut book, "Sheet1", &region, &[1], GroupMode::All).expect("group all");
    assert_eq!(book.cell_text("Sheet1", 1, 1).unwrap(), "bolt");

    // Too-small regions are ignored.
    let tiny = GridRegion {
        first_row: 0,
        first_column: 0,
        row_count: 2,
    };
    group_columns(&mut book, "Sheet1", &tiny, &[0], GroupMode::All).expect("tiny");
}
