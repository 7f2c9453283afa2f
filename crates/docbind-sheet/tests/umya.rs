use docbind_sheet::{SheetError, UmyaWorkbook, Workbook};

fn sample_workbook() -> UmyaWorkbook {
    let mut book = UmyaWorkbook::new();
    book.set_cell_text("Sheet1", 0, 0, "Name").unwrap();
    book.set_cell_text("Sheet1", 0, 1, "Qty").unwrap();
    book.set_cell_text("Sheet1", 1, 0, "widget").unwrap();
    book.set_cell_text("Sheet1", 1, 1, "3").unwrap();
    book
}

#[test]
fn cells_round_trip_through_save() {
    let book = sample_workbook();
    let bytes = book.save_to_bytes().expect("save");
    let reopened = UmyaWorkbook::from_bytes(&bytes).expect("reopen");
    assert_eq!(reopened.cell_text("Sheet1", 1, 0).unwrap(), "widget");
    assert_eq!(reopened.cell_text_at("Sheet1", "B2").unwrap(), "3");
    assert_eq!(reopened.cell_text("Sheet1", 5, 5).unwrap(), "");
}

#[test]
fn data_bounds_track_populated_region() {
    let book = sample_workbook();
    assert_eq!(book.data_bounds("Sheet1").unwrap(), Some((1, 1)));

    let empty = UmyaWorkbook::new();
    assert_eq!(empty.data_bounds("Sheet1").unwrap(), None);
}

#[test]
fn missing_sheet_is_reported() {
    let book = sample_workbook();
    assert!(!book.has_sheet("Orders"));
    assert!(matches!(
        book.cell_text("Orders", 0, 0),
        Err(SheetError::SheetNotFound(_))
    ));
}

#[test]
fn added_sheets_are_enumerated_and_unique() {
    let mut book = UmyaWorkbook::new();
    book.add_sheet("Meta").expect("add sheet");
    assert_eq!(book.sheet_names(), vec!["Sheet1", "Meta"]);
    assert!(matches!(
        book.add_sheet("Meta"),
        Err(SheetError::SheetExists(_))
    ));
}

#[test]
fn protection_round_trip_verifies_password() {
    let mut book = UmyaWorkbook::new();
    book.add_sheet("Key").unwrap();
    assert!(!book.is_sheet_protected("Key").unwrap());

    book.protect_sheet("Key", "secret").unwrap();
    assert!(book.is_sheet_protected("Key").unwrap());

    assert!(matches!(
        book.unprotect_sheet("Key", "wrong"),
        Err(SheetError::BadPassword(_))
    ));
    assert!(book.is_sheet_protected("Key").unwrap());

    book.unprotect_sheet("Key", "secret").unwrap();
    assert!(!book.is_sheet_protected("Key").unwrap());
    assert!(matches!(
        book.unprotect_sheet("Key", "secret"),
        Err(SheetError::NotProtected(_))
    ));
}

#[test]
fn protection_survives_save_and_reopen() {
    let mut book = UmyaWorkbook::new();
    book.add_sheet("Key").unwrap();
    book.set_cell_text_at("Key", "A2", "value").unwrap();
    book.protect_sheet("Key", "secret").unwrap();
    book.hide_sheet("Key").unwrap();

    let bytes = book.save_to_bytes().expect("save");
    let mut reopened = UmyaWorkbook::from_bytes(&bytes).expect("reopen");
    assert!(reopened.is_sheet_protected("Key").unwrap());
    reopened.unprotect_sheet("Key", "secret").unwrap();
    assert_eq!(reopened.cell_text_at("Key", "A2").unwrap(), "value");
}

#[test]
fn styling_notes_and_merges_do_not_disturb_content() {
    let mut book = sample_workbook();
    book.fill_cell("Sheet1", "B2", "FFFF0000").unwrap();
    book.set_font_color("Sheet1", "B2", "FFFFFFFF").unwrap();
    book.add_note("Sheet1", "B2", "first line\nsecond", 120, 50)
        .unwrap();
    book.merge_range("Sheet1", "A4:B5").unwrap();

    let bytes = book.save_to_bytes().expect("save");
    let reopened = UmyaWorkbook::from_bytes(&bytes).expect("reopen");
    assert_eq!(reopened.cell_text_at("Sheet1", "B2").unwrap(), "3");
}

#[test]
fn invalid_bytes_fail_to_open() {
    assert!(matches!(
        UmyaWorkbook::from_bytes(&[1, 2, 3, 4]),
        Err(SheetError::Read(_))
    ));
}
