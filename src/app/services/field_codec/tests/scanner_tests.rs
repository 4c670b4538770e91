//! Tests for delimiter scanning

use crate::app::services::field_codec::{FieldCursor, extract_field};

#[test]
fn test_extract_field_stops_at_comma() {
    assert_eq!(extract_field("PS,1451,NA"), "PS");
}

#[test]
fn test_extract_field_stops_at_newline() {
    assert_eq!(extract_field("SFO\n1987"), "SFO");
}

#[test]
fn test_extract_field_runs_to_end() {
    assert_eq!(extract_field("LateAircraftDelay"), "LateAircraftDelay");
    assert_eq!(extract_field(""), "");
}

#[test]
fn test_extract_field_ignores_quotes() {
    // Quotes do not protect commas
    assert_eq!(extract_field("\"Dallas, TX\",x"), "\"Dallas");
}

#[test]
fn test_cursor_yields_fields_in_order() {
    let mut cursor = FieldCursor::new("1987,10,,NA");

    assert_eq!(cursor.next_field(), Some("1987"));
    assert_eq!(cursor.next_field(), Some("10"));
    assert_eq!(cursor.next_field(), Some(""));
    assert_eq!(cursor.next_field(), Some("NA"));
    assert_eq!(cursor.next_field(), None);
    assert_eq!(cursor.fields_read(), 4);
}

#[test]
fn test_cursor_trailing_comma_gives_empty_last_field() {
    let mut cursor = FieldCursor::new("a,b,");

    assert_eq!(cursor.next_field(), Some("a"));
    assert_eq!(cursor.next_field(), Some("b"));
    assert_eq!(cursor.next_field(), Some(""));
    assert_eq!(cursor.next_field(), None);
}

#[test]
fn test_cursor_empty_line_has_one_empty_field() {
    let mut cursor = FieldCursor::new("");

    assert_eq!(cursor.next_field(), Some(""));
    assert_eq!(cursor.next_field(), None);
    assert_eq!(cursor.fields_read(), 1);
}

#[test]
fn test_cursor_stops_at_newline() {
    let mut cursor = FieldCursor::new("a,b\nc,d");

    assert_eq!(cursor.next_field(), Some("a"));
    assert_eq!(cursor.next_field(), Some("b"));
    assert_eq!(cursor.next_field(), None);
    assert_eq!(cursor.fields_read(), 2);
}
