use super::*;

#[test]
fn timestamp_to_date_input_drops_time_part() {
    assert_eq!(timestamp_to_date_input("1999-04-12T00:00:00"), "1999-04-12");
    assert_eq!(timestamp_to_date_input("1999-04-12T13:45:10.123Z"), "1999-04-12");
}

#[test]
fn timestamp_to_date_input_accepts_plain_date() {
    assert_eq!(timestamp_to_date_input("2000-01-01"), "2000-01-01");
}

#[test]
fn timestamp_to_date_input_blank_on_garbage() {
    assert_eq!(timestamp_to_date_input(""), "");
    assert_eq!(timestamp_to_date_input("yesterday"), "");
    assert_eq!(timestamp_to_date_input("2000-02-30T00:00:00"), "");
}

#[test]
fn date_input_to_timestamp_is_utc_midnight() {
    assert_eq!(date_input_to_timestamp("2000-01-01").unwrap(), "2000-01-01T00:00:00.000Z");
    assert_eq!(date_input_to_timestamp(" 1987-11-30 ").unwrap(), "1987-11-30T00:00:00.000Z");
}

#[test]
fn date_input_to_timestamp_rejects_invalid_dates() {
    assert_eq!(date_input_to_timestamp(""), Err(DateError(String::new())));
    assert!(date_input_to_timestamp("2001-02-29").is_err());
    assert!(date_input_to_timestamp("01/02/2001").is_err());
}

#[test]
fn display_date_falls_back_to_raw_value() {
    assert_eq!(display_date("2010-06-01T00:00:00"), "2010-06-01");
    assert_eq!(display_date("unknown"), "unknown");
}
