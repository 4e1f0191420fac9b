use mz_domain::{ident, require_guid, timefmt, DateStamp, DomainError, ExecutionRecord, ExecutionStatus, StatusClass};

#[test]
fn success_terminal_statuses_classify_as_success() {
    for raw in ["completed", "finished", "success", "Completed", "FINISHED"] {
        let status = ExecutionStatus::new(raw);
        assert_eq!(status.class(), StatusClass::Success, "status {raw}");
        assert!(status.is_terminal());
    }
}

#[test]
fn failure_terminal_statuses_classify_as_failure() {
    for raw in ["failed", "error", "cancelled", "aborted", "timeout", "Failed", "ERROR"] {
        let status = ExecutionStatus::new(raw);
        assert_eq!(status.class(), StatusClass::Failure, "status {raw}");
        assert!(status.is_terminal());
    }
}

#[test]
fn unknown_and_in_flight_statuses_are_not_terminal() {
    for raw in ["pending", "queued", "running", "in_progress", "executing", "warming-up", ""] {
        let status = ExecutionStatus::new(raw);
        assert_eq!(status.class(), StatusClass::InFlight, "status {raw:?}");
        assert!(!status.is_terminal());
    }
}

#[test]
fn date_stamp_distinguishes_missing_invalid_and_parsed() {
    assert_eq!(DateStamp::parse(None), DateStamp::Missing);
    assert_eq!(DateStamp::parse(Some("  ")), DateStamp::Missing);
    assert_eq!(DateStamp::parse(Some("not a date")),
               DateStamp::Invalid("not a date".to_string()));

    let iso = DateStamp::parse(Some("2026-08-27T10:30:00Z"));
    assert!(matches!(iso, DateStamp::At(_)));

    let naive = DateStamp::parse(Some("2026-08-27 10:30:00"));
    let dt = naive.as_datetime().expect("naive format should parse");
    assert_eq!(dt.format("%Y-%m-%d %H:%M").to_string(), "2026-08-27 10:30");
}

#[test]
fn execution_record_deserializes_camel_case_and_error_alias() {
    let raw = r#"{
        "id": "exec-42",
        "status": "Running",
        "progress": "60%",
        "startTime": "2026-08-27T10:00:00Z",
        "errorMessage": "disk full"
    }"#;
    let record: ExecutionRecord = serde_json::from_str(raw).unwrap();
    assert_eq!(record.id, "exec-42");
    assert_eq!(record.status.class(), StatusClass::InFlight);
    assert_eq!(record.progress_display(), "60%");
    assert!(matches!(record.start_stamp(), DateStamp::At(_)));
    assert_eq!(record.end_stamp(), DateStamp::Missing);
    assert_eq!(record.error.as_deref(), Some("disk full"));
}

#[test]
fn run_seconds_needs_both_parseable_stamps() {
    let mut record = ExecutionRecord::new("exec-1", "completed");
    assert_eq!(record.run_seconds(), None);

    record.start_time = Some("2026-08-27T10:00:00Z".to_string());
    record.end_time = Some("2026-08-27T10:01:30Z".to_string());
    assert_eq!(record.run_seconds(), Some(90.0));

    record.end_time = Some("garbage".to_string());
    assert_eq!(record.run_seconds(), None);
}

#[test]
fn format_date_falls_back_to_raw_prefix() {
    assert_eq!(timefmt::format_date(None), "N/A");
    assert_eq!(timefmt::format_date(Some("2026-08-27T10:30:00Z")), "2026-08-27 10:30");
    assert_eq!(timefmt::format_date(Some("2026/08/27 completely unparseable value")),
               "2026/08/27 complete");
}

#[test]
fn format_duration_scales_units() {
    assert_eq!(timefmt::format_duration(12.34), "12.3s");
    assert_eq!(timefmt::format_duration(90.0), "1.5m");
    assert_eq!(timefmt::format_duration(7200.0), "2.0h");
}

#[test]
fn format_size_scales_units() {
    assert_eq!(timefmt::format_size(512), "512.00 B");
    assert_eq!(timefmt::format_size(2048), "2.00 KB");
    assert_eq!(timefmt::format_size(5 * 1024 * 1024), "5.00 MB");
}

#[test]
fn progress_bar_clamps_and_handles_zero_total() {
    assert_eq!(timefmt::progress_bar(0, 0, 4), "[====]");
    assert_eq!(timefmt::progress_bar(2, 4, 4), "[==--] 2/4");
    assert_eq!(timefmt::progress_bar(9, 4, 4), "[====] 9/4");
}

#[test]
fn guid_validation_requires_hyphenated_form() {
    assert!(ident::is_valid_guid("123e4567-e89b-42d3-a456-426614174000"));
    assert!(!ident::is_valid_guid("123e4567e89b42d3a456426614174000"));
    assert!(!ident::is_valid_guid("not-a-guid"));
    assert!(matches!(require_guid("nope"), Err(DomainError::InvalidGuid(_))));
    assert!(matches!(require_guid(""), Err(DomainError::EmptyIdentifier)));
}

#[test]
fn mask_sensitive_hides_short_values_entirely() {
    assert_eq!(ident::mask_sensitive("abcd1234efgh", 4), "abcd...efgh");
    assert_eq!(ident::mask_sensitive("short", 4), "*****");
    assert_eq!(ident::mask_sensitive("", 4), "");
}
