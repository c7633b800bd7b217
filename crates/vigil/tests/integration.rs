//! Integration tests for the vigil public API.
//!
//! These exercise the full plugin flow: parse thresholds, classify a
//! measurement, accumulate perfdata, and render the status line.

use vigil::{PerfData, PerfDataBuffer, Range, RangeError, Status, Unit};

#[test]
fn test_full_plugin_line() {
    let warn: Range = "5".parse().expect("valid range");
    let crit: Range = "10".parse().expect("valid range");

    let load = 1.5;
    let status = Status::classify(load, Some(&warn), Some(&crit));

    let mut perfdata = PerfDataBuffer::new();
    perfdata
        .add(
            &PerfData::new("load", load)
                .with_warn(warn)
                .with_crit(crit)
                .with_min(0.0),
        )
        .expect("valid record");

    let line = vigil::render(status, "load average is 1.5", &perfdata);
    assert_eq!(line, "OK: load average is 1.5|load=1.5;5;10;0");
    assert_eq!(status.exit_code(), 0);
}

#[test]
fn test_critical_line_with_multiple_records() {
    let crit: Range = "90".parse().expect("valid range");
    let usage = 95.0;
    let status = Status::classify(usage, None, Some(&crit));

    let mut perfdata = PerfDataBuffer::new();
    perfdata
        .add(
            &PerfData::new("used space", usage)
                .with_unit(Unit::Percent)
                .with_crit(crit),
        )
        .expect("valid record");
    perfdata
        .add(
            &PerfData::new("inodes", 120_000.0)
                .with_unit(Unit::None)
                .with_min(0.0),
        )
        .expect("valid record");

    let line = vigil::render(status, "disk almost full", &perfdata);
    assert_eq!(
        line,
        "CRITICAL: disk almost full|'used space'=95%;;90 inodes=120000;;;0"
    );
    assert_eq!(status.exit_code(), 2);
}

#[test]
fn test_threshold_reparse_round_trip() {
    // A range formatted for perfdata must parse back to the same
    // thresholds a re-invocation would use.
    for spec in ["10", "5:10", "@5:10", "~:0", "5:", "@20"] {
        let range: Range = spec.parse().expect("valid range");
        let reparsed: Range = range.to_string().parse().expect("formatted range");
        assert_eq!(range, reparsed, "spec {spec:?}");
    }
}

#[test]
fn test_unusable_threshold_is_reported_not_defaulted() {
    let err = "5:1".parse::<Range>().unwrap_err();
    assert_eq!(err, RangeError::StartGreaterThanEnd);

    let line = vigil::render(Status::Unknown, &err.to_string(), &PerfDataBuffer::new());
    assert_eq!(line, "UNKNOWN: start greater than end");
    assert_eq!(Status::Unknown.exit_code(), 3);
}

#[test]
fn test_message_sanitization_end_to_end() {
    let mut perfdata = PerfDataBuffer::new();
    perfdata
        .add(&PerfData::new("rtt", 0.25).with_unit(Unit::Seconds))
        .expect("valid record");

    let line = vigil::render(Status::Warning, "slow|link\ndetected", &perfdata);
    assert_eq!(line, "WARNING: slowlinkdetected|rtt=0.25s");
}

#[test]
fn test_supervisor_parses_line_back() {
    // The supervisor tokenizes on the first `|`, then whitespace.
    let warn: Range = "0.1".parse().expect("valid range");
    let mut perfdata = PerfDataBuffer::new();
    perfdata
        .add(&PerfData::new("rtt", 0.25).with_unit(Unit::Seconds).with_warn(warn))
        .expect("valid record");
    perfdata
        .add(&PerfData::new("loss", 0.0).with_unit(Unit::Percent))
        .expect("valid record");

    let line = vigil::render(Status::Warning, "latency high", &perfdata);
    let (text, perf) = line.split_once('|').expect("perfdata section");
    assert_eq!(text, "WARNING: latency high");

    let tokens: Vec<&str> = perf.split_whitespace().collect();
    assert_eq!(tokens, ["rtt=0.25s;0.1", "loss=0%"]);
}
