//! Log records emitted for recovered errors
//!
//! Runs in its own binary so the capturing logger and the process-wide
//! report configuration are not shared with other suites.

use exactvec::config::set_report_config;
use exactvec::{Array, Config, ReportConfig};
use log::{LevelFilter, Log, Metadata, Record};
use once_cell::sync::Lazy;
use parking_lot::Mutex;

static RECORDS: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(Vec::new()));

struct CapturingLogger;

impl Log for CapturingLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.target().starts_with("exactvec")
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            RECORDS
                .lock()
                .push(format!("{} {}", record.level(), record.args()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger;

fn install(config: ReportConfig) {
    set_report_config(config).unwrap();
    // drop the debug record written by the config switch itself
    RECORDS.lock().clear();
}

fn trigger_recovered_errors() {
    let mut empty: Array<i32> = Array::new();
    assert!(empty.remove_first().is_err());

    assert!(Array::<i32>::with_len(0).is_err());

    let mut single = Array::from(vec![1]);
    assert!(single.insert_at(-1, 0).is_err());
    assert_eq!(single.as_slice(), &[1]);
}

fn take_records() -> Vec<String> {
    std::mem::take(&mut *RECORDS.lock())
}

// =============================================================================
// REPORTING
// =============================================================================

// One test function: the logger and the report switch are process-wide.
#[test]
fn test_recovered_errors_follow_report_config() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    install(ReportConfig::default());
    trigger_recovered_errors();
    assert_eq!(
        take_records(),
        vec![
            "WARN remove_first: Array is empty!",
            "WARN with_len: Incorrect array length!",
            "WARN insert_at: Index out of range!",
        ]
    );

    install(ReportConfig::quiet_preset());
    trigger_recovered_errors();
    assert!(take_records().is_empty());

    install(ReportConfig::verbose_preset());
    let mut empty: Array<i32> = Array::new();
    assert!(empty.remove_last().is_err());
    assert_eq!(take_records(), vec!["INFO remove_last: Array is empty!"]);

    // operator errors are returned without a report
    install(ReportConfig::default());
    assert!(Array::from(vec![1, 2]).filter('?', &1).is_err());
    assert!(take_records().is_empty());

    set_report_config(ReportConfig::default()).unwrap();
}
