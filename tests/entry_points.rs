use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use sms_notification_listener::config::LOG_TAG;
use sms_notification_listener::{ffi, listener};

/// Captures every record so the traces of each entry point can be asserted.
struct CaptureLogger {
    records: Mutex<Vec<(Level, String, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.records.lock().unwrap().push((
            record.level(),
            record.target().to_string(),
            record.args().to_string(),
        ));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};

// Single test so the global logger and its buffer are not shared across
// concurrently running tests.
#[test]
fn test_entry_points_trace_and_stay_stateless() {
    // Installed before any entry point runs, so the bridge's own logger init
    // fails quietly and every record lands here.
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let drain = || std::mem::take(&mut *LOGGER.records.lock().unwrap());
    let line = |msg: &str| (Level::Debug, LOG_TAG.to_string(), msg.to_string());

    ffi::nativeSmsListenerStart();
    ffi::nativeSmsListenerStop();
    ffi::nativeOpenNotificationSettings();
    assert_eq!(
        drain(),
        vec![
            line("Starting native SMS listener"),
            line("Stopping native SMS listener"),
            line("Opening notification settings"),
        ]
    );

    // Repeated and unpaired calls trace the same lines and nothing else.
    ffi::nativeSmsListenerStop();
    ffi::nativeSmsListenerStop();
    ffi::nativeSmsListenerStart();
    ffi::nativeSmsListenerStart();
    assert_eq!(
        drain(),
        vec![
            line("Stopping native SMS listener"),
            line("Stopping native SMS listener"),
            line("Starting native SMS listener"),
            line("Starting native SMS listener"),
        ]
    );

    // JNI method bodies trace the JNI hop first, then the native line.
    ffi::jni_start_listener();
    assert_eq!(
        drain(),
        vec![line("JNI: Starting SMS listener"), line("Starting native SMS listener")]
    );
    ffi::jni_stop_listener();
    assert_eq!(
        drain(),
        vec![line("JNI: Stopping SMS listener"), line("Stopping native SMS listener")]
    );
    ffi::jni_open_notification_settings();
    assert_eq!(
        drain(),
        vec![
            line("JNI: Opening notification settings"),
            line("Opening notification settings"),
        ]
    );

    listener::open_notification_settings();
    listener::open_notification_settings();
    let records = drain();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0], records[1]);
}
