use levelog::{Logger, Severity, TracingSink};
use parking_lot::Mutex;
use std::io;
use std::sync::Arc;

#[derive(Clone, Default)]
struct Buf(Arc<Mutex<Vec<u8>>>);

impl Buf {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().clone()).unwrap()
    }
}

impl io::Write for Buf {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn with_captured_subscriber(f: impl FnOnce()) -> String {
    let buf = Buf::default();
    let writer = buf.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    buf.contents()
}

#[test]
fn test_records_surface_as_tracing_events() {
    let output = with_captured_subscriber(|| {
        let logger = Logger::new(Box::new(TracingSink), Severity::Debug, false);
        logger.debug("bridged debug");
        logger.info("bridged info");
        logger.warning("bridged warning");
        logger.error("bridged error");
    });

    assert!(output.contains("DEBUG"));
    assert!(output.contains("bridged debug"));
    assert!(output.contains("INFO"));
    assert!(output.contains("bridged info"));
    assert!(output.contains("WARN"));
    assert!(output.contains("ERROR"));
    assert!(output.contains("bridged error"));
}

#[test]
fn test_threshold_still_gates_before_the_bridge() {
    let output = with_captured_subscriber(|| {
        let logger = Logger::new(Box::new(TracingSink), Severity::Error, false);
        logger.info("never forwarded");
        logger.error("forwarded");
    });

    assert!(!output.contains("never forwarded"));
    assert!(output.contains("forwarded"));
}

#[test]
fn test_fatal_and_panic_surface_at_error_with_severity_field() {
    let output = with_captured_subscriber(|| {
        let logger = Logger::new(Box::new(TracingSink), Severity::Debug, false);
        logger.critical("bridged critical");
        logger.log_at(Severity::Panic, "bridged panic");
    });

    assert!(output.contains("ERROR"));
    assert!(output.contains("bridged critical"));
    assert!(output.contains("severity"));
    assert!(output.contains("panic"));
}
