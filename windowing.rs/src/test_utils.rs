use std::{
	io,
	sync::{Arc, Mutex, PoisonError},
};

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedLogs {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		self.0
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.extend_from_slice(buf);
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

/// Run `f` with a thread-local subscriber that records every event, down to
/// `TRACE`, and return the formatted output.
pub(crate) fn capture_logs(f: impl FnOnce()) -> String {
	let logs = CapturedLogs::default();
	let writer = logs.clone();
	let subscriber = tracing_subscriber::fmt()
		.with_max_level(tracing::Level::TRACE)
		.without_time()
		.with_writer(move || writer.clone())
		.finish();
	tracing::subscriber::with_default(subscriber, f);

	let bytes = logs.0.lock().unwrap_or_else(PoisonError::into_inner).clone();
	String::from_utf8_lossy(&bytes).into_owned()
}
