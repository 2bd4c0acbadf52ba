//! Logger
//!
//! Logs to stderr, filtered by `RUST_LOG`, and optionally to a file,
//! filtered by `RUST_LOG_FILE`.

// Imports
use {
	std::{env, fs, io, path::Path, sync::Mutex},
	tracing::Level,
	tracing_subscriber::{fmt, prelude::*, EnvFilter},
};

/// Default filter for stderr
const DEFAULT_STDERR_FILTER: &str = "info";

/// Default filter for the log file
const DEFAULT_FILE_FILTER: &str = "debug";

/// Logging before the logger is initialized.
///
/// Messages are buffered and replayed once [`init`](super::init) is called.
pub mod pre_init {
	// Imports
	use {std::sync::Mutex, tracing::Level};

	/// Buffered messages
	static MESSAGES: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());

	/// Buffers a debug message
	pub fn debug(message: impl Into<String>) {
		self::push(Level::DEBUG, message.into());
	}

	/// Buffers a warning message
	pub fn warn(message: impl Into<String>) {
		self::push(Level::WARN, message.into());
	}

	fn push(level: Level, message: String) {
		// Note: A poisoned lock only means another thread panicked mid-push,
		//       the buffer itself is still usable.
		let mut messages = MESSAGES.lock().unwrap_or_else(|err| err.into_inner());
		messages.push((level, message));
	}

	/// Takes all buffered messages
	pub(super) fn take() -> Vec<(Level, String)> {
		let mut messages = MESSAGES.lock().unwrap_or_else(|err| err.into_inner());
		std::mem::take(&mut *messages)
	}
}

/// Initializes the global logger.
///
/// If `log_file` can't be opened, a warning is emitted and only stderr is logged to.
///
/// # Panics
/// Panics if a global logger was already set.
pub fn init(log_file: Option<&Path>, log_file_append: bool) {
	let stderr_layer = fmt::layer()
		.with_writer(io::stderr)
		.with_filter(self::env_filter("RUST_LOG", DEFAULT_STDERR_FILTER));

	let file_layer = log_file.and_then(|path| {
		let file = fs::OpenOptions::new()
			.create(true)
			.write(true)
			.append(log_file_append)
			.truncate(!log_file_append)
			.open(path);

		match file {
			Ok(file) => Some(
				fmt::layer()
					.with_ansi(false)
					.with_writer(Mutex::new(file))
					.with_filter(self::env_filter("RUST_LOG_FILE", DEFAULT_FILE_FILTER)),
			),
			Err(err) => {
				pre_init::warn(format!("Unable to open log file {path:?}: {err}"));
				None
			},
		}
	});

	tracing_subscriber::registry().with(stderr_layer).with(file_layer).init();

	// Then replay everything logged before we existed
	for (level, message) in pre_init::take() {
		if level == Level::WARN {
			tracing::warn!("{message}");
		} else {
			tracing::debug!("{message}");
		}
	}
}

/// Creates an env filter from variable `var`, or `default` if unset or invalid.
fn env_filter(var: &str, default: &str) -> EnvFilter {
	match env::var(var) {
		Ok(filter) => EnvFilter::try_new(&filter).unwrap_or_else(|err| {
			pre_init::warn(format!("Ignoring invalid filter in `{var}`: {err}"));
			EnvFilter::new(default)
		}),
		Err(_) => EnvFilter::new(default),
	}
}
