//! Dispatcher
//!
//! Runs invocations one at a time, waiting for each to exit before
//! starting the next.

// Imports
use {
	crate::{DispatchError, Invocation},
	std::{
		io::{self, Write},
		process::ExitStatus,
		time::Instant,
	},
};

/// Dispatcher
#[derive(Debug)]
pub struct Dispatcher<W = io::Stdout> {
	/// Writer every invocation is printed to before being run
	audit: W,

	/// Whether to only print invocations, without running them
	dry_run: bool,
}

impl Dispatcher {
	/// Creates a dispatcher that prints invocations to stdout
	pub fn new(dry_run: bool) -> Self {
		Self::with_audit(io::stdout(), dry_run)
	}
}

impl<W: Write> Dispatcher<W> {
	/// Creates a dispatcher that prints invocations to `audit`
	pub fn with_audit(audit: W, dry_run: bool) -> Self {
		Self { audit, dry_run }
	}

	/// Returns the audit writer
	pub fn into_audit(self) -> W {
		self.audit
	}

	/// Prints and runs `invocation`, waiting for it to exit.
	///
	/// A non-zero exit status is returned as [`Outcome::Completed`], not as an error.
	pub fn dispatch(&mut self, invocation: &Invocation) -> Result<Outcome, DispatchError> {
		self.audit_line(format_args!("{invocation}"));
		if self.dry_run {
			return Ok(Outcome::Skipped);
		}

		let start_time = Instant::now();
		let status = invocation
			.to_command()
			.status()
			.map_err(|source| DispatchError::ProcessLaunch {
				program: invocation.program().to_path_buf(),
				source,
			})?;
		tracing::debug!(%status, elapsed = ?start_time.elapsed(), "Process exited");
		self.audit_line(format_args!(""));

		Ok(Outcome::Completed(status))
	}

	/// Dispatches all invocations.
	///
	/// Failures are logged and counted, and never stop the remaining invocations.
	pub fn run(&mut self, invocations: impl IntoIterator<Item = Invocation>) -> Summary {
		let mut summary = Summary::default();
		for invocation in invocations {
			match self.dispatch(&invocation) {
				Ok(Outcome::Completed(status)) if status.success() => summary.completed += 1,
				Ok(Outcome::Completed(status)) => {
					tracing::warn!(program = ?invocation.program(), %status, "Simulator failed");
					summary.failed += 1;
				},
				Ok(Outcome::Skipped) => summary.skipped += 1,
				Err(err) => {
					tracing::warn!("Skipping invocation: {:#}", anyhow::Error::new(err));
					summary.unlaunched += 1;
				},
			}
		}

		tracing::info!(
			completed = summary.completed,
			failed = summary.failed,
			unlaunched = summary.unlaunched,
			skipped = summary.skipped,
			"Finished all invocations"
		);

		summary
	}

	/// Writes a line to the audit writer
	fn audit_line(&mut self, line: std::fmt::Arguments<'_>) {
		if let Err(err) = writeln!(self.audit, "{line}").and_then(|()| self.audit.flush()) {
			tracing::warn!(?err, "Unable to write invocation");
		}
	}
}

/// Outcome of [`Dispatcher::dispatch`]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome {
	/// The process ran and exited with a status
	Completed(ExitStatus),

	/// The process wasn't run
	Skipped,
}

/// Summary of [`Dispatcher::run`]
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct Summary {
	/// Processes that exited successfully
	pub completed: usize,

	/// Processes that exited with a failure status
	pub failed: usize,

	/// Processes that couldn't be launched
	pub unlaunched: usize,

	/// Processes skipped due to a dry run
	pub skipped: usize,
}
