//! External process invocation

// Imports
use {
	itertools::Itertools,
	std::{
		ffi::{OsStr, OsString},
		fmt,
		path::{Path, PathBuf},
		process::Command,
	},
};

/// Invocation of an external program
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Invocation {
	/// Program
	program: PathBuf,

	/// Arguments
	args: Vec<OsString>,
}

impl Invocation {
	/// Creates a new invocation with no arguments
	pub fn new(program: impl Into<PathBuf>) -> Self {
		Self {
			program: program.into(),
			args:    vec![],
		}
	}

	/// Appends an argument
	#[must_use]
	pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
		self.args.push(arg.as_ref().to_owned());
		self
	}

	/// Appends all arguments
	#[must_use]
	pub fn args<I>(mut self, args: I) -> Self
	where
		I: IntoIterator,
		I::Item: AsRef<OsStr>,
	{
		self.args.extend(args.into_iter().map(|arg| arg.as_ref().to_owned()));
		self
	}

	/// Returns the program
	pub fn program(&self) -> &Path {
		&self.program
	}

	/// Returns all arguments
	pub fn arguments(&self) -> &[OsString] {
		&self.args
	}

	/// Counts the occurrences of argument `arg`
	pub fn count_arg(&self, arg: impl AsRef<OsStr>) -> usize {
		let arg = arg.as_ref();
		self.args.iter().filter(|cur| cur.as_os_str() == arg).count()
	}

	/// Creates a command to run this invocation
	pub fn to_command(&self) -> Command {
		let mut command = Command::new(&self.program);
		command.args(&self.args);
		command
	}
}

impl fmt::Display for Invocation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.program.display())?;
		if !self.args.is_empty() {
			write!(f, " {}", self.args.iter().map(|arg| arg.to_string_lossy()).format(" "))?;
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display_joins_arguments() {
		let invocation = Invocation::new("./Sim").arg("mcf").args(["--traces", "a.trace", "b.trace"]);

		assert_eq!(invocation.to_string(), "./Sim mcf --traces a.trace b.trace");
		assert_eq!(Invocation::new("./Sim").to_string(), "./Sim");
	}

	#[test]
	fn command_keeps_program_and_args() {
		let invocation = Invocation::new("./Sim").args(["--config", "a.cfg"]);
		let command = invocation.to_command();

		assert_eq!(command.get_program(), "./Sim");
		assert_eq!(command.get_args().collect::<Vec<_>>(), ["--config", "a.cfg"]);
	}
}
