//! Errors

// Imports
use std::{io, path::PathBuf};

/// Dispatch error
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
	/// Unable to list a directory
	#[error("Unable to list directory {dir:?}")]
	DirectoryList {
		dir:    PathBuf,
		#[source]
		source: io::Error,
	},

	/// Invalid argument
	#[error("Invalid argument: {0}")]
	InvalidArgument(String),

	/// Unable to launch the external process
	#[error("Unable to launch {program:?}")]
	ProcessLaunch {
		program: PathBuf,
		#[source]
		source:  io::Error,
	},
}
