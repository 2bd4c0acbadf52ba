//! Arguments

// Imports
use std::path::PathBuf;

/// Arguments
#[derive(Debug)]
#[derive(clap::Parser)]
pub struct Args {
	/// Log file
	///
	/// Specifies a file to perform verbose logging to.
	/// You can use `RUST_LOG_FILE` to set filtering options
	#[clap(long = "log-file")]
	pub log_file: Option<PathBuf>,

	/// Whether to append to the log file
	#[clap(long = "log-file-append")]
	pub log_file_append: bool,

	/// Config file
	#[clap(long = "config")]
	pub config_file: Option<PathBuf>,

	/// Only print the generator invocations, without running them
	#[clap(long = "dry-run")]
	pub dry_run: bool,

	/// Directory with the workload traces
	pub workloads_dir: PathBuf,

	/// Threshold
	///
	/// Selects the generator executable, and the `<threshold>0` output directory
	pub threshold: String,

	/// Number of workers
	pub num_worker: usize,

	/// This worker's id, in `0..num_worker`
	pub worker_id: usize,
}
