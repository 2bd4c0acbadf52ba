//! Runs the simulator once per workload directory, with all of its traces

// Modules
mod args;

// Imports
use {
	self::args::Args,
	anyhow::Context,
	clap::Parser,
	simdispatch::{cpu_traces::CpuTracesParams, Config, Dispatcher},
	simdispatch_util::logger,
};

fn main() -> Result<(), anyhow::Error> {
	// Get arguments
	let args = Args::parse();
	logger::pre_init::debug(format!("Args: {args:?}"));

	// Initialize logging
	logger::init(args.log_file.as_deref(), args.log_file_append);

	let config = Config::load(args.config_file.as_deref()).context("Unable to load config")?;

	// Note: We list everything up front, so an unreadable workload
	//       aborts before any simulator runs.
	let params = CpuTracesParams {
		traces_dir: args.cpu_traces_dir,
		config:     config.cpu_traces,
	};
	let invocations = params.build_invocations().context("Unable to list cpu traces")?;
	tracing::info!(workloads = invocations.len(), "Listed cpu trace workloads");

	let mut dispatcher = Dispatcher::new(args.dry_run);
	dispatcher.run(invocations);

	Ok(())
}
