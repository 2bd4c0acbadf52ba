//! Runs the hybrid simulator on this worker's shard of a workloads directory

// Modules
mod args;

// Imports
use {
	self::args::Args,
	anyhow::Context,
	clap::Parser,
	simdispatch::{hybrid::RunParams, list_shard, Config, Dispatcher},
	simdispatch_util::logger,
};

fn main() -> Result<(), anyhow::Error> {
	// Get arguments
	let args = Args::parse();
	logger::pre_init::debug(format!("Args: {args:?}"));

	// Initialize logging
	logger::init(args.log_file.as_deref(), args.log_file_append);

	let config = Config::load(args.config_file.as_deref()).context("Unable to load config")?;

	// Get our workloads
	let shard_workloads = list_shard(&args.workloads_dir, args.num_worker, args.worker_id)
		.context("Unable to list this worker's workloads")?;

	// Then run them all
	let params = RunParams {
		pref:          args.pref,
		pref_size:     args.pref_size,
		workloads_dir: args.workloads_dir,
		config:        config.hybrid,
	};
	let mut dispatcher = Dispatcher::new(args.dry_run);
	dispatcher.run(
		shard_workloads
			.iter()
			.map(|workload| params.build_invocation(workload)),
	);

	Ok(())
}
