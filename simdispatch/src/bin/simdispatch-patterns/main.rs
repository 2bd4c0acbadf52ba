//! Generates prefetch patterns for this worker's shard of a workloads directory

// Modules
mod args;

// Imports
use {
	self::args::Args,
	anyhow::Context,
	clap::Parser,
	simdispatch::{list_shard, patterns::PatternsParams, Config, Dispatcher},
	simdispatch_util::logger,
};

fn main() -> Result<(), anyhow::Error> {
	// Get arguments
	let args = Args::parse();
	logger::pre_init::debug(format!("Args: {args:?}"));

	// Initialize logging
	logger::init(args.log_file.as_deref(), args.log_file_append);

	let config = Config::load(args.config_file.as_deref()).context("Unable to load config")?;

	let shard_workloads = list_shard(&args.workloads_dir, args.num_worker, args.worker_id)
		.context("Unable to list this worker's workloads")?;

	let params = PatternsParams {
		threshold:     args.threshold,
		workloads_dir: args.workloads_dir,
		config:        config.patterns,
	};
	tracing::debug!(generator = ?params.generator(), output_dir = ?params.output_dir(), "Generating patterns");

	let mut dispatcher = Dispatcher::new(args.dry_run);
	dispatcher.run(
		shard_workloads
			.iter()
			.map(|workload| params.build_invocation(workload)),
	);

	Ok(())
}
