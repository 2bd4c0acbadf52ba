//! Hybrid DRAM / PCM simulator runs

// Imports
use {
	crate::{config::HybridConfig, Invocation},
	simdispatch_util::WorkloadStem,
	std::path::PathBuf,
};

/// Run-level parameters
#[derive(Clone, Debug)]
pub struct RunParams {
	/// Prefetch policy (`--pattern-selection`)
	pub pref: String,

	/// Prefetch size (`--pref-num`)
	pub pref_size: String,

	/// Directory with the workload traces
	pub workloads_dir: PathBuf,

	/// Simulator configuration
	pub config: HybridConfig,
}

/// Per-workload inputs and outputs
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct WorkloadPlan {
	/// Trace file
	pub trace: PathBuf,

	/// Pattern file
	pub pattern: PathBuf,

	/// Statistics output file
	pub output: PathBuf,

	/// Number of times the trace / pattern pair is passed
	pub repeat: usize,
}

impl RunParams {
	/// Derives the paths and repetitions for `workload`
	pub fn plan(&self, workload: &str) -> WorkloadPlan {
		let stem = workload.workload_stem();

		WorkloadPlan {
			trace:   self.workloads_dir.join(workload),
			pattern: self.config.patterns_dir.join(format!("{stem}.pattern")),
			output:  self
				.config
				.stats_dir
				.join(format!("{stem}.{}.{}.stats", self.pref, self.pref_size)),
			repeat:  self.config.repeat_for(stem),
		}
	}

	/// Builds the simulator invocation for `workload`
	pub fn build_invocation(&self, workload: &str) -> Invocation {
		let plan = self.plan(workload);
		let config = &self.config;

		let invocation = Invocation::new(&config.executable)
			.arg("--mode")
			.arg(&config.mode)
			.arg("--dram-config")
			.arg(&config.dram_config)
			.arg("--pcm-config")
			.arg(&config.pcm_config);

		(0..plan.repeat)
			.fold(invocation, |invocation, _| {
				invocation
					.arg("--trace")
					.arg(&plan.trace)
					.arg("--pref-patterns")
					.arg(&plan.pattern)
			})
			.arg("--pattern-selection")
			.arg(&self.pref)
			.arg("--pref-num")
			.arg(&self.pref_size)
			.arg("--stat_output")
			.arg(&plan.output)
	}
}
