//! Prefetch pattern generation
//!
//! Generates the pattern files consumed by [`hybrid`](crate::hybrid) runs,
//! using one generator executable per threshold.

// Imports
use {
	crate::{config::PatternsConfig, Invocation},
	simdispatch_util::WorkloadStem,
	std::path::PathBuf,
};

/// Pattern generation parameters
#[derive(Clone, Debug)]
pub struct PatternsParams {
	/// Threshold, also the name of the generator executable
	pub threshold: String,

	/// Directory with the workload traces
	pub workloads_dir: PathBuf,

	/// Configuration
	pub config: PatternsConfig,
}

impl PatternsParams {
	/// Returns the generator executable
	pub fn generator(&self) -> PathBuf {
		self.config.generator_dir.join(&self.threshold)
	}

	/// Returns the directory patterns are written to
	pub fn output_dir(&self) -> PathBuf {
		self.config.output_root.join(format!("{}0", self.threshold))
	}

	/// Builds the generator invocation for `workload`
	pub fn build_invocation(&self, workload: &str) -> Invocation {
		let output = self.output_dir().join(format!("{}.pattern", workload.workload_stem()));

		Invocation::new(self.generator())
			.arg("--mode")
			.arg("pref-patterns")
			.arg("--trace")
			.arg(self.workloads_dir.join(workload))
			.arg("--pref_patterns_output")
			.arg(output)
	}
}
