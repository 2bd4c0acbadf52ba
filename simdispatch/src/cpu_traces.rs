//! Cpu trace simulator runs
//!
//! Each workload is a directory of trace files, all of which are passed
//! to a single simulator run.

// Imports
use {
	crate::{config::CpuTracesConfig, list_files, list_workloads, DispatchError, Invocation},
	std::path::PathBuf,
};

/// Cpu trace run parameters
#[derive(Clone, Debug)]
pub struct CpuTracesParams {
	/// Root directory, with one directory per workload
	pub traces_dir: PathBuf,

	/// Simulator configuration
	pub config: CpuTracesConfig,
}

/// A workload with all of its traces
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CpuWorkload {
	/// Workload name
	pub name: String,

	/// Trace files, sorted, excluding any nested directories
	pub traces: Vec<PathBuf>,
}

impl CpuTracesParams {
	/// Lists all workloads along with their traces.
	///
	/// Only files count as traces, nested directories are ignored.
	pub fn list(&self) -> Result<Vec<CpuWorkload>, DispatchError> {
		list_workloads(&self.traces_dir)?
			.names()
			.iter()
			.map(|name| {
				let workload_dir = self.traces_dir.join(name);
				let traces = list_files(&workload_dir)?
					.names()
					.iter()
					.map(|trace| workload_dir.join(trace))
					.collect();

				Ok::<_, DispatchError>(CpuWorkload {
					name: name.clone(),
					traces,
				})
			})
			.collect()
	}

	/// Builds the simulator invocation for `workload`.
	///
	/// Returns `None` if the workload has no traces.
	pub fn build_invocation(&self, workload: &CpuWorkload) -> Option<Invocation> {
		if workload.traces.is_empty() {
			return None;
		}

		let invocation = Invocation::new(&self.config.executable)
			.arg(&workload.name)
			.arg("--config")
			.arg(&self.config.config)
			.arg("--traces")
			.args(&workload.traces);

		Some(invocation)
	}

	/// Lists all workloads and builds their invocations, skipping workloads without traces
	pub fn build_invocations(&self) -> Result<Vec<Invocation>, DispatchError> {
		let invocations = self
			.list()?
			.iter()
			.filter_map(|workload| {
				let invocation = self.build_invocation(workload);
				if invocation.is_none() {
					tracing::warn!(
						workload = %workload.name,
						dir = ?self.workload_dir(workload),
						"Skipping workload without traces"
					);
				}
				invocation
			})
			.collect();

		Ok(invocations)
	}

	fn workload_dir(&self, workload: &CpuWorkload) -> PathBuf {
		self.traces_dir.join(&workload.name)
	}
}
