//! Utilities

// Modules
pub mod logger;

/// Extension trait for workload names
#[extend::ext(name = WorkloadStem)]
pub impl str {
	/// Returns the workload's base name.
	///
	/// This is everything before the first `.`, so `"mcf.cpu_trace"` and
	/// `"mcf.cpu_trace.gz"` both have the stem `"mcf"`.
	fn workload_stem(&self) -> &str {
		self.split_once('.').map_or(self, |(stem, _)| stem)
	}
}
