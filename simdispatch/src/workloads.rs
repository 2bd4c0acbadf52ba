//! Workloads listing and sharding

// Imports
use {
	crate::DispatchError,
	std::{fs, num::NonZeroUsize, ops::Range, path::Path},
};

/// Sorted set of workload names
///
/// All workers must observe the same order for their shards to be disjoint,
/// so names are always sorted by their bytes, independently of locale.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct WorkloadSet {
	names: Vec<String>,
}

impl WorkloadSet {
	/// Creates a workload set from unsorted names
	pub fn from_names(names: impl IntoIterator<Item = String>) -> Self {
		let mut names = names.into_iter().collect::<Vec<_>>();
		names.sort_unstable();
		Self { names }
	}

	/// Returns the workload names
	pub fn names(&self) -> &[String] {
		&self.names
	}

	/// Returns the number of workloads
	pub fn len(&self) -> usize {
		self.names.len()
	}

	/// Returns if there are no workloads
	pub fn is_empty(&self) -> bool {
		self.names.is_empty()
	}
}

/// Lists all entries directly under `dir`
///
/// Entries whose name isn't valid UTF-8 are skipped with a warning.
pub fn list_workloads(dir: &Path) -> Result<WorkloadSet, DispatchError> {
	let workloads = self::list_names(dir, |_| true)?;
	tracing::debug!(?dir, workloads = workloads.len(), "Listed workloads");

	Ok(workloads)
}

/// Lists all files directly under `dir`, following symlinks.
///
/// Sub-directories are ignored and, as with [`list_workloads`], so are non-UTF-8 names.
pub fn list_files(dir: &Path) -> Result<WorkloadSet, DispatchError> {
	let files = self::list_names(dir, |entry| entry.path().is_file())?;
	tracing::debug!(?dir, files = files.len(), "Listed files");

	Ok(files)
}

/// Lists the names of all entries under `dir` accepted by `keep`
fn list_names(dir: &Path, keep: impl Fn(&fs::DirEntry) -> bool) -> Result<WorkloadSet, DispatchError> {
	let list_err = |source| DispatchError::DirectoryList {
		dir: dir.to_path_buf(),
		source,
	};

	let mut names = vec![];
	for entry in fs::read_dir(dir).map_err(list_err)? {
		let entry = entry.map_err(list_err)?;
		if !keep(&entry) {
			continue;
		}

		match entry.file_name().into_string() {
			Ok(name) => names.push(name),
			Err(name) => tracing::warn!(?dir, ?name, "Skipping entry with non-UTF-8 name"),
		}
	}

	Ok(WorkloadSet::from_names(names))
}

/// A worker's shard of a workload set
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Shard {
	/// Total number of workers
	num_workers: NonZeroUsize,

	/// This worker's index
	worker_id: usize,
}

impl Shard {
	/// Creates a new shard for worker `worker_id` out of `num_workers`
	pub fn new(num_workers: usize, worker_id: usize) -> Result<Self, DispatchError> {
		let num_workers = NonZeroUsize::new(num_workers)
			.ok_or_else(|| DispatchError::InvalidArgument("Number of workers must be at least 1".to_owned()))?;
		if worker_id >= num_workers.get() {
			return Err(DispatchError::InvalidArgument(format!(
				"Worker id {worker_id} must be less than the number of workers ({num_workers})"
			)));
		}

		Ok(Self { num_workers, worker_id })
	}

	/// Returns the number of workers
	pub fn num_workers(&self) -> usize {
		self.num_workers.get()
	}

	/// Returns this worker's index
	pub fn worker_id(&self) -> usize {
		self.worker_id
	}

	/// Returns the number of workloads per shard for `len` total workloads
	pub fn stride(&self, len: usize) -> usize {
		len.div_ceil(self.num_workers.get())
	}

	/// Returns the index range of this shard for `len` total workloads.
	///
	/// The last shards may be shorter than the stride, or empty.
	pub fn range(&self, len: usize) -> Range<usize> {
		let stride = self.stride(len);
		let start = self.worker_id.saturating_mul(stride).min(len);
		let end = start.saturating_add(stride).min(len);

		start..end
	}

	/// Selects this shard's workloads
	pub fn select<'a>(&self, workloads: &'a WorkloadSet) -> &'a [String] {
		&workloads.names[self.range(workloads.len())]
	}
}

/// Returns worker `worker_id`'s contiguous slice of `workloads`
pub fn compute_shard(
	workloads: &WorkloadSet,
	num_workers: usize,
	worker_id: usize,
) -> Result<&[String], DispatchError> {
	let shard = Shard::new(num_workers, worker_id)?;
	Ok(shard.select(workloads))
}

/// Lists worker `worker_id`'s shard of the workloads under `dir`.
///
/// The worker is validated before `dir` is listed.
pub fn list_shard(dir: &Path, num_workers: usize, worker_id: usize) -> Result<Vec<String>, DispatchError> {
	let shard = Shard::new(num_workers, worker_id)?;
	let workloads = self::list_workloads(dir)?;
	tracing::info!(
		total = workloads.len(),
		range = ?shard.range(workloads.len()),
		worker_id,
		num_workers,
		"Selected shard"
	);

	Ok(shard.select(&workloads).to_vec())
}
