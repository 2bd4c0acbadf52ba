//! Configuration
//!
//! Every field defaults to the conventional on-disk layout, so a missing
//! config file (or a partial one) behaves like the fixed layout below:
//!
//! ```text
//! configs/*.cfg                         simulator configs
//! patterns/50/<stem>.pattern            prefetch patterns
//! stats/<stem>.<pref>.<pref_size>.stats statistics output
//! ```

// Imports
use {
	anyhow::Context,
	std::{
		collections::BTreeMap,
		fs,
		path::{Path, PathBuf},
	},
};

/// Configuration
#[derive(Clone, Debug, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
	/// Hybrid simulator configuration
	pub hybrid: HybridConfig,

	/// Cpu traces simulator configuration
	pub cpu_traces: CpuTracesConfig,

	/// Pattern generation configuration
	pub patterns: PatternsConfig,
}

impl Config {
	/// Loads the config from a json file, or the default config if `path` is `None`
	pub fn load(path: Option<&Path>) -> Result<Self, anyhow::Error> {
		let Some(path) = path else {
			return Ok(Self::default());
		};

		let file = fs::File::open(path).with_context(|| format!("Unable to open config file {path:?}"))?;
		let config = serde_json::from_reader(file).with_context(|| format!("Unable to parse config file {path:?}"))?;
		tracing::debug!(?path, ?config, "Loaded config");

		Ok(config)
	}
}

/// Hybrid simulator configuration
#[derive(Clone, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HybridConfig {
	/// Simulator executable
	pub executable: PathBuf,

	/// Simulator mode (`--mode`)
	pub mode: String,

	/// DRAM config (`--dram-config`)
	pub dram_config: PathBuf,

	/// PCM config (`--pcm-config`)
	pub pcm_config: PathBuf,

	/// Directory with the pattern files
	pub patterns_dir: PathBuf,

	/// Directory to write statistics to
	pub stats_dir: PathBuf,

	/// Number of trace / pattern repetitions for each workload
	pub default_repeat: usize,

	/// Per-workload repetition overrides, keyed by workload stem
	pub repeat_overrides: BTreeMap<String, usize>,
}

impl HybridConfig {
	/// Returns the number of repetitions for a workload stem
	pub fn repeat_for(&self, stem: &str) -> usize {
		self.repeat_overrides.get(stem).copied().unwrap_or(self.default_repeat)
	}
}

impl Default for HybridConfig {
	fn default() -> Self {
		Self {
			executable:       PathBuf::from("./HybridSim"),
			mode:             "hybrid".to_owned(),
			dram_config:      PathBuf::from("configs/hybrid-dram-small.cfg"),
			pcm_config:       PathBuf::from("configs/hybrid-pcm.cfg"),
			patterns_dir:     PathBuf::from("patterns/50"),
			stats_dir:        PathBuf::from("stats"),
			default_repeat:   8,
			// Note: `roms` only runs with half the repetitions.
			repeat_overrides: BTreeMap::from([("roms".to_owned(), 4)]),
		}
	}
}

/// Cpu traces simulator configuration
#[derive(Clone, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CpuTracesConfig {
	/// Simulator executable
	pub executable: PathBuf,

	/// Simulator config (`--config`)
	pub config: PathBuf,
}

impl Default for CpuTracesConfig {
	fn default() -> Self {
		Self {
			executable: PathBuf::from("./Sim"),
			config:     PathBuf::from("configs/sample-FRFCFS-64MB-eDRAM-32GB-PCM.cfg"),
		}
	}
}

/// Pattern generation configuration
#[derive(Clone, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PatternsConfig {
	/// Directory with one generator executable per threshold
	pub generator_dir: PathBuf,

	/// Root of the pattern output directories
	pub output_root: PathBuf,
}

impl Default for PatternsConfig {
	fn default() -> Self {
		Self {
			generator_dir: PathBuf::from("."),
			output_root:   PathBuf::from("patterns"),
		}
	}
}
