//! Simulator workload dispatcher (`simdispatch`)
//!
//! Splits a directory of workload traces across independent workers and
//! runs an external memory simulator once per workload.

// Modules
pub mod config;
pub mod cpu_traces;
pub mod dispatch;
pub mod error;
pub mod hybrid;
pub mod invocation;
pub mod patterns;
pub mod workloads;

// Exports
pub use self::{
	config::Config,
	dispatch::{Dispatcher, Outcome, Summary},
	error::DispatchError,
	invocation::Invocation,
	workloads::{compute_shard, list_files, list_shard, list_workloads, Shard, WorkloadSet},
};
