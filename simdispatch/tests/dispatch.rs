//! Dispatch tests

// Imports
use {
	simdispatch::{
		config::{CpuTracesConfig, HybridConfig},
		cpu_traces::CpuTracesParams,
		hybrid::RunParams,
		list_files,
		list_shard,
		list_workloads,
		DispatchError,
		Dispatcher,
		Invocation,
		Outcome,
		Summary,
	},
	std::{fs, path::Path},
};

fn touch(path: &Path) {
	fs::write(path, b"").expect("Unable to create file");
}

#[test]
fn listing_is_sorted() {
	let dir = tempfile::tempdir().expect("Unable to create temp dir");
	for name in ["mcf.cpu_trace", "gcc.cpu_trace", "Zeus.cpu_trace", "roms.cpu_trace"] {
		touch(&dir.path().join(name));
	}

	let workloads = list_workloads(dir.path()).expect("Unable to list workloads");
	assert_eq!(workloads.names(), [
		"Zeus.cpu_trace",
		"gcc.cpu_trace",
		"mcf.cpu_trace",
		"roms.cpu_trace"
	]);
}

#[test]
fn listing_missing_dir_fails() {
	let dir = tempfile::tempdir().expect("Unable to create temp dir");
	let missing = dir.path().join("missing");

	assert!(matches!(
		list_workloads(&missing),
		Err(DispatchError::DirectoryList { dir, .. }) if dir == missing
	));
}

#[test]
fn dry_run_prints_without_running() {
	let params = RunParams {
		pref:          "stride".to_owned(),
		pref_size:     "2".to_owned(),
		workloads_dir: "traces".into(),
		config:        HybridConfig {
			executable: "/nonexistent/HybridSim".into(),
			..HybridConfig::default()
		},
	};

	let mut dispatcher = Dispatcher::with_audit(vec![], true);
	let summary = dispatcher.run(["gcc.cpu_trace", "mcf.cpu_trace"].map(|workload| params.build_invocation(workload)));
	let audit = String::from_utf8(dispatcher.into_audit()).expect("Audit wasn't utf-8");

	assert_eq!(summary, Summary {
		skipped: 2,
		..Summary::default()
	});
	let lines = audit.lines().collect::<Vec<_>>();
	assert_eq!(lines.len(), 2);
	assert!(lines[0].starts_with("/nonexistent/HybridSim --mode hybrid "));
	assert!(lines[0].ends_with("--pattern-selection stride --pref-num 2 --stat_output stats/gcc.stride.2.stats"));
	assert!(lines[1].ends_with("--stat_output stats/mcf.stride.2.stats"));
}

#[test]
fn missing_executable_is_a_launch_error() {
	let mut dispatcher = Dispatcher::with_audit(vec![], false);
	let invocation = Invocation::new("/nonexistent/HybridSim").arg("--mode");

	assert!(matches!(
		dispatcher.dispatch(&invocation),
		Err(DispatchError::ProcessLaunch { .. })
	));
}

#[cfg(unix)]
#[test]
fn failures_do_not_stop_the_run() {
	let mut dispatcher = Dispatcher::with_audit(vec![], false);
	let invocations = [
		Invocation::new("true"),
		Invocation::new("false"),
		Invocation::new("/nonexistent/HybridSim"),
		Invocation::new("true").arg("--trace"),
	];

	let summary = dispatcher.run(invocations);
	assert_eq!(summary, Summary {
		completed:  2,
		failed:     1,
		unlaunched: 1,
		skipped:    0,
	});
}

#[cfg(unix)]
#[test]
fn exit_status_is_recorded() {
	let mut dispatcher = Dispatcher::with_audit(vec![], false);
	let outcome = dispatcher
		.dispatch(&Invocation::new("sh").args(["-c", "exit 3"]))
		.expect("Unable to run `sh`");

	match outcome {
		Outcome::Completed(status) => assert_eq!(status.code(), Some(3)),
		Outcome::Skipped => panic!("Dispatch wasn't a dry run"),
	}
}

/// Runs a fake simulator that writes its arguments to the stats output
#[cfg(unix)]
#[test]
fn fake_simulator_writes_stats() {
	use std::os::unix::fs::PermissionsExt;

	let root = tempfile::tempdir().expect("Unable to create temp dir");
	let workloads_dir = root.path().join("traces");
	let stats_dir = root.path().join("stats");
	fs::create_dir_all(&workloads_dir).expect("Unable to create traces dir");
	fs::create_dir_all(&stats_dir).expect("Unable to create stats dir");
	touch(&workloads_dir.join("roms.cpu_trace"));

	// Note: The output path is always the last argument
	let simulator = root.path().join("HybridSim");
	fs::write(&simulator, "#!/bin/sh\nfor arg; do out=\"$arg\"; done\necho \"$@\" > \"$out\"\n")
		.expect("Unable to write simulator");
	fs::set_permissions(&simulator, fs::Permissions::from_mode(0o755)).expect("Unable to set permissions");

	let params = RunParams {
		pref:          "p1".to_owned(),
		pref_size:     "4".to_owned(),
		workloads_dir: workloads_dir.clone(),
		config:        HybridConfig {
			executable: simulator,
			stats_dir: stats_dir.clone(),
			..HybridConfig::default()
		},
	};

	let workloads = list_workloads(&workloads_dir).expect("Unable to list workloads");
	let mut dispatcher = Dispatcher::with_audit(vec![], false);
	let summary = dispatcher.run(workloads.names().iter().map(|workload| params.build_invocation(workload)));
	assert_eq!(summary.completed, 1);

	let stats = fs::read_to_string(stats_dir.join("roms.p1.4.stats")).expect("Simulator didn't write stats");
	assert_eq!(stats.matches("--trace ").count(), 4);
	assert_eq!(stats.matches("--pref-patterns ").count(), 4);
}

#[test]
fn cpu_traces_are_grouped_per_workload() {
	let root = tempfile::tempdir().expect("Unable to create temp dir");
	let layout: [(&str, &[&str]); 3] = [("mcf", &["1.trace", "0.trace"]), ("empty", &[]), ("gcc", &["a.trace"])];
	for (workload, traces) in layout {
		let dir = root.path().join(workload);
		fs::create_dir_all(&dir).expect("Unable to create workload dir");
		for trace in traces {
			touch(&dir.join(trace));
		}
	}

	let params = CpuTracesParams {
		traces_dir: root.path().to_path_buf(),
		config:     CpuTracesConfig::default(),
	};
	let invocations = params.build_invocations().expect("Unable to list cpu traces");

	assert_eq!(invocations.len(), 2);
	assert_eq!(invocations[0].arguments()[0], "gcc");
	assert_eq!(invocations[1].arguments()[0], "mcf");
	assert_eq!(invocations[1].arguments().last(), Some(&root.path().join("mcf").join("1.trace").into_os_string()));
	assert_eq!(invocations[1].count_arg("--traces"), 1);
	assert_eq!(invocations[1].arguments().len(), 6);
}

#[test]
fn cpu_traces_root_with_files_fails() {
	let root = tempfile::tempdir().expect("Unable to create temp dir");
	touch(&root.path().join("stray.trace"));

	let params = CpuTracesParams {
		traces_dir: root.path().to_path_buf(),
		config:     CpuTracesConfig::default(),
	};
	assert!(matches!(params.build_invocations(), Err(DispatchError::DirectoryList { .. })));
}

#[cfg(unix)]
#[test]
fn non_utf8_names_are_skipped() {
	use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

	let dir = tempfile::tempdir().expect("Unable to create temp dir");
	touch(&dir.path().join("gcc.cpu_trace"));
	touch(&dir.path().join(OsStr::from_bytes(b"\xffbad.cpu_trace")));
	touch(&dir.path().join("mcf.cpu_trace"));

	let workloads = list_workloads(dir.path()).expect("Readable directory failed to list");
	assert_eq!(workloads.names(), ["gcc.cpu_trace", "mcf.cpu_trace"]);

	// Every worker still gets its shard
	assert_eq!(list_shard(dir.path(), 2, 0).expect("Unable to list shard"), ["gcc.cpu_trace"]);
	assert_eq!(list_shard(dir.path(), 2, 1).expect("Unable to list shard"), ["mcf.cpu_trace"]);
}

#[test]
fn invalid_worker_fails_before_listing() {
	let dir = tempfile::tempdir().expect("Unable to create temp dir");
	let missing = dir.path().join("missing");

	assert!(matches!(list_shard(&missing, 0, 0), Err(DispatchError::InvalidArgument(_))));
	assert!(matches!(list_shard(&missing, 2, 2), Err(DispatchError::InvalidArgument(_))));
	assert!(matches!(list_shard(&missing, 2, 1), Err(DispatchError::DirectoryList { .. })));
}

#[test]
fn nested_directories_are_not_traces() {
	let root = tempfile::tempdir().expect("Unable to create temp dir");
	let workload_dir = root.path().join("mcf");
	fs::create_dir_all(workload_dir.join("nested")).expect("Unable to create nested dir");
	touch(&workload_dir.join("0.trace"));
	touch(&workload_dir.join("nested").join("1.trace"));

	assert_eq!(list_files(&workload_dir).expect("Unable to list files").names(), ["0.trace"]);

	let params = CpuTracesParams {
		traces_dir: root.path().to_path_buf(),
		config:     CpuTracesConfig::default(),
	};
	let invocations = params.build_invocations().expect("Unable to list cpu traces");
	assert_eq!(invocations.len(), 1);
	assert_eq!(invocations[0].count_arg(workload_dir.join("nested")), 0);
	assert_eq!(invocations[0].arguments().last(), Some(&workload_dir.join("0.trace").into_os_string()));
}
