//! Sequential case runner with guaranteed teardown.
//!
//! The runner borrows a fixture and drives cases through the
//! setup → body → teardown lifecycle. Teardown runs on every exit path:
//! pass, failed assertion, or panic (caught on the case future). Only
//! fixture setup/teardown failures abort the suite; body failures are
//! recorded and the run continues.

use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::path::Path;
use std::time::Instant;

use futures::FutureExt;
use serde::Serialize;
use tracing::{error, info};

use crate::error::Result;
use crate::fixture::Fixture;
use crate::meta::CaseMeta;

/// Outcome of a single case.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CaseStatus {
	Passed,
	Failed { reason: String },
	Panicked { reason: String },
}

impl CaseStatus {
	pub fn passed(&self) -> bool {
		matches!(self, CaseStatus::Passed)
	}
}

/// Record of one executed case.
#[derive(Debug, Clone, Serialize)]
pub struct CaseResult {
	pub name: String,
	pub status: CaseStatus,
	pub duration_ms: u64,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub meta: Option<CaseMeta>,
}

/// Aggregate suite outcome.
#[derive(Debug, Clone, Serialize)]
pub struct SuiteReport {
	pub total: usize,
	pub passed: usize,
	pub failed: usize,
	pub duration_ms: u64,
	pub results: Vec<CaseResult>,
}

impl SuiteReport {
	/// True when every recorded case passed.
	pub fn ok(&self) -> bool {
		self.failed == 0
	}

	/// Writes the report as pretty JSON, creating parent directories.
	pub fn write_json(&self, path: &Path) -> Result<()> {
		if let Some(parent) = path.parent() {
			std::fs::create_dir_all(parent)?;
		}
		std::fs::write(path, serde_json::to_string_pretty(self)?)?;
		Ok(())
	}
}

/// Runs cases sequentially against a borrowed fixture.
///
/// `run` takes `&mut self`, so two cases can never overlap; each case gets
/// a fresh `Fixture::setup` and its paired `teardown`.
pub struct Runner<'a, F: Fixture> {
	fixture: &'a F,
	started: Instant,
	results: Vec<CaseResult>,
}

impl<'a, F: Fixture> Runner<'a, F> {
	pub fn new(fixture: &'a F) -> Self {
		Self {
			fixture,
			started: Instant::now(),
			results: Vec::new(),
		}
	}

	/// Executes one case body between fixture setup and teardown.
	///
	/// Returns whether the case passed. Body errors and panics become
	/// failed results; setup and teardown errors propagate and abort the
	/// suite (teardown still ran, and the case is still recorded).
	pub async fn run<B, Fut>(&mut self, name: &str, meta: Option<CaseMeta>, body: B) -> Result<bool>
	where
		B: FnOnce(F::Case) -> Fut,
		Fut: Future<Output = anyhow::Result<()>>,
	{
		match &meta {
			Some(meta) => meta.emit(name),
			None => info!(target = "forge", case = name, "case start"),
		}

		let case = self.fixture.setup().await?;
		let started = Instant::now();
		let outcome = AssertUnwindSafe(body(case.clone())).catch_unwind().await;
		let duration_ms = started.elapsed().as_millis() as u64;
		let teardown = self.fixture.teardown(case).await;

		let status = match outcome {
			Ok(Ok(())) => CaseStatus::Passed,
			Ok(Err(err)) => CaseStatus::Failed {
				reason: format!("{err:#}"),
			},
			Err(panic) => CaseStatus::Panicked {
				reason: panic_message(panic),
			},
		};

		match &status {
			CaseStatus::Passed => info!(target = "forge", case = name, duration_ms, "case passed"),
			CaseStatus::Failed { reason } => {
				error!(target = "forge", case = name, duration_ms, %reason, "case failed");
			}
			CaseStatus::Panicked { reason } => {
				error!(target = "forge", case = name, duration_ms, %reason, "case panicked");
			}
		}

		let passed = status.passed();
		self.results.push(CaseResult {
			name: name.to_string(),
			status,
			duration_ms,
			meta,
		});

		teardown?;
		Ok(passed)
	}

	/// Consumes the runner into the aggregate report.
	pub fn into_report(self) -> SuiteReport {
		let passed = self.results.iter().filter(|r| r.status.passed()).count();
		let failed = self.results.len() - passed;
		SuiteReport {
			total: self.results.len(),
			passed,
			failed,
			duration_ms: self.started.elapsed().as_millis() as u64,
			results: self.results,
		}
	}
}

fn panic_message(panic: Box<dyn std::any::Any + Send>) -> String {
	if let Some(s) = panic.downcast_ref::<&str>() {
		(*s).to_string()
	} else if let Some(s) = panic.downcast_ref::<String>() {
		s.clone()
	} else {
		"non-string panic payload".to_string()
	}
}

#[cfg(test)]
mod tests {
	use std::sync::{Arc, Mutex};
	use std::sync::atomic::{AtomicUsize, Ordering};

	use super::*;
	use crate::error::ForgeError;
	use crate::meta::{CaseMeta, Severity};

	/// In-memory fixture whose "case" is just a monotonic id.
	#[derive(Default)]
	struct CountingFixture {
		setups: AtomicUsize,
		teardowns: AtomicUsize,
	}

	#[async_trait::async_trait]
	impl Fixture for CountingFixture {
		type Case = usize;

		async fn setup(&self) -> crate::error::Result<usize> {
			Ok(self.setups.fetch_add(1, Ordering::SeqCst) + 1)
		}

		async fn teardown(&self, _case: usize) -> crate::error::Result<()> {
			self.teardowns.fetch_add(1, Ordering::SeqCst);
			Ok(())
		}
	}

	struct BrokenSetup;

	#[async_trait::async_trait]
	impl Fixture for BrokenSetup {
		type Case = usize;

		async fn setup(&self) -> crate::error::Result<usize> {
			Err(ForgeError::Setup("no context for you".into()))
		}

		async fn teardown(&self, _case: usize) -> crate::error::Result<()> {
			panic!("teardown must not run when setup failed");
		}
	}

	#[tokio::test]
	async fn teardown_runs_once_after_passing_case() {
		let fixture = CountingFixture::default();
		let mut runner = Runner::new(&fixture);

		let passed = runner.run("ok", None, |_case| async { Ok(()) }).await.unwrap();

		assert!(passed);
		assert_eq!(fixture.setups.load(Ordering::SeqCst), 1);
		assert_eq!(fixture.teardowns.load(Ordering::SeqCst), 1);
	}

	#[tokio::test]
	async fn teardown_runs_when_body_fails() {
		let fixture = CountingFixture::default();
		let mut runner = Runner::new(&fixture);

		let passed = runner
			.run("fails", None, |_case| async { anyhow::bail!("body is empty") })
			.await
			.unwrap();

		assert!(!passed);
		assert_eq!(fixture.teardowns.load(Ordering::SeqCst), 1);

		let report = runner.into_report();
		assert_eq!(report.failed, 1);
		assert!(matches!(
			&report.results[0].status,
			CaseStatus::Failed { reason } if reason.contains("body is empty")
		));
	}

	#[tokio::test]
	async fn teardown_runs_when_body_panics() {
		let fixture = CountingFixture::default();
		let mut runner = Runner::new(&fixture);

		let passed = runner
			.run("panics", None, |_case| async { panic!("boom") })
			.await
			.unwrap();

		assert!(!passed);
		assert_eq!(fixture.teardowns.load(Ordering::SeqCst), 1);

		let report = runner.into_report();
		assert!(matches!(
			&report.results[0].status,
			CaseStatus::Panicked { reason } if reason == "boom"
		));
	}

	#[tokio::test]
	async fn sequential_cases_get_fresh_case_values() {
		let fixture = CountingFixture::default();
		let mut runner = Runner::new(&fixture);
		let seen = Arc::new(Mutex::new(Vec::new()));

		for name in ["first", "second"] {
			let seen = Arc::clone(&seen);
			runner
				.run(name, None, move |case| async move {
					seen.lock().unwrap().push(case);
					Ok(())
				})
				.await
				.unwrap();
		}

		assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
		assert_eq!(fixture.teardowns.load(Ordering::SeqCst), 2);
	}

	#[tokio::test]
	async fn setup_failure_aborts_without_running_body_or_teardown() {
		let fixture = BrokenSetup;
		let mut runner = Runner::new(&fixture);

		let err = runner
			.run("never", None, |_case| async {
				panic!("body must not run");
			})
			.await
			.unwrap_err();

		assert!(matches!(err, ForgeError::Setup(_)));
		assert_eq!(runner.into_report().total, 0);
	}

	#[tokio::test]
	async fn report_carries_meta_and_totals() {
		let fixture = CountingFixture::default();
		let mut runner = Runner::new(&fixture);

		let meta = CaseMeta::new().severity(Severity::Critical).owner("Test Owner");
		runner.run("tagged", Some(meta), |_case| async { Ok(()) }).await.unwrap();
		runner
			.run("untagged", None, |_case| async { anyhow::bail!("nope") })
			.await
			.unwrap();

		let report = runner.into_report();
		assert_eq!(report.total, 2);
		assert_eq!(report.passed, 1);
		assert_eq!(report.failed, 1);
		assert!(!report.ok());
		assert_eq!(report.results[0].meta.as_ref().unwrap().owner.as_deref(), Some("Test Owner"));
		assert!(report.results[1].meta.is_none());
	}

	#[tokio::test]
	async fn report_round_trips_through_json() {
		let fixture = CountingFixture::default();
		let mut runner = Runner::new(&fixture);
		runner.run("ok", None, |_case| async { Ok(()) }).await.unwrap();

		let report = runner.into_report();
		let json = serde_json::to_value(&report).unwrap();
		assert_eq!(json["total"], 1);
		assert_eq!(json["results"][0]["status"]["kind"], "passed");
	}
}
