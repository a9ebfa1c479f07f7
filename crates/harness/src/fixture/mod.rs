//! Suite and per-case browser fixtures.
//!
//! A [`Suite`] is the process-wide session: one Playwright driver and one
//! launched browser shared by every case. Each case gets a fresh [`Case`]
//! holding its own browsing context and page, so cookies and storage never
//! leak between cases. Contexts must not outlive the session; the runner
//! closes each one before the suite shuts down, and `shutdown` consumes
//! the suite so a torn-down session cannot be reused.

pub mod wait;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use playwright::Playwright;
use playwright::api::{Browser, BrowserContext, Page};
use tracing::debug;

use crate::config::{BrowserKind, SuiteConfig};
use crate::error::{ForgeError, Result};

/// Per-case setup/teardown seam used by the runner.
///
/// The production implementation is [`Suite`]; runner tests exercise the
/// lifecycle guarantees with counting in-memory fixtures instead.
#[async_trait]
pub trait Fixture {
	type Case: Clone + Send + Sync;

	/// Acquires a fresh, isolated case environment.
	async fn setup(&self) -> Result<Self::Case>;

	/// Releases a case environment. Runs on every exit path.
	async fn teardown(&self, case: Self::Case) -> Result<()>;
}

/// Process-wide browser session shared by every case in a suite.
pub struct Suite {
	// Held so the driver process stays alive for the browser's lifetime.
	_playwright: Playwright,
	browser: Browser,
	config: SuiteConfig,
	case_seq: AtomicU64,
}

impl Suite {
	/// Launches the session: driver, browser install check, one browser.
	///
	/// Any failure here is fatal to the suite; no case runs without a
	/// session.
	pub async fn launch(config: SuiteConfig) -> Result<Self> {
		debug!(target = "forge", browser = %config.browser, headless = config.headless, "launching suite session");

		let playwright = Playwright::initialize().await.map_err(launch_err)?;
		playwright.prepare().map_err(launch_err)?;

		let browser_type = match config.browser {
			BrowserKind::Chromium => playwright.chromium(),
			BrowserKind::Firefox => playwright.firefox(),
			BrowserKind::Webkit => playwright.webkit(),
		};
		let browser = browser_type
			.launcher()
			.headless(config.headless)
			.launch()
			.await
			.map_err(launch_err)?;

		Ok(Self {
			_playwright: playwright,
			browser,
			config,
			case_seq: AtomicU64::new(0),
		})
	}

	pub fn config(&self) -> &SuiteConfig {
		&self.config
	}

	/// Releases the session.
	///
	/// Consumes `self`: a torn-down suite cannot hand out cases. Closing a
	/// clean session is expected to succeed; the driver process stops when
	/// the Playwright handle drops with it.
	pub async fn shutdown(self) -> Result<()> {
		debug!(target = "forge", "closing suite session");
		self.browser
			.close()
			.await
			.map_err(|e| ForgeError::Teardown(e.to_string()))
	}
}

fn launch_err(e: impl std::fmt::Display) -> ForgeError {
	ForgeError::Launch(e.to_string())
}

/// One case's isolated browsing context and page.
///
/// Cheap to clone; all clones refer to the same context. The runner owns
/// the teardown, so case bodies can hold clones freely.
#[derive(Clone)]
pub struct Case {
	inner: Arc<CaseInner>,
}

struct CaseInner {
	context: BrowserContext,
	page: Page,
	id: u64,
}

impl Case {
	/// The page handle for this case's context.
	pub fn page(&self) -> &Page {
		&self.inner.page
	}

	/// The browsing context owned by this case.
	pub fn context(&self) -> &BrowserContext {
		&self.inner.context
	}

	/// Monotonic per-suite id; distinct ids witness distinct contexts.
	pub fn id(&self) -> u64 {
		self.inner.id
	}
}

#[async_trait]
impl Fixture for Suite {
	type Case = Case;

	async fn setup(&self) -> Result<Case> {
		let id = self.case_seq.fetch_add(1, Ordering::Relaxed) + 1;
		let context = self
			.browser
			.context_builder()
			.build()
			.await
			.map_err(|e| ForgeError::Setup(e.to_string()))?;
		let page = context.new_page().await.map_err(|e| ForgeError::Setup(e.to_string()))?;
		debug!(target = "forge", case = id, "case context ready");

		Ok(Case {
			inner: Arc::new(CaseInner { context, page, id }),
		})
	}

	async fn teardown(&self, case: Case) -> Result<()> {
		debug!(target = "forge", case = case.id(), "closing case context");
		case.context()
			.close()
			.await
			.map_err(|e| ForgeError::Teardown(e.to_string()))
	}
}
