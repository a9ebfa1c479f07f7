use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::fixture::wait::Poll;

/// Base address probed and navigated to when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://www.google.com/";

/// Browser engine used for suite launch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BrowserKind {
	#[default]
	Chromium,
	Firefox,
	Webkit,
}

impl fmt::Display for BrowserKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Chromium => write!(f, "chromium"),
			Self::Firefox => write!(f, "firefox"),
			Self::Webkit => write!(f, "webkit"),
		}
	}
}

impl FromStr for BrowserKind {
	type Err = String;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		match s {
			"chromium" => Ok(Self::Chromium),
			"firefox" => Ok(Self::Firefox),
			"webkit" => Ok(Self::Webkit),
			other => Err(format!("unknown browser: {other} (expected chromium, firefox, or webkit)")),
		}
	}
}

/// Fully owned suite configuration.
///
/// This type is the stable handoff between the e2e entry point and the
/// fixture internals; everything a [`crate::Suite`] needs lives here.
#[derive(Debug, Clone)]
pub struct SuiteConfig {
	/// Browser engine used for the suite session.
	pub browser: BrowserKind,
	/// Whether the browser launches headless.
	pub headless: bool,
	/// Base address the suite runs against.
	pub base_url: String,
	/// Budget for explicit element waits.
	pub wait_timeout: Duration,
	/// Re-check interval inside explicit element waits.
	pub poll_interval: Duration,
}

impl Default for SuiteConfig {
	fn default() -> Self {
		Self {
			browser: BrowserKind::default(),
			headless: true,
			base_url: DEFAULT_BASE_URL.to_string(),
			wait_timeout: Duration::from_secs(10),
			poll_interval: Duration::from_millis(250),
		}
	}
}

impl SuiteConfig {
	/// The explicit-wait settings as a [`Poll`] value.
	pub fn poll(&self) -> Poll {
		Poll {
			timeout: self.wait_timeout,
			interval: self.poll_interval,
		}
	}
}
