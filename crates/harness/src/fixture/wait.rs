//! Explicit bounded waits.
//!
//! The engine's implicit auto-wait is opaque; these helpers replace it with
//! a poll loop whose budget and cadence are visible in the suite config and
//! whose failure names the selector and the elapsed budget.

use std::future::Future;
use std::time::{Duration, Instant};

use playwright::api::{ElementHandle, Page};

use crate::error::{ForgeError, Result};

/// Bounded poll settings for explicit waits.
#[derive(Debug, Clone, Copy)]
pub struct Poll {
	pub timeout: Duration,
	pub interval: Duration,
}

impl Default for Poll {
	fn default() -> Self {
		Self {
			timeout: Duration::from_secs(10),
			interval: Duration::from_millis(250),
		}
	}
}

/// Re-invokes `probe` until it yields a value or the deadline elapses.
///
/// `Ok(None)` means the budget ran out without a hit. Probe errors are not
/// retried; they surface immediately.
pub async fn poll_until<T, F, Fut>(poll: Poll, mut probe: F) -> Result<Option<T>>
where
	F: FnMut() -> Fut,
	Fut: Future<Output = Result<Option<T>>>,
{
	let deadline = Instant::now() + poll.timeout;
	loop {
		if let Some(value) = probe().await? {
			return Ok(Some(value));
		}
		if Instant::now() >= deadline {
			return Ok(None);
		}
		tokio::time::sleep(poll.interval).await;
	}
}

/// Polls for a CSS selector until it appears or the budget elapses.
pub async fn wait_for_selector(page: &Page, selector: &str, poll: Poll) -> Result<ElementHandle> {
	let found = poll_until(poll, || async move {
		page.query_selector(selector).await.map_err(|e| ForgeError::Interaction {
			selector: selector.to_string(),
			source: anyhow::Error::new(e),
		})
	})
	.await?;

	found.ok_or_else(|| ForgeError::ElementNotFound {
		selector: selector.to_string(),
		ms: poll.timeout.as_millis() as u64,
	})
}
