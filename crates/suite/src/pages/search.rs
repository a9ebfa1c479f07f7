//! Search front page: navigation plus one user-facing action.

use playwright::api::{ElementHandle, Page};
use tracing::debug;

use testforge_harness::{ForgeError, Poll, Result, wait_for_selector};

/// The query input on the front page.
const SEARCH_INPUT: &str = "textarea[name='q']";
/// One organic result block on the results page.
const RESULT_BLOCK: &str = "div.g";

/// Page object for the search front page.
///
/// Owns a page handle plus the target address. Every interaction assumes
/// [`SearchPage::open`] (or an equivalent navigation) already placed the
/// expected document in the page.
pub struct SearchPage {
	page: Page,
	target: String,
	poll: Poll,
}

impl SearchPage {
	pub fn new(page: Page, target: impl Into<String>, poll: Poll) -> Self {
		Self {
			page,
			target: target.into(),
			poll,
		}
	}

	/// Navigates the owned page to the target address.
	///
	/// Navigation failures are fatal to the caller; nothing retries here.
	pub async fn open(&self) -> Result<()> {
		debug!(target = "forge", url = %self.target, "open search page");
		self.page
			.goto_builder(&self.target)
			.goto()
			.await
			.map_err(|e| ForgeError::Navigation {
				url: self.target.clone(),
				source: anyhow::Error::new(e),
			})?;
		Ok(())
	}

	/// Fills the query input, submits with Enter, and returns a handle to
	/// the first result block.
	///
	/// Fails with [`ForgeError::ElementNotFound`] when the input (or the
	/// result region after submission) never appears within the bounded
	/// wait.
	pub async fn submit_search(&self, query: &str) -> Result<ElementHandle> {
		debug!(target = "forge", query, "submit search");
		wait_for_selector(&self.page, SEARCH_INPUT, self.poll).await?;

		self.page
			.fill_builder(SEARCH_INPUT, query)
			.fill()
			.await
			.map_err(|e| interaction(SEARCH_INPUT, e))?;
		self.page
			.press_builder(SEARCH_INPUT, "Enter")
			.press()
			.await
			.map_err(|e| interaction(SEARCH_INPUT, e))?;

		wait_for_selector(&self.page, RESULT_BLOCK, self.poll).await
	}

	/// Current document title.
	pub async fn title(&self) -> Result<String> {
		self.page.title().await.map_err(|e| interaction("title", e))
	}
}

fn interaction(selector: &str, e: impl std::error::Error + Send + Sync + 'static) -> ForgeError {
	ForgeError::Interaction {
		selector: selector.to_string(),
		source: anyhow::Error::new(e),
	}
}
