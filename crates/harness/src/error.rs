use thiserror::Error;

pub type Result<T> = std::result::Result<T, ForgeError>;

#[derive(Debug, Error)]
pub enum ForgeError {
	/// Session could not be created; the whole suite aborts.
	#[error("browser launch failed: {0}")]
	Launch(String),

	#[error("navigation failed: {url}")]
	Navigation {
		url: String,
		#[source]
		source: anyhow::Error,
	},

	#[error("element not found: {selector} (gave up after {ms}ms)")]
	ElementNotFound { selector: String, ms: u64 },

	#[error("interaction failed: {selector}")]
	Interaction {
		selector: String,
		#[source]
		source: anyhow::Error,
	},

	#[error("case setup failed: {0}")]
	Setup(String),

	#[error("case teardown failed: {0}")]
	Teardown(String),

	#[error(transparent)]
	Io(#[from] std::io::Error),

	#[error(transparent)]
	Json(#[from] serde_json::Error),
}
