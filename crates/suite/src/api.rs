//! Thin REST steps against the target's HTTP surface.
//!
//! The probe issues one GET at a time and asserts the status is exactly
//! 200 before handing the raw response back. Status mismatches and
//! transport faults are distinct failures so a 500 never masquerades as a
//! flaky network.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use thiserror::Error;
use tracing::debug;
use url::Url;

use testforge_harness::DEFAULT_BASE_URL;

const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

pub type ProbeResult<T> = std::result::Result<T, ProbeError>;

#[derive(Debug, Error)]
pub enum ProbeError {
	#[error("invalid base address: {0}")]
	BaseAddress(#[from] url::ParseError),

	#[error("transport error for {url}")]
	Transport {
		url: String,
		#[source]
		source: reqwest::Error,
	},

	#[error("unexpected status {status} from {url}")]
	UnexpectedStatus { url: String, status: StatusCode },

	#[error("http client construction failed")]
	Client(#[source] reqwest::Error),
}

/// Immutable base configuration for outbound requests.
#[derive(Debug, Clone)]
pub struct RequestSpec {
	base: Url,
}

impl RequestSpec {
	/// Validates and stores the base address; never mutated afterwards.
	pub fn new(base: &str) -> ProbeResult<Self> {
		Ok(Self { base: Url::parse(base)? })
	}

	pub fn base(&self) -> &Url {
		&self.base
	}

	/// Resolves `path` against the base with URL join semantics.
	pub fn url_for(&self, path: &str) -> ProbeResult<Url> {
		Ok(self.base.join(path)?)
	}
}

/// Issues single GET probes and asserts a 200 response.
pub struct HttpProbe {
	spec: RequestSpec,
	client: Client,
}

impl HttpProbe {
	/// Probe against the default search-engine address.
	pub fn new() -> ProbeResult<Self> {
		Self::with_base(DEFAULT_BASE_URL)
	}

	/// Probe against an explicit base address.
	pub fn with_base(base: &str) -> ProbeResult<Self> {
		let spec = RequestSpec::new(base)?;
		let client = Client::builder()
			.timeout(HTTP_TIMEOUT)
			.build()
			.map_err(ProbeError::Client)?;
		Ok(Self { spec, client })
	}

	pub fn spec(&self) -> &RequestSpec {
		&self.spec
	}

	/// GET `base + path`, asserting the response status is exactly 200.
	///
	/// Returns the raw response so callers can inspect headers and body.
	/// Non-200 responses fail with [`ProbeError::UnexpectedStatus`],
	/// network-level failures with [`ProbeError::Transport`].
	pub async fn fetch(&self, path: &str) -> ProbeResult<Response> {
		let url = self.spec.url_for(path)?;
		debug!(target = "forge", %url, "probe GET");

		let response = self
			.client
			.get(url.clone())
			.send()
			.await
			.map_err(|source| ProbeError::Transport {
				url: url.to_string(),
				source,
			})?;

		let status = response.status();
		if status != StatusCode::OK {
			return Err(ProbeError::UnexpectedStatus {
				url: url.to_string(),
				status,
			});
		}

		Ok(response)
	}

	/// GET against the base address itself.
	pub async fn fetch_root(&self) -> ProbeResult<Response> {
		self.fetch("/").await
	}
}
