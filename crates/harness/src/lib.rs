//! testforge-harness: suite/case lifecycle for browser and API e2e suites.
//!
//! The harness owns the fixture boundary of a test suite: one browser
//! session per suite ([`Suite`]), one isolated browsing context per case
//! ([`Case`]), and a sequential [`Runner`] that guarantees per-case
//! teardown on every exit path, assertion failures and panics included.
//!
//! Browser control itself is delegated to the `playwright` crate; nothing
//! here speaks the wire protocol. The harness only sequences engine calls
//! and keeps the lifecycle honest.

pub mod config;
pub mod error;
pub mod fixture;
pub mod logging;
pub mod meta;
pub mod runner;

pub use config::{BrowserKind, DEFAULT_BASE_URL, SuiteConfig};
pub use error::{ForgeError, Result};
pub use fixture::wait::{Poll, poll_until, wait_for_selector};
pub use fixture::{Case, Fixture, Suite};
pub use meta::{CaseMeta, Severity};
pub use runner::{CaseResult, CaseStatus, Runner, SuiteReport};
