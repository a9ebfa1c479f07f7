//! testforge-suite: page objects and API steps for the live search suite.
//!
//! Two thin layers over external engines, plus the e2e binary that wires
//! them to the harness fixture:
//!
//! * [`api`] - a single-GET HTTP probe with an immutable request spec.
//! * [`pages`] - the search front page as a page object.
//!
//! The live suite itself lives in `tests/e2e.rs` (opt-in via
//! `TESTFORGE_E2E=1`, since it needs installed browsers and network).

pub mod api;
pub mod pages;

pub use api::{HttpProbe, ProbeError, ProbeResult, RequestSpec};
pub use pages::SearchPage;
