//! Side-channel case metadata.
//!
//! Severity, ownership, and issue links travel with a case as a structured
//! record, get logged at case start, and land in the JSON report. The
//! runner never branches on any of it; a case with no metadata behaves
//! identically to one with all fields set.

use serde::{Deserialize, Serialize};

/// Reporting severity attached to a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
	Trivial,
	Minor,
	Normal,
	Critical,
	Blocker,
}

/// Structured metadata record attached to a test case.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CaseMeta {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub severity: Option<Severity>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub owner: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub issue: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tms_link: Option<String>,
}

impl CaseMeta {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn describe(mut self, text: impl Into<String>) -> Self {
		self.description = Some(text.into());
		self
	}

	pub fn severity(mut self, severity: Severity) -> Self {
		self.severity = Some(severity);
		self
	}

	pub fn owner(mut self, owner: impl Into<String>) -> Self {
		self.owner = Some(owner.into());
		self
	}

	pub fn issue(mut self, issue: impl Into<String>) -> Self {
		self.issue = Some(issue.into());
		self
	}

	pub fn tms(mut self, link: impl Into<String>) -> Self {
		self.tms_link = Some(link.into());
		self
	}

	/// Emits the record as structured fields at case start.
	pub(crate) fn emit(&self, case: &str) {
		tracing::info!(
			target = "forge",
			case,
			severity = ?self.severity,
			owner = self.owner.as_deref(),
			issue = self.issue.as_deref(),
			tms = self.tms_link.as_deref(),
			"case start"
		);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_meta_serializes_to_empty_object() {
		let json = serde_json::to_string(&CaseMeta::new()).unwrap();
		assert_eq!(json, "{}");
	}

	#[test]
	fn setters_chain_and_serialize() {
		let meta = CaseMeta::new()
			.describe("smoke")
			.severity(Severity::Critical)
			.owner("Test Owner")
			.issue("AUTH-123")
			.tms("TMS-456");
		let json = serde_json::to_value(&meta).unwrap();
		assert_eq!(json["severity"], "critical");
		assert_eq!(json["owner"], "Test Owner");
		assert_eq!(json["issue"], "AUTH-123");
		assert_eq!(json["tms_link"], "TMS-456");
	}
}
