//! Document formatting validation and normalization
//!
//! Validates a parsed document against the fixed formatting standard
//! (margins, fonts, spacing, indentation, required sections, appendix
//! lettering) and deterministically rewrites a non-conforming document into
//! a conforming one.
//!
//! The validator is read-only and returns the full ordered violation list;
//! the fixer returns a new document and never repairs structural issues.
//! Both passes classify document regions independently through the same
//! pure classifier, so they always agree on the title-page boundary.

pub mod error;
pub mod fixer;
pub mod regions;
pub mod report;
pub mod resolve;
pub mod rules;
pub mod standard;
pub mod validator;

use doc_model::{CheckReport, Document};

pub use error::EngineError;
pub use fixer::fix;
pub use regions::{classify, RegionMap};
pub use validator::validate;

/// NormcheckEngine entry point
pub struct NormcheckEngine;

impl NormcheckEngine {
    pub fn new() -> Self {
        Self
    }

    /// Validate a document and wrap the result in a timestamped report.
    pub fn check_document(&self, document: &Document) -> Result<CheckReport, EngineError> {
        let violations = validator::validate(document)?;
        Ok(CheckReport {
            violations,
            checked_at: chrono::Utc::now().timestamp(),
        })
    }

    /// Produce a conforming copy of the document.
    pub fn fix_document(&self, document: &Document) -> Result<Document, EngineError> {
        fixer::fix(document)
    }
}

impl Default for NormcheckEngine {
    fn default() -> Self {
        Self::new()
    }
}
