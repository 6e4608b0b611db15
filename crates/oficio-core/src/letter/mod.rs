//! Carrier data request letter (Ofício) generation.

mod compose;
mod render;
pub mod template;

pub use compose::{compose, Alignment, Block, Letter, RecordTable, TextBlock};
pub use render::render;

use chrono::NaiveDate;
use tracing::info;

use crate::error::BuildError;
use crate::models::config::LetterTemplate;
use crate::models::letter::LetterRequest;

/// Builds letter documents from a fixed template.
#[derive(Debug, Clone, Default)]
pub struct LetterBuilder {
    template: LetterTemplate,
}

impl LetterBuilder {
    /// Create a builder with the default letterhead.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom letterhead.
    pub fn with_template(mut self, template: LetterTemplate) -> Self {
        self.template = template;
        self
    }

    pub fn template(&self) -> &LetterTemplate {
        &self.template
    }

    /// Lay out the letter without rendering it.
    pub fn compose(&self, request: &LetterRequest, generated_on: NaiveDate) -> Result<Letter, BuildError> {
        compose(request, &self.template, generated_on)
    }

    /// Build the `.docx` bytes for `request`, dated `generated_on`.
    pub fn build(&self, request: &LetterRequest, generated_on: NaiveDate) -> Result<Vec<u8>, BuildError> {
        let letter = self.compose(request, generated_on)?;
        let bytes = render(&letter)?;
        info!(
            "Built letter {} with {} record(s)",
            request.letter_number,
            request.records.len()
        );
        Ok(bytes)
    }
}

/// Build a letter with the default letterhead.
pub fn build(request: &LetterRequest, generated_on: NaiveDate) -> Result<Vec<u8>, BuildError> {
    LetterBuilder::new().build(request, generated_on)
}
