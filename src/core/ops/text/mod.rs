//! Text operations - analysis, transformation, extraction
//!
//! `dispatch_text` maps an operation name onto [`TextOperation`]. Transform
//! and extract take their sub-operation from `TextParams::mode`.

pub mod analyze;
pub mod extract;
pub mod transform;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::{CoreError, CoreResult};

pub use analyze::{analyze, CharacterAnalysis, TextAnalysis};
pub use extract::{extract, ExtractKind};
pub use transform::{transform, TransformMode};

/// Parameter bag for text operations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextParams {
    pub text: String,
    pub mode: Option<String>,
}

impl TextParams {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            mode: None,
        }
    }

    pub fn with_mode(text: impl Into<String>, mode: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            mode: Some(mode.into()),
        }
    }
}

/// Closed set of text operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextOperation {
    Analyze,
    Transform,
    Extract,
}

impl TextOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextOperation::Analyze => "analyze",
            TextOperation::Transform => "transform",
            TextOperation::Extract => "extract",
        }
    }
}

impl FromStr for TextOperation {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "analyze" => Ok(TextOperation::Analyze),
            "transform" => Ok(TextOperation::Transform),
            "extract" => Ok(TextOperation::Extract),
            other => Err(CoreError::invalid(format!("Unknown text operation: {}", other))),
        }
    }
}

impl std::fmt::Display for TextOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a text operation; serializes as the bare payload
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TextResult {
    Analysis(TextAnalysis),
    Text(String),
    Matches(Vec<String>),
}

/// Text dispatcher entry point
pub fn dispatch_text(operation: &str, params: &TextParams) -> CoreResult<TextResult> {
    let op: TextOperation = operation.parse()?;
    tracing::debug!(
        operation = %op,
        mode = params.mode.as_deref().unwrap_or("-"),
        chars = params.text.len(),
        "dispatching text operation"
    );

    match op {
        TextOperation::Analyze => Ok(TextResult::Analysis(analyze(&params.text))),
        TextOperation::Transform => {
            let mode: TransformMode = require_mode(params, "Transform operation requires transformation type")?
                .parse()?;
            Ok(TextResult::Text(mode.apply(&params.text)))
        }
        TextOperation::Extract => {
            let kind: ExtractKind = require_mode(params, "Extract operation requires extraction type")?
                .parse()?;
            kind.extract(&params.text).map(TextResult::Matches)
        }
    }
}

fn require_mode<'a>(params: &'a TextParams, message: &str) -> CoreResult<&'a str> {
    params
        .mode
        .as_deref()
        .filter(|m| !m.is_empty())
        .ok_or_else(|| CoreError::invalid(message))
}
