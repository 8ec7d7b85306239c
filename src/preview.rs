//! Line-by-line preview of a LaTeX document.

use serde::Serialize;

use crate::utils::latex_analysis::is_balanced;

/// Text shown when the document is empty.
pub const PREVIEW_PLACEHOLDER: &str = "Preview will appear here...";

/// Renders one line of LaTeX as display math.
pub trait Typesetter {
    fn typeset(&self, latex: &str) -> Result<String, String>;
}

/// Wraps balanced lines in `\[ .. \]`; rejects lines whose braces do not
/// balance.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisplayMathTypesetter;

impl Typesetter for DisplayMathTypesetter {
    fn typeset(&self, latex: &str) -> Result<String, String> {
        if !is_balanced(latex) {
            return Err(format!("unbalanced braces in '{}'", latex));
        }
        Ok(format!("\\[ {} \\]", latex.trim()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "kebab-case")]
pub enum PreviewLine {
    Placeholder,
    Break,
    Math(String),
    /// The line as typed, shown when typesetting failed
    Raw(String),
}

pub fn render_preview(document: &str, typesetter: &dyn Typesetter) -> Vec<PreviewLine> {
    if document.trim().is_empty() {
        return vec![PreviewLine::Placeholder];
    }

    document
        .split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                return PreviewLine::Break;
            }
            match typesetter.typeset(line) {
                Ok(markup) => PreviewLine::Math(markup),
                Err(err) => {
                    tracing::debug!(line, %err, "preview falls back to raw text");
                    PreviewLine::Raw(line.to_string())
                }
            }
        })
        .collect()
}
