//! # Voxtex
//!
//! Spoken math dictation to LaTeX.
//!
//! Voxtex turns finalized speech-recognition transcripts such as
//! `"integral from 0 to 1 of x squared d x"` into LaTeX, recognises
//! `plot`/`graph` commands and keeps dictated documents as saved notes.
//!
//! ## Engines
//!
//! - **Rules** (default): compound regex patterns, then phrase dictionary
//!   substitution (longest phrase first), then delimiter repair.
//! - **Structured**: a recursive-descent parse into a fragment tree that is
//!   rendered once, so nested constructs come out balanced.
//!
//! ## Usage
//!
//! ```rust
//! use voxtex::{detect_graph_command, spoken_to_latex, spoken_to_latex_with_options, S2LOptions};
//!
//! assert_eq!(spoken_to_latex("x squared"), "x^{2}");
//! assert_eq!(spoken_to_latex("a over b"), "\\frac{a}{b}");
//!
//! let nested = spoken_to_latex_with_options("square root of x over y", &S2LOptions::structured());
//! assert_eq!(nested, "\\sqrt{\\frac{x}{y}}");
//!
//! assert_eq!(detect_graph_command("plot y = x^2"), Some("x^2".to_string()));
//! ```

pub mod core;
pub mod data;
pub mod graph;
pub mod ir_pipeline;
pub mod notes;
pub mod preview;
pub mod session;
pub mod utils;
pub mod wasm;

pub use crate::core::spoken2latex::{
    spoken_to_latex, spoken_to_latex_with_options, spoken_to_latex_with_report, Engine,
    RuleOrder, S2LOptions,
};
pub use graph::{
    detect_graph_command, normalize_graph_expression, render_graph, GraphOutcome, PlotOptions,
    PlotSpec, Plotter,
};
pub use ir_pipeline::{spoken_to_latex_ir, spoken_to_latex_ir_with_report};
pub use notes::{KeyValueStore, MemoryStore, NoteBook, SavedNote};
pub use preview::{render_preview, DisplayMathTypesetter, PreviewLine, Typesetter};
pub use session::{DictationSession, RecognitionResult, SessionEvent, SessionStatus};
pub use utils::error::{DictationError, DictationResult};
pub use utils::loss::{ConversionReport, LossKind, LossRecord, LossReport};

/// Where a finalized utterance goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Routed {
    /// A plot command with its expression
    Graph(String),
    /// Dictated math, already converted
    Latex(String),
}

/// Route an utterance: plot commands are never converted to LaTeX.
pub fn route_utterance(utterance: &str, options: &S2LOptions) -> Routed {
    match detect_graph_command(utterance) {
        Some(expression) => Routed::Graph(expression),
        None => Routed::Latex(spoken_to_latex_with_options(utterance, options)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_graph() {
        assert_eq!(
            route_utterance("graph y = x cubed", &S2LOptions::default()),
            Routed::Graph("x cubed".to_string())
        );
    }

    #[test]
    fn test_route_latex() {
        assert_eq!(
            route_utterance("alpha plus beta", &S2LOptions::default()),
            Routed::Latex("\\alpha + \\beta".to_string())
        );
    }
}
