//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Error types and result types
//! - Loss reporting for imperfect conversions
//! - Brace balance analysis of LaTeX output

pub mod error;
pub mod latex_analysis;
pub mod loss;

// Re-export commonly used items
pub use error::{DictationError, DictationResult};
pub use latex_analysis::{brace_depth, is_balanced, metrics_source, LatexMetrics};
pub use loss::{ConversionReport, LossKind, LossRecord, LossReport};
