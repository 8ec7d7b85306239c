//! Core conversion engines
//!
//! - `spoken2latex`: rule-based spoken math → LaTeX transducer

pub mod spoken2latex;
