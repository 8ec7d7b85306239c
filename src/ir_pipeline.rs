//! IR-based spoken math → LaTeX pipeline.

use voxtex_ir::Expression;
use voxtex_latex_backend::{render_expression, LatexRenderOptions};
use voxtex_speech_frontend::speech_to_ir;

use crate::utils::loss::{ConversionReport, LossRecord, LossReport};

/// Convert a spoken utterance to LaTeX through the fragment tree.
pub fn spoken_to_latex_ir(input: &str) -> String {
    let expr: Expression = speech_to_ir(input);
    render_expression(&expr, &LatexRenderOptions::default())
}

pub fn spoken_to_latex_ir_with_report(input: &str) -> ConversionReport {
    let expr = speech_to_ir(input);
    let content = render_expression(&expr, &LatexRenderOptions::default());
    let losses = expr
        .losses
        .iter()
        .enumerate()
        .map(|(idx, loss)| LossRecord::from_ir_loss(format!("loss-{}", idx + 1), loss))
        .collect();
    ConversionReport::new(content, LossReport::new("structured", losses, Vec::new()))
}
