//! Spoken math to LaTeX converter
//!
//! The rule engine runs three passes over the lowercased utterance:
//! compound patterns, dictionary substitution and delimiter repair. Compound
//! patterns must run first; that ordering is what keeps "a over b" from being
//! split by the bare "over" dictionary entry.

pub mod context;
pub mod patterns;
pub mod repair;
pub mod substitute;

pub use context::{Engine, RuleOrder, S2LOptions};

use crate::utils::latex_analysis::{brace_depth, is_balanced};
use crate::utils::loss::{ConversionReport, LossKind, LossRecord, LossReport};

use patterns::apply_compound_patterns;
use repair::repair_delimiters;
use substitute::substitute_phrases;

/// Convert a spoken utterance to LaTeX with default options.
pub fn spoken_to_latex(input: &str) -> String {
    spoken_to_latex_with_options(input, &S2LOptions::default())
}

/// Convert a spoken utterance to LaTeX.
pub fn spoken_to_latex_with_options(input: &str, options: &S2LOptions) -> String {
    match options.engine {
        Engine::Rules => convert_with_rules(input, options),
        Engine::Structured => crate::ir_pipeline::spoken_to_latex_ir(input),
    }
}

/// Convert and report every output line whose braces do not balance.
pub fn spoken_to_latex_with_report(input: &str, options: &S2LOptions) -> ConversionReport {
    if options.engine == Engine::Structured {
        return crate::ir_pipeline::spoken_to_latex_ir_with_report(input);
    }

    let content = convert_with_rules(input, options);
    let mut losses = Vec::new();
    for line in content.lines() {
        if !is_balanced(line) {
            tracing::warn!(line, "unbalanced delimiters left unrepaired");
            losses.push(LossRecord::new(
                format!("loss-{}", losses.len() + 1),
                LossKind::UnbalancedDelimiter,
                format!(
                    "Brace depth {} outside the repairable \\sqrt/\\frac shapes",
                    brace_depth(line)
                ),
                Some(line.to_string()),
            ));
        }
    }

    ConversionReport::new(content, LossReport::new(Engine::Rules.name(), losses, Vec::new()))
}

fn convert_with_rules(input: &str, options: &S2LOptions) -> String {
    let text = input.to_lowercase();
    let text = apply_compound_patterns(&text);
    let text = substitute_phrases(&text, options.rule_order);
    let text = if options.repair_delimiters {
        repair_delimiters(&text)
    } else {
        text
    };
    tracing::debug!(input, output = %text, "rule engine conversion");
    text
}
