//! Loss reporting for conversions that could not be rendered faithfully.

use serde::Serialize;
use voxtex_ir::Loss as IrLoss;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LossKind {
    UnbalancedDelimiter,
    UnattachedPhrase,
    MissingOperand,
    Other,
}

#[derive(Debug, Clone, Serialize)]
pub struct LossRecord {
    pub id: String,
    pub kind: LossKind,
    pub message: String,
    pub snippet: Option<String>,
}

impl LossRecord {
    pub fn new(
        id: String,
        kind: LossKind,
        message: impl Into<String>,
        snippet: Option<String>,
    ) -> Self {
        Self {
            id,
            kind,
            message: message.into(),
            snippet,
        }
    }

    pub fn from_ir_loss(id: String, loss: &IrLoss) -> Self {
        let kind = match loss.kind.as_str() {
            "unattached-phrase" => LossKind::UnattachedPhrase,
            "missing-operand" | "missing-over" | "missing-bound" | "missing-differential" => {
                LossKind::MissingOperand
            }
            _ => LossKind::Other,
        };
        Self {
            id,
            kind,
            message: loss.message.clone(),
            snippet: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LossReport {
    pub engine: String,
    pub losses: Vec<LossRecord>,
    pub warnings: Vec<String>,
}

impl LossReport {
    pub fn new(engine: impl Into<String>, losses: Vec<LossRecord>, warnings: Vec<String>) -> Self {
        Self {
            engine: engine.into(),
            losses,
            warnings,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.losses.is_empty() && self.warnings.is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ConversionReport {
    pub content: String,
    pub report: LossReport,
}

impl ConversionReport {
    pub fn new(content: String, report: LossReport) -> Self {
        Self { content, report }
    }
}
