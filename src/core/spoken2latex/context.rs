//! Options for spoken math to LaTeX conversion

pub use crate::data::dictionary::RuleOrder;

/// Which conversion engine handles an utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Engine {
    /// Regex pre-processor, dictionary substitution and delimiter repair.
    #[default]
    Rules,
    /// Recursive-descent parse into a fragment tree, rendered in one pass.
    Structured,
}

impl Engine {
    pub fn name(&self) -> &'static str {
        match self {
            Engine::Rules => "rules",
            Engine::Structured => "structured",
        }
    }
}

/// Options for spoken math to LaTeX conversion
#[derive(Debug, Clone)]
pub struct S2LOptions {
    /// Conversion engine
    /// Default: Rules
    pub engine: Engine,

    /// Order in which dictionary rules are applied (rule engine only)
    /// Default: LongestFirst
    pub rule_order: RuleOrder,

    /// Close a trailing unclosed `\sqrt{` or `\frac{..}{` (rule engine only)
    /// Default: true
    pub repair_delimiters: bool,
}

impl Default for S2LOptions {
    fn default() -> Self {
        Self {
            engine: Engine::Rules,
            rule_order: RuleOrder::LongestFirst,
            repair_delimiters: true,
        }
    }
}

impl S2LOptions {
    /// Create new options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the structured engine, which handles nested constructs
    pub fn structured() -> Self {
        Self {
            engine: Engine::Structured,
            ..Self::default()
        }
    }

    /// Apply dictionary rules in declaration order, as first shipped
    pub fn legacy() -> Self {
        Self {
            rule_order: RuleOrder::Declaration,
            ..Self::default()
        }
    }
}
