//! Spoken phrase → LaTeX fragment table used by the rule engine.
//!
//! Fragments may leave a group open (`\sqrt{`, `\frac{`, `^{`); the compound
//! patterns and the delimiter repair pass are responsible for closing them.

/// A single dictionary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhraseRule {
    /// Lowercase, single-space separated.
    pub phrase: &'static str,
    pub latex: &'static str,
}

impl PhraseRule {
    pub const fn new(phrase: &'static str, latex: &'static str) -> Self {
        Self { phrase, latex }
    }

    pub fn token_count(&self) -> usize {
        self.phrase.split_whitespace().count()
    }

    /// Fragments like `^{2}` or `}{` glue onto the operand before them.
    pub fn attaches_left(&self) -> bool {
        self.latex.starts_with('^') || self.latex.starts_with('}')
    }

    /// Fragments that open a group swallow the space after them, as do
    /// filler words that render to nothing.
    pub fn absorbs_following_space(&self) -> bool {
        self.latex.is_empty() || self.latex.ends_with('{')
    }
}

const fn rule(phrase: &'static str, latex: &'static str) -> PhraseRule {
    PhraseRule::new(phrase, latex)
}

/// The phrase dictionary in declaration order.
pub const PHRASE_DICTIONARY: &[PhraseRule] = &[
    // Powers
    rule("squared", "^{2}"),
    rule("cubed", "^{3}"),
    rule("to the power of", "^{"),
    rule("to the", "^{"),
    rule("power", "}"),
    // Roots
    rule("square root of", "\\sqrt{"),
    rule("square root", "\\sqrt{"),
    rule("cube root of", "\\sqrt[3]{"),
    rule("nth root of", "\\sqrt[n]{"),
    // Fractions
    rule("fraction", "\\frac{"),
    rule("numerator", ""),
    rule("over", "}{"),
    rule("denominator", ""),
    // Calculus
    rule("integral", "\\int"),
    rule("integral from", "\\int_{"),
    rule("to", "}^{"),
    rule("of", "}"),
    rule("derivative", "\\frac{d}{dx}"),
    rule("partial derivative", "\\frac{\\partial}{\\partial x}"),
    rule("limit", "\\lim"),
    rule("sum", "\\sum"),
    rule("product", "\\prod"),
    // Greek letters
    rule("alpha", "\\alpha"),
    rule("beta", "\\beta"),
    rule("gamma", "\\gamma"),
    rule("delta", "\\delta"),
    rule("epsilon", "\\epsilon"),
    rule("theta", "\\theta"),
    rule("lambda", "\\lambda"),
    rule("mu", "\\mu"),
    rule("pi", "\\pi"),
    rule("sigma", "\\sigma"),
    rule("omega", "\\omega"),
    rule("phi", "\\phi"),
    rule("psi", "\\psi"),
    // Operators
    rule("plus", "+"),
    rule("minus", "-"),
    rule("times", "\\times"),
    rule("divided by", "\\div"),
    rule("equals", "="),
    rule("is equal to", "="),
    rule("not equal", "\\neq"),
    rule("not equal to", "\\neq"),
    rule("less than", "<"),
    rule("greater than", ">"),
    rule("less than or equal", "\\leq"),
    rule("less than or equal to", "\\leq"),
    rule("greater than or equal", "\\geq"),
    rule("greater than or equal to", "\\geq"),
    rule("approximately", "\\approx"),
    rule("infinity", "\\infty"),
    // Trigonometry
    rule("sine", "\\sin"),
    rule("cosine", "\\cos"),
    rule("tangent", "\\tan"),
    rule("cosecant", "\\csc"),
    rule("secant", "\\sec"),
    rule("cotangent", "\\cot"),
    // Functions
    rule("log", "\\log"),
    rule("natural log", "\\ln"),
    rule("exponential", "e^{"),
    // Sets and logic
    rule("element of", "\\in"),
    rule("not element of", "\\notin"),
    rule("subset", "\\subset"),
    rule("union", "\\cup"),
    rule("intersection", "\\cap"),
    rule("for all", "\\forall"),
    rule("there exists", "\\exists"),
    // Symbols
    rule("therefore", "\\therefore"),
    rule("because", "\\because"),
    rule("implies", "\\implies"),
    rule("if and only if", "\\iff"),
];

/// Order in which dictionary rules are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuleOrder {
    /// Longer phrases first; ties keep declaration order.
    #[default]
    LongestFirst,
    /// Table order as written. "less than" then shadows "less than or equal".
    Declaration,
}

/// The dictionary arranged for application in the given order.
pub fn ordered_rules(order: RuleOrder) -> Vec<PhraseRule> {
    let mut rules = PHRASE_DICTIONARY.to_vec();
    if order == RuleOrder::LongestFirst {
        rules.sort_by(|a, b| b.token_count().cmp(&a.token_count()));
    }
    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phrases_are_normalized() {
        for rule in PHRASE_DICTIONARY {
            assert_eq!(rule.phrase, rule.phrase.to_lowercase());
            assert_eq!(
                rule.phrase,
                rule.phrase.split_whitespace().collect::<Vec<_>>().join(" ")
            );
        }
    }

    #[test]
    fn longest_first_puts_containing_phrases_before_contained() {
        let rules = ordered_rules(RuleOrder::LongestFirst);
        let pos = |phrase: &str| rules.iter().position(|r| r.phrase == phrase).unwrap();
        assert!(pos("less than or equal") < pos("less than"));
        assert!(pos("square root of") < pos("square root"));
        assert!(pos("not element of") < pos("element of"));
        assert!(pos("element of") < pos("of"));
        assert!(pos("to the power of") < pos("to the"));
    }

    #[test]
    fn declaration_order_is_untouched() {
        let rules = ordered_rules(RuleOrder::Declaration);
        assert_eq!(rules, PHRASE_DICTIONARY.to_vec());
    }

    #[test]
    fn spacing_classes() {
        assert!(rule("squared", "^{2}").attaches_left());
        assert!(rule("over", "}{").attaches_left());
        assert!(rule("over", "}{").absorbs_following_space());
        assert!(rule("numerator", "").absorbs_following_space());
        assert!(!rule("plus", "+").attaches_left());
    }
}
