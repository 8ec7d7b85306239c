//! Spoken vocabulary recognised by the structured parser.

/// How a symbol binds to its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolClass {
    /// Standalone operand: greek letters, `\infty`.
    Ordinary,
    /// Prefix operator that may be followed by "of": `\sum`, `\lim`, `\frac{d}{dx}`.
    Operator,
    Additive,
    Multiplicative,
    /// Lowest precedence: relations, set membership and logic connectives.
    Relation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lexeme {
    Squared,
    Cubed,
    /// "to the power of" / "to the": opens an exponent.
    PowerOf,
    /// "power": closes a "to the ... power" exponent.
    Power,
    Root(Option<&'static str>),
    Fraction,
    Over,
    EndFraction,
    /// "numerator", "denominator": filler words, dropped.
    Filler,
    Integral,
    IntegralFrom,
    To,
    Of,
    Exponential,
    Function(&'static str),
    Symbol(&'static str, SymbolClass),
}

use Lexeme::*;
use SymbolClass::*;

/// Phrase table. Longer phrases always win over shorter ones sharing a prefix;
/// the lexer resolves this by length, not by position in this table.
pub const LEXICON: &[(&str, Lexeme)] = &[
    // Powers
    ("squared", Squared),
    ("cubed", Cubed),
    ("to the power of", PowerOf),
    ("raised to the power of", PowerOf),
    ("to the", PowerOf),
    ("power", Power),
    // Roots
    ("square root of", Root(None)),
    ("square root", Root(None)),
    ("cube root of", Root(Some("3"))),
    ("cube root", Root(Some("3"))),
    ("nth root of", Root(Some("n"))),
    // Fractions
    ("fraction", Fraction),
    ("over", Over),
    ("end fraction", EndFraction),
    ("numerator", Filler),
    ("denominator", Filler),
    // Calculus
    ("integral", Integral),
    ("integral from", IntegralFrom),
    ("to", To),
    ("of", Of),
    ("derivative", Symbol("\\frac{d}{dx}", Operator)),
    ("partial derivative", Symbol("\\frac{\\partial}{\\partial x}", Operator)),
    ("limit", Function("\\lim")),
    ("sum", Symbol("\\sum", Operator)),
    ("product", Symbol("\\prod", Operator)),
    // Greek letters
    ("alpha", Symbol("\\alpha", Ordinary)),
    ("beta", Symbol("\\beta", Ordinary)),
    ("gamma", Symbol("\\gamma", Ordinary)),
    ("delta", Symbol("\\delta", Ordinary)),
    ("epsilon", Symbol("\\epsilon", Ordinary)),
    ("theta", Symbol("\\theta", Ordinary)),
    ("lambda", Symbol("\\lambda", Ordinary)),
    ("mu", Symbol("\\mu", Ordinary)),
    ("pi", Symbol("\\pi", Ordinary)),
    ("sigma", Symbol("\\sigma", Ordinary)),
    ("omega", Symbol("\\omega", Ordinary)),
    ("phi", Symbol("\\phi", Ordinary)),
    ("psi", Symbol("\\psi", Ordinary)),
    ("infinity", Symbol("\\infty", Ordinary)),
    // Operators
    ("plus", Symbol("+", Additive)),
    ("minus", Symbol("-", Additive)),
    ("times", Symbol("\\times", Multiplicative)),
    ("divided by", Symbol("\\div", Multiplicative)),
    ("equals", Symbol("=", Relation)),
    ("is equal to", Symbol("=", Relation)),
    ("not equal", Symbol("\\neq", Relation)),
    ("not equal to", Symbol("\\neq", Relation)),
    ("less than", Symbol("<", Relation)),
    ("greater than", Symbol(">", Relation)),
    ("less than or equal", Symbol("\\leq", Relation)),
    ("less than or equal to", Symbol("\\leq", Relation)),
    ("greater than or equal", Symbol("\\geq", Relation)),
    ("greater than or equal to", Symbol("\\geq", Relation)),
    ("approximately", Symbol("\\approx", Relation)),
    // Trigonometry
    ("sine", Function("\\sin")),
    ("cosine", Function("\\cos")),
    ("tangent", Function("\\tan")),
    ("cosecant", Function("\\csc")),
    ("secant", Function("\\sec")),
    ("cotangent", Function("\\cot")),
    // Functions
    ("log", Function("\\log")),
    ("natural log", Function("\\ln")),
    ("exponential", Exponential),
    // Sets and logic
    ("element of", Symbol("\\in", Relation)),
    ("not element of", Symbol("\\notin", Relation)),
    ("subset", Symbol("\\subset", Relation)),
    ("union", Symbol("\\cup", Additive)),
    ("intersection", Symbol("\\cap", Multiplicative)),
    ("for all", Symbol("\\forall", Ordinary)),
    ("there exists", Symbol("\\exists", Ordinary)),
    // Symbols
    ("therefore", Symbol("\\therefore", Relation)),
    ("because", Symbol("\\because", Relation)),
    ("implies", Symbol("\\implies", Relation)),
    ("if and only if", Symbol("\\iff", Relation)),
];
