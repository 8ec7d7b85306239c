//! Math fragment tree for spoken-math conversion.
//!
//! The speech frontend builds an [`Expression`] out of an utterance and the
//! LaTeX backend renders it in a single pass. Every group in the tree is
//! explicitly delimited, so rendered output never needs brace repair.

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Expression {
    pub nodes: Vec<Node>,
    pub losses: Vec<Loss>,
}

impl Expression {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self {
            nodes,
            losses: Vec::new(),
        }
    }

    pub fn with_losses(nodes: Vec<Node>, losses: Vec<Loss>) -> Self {
        Self { nodes, losses }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A spoken word kept as-is: variable names, numbers, unknown words.
    Atom(String),
    /// A LaTeX fragment emitted verbatim (`\alpha`, `+`, `\leq`).
    Symbol(String),
    /// Attaches to the preceding node without a space.
    Superscript(Vec<Node>),
    Frac {
        numerator: Vec<Node>,
        denominator: Vec<Node>,
    },
    Root {
        index: Option<String>,
        radicand: Vec<Node>,
    },
    Function {
        name: String,
        argument: Vec<Node>,
    },
    Integral {
        lower: Option<Vec<Node>>,
        upper: Option<Vec<Node>>,
        body: Vec<Node>,
        variable: Option<String>,
    },
}

impl Node {
    pub fn atom(s: impl Into<String>) -> Self {
        Node::Atom(s.into())
    }

    pub fn symbol(s: impl Into<String>) -> Self {
        Node::Symbol(s.into())
    }

    /// True for leaf nodes that read unambiguously without grouping.
    pub fn is_simple(&self) -> bool {
        matches!(self, Node::Atom(_) | Node::Symbol(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loss {
    pub kind: String,
    pub message: String,
}

impl Loss {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }
}
