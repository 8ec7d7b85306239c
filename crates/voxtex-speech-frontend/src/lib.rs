//! Spoken utterance to IR frontend.
//!
//! A recursive-descent parser over phrase tokens. Precedence, lowest first:
//! relations, additive operators, terms (multiplication, juxtaposition and
//! `over`), postfix powers, primaries. Roots take a whole term as radicand, so
//! "square root of x over y" nests the fraction under the root.

use voxtex_ir::{Expression, Loss, Node};

pub mod lexer;
pub mod lexicon;

use lexer::{tokenize, Token, TokenKind};
use lexicon::{Lexeme, SymbolClass};

pub fn speech_to_ir(input: &str) -> Expression {
    let tokens = tokenize(input);
    let mut parser = Parser::new(&tokens);
    let nodes = parser.parse_utterance();
    Expression::with_losses(nodes, parser.losses)
}

/// Tokens that end the construct currently being parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stop {
    Over,
    To,
    Of,
    Power,
    EndFraction,
    Differential,
}

fn with(stops: &[Stop], stop: Stop) -> Vec<Stop> {
    let mut out = stops.to_vec();
    out.push(stop);
    out
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    losses: Vec<Loss>,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            losses: Vec::new(),
        }
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn peek_lexeme(&self) -> Option<Lexeme> {
        self.peek().and_then(Token::lexeme)
    }

    fn eat(&mut self, lexeme: Lexeme) -> bool {
        if self.peek_lexeme() == Some(lexeme) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn loss(&mut self, kind: &str, message: impl Into<String>) {
        self.losses.push(Loss::new(kind, message));
    }

    /// Recognise `d x`, `dx` or `d theta` at the cursor. Returns the variable
    /// as LaTeX and the number of tokens it spans.
    fn differential_at(&self) -> Option<(String, usize)> {
        let token = self.peek()?;
        let word = token.word()?;
        if word == "d" {
            let next = self.tokens.get(self.pos + 1)?;
            return match &next.kind {
                TokenKind::Word(var) if is_single_letter(var) => Some((var.clone(), 2)),
                TokenKind::Lexeme(Lexeme::Symbol(latex, SymbolClass::Ordinary)) => {
                    Some((latex.to_string(), 2))
                }
                _ => None,
            };
        }
        let var = word.strip_prefix('d')?;
        is_single_letter(var).then(|| (var.to_string(), 1))
    }

    fn at_stop(&self, stops: &[Stop]) -> bool {
        let Some(token) = self.peek() else {
            return true;
        };
        let lexeme = token.lexeme();
        stops.iter().any(|stop| match stop {
            Stop::Over => lexeme == Some(Lexeme::Over),
            Stop::To => lexeme == Some(Lexeme::To),
            Stop::Of => lexeme == Some(Lexeme::Of),
            Stop::Power => lexeme == Some(Lexeme::Power),
            Stop::EndFraction => lexeme == Some(Lexeme::EndFraction),
            Stop::Differential => self.differential_at().is_some(),
        })
    }

    fn starts_operand(&self) -> bool {
        let Some(token) = self.peek() else {
            return false;
        };
        match token.kind {
            TokenKind::Word(_) => true,
            TokenKind::Lexeme(lexeme) => matches!(
                lexeme,
                Lexeme::Root(_)
                    | Lexeme::Fraction
                    | Lexeme::Integral
                    | Lexeme::IntegralFrom
                    | Lexeme::Exponential
                    | Lexeme::Function(_)
                    | Lexeme::Filler
                    | Lexeme::Symbol(_, SymbolClass::Ordinary)
                    | Lexeme::Symbol(_, SymbolClass::Operator)
            ),
        }
    }

    fn parse_utterance(&mut self) -> Vec<Node> {
        let mut nodes = Vec::new();
        while let Some(token) = self.peek() {
            let before = self.pos;
            nodes.extend(self.parse_relation(&[]));
            if self.pos == before {
                self.pos += 1;
                nodes.push(self.stray(token));
            }
        }
        nodes
    }

    /// A structural phrase with nothing to attach to is kept as plain text.
    fn stray(&mut self, token: &Token) -> Node {
        match token.lexeme() {
            Some(Lexeme::Symbol(latex, _)) => Node::symbol(latex),
            _ => {
                self.loss(
                    "unattached-phrase",
                    format!("'{}' has no operand to attach to", token.text),
                );
                Node::atom(token.text.clone())
            }
        }
    }

    fn parse_relation(&mut self, stops: &[Stop]) -> Vec<Node> {
        let mut nodes = self.parse_additive(stops);
        while !self.at_stop(stops) {
            let Some(Lexeme::Symbol(latex, SymbolClass::Relation)) = self.peek_lexeme() else {
                break;
            };
            self.pos += 1;
            nodes.push(Node::symbol(latex));
            nodes.extend(self.parse_additive(stops));
        }
        nodes
    }

    fn parse_additive(&mut self, stops: &[Stop]) -> Vec<Node> {
        let mut nodes = self.parse_term(stops);
        while !self.at_stop(stops) {
            let Some(Lexeme::Symbol(latex, SymbolClass::Additive)) = self.peek_lexeme() else {
                break;
            };
            self.pos += 1;
            nodes.push(Node::symbol(latex));
            nodes.extend(self.parse_term(stops));
        }
        nodes
    }

    fn parse_term(&mut self, stops: &[Stop]) -> Vec<Node> {
        let mut nodes = Vec::new();
        while !self.at_stop(stops) {
            match self.peek_lexeme() {
                Some(Lexeme::Over) if !nodes.is_empty() => {
                    self.pos += 1;
                    let denominator = self.parse_unary(stops);
                    if denominator.is_empty() {
                        self.loss("missing-operand", "'over' without a denominator");
                    }
                    let numerator = std::mem::take(&mut nodes);
                    nodes.push(Node::Frac {
                        numerator,
                        denominator,
                    });
                }
                Some(Lexeme::Symbol(latex, SymbolClass::Multiplicative)) => {
                    self.pos += 1;
                    nodes.push(Node::symbol(latex));
                    nodes.extend(self.parse_unary(stops));
                }
                _ if self.starts_operand() => nodes.extend(self.parse_unary(stops)),
                _ => break,
            }
        }
        nodes
    }

    fn parse_unary(&mut self, stops: &[Stop]) -> Vec<Node> {
        let mut nodes = self.parse_primary(stops);
        while !nodes.is_empty() && !self.at_stop(stops) {
            match self.peek_lexeme() {
                Some(Lexeme::Squared) => {
                    self.pos += 1;
                    nodes.push(Node::Superscript(vec![Node::atom("2")]));
                }
                Some(Lexeme::Cubed) => {
                    self.pos += 1;
                    nodes.push(Node::Superscript(vec![Node::atom("3")]));
                }
                Some(Lexeme::PowerOf) => {
                    self.pos += 1;
                    let exponent = self.parse_unary(&with(stops, Stop::Power));
                    self.eat(Lexeme::Power);
                    if exponent.is_empty() {
                        self.loss("missing-operand", "power without an exponent");
                    }
                    nodes.push(Node::Superscript(exponent));
                }
                _ => break,
            }
        }
        nodes
    }

    fn parse_primary(&mut self, stops: &[Stop]) -> Vec<Node> {
        let Some(token) = self.peek() else {
            return Vec::new();
        };
        let lexeme = match &token.kind {
            TokenKind::Word(word) => {
                self.pos += 1;
                return vec![Node::atom(word.clone())];
            }
            TokenKind::Lexeme(lexeme) => *lexeme,
        };

        match lexeme {
            Lexeme::Symbol(latex, SymbolClass::Ordinary) => {
                self.pos += 1;
                vec![Node::symbol(latex)]
            }
            Lexeme::Symbol(latex, SymbolClass::Operator) => {
                self.pos += 1;
                self.eat(Lexeme::Of);
                vec![Node::symbol(latex)]
            }
            Lexeme::Filler => {
                self.pos += 1;
                Vec::new()
            }
            Lexeme::Root(index) => {
                self.pos += 1;
                self.eat(Lexeme::Of);
                let radicand = self.parse_term(stops);
                if radicand.is_empty() {
                    self.loss("missing-operand", "root without a radicand");
                }
                vec![Node::Root {
                    index: index.map(str::to_string),
                    radicand,
                }]
            }
            Lexeme::Fraction => {
                self.pos += 1;
                vec![self.parse_fraction(stops)]
            }
            Lexeme::IntegralFrom => {
                self.pos += 1;
                vec![self.parse_bounded_integral(stops)]
            }
            Lexeme::Integral => {
                self.pos += 1;
                if self.eat(Lexeme::Of) {
                    let (body, variable) = self.parse_integrand(stops);
                    vec![Node::Integral {
                        lower: None,
                        upper: None,
                        body,
                        variable,
                    }]
                } else {
                    vec![Node::Integral {
                        lower: None,
                        upper: None,
                        body: Vec::new(),
                        variable: None,
                    }]
                }
            }
            Lexeme::Exponential => {
                self.pos += 1;
                self.eat(Lexeme::Of);
                let exponent = self.parse_unary(stops);
                if exponent.is_empty() {
                    self.loss("missing-operand", "exponential without an exponent");
                }
                vec![Node::atom("e"), Node::Superscript(exponent)]
            }
            Lexeme::Function(name) => {
                self.pos += 1;
                self.eat(Lexeme::Of);
                let argument = if self.starts_operand() && !self.at_stop(stops) {
                    self.parse_unary(stops)
                } else {
                    Vec::new()
                };
                vec![Node::Function {
                    name: name.to_string(),
                    argument,
                }]
            }
            _ => Vec::new(),
        }
    }

    /// `fraction NUM over DEN [end fraction]`: both operands may span several
    /// words, unlike the bare `A over B` form.
    fn parse_fraction(&mut self, stops: &[Stop]) -> Node {
        let numerator = self.parse_relation(&with(stops, Stop::Over));
        if !self.eat(Lexeme::Over) {
            self.loss("missing-over", "'fraction' was not followed by 'over'");
            return Node::Frac {
                numerator,
                denominator: Vec::new(),
            };
        }
        let denominator = self.parse_additive(&with(stops, Stop::EndFraction));
        self.eat(Lexeme::EndFraction);
        Node::Frac {
            numerator,
            denominator,
        }
    }

    fn parse_bounded_integral(&mut self, stops: &[Stop]) -> Node {
        let lower = self.parse_additive(&with(stops, Stop::To));
        if !self.eat(Lexeme::To) {
            self.loss("missing-bound", "integral lower bound without 'to'");
            return Node::Integral {
                lower: Some(lower),
                upper: None,
                body: Vec::new(),
                variable: None,
            };
        }
        let upper = self.parse_additive(&with(stops, Stop::Of));
        if !self.eat(Lexeme::Of) {
            self.loss("missing-bound", "integral upper bound without 'of'");
            return Node::Integral {
                lower: Some(lower),
                upper: Some(upper),
                body: Vec::new(),
                variable: None,
            };
        }
        let (body, variable) = self.parse_integrand(stops);
        Node::Integral {
            lower: Some(lower),
            upper: Some(upper),
            body,
            variable,
        }
    }

    fn parse_integrand(&mut self, stops: &[Stop]) -> (Vec<Node>, Option<String>) {
        let body = self.parse_relation(&with(stops, Stop::Differential));
        let variable = match self.differential_at() {
            Some((var, len)) => {
                self.pos += len;
                Some(var)
            }
            None => {
                self.loss("missing-differential", "integral without 'd <variable>'");
                None
            }
        };
        (body, variable)
    }
}

fn is_single_letter(s: &str) -> bool {
    let mut chars = s.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_takes_whole_term() {
        let expr = speech_to_ir("square root of x over y");
        assert_eq!(
            expr.nodes,
            vec![Node::Root {
                index: None,
                radicand: vec![Node::Frac {
                    numerator: vec![Node::atom("x")],
                    denominator: vec![Node::atom("y")],
                }],
            }]
        );
        assert!(expr.losses.is_empty());
    }

    #[test]
    fn additive_binds_looser_than_over() {
        let expr = speech_to_ir("x plus y over z");
        assert_eq!(expr.nodes.len(), 3);
        assert_eq!(expr.nodes[1], Node::symbol("+"));
        assert!(matches!(expr.nodes[2], Node::Frac { .. }));
    }

    #[test]
    fn explicit_fraction_spans_words() {
        let expr = speech_to_ir("fraction x plus y over z");
        let Node::Frac {
            numerator,
            denominator,
        } = &expr.nodes[0]
        else {
            panic!("expected fraction, got {:?}", expr.nodes);
        };
        assert_eq!(numerator.len(), 3);
        assert_eq!(denominator, &vec![Node::atom("z")]);
    }

    #[test]
    fn differential_detection() {
        let tokens = tokenize("dx");
        let parser = Parser::new(&tokens);
        assert_eq!(parser.differential_at(), Some(("x".to_string(), 1)));

        let tokens = tokenize("d theta");
        let parser = Parser::new(&tokens);
        assert_eq!(parser.differential_at(), Some(("\\theta".to_string(), 2)));

        let tokens = tokenize("dog");
        let parser = Parser::new(&tokens);
        assert_eq!(parser.differential_at(), None);
    }

    #[test]
    fn stray_over_is_reported() {
        let expr = speech_to_ir("over x");
        assert_eq!(expr.nodes[0], Node::atom("over"));
        assert_eq!(expr.losses.len(), 1);
        assert_eq!(expr.losses[0].kind, "unattached-phrase");
    }
}
