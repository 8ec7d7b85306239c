//! Plot expression parser and evaluator.
//!
//! Accepts the expressions a plotting library understands in terms of `x`:
//! numbers, `pi`, `e`, `+ - * / ^`, parentheses, implicit multiplication
//! (`2x`, `3(x + 1)`) and the functions `sin cos tan sqrt log ln exp abs`.
//! `log` is the natural logarithm. The canonical [`Display`] form always
//! parenthesizes function arguments.
//!
//! [`Display`]: std::fmt::Display

use std::fmt;

use crate::utils::error::{DictationError, DictationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Func {
    Sin,
    Cos,
    Tan,
    Sqrt,
    Log,
    Ln,
    Exp,
    Abs,
}

impl Func {
    fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "sin" => Func::Sin,
            "cos" => Func::Cos,
            "tan" => Func::Tan,
            "sqrt" => Func::Sqrt,
            "log" => Func::Log,
            "ln" => Func::Ln,
            "exp" => Func::Exp,
            "abs" => Func::Abs,
            _ => return None,
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Func::Sin => "sin",
            Func::Cos => "cos",
            Func::Tan => "tan",
            Func::Sqrt => "sqrt",
            Func::Log => "log",
            Func::Ln => "ln",
            Func::Exp => "exp",
            Func::Abs => "abs",
        }
    }

    fn apply(&self, v: f64) -> f64 {
        match self {
            Func::Sin => v.sin(),
            Func::Cos => v.cos(),
            Func::Tan => v.tan(),
            Func::Sqrt => v.sqrt(),
            Func::Log | Func::Ln => v.ln(),
            Func::Exp => v.exp(),
            Func::Abs => v.abs(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinOp {
    fn symbol(&self) -> char {
        match self {
            BinOp::Add => '+',
            BinOp::Sub => '-',
            BinOp::Mul => '*',
            BinOp::Div => '/',
            BinOp::Pow => '^',
        }
    }

    fn precedence(&self) -> u8 {
        match self {
            BinOp::Add | BinOp::Sub => 1,
            BinOp::Mul | BinOp::Div => 2,
            BinOp::Pow => 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlotExpr {
    Number(f64),
    Var,
    Const(&'static str, f64),
    Neg(Box<PlotExpr>),
    Binary(BinOp, Box<PlotExpr>, Box<PlotExpr>),
    Call(Func, Box<PlotExpr>),
}

impl PlotExpr {
    pub fn parse(source: &str) -> DictationResult<Self> {
        let tokens = lex(source)?;
        if tokens.is_empty() {
            return Err(DictationError::plot("empty expression"));
        }
        let mut parser = Parser { tokens, pos: 0 };
        let expr = parser.parse_sum()?;
        match parser.tokens.get(parser.pos) {
            None => Ok(expr),
            Some((tok, at)) => Err(DictationError::plot_at(
                format!("unexpected {}", tok),
                *at,
            )),
        }
    }

    pub fn eval(&self, x: f64) -> f64 {
        match self {
            PlotExpr::Number(n) => *n,
            PlotExpr::Var => x,
            PlotExpr::Const(_, v) => *v,
            PlotExpr::Neg(inner) => -inner.eval(x),
            PlotExpr::Binary(op, lhs, rhs) => {
                let (a, b) = (lhs.eval(x), rhs.eval(x));
                match op {
                    BinOp::Add => a + b,
                    BinOp::Sub => a - b,
                    BinOp::Mul => a * b,
                    BinOp::Div => a / b,
                    BinOp::Pow => a.powf(b),
                }
            }
            PlotExpr::Call(func, arg) => func.apply(arg.eval(x)),
        }
    }

    fn precedence(&self) -> u8 {
        match self {
            PlotExpr::Binary(op, _, _) => op.precedence(),
            PlotExpr::Neg(_) => 3,
            _ => 5,
        }
    }
}

impl fmt::Display for PlotExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlotExpr::Number(n) => write!(f, "{}", n),
            PlotExpr::Var => write!(f, "x"),
            PlotExpr::Const(name, _) => write!(f, "{}", name),
            PlotExpr::Neg(inner) => {
                if inner.precedence() < 3 {
                    write!(f, "-({})", inner)
                } else {
                    write!(f, "-{}", inner)
                }
            }
            PlotExpr::Binary(op, lhs, rhs) => {
                let prec = op.precedence();
                // Power is right-associative; the others are left-associative.
                let (lhs_parens, rhs_parens) = if *op == BinOp::Pow {
                    (lhs.precedence() <= prec, rhs.precedence() < prec)
                } else {
                    (lhs.precedence() < prec, rhs.precedence() <= prec)
                };
                write_operand(f, lhs, lhs_parens)?;
                if *op == BinOp::Pow {
                    write!(f, "^")?;
                } else {
                    write!(f, " {} ", op.symbol())?;
                }
                write_operand(f, rhs, rhs_parens)
            }
            PlotExpr::Call(func, arg) => write!(f, "{}({})", func.name(), arg),
        }
    }
}

fn write_operand(f: &mut fmt::Formatter<'_>, expr: &PlotExpr, parens: bool) -> fmt::Result {
    if parens {
        write!(f, "({})", expr)
    } else {
        write!(f, "{}", expr)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Tok {
    Num(f64),
    Ident(String),
    Op(char),
    LParen,
    RParen,
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Num(n) => write!(f, "number {}", n),
            Tok::Ident(name) => write!(f, "'{}'", name),
            Tok::Op(c) => write!(f, "'{}'", c),
            Tok::LParen => write!(f, "'('"),
            Tok::RParen => write!(f, "')'"),
        }
    }
}

fn lex(source: &str) -> DictationResult<Vec<(Tok, usize)>> {
    let mut tokens = Vec::new();
    let mut chars = source.char_indices().peekable();

    while let Some(&(at, c)) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '0'..='9' | '.' => {
                let mut text = String::new();
                while let Some(&(_, d)) = chars.peek() {
                    if d.is_ascii_digit() || d == '.' {
                        text.push(d);
                        chars.next();
                    } else {
                        break;
                    }
                }
                let value = text
                    .parse::<f64>()
                    .map_err(|_| DictationError::plot_at(format!("bad number '{}'", text), at))?;
                tokens.push((Tok::Num(value), at));
            }
            c if c.is_alphabetic() => {
                let mut name = String::new();
                while let Some(&(_, d)) = chars.peek() {
                    if d.is_alphabetic() {
                        name.push(d.to_ascii_lowercase());
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push((Tok::Ident(name), at));
            }
            '+' | '-' | '*' | '/' | '^' => {
                chars.next();
                tokens.push((Tok::Op(c), at));
            }
            '(' => {
                chars.next();
                tokens.push((Tok::LParen, at));
            }
            ')' => {
                chars.next();
                tokens.push((Tok::RParen, at));
            }
            other => {
                return Err(DictationError::plot_at(
                    format!("unexpected character '{}'", other),
                    at,
                ))
            }
        }
    }

    Ok(tokens)
}

struct Parser {
    tokens: Vec<(Tok, usize)>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Tok> {
        self.tokens.get(self.pos).map(|(tok, _)| tok)
    }

    fn offset(&self) -> usize {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map_or(0, |(_, at)| *at)
    }

    fn parse_sum(&mut self) -> DictationResult<PlotExpr> {
        let mut lhs = self.parse_product()?;
        loop {
            let op = match self.peek() {
                Some(Tok::Op('+')) => BinOp::Add,
                Some(Tok::Op('-')) => BinOp::Sub,
                _ => return Ok(lhs),
            };
            self.pos += 1;
            let rhs = self.parse_product()?;
            lhs = PlotExpr::Binary(op, Box::new(lhs), Box::new(rhs));
        }
    }

    fn parse_product(&mut self) -> DictationResult<PlotExpr> {
        let mut lhs = self.parse_unary()?;
        loop {
            let op = match self.peek() {
                Some(Tok::Op('*')) => {
                    self.pos += 1;
                    BinOp::Mul
                }
                Some(Tok::Op('/')) => {
                    self.pos += 1;
                    BinOp::Div
                }
                // Implicit multiplication: "2x", "x(x + 1)", "2 sin(x)".
                Some(Tok::Num(_)) | Some(Tok::Ident(_)) | Some(Tok::LParen) => BinOp::Mul,
                _ => return Ok(lhs),
            };
            let rhs = self.parse_unary()?;
            lhs = PlotExpr::Binary(op, Box::new(lhs), Box::new(rhs));
        }
    }

    fn parse_unary(&mut self) -> DictationResult<PlotExpr> {
        match self.peek() {
            Some(Tok::Op('-')) => {
                self.pos += 1;
                Ok(PlotExpr::Neg(Box::new(self.parse_unary()?)))
            }
            Some(Tok::Op('+')) => {
                self.pos += 1;
                self.parse_unary()
            }
            _ => self.parse_power(),
        }
    }

    fn parse_power(&mut self) -> DictationResult<PlotExpr> {
        let base = self.parse_atom()?;
        if self.peek() == Some(&Tok::Op('^')) {
            self.pos += 1;
            let exponent = self.parse_unary()?;
            return Ok(PlotExpr::Binary(
                BinOp::Pow,
                Box::new(base),
                Box::new(exponent),
            ));
        }
        Ok(base)
    }

    fn parse_atom(&mut self) -> DictationResult<PlotExpr> {
        let at = self.offset();
        let Some((tok, _)) = self.tokens.get(self.pos).cloned() else {
            return Err(DictationError::plot_at("unexpected end of expression", at));
        };
        self.pos += 1;

        match tok {
            Tok::Num(n) => Ok(PlotExpr::Number(n)),
            Tok::LParen => {
                let inner = self.parse_sum()?;
                if self.peek() != Some(&Tok::RParen) {
                    return Err(DictationError::plot_at("missing ')'", self.offset()));
                }
                self.pos += 1;
                Ok(inner)
            }
            Tok::Ident(name) => match name.as_str() {
                "x" => Ok(PlotExpr::Var),
                "pi" => Ok(PlotExpr::Const("pi", std::f64::consts::PI)),
                "e" => Ok(PlotExpr::Const("e", std::f64::consts::E)),
                _ => match Func::from_name(&name) {
                    // "sin x^2" applies to the whole power, like "sin(x^2)".
                    Some(func) => Ok(PlotExpr::Call(func, Box::new(self.parse_power()?))),
                    None => Err(DictationError::plot_at(
                        format!("unknown name '{}'", name),
                        at,
                    )),
                },
            },
            other => Err(DictationError::plot_at(format!("unexpected {}", other), at)),
        }
    }
}
