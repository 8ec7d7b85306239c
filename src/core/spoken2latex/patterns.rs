//! Compound pattern pre-processor.
//!
//! Parameterized constructs are rewritten before dictionary substitution so
//! their operands are captured intact. The bare "over" and "to" entries in
//! the dictionary would otherwise consume the keywords first.

use lazy_static::lazy_static;
use regex::Regex;

use crate::data::dictionary::PHRASE_DICTIONARY;

/// How a matched pattern is rewritten.
#[derive(Debug, Clone, Copy)]
pub enum Rewrite {
    /// A `regex` replacement template
    Template(&'static str),
    /// `integral from A to B of ...` up to the first differential
    BoundedIntegral,
}

/// A structural rewrite capturing operands from the surrounding words.
#[derive(Debug)]
pub struct CompoundPattern {
    pub name: &'static str,
    pub regex: Regex,
    pub rewrite: Rewrite,
}

impl CompoundPattern {
    fn new(name: &'static str, pattern: &str, rewrite: Rewrite) -> Self {
        Self {
            name,
            regex: Regex::new(pattern).unwrap(),
            rewrite,
        }
    }

    /// Rewrite every occurrence in `text`.
    pub fn apply(&self, text: &str) -> String {
        match self.rewrite {
            Rewrite::Template(template) => self.regex.replace_all(text, template).into_owned(),
            Rewrite::BoundedIntegral => rewrite_bounded_integrals(&self.regex, text),
        }
    }
}

lazy_static! {
    /// Applied in this order.
    pub static ref COMPOUND_PATTERNS: Vec<CompoundPattern> = vec![
        // Single-token operands only: "x plus y over z" keeps "x plus".
        CompoundPattern::new(
            "fraction",
            r"(?i)(\w+)\s+over\s+(\w+)",
            Rewrite::Template(r"\frac{${1}}{${2}}"),
        ),
        CompoundPattern::new(
            "power",
            r"(?i)(\w+)\s+to\s+the\s+power\s+of\s+(\w+)",
            Rewrite::Template(r"${1}^{${2}}"),
        ),
        // Only the head; the integrand runs to the first accepted differential.
        CompoundPattern::new(
            "bounded-integral",
            r"(?i)integral\s+from\s+(\w+)\s+to\s+(\w+)\s+of\s+",
            Rewrite::BoundedIntegral,
        ),
    ];

    /// `d <var>` is tried before `d<var>`.
    static ref DIFFERENTIAL: Regex = Regex::new(r"(?i)\s+d(?:\s+(\w+)|(\w+))\b").unwrap();
}

fn rewrite_bounded_integrals(head: &Regex, text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut search = 0;

    while let Some(caps) = head.captures_at(text, search) {
        let Some(whole) = caps.get(0) else { break };
        search = whole.end();
        let Some((integrand_len, variable, consumed)) = find_differential(&text[whole.end()..])
        else {
            continue;
        };

        let integrand = &text[whole.end()..whole.end() + integrand_len];
        out.push_str(&text[copied..whole.start()]);
        out.push_str(&format!(
            "\\int_{{{}}}^{{{}}} {} \\, d{}",
            &caps[1], &caps[2], integrand, variable
        ));
        copied = whole.end() + consumed;
        search = copied;
    }

    out.push_str(&text[copied..]);
    out
}

/// Locate the differential ending an integrand: the integrand length, the
/// rendered variable and the bytes consumed through the variable.
fn find_differential(rest: &str) -> Option<(usize, String, usize)> {
    for caps in DIFFERENTIAL.captures_iter(rest) {
        let found = caps.get(0)?;
        // Integrand and differential stay on one line.
        if rest[..found.end()].contains('\n') {
            return None;
        }
        let variable = match (caps.get(1), caps.get(2)) {
            (Some(spoken), _) => spoken.as_str(),
            (None, Some(joined)) if !is_dictionary_word(&format!("d{}", joined.as_str())) => {
                joined.as_str()
            }
            _ => continue,
        };
        return Some((found.start(), differential_variable(variable), found.end()));
    }
    None
}

fn is_dictionary_word(word: &str) -> bool {
    PHRASE_DICTIONARY
        .iter()
        .any(|rule| rule.phrase.eq_ignore_ascii_case(word))
}

/// `theta` becomes `\theta`; anything else is kept as spoken.
fn differential_variable(variable: &str) -> String {
    let lowered = variable.to_lowercase();
    PHRASE_DICTIONARY
        .iter()
        .find(|rule| rule.phrase == lowered && rule.latex.strip_prefix('\\') == Some(rule.phrase))
        .map(|rule| rule.latex.to_string())
        .unwrap_or_else(|| variable.to_string())
}

pub fn apply_compound_patterns(text: &str) -> String {
    let mut out = text.to_string();
    for pattern in COMPOUND_PATTERNS.iter() {
        let next = pattern.apply(&out);
        if next != out {
            tracing::trace!(pattern = pattern.name, "compound pattern applied");
        }
        out = next;
    }
    out
}
