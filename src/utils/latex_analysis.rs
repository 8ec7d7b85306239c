//! LaTeX analysis utilities: brace balance and basic metrics.

use serde::Serialize;

#[derive(Debug, Default, Clone, Copy, Serialize)]
pub struct LatexMetrics {
    pub lines: usize,
    pub commands: usize,
    pub fractions: usize,
    pub roots: usize,
    pub integrals: usize,
    pub superscripts: usize,
    pub unbalanced_lines: usize,
}

impl LatexMetrics {
    pub fn is_balanced(&self) -> bool {
        self.unbalanced_lines == 0
    }
}

/// Net brace depth of `source`: positive when groups are left open, negative
/// when closers outnumber openers. Escaped braces (`\{`, `\}`) are ignored.
pub fn brace_depth(source: &str) -> i64 {
    let mut depth = 0i64;
    let mut escaped = false;
    for c in source.chars() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '{' => depth += 1,
            '}' => depth -= 1,
            _ => {}
        }
    }
    depth
}

/// True when every group opens before it closes and all groups close.
pub fn is_balanced(source: &str) -> bool {
    let mut depth = 0i64;
    let mut escaped = false;
    for c in source.chars() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}

pub fn metrics_source(source: &str) -> LatexMetrics {
    let mut metrics = LatexMetrics::default();

    for line in source.lines() {
        metrics.lines += 1;
        if !is_balanced(line) {
            metrics.unbalanced_lines += 1;
        }
    }

    metrics.commands = count_commands(source);
    metrics.fractions = source.matches("\\frac{").count();
    metrics.roots = source.matches("\\sqrt").count();
    metrics.integrals = source.matches("\\int").count();
    metrics.superscripts = source.matches('^').count();

    metrics
}

fn count_commands(source: &str) -> usize {
    let mut count = 0;
    let mut chars = source.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' && chars.peek().is_some_and(|n| n.is_ascii_alphabetic()) {
            count += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brace_depth() {
        assert_eq!(brace_depth("\\sqrt{4"), 1);
        assert_eq!(brace_depth("\\frac{a}{b}"), 0);
        assert_eq!(brace_depth("x}"), -1);
        assert_eq!(brace_depth("\\{ x"), 0);
    }

    #[test]
    fn test_is_balanced_rejects_early_close() {
        assert!(is_balanced("\\sqrt{\\frac{x}{y}}"));
        assert!(!is_balanced("}{"));
        assert!(!is_balanced("\\frac{d}{dx}} x"));
    }

    #[test]
    fn test_metrics() {
        let metrics = metrics_source("\\frac{a}{b}\n\\sqrt{x\nx^{2}");
        assert_eq!(metrics.lines, 3);
        assert_eq!(metrics.fractions, 1);
        assert_eq!(metrics.roots, 1);
        assert_eq!(metrics.superscripts, 1);
        assert_eq!(metrics.unbalanced_lines, 1);
        assert_eq!(metrics.commands, 2);
        assert!(!metrics.is_balanced());
    }
}
