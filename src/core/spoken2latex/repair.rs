//! Delimiter repair pass.
//!
//! Best-effort closing of the two fragment shapes the dictionary leaves open:
//! `\sqrt{...` and `\frac{...}{...`. A fragment is closed only when its own
//! brace is the single one missing at the end of the line, so balanced
//! fragments are never double-closed and nested unclosed groups are left
//! alone. At most one closer per fragment shape is added to each line.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SQRT_OPEN: Regex = Regex::new(r"\\sqrt(?:\[[^\]]*\])?\{").unwrap();
    static ref FRAC_OPEN: Regex = Regex::new(r"\\frac\{").unwrap();
}

#[derive(Debug, PartialEq, Eq)]
enum GroupEnd {
    /// Byte offset of the closing brace.
    Closed(usize),
    /// Group still open at end of input, with this many unclosed braces.
    Open(usize),
}

/// Scan a group whose opening brace was just consumed.
fn scan_group(rest: &str) -> GroupEnd {
    let mut depth = 1usize;
    let mut escaped = false;
    for (idx, c) in rest.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return GroupEnd::Closed(idx);
                }
            }
            _ => {}
        }
    }
    GroupEnd::Open(depth)
}

fn missing_only_own_closer(rest: &str) -> bool {
    !rest.trim().is_empty() && scan_group(rest) == GroupEnd::Open(1)
}

fn sqrt_needs_closer(line: &str) -> bool {
    SQRT_OPEN
        .find_iter(line)
        .any(|m| missing_only_own_closer(&line[m.end()..]))
}

fn frac_needs_closer(line: &str) -> bool {
    FRAC_OPEN.find_iter(line).any(|m| {
        let rest = &line[m.end()..];
        let GroupEnd::Closed(close) = scan_group(rest) else {
            return false;
        };
        rest[close + 1..]
            .strip_prefix('{')
            .is_some_and(missing_only_own_closer)
    })
}

fn repair_line(line: &str) -> String {
    let mut out = line.to_string();
    if sqrt_needs_closer(&out) {
        out.push('}');
    }
    if frac_needs_closer(&out) {
        out.push('}');
    }
    out
}

pub fn repair_delimiters(latex: &str) -> String {
    latex
        .split('\n')
        .map(repair_line)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closes_trailing_sqrt() {
        assert_eq!(repair_delimiters("\\sqrt{4"), "\\sqrt{4}");
        assert_eq!(repair_delimiters("\\sqrt[3]{8"), "\\sqrt[3]{8}");
    }

    #[test]
    fn closes_sqrt_around_inner_group() {
        assert_eq!(repair_delimiters("\\sqrt{x^{2}"), "\\sqrt{x^{2}}");
    }

    #[test]
    fn closes_trailing_frac_denominator() {
        assert_eq!(repair_delimiters("\\frac{a}{b"), "\\frac{a}{b}");
    }

    #[test]
    fn balanced_fragments_untouched() {
        for s in ["\\sqrt{4}", "\\frac{a}{b}", "\\sqrt{\\frac{x}{y}}", "x^{2}"] {
            assert_eq!(repair_delimiters(s), s);
        }
    }

    #[test]
    fn empty_fragment_not_closed() {
        assert_eq!(repair_delimiters("x \\sqrt{"), "x \\sqrt{");
    }

    #[test]
    fn one_closer_per_shape_per_line() {
        assert_eq!(repair_delimiters("\\sqrt{a \\sqrt{b"), "\\sqrt{a \\sqrt{b}");
    }

    #[test]
    fn lines_repaired_independently() {
        assert_eq!(
            repair_delimiters("\\sqrt{4\n\\frac{1}{2"),
            "\\sqrt{4}\n\\frac{1}{2}"
        );
    }

    #[test]
    fn unclosed_numerator_left_alone() {
        assert_eq!(repair_delimiters("\\frac{x + y"), "\\frac{x + y");
    }
}
