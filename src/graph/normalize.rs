//! Spoken plot idioms to a plottable expression.

use lazy_static::lazy_static;
use phf::phf_map;
use regex::{Captures, Regex};

static TRIG_SHORT_NAMES: phf::Map<&'static str, &'static str> = phf_map! {
    "sine" => "sin",
    "cosine" => "cos",
    "tangent" => "tan",
};

lazy_static! {
    static ref X_SQUARED: Regex = Regex::new(r"(?i)\bx\s+squared\b").unwrap();
    static ref X_CUBED: Regex = Regex::new(r"(?i)\bx\s+cubed\b").unwrap();
    static ref TRIG_NAME: Regex = Regex::new(r"(?i)\b(sine|cosine|tangent)\b").unwrap();
}

/// Rewrite `x squared`, `x cubed` and spelled-out trig names. Independent of
/// the LaTeX phrase dictionary.
pub fn normalize_graph_expression(expression: &str) -> String {
    let func = X_SQUARED.replace_all(expression, "x^2");
    let func = X_CUBED.replace_all(&func, "x^3");
    TRIG_NAME
        .replace_all(&func, |caps: &Captures| {
            let name = caps[1].to_lowercase();
            TRIG_SHORT_NAMES
                .get(name.as_str())
                .map_or(name.clone(), |short| short.to_string())
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_powers() {
        assert_eq!(normalize_graph_expression("x squared + 1"), "x^2 + 1");
        assert_eq!(normalize_graph_expression("x cubed"), "x^3");
        assert_eq!(normalize_graph_expression("max squared"), "max squared");
    }

    #[test]
    fn test_trig_names() {
        assert_eq!(normalize_graph_expression("sine(x)"), "sin(x)");
        assert_eq!(normalize_graph_expression("cosine x"), "cos x");
        assert_eq!(normalize_graph_expression("Tangent x"), "tan x");
    }

    #[test]
    fn test_leaves_plain_expressions_alone() {
        assert_eq!(normalize_graph_expression("x^2 - 3x"), "x^2 - 3x");
    }
}
