//! Graph command detection.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Tried in order; the first match wins.
    static ref GRAPH_COMMANDS: [Regex; 2] = [
        Regex::new(r"(?i)\b(?:plot|graph)\s+(?:y\s*(?:=|equals)\s*)?(.+)").unwrap(),
        Regex::new(r"(?i)\b(?:plot|graph)\s+(.+)").unwrap(),
    ];
}

/// Extract the expression of a plot command, or `None` when the utterance
/// is not one. An empty expression is not a command.
///
/// `plot` or `graph` must start a word, so `"paragraph x"` is not a command.
/// A leading `y =` or `y equals` is stripped from the expression:
/// `"graph y equals x squared"` gives `"x squared"`.
pub fn detect_graph_command(text: &str) -> Option<String> {
    for pattern in GRAPH_COMMANDS.iter() {
        if let Some(caps) = pattern.captures(text) {
            let expression = caps[1].trim();
            return (!expression.is_empty()).then(|| expression.to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_with_y_equals() {
        assert_eq!(detect_graph_command("plot y = x^2"), Some("x^2".to_string()));
        assert_eq!(
            detect_graph_command("Graph y equals x squared"),
            Some("x squared".to_string())
        );
    }

    #[test]
    fn test_plot_without_y() {
        assert_eq!(
            detect_graph_command("graph sine x"),
            Some("sine x".to_string())
        );
    }

    #[test]
    fn test_not_a_command() {
        assert_eq!(detect_graph_command("the derivative of x"), None);
        assert_eq!(detect_graph_command("paragraph x"), None);
        assert_eq!(detect_graph_command("plot"), None);
        assert_eq!(detect_graph_command("plot   "), None);
    }
}
