//! Integration tests for the rule engine and utterance routing

use pretty_assertions::assert_eq;
use voxtex::{
    route_utterance, spoken_to_latex, spoken_to_latex_with_options, spoken_to_latex_with_report,
    utils::latex_analysis::is_balanced, LossKind, Routed, S2LOptions,
};

// ============================================================================
// Documented conversions
// ============================================================================

mod conversions {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_squared() {
        assert_eq!(spoken_to_latex("x squared"), "x^{2}");
    }

    #[test]
    fn test_simple_fraction() {
        assert_eq!(spoken_to_latex("a over b"), "\\frac{a}{b}");
    }

    #[test]
    fn test_square_root_is_repaired() {
        assert_eq!(spoken_to_latex("square root of 4"), "\\sqrt{4}");
    }

    #[test]
    fn test_bounded_integral() {
        assert_eq!(
            spoken_to_latex("integral from 0 to 1 of x squared d x"),
            "\\int_{0}^{1} x^{2} \\, dx"
        );
        assert_eq!(
            spoken_to_latex("integral from 0 to 1 of x squared dx"),
            "\\int_{0}^{1} x^{2} \\, dx"
        );
    }

    #[test]
    fn test_bounded_integral_word_variable() {
        assert_eq!(
            spoken_to_latex("integral from 0 to pi of sine theta d theta"),
            "\\int_{0}^{\\pi} \\sin \\theta \\, d\\theta"
        );
        assert_eq!(
            spoken_to_latex("integral from 0 to pi of sine theta dtheta"),
            "\\int_{0}^{\\pi} \\sin \\theta \\, d\\theta"
        );
    }

    #[test]
    fn test_bounded_integral_keeps_delta_in_integrand() {
        assert_eq!(
            spoken_to_latex("integral from 0 to 1 of x delta y dx"),
            "\\int_{0}^{1} x \\delta y \\, dx"
        );
    }

    #[test]
    fn test_power_pattern() {
        assert_eq!(spoken_to_latex("x to the power of n"), "x^{n}");
    }

    #[test]
    fn test_operators_and_greek() {
        assert_eq!(
            spoken_to_latex("alpha plus beta equals gamma"),
            "\\alpha + \\beta = \\gamma"
        );
        assert_eq!(spoken_to_latex("2 pi r"), "2 \\pi r");
        assert_eq!(spoken_to_latex("sine theta"), "\\sin \\theta");
    }

    #[test]
    fn test_fraction_operand_is_single_token() {
        assert_eq!(spoken_to_latex("x plus y over z"), "x + \\frac{y}{z}");
    }

    #[test]
    fn test_case_is_folded() {
        assert_eq!(spoken_to_latex("X Squared"), "x^{2}");
    }
}

// ============================================================================
// Whole-word matching and rule order
// ============================================================================

mod matching {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unrecognized_input_is_lowercased_only() {
        for input in ["Hello World", "spin the top", "x y z", ""] {
            assert_eq!(spoken_to_latex(input), input.to_lowercase());
        }
    }

    #[test]
    fn test_words_inside_words_are_untouched() {
        assert_eq!(spoken_to_latex("spinach"), "spinach");
        assert_eq!(spoken_to_latex("topology"), "topology");
    }

    #[test]
    fn test_longer_phrases_win() {
        assert_eq!(spoken_to_latex("a less than or equal to b"), "a \\leq b");
        assert_eq!(spoken_to_latex("a greater than or equal b"), "a \\geq b");
        assert_eq!(spoken_to_latex("a not equal to b"), "a \\neq b");
        assert_eq!(spoken_to_latex("x not element of s"), "x \\notin s");
        assert_eq!(spoken_to_latex("natural log x"), "\\ln x");
    }

    #[test]
    fn test_legacy_order_shadows_longer_phrases() {
        let legacy = spoken_to_latex_with_options("a less than or equal b", &S2LOptions::legacy());
        assert_eq!(legacy, "a < or equal b");
    }
}

// ============================================================================
// Idempotence and delimiter repair
// ============================================================================

mod stability {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_conversion_is_idempotent() {
        let inputs = [
            "x squared",
            "a over b",
            "square root of 4",
            "integral from 0 to 1 of x squared d x",
            "integral from 0 to pi of sine theta d theta",
            "alpha times pi",
            "a less than or equal to b",
            "sum of x",
        ];
        for input in inputs {
            let once = spoken_to_latex(input);
            assert_eq!(spoken_to_latex(&once), once, "input: {}", input);
        }
    }

    #[test]
    fn test_balanced_fragments_are_not_double_closed() {
        assert_eq!(spoken_to_latex("\\sqrt{4}"), "\\sqrt{4}");
        assert_eq!(spoken_to_latex("\\frac{a}{b}"), "\\frac{a}{b}");
    }

    #[test]
    fn test_cube_root_repair() {
        let out = spoken_to_latex("cube root of 8");
        assert_eq!(out, "\\sqrt[3]{8}");
        assert!(is_balanced(&out));
    }

    #[test]
    fn test_unrepairable_output_is_reported() {
        let report = spoken_to_latex_with_report("e to the x", &S2LOptions::default());
        assert_eq!(report.content, "e^{x");
        assert_eq!(report.report.losses.len(), 1);
        assert_eq!(report.report.losses[0].kind, LossKind::UnbalancedDelimiter);
        assert_eq!(report.report.losses[0].snippet.as_deref(), Some("e^{x"));
    }

    #[test]
    fn test_loss_report_serializes() {
        let report = spoken_to_latex_with_report("e to the x", &S2LOptions::default());
        let json = serde_json::to_value(&report.report).unwrap();
        assert_eq!(json["engine"], "rules");
        assert_eq!(json["losses"][0]["kind"], "unbalanced-delimiter");
    }
}

// ============================================================================
// Routing
// ============================================================================

mod routing {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_graph_commands_are_not_converted() {
        assert_eq!(
            route_utterance("plot y = x^2", &S2LOptions::default()),
            Routed::Graph("x^2".to_string())
        );
        assert_eq!(
            route_utterance("Graph x squared", &S2LOptions::default()),
            Routed::Graph("x squared".to_string())
        );
    }

    #[test]
    fn test_math_is_converted() {
        assert_eq!(
            route_utterance("the derivative of x", &S2LOptions::default()),
            Routed::Latex(spoken_to_latex("the derivative of x"))
        );
        assert_eq!(
            route_utterance("paragraph x squared", &S2LOptions::default()),
            Routed::Latex("paragraph x^{2}".to_string())
        );
    }
}
