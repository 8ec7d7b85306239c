//! Plot command detection, normalization and plot specs

use pretty_assertions::assert_eq;
use voxtex::{
    detect_graph_command,
    graph::{RecordingPlotter, GRAPH_ERROR_MESSAGE},
    normalize_graph_expression, render_graph, GraphOutcome, PlotOptions, PlotSpec,
};

#[test]
fn test_detect_documented_examples() {
    assert_eq!(detect_graph_command("plot y = x^2"), Some("x^2".to_string()));
    assert_eq!(detect_graph_command("the derivative of x"), None);
}

#[test]
fn test_detect_is_case_insensitive_and_trims() {
    assert_eq!(
        detect_graph_command("PLOT Y = sin(x)   "),
        Some("sin(x)".to_string())
    );
    assert_eq!(
        detect_graph_command("please graph x cubed "),
        Some("x cubed".to_string())
    );
}

#[test]
fn test_normalize_cosine_is_not_mangled() {
    assert_eq!(normalize_graph_expression("cosine x"), "cos x");
    assert_eq!(
        normalize_graph_expression("sine x plus x squared"),
        "sin x plus x^2"
    );
}

#[test]
fn test_spoken_plot_end_to_end() {
    let expression = detect_graph_command("plot y equals x squared").unwrap();
    let spec = PlotSpec::from_command(&expression, &PlotOptions::default()).unwrap();
    assert_eq!(spec.expression, "x^2");
    assert_eq!(spec.evaluate(-3.0), 9.0);

    let config = spec.to_function_plot_config("#graphContainer");
    assert_eq!(config["width"], 600);
    assert_eq!(config["yAxis"]["domain"][1], 10.0);
    assert_eq!(config["data"][0]["fn"], "x^2");
}

#[test]
fn test_render_graph_reports_fixed_message() {
    let mut plotter = RecordingPlotter::default();
    let outcome = render_graph("x plus", &mut plotter, &PlotOptions::default());
    match outcome {
        GraphOutcome::Failed(message) => assert_eq!(message, GRAPH_ERROR_MESSAGE),
        GraphOutcome::Rendered(spec) => panic!("unexpected plot of {}", spec.expression),
    }
}

#[test]
fn test_sample_covers_domain() {
    let spec = PlotSpec::from_command("2x + 1", &PlotOptions::default()).unwrap();
    let points = spec.sample(21);
    assert_eq!(points.len(), 21);
    assert_eq!(points[0], (-10.0, -19.0));
    assert_eq!(points[20], (10.0, 21.0));
}
