//! Plot commands
//!
//! An utterance that starts a `plot`/`graph` command is routed here instead
//! of the LaTeX engine. The expression is normalized, validated by a small
//! parser and handed to a [`Plotter`].

pub mod detect;
pub mod expr;
pub mod normalize;
pub mod plot;

pub use detect::detect_graph_command;
pub use expr::PlotExpr;
pub use normalize::normalize_graph_expression;
pub use plot::{
    render_graph, GraphOutcome, PlotOptions, PlotSpec, Plotter, RecordingPlotter,
    GRAPH_ERROR_MESSAGE,
};
