//! Plot specifications and the plotter seam.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::expr::PlotExpr;
use super::normalize::normalize_graph_expression;
use crate::utils::error::DictationResult;

/// Shown to the user whenever a plot command cannot be rendered.
pub const GRAPH_ERROR_MESSAGE: &str = "Error rendering graph. Please check your expression.";

/// Horizontal padding subtracted from the container width.
const CONTAINER_PADDING: u32 = 40;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotOptions {
    pub container_width: u32,
    pub height: u32,
    pub x_domain: [f64; 2],
    pub y_domain: [f64; 2],
    pub grid: bool,
    pub color: String,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            container_width: 640,
            height: 300,
            x_domain: [-10.0, 10.0],
            y_domain: [-10.0, 10.0],
            grid: true,
            color: "#667eea".to_string(),
        }
    }
}

impl PlotOptions {
    pub fn width(&self) -> u32 {
        self.container_width.saturating_sub(CONTAINER_PADDING)
    }
}

/// One validated function plot.
#[derive(Debug, Clone, Serialize)]
pub struct PlotSpec {
    /// Expression as detected in the utterance
    pub spoken: String,
    /// Canonical expression handed to the plotter
    pub expression: String,
    pub width: u32,
    pub height: u32,
    pub x_domain: [f64; 2],
    pub y_domain: [f64; 2],
    pub grid: bool,
    pub color: String,
    #[serde(skip)]
    parsed: PlotExpr,
}

impl PlotSpec {
    /// Normalize and validate a detected plot expression.
    pub fn from_command(expression: &str, options: &PlotOptions) -> DictationResult<Self> {
        let normalized = normalize_graph_expression(expression);
        let parsed = PlotExpr::parse(&normalized)?;
        tracing::debug!(spoken = expression, %parsed, "plot expression accepted");

        Ok(Self {
            spoken: expression.to_string(),
            expression: parsed.to_string(),
            width: options.width(),
            height: options.height,
            x_domain: options.x_domain,
            y_domain: options.y_domain,
            grid: options.grid,
            color: options.color.clone(),
            parsed,
        })
    }

    /// function-plot configuration targeting the element selector `target`.
    pub fn to_function_plot_config(&self, target: &str) -> Value {
        json!({
            "target": target,
            "width": self.width,
            "height": self.height,
            "xAxis": { "domain": self.x_domain },
            "yAxis": { "domain": self.y_domain },
            "grid": self.grid,
            "data": [{
                "fn": self.expression,
                "color": self.color,
            }],
        })
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        self.parsed.eval(x)
    }

    /// Evaluate `points` evenly spaced samples across the x domain. Samples
    /// with no finite value (poles, negative square roots) are skipped.
    pub fn sample(&self, points: usize) -> Vec<(f64, f64)> {
        let [start, end] = self.x_domain;
        match points {
            0 => Vec::new(),
            1 => {
                let y = self.evaluate(start);
                if y.is_finite() {
                    vec![(start, y)]
                } else {
                    Vec::new()
                }
            }
            _ => {
                let step = (end - start) / (points - 1) as f64;
                (0..points)
                    .map(|i| start + step * i as f64)
                    .map(|x| (x, self.evaluate(x)))
                    .filter(|(_, y)| y.is_finite())
                    .collect()
            }
        }
    }
}

/// Draws a plot. Hosts provide the rendering surface.
pub trait Plotter {
    fn plot(&mut self, spec: &PlotSpec) -> DictationResult<()>;
}

/// Keeps every plot it receives; used by the CLI and tests.
#[derive(Debug, Default)]
pub struct RecordingPlotter {
    pub plots: Vec<PlotSpec>,
}

impl Plotter for RecordingPlotter {
    fn plot(&mut self, spec: &PlotSpec) -> DictationResult<()> {
        self.plots.push(spec.clone());
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub enum GraphOutcome {
    Rendered(PlotSpec),
    Failed(String),
}

impl GraphOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, GraphOutcome::Rendered(_))
    }
}

/// Build and draw a plot. Any failure becomes [`GRAPH_ERROR_MESSAGE`].
pub fn render_graph(
    expression: &str,
    plotter: &mut dyn Plotter,
    options: &PlotOptions,
) -> GraphOutcome {
    let result = PlotSpec::from_command(expression, options).and_then(|spec| {
        plotter.plot(&spec)?;
        Ok(spec)
    });

    match result {
        Ok(spec) => GraphOutcome::Rendered(spec),
        Err(err) => {
            tracing::warn!(%err, expression, "graph rendering failed");
            GraphOutcome::Failed(GRAPH_ERROR_MESSAGE.to_string())
        }
    }
}
