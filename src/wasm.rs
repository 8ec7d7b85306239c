//! WASM bindings for voxtex
//!
//! This module provides JavaScript-accessible functions for spoken math
//! conversion and graph commands. Speech capture, typesetting and plotting
//! stay in the page; these functions only transform text.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

/// Spoken math conversion options (exposed to WASM)
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize, Default)]
pub struct SpokenConvertOptions {
    /// Use the structured engine instead of the rule engine
    #[serde(default)]
    pub structured: bool,
    /// Apply dictionary rules in declaration order
    #[serde(default)]
    pub legacy_order: bool,
    /// Close trailing unclosed `\sqrt{` and `\frac{..}{`
    #[serde(default = "default_true")]
    pub repair_delimiters: bool,
}

#[cfg(feature = "wasm")]
fn default_true() -> bool {
    true
}

/// Conversion result with additional metadata
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct ConvertResult {
    /// The converted output
    pub output: String,
    /// Whether the conversion was successful
    pub success: bool,
    /// Error message if conversion failed
    pub error: Option<String>,
    /// Warnings during conversion
    pub warnings: Vec<String>,
}

/// Safely serialize a value to JsValue, returning an error object on failure.
#[cfg(feature = "wasm")]
fn to_js_value<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or_else(|e| {
        let error_obj = ConvertResult {
            output: String::new(),
            success: false,
            error: Some(format!("Serialization error: {}", e)),
            warnings: vec![],
        };
        serde_wasm_bindgen::to_value(&error_obj).unwrap_or(JsValue::NULL)
    })
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Convert a spoken math utterance to LaTeX
///
/// # Arguments
/// * `input` - A finalized speech transcript
///
/// # Returns
/// LaTeX math code
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "spokenToLatex")]
pub fn spoken_to_latex_wasm(input: &str) -> String {
    crate::spoken_to_latex(input)
}

/// Detect a plot command
///
/// # Returns
/// The expression to plot, or `undefined` when the utterance is not a command
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "detectGraphCommand")]
pub fn detect_graph_command_wasm(input: &str) -> Option<String> {
    crate::detect_graph_command(input)
}

/// Build a function-plot configuration for a detected expression
///
/// # Arguments
/// * `expression` - Expression returned by `detectGraphCommand`
/// * `target` - CSS selector of the plot container
/// * `container_width` - Width of the plot container in pixels
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "graphConfig")]
pub fn graph_config_wasm(expression: &str, target: &str, container_width: u32) -> JsValue {
    let options = crate::PlotOptions {
        container_width,
        ..Default::default()
    };
    match crate::PlotSpec::from_command(expression, &options) {
        Ok(spec) => to_js_value(&spec.to_function_plot_config(target)),
        Err(err) => to_js_value(&ConvertResult {
            output: String::new(),
            success: false,
            error: Some(crate::graph::GRAPH_ERROR_MESSAGE.to_string()),
            warnings: vec![err.to_string()],
        }),
    }
}

/// Convert spoken math to LaTeX with options
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "convertWithOptions")]
pub fn convert_with_options_wasm(input: &str, options: JsValue) -> JsValue {
    let opts: SpokenConvertOptions = serde_wasm_bindgen::from_value(options).unwrap_or_default();

    let s2l_opts = crate::S2LOptions {
        engine: if opts.structured {
            crate::Engine::Structured
        } else {
            crate::Engine::Rules
        },
        rule_order: if opts.legacy_order {
            crate::RuleOrder::Declaration
        } else {
            crate::RuleOrder::LongestFirst
        },
        repair_delimiters: opts.repair_delimiters,
    };

    let report = crate::spoken_to_latex_with_report(input, &s2l_opts);
    let warnings = report
        .report
        .losses
        .iter()
        .map(|loss| loss.message.clone())
        .chain(report.report.warnings.iter().cloned())
        .collect();

    to_js_value(&ConvertResult {
        output: report.content,
        success: true,
        error: None,
        warnings,
    })
}

/// Get version information
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
