//! IR to LaTeX backend.

use voxtex_ir::{Expression, Node};

#[derive(Debug, Clone)]
pub struct LatexRenderOptions {
    /// Emit a thin space (`\,`) before the differential of an integral.
    pub thin_space_differential: bool,
    /// Wrap compound function arguments in `\left( \right)`.
    pub function_parens: bool,
}

impl Default for LatexRenderOptions {
    fn default() -> Self {
        Self {
            thin_space_differential: true,
            function_parens: true,
        }
    }
}

pub fn render_expression(expr: &Expression, options: &LatexRenderOptions) -> String {
    let mut out = String::new();
    render_nodes(&expr.nodes, options, &mut out);
    out
}

fn render_nodes(nodes: &[Node], options: &LatexRenderOptions, out: &mut String) {
    let mut first = true;
    for node in nodes {
        if !first && !matches!(node, Node::Superscript(_)) {
            out.push(' ');
        }
        render_node(node, options, out);
        first = false;
    }
}

fn render_group(nodes: &[Node], options: &LatexRenderOptions, out: &mut String) {
    out.push('{');
    render_nodes(nodes, options, out);
    out.push('}');
}

fn render_node(node: &Node, options: &LatexRenderOptions, out: &mut String) {
    match node {
        Node::Atom(text) | Node::Symbol(text) => out.push_str(text),
        Node::Superscript(exponent) => {
            out.push('^');
            render_group(exponent, options, out);
        }
        Node::Frac {
            numerator,
            denominator,
        } => {
            out.push_str("\\frac");
            render_group(numerator, options, out);
            render_group(denominator, options, out);
        }
        Node::Root { index, radicand } => {
            out.push_str("\\sqrt");
            if let Some(index) = index {
                out.push('[');
                out.push_str(index);
                out.push(']');
            }
            render_group(radicand, options, out);
        }
        Node::Function { name, argument } => {
            out.push_str(name);
            match argument.as_slice() {
                [] => {}
                [single] if single.is_simple() => {
                    out.push(' ');
                    render_node(single, options, out);
                }
                args if options.function_parens => {
                    out.push_str("\\left(");
                    render_nodes(args, options, out);
                    out.push_str("\\right)");
                }
                args => {
                    out.push(' ');
                    render_nodes(args, options, out);
                }
            }
        }
        Node::Integral {
            lower,
            upper,
            body,
            variable,
        } => {
            out.push_str("\\int");
            if let Some(lower) = lower {
                out.push('_');
                render_group(lower, options, out);
            }
            if let Some(upper) = upper {
                out.push('^');
                render_group(upper, options, out);
            }
            if !body.is_empty() {
                out.push(' ');
                render_nodes(body, options, out);
            }
            if let Some(variable) = variable {
                if options.thin_space_differential {
                    out.push_str(" \\, d");
                } else {
                    out.push_str(" d");
                }
                out.push_str(variable);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(nodes: Vec<Node>) -> String {
        render_expression(&Expression::new(nodes), &LatexRenderOptions::default())
    }

    #[test]
    fn superscript_attaches_without_space() {
        let out = render(vec![
            Node::atom("x"),
            Node::Superscript(vec![Node::atom("2")]),
            Node::symbol("+"),
            Node::atom("1"),
        ]);
        assert_eq!(out, "x^{2} + 1");
    }

    #[test]
    fn function_with_compound_argument_is_parenthesized() {
        let out = render(vec![Node::Function {
            name: "\\sin".to_string(),
            argument: vec![Node::atom("x"), Node::symbol("+"), Node::atom("1")],
        }]);
        assert_eq!(out, "\\sin\\left(x + 1\\right)");
    }

    #[test]
    fn indefinite_integral_omits_bounds() {
        let out = render(vec![Node::Integral {
            lower: None,
            upper: None,
            body: vec![Node::atom("x")],
            variable: Some("x".to_string()),
        }]);
        assert_eq!(out, "\\int x \\, dx");
    }
}
