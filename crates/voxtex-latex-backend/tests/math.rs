use voxtex_ir::{Expression, Node};
use voxtex_latex_backend::{render_expression, LatexRenderOptions};

#[test]
fn nested_root_and_fraction_are_balanced() {
    let expr = Expression::new(vec![Node::Root {
        index: Some("3".to_string()),
        radicand: vec![Node::Frac {
            numerator: vec![Node::atom("x")],
            denominator: vec![Node::atom("y")],
        }],
    }]);
    let out = render_expression(&expr, &LatexRenderOptions::default());
    assert_eq!(out, "\\sqrt[3]{\\frac{x}{y}}");
    assert_eq!(out.matches('{').count(), out.matches('}').count());
}

#[test]
fn bounded_integral_without_thin_space() {
    let expr = Expression::new(vec![Node::Integral {
        lower: Some(vec![Node::atom("0")]),
        upper: Some(vec![Node::symbol("\\infty")]),
        body: vec![Node::atom("e"), Node::Superscript(vec![Node::symbol("-"), Node::atom("t")])],
        variable: Some("t".to_string()),
    }]);
    let out = render_expression(
        &expr,
        &LatexRenderOptions {
            thin_space_differential: false,
            function_parens: true,
        },
    );
    assert_eq!(out, "\\int_{0}^{\\infty} e^{- t} dt");
}
