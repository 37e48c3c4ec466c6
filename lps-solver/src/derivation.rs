//! Rendering of the symbolic derivation of the optimal price.
//!
//! For π(p) = (p − c)(α − βp) − F the derivation is
//!
//! - π'(p) = α + βc − 2βp
//! - π''(p) = −2β
//! - p* = (α + βc) / (2β)
//!
//! Each expression is rendered with the numbers substituted, both as plain
//! unicode text and as LaTeX. The value shown for p* is taken from
//! [`ProfitCurve::vertex`], the same evaluator the optimizers use.

use crate::ProfitCurve;
use lps_core::models::{Derivation, Warning};

/// Render the derivation of the unconstrained optimum of `curve`.
///
/// Numbers are printed with `precision` decimals. The p* formula always
/// documents the unconstrained optimum, even when the delivered price is
/// clipped to the interval. When demand is not downward-sloping there is no
/// maximizer, and when the vertex overflows there is no value to print; in
/// both cases the formula says so instead.
pub fn render(curve: &ProfitCurve, precision: usize) -> Derivation {
    let num = |x: f64| number(x, precision);
    let sig = |x: f64| signed(x, precision);
    let par = |x: f64| parenthesized(x, precision);

    let alpha = curve.demand().alpha();
    let beta = curve.demand().beta();
    let c = curve.cost().unit_cost();
    let f = curve.cost().fixed_cost();
    let [a2, a1, _] = curve.coefficients();

    let objective = format!("π(p) = (p {})({} {}p) {}", sig(-c), num(alpha), sig(-beta), sig(-f));
    let objective_latex = format!(
        "\\pi(p) = (p {})({} {}p) {}",
        sig(-c),
        num(alpha),
        sig(-beta),
        sig(-f)
    );

    let d1 = format!(
        "π'(p) = {} + {}·{} - 2·{}·p = {} {}p",
        num(alpha),
        par(beta),
        num(c),
        par(beta),
        num(a1),
        sig(2.0 * a2)
    );
    let d1_latex = format!(
        "\\pi'(p) = {} + {} \\cdot {} - 2 \\cdot {} \\cdot p = {} {}p",
        num(alpha),
        par(beta),
        num(c),
        par(beta),
        num(a1),
        sig(2.0 * a2)
    );

    let d2 = format!("π''(p) = -2·{} = {}", par(beta), num(2.0 * a2));
    let d2_latex = format!("\\pi''(p) = -2 \\cdot {} = {}", par(beta), num(2.0 * a2));

    let quotient = format!(
        "p* = ({} + {}·{}) / (2·{})",
        num(alpha),
        par(beta),
        num(c),
        par(beta)
    );
    let quotient_latex = format!(
        "p^{{*}} = \\frac{{{} + {} \\cdot {}}}{{2 \\cdot {}}}",
        num(alpha),
        par(beta),
        num(c),
        par(beta)
    );

    let (p_star_formula, p_star_formula_latex) = match curve.vertex() {
        Ok(vertex) => (
            format!("{quotient} = {}", num(vertex.price())),
            format!("{quotient_latex} = {}", num(vertex.price())),
        ),
        Err(Warning::DegenerateDemand) => (
            format!(
                "{quotient} is not a maximizer, since π''(p) = {} ≥ 0",
                num(2.0 * a2)
            ),
            format!(
                "{quotient_latex} \\text{{ is not a maximizer, since }} \\pi''(p) = {} \\geq 0",
                num(2.0 * a2)
            ),
        ),
        Err(Warning::UnrepresentableVertex) => (
            format!("{quotient} overflows"),
            format!("{quotient_latex} \\text{{ overflows}}"),
        ),
    };

    Derivation {
        objective,
        d1,
        d2,
        p_star_formula,
        objective_latex,
        d1_latex,
        d2_latex,
        p_star_formula_latex,
    }
}

/// A fixed-precision number, with negative zero printed as zero
fn number(x: f64, precision: usize) -> String {
    let x = if x == 0.0 { 0.0 } else { x };
    format!("{x:.precision$}")
}

/// A term to be appended to an expression: `+ x` or `- |x|`
fn signed(x: f64, precision: usize) -> String {
    if x.is_sign_negative() {
        format!("- {}", number(-x, precision))
    } else {
        format!("+ {}", number(x, precision))
    }
}

/// A factor in a product, wrapped in parentheses when negative
fn parenthesized(x: f64, precision: usize) -> String {
    if x < 0.0 {
        format!("({})", number(x, precision))
    } else {
        number(x, precision)
    }
}
