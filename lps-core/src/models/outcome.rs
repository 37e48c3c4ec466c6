/// The outcome of optimizing a price.
///
/// All prices and amounts are finite. Metrics which are undefined at the
/// chosen price (e.g. elasticity at zero demand) are None rather than NaN.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct OptimizationResult {
    /// The profit-maximizing price within the admissible interval
    pub p_opt: f64,
    /// The quantity demanded at `p_opt`, floored at zero
    pub q_opt: f64,
    /// Revenue at `p_opt`
    pub revenue: f64,
    /// Profit at `p_opt`, net of variable and fixed costs
    pub profit_opt: f64,
    /// (p − c)/p at `p_opt`, None when `p_opt` is zero
    pub margin: Option<f64>,
    /// β·p/q at `p_opt`, None when there is no demand
    pub elasticity: Option<f64>,
    /// Whether the price was determined by the interval rather than the vertex
    pub used_boundary: bool,
    /// The unconstrained vertex of the profit parabola, None when β ≤ 0 or
    /// when the vertex is too large to represent
    pub p_star: Option<f64>,
    /// Non-fatal anomalies encountered while optimizing
    pub warnings: Vec<Warning>,
    /// A human-readable derivation of the solution
    pub derivation: Derivation,
}

/// Non-fatal conditions attached to an optimization outcome
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Warning {
    /// Demand does not decrease with price (β ≤ 0), so profit has no interior
    /// maximum and the better of the two interval bounds was chosen
    DegenerateDemand,
    /// Demand decreases with price, but so slowly that the vertex of the profit
    /// parabola overflows; the better of the two interval bounds was chosen
    UnrepresentableVertex,
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DegenerateDemand => {
                write!(f, "demand does not decrease with price; using the best bound")
            }
            Self::UnrepresentableVertex => {
                write!(f, "the unconstrained optimum overflows; using the best bound")
            }
        }
    }
}

/// The symbolic derivation of the optimal price, with numbers substituted.
///
/// The plain strings use unicode (π, ², ·), the `*_latex` strings render the
/// same expressions for a LaTeX engine.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema), schemars(inline))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Derivation {
    /// The profit function π(p)
    pub objective: String,
    /// The first derivative π'(p)
    pub d1: String,
    /// The second derivative π''(p)
    pub d2: String,
    /// The unconstrained optimum p*
    pub p_star_formula: String,
    /// LaTeX rendering of `objective`
    pub objective_latex: String,
    /// LaTeX rendering of `d1`
    pub d1_latex: String,
    /// LaTeX rendering of `d2`
    pub d2_latex: String,
    /// LaTeX rendering of `p_star_formula`
    pub p_star_formula_latex: String,
}
