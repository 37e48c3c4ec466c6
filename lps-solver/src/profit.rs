use crate::derivation;
use lps_core::models::{CostContext, DemandModel, OptimizationResult, Warning};

/// The profit function π(p) = (p − c)·(α − β·p) − F of a pricing problem.
///
/// Expanded, π(p) = −β·p² + (α + β·c)·p − (α·c + F), a downward-opening parabola
/// when β > 0. Both the optimizers and the derivation renderer read the vertex
/// from here, so the displayed formula cannot drift from the computed price.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProfitCurve {
    demand: DemandModel,
    cost: CostContext,
}

/// The vertex p* = numerator / denominator = (α + β·c) / (2β) of a concave profit curve
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    /// α + β·c
    pub numerator: f64,
    /// 2β, strictly positive
    pub denominator: f64,
}

impl Vertex {
    /// The price at the vertex
    pub fn price(&self) -> f64 {
        self.numerator / self.denominator
    }
}

impl ProfitCurve {
    /// Build the profit curve for a demand model and cost context
    pub fn new(demand: &DemandModel, cost: &CostContext) -> Self {
        Self {
            demand: *demand,
            cost: *cost,
        }
    }

    /// The underlying demand model
    pub fn demand(&self) -> &DemandModel {
        &self.demand
    }

    /// The underlying costs and price interval
    pub fn cost(&self) -> &CostContext {
        &self.cost
    }

    /// The coefficients `[a, b, c]` of π(p) = a·p² + b·p + c
    pub fn coefficients(&self) -> [f64; 3] {
        let (alpha, beta) = (self.demand.alpha(), self.demand.beta());
        let (c, f) = (self.cost.unit_cost(), self.cost.fixed_cost());
        [-beta, alpha + beta * c, -(alpha * c + f)]
    }

    /// The unconstrained maximizer, or the reason there is none.
    ///
    /// It only exists for downward-sloping demand, and only when the vertex and
    /// both of its terms are finite. Every caller decides between clipping the
    /// vertex and the best-bound fallback through this one method.
    pub fn vertex(&self) -> Result<Vertex, Warning> {
        if !self.demand.is_downward_sloping() {
            return Err(Warning::DegenerateDemand);
        }

        let [a, b, _] = self.coefficients();
        let vertex = Vertex {
            numerator: b,
            denominator: -2.0 * a,
        };
        if vertex.numerator.is_finite()
            && vertex.denominator.is_finite()
            && vertex.price().is_finite()
        {
            Ok(vertex)
        } else {
            Err(Warning::UnrepresentableVertex)
        }
    }

    /// The quantity sold at `price`, never negative
    pub fn quantity_at(&self, price: f64) -> f64 {
        self.demand.quantity_at(price)
    }

    /// Profit at `price`, using the floored quantity
    pub fn profit_at(&self, price: f64) -> f64 {
        (price - self.cost.unit_cost()) * self.quantity_at(price) - self.cost.fixed_cost()
    }

    /// The more profitable end of the price interval (the lower one on ties)
    pub fn best_bound(&self) -> f64 {
        let (min, max) = self.cost.interval();
        if self.profit_at(max) > self.profit_at(min) {
            max
        } else {
            min
        }
    }

    /// Evaluate the solution at a chosen price.
    ///
    /// Computes the quantity-dependent metrics from the floored quantity and
    /// attaches the derivation of the unconstrained optimum, rendered with
    /// `precision` decimals. Fails if any metric overflows.
    pub fn solution(
        &self,
        price: f64,
        used_boundary: bool,
        precision: usize,
    ) -> Result<OptimizationResult, Overflow> {
        let c = self.cost.unit_cost();
        let quantity = self.quantity_at(price);
        let revenue = price * quantity;
        let profit = (price - c) * quantity - self.cost.fixed_cost();

        let margin = if price != 0.0 {
            Some((price - c) / price)
        } else {
            None
        };
        let elasticity = if quantity > 0.0 {
            Some(self.demand.beta() * price / quantity)
        } else {
            None
        };

        for (metric, value) in [
            ("quantity", Some(quantity)),
            ("revenue", Some(revenue)),
            ("profit", Some(profit)),
            ("margin", margin),
            ("elasticity", elasticity),
        ] {
            if value.is_some_and(|value| !value.is_finite()) {
                return Err(Overflow(metric));
            }
        }

        let vertex = self.vertex();

        Ok(OptimizationResult {
            p_opt: price,
            q_opt: quantity,
            revenue,
            profit_opt: profit,
            margin,
            elasticity,
            used_boundary,
            p_star: vertex.as_ref().ok().map(Vertex::price),
            warnings: vertex.err().into_iter().collect(),
            derivation: derivation::render(self, precision),
        })
    }
}

/// A metric of the solution is too large to represent as a finite number
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("the {0} at the optimal price overflows")]
pub struct Overflow(pub &'static str);
