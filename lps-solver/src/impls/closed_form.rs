use crate::{Overflow, ProfitCurve, Settings};
use lps_core::{
    models::{CostContext, DemandModel, OptimizationResult},
    ports::Optimizer,
};
use tracing::{Level, event};

/// Solves for the optimal price exactly, by clipping the vertex of the profit
/// parabola into the admissible interval.
#[derive(Clone, Debug, Default)]
pub struct ClosedFormOptimizer(Settings);

impl ClosedFormOptimizer {
    /// Create an optimizer with the given settings
    pub fn new(settings: Settings) -> Self {
        Self(settings)
    }
}

impl Optimizer for ClosedFormOptimizer {
    type Error = Overflow;

    fn optimize(
        &self,
        demand: &DemandModel,
        cost: &CostContext,
    ) -> Result<OptimizationResult, Self::Error> {
        let curve = ProfitCurve::new(demand, cost);
        let (lo, hi) = cost.interval();

        let (price, used_boundary) = match curve.vertex() {
            Ok(vertex) => {
                let p_star = vertex.price();
                // a vertex sitting exactly on a bound counts as a boundary solution
                (cost.clamp(p_star), !(lo < p_star && p_star < hi))
            }
            Err(reason) => {
                event!(
                    Level::WARN,
                    alpha = demand.alpha(),
                    beta = demand.beta(),
                    %reason,
                    "no interior maximizer, choosing the better bound"
                );
                (curve.best_bound(), true)
            }
        };

        event!(Level::DEBUG, price, used_boundary, "solved in closed form");

        curve.solution(price, used_boundary, self.0.precision)
    }
}
