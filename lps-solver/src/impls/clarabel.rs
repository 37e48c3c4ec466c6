use crate::{Overflow, ProfitCurve, Settings};
use clarabel::{algebra::*, solver::*};
use lps_core::{
    models::{CostContext, DemandModel, OptimizationResult},
    ports::Optimizer,
};
use tracing::{Level, event};

/// Duality gap and feasibility tolerance requested from the solver
const TOLERANCE: f64 = 1e-10;

/// Solves the box-constrained pricing program numerically with Clarabel.
///
/// The program is min β·p² − (α + β·c)·p subject to pMin ≤ p ≤ pMax, which
/// shares its maximizer with the profit function. Non-concave problems never
/// reach the solver: they take the same best-bound fallback as the closed form.
#[derive(Clone, Debug)]
pub struct ClarabelOptimizer {
    settings: Settings,
    solver: DefaultSettings<f64>,
}

impl Default for ClarabelOptimizer {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl ClarabelOptimizer {
    /// Create an optimizer with the given settings and a quiet, tight solver
    pub fn new(settings: Settings) -> Self {
        let mut solver = DefaultSettings::default();
        solver.verbose = false;
        solver.tol_gap_abs = TOLERANCE;
        solver.tol_gap_rel = TOLERANCE;
        solver.tol_feas = TOLERANCE;
        Self { settings, solver }
    }

    /// Create an optimizer with explicit Clarabel settings
    pub fn with_solver_settings(settings: Settings, solver: DefaultSettings<f64>) -> Self {
        Self { settings, solver }
    }

    /// The tolerance the solver met when it stopped with `status`
    fn accuracy(&self, status: SolverStatus) -> f64 {
        let s = &self.solver;
        if status == SolverStatus::Solved {
            s.tol_gap_abs.max(s.tol_gap_rel).max(s.tol_feas)
        } else {
            s.reduced_tol_gap_abs
                .max(s.reduced_tol_gap_rel)
                .max(s.reduced_tol_feas)
        }
    }

    /// Solve the program, returning the raw price and the accuracy it was solved to
    fn solve(&self, curve: &ProfitCurve) -> Result<(f64, f64), ClarabelError> {
        let [a, b, _] = curve.coefficients();
        let (lo, hi) = curve.cost().interval();

        // Clarabel minimizes ½xᵀPx + qᵀx, so we negate the profit
        let p_matrix = CscMatrix {
            m: 1,
            n: 1,
            colptr: vec![0, 1],
            rowval: vec![0],
            nzval: vec![-2.0 * a],
        };
        let q = vec![-b];

        // Ax + s = b with s ≥ 0: the first row is p ≤ pMax, the second -p ≤ -pMin
        let a_matrix = CscMatrix {
            m: 2,
            n: 1,
            colptr: vec![0, 2],
            rowval: vec![0, 1],
            nzval: vec![1.0, -1.0],
        };

        let bounds = vec![hi, -lo];
        let cones = vec![NonnegativeConeT(2)];

        let mut solver = DefaultSolver::new(
            &p_matrix,
            &q,
            &a_matrix,
            &bounds,
            &cones,
            self.solver.clone(),
        )
        .map_err(|err| ClarabelError::Setup(err.to_string()))?;
        solver.solve();

        let status = solver.solution.status;
        match status {
            SolverStatus::Solved | SolverStatus::AlmostSolved => {}
            status => return Err(ClarabelError::Status(status)),
        }

        match solver.solution.x.first() {
            Some(&price) if price.is_finite() => Ok((price, self.accuracy(status))),
            _ => Err(ClarabelError::NonFinite),
        }
    }
}

impl Optimizer for ClarabelOptimizer {
    type Error = ClarabelError;

    fn optimize(
        &self,
        demand: &DemandModel,
        cost: &CostContext,
    ) -> Result<OptimizationResult, Self::Error> {
        let curve = ProfitCurve::new(demand, cost);
        let (lo, hi) = cost.interval();
        let precision = self.settings.precision;

        let p_star = match curve.vertex() {
            Ok(vertex) => vertex.price(),
            Err(reason) => {
                event!(
                    Level::WARN,
                    alpha = demand.alpha(),
                    beta = demand.beta(),
                    %reason,
                    "no interior maximizer, choosing the better bound"
                );
                return Ok(curve.solution(curve.best_bound(), true, precision)?);
            }
        };

        // A single admissible price leaves nothing to solve
        if lo == hi {
            return Ok(curve.solution(lo, true, precision)?);
        }

        let (raw, accuracy) = self.solve(&curve)?;

        // The projection of the vertex is the exact optimum, which the solver need
        // only confirm. Near an active bound the iterate converges like the square
        // root of the gap.
        let exact = cost.clamp(p_star);
        let tolerance = 10.0 * accuracy.sqrt() * lo.abs().max(hi.abs()).max(1.0);

        let (price, used_boundary) = if (raw - exact).abs() <= tolerance {
            (exact, !(lo < p_star && p_star < hi))
        } else {
            event!(
                Level::WARN,
                raw,
                exact,
                tolerance,
                "solver disagrees with the projected vertex"
            );
            let price = cost.clamp(raw);
            (price, price == lo || price == hi)
        };

        event!(
            Level::DEBUG,
            raw,
            price,
            used_boundary,
            "solved with clarabel"
        );

        Ok(curve.solution(price, used_boundary, precision)?)
    }
}

/// The ways the numerical solver can fail
#[derive(Debug, thiserror::Error)]
pub enum ClarabelError {
    /// The program could not be set up
    #[error("invalid program: {0}")]
    Setup(String),
    /// The solver terminated without converging
    #[error("solver terminated with status {0:?}")]
    Status(SolverStatus),
    /// The solver reported success but produced no usable price
    #[error("solver produced a non-finite price")]
    NonFinite,
    /// A metric of the solution overflowed
    #[error(transparent)]
    Overflow(#[from] Overflow),
}
