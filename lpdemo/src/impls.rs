//! The concrete application served by the demo.
//!
//! The fitter is always ordinary least squares; the optimizer backend is
//! chosen by configuration at startup.

use lps_core::{
    models::{CostContext, DemandModel, OptimizationResult},
    ports::{Application, Optimizer},
};
use lps_solver::{
    OlsFitter, Settings,
    clarabel::{ClarabelError, ClarabelOptimizer},
    closed_form::ClosedFormOptimizer,
};
use serde::{Deserialize, Serialize};

/// The available optimizer implementations
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Backend {
    /// Clip the vertex of the profit parabola into the interval
    #[default]
    ClosedForm,
    /// Solve the box-constrained program with Clarabel
    Clarabel,
}

/// Configuration of the optimizer
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SolverConfig {
    /// Which optimizer to use
    #[serde(default)]
    pub backend: Backend,

    /// Decimals used when rendering derivations
    #[serde(default = "default_precision")]
    pub precision: usize,
}

fn default_precision() -> usize {
    lps_solver::DEFAULT_PRECISION
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            precision: default_precision(),
        }
    }
}

/// The configured optimizer
#[derive(Clone, Debug)]
pub enum DemoOptimizer {
    /// See [`ClosedFormOptimizer`]
    ClosedForm(ClosedFormOptimizer),
    /// See [`ClarabelOptimizer`]
    Clarabel(ClarabelOptimizer),
}

impl From<&SolverConfig> for DemoOptimizer {
    fn from(config: &SolverConfig) -> Self {
        let settings = Settings {
            precision: config.precision,
        };
        match config.backend {
            Backend::ClosedForm => Self::ClosedForm(ClosedFormOptimizer::new(settings)),
            Backend::Clarabel => Self::Clarabel(ClarabelOptimizer::new(settings)),
        }
    }
}

impl Optimizer for DemoOptimizer {
    // the closed form only fails on overflow, which the numerical backend also reports
    type Error = ClarabelError;

    fn optimize(
        &self,
        demand: &DemandModel,
        cost: &CostContext,
    ) -> Result<OptimizationResult, Self::Error> {
        match self {
            Self::ClosedForm(inner) => Ok(inner.optimize(demand, cost)?),
            Self::Clarabel(inner) => inner.optimize(demand, cost),
        }
    }
}

/// Main application implementation combining all system components.
///
/// # Examples
///
/// ```no_run
/// use lpdemo::impls::{DemoApp, SolverConfig};
/// use lps_axum::{config::AxumConfig, start_server};
///
/// let app = DemoApp::new(&SolverConfig::default());
/// tokio_test::block_on(start_server(AxumConfig::default(), app)).unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct DemoApp {
    /// Ordinary least squares regression
    pub fitter: OlsFitter,
    /// The configured optimizer
    pub optimizer: DemoOptimizer,
}

impl DemoApp {
    /// Assemble the application from its configuration
    pub fn new(config: &SolverConfig) -> Self {
        Self {
            fitter: OlsFitter,
            optimizer: DemoOptimizer::from(config),
        }
    }
}

impl Application for DemoApp {
    type Fitter = OlsFitter;
    type Optimizer = DemoOptimizer;

    fn fitter(&self) -> &Self::Fitter {
        &self.fitter
    }

    fn optimizer(&self) -> &Self::Optimizer {
        &self.optimizer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> (DemandModel, CostContext) {
        (
            DemandModel::new(120.0, 2.0).unwrap(),
            CostContext::new(10.0, 50.0, 0.0, 100.0).unwrap(),
        )
    }

    #[test]
    fn test_backends_agree() {
        let (demand, cost) = scenario();

        let closed_form = DemoApp::new(&SolverConfig::default());
        let clarabel = DemoApp::new(&SolverConfig {
            backend: Backend::Clarabel,
            ..Default::default()
        });

        let a = closed_form.optimizer().optimize(&demand, &cost).unwrap();
        let b = clarabel.optimizer().optimize(&demand, &cost).unwrap();
        assert_eq!(a.p_opt, 35.0);
        assert_eq!(a.p_opt, b.p_opt);
        assert_eq!(a.used_boundary, b.used_boundary);
    }

    #[test]
    fn test_backends_report_overflow_alike() {
        let demand = DemandModel::new(1e308, 1.0).unwrap();
        let cost = CostContext::new(0.0, 0.0, 5e307, 5e307).unwrap();

        for backend in [Backend::ClosedForm, Backend::Clarabel] {
            let app = DemoApp::new(&SolverConfig {
                backend,
                ..Default::default()
            });
            let err = app.optimizer().optimize(&demand, &cost).unwrap_err();
            assert_eq!(err.to_string(), "the revenue at the optimal price overflows");
        }
    }

    #[test]
    fn test_precision_reaches_derivation() {
        let (demand, cost) = scenario();
        let app = DemoApp::new(&SolverConfig {
            backend: Backend::ClosedForm,
            precision: 1,
        });

        let outcome = app.optimizer().optimize(&demand, &cost).unwrap();
        assert_eq!(
            outcome.derivation.p_star_formula,
            "p* = (120.0 + 2.0·10.0) / (2·2.0) = 35.0"
        );
    }
}
