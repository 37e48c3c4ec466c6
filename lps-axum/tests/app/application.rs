use lps_core::{
    models::{CostContext, DemandModel, OptimizationResult},
    ports::{Application, Optimizer},
};
use lps_solver::{OlsFitter, closed_form::ClosedFormOptimizer};

#[derive(Clone, Default)]
pub struct TestApp<O = ClosedFormOptimizer> {
    pub fitter: OlsFitter,
    pub optimizer: O,
}

impl TestApp {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<O> TestApp<O> {
    pub fn with_optimizer(optimizer: O) -> Self {
        Self {
            fitter: OlsFitter,
            optimizer,
        }
    }
}

impl<O: Optimizer> Application for TestApp<O> {
    type Fitter = OlsFitter;
    type Optimizer = O;

    fn fitter(&self) -> &Self::Fitter {
        &self.fitter
    }

    fn optimizer(&self) -> &Self::Optimizer {
        &self.optimizer
    }
}

/// An optimizer whose backend is always unavailable
#[derive(Clone, Default)]
pub struct FailingOptimizer;

impl Optimizer for FailingOptimizer {
    type Error = std::io::Error;

    fn optimize(
        &self,
        _demand: &DemandModel,
        _cost: &CostContext,
    ) -> Result<OptimizationResult, Self::Error> {
        Err(std::io::Error::other("backend unavailable"))
    }
}
