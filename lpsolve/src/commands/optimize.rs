use clap::ValueEnum;
use lps_core::{
    models::{CostContext, DemandModel, OptimizationResult},
    ports::Optimizer as _,
};
use lps_solver::{Settings, clarabel::ClarabelOptimizer, closed_form::ClosedFormOptimizer};

// This explicitly articulates the available optimizers for the `optimize` subcommand
#[derive(Clone, Copy, ValueEnum)]
pub enum OptimizerLib {
    ClosedForm,
    Clarabel,
}

// Conveniently, we can use the same enum to handle the particulars of calling into
// the various optimizer implementations
impl OptimizerLib {
    pub fn optimize(
        &self,
        demand: &DemandModel,
        cost: &CostContext,
        settings: Settings,
    ) -> anyhow::Result<OptimizationResult> {
        Ok(match self {
            OptimizerLib::ClosedForm => ClosedFormOptimizer::new(settings).optimize(demand, cost)?,
            OptimizerLib::Clarabel => ClarabelOptimizer::new(settings).optimize(demand, cost)?,
        })
    }
}
