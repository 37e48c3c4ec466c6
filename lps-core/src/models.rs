mod cost;
mod demand;
mod fit;
mod outcome;
mod response;
mod sample;

pub use cost::{CostContext, CostContextError};
pub use demand::{DemandModel, DemandModelError};
pub use fit::{FitError, InsufficientData, Regression};
pub use outcome::{Derivation, OptimizationResult, Warning};
pub use response::{
    ErrorResponse, FitRequest, FitResponse, OptimizeRequest, OptimizeRequestError,
    OptimizeResponse,
};
pub use sample::{Sample, SampleDto, SampleError};
