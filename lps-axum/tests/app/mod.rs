mod application;
pub use application::{FailingOptimizer, TestApp};
