#![warn(missing_docs)]
//! Reference implementations of the `lps-core` ports.
//!
//! - [`OlsFitter`] regresses quantity on price by ordinary least squares.
//! - [`ProfitCurve`] is the profit parabola π(p) = (p − c)(α − βp) − F and the
//!   single source of truth for its vertex.
//! - [`closed_form::ClosedFormOptimizer`] solves for the optimal price exactly.
//! - [`clarabel::ClarabelOptimizer`] (feature `clarabel`) solves the same
//!   box-constrained program with an interior point method.
//! - [`derivation`] renders the symbolic derivation attached to every solution.

mod ols;
pub use ols::OlsFitter;

mod profit;
pub use profit::{Overflow, ProfitCurve, Vertex};

pub mod derivation;

/**
 * These are implementations of the pricing optimizer.
 */
mod impls;
pub use impls::*;

/// The number of decimals used when rendering derivations, unless configured otherwise
pub const DEFAULT_PRECISION: usize = 3;
