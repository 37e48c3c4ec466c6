#![warn(missing_docs)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

/// Core domain models for the pricing service.
///
/// This module contains the fundamental data structures: observed samples,
/// the linear demand model, the cost context of a pricing decision, and the
/// outcomes of fitting and optimizing.
///
/// The models are primarily data structures with validation and minimal
/// business logic, following the principles of the hexagonal architecture
/// to separate domain entities from the algorithms that process them.
pub mod models;

/// Interface traits for the pricing service.
///
/// This module contains the "ports" in the hexagonal architecture pattern.
///
/// These traits define the contract between the domain and the solver
/// implementations (and the adapters which call them), without specifying
/// the numerical approach taken.
pub mod ports;
