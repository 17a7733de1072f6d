//! Application layer - Use cases and orchestration
//!
//! Turns classified webhook updates into screens and hands them to the
//! outbound messenger port. Adapters in the infrastructure layer implement
//! the ports defined here.

pub mod acknowledgment;
pub mod error;
pub mod ports;
pub mod services;

pub use acknowledgment::Acknowledgment;
pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
