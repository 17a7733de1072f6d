//! Domain entities
//!
//! Nothing is persisted: bundles are compile-time constants and updates are
//! rebuilt from every inbound request.

mod bundle;
mod inbound_update;

pub use bundle::{Bundle, CATALOG, PAYMENT_PAGE_URL};
pub use inbound_update::InboundUpdate;
