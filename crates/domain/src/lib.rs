//! Domain layer for the UC store bot
//!
//! Contains the bundle catalog, the static conversation screens, inline keyboard
//! value objects and the inbound update union. Nothing here performs I/O.

pub mod commands;
pub mod entities;
pub mod errors;
pub mod screens;
pub mod value_objects;

pub use commands::{CallbackAction, MenuCommand, actions};
pub use entities::*;
pub use errors::DomainError;
pub use screens::{Screen, ScreenContent};
pub use value_objects::*;
