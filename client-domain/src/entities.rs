// Domain entities

pub mod config;
pub mod event;
pub mod interest;

pub use config::*;
pub use event::*;
pub use interest::*;
