// Client Application Layer

pub mod commands;
pub mod error;
pub mod metrics;
pub mod ops;
pub mod queries;
pub mod state;

pub use error::ClientError;
pub use metrics::Metrics;
pub use state::ClientState;

#[cfg(test)]
pub(crate) mod testing;
