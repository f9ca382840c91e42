pub mod cli;
pub mod context;

pub use context::AppContext;
