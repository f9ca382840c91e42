// Long-lived Application Components

pub mod interest_hub;

pub use interest_hub::*;
