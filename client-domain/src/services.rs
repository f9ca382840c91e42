// Domain services

pub mod status;

pub use status::*;
