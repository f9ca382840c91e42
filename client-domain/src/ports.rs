// Port traits (interfaces)
// Define what the client core needs from infrastructure

pub mod gateways;
pub mod notify;
pub mod stores;

pub use gateways::*;
pub use notify::*;
pub use stores::*;
