// Domain value objects

pub mod device;
pub mod event_status;

pub use device::*;
pub use event_status::*;
