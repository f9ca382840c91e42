// Application Commands (state-mutating operations)

pub mod device_commands;
pub mod interest_commands;
