// Application Queries (read-side operations)

pub mod event_queries;
pub mod interest_queries;
