pub mod attendance;
pub mod counters;
pub mod dashboard;
pub mod pod;
pub mod rating;
