pub mod attendance;
pub mod clock;
pub mod logic;
pub mod provider;
pub mod rating;
pub mod screen;
pub mod session;
