pub mod mountain;
pub mod planner;
pub mod trip;
pub mod user;
