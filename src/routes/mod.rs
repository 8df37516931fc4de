pub mod account;
pub mod chat;
pub mod health;
pub mod mountain;
pub mod planner;
