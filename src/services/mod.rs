pub mod catalog_filter;
pub mod chat_service;
pub mod planner_service;
