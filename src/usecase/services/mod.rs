pub mod edit_service;
pub mod load_service;
pub mod query_service;
pub mod table_controller;
