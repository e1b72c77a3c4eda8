pub mod edit;
pub mod page;
pub mod record;
