pub mod fault_source;
pub mod project_store;
