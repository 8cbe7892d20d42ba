pub mod simulated_store;
pub mod thread_rng_fault_source;
