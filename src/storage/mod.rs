//! Storage implementations for the conta service

pub mod in_memory;

pub use in_memory::InMemoryContaService;
