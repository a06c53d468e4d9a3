//! Common types and traits for all aggregates

pub mod aggregate_id;
pub mod event_store;

// Re-exports
pub use aggregate_id::AggregateId;
pub use event_store::EventStore;
