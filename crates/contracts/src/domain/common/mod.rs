//! Common types shared by all storefront aggregates

pub mod aggregate_id;
pub mod rank;
pub mod records;

// Re-exports
pub use aggregate_id::AggregateId;
pub use rank::effective_rank;
