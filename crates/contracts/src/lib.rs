//! Shared types and content rules of the pharmacy storefront.
//!
//! `domain` holds the catalog records as the backend sends them,
//! `shared::fetch_boundary` decodes them, and `shared::placement` decides
//! what is shown and in which order.

pub mod domain;
pub mod enums;
pub mod shared;
