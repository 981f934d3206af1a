pub mod error;
pub mod fetch_boundary;
pub mod placement;

pub use error::SchemaError;
