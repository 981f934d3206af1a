pub mod aggregate;

pub use aggregate::{Product, ProductImage, SkuId};
