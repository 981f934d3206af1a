pub mod aggregate;

pub use aggregate::{Banner, BannerId};
