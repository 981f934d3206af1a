pub mod product_card;
pub mod product_grid;

pub use product_card::ProductCard;
pub use product_grid::ProductGrid;
