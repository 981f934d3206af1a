pub mod page;
pub mod section;

pub use page::CategoryPage;
pub use section::CategorySection;
