pub mod a001_banner;
pub mod a002_product;
pub mod a003_category;
