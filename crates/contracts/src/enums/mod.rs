pub mod banner_type;
pub mod locale;

pub use banner_type::BannerType;
pub use locale::Locale;
