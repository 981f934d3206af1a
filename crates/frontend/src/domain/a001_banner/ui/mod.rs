pub mod banner_group;
pub mod banner_image;
pub mod main_slider;
pub mod middle_banners;

pub use banner_group::BannerGroupView;
pub use main_slider::MainSlider;
pub use middle_banners::MiddleBanners;
