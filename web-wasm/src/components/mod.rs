pub mod header;
pub mod camera_view;
pub mod nutrition_panel;
pub mod capture_button;
pub mod cta_banner;
