pub mod api_utils;
pub mod browser_storage;
pub mod components;
pub mod config;
pub mod http;
pub mod icons;
pub mod list_utils;
pub mod list_view;
pub mod modal;
pub mod page_frame;
pub mod page_standard;
