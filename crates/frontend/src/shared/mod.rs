pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod http;
pub mod icons;
pub mod list_view;
pub mod modal;
pub mod notify;
pub mod number_format;
pub mod page_frame;
pub mod page_standard;
