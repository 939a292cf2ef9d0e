pub mod api_utils;
pub mod components;
pub mod notify;
pub mod number_format;
pub mod page_frame;
pub mod page_standard;
