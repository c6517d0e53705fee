pub mod api_service;
pub mod api_utils;
pub mod components;
pub mod config;
pub mod icons;
pub mod notifier;
pub mod page_frame;
pub mod page_standard;
