pub mod api_utils;
pub mod components;
pub mod crud;
pub mod download;
pub mod graphql;
pub mod i18n;
pub mod icons;
pub mod page_frame;
pub mod page_standard;
pub mod storage;
pub mod toast;
