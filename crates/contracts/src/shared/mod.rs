pub mod actions;
pub mod config;
pub mod display;
pub mod forms;
pub mod graphql;
pub mod i18n;
pub mod metadata;
pub mod routes;
