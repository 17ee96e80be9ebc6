//! Business logic services for the application layer.

pub mod averages_service;
pub mod group_links;

pub use averages_service::ClickAveragesService;
pub use group_links::fetch_all_links;
