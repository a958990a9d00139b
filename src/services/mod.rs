pub mod api_ref;
pub mod collate;
pub mod index;
pub mod url_template;

pub mod catalog_service;
pub use catalog_service::{CatalogError, CatalogService};

pub mod catalog_service_impl;
pub use catalog_service_impl::DefaultCatalogService;
