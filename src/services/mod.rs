pub mod catalog_service;
pub use catalog_service::{CatalogError, CatalogService};

pub mod catalog_service_impl;
pub use catalog_service_impl::SeaOrmCatalogService;

pub mod favorite_service;
pub use favorite_service::{FavoriteError, FavoriteService};

pub mod favorite_service_impl;
pub use favorite_service_impl::SeaOrmFavoriteService;
