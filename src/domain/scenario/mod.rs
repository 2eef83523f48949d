pub mod catalog;
mod data;
pub mod dto;
pub mod handler;

pub use catalog::{CatalogError, ScenarioCatalog};
pub use dto::{CategoriesResponse, Scenario};
