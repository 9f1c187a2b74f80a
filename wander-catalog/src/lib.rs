pub mod catalog;
pub mod package;

pub use catalog::{Catalog, CatalogError};
pub use package::{GroupCapacity, PackageCategory, Review, TripPackage};
