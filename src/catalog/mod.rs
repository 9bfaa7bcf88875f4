mod gateway;
mod persistence;

pub use gateway::{CandidateQuery, CatalogGateway, MenuCatalog};
pub use persistence::{import_csv, load_catalog, save_catalog};
