pub mod aggregate;
pub mod dto;
pub mod error;
pub mod filter;
pub mod loader;
pub mod selection;

pub use aggregate::{Satellite, SatelliteField};
pub use error::{LoadError, SelectionError, StorageError};
