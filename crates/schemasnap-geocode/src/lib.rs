//! Address-to-coordinates lookup for filling in a business's `geo` block.
//!
//! Lookups go through the [`Geocoder`] trait. [`CachedGeocoder`] wraps any
//! implementation with a normalized-address cache and a fixed-window rate
//! limit; [`Gazetteer`] is an offline implementation backed by a YAML file.

pub mod address;
pub mod cache;
pub mod coords;
pub mod error;
pub mod gazetteer;
pub mod rate_limit;
pub mod types;

pub use address::{apply_coordinates, build_address_string, normalize_address};
pub use cache::{CacheStats, CachedGeocoder};
pub use coords::{haversine_km, validate_coordinates, CoordinateCheck};
pub use error::GeocodeError;
pub use gazetteer::{Gazetteer, GazetteerEntry};
pub use rate_limit::FixedWindow;
pub use types::{Accuracy, GeocodeResult};

/// Resolves a free-form address to coordinates.
pub trait Geocoder {
    /// Look up `address`.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::NotFound`] when the address cannot be resolved;
    /// implementations may return other variants for their own failures.
    fn geocode(&self, address: &str) -> Result<GeocodeResult, GeocodeError>;
}

impl<G: Geocoder + ?Sized> Geocoder for &G {
    fn geocode(&self, address: &str) -> Result<GeocodeResult, GeocodeError> {
        (**self).geocode(address)
    }
}
