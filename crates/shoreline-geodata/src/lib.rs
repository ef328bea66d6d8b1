//! Shoreline Geodata: coastline file loading.
//!
//! Reads Natural Earth style GeoJSON coastline files into the in-memory
//! dataset the search runs over.

pub mod geojson;
pub mod geojson_source;
