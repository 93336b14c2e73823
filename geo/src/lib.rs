//! Pure cartographic and vector math for the orrery formation engine.
//! No engine or renderer dependencies; everything here is a total function
//! of its arguments.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::dbg_macro)]

pub mod graticule;
pub mod math;
pub mod projection;

pub use projection::{
    compromise_projection, sphere_from_lat_lon, sphere_to_projection_interpolation, PlaneConfig,
};
