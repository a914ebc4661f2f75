//! Core building blocks: layout arithmetic, resampling, canvas compositing and
//! the letterbox transform. These are internal primitives consumed by the
//! high-level `api` module.
pub mod params;
pub mod processing;
