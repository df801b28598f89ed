//! Test fixtures for geo-polyline.
//!
//! Provides known encode/decode vectors along real Helsinki streets.

pub mod helsinki_routes;

pub use helsinki_routes::*;
