//! gsmview - Render a GSM base-station coverage sector on an interactive web map

pub mod basemap;
pub mod config;
pub mod domain;
pub mod geometry;
pub mod render;
pub mod session;
