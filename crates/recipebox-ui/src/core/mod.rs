//! Core, DOM-free primitives shared by every page.
pub mod config;
pub mod ids;
pub mod nav;
pub mod report;
pub mod routes;
