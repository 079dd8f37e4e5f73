//! Static website generation.
//!
//! Renders the catalog as a single `movies.html` page (plus a CSS
//! sidecar) from a template embedded in the binary.

pub mod generator;
pub mod template;

pub use generator::write_site;
