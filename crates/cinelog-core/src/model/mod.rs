//! Movie catalog data model.

pub mod ids;
pub mod movie;

pub use ids::MovieId;
pub use movie::Movie;
