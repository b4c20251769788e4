pub mod models;
pub mod repository;

pub use models::{Badge, PlayerProfile};
pub use repository::{InMemoryProfileRepository, ProfileRepository};
