pub mod models;
pub mod repository;
pub mod service;

mod errors;

pub use errors::HistoryError;
pub use models::{ExpansionFlags, GameHistoryEntry, WonderAssignment, WonderSide};
pub use repository::{HistoryRepository, InMemoryHistoryRepository};
pub use service::{GameRecorder, GameSetup};
