// Service exports
pub mod matching;
pub mod memory;
pub mod providers;

pub use matching::{MatchService, MatchServiceError};
pub use memory::InMemoryPortal;
pub use providers::{JobStore, ProfileStore, StoreError};
