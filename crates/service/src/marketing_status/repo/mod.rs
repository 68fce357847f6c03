//! Repository implementations.

pub mod memory;
pub mod seaorm;

pub use memory::MemoryMarketingStatusRepository;
pub use seaorm::SeaOrmMarketingStatusRepository;
