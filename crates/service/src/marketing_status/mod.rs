//! Marketing status module: domain type and codec, repository, service.

pub mod codec;
pub mod domain;
pub mod repo;
pub mod repository;
pub mod service;

pub use domain::MarketingStatus;
pub use repository::MarketingStatusRepository;
pub use service::MarketingStatusService;
