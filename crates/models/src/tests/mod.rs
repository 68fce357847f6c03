/// Database-backed CRUD tests for the marketing status entity
pub mod marketing_status_tests;
