pub mod error_tests;
pub mod query_tests;
