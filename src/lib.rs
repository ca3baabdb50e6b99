pub mod error;
pub mod fetch;
pub mod infra;
pub mod model;
pub mod parser;
pub mod risk;
pub mod services;
pub mod summary;
pub mod tools;
pub mod validate;
