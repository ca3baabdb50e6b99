//! Concrete integrations behind the service abstractions.

pub mod neows;
