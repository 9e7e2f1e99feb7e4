pub mod domain;
pub mod factory;
pub mod open_library;
pub mod static_resolver;
