pub mod app;
pub mod domain;
pub mod error;
pub mod github;
pub mod journal;
pub mod manifest;
pub mod output;
pub mod resolver;
pub mod store;
