pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod publisher;
pub mod resolver;
