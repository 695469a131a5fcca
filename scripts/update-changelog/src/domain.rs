pub mod bullet;
pub mod changelog;
pub mod collector;
pub mod config;
pub mod models;
