//! Application service layer - config, validation, comparison, export

pub mod app;
pub mod config;
pub mod constants;
pub mod export;
pub mod repository;
pub mod validation;
