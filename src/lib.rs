pub mod api;
pub mod catalog;
pub mod config;
pub mod data;
pub mod error;
pub mod forest;
pub mod input;
pub mod predictor;
pub mod users;
