pub mod budget;
pub mod commands;
pub mod error;
pub mod model;
pub mod output;
pub mod plan;
pub mod seed;
pub mod store;
