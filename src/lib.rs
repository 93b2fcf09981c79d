pub mod commands;
pub mod error;
pub mod gate;
pub mod input;
pub mod manager;
pub mod model;
pub mod output;
pub mod store;
