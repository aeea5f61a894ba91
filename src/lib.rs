pub mod cli;
pub mod clock;
pub mod config;
pub mod store;
pub mod zoom;
