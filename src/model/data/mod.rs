pub mod chan;
pub mod config;
