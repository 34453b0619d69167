pub mod data;
pub mod imageboards;
