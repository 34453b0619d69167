pub mod base_imageboard;
pub mod nmb;
pub mod parser;
