pub mod nmb_post_parser;
pub mod post_parser;
