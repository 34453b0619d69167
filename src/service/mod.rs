pub mod page_fetcher;
pub mod post_dumper;
pub mod post_extractor;
pub mod post_writer;
