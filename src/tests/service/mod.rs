pub mod page_fetcher_tests;
pub mod post_extractor_tests;
pub mod post_writer_tests;
