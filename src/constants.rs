pub const NMB_HOST: &str = "www.nmbxd1.com";

pub const DEFAULT_THREAD_REFERENCE: &str = "https://www.nmbxd1.com/t/60184882";
pub const DEFAULT_PAGE_RANGES: [(u32, u32); 2] = [(1, 8), (8, 14)];
pub const DEFAULT_POSTER_IDS: [&str; 2] = ["fyBPEP5", "LhWkRsO"];

pub const DEFAULT_OUTPUT_DIRECTORY: &str = ".";
pub const DEFAULT_MAX_CONCURRENT_FETCHES: usize = 1;

pub const POST_DIVIDER_WIDTH: usize = 80;
pub const NO_POST_MARKER: &str = "No post";
