use std::env;
use std::str::FromStr;
use std::sync::Arc;

use crate::helpers::logger::init_logger;
use crate::helpers::time_helpers::SystemClock;
use crate::model::data::chan::PageRange;
use crate::model::data::config::DumpConfig;
use crate::model::imageboards::nmb::Nmb;
use crate::service::page_fetcher::HttpPageFetcher;
use crate::service::post_dumper::PostDumper;

#[macro_use]
extern crate log;

mod constants;
mod helpers;
mod model;
mod service;

#[cfg(test)]
mod tests;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let is_dev_build = env::var("DEVELOPMENT_BUILD")
        .ok()
        .and_then(|value| i32::from_str(value.as_str()).ok())
        .unwrap_or(0) == 1;

    init_logger(is_dev_build);

    info!("main() initializing");

    let dump_config = DumpConfig::from_env()?;
    info!("main() config: {}", dump_config);

    let post_dumper = PostDumper::new(
        dump_config,
        Arc::new(Nmb::new()),
        Arc::new(HttpPageFetcher::new()),
        Arc::new(SystemClock {})
    );

    let page_ranges = constants::DEFAULT_PAGE_RANGES.iter()
        .map(|(start, end)| PageRange::new(*start, *end))
        .collect::<Vec<PageRange>>();

    let poster_ids = constants::DEFAULT_POSTER_IDS.iter()
        .map(|poster_id| poster_id.to_string())
        .collect::<Vec<String>>();

    post_dumper.dump_posts_multi_users(
        constants::DEFAULT_THREAD_REFERENCE,
        &page_ranges,
        &poster_ids
    ).await?;

    info!("main() all done");
    return Ok(());
}
