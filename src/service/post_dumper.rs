use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Local};

use crate::helpers::string_helpers;
use crate::helpers::time_helpers::{Clock, format_file_timestamp};
use crate::model::data::chan::{PagePosts, PageRange, ThreadDescriptor};
use crate::model::data::config::DumpConfig;
use crate::model::imageboards::base_imageboard::Imageboard;
use crate::service::page_fetcher::PageFetcher;
use crate::service::post_extractor;
use crate::service::post_writer;

type ImageboardSynced = Arc<dyn Imageboard + Sync + Send>;
type PageFetcherSynced = Arc<dyn PageFetcher + Sync + Send>;
type ClockSynced = Arc<dyn Clock + Sync + Send>;

pub struct PostDumper {
    dump_config: DumpConfig,
    imageboard: ImageboardSynced,
    page_fetcher: PageFetcherSynced,
    clock: ClockSynced
}

impl PostDumper {
    pub fn new(
        dump_config: DumpConfig,
        imageboard: ImageboardSynced,
        page_fetcher: PageFetcherSynced,
        clock: ClockSynced
    ) -> PostDumper {
        return PostDumper { dump_config, imageboard, page_fetcher, clock };
    }

    /// Runs the single poster pipeline for every (page range, poster id) pair. Pairs are formed
    /// by position, entries past the end of the shorter list are ignored.
    pub async fn dump_posts_multi_users(
        &self,
        thread_reference: &str,
        page_ranges: &[PageRange],
        poster_ids: &[String]
    ) -> anyhow::Result<Vec<PathBuf>> {
        if page_ranges.len() != poster_ids.len() {
            debug!(
                "dump_posts_multi_users() page_ranges ({}) and poster_ids ({}) differ in length, \
                extra entries are ignored",
                page_ranges.len(),
                poster_ids.len()
            );
        }

        let mut written_files = Vec::<PathBuf>::with_capacity(poster_ids.len());

        for (page_range, poster_id) in page_ranges.iter().zip(poster_ids.iter()) {
            let written_file = self.dump_single_user(thread_reference, *page_range, poster_id).await?;
            if let Some(written_file) = written_file {
                written_files.push(written_file);
            }
        }

        return Ok(written_files);
    }

    /// `Ok(None)` when `thread_reference` is not a recognized thread reference, nothing is
    /// fetched or written in that case.
    pub async fn dump_single_user(
        &self,
        thread_reference: &str,
        page_range: PageRange,
        poster_id: &str
    ) -> anyhow::Result<Option<PathBuf>> {
        let thread_descriptor = self.imageboard.thread_reference_to_descriptor(thread_reference);
        if thread_descriptor.is_none() {
            if self.imageboard.url_matches(thread_reference) {
                error!(
                    "dump_single_user() \'{}\' is a {} url but not a thread url without page",
                    thread_reference,
                    self.imageboard.name()
                );
            }

            error!(
                "dump_single_user() Input \'{}\' does not match any expected format",
                thread_reference
            );
            return Ok(None);
        }

        let thread_descriptor = thread_descriptor.unwrap();
        info!("dump_single_user({}) fetching posts of {}...", thread_descriptor, poster_id);

        let output_file = self.dump_user_posts(&thread_descriptor, page_range, poster_id).await?;

        info!("dump_single_user({}) done, poster: {}", thread_descriptor, poster_id);
        return Ok(Some(output_file));
    }

    pub async fn dump_user_posts(
        &self,
        thread_descriptor: &ThreadDescriptor,
        page_range: PageRange,
        poster_id: &str
    ) -> anyhow::Result<PathBuf> {
        let file_name = output_file_name(thread_descriptor, poster_id, &self.clock.now());
        let output_file = self.dump_config.output_directory.join(file_name);

        info!(
            "dump_user_posts({}) poster: {}, pages: {}, output: \'{}\'",
            thread_descriptor,
            poster_id,
            page_range,
            output_file.display()
        );

        let pages = page_range.pages().collect::<Vec<u32>>();
        let chunk_size = self.dump_config.max_concurrent_fetches.max(1);
        let post_parser = self.imageboard.post_parser();

        for pages_chunk in pages.chunks(chunk_size) {
            let page_fetcher = &self.page_fetcher;

            let fetches = pages_chunk.iter()
                .map(|page| {
                    let page_url = thread_descriptor.page_url(*page);
                    async move { page_fetcher.fetch_page(&page_url).await }
                })
                .collect::<Vec<_>>();

            // join_all keeps the input order, so pages are written in page order
            let page_htmls = futures::future::join_all(fetches).await;

            for (page, page_html) in pages_chunk.iter().zip(page_htmls.into_iter()) {
                let page_posts = match page_html {
                    Some(page_html) => {
                        post_extractor::extract_user_posts(post_parser, &page_html, poster_id, *page)
                    }
                    None => PagePosts::empty(*page, poster_id)
                };

                info!(
                    "dump_user_posts({}) page {} processed, found {} posts",
                    thread_descriptor,
                    page,
                    page_posts.posts.len()
                );

                post_writer::append_page_posts(&output_file, &page_posts).await?;
            }
        }

        return Ok(output_file);
    }
}

/// `No<thread_no>_<poster_id>_posts_<YYYYMMDDHHMMSS>.txt`, the thread number being the last path
/// segment of the thread's base url.
pub fn output_file_name(
    thread_descriptor: &ThreadDescriptor,
    poster_id: &str,
    now: &DateTime<Local>
) -> String {
    let thread_number = string_helpers::last_path_segment(&thread_descriptor.base_url())
        .unwrap_or_else(|| thread_descriptor.thread_no.to_string());

    return format!(
        "No{}_{}_posts_{}.txt",
        thread_number,
        poster_id,
        format_file_timestamp(now)
    );
}

#[test]
fn test_output_file_name() {
    use chrono::TimeZone;

    let thread_descriptor = ThreadDescriptor::new("www.nmbxd1.com".to_string(), 60184882);
    let now = Local.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap();

    assert_eq!(
        "No60184882_fyBPEP5_posts_20240506070809.txt",
        output_file_name(&thread_descriptor, "fyBPEP5", &now)
    );
}
