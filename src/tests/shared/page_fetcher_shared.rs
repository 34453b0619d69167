use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::service::page_fetcher::PageFetcher;

/// Serves pages from memory. Urls without a page behave like a failed request.
pub struct FakePageFetcher {
    pages: HashMap<String, String>,
    requested_urls: Mutex<Vec<String>>
}

impl FakePageFetcher {
    pub fn new() -> FakePageFetcher {
        return FakePageFetcher {
            pages: HashMap::new(),
            requested_urls: Mutex::new(vec![])
        };
    }

    pub fn with_page(mut self, page_url: &str, page_html: String) -> FakePageFetcher {
        self.pages.insert(page_url.to_string(), page_html);
        return self;
    }

    pub fn requested_urls(&self) -> Vec<String> {
        return self.requested_urls.lock().unwrap().clone();
    }
}

#[async_trait]
impl PageFetcher for FakePageFetcher {
    async fn fetch_page(&self, page_url: &str) -> Option<String> {
        self.requested_urls.lock().unwrap().push(page_url.to_string());
        return self.pages.get(page_url).cloned();
    }
}
