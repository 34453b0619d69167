use async_trait::async_trait;

#[async_trait]
pub trait PageFetcher {
    /// Body of the page, or `None` when the page could not be retrieved.
    async fn fetch_page(&self, page_url: &str) -> Option<String>;
}

pub struct HttpPageFetcher {
    http_client: reqwest::Client
}

impl HttpPageFetcher {
    pub fn new() -> HttpPageFetcher {
        return HttpPageFetcher { http_client: reqwest::Client::new() };
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch_page(&self, page_url: &str) -> Option<String> {
        debug!("fetch_page({}) sending GET request", page_url);

        let response = self.http_client.get(page_url).send().await;
        if response.is_err() {
            error!(
                "fetch_page({}) Failed to retrieve page, error: {}",
                page_url,
                response.err().unwrap()
            );
            return None;
        }

        let response = response.unwrap();

        let status_code = response.status().as_u16();
        if status_code != 200 {
            error!("fetch_page({}) Failed to retrieve page, status_code: {}", page_url, status_code);
            return None;
        }

        let response_text = response.text().await;
        if response_text.is_err() {
            error!(
                "fetch_page({}) Failed to extract text from response, error: {}",
                page_url,
                response_text.err().unwrap()
            );
            return None;
        }

        let response_text = response_text.unwrap();
        debug!("fetch_page({}) success, body_len: {}", page_url, response_text.len());

        return Some(response_text);
    }
}
