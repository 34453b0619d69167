#[cfg(test)]
mod tests {
    use std::net::SocketAddr;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use crate::service::page_fetcher::{HttpPageFetcher, PageFetcher};

    const PAGE_BODY: &str = "<html>ok</html>";

    fn raw_response(request_head: &str) -> String {
        let (status_line, body) = if request_head.starts_with("GET /ok ") {
            ("HTTP/1.1 200 OK", PAGE_BODY)
        } else if request_head.starts_with("GET /empty ") {
            ("HTTP/1.1 204 No Content", "")
        } else {
            ("HTTP/1.1 404 Not Found", "not found")
        };

        return format!(
            "{}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
    }

    async fn start_page_server() -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let local_addr = listener.local_addr().unwrap();

        tokio::task::spawn(async move {
            loop {
                let (mut stream, _) = listener.accept().await.unwrap();

                tokio::task::spawn(async move {
                    let mut request = Vec::<u8>::with_capacity(1024);
                    let mut buffer = [0u8; 1024];

                    loop {
                        let read = stream.read(&mut buffer).await.unwrap();
                        if read == 0 {
                            break;
                        }

                        request.extend_from_slice(&buffer[..read]);
                        if request.windows(4).any(|window| window == b"\r\n\r\n") {
                            break;
                        }
                    }

                    let request_head = String::from_utf8_lossy(&request).to_string();
                    let response = raw_response(&request_head);

                    stream.write_all(response.as_bytes()).await.unwrap();
                    stream.shutdown().await.unwrap();
                });
            }
        });

        return local_addr;
    }

    #[tokio::test]
    async fn test_fetch_page_success_returns_body() {
        let local_addr = start_page_server().await;
        let page_fetcher = HttpPageFetcher::new();

        let page_html = page_fetcher.fetch_page(&format!("http://{}/ok", local_addr)).await;
        assert_eq!(Some(PAGE_BODY.to_string()), page_html);
    }

    #[tokio::test]
    async fn test_fetch_page_non_success_status_returns_none() {
        let local_addr = start_page_server().await;
        let page_fetcher = HttpPageFetcher::new();

        assert_eq!(None, page_fetcher.fetch_page(&format!("http://{}/missing", local_addr)).await);
        assert_eq!(None, page_fetcher.fetch_page(&format!("http://{}/empty", local_addr)).await);
    }

    #[tokio::test]
    async fn test_fetch_page_connection_refused_returns_none() {
        let local_addr = {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            listener.local_addr().unwrap()
        };

        let page_fetcher = HttpPageFetcher::new();

        assert_eq!(None, page_fetcher.fetch_page(&format!("http://{}/ok", local_addr)).await);
    }
}
