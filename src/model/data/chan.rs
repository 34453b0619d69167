use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteDescriptor {
    pub host: String
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadDescriptor {
    pub site_descriptor: SiteDescriptor,
    pub thread_no: u64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    pub start: u32,
    pub end: u32
}

/// A poster id / post body pair as it appears in a page, before any filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPost {
    pub poster_id: String,
    pub content: String
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPost {
    pub page: u32,
    pub index: usize,
    pub content: String
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagePosts {
    pub page: u32,
    pub poster_id: String,
    pub posts: Vec<UserPost>
}

impl Display for SiteDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.host)?;

        return Ok(());
    }
}

impl Display for ThreadDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/", self.site_descriptor)?;
        write!(f, "{}", self.thread_no)?;

        return Ok(());
    }
}

impl ThreadDescriptor {
    pub fn new(host: String, thread_no: u64) -> ThreadDescriptor {
        return ThreadDescriptor {
            site_descriptor: SiteDescriptor { host },
            thread_no
        }
    }

    pub fn host(&self) -> &String {
        return &self.site_descriptor.host;
    }

    pub fn base_url(&self) -> String {
        let mut string_builder = string_builder::Builder::new(48);

        string_builder.append("https://");
        string_builder.append(self.host().as_str());
        string_builder.append("/t/");
        string_builder.append(self.thread_no.to_string());

        return string_builder.string()
            .unwrap_or_else(|_| format!("https://{}/t/{}", self.host(), self.thread_no));
    }

    pub fn page_url(&self, page: u32) -> String {
        return format!("{}?page={}", self.base_url(), page);
    }
}

impl Display for PageRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.start, self.end)?;

        return Ok(());
    }
}

impl PageRange {
    pub fn new(start: u32, end: u32) -> PageRange {
        return PageRange { start, end };
    }

    /// Ascending, both ends included. Empty when `start > end`.
    pub fn pages(&self) -> std::ops::RangeInclusive<u32> {
        return self.start..=self.end;
    }
}

impl PagePosts {
    pub fn empty(page: u32, poster_id: &str) -> PagePosts {
        return PagePosts {
            page,
            poster_id: poster_id.to_string(),
            posts: vec![]
        }
    }

    pub fn is_empty(&self) -> bool {
        return self.posts.is_empty();
    }
}

#[test]
fn test_thread_descriptor_urls() {
    let thread_descriptor = ThreadDescriptor::new("www.nmbxd1.com".to_string(), 60184882);

    assert_eq!("https://www.nmbxd1.com/t/60184882", thread_descriptor.base_url());
    assert_eq!("https://www.nmbxd1.com/t/60184882?page=3", thread_descriptor.page_url(3));
    assert_eq!("www.nmbxd1.com/60184882", thread_descriptor.to_string());
}

#[test]
fn test_page_range_pages() {
    assert_eq!(vec![1, 2, 3], PageRange::new(1, 3).pages().collect::<Vec<u32>>());
    assert_eq!(vec![8], PageRange::new(8, 8).pages().collect::<Vec<u32>>());
    assert!(PageRange::new(5, 4).pages().next().is_none());
}
