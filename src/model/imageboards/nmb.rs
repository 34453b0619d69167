use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

use crate::constants;
use crate::helpers::string_helpers;
use crate::model::data::chan::ThreadDescriptor;
use crate::model::imageboards::base_imageboard::Imageboard;
use crate::model::imageboards::parser::nmb_post_parser::NmbPostParser;
use crate::model::imageboards::parser::post_parser::PostParser;

lazy_static! {
    static ref THREAD_URL_REGEX: Regex =
        Regex::new(r"^https://www\.nmbxd1\.com/t/(\d+)$").unwrap();
    static ref THREAD_NO_REGEX: Regex =
        Regex::new(r"^No\.(\d+)$").unwrap();
    static ref THREAD_NUMBER_REGEX: Regex =
        Regex::new(r"^(\d+)$").unwrap();
}

pub struct Nmb {
    post_parser: NmbPostParser
}

impl Nmb {
    pub fn new() -> Nmb {
        return Nmb { post_parser: NmbPostParser::new() };
    }
}

impl Imageboard for Nmb {
    fn name(&self) -> &'static str {
        return "nmb";
    }

    fn url_matches(&self, url: &str) -> bool {
        let url = Url::parse(url);
        if url.is_err() {
            return false;
        }

        let url = url.unwrap();

        let domain = url.domain();
        if domain.is_none() {
            return false;
        }

        let site_name = string_helpers::extract_site_name_from_domain(domain.unwrap());
        if site_name.is_empty() {
            return false
        }

        return site_name.to_lowercase() == "nmbxd1";
    }

    fn thread_reference_to_descriptor(&self, input: &str) -> Option<ThreadDescriptor> {
        let regexes: [&Regex; 3] = [&*THREAD_URL_REGEX, &*THREAD_NO_REGEX, &*THREAD_NUMBER_REGEX];

        for regex in regexes {
            let captures = regex.captures(input);
            if captures.is_none() {
                continue;
            }

            let thread_no = captures.unwrap()
                .get(1)
                .and_then(|thread_no| u64::from_str(thread_no.as_str()).ok());

            if thread_no.is_none() {
                error!(
                    "thread_reference_to_descriptor() \'{}\' thread number does not fit into u64",
                    input
                );
                return None;
            }

            return Some(ThreadDescriptor::new(constants::NMB_HOST.to_string(), thread_no.unwrap()));
        }

        return None;
    }

    fn post_parser(&self) -> &(dyn PostParser + Send + Sync) {
        return &self.post_parser;
    }
}

#[test]
fn test_thread_reference_accepted_shapes() {
    let nmb = Nmb::new();

    let inputs = [
        "https://www.nmbxd1.com/t/60184882",
        "No.60184882",
        "60184882",
    ];

    for input in inputs {
        let thread_descriptor = nmb.thread_reference_to_descriptor(input).unwrap();
        assert_eq!(60184882, thread_descriptor.thread_no);
        assert_eq!("https://www.nmbxd1.com/t/60184882", thread_descriptor.base_url());
    }
}

#[test]
fn test_thread_reference_rejected_shapes() {
    let nmb = Nmb::new();

    let inputs = [
        "",
        "t/123",
        "No123",
        "No.",
        "no.123",
        "No.12a",
        " 123",
        "123 ",
        "12.3",
        "https://www.nmbxd1.com/t/60184882/",
        "https://www.nmbxd1.com/t/60184882?page=2",
        "http://www.nmbxd1.com/t/60184882",
        "https://www.nmbxd1.com/f/60184882",
        "https://wwwXnmbxd1.com/t/60184882",
        "99999999999999999999999",
    ];

    for input in inputs {
        assert!(
            nmb.thread_reference_to_descriptor(input).is_none(),
            "\'{}\' must be rejected",
            input
        );
    }
}

#[test]
fn test_url_matches() {
    let nmb = Nmb::new();

    assert!(nmb.url_matches("https://www.nmbxd1.com/t/60184882"));
    assert!(nmb.url_matches("https://nmbxd1.com/t/1?page=2"));
    assert!(!nmb.url_matches("https://boards.4chan.org/a/thread/1"));
    assert!(!nmb.url_matches("60184882"));
}
