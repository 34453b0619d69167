use lazy_static::lazy_static;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::helpers::string_helpers;
use crate::model::data::chan::ParsedPost;
use crate::model::imageboards::parser::post_parser::PostParser;

lazy_static! {
    static ref UID_MARKER_SELECTOR: Selector =
        Selector::parse("span.h-threads-info-uid").unwrap();
    static ref POST_INFO_SELECTOR: Selector =
        Selector::parse("div.h-threads-info").unwrap();
    static ref POST_CONTENT_SELECTOR: Selector =
        Selector::parse("div.h-threads-content").unwrap();
    static ref POSTER_ID_REGEX: Regex =
        Regex::new(r"ID:([^\s(]+)").unwrap();
}

/// Every post on a thread page is rendered as a `div.h-threads-info` block (holding the
/// `span.h-threads-info-uid` marker) followed, among its siblings, by a `div.h-threads-content`
/// block with the message body.
pub struct NmbPostParser {}

impl NmbPostParser {
    pub fn new() -> NmbPostParser {
        return NmbPostParser {};
    }
}

impl PostParser for NmbPostParser {
    fn parse_posts(&self, page_html: &str) -> Vec<ParsedPost> {
        let document = Html::parse_document(page_html);
        let mut parsed_posts = Vec::<ParsedPost>::with_capacity(32);

        for uid_marker in document.select(&UID_MARKER_SELECTOR) {
            let marker_text = uid_marker.text().collect::<String>();

            let poster_id = extract_poster_id(&marker_text);
            if poster_id.is_none() {
                continue;
            }

            let poster_id = poster_id.unwrap();

            let post_info = find_post_info(&uid_marker);
            if post_info.is_none() {
                debug!("parse_posts() marker \'{}\' has no post info container", marker_text.trim());
                continue;
            }

            let post_content = find_post_content(&post_info.unwrap());
            if post_content.is_none() {
                debug!("parse_posts() marker \'{}\' has no post content container", marker_text.trim());
                continue;
            }

            let content = string_helpers::join_stripped_strings(post_content.unwrap().text());
            parsed_posts.push(ParsedPost { poster_id, content });
        }

        return parsed_posts;
    }
}

pub fn extract_poster_id(marker_text: &str) -> Option<String> {
    let captures = POSTER_ID_REGEX.captures(marker_text)?;
    return captures.get(1).map(|poster_id| poster_id.as_str().to_string());
}

fn find_post_info<'a>(uid_marker: &ElementRef<'a>) -> Option<ElementRef<'a>> {
    return uid_marker.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|ancestor| POST_INFO_SELECTOR.matches(ancestor));
}

fn find_post_content<'a>(post_info: &ElementRef<'a>) -> Option<ElementRef<'a>> {
    return post_info.next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|sibling| POST_CONTENT_SELECTOR.matches(sibling));
}

#[test]
fn test_extract_poster_id() {
    assert_eq!(Some("fyBPEP5".to_string()), extract_poster_id("ID:fyBPEP5"));
    assert_eq!(Some("fyBPEP5".to_string()), extract_poster_id("  ID:fyBPEP5(PO主)\n"));
    assert_eq!(Some("abc123".to_string()), extract_poster_id("ID:abc123"));
    assert_eq!(None, extract_poster_id("id:abc123"));
    assert_eq!(Some("abc-12".to_string()), extract_poster_id("ID:abc-12"));
    assert_eq!(Some("a_b".to_string()), extract_poster_id("ID:a_b (PO主)"));
    assert_eq!(None, extract_poster_id("ID:"));
    assert_eq!(None, extract_poster_id("ID: abc"));
    assert_eq!(None, extract_poster_id(""));
}

#[test]
fn test_parse_posts_pairs_marker_with_content() {
    let page_html = r##"
        <html><body>
        <div class="h-threads-item-main">
            <div class="h-threads-info">
                <span class="h-threads-info-title">无标题</span>
                <span class="h-threads-info-uid">ID:fyBPEP5</span>
            </div>
            <div class="h-threads-content">
                First line<br>
                <font color="#789922">&gt;&gt;No.1</font>
                second  line
            </div>
        </div>
        </body></html>
    "##;

    let parsed_posts = NmbPostParser::new().parse_posts(page_html);

    assert_eq!(1, parsed_posts.len());
    assert_eq!("fyBPEP5", parsed_posts[0].poster_id);
    assert_eq!("First line>>No.1second  line", parsed_posts[0].content);
}

#[test]
fn test_parse_posts_skips_non_content_siblings() {
    let page_html = r#"
        <div class="h-threads-item-reply-main">
            <div class="h-threads-info"><span class="h-threads-info-uid">ID:abc</span></div>
            <div class="h-threads-img-box">image caption</div>
            <div class="h-threads-content">body</div>
        </div>
    "#;

    let parsed_posts = NmbPostParser::new().parse_posts(page_html);

    assert_eq!(1, parsed_posts.len());
    assert_eq!("body", parsed_posts[0].content);
}

#[test]
fn test_parse_posts_skips_marker_without_containers() {
    let page_html = r#"
        <div class="h-threads-item-reply-main">
            <div class="h-threads-content">content before the info block</div>
            <div class="h-threads-info"><span class="h-threads-info-uid">ID:nocontent</span></div>
        </div>
        <div class="somewhere-else">
            <span class="h-threads-info-uid">ID:noinfo</span>
            <div class="h-threads-content">orphan</div>
        </div>
        <div class="h-threads-item-reply-main">
            <div class="h-threads-info"><span class="h-threads-info-uid">ID:ok</span></div>
            <div class="h-threads-content">kept</div>
        </div>
    "#;

    let parsed_posts = NmbPostParser::new().parse_posts(page_html);

    assert_eq!(1, parsed_posts.len());
    assert_eq!("ok", parsed_posts[0].poster_id);
    assert_eq!("kept", parsed_posts[0].content);
}

#[test]
fn test_parse_posts_empty_page() {
    assert!(NmbPostParser::new().parse_posts("").is_empty());
    assert!(NmbPostParser::new().parse_posts("<html><body><p>nothing</p></body></html>").is_empty());
}
