use crate::model::data::chan::ParsedPost;

pub trait PostParser {
    /// Every poster id / content pair found in `page_html`, in document order.
    fn parse_posts(&self, page_html: &str) -> Vec<ParsedPost>;
}
