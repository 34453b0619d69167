#[cfg(test)]
mod tests {
    use crate::model::imageboards::parser::nmb_post_parser::NmbPostParser;
    use crate::service::post_extractor::extract_user_posts;
    use crate::tests::shared::page_html_shared::{empty_thread_page_html, reply_html, thread_page_html};

    fn scenario_page_html() -> String {
        return thread_page_html(&[
            reply_html("fyBPEP5", "opening post"),
            reply_html("LhWkRsO", "someone else"),
            reply_html("fyBPEP5", "second <b>post</b><br>continued"),
        ]);
    }

    #[test]
    fn test_first_page_keeps_both_posts() {
        let post_parser = NmbPostParser::new();
        let page_posts = extract_user_posts(&post_parser, &scenario_page_html(), "fyBPEP5", 1);

        assert_eq!(1, page_posts.page);
        assert_eq!("fyBPEP5", page_posts.poster_id);
        assert_eq!(2, page_posts.posts.len());
        assert_eq!("opening post", page_posts.posts[0].content);
        assert_eq!("secondpostcontinued", page_posts.posts[1].content);
    }

    #[test]
    fn test_second_page_drops_repeated_opening_post() {
        let post_parser = NmbPostParser::new();
        let page_posts = extract_user_posts(&post_parser, &scenario_page_html(), "fyBPEP5", 2);

        assert_eq!(1, page_posts.posts.len());
        assert_eq!("secondpostcontinued", page_posts.posts[0].content);
        assert_eq!(1, page_posts.posts[0].index);
    }

    #[test]
    fn test_every_matching_post_in_document_order() {
        let post_parser = NmbPostParser::new();

        let contents = [
            "plain",
            "with <a href=\"/t/1\">link</a> inside",
            "  padded  ",
            "<span>nested <i>deep</i></span> end",
            "&gt;&gt;No.60184882 quoted",
        ];

        let mut replies = Vec::<String>::new();
        for content in contents {
            replies.push(reply_html("abc", content));
            replies.push(reply_html("xyz", "noise"));
        }

        let page_posts = extract_user_posts(&post_parser, &thread_page_html(&replies), "abc", 1);
        let extracted = page_posts.posts.iter()
            .map(|post| post.content.as_str())
            .collect::<Vec<&str>>();

        assert_eq!(
            vec!["plain", "withlinkinside", "padded", "nesteddeepend", ">>No.60184882 quoted"],
            extracted
        );

        let indexes = page_posts.posts.iter().map(|post| post.index).collect::<Vec<usize>>();
        assert_eq!(vec![1, 2, 3, 4, 5], indexes);
    }

    #[test]
    fn test_identifier_prefix_and_suffix_do_not_match() {
        let post_parser = NmbPostParser::new();
        let page_html = thread_page_html(&[reply_html("abc123", "content")]);

        assert!(extract_user_posts(&post_parser, &page_html, "abc12", 1).is_empty());
        assert!(extract_user_posts(&post_parser, &page_html, "bc123", 1).is_empty());
        assert_eq!(1, extract_user_posts(&post_parser, &page_html, "abc123", 1).posts.len());

        let page_html = thread_page_html(&[reply_html("abc-12", "dashed")]);

        assert!(extract_user_posts(&post_parser, &page_html, "abc", 1).is_empty());
        assert_eq!(1, extract_user_posts(&post_parser, &page_html, "abc-12", 1).posts.len());
    }

    #[test]
    fn test_page_without_markers_is_empty() {
        let post_parser = NmbPostParser::new();

        assert!(extract_user_posts(&post_parser, &empty_thread_page_html(), "abc", 1).is_empty());
        assert!(extract_user_posts(&post_parser, &empty_thread_page_html(), "abc", 4).is_empty());
        assert!(extract_user_posts(&post_parser, "", "abc", 1).is_empty());
    }
}
