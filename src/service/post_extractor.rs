use crate::model::data::chan::{PagePosts, ParsedPost, UserPost};
use crate::model::imageboards::parser::post_parser::PostParser;

pub const FIRST_PAGE: u32 = 1;

/// Posts written by `poster_id` on `page`. Every page after the first starts with a copy of the
/// thread's opening post, so the first match of those pages is dropped.
pub fn extract_user_posts(
    post_parser: &(dyn PostParser + Send + Sync),
    page_html: &str,
    poster_id: &str,
    page: u32
) -> PagePosts {
    let parsed_posts = post_parser.parse_posts(page_html);
    return select_user_posts(parsed_posts, poster_id, page);
}

pub fn select_user_posts(
    parsed_posts: Vec<ParsedPost>,
    poster_id: &str,
    page: u32
) -> PagePosts {
    let mut matching_contents = parsed_posts.into_iter()
        .filter(|parsed_post| parsed_post.poster_id == poster_id)
        .map(|parsed_post| parsed_post.content)
        .collect::<Vec<String>>();

    if page != FIRST_PAGE && !matching_contents.is_empty() {
        matching_contents.remove(0);
    }

    let posts = matching_contents.into_iter()
        .enumerate()
        .map(|(index, content)| UserPost { page, index: index + 1, content })
        .collect::<Vec<UserPost>>();

    debug!("select_user_posts({}, page: {}) found {} posts", poster_id, page, posts.len());

    return PagePosts {
        page,
        poster_id: poster_id.to_string(),
        posts
    };
}

#[cfg(test)]
fn parsed(poster_id: &str, content: &str) -> ParsedPost {
    return ParsedPost { poster_id: poster_id.to_string(), content: content.to_string() };
}

#[test]
fn test_first_page_keeps_every_post() {
    let parsed_posts = vec![parsed("a", "1"), parsed("a", "2"), parsed("a", "3")];
    let page_posts = select_user_posts(parsed_posts, "a", 1);

    let contents = page_posts.posts.iter().map(|post| post.content.as_str()).collect::<Vec<&str>>();
    assert_eq!(vec!["1", "2", "3"], contents);

    let indexes = page_posts.posts.iter().map(|post| post.index).collect::<Vec<usize>>();
    assert_eq!(vec![1, 2, 3], indexes);
}

#[test]
fn test_first_page_with_zero_or_one_match() {
    assert!(select_user_posts(vec![], "a", 1).is_empty());

    let page_posts = select_user_posts(vec![parsed("a", "only")], "a", 1);
    assert_eq!(1, page_posts.posts.len());
    assert_eq!("only", page_posts.posts[0].content);
}

#[test]
fn test_later_pages_drop_first_match() {
    let parsed_posts = vec![parsed("b", "other"), parsed("a", "op copy"), parsed("a", "reply")];
    let page_posts = select_user_posts(parsed_posts, "a", 2);

    assert_eq!(1, page_posts.posts.len());
    assert_eq!("reply", page_posts.posts[0].content);
    assert_eq!(1, page_posts.posts[0].index);
    assert_eq!(2, page_posts.posts[0].page);

    assert!(select_user_posts(vec![parsed("a", "op copy")], "a", 7).is_empty());
    assert!(select_user_posts(vec![], "a", 7).is_empty());
}

#[test]
fn test_poster_id_must_match_exactly() {
    let parsed_posts = vec![parsed("abc123", "x")];

    assert!(select_user_posts(parsed_posts.clone(), "abc12", 1).is_empty());
    assert!(select_user_posts(parsed_posts.clone(), "bc123", 1).is_empty());
    assert!(select_user_posts(parsed_posts.clone(), "ABC123", 1).is_empty());
    assert_eq!(1, select_user_posts(parsed_posts, "abc123", 1).posts.len());
}
