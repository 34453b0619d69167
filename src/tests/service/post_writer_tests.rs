#[cfg(test)]
mod tests {
    use std::fs;

    use crate::model::data::chan::{PagePosts, UserPost};
    use crate::service::post_writer::append_page_posts;
    use crate::tests::shared::shared::test_directory;

    #[test]
    fn test_empty_page_on_fresh_file() {
        let directory = test_directory("writer_empty_page");
        let output_file = directory.join("posts.txt");

        tokio_test::block_on(append_page_posts(&output_file, &PagePosts::empty(3, "X"))).unwrap();

        let written = fs::read_to_string(&output_file).unwrap();
        assert_eq!("Page 3    Poster X\n\n\nNo post\n", written);
        assert!(!written.contains("Post 1:"));
    }

    #[test]
    fn test_appends_without_truncating() {
        let directory = test_directory("writer_appends");
        let output_file = directory.join("nested").join("deeper").join("posts.txt");

        let first_page = PagePosts {
            page: 1,
            poster_id: "abc".to_string(),
            posts: vec![UserPost { page: 1, index: 1, content: "first".to_string() }]
        };

        tokio_test::block_on(async {
            append_page_posts(&output_file, &first_page).await.unwrap();
            append_page_posts(&output_file, &PagePosts::empty(2, "abc")).await.unwrap();
        });

        let divider = "-".repeat(80);
        let expected = format!(
            "Page 1    Poster abc\n\n\nPost 1:\nfirst\n{}\nPage 2    Poster abc\n\n\nNo post\n",
            divider
        );

        assert_eq!(expected, fs::read_to_string(&output_file).unwrap());
    }

    #[test]
    fn test_parent_path_is_a_file() {
        let directory = test_directory("writer_parent_is_file");
        fs::create_dir_all(&directory).unwrap();

        let blocking_file = directory.join("not_a_directory");
        fs::write(&blocking_file, "x").unwrap();

        let output_file = blocking_file.join("posts.txt");
        let result = tokio_test::block_on(append_page_posts(&output_file, &PagePosts::empty(1, "abc")));

        assert!(result.is_err());
    }
}
