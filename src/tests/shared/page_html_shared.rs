pub fn reply_html(poster_id: &str, content_html: &str) -> String {
    return format!(
        r##"<div class="h-threads-item-reply">
            <div class="h-threads-item-reply-icon">…</div>
            <div class="h-threads-item-reply-main">
                <div class="h-threads-info">
                    <span class="h-threads-info-title">无标题</span>
                    <span class="h-threads-info-email">无名氏</span>
                    <span class="h-threads-info-createdat">2023-10-01(日)12:00:00</span>
                    <span class="h-threads-info-uid">ID:{}</span>
                    <a href="#" class="h-threads-info-id">No.1</a>
                </div>
                <div class="h-threads-content">
                    {}
                </div>
            </div>
        </div>"##,
        poster_id,
        content_html
    );
}

pub fn thread_page_html(replies: &[String]) -> String {
    return format!(
        r#"<!DOCTYPE html>
        <html>
        <head><title>thread</title></head>
        <body>
            <div class="h-threads-list">
                <div class="h-threads-item-replies">
                    {}
                </div>
            </div>
        </body>
        </html>"#,
        replies.join("\n")
    );
}

pub fn empty_thread_page_html() -> String {
    return thread_page_html(&[]);
}
