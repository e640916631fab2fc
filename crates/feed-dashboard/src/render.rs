//! HTML rendering
//!
//! Pages are small enough to assemble with `format!`. Every value that came
//! from the API or the user goes through [`escape`] first.

use feed_core::ArtifactKind;
use feed_service::dto::{ArtifactResponse, PostPageResponse, PostResponse};

/// Width transformation applied to every displayed image and video
pub const DISPLAY_TRANSFORMATION: &str = "w-600";
/// Largest page size offered by the page-size selector
pub const MAX_DASHBOARD_PAGE_SIZE: i64 = 50;

const ACCEPTED_FILE_TYPES: &str = ".png,.jpg,.jpeg,.mp4,.avi,.mov,.mkv,.webm";

const STYLE: &str = "body{font-family:sans-serif;margin:0;display:flex}\
nav{width:180px;padding:1rem;background:#f4f4f6;min-height:100vh}\
nav a{display:block;margin:.5rem 0}\
main{flex:1;max-width:760px;padding:1rem 2rem}\
.post{border-top:1px solid #ddd;padding:1rem 0}\
.title{background:#e8f0fe;padding:.5rem;border-radius:4px}\
.meta{color:#666;font-size:.9em}\
.content{white-space:pre-wrap}\
.media img,.media video{max-width:100%;display:block;margin:.5rem auto}\
.pager{display:flex;justify-content:space-between;align-items:center;margin:1rem 0}\
.disabled{color:#aaa}\
.error{color:#b00020;background:#fdecea;padding:.75rem;border-radius:4px}\
.info{background:#e8f0fe;padding:.75rem;border-radius:4px}";

/// Escape text for use in HTML content and double-quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Insert an ImageKit transformation step into a delivery URL
///
/// On `ik.imagekit.io` the step goes after the account id, on a custom
/// domain it goes first in the path. An existing `tr:` segment is chained
/// onto. URLs that cannot be parsed are returned unchanged.
pub fn transformed_url(url: &str, transformation: &str) -> String {
    if transformation.is_empty() {
        return url.to_string();
    }

    let (base, query) = match url.split_once('?') {
        Some((base, query)) => (base, Some(query)),
        None => (url, None),
    };

    let Some((scheme, rest)) = base.split_once("://") else {
        return url.to_string();
    };

    let mut segments: Vec<String> = rest.split('/').map(String::from).collect();
    let insert_at = if segments[0] == "ik.imagekit.io" { 2 } else { 1 };
    if segments.len() <= insert_at {
        return url.to_string();
    }

    if segments[insert_at].starts_with("tr:") {
        segments[insert_at] = format!("{}:{transformation}", segments[insert_at]);
    } else {
        segments.insert(insert_at, format!("tr:{transformation}"));
    }

    let mut out = format!("{scheme}://{}", segments.join("/"));
    if let Some(query) = query {
        out.push('?');
        out.push_str(query);
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title} - Simple Social</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <nav><strong>Hi User!</strong><a href=\"/\">Feed</a><a href=\"/upload\">Upload</a></nav>\n\
         <main>\n{body}\n</main>\n</body>\n</html>\n",
        title = escape(title),
    )
}

fn feed_link(page: i64, page_size: i64) -> String {
    format!("/?page={page}&amp;page_size={page_size}")
}

fn render_artifact(artifact: &ArtifactResponse) -> String {
    let path = artifact.url.split('?').next().unwrap_or_default();
    let src = escape(&transformed_url(&artifact.url, DISPLAY_TRANSFORMATION));

    match ArtifactKind::classify(&artifact.content_type, path) {
        ArtifactKind::Image => format!("<img src=\"{src}\" alt=\"\" loading=\"lazy\">\n"),
        ArtifactKind::Video => {
            format!("<video src=\"{src}\" controls preload=\"metadata\"></video>\n")
        }
        ArtifactKind::Other => format!(
            "<p class=\"meta\">Unsupported artifact type: {}</p>\n",
            escape(&artifact.content_type)
        ),
    }
}

fn render_post(post: &PostResponse) -> String {
    let mut out = format!(
        "<article class=\"post\">\n<div class=\"title\">{}</div>\n\
         <div class=\"meta\">User &bull; {}</div>\n",
        escape(&post.title),
        post.created_at.format("%Y-%m-%d")
    );
    if !post.content.is_empty() {
        out.push_str(&format!(
            "<p class=\"content\">{}</p>\n",
            escape(&post.content)
        ));
    }
    if !post.artifacts.is_empty() {
        out.push_str("<div class=\"media\">\n");
        for artifact in &post.artifacts {
            out.push_str(&render_artifact(artifact));
        }
        out.push_str("</div>\n");
    }
    out.push_str("</article>\n");
    out
}

fn render_pager(page: &PostPageResponse, page_size: i64) -> String {
    let current = page.current_page;
    let total = page.total_pages.max(1);

    let previous = if current <= 1 {
        "<span class=\"disabled\">&larr; Previous</span>".to_string()
    } else {
        format!(
            "<a href=\"{}\">&larr; Previous</a>",
            feed_link(current - 1, page_size)
        )
    };
    let next = if current >= total {
        "<span class=\"disabled\">Next &rarr;</span>".to_string()
    } else {
        format!("<a href=\"{}\">Next &rarr;</a>", feed_link(current + 1, page_size))
    };

    // Changing the size always starts again from page 1
    format!(
        "<div class=\"pager\">\n{previous}\n<span>Page {current} of {total}</span>\n{next}\n</div>\n\
         <form method=\"get\" action=\"/\">\
         <input type=\"hidden\" name=\"page\" value=\"1\">\
         <label>Posts per page: <input type=\"number\" name=\"page_size\" min=\"1\" max=\"{MAX_DASHBOARD_PAGE_SIZE}\" value=\"{page_size}\"></label> \
         <button type=\"submit\">Apply</button></form>\n"
    )
}

/// The feed page for one page of posts
pub fn feed_page(page: &PostPageResponse, page_size: i64) -> String {
    let mut body = String::from("<h1>Feed</h1>\n");

    if page.posts.is_empty() {
        body.push_str("<p class=\"info\">No posts yet! Be the first to share something.</p>\n");
        return layout("Feed", &body);
    }

    for post in &page.posts {
        body.push_str(&render_post(post));
    }
    body.push_str(&render_pager(page, page_size));

    layout("Feed", &body)
}

/// The feed page when the API could not be read
pub fn feed_error_page(status: u16, api_body: &str) -> String {
    let body = format!(
        "<h1>Feed</h1>\n<p class=\"error\">Failed to load feed ({status}): {}</p>\n",
        escape(api_body)
    );
    layout("Feed", &body)
}

/// The share form, optionally with an error and the previously typed values
pub fn upload_page(error: Option<&str>, title: &str, caption: &str) -> String {
    let mut body = String::from("<h1>Share Something</h1>\n");
    if let Some(error) = error {
        body.push_str(&format!("<p class=\"error\">{}</p>\n", escape(error)));
    }
    body.push_str(&format!(
        "<form method=\"post\" action=\"/upload\" enctype=\"multipart/form-data\">\n\
         <p><label>Title:<br><input type=\"text\" name=\"title\" value=\"{title}\" size=\"60\"></label></p>\n\
         <p><label>Caption (Content):<br><textarea name=\"caption\" rows=\"5\" cols=\"60\" \
         placeholder=\"What's on your mind?\">{caption}</textarea></label></p>\n\
         <p><label>Choose media (images/videos):<br>\
         <input type=\"file\" name=\"files\" multiple accept=\"{ACCEPTED_FILE_TYPES}\"></label></p>\n\
         <p><button type=\"submit\">Share</button></p>\n</form>\n",
        title = escape(title),
        caption = escape(caption),
    ));
    layout("Upload", &body)
}

/// A bare error page
pub fn error_page(message: &str) -> String {
    layout(
        "Error",
        &format!("<h1>Something went wrong</h1>\n<p class=\"error\">{}</p>\n", escape(message)),
    )
}
