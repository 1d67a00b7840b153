//! HTML rendering for the upload page
//!
//! The page is small enough that a template engine would be overkill; the
//! markup is assembled directly.

/// Render the index page: flash message, upload form, download links
pub fn index_page(files: &[String], message: Option<&str>, error: Option<&str>) -> String {
    let mut body = String::new();
    body.push_str("<!DOCTYPE html>\n<html>\n<head><title>File Upload</title></head>\n<body>\n");

    if let Some(message) = message {
        body.push_str(&format!(
            "<p class=\"flash\">{}</p>\n",
            escape_html(message)
        ));
    }
    if let Some(error) = error {
        body.push_str(&format!(
            "<p class=\"flash-error\">{}</p>\n",
            escape_html(error)
        ));
    }

    body.push_str("<h1>Upload a file</h1>\n");
    body.push_str("<form method=\"post\" action=\"/\" enctype=\"multipart/form-data\">\n");
    body.push_str("<input type=\"file\" name=\"file\">\n");
    body.push_str("<button type=\"submit\">Upload</button>\n</form>\n");

    body.push_str("<h2>Uploaded files</h2>\n<ul>\n");
    for name in files {
        body.push_str(&format!(
            "<li><a href=\"/files/{}\">{}</a></li>\n",
            urlencoding::encode(name),
            escape_html(name)
        ));
    }
    body.push_str("</ul>\n</body>\n</html>\n");

    body
}

/// Minimal HTML escaping for file names and flash messages
fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
