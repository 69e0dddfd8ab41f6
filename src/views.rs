//! Server-rendered HTML pages.
//!
//! Deliberately plain: three pages built with `format!`, no template engine.
//! All user data is escaped before interpolation; note content handed to the
//! client-side markdown renderer goes through a JSON string with `<` escaped
//! so it cannot terminate its script element.

use crate::repository::Entry;

/// Escape text for interpolation into HTML body or attribute context.
pub fn html_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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

/// JSON-encode a string for embedding inside a <script> element.
fn js_string(input: &str) -> String {
    // serde_json never fails on a &str
    serde_json::to_string(input)
        .unwrap_or_else(|_| "\"\"".to_string())
        .replace('<', "\\u003c")
}

const STYLE: &str = "\
body{font-family:sans-serif;max-width:52rem;margin:2rem auto;padding:0 1rem}\
table{border-collapse:collapse;width:100%}\
td,th{text-align:left;padding:.4rem .6rem;border-bottom:1px solid #ddd}\
form.inline{display:inline}\
textarea{width:100%;min-height:20rem;font-family:monospace}\
.actions a,.actions button{margin-right:.5rem}";

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        title = html_escape(title),
        body = body,
    )
}

/// Listing page: upload form, note form, and the entry table.
pub fn index_page(entries: &[Entry]) -> String {
    let mut rows = String::new();
    for entry in entries {
        let name = html_escape(&entry.name);
        let href_name = urlencode(&entry.name);
        let mut actions = format!("<a href=\"/files/{href_name}\">download</a>");
        if entry.is_note() {
            actions.push_str(&format!(
                "<a href=\"/view-note/{href_name}\">view</a>\
                 <a href=\"/edit-note/{href_name}\">edit</a>"
            ));
        }
        actions.push_str(&format!(
            "<form class=\"inline\" method=\"post\" action=\"/delete/{href_name}\">\
             <button type=\"submit\">delete</button></form>"
        ));
        rows.push_str(&format!(
            "<tr><td>{name}</td><td>{size}</td><td class=\"actions\">{actions}</td></tr>\n",
            size = html_escape(&entry.size_label),
        ));
    }

    let table = if entries.is_empty() {
        "<p>No files yet.</p>".to_string()
    } else {
        format!(
            "<table>\n<tr><th>Name</th><th>Size</th><th></th></tr>\n{rows}</table>"
        )
    };

    let body = format!(
        "<h1>lanshare</h1>\n\
         <h2>Upload a file</h2>\n\
         <form method=\"post\" action=\"/\" enctype=\"multipart/form-data\">\n\
         <input type=\"file\" name=\"file\">\n\
         <button type=\"submit\">Upload</button>\n</form>\n\
         <h2>New note</h2>\n\
         <form method=\"post\" action=\"/note\">\n\
         <input type=\"text\" name=\"note_title\" placeholder=\"Title\" required>\n\
         <br><textarea name=\"note_content\" placeholder=\"Write markdown here\"></textarea>\n\
         <br><button type=\"submit\">Create note</button>\n</form>\n\
         <h2>Files</h2>\n{table}"
    );
    page("lanshare", &body)
}

/// Note viewer: the markdown source is rendered client-side by marked.js.
pub fn view_note_page(name: &str, content: &str) -> String {
    let body = format!(
        "<p><a href=\"/\">&larr; back</a> \
         <a href=\"/edit-note/{href_name}\">edit</a></p>\n\
         <h1>{title}</h1>\n\
         <div id=\"note\"></div>\n\
         <script src=\"https://cdn.jsdelivr.net/npm/marked/marked.min.js\"></script>\n\
         <script>document.getElementById('note').innerHTML = marked.parse({payload});</script>",
        href_name = urlencode(name),
        title = html_escape(name),
        payload = js_string(content),
    );
    page(name, &body)
}

/// Note editor: textarea pre-filled with the current content.
pub fn edit_note_page(name: &str, content: &str) -> String {
    let body = format!(
        "<p><a href=\"/\">&larr; back</a></p>\n\
         <h1>Editing {title}</h1>\n\
         <form method=\"post\" action=\"/edit-note/{href_name}\">\n\
         <textarea name=\"note_content\">{content}</textarea>\n\
         <br><button type=\"submit\">Save</button>\n</form>",
        title = html_escape(name),
        href_name = urlencode(name),
        content = html_escape(content),
    );
    page(name, &body)
}

/// Percent-encode a filename for use inside a path segment.
pub fn urlencode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for b in input.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}
