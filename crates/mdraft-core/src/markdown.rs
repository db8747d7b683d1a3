//! Markdown-to-HTML rendering for the preview pane.

use pulldown_cmark::{html, Options, Parser};

/// Render Markdown source to HTML with GFM extensions.
///
/// Tables, strikethrough and task lists are enabled to match how the
/// exported posts are rendered downstream.
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_GFM);

    let parser = Parser::new_ext(source, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}
