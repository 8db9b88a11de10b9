use pulldown_cmark::{html, Options, Parser};

/// Tables, footnotes, definition lists and the like. Fenced code is
/// CommonMark already.
pub(crate) fn markdown_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_DEFINITION_LIST);
    options.insert(Options::ENABLE_HEADING_ATTRIBUTES);
    options
}

pub(crate) fn render_markdown(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, markdown_options());
    let mut body_html = String::new();
    html::push_html(&mut body_html, parser);
    body_html
}
