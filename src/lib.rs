/// Converter from a small Markdown subset to HTML fragments
pub mod ast;
pub mod error;
pub mod inline;
pub mod parser;
pub mod renderer;

use parser::Parser;
use renderer::HtmlRenderer;

/// Convert input lines to output HTML lines.
///
/// Input lines may keep their trailing newline. Output lines carry none.
pub fn convert_lines<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let ast = Parser::new().parse(lines);
    log::debug!("parsed {} top-level block(s)", ast.children().len());
    HtmlRenderer::new().render_lines(&ast)
}

/// Parse markdown text and render to HTML, one newline after every line
pub fn markdown_to_html(markdown: &str) -> String {
    let ast = Parser::new().parse(markdown.lines());
    HtmlRenderer::new().render(&ast)
}
