/// HTML renderer for the block tree
use crate::ast::Node;

pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        HtmlRenderer
    }

    /// Render to output lines, none of which carries a trailing newline
    pub fn render_lines(&self, node: &Node) -> Vec<String> {
        let mut lines = Vec::new();
        render_node(node, &mut lines);
        lines
    }

    /// Render to a single string with a newline after every line
    pub fn render(&self, node: &Node) -> String {
        self.render_lines(node)
            .into_iter()
            .map(|line| line + "\n")
            .collect()
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn render_node(node: &Node, out: &mut Vec<String>) {
    match node {
        Node::Document(children) => {
            for child in children {
                render_node(child, out);
            }
        }
        Node::Heading { level, text } => {
            out.push(format!("<h{}>{}</h{}>", level, text, level));
        }
        Node::UnorderedList(items) => render_list("ul", items, out),
        Node::OrderedList(items) => render_list("ol", items, out),
        Node::Paragraph(lines) => {
            out.push("<p>".to_string());
            for (i, line) in lines.iter().enumerate() {
                if i == 0 {
                    out.push(line.clone());
                } else {
                    out.push(format!("<br/>{}", line));
                }
            }
            out.push("</p>".to_string());
        }
    }
}

fn render_list(tag: &str, items: &[String], out: &mut Vec<String>) {
    out.push(format!("<{}>", tag));
    for item in items {
        out.push(format!("<li>{}</li>", item));
    }
    out.push(format!("</{}>", tag));
}
