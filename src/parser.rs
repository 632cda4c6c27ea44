/// Line classifier and block state machine
use crate::ast::Node;
use crate::inline::format_inline;

/// Classification of a single right-trimmed line
#[derive(Debug, Clone, PartialEq)]
pub enum LineKind<'a> {
    Blank,
    Heading { level: u8, content: &'a str },
    UnorderedItem(&'a str),
    OrderedItem(&'a str),
    Text(&'a str),
}

/// Which list, if any, is currently open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockContext {
    #[default]
    None,
    UnorderedListOpen,
    OrderedListOpen,
}

/// Classify one line. The first matching rule wins: blank, heading,
/// `- ` item, `* ` item, then paragraph text.
pub fn classify(line: &str) -> LineKind<'_> {
    let line = line.trim_end();

    if line.is_empty() {
        return LineKind::Blank;
    }

    if let Some((level, content)) = parse_heading(line) {
        return LineKind::Heading { level, content };
    }

    // `-` opens unordered lists and `*` ordered ones
    if let Some(content) = line.strip_prefix("- ") {
        return LineKind::UnorderedItem(content.trim());
    }
    if let Some(content) = line.strip_prefix("* ") {
        return LineKind::OrderedItem(content.trim());
    }

    LineKind::Text(line)
}

/// 1-6 `#` followed by exactly one space; anything else is not a heading
fn parse_heading(line: &str) -> Option<(u8, &str)> {
    let hash_count = line.chars().take_while(|&c| c == '#').count();
    if hash_count == 0 || hash_count > 6 {
        return None;
    }

    let content = line[hash_count..].strip_prefix(' ')?;
    Some((hash_count as u8, content.trim()))
}

/// Per-run conversion state. A fresh `Parser` is used for every document.
pub struct Parser {
    context: BlockContext,
    list_items: Vec<String>,
    paragraph: Vec<String>,
    blocks: Vec<Node>,
}

impl Parser {
    pub fn new() -> Self {
        Parser {
            context: BlockContext::None,
            list_items: Vec::new(),
            paragraph: Vec::new(),
            blocks: Vec::new(),
        }
    }

    /// Run the state machine over all lines and return the document tree.
    pub fn parse<I, S>(mut self, lines: I) -> Node
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.push_line(line.as_ref());
        }
        self.finish()
    }

    /// Feed one line into the state machine
    pub fn push_line(&mut self, line: &str) {
        let kind = classify(line);
        log::trace!("{:?}", kind);

        match kind {
            LineKind::Blank => {
                self.flush_paragraph();
                self.close_list();
            }
            LineKind::Heading { level, content } => {
                self.flush_paragraph();
                self.close_list();
                self.blocks.push(Node::Heading {
                    level,
                    text: format_inline(content),
                });
            }
            LineKind::UnorderedItem(content) => {
                self.flush_paragraph();
                self.open_list(BlockContext::UnorderedListOpen);
                self.list_items.push(format_inline(content));
            }
            LineKind::OrderedItem(content) => {
                self.flush_paragraph();
                self.open_list(BlockContext::OrderedListOpen);
                self.list_items.push(format_inline(content));
            }
            LineKind::Text(text) => {
                self.close_list();
                self.paragraph.push(text.to_string());
            }
        }
    }

    /// Flush whatever is still open and return the document
    pub fn finish(mut self) -> Node {
        self.flush_paragraph();
        self.close_list();
        Node::Document(self.blocks)
    }

    #[cfg(test)]
    fn context(&self) -> BlockContext {
        self.context
    }

    /// Close a list of the other kind, then open `wanted` unless it already is.
    fn open_list(&mut self, wanted: BlockContext) {
        if self.context == wanted {
            return;
        }
        self.close_list();
        log::debug!("opening {:?}", wanted);
        self.context = wanted;
    }

    fn close_list(&mut self) {
        let items = std::mem::take(&mut self.list_items);
        let node = match self.context {
            BlockContext::None => return,
            BlockContext::UnorderedListOpen => Node::UnorderedList(items),
            BlockContext::OrderedListOpen => Node::OrderedList(items),
        };
        log::debug!("closing {:?}", self.context);
        self.context = BlockContext::None;
        self.blocks.push(node);
    }

    /// A paragraph is only ever buffered while no list is open.
    fn flush_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }
        log::debug!("flushing paragraph of {} line(s)", self.paragraph.len());
        let lines = self
            .paragraph
            .drain(..)
            .map(|line| format_inline(&line))
            .collect();
        self.blocks.push(Node::Paragraph(lines));
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}
