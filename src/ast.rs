/// Block tree produced by the line classifier
use serde::{Deserialize, Serialize};

/// Text stored in the tree is already inline-formatted and is emitted as is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    Document(Vec<Node>),
    Heading {
        level: u8, // 1..=6
        text: String,
    },
    UnorderedList(Vec<String>), // One entry per <li>
    OrderedList(Vec<String>),
    Paragraph(Vec<String>), // Soft-broken lines, joined with <br/>
}

impl Node {
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Document(children) => children,
            _ => &[],
        }
    }
}
