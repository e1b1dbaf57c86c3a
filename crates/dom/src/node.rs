//! Node data stored in the document arena.

use crate::geometry::LayoutBox;
use std::collections::HashMap;

/// The kind of a document node.
#[derive(Debug, Clone, Default)]
pub enum NodeKind {
    /// The document root.
    #[default]
    Document,
    /// An element with an ASCII-lowercase tag name.
    Element { tag: String },
    /// A text node.
    Text { text: String },
}

/// Data stored for each node in the arena.
#[derive(Debug, Clone, Default)]
pub struct NodeData {
    pub kind: NodeKind,
    pub(crate) attrs: HashMap<String, String>,
    pub(crate) css: HashMap<String, String>,
    /// Form value for input-like elements.
    pub(crate) value: String,
    /// Display state; `false` corresponds to `display: none`.
    pub(crate) hidden: bool,
    /// Box metrics supplied by the host (layout is not computed here).
    pub(crate) layout: LayoutBox,
}

impl NodeData {
    pub(crate) fn element(tag: &str) -> Self {
        Self {
            kind: NodeKind::Element {
                tag: tag.to_ascii_lowercase(),
            },
            ..Self::default()
        }
    }

    pub(crate) fn text(text: &str) -> Self {
        Self {
            kind: NodeKind::Text { text: text.into() },
            ..Self::default()
        }
    }

    /// Tag name for elements, empty string otherwise.
    pub fn tag(&self) -> &str {
        match &self.kind {
            NodeKind::Element { tag } => tag,
            _ => "",
        }
    }

    pub fn is_element(&self) -> bool {
        matches!(self.kind, NodeKind::Element { .. })
    }
}
