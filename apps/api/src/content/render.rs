//! Markdown → presentation tree.
//!
//! Parses CommonMark with comrak and walks the AST, attaching style classes
//! from [`crate::content::styles`] as it goes. Raw HTML is dropped. Nothing in
//! here can fail: any construct without a mapping contributes its children.

use comrak::nodes::{AstNode, ListType, NodeValue};
use comrak::{parse_document, Arena, ComrakOptions};
use serde::{Deserialize, Serialize};

use crate::content::styles::{
    accent_for, heading_class, language_tag, list_class, Accent, Theme, INLINE_CODE_CLASS,
    LINK_CLASS, LIST_ITEM_CLASS, PARAGRAPH_CLASS,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    #[serde(default)]
    pub theme: Theme,
}

/// Root of a rendered note.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    pub children: Vec<Node>,
}

/// One presentation primitive. Serialized with a `kind` tag for the page layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Heading {
        level: u8,
        class: Option<&'static str>,
        children: Vec<Node>,
    },
    Paragraph {
        class: &'static str,
        children: Vec<Node>,
    },
    List {
        ordered: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        start: Option<usize>,
        class: &'static str,
        items: Vec<Node>,
    },
    ListItem {
        class: &'static str,
        children: Vec<Node>,
    },
    BlockQuote {
        children: Vec<Node>,
    },
    ThematicBreak,
    /// Fenced or indented code: full-width container plus language accent.
    CodeBlock {
        language: Option<String>,
        accent: Accent,
        container_class: String,
        class: String,
        code: String,
    },
    Text {
        text: String,
    },
    Emphasis {
        children: Vec<Node>,
    },
    Strong {
        children: Vec<Node>,
    },
    Link {
        href: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        class: &'static str,
        children: Vec<Node>,
    },
    Image {
        src: String,
        alt: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
    InlineCode {
        class: &'static str,
        code: String,
    },
    SoftBreak,
    LineBreak,
}

/// Deepest AST level mapped to its own node. Anything nested further is
/// collapsed into a single text node, which bounds recursion here and in
/// every consumer of the tree.
const MAX_NESTING: usize = 100;

impl Node {
    /// Child nodes of container variants; empty for leaves.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Heading { children, .. }
            | Node::Paragraph { children, .. }
            | Node::ListItem { children, .. }
            | Node::BlockQuote { children }
            | Node::Emphasis { children }
            | Node::Strong { children }
            | Node::Link { children, .. } => children,
            Node::List { items, .. } => items,
            _ => &[],
        }
    }
}

/// Renders normalized markdown into a presentation tree.
pub fn render(markdown: &str, options: &RenderOptions) -> Document {
    let arena = Arena::new();
    let root = parse_document(&arena, markdown, &ComrakOptions::default());

    let renderer = Renderer { options };
    Document {
        children: renderer.blocks(root, false, 0),
    }
}

struct Renderer<'o> {
    options: &'o RenderOptions,
}

impl<'o> Renderer<'o> {
    fn blocks<'a>(&self, parent: &'a AstNode<'a>, tight: bool, depth: usize) -> Vec<Node> {
        let mut out = Vec::new();
        for child in parent.children() {
            self.push_block(child, tight, depth + 1, &mut out);
        }
        out
    }

    fn inlines<'a>(&self, parent: &'a AstNode<'a>, depth: usize) -> Vec<Node> {
        let mut out = Vec::new();
        for child in parent.children() {
            self.push_inline(child, depth + 1, &mut out);
        }
        out
    }

    /// `tight` is set inside tight lists, where paragraphs are unwrapped into
    /// their item.
    fn push_block<'a>(
        &self,
        node: &'a AstNode<'a>,
        tight: bool,
        depth: usize,
        out: &mut Vec<Node>,
    ) {
        if depth > MAX_NESTING {
            out.push(flattened_text(node));
            return;
        }
        let data = node.data.borrow();

        match &data.value {
            NodeValue::Document => out.extend(self.blocks(node, tight, depth)),

            NodeValue::Heading(heading) => out.push(Node::Heading {
                level: heading.level,
                class: heading_class(heading.level),
                children: self.inlines(node, depth),
            }),

            NodeValue::Paragraph if tight => out.extend(self.inlines(node, depth)),

            NodeValue::Paragraph => out.push(Node::Paragraph {
                class: PARAGRAPH_CLASS,
                children: self.inlines(node, depth),
            }),

            NodeValue::List(list) => {
                let ordered = matches!(list.list_type, ListType::Ordered);
                out.push(Node::List {
                    ordered,
                    start: (ordered && list.start != 1).then_some(list.start),
                    class: list_class(ordered),
                    items: self.blocks(node, list.tight, depth),
                });
            }

            NodeValue::Item(_) => out.push(Node::ListItem {
                class: LIST_ITEM_CLASS,
                children: self.blocks(node, tight, depth),
            }),

            NodeValue::BlockQuote => out.push(Node::BlockQuote {
                children: self.blocks(node, false, depth),
            }),

            NodeValue::CodeBlock(code_block) => {
                out.push(self.code_block(&code_block.info, &code_block.literal))
            }

            NodeValue::ThematicBreak => out.push(Node::ThematicBreak),

            NodeValue::HtmlBlock(_) => {}

            _ => self.push_inline(node, depth, out),
        }
    }

    fn push_inline<'a>(&self, node: &'a AstNode<'a>, depth: usize, out: &mut Vec<Node>) {
        if depth > MAX_NESTING {
            out.push(flattened_text(node));
            return;
        }
        let data = node.data.borrow();

        match &data.value {
            NodeValue::Text(text) => out.push(Node::Text { text: text.clone() }),

            NodeValue::SoftBreak => out.push(Node::SoftBreak),

            NodeValue::LineBreak => out.push(Node::LineBreak),

            NodeValue::Code(code) => out.push(Node::InlineCode {
                class: INLINE_CODE_CLASS,
                code: code.literal.clone(),
            }),

            NodeValue::Emph => out.push(Node::Emphasis {
                children: self.inlines(node, depth),
            }),

            NodeValue::Strong => out.push(Node::Strong {
                children: self.inlines(node, depth),
            }),

            NodeValue::Link(link) => out.push(Node::Link {
                href: link.url.clone(),
                title: non_empty(&link.title),
                class: LINK_CLASS,
                children: self.inlines(node, depth),
            }),

            NodeValue::Image(link) => out.push(Node::Image {
                src: link.url.clone(),
                alt: plain_text(&self.inlines(node, depth)),
                title: non_empty(&link.title),
            }),

            NodeValue::HtmlInline(_) => {}

            // Constructs without their own primitive keep their content.
            _ => out.extend(self.inlines(node, depth)),
        }
    }

    fn code_block(&self, info: &str, literal: &str) -> Node {
        let language = language_tag(info);
        let accent = accent_for(language);
        let class = match language {
            Some(tag) => format!("language-{tag} {}", accent.class()),
            None => accent.class().to_string(),
        };

        Node::CodeBlock {
            language: language.map(str::to_string),
            accent,
            container_class: self.options.theme.code_container_class(),
            class,
            code: literal.strip_suffix('\n').unwrap_or(literal).to_string(),
        }
    }
}

/// Visible text of a whole subtree, gathered without recursion.
fn flattened_text<'a>(node: &'a AstNode<'a>) -> Node {
    let mut text = String::new();
    for descendant in node.descendants() {
        match &descendant.data.borrow().value {
            NodeValue::Text(t) => text.push_str(t),
            NodeValue::Code(code) => text.push_str(&code.literal),
            NodeValue::CodeBlock(code_block) => text.push_str(&code_block.literal),
            NodeValue::SoftBreak | NodeValue::LineBreak => text.push(' '),
            _ => {}
        }
    }
    Node::Text { text }
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

/// Flattens inline nodes to their visible text, for image alt attributes.
fn plain_text(nodes: &[Node]) -> String {
    let mut text = String::new();
    for node in nodes {
        match node {
            Node::Text { text: t } => text.push_str(t),
            Node::InlineCode { code, .. } => text.push_str(code),
            Node::SoftBreak | Node::LineBreak => text.push(' '),
            Node::Emphasis { children }
            | Node::Strong { children }
            | Node::Link { children, .. } => text.push_str(&plain_text(children)),
            _ => {}
        }
    }
    text
}
