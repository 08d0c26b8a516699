//! Writes a presentation tree out as an HTML fragment.

use std::fmt::Write;

use crate::content::render::{Document, Node};

/// Element nesting written as markup. Deeper subtrees are written as their
/// escaped text only.
const MAX_ELEMENT_DEPTH: usize = 128;

pub fn to_html(document: &Document) -> String {
    let mut out = String::new();
    write_children(&mut out, &document.children, 0);
    out
}

fn write_children(out: &mut String, children: &[Node], depth: usize) {
    for child in children {
        write_node(out, child, depth + 1);
    }
}

fn open(out: &mut String, tag: &str, class: Option<&str>) {
    match class {
        Some(class) => {
            let _ = write!(out, "<{tag} class=\"{}\">", escape(class));
        }
        None => {
            let _ = write!(out, "<{tag}>");
        }
    }
}

fn element(out: &mut String, tag: &str, class: Option<&str>, children: &[Node], depth: usize) {
    open(out, tag, class);
    write_children(out, children, depth);
    let _ = write!(out, "</{tag}>");
}

fn write_node(out: &mut String, node: &Node, depth: usize) {
    if depth > MAX_ELEMENT_DEPTH {
        write_text_only(out, node);
        return;
    }
    match node {
        Node::Heading {
            level,
            class,
            children,
        } => element(out, &format!("h{level}"), *class, children, depth),
        Node::Paragraph { class, children } => element(out, "p", Some(class), children, depth),
        Node::List {
            ordered,
            start,
            class,
            items,
        } => {
            if *ordered {
                match start {
                    Some(start) => {
                        let _ = write!(out, "<ol start=\"{start}\" class=\"{}\">", escape(class));
                    }
                    None => open(out, "ol", Some(class)),
                }
                write_children(out, items, depth);
                out.push_str("</ol>");
            } else {
                element(out, "ul", Some(class), items, depth);
            }
        }
        Node::ListItem { class, children } => element(out, "li", Some(class), children, depth),
        Node::BlockQuote { children } => element(out, "blockquote", None, children, depth),
        Node::ThematicBreak => out.push_str("<hr />"),
        Node::CodeBlock {
            container_class,
            class,
            code,
            ..
        } => {
            open(out, "pre", Some(container_class));
            open(out, "code", Some(class));
            out.push_str(&escape(code));
            out.push_str("</code></pre>");
        }
        Node::Text { text } => out.push_str(&escape(text)),
        Node::Emphasis { children } => element(out, "em", None, children, depth),
        Node::Strong { children } => element(out, "strong", None, children, depth),
        Node::Link {
            href,
            title,
            class,
            children,
        } => {
            let _ = write!(out, "<a href=\"{}\"", escape(href));
            if let Some(title) = title {
                let _ = write!(out, " title=\"{}\"", escape(title));
            }
            let _ = write!(out, " class=\"{}\">", escape(class));
            write_children(out, children, depth);
            out.push_str("</a>");
        }
        Node::Image { src, alt, title } => {
            let _ = write!(out, "<img src=\"{}\" alt=\"{}\"", escape(src), escape(alt));
            if let Some(title) = title {
                let _ = write!(out, " title=\"{}\"", escape(title));
            }
            out.push_str(" />");
        }
        Node::InlineCode { class, code } => {
            open(out, "code", Some(class));
            out.push_str(&escape(code));
            out.push_str("</code>");
        }
        Node::SoftBreak => out.push('\n'),
        Node::LineBreak => out.push_str("<br />"),
    }
}

/// Escaped visible text of a subtree, walked with an explicit stack.
fn write_text_only(out: &mut String, node: &Node) {
    let mut stack = vec![node];
    while let Some(node) = stack.pop() {
        match node {
            Node::Text { text } => out.push_str(&escape(text)),
            Node::InlineCode { code, .. } | Node::CodeBlock { code, .. } => {
                out.push_str(&escape(code))
            }
            Node::SoftBreak | Node::LineBreak => out.push(' '),
            other => stack.extend(other.children().iter().rev()),
        }
    }
}

fn escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
