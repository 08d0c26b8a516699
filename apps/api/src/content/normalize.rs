//! Content normalization: either stored shape in, one markdown document out.

use crate::content::block::{ContentBlock, NoteContent};

/// Separator between block segments. A blank line keeps each block its own
/// markdown block.
const SEGMENT_SEPARATOR: &str = "\n\n";

const MIN_FENCE_LEN: usize = 3;

/// Converts stored note content into a single markdown string.
///
/// Legacy markdown is returned unchanged. Blocks are mapped in order to
/// segments (text verbatim, code fenced with its language tag) and joined
/// with a blank line. Unknown blocks contribute an empty segment.
pub fn normalize(content: &NoteContent) -> String {
    match content {
        NoteContent::Markdown(markdown) => markdown.clone(),
        NoteContent::Blocks(blocks) => blocks
            .iter()
            .map(block_segment)
            .collect::<Vec<_>>()
            .join(SEGMENT_SEPARATOR),
    }
}

fn block_segment(block: &ContentBlock) -> String {
    match block {
        ContentBlock::Text { content } => content.clone(),
        ContentBlock::Code { content, language } => {
            let fence = fence_for(content);
            let tag = language.as_deref().map(fence_info).unwrap_or_default();
            format!("{fence}{tag}\n{content}\n{fence}")
        }
        ContentBlock::Unknown => String::new(),
    }
}

/// Info string safe to put on an opening backtick fence: the language up to
/// its first whitespace or backtick. Either would end the tag, move text into
/// the code body, or stop the line from being a fence at all.
fn fence_info(language: &str) -> &str {
    language
        .trim_start()
        .split(|c: char| c.is_whitespace() || c == '`')
        .next()
        .unwrap_or_default()
}

/// Backtick fence long enough that no run inside `code` can close it early.
fn fence_for(code: &str) -> String {
    let longest_run = code
        .split(|c: char| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    let len = if longest_run >= MIN_FENCE_LEN {
        longest_run + 1
    } else {
        MIN_FENCE_LEN
    };
    "`".repeat(len)
}

/// Card preview: the first `max_chars` characters of `markdown`, with `...`
/// appended when anything was cut.
pub fn excerpt(markdown: &str, max_chars: usize) -> String {
    match markdown.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &markdown[..cut]),
        None => markdown.to_string(),
    }
}
