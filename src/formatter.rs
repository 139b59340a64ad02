//! Turns raw recipe text into display blocks.
//!
//! The generation service answers with loosely formatted text: headings
//! that end in a colon, bullet lists prefixed with `* ` or `- `, and plain
//! paragraphs, with `**` emphasis sprinkled throughout. [`format_content`]
//! classifies each line and groups consecutive bullets into one list.

use std::fmt::Write;

/// One formatted unit of recipe text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading(String),
    Paragraph(String),
    List(Vec<String>),
}

/// Split `content` into display blocks, in source line order.
///
/// `None` or empty input yields no blocks.
pub fn format_content(content: Option<&str>) -> Vec<Block> {
    let Some(content) = content else {
        return Vec::new();
    };

    let mut blocks = Vec::new();
    let mut items: Vec<String> = Vec::new();

    for line in content.lines() {
        let line = strip_emphasis(line);
        let line = line.trim();

        if let Some(item) = bullet_item(line) {
            items.push(item.to_string());
            continue;
        }

        flush_list(&mut items, &mut blocks);

        if line.is_empty() {
            continue;
        }

        if line.ends_with(':') {
            blocks.push(Block::Heading(line.to_string()));
        } else {
            blocks.push(Block::Paragraph(line.to_string()));
        }
    }

    flush_list(&mut items, &mut blocks);
    blocks
}

/// Remove every `**` emphasis marker from a line.
pub fn strip_emphasis(line: &str) -> String {
    line.replace("**", "")
}

fn bullet_item(line: &str) -> Option<&str> {
    line.strip_prefix("* ").or_else(|| line.strip_prefix("- "))
}

fn flush_list(items: &mut Vec<String>, blocks: &mut Vec<Block>) {
    if !items.is_empty() {
        blocks.push(Block::List(std::mem::take(items)));
    }
}

/// Lay blocks out as plain terminal text.
pub fn render_plain(blocks: &[Block]) -> String {
    let mut out = String::new();
    for block in blocks {
        match block {
            Block::Heading(text) => {
                if !out.is_empty() {
                    out.push('\n');
                }
                let _ = writeln!(out, "{}", text);
            }
            Block::Paragraph(text) => {
                let _ = writeln!(out, "{}", text);
            }
            Block::List(items) => {
                for item in items {
                    let _ = writeln!(out, "  • {}", item);
                }
            }
        }
    }
    out
}
