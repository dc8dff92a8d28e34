use log::debug;

use super::{
    blocks::{
        BlockType, classify,
        kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
        segment,
    },
    error::ParseError,
    inline::{InlineSpan, SpanKind, tokenize},
};
use crate::html::{Attributes, HtmlNode};

/// Tag of the root node every document compiles into.
pub const ROOT_TAG: &str = "div";

/// Compiles a Markdown document into a `div` holding one node per block.
///
/// Blocks keep their source order. The first failing block aborts the
/// whole document.
pub fn compile_document(markdown: &str) -> Result<HtmlNode, ParseError> {
    let mut root = HtmlNode::container(ROOT_TAG);
    for block in segment(markdown) {
        let block_type = classify(&block);
        debug!("compiling {block_type:?} block of {} bytes", block.len());
        let node = block_to_node(&block, block_type)?;
        root.push_child(node)
            .map_err(|_| ParseError::UnsupportedBlockType(format!("{block_type:?}")))?;
    }
    Ok(root)
}

/// Builds the node for a single classified block.
///
/// Headings, code and quotes keep their text raw; only paragraphs go
/// through the inline tokenizer.
pub fn block_to_node(block: &str, block_type: BlockType) -> Result<HtmlNode, ParseError> {
    match block_type {
        BlockType::Heading(level @ 1..=Heading::MAX_LEVEL) => Ok(HtmlNode::leaf(
            format!("h{level}"),
            Heading::strip(block, level),
        )),
        BlockType::Heading(level) => Err(ParseError::UnsupportedBlockType(format!(
            "heading level {level}"
        ))),
        BlockType::Code => Ok(HtmlNode::parent(
            "pre",
            vec![HtmlNode::leaf("code", CodeFence::inner(block))],
        )),
        BlockType::Quote => Ok(HtmlNode::leaf("blockquote", BlockQuote::strip(block))),
        BlockType::UnorderedList => Ok(list_node("ul", UnorderedList::items(block))),
        BlockType::OrderedList => Ok(list_node("ol", OrderedList::items(block))),
        BlockType::Paragraph => paragraph_node(block),
    }
}

fn list_node(tag: &str, items: Vec<&str>) -> HtmlNode {
    HtmlNode::parent(
        tag,
        items
            .into_iter()
            .map(|item| HtmlNode::leaf("li", item))
            .collect(),
    )
}

fn paragraph_node(block: &str) -> Result<HtmlNode, ParseError> {
    let children = tokenize(block)?
        .iter()
        // Empty plain gaps left by delimiter passes carry no markup
        .filter(|span| !(span.is_plain() && span.text.is_empty()))
        .map(span_to_node)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::parent("p", children))
}

/// Maps an inline span onto its HTML node.
pub fn span_to_node(span: &InlineSpan) -> Result<HtmlNode, ParseError> {
    let text = span.text.as_str();
    match span.kind {
        SpanKind::Plain => Ok(HtmlNode::text(text)),
        SpanKind::Bold => Ok(HtmlNode::leaf("b", text)),
        SpanKind::Italic => Ok(HtmlNode::leaf("i", text)),
        SpanKind::Code => Ok(HtmlNode::leaf("code", text)),
        SpanKind::Link => Ok(HtmlNode::leaf("a", text).with_attr("href", required_url(span)?)),
        SpanKind::Image => {
            let attrs: Attributes = [("src", required_url(span)?), ("alt", text)]
                .into_iter()
                .collect();
            Ok(HtmlNode::void("img", attrs))
        }
    }
}

fn required_url(span: &InlineSpan) -> Result<&str, ParseError> {
    span.url.as_deref().ok_or_else(|| ParseError::MissingUrl {
        kind: span.kind,
        text: span.text.clone(),
    })
}

/// Returns the text of the first level-1 heading block.
pub fn extract_title(markdown: &str) -> Result<String, ParseError> {
    segment(markdown)
        .into_iter()
        .find(|block| classify(block) == BlockType::Heading(1))
        .and_then(|block| {
            Heading::strip(&block, 1)
                .lines()
                .next()
                .map(|title| title.trim().to_string())
        })
        .ok_or(ParseError::MissingTitle)
}
