use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockType,
};

/// Classifies a segmented block. The first matching rule wins:
///
/// 1. `#`..`######` followed by a space: heading (more `#`s fall through)
/// 2. opens and closes with a backtick fence: code
/// 3. every line `> `: quote
/// 4. every line `- `: unordered list
/// 5. every line `{n}. ` with `n` counting from 1: ordered list
/// 6. anything else: paragraph
pub fn classify(block: &str) -> BlockType {
    if block.starts_with(Heading::MARKER) {
        return Heading::level(block).map_or(BlockType::Paragraph, BlockType::Heading);
    }
    if CodeFence::is_fenced(block) {
        return BlockType::Code;
    }
    if BlockQuote::matches(block) {
        return BlockType::Quote;
    }
    if UnorderedList::matches(block) {
        return BlockType::UnorderedList;
    }
    if OrderedList::matches(block) {
        return BlockType::OrderedList;
    }
    BlockType::Paragraph
}
