/// The syntactic type of a block, decided by [`classify`](super::classify).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    /// `#` to `######`, carrying the level 1..=6.
    Heading(u8),
    /// A block opened and closed by a ```` ``` ```` fence.
    Code,
    /// Every line starts with `> `.
    Quote,
    /// Every line starts with `- `.
    UnorderedList,
    /// Lines numbered `1. `, `2. `, ... without gaps.
    OrderedList,
    /// Default when nothing else matches.
    Paragraph,
}
