/// `- item` lists.
pub struct UnorderedList;

impl UnorderedList {
    pub const BULLET: &'static str = "- ";

    pub fn matches(block: &str) -> bool {
        block.split('\n').all(|line| line.starts_with(Self::BULLET))
    }

    pub fn items(block: &str) -> Vec<&str> {
        block
            .split('\n')
            .map(|line| line.strip_prefix(Self::BULLET).unwrap_or(line))
            .collect()
    }
}

/// `1. item` lists, numbered from one without gaps.
pub struct OrderedList;

impl OrderedList {
    pub const SEPARATOR: &'static str = ". ";

    pub fn matches(block: &str) -> bool {
        block
            .split('\n')
            .enumerate()
            .all(|(i, line)| line.starts_with(&format!("{}{}", i + 1, Self::SEPARATOR)))
    }

    /// Item text with everything up to the first `. ` removed.
    pub fn items(block: &str) -> Vec<&str> {
        block
            .split('\n')
            .map(|line| match line.find(Self::SEPARATOR) {
                Some(idx) => &line[idx + Self::SEPARATOR.len()..],
                None => line,
            })
            .collect()
    }
}
