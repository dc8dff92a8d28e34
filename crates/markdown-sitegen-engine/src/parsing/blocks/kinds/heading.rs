/// ATX heading syntax.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 6;

    /// Level of a heading block, or `None` when the block is not one.
    ///
    /// The level is the length of the first space-separated word, which must
    /// be made of `#` only; `#######` and `#hashtag` are not headings.
    pub fn level(block: &str) -> Option<u8> {
        let marker = block.split(' ').next()?;
        if marker.is_empty() || !marker.chars().all(|c| c == Self::MARKER) {
            return None;
        }
        u8::try_from(marker.len())
            .ok()
            .filter(|level| (1..=Self::MAX_LEVEL).contains(level))
    }

    /// Heading text with the `#`s and one following space removed.
    pub fn strip(block: &str, level: u8) -> &str {
        let rest = &block[usize::from(level).min(block.len())..];
        rest.strip_prefix(' ').unwrap_or(rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# H", Some(1))]
    #[case("### Three", Some(3))]
    #[case("###### Six", Some(6))]
    #[case("####### Seven", None)]
    #[case("#hashtag", None)]
    #[case("plain", None)]
    fn detects_level(#[case] block: &str, #[case] expected: Option<u8>) {
        assert_eq!(Heading::level(block), expected);
    }

    #[test]
    fn strip_removes_marker_and_one_space() {
        assert_eq!(Heading::strip("## Two  spaces", 2), "Two  spaces");
        assert_eq!(Heading::strip("#  Indented", 1), " Indented");
    }
}
