/// Blockquote syntax: every line carries the `> ` prefix.
pub struct BlockQuote;

impl BlockQuote {
    pub const PREFIX: &'static str = "> ";

    pub fn matches(block: &str) -> bool {
        block.split('\n').all(|line| line.starts_with(Self::PREFIX))
    }

    /// Quote text with the prefix removed from every line.
    pub fn strip(block: &str) -> String {
        block
            .split('\n')
            .map(|line| line.strip_prefix(Self::PREFIX).unwrap_or(line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_line_must_be_quoted() {
        assert!(BlockQuote::matches("> one\n> two"));
        assert!(!BlockQuote::matches("> This is a quote.\nNot a quote."));
        assert!(!BlockQuote::matches(">no space"));
    }

    #[test]
    fn strip_keeps_line_structure() {
        assert_eq!(BlockQuote::strip("> one\n> two"), "one\ntwo");
    }
}
