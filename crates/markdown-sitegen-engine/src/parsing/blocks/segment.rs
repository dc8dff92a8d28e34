/// Splits a document into blocks on blank lines.
///
/// Runs of two or more newlines separate blocks. Each block is trimmed and
/// blocks that are empty after trimming are dropped, so whitespace-only
/// input yields no blocks. CRLF line endings are read as `\n`.
pub fn segment(document: &str) -> Vec<String> {
    document
        .replace("\r\n", "\n")
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(str::to_string)
        .collect()
}
