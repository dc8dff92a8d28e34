/// Fenced code block syntax. Only backtick fences are recognised.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Whether the block both opens and closes with a fence.
    ///
    /// A lone ```` ``` ```` line is rejected: one fence cannot be its own closer.
    pub fn is_fenced(block: &str) -> bool {
        block.len() >= 2 * Self::BACKTICKS.len()
            && block.starts_with(Self::BACKTICKS)
            && block.ends_with(Self::BACKTICKS)
    }

    /// The lines between the opening and closing fence lines, joined with `\n`.
    pub fn inner(block: &str) -> String {
        let lines: Vec<&str> = block.lines().collect();
        match lines.len() {
            0..=2 => String::new(),
            n => lines[1..n - 1].join("\n"),
        }
    }
}
