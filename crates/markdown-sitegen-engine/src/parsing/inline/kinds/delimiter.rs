use crate::parsing::inline::types::SpanKind;

/// A symmetric delimiter: the same marker opens and closes the span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiter {
    pub marker: &'static str,
    pub kind: SpanKind,
}

impl Delimiter {
    pub const BOLD: Delimiter = Delimiter {
        marker: "**",
        kind: SpanKind::Bold,
    };

    pub const ITALIC: Delimiter = Delimiter {
        marker: "_",
        kind: SpanKind::Italic,
    };

    /// Code spans are raw zones: once marked, nothing inside is reinterpreted.
    pub const CODE: Delimiter = Delimiter {
        marker: "`",
        kind: SpanKind::Code,
    };

    /// Delimiter passes in precedence order.
    pub const PASSES: [Delimiter; 3] = [Self::BOLD, Self::ITALIC, Self::CODE];
}
