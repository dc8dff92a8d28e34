/// Structural problems found while serialising a node tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("Leaf node {} has an empty value", describe(.tag.as_deref()))]
    EmptyValue { tag: Option<String> },

    #[error("Node <{tag}> has neither children nor a value")]
    MissingContent { tag: String },

    #[error("Node with children has no tag")]
    MissingTag,
}

fn describe(tag: Option<&str>) -> String {
    match tag {
        Some(tag) if !tag.is_empty() => format!("<{tag}>"),
        _ => "(untagged)".to_string(),
    }
}
