use super::{attributes::Attributes, error::RenderError};

/// One element of the output tree.
///
/// Each node exclusively owns its children. Shape rules are checked when
/// rendering, so a tree can be assembled freely and validated once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// Text content with no children. An untagged leaf renders as its raw value.
    Leaf {
        tag: Option<String>,
        value: String,
        attrs: Attributes,
    },
    /// A tagged element wrapping one or more children.
    Parent {
        tag: String,
        children: Vec<HtmlNode>,
        attrs: Attributes,
    },
    /// A node built incrementally, such as the document root.
    ///
    /// Children take precedence over `value` when both are present.
    Container {
        tag: Option<String>,
        value: Option<String>,
        children: Vec<HtmlNode>,
        attrs: Attributes,
    },
    /// A self-closing element that only carries attributes, e.g. `<img />`.
    Void { tag: String, attrs: Attributes },
}

impl HtmlNode {
    /// Untagged text, flattened into the parent's markup.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: value.into(),
            attrs: Attributes::new(),
        }
    }

    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: value.into(),
            attrs: Attributes::new(),
        }
    }

    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: tag.into(),
            children,
            attrs: Attributes::new(),
        }
    }

    /// An empty container; fill it with [`HtmlNode::push_child`].
    pub fn container(tag: impl Into<String>) -> Self {
        HtmlNode::Container {
            tag: Some(tag.into()),
            value: None,
            children: Vec::new(),
            attrs: Attributes::new(),
        }
    }

    pub fn void(tag: impl Into<String>, attrs: Attributes) -> Self {
        HtmlNode::Void {
            tag: tag.into(),
            attrs,
        }
    }

    /// Adds an attribute, replacing any previous value for `key`.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs_mut().insert(key, value);
        self
    }

    pub fn attrs(&self) -> &Attributes {
        match self {
            HtmlNode::Leaf { attrs, .. }
            | HtmlNode::Parent { attrs, .. }
            | HtmlNode::Container { attrs, .. }
            | HtmlNode::Void { attrs, .. } => attrs,
        }
    }

    fn attrs_mut(&mut self) -> &mut Attributes {
        match self {
            HtmlNode::Leaf { attrs, .. }
            | HtmlNode::Parent { attrs, .. }
            | HtmlNode::Container { attrs, .. }
            | HtmlNode::Void { attrs, .. } => attrs,
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { tag, .. } | HtmlNode::Container { tag, .. } => tag.as_deref(),
            HtmlNode::Parent { tag, .. } | HtmlNode::Void { tag, .. } => Some(tag.as_str()),
        }
    }

    /// Child nodes; empty for leaves and void elements.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Parent { children, .. } | HtmlNode::Container { children, .. } => {
                children.as_slice()
            }
            HtmlNode::Leaf { .. } | HtmlNode::Void { .. } => &[],
        }
    }

    /// Appends a child to a `Parent` or `Container`.
    ///
    /// Returns the child back when this node cannot hold children.
    pub fn push_child(&mut self, child: HtmlNode) -> Result<(), HtmlNode> {
        match self {
            HtmlNode::Parent { children, .. } | HtmlNode::Container { children, .. } => {
                children.push(child);
                Ok(())
            }
            HtmlNode::Leaf { .. } | HtmlNode::Void { .. } => Err(child),
        }
    }

    /// Serialises the tree to an HTML fragment.
    ///
    /// Rendering is pure: the same tree always yields the same string.
    pub fn render(&self) -> Result<String, RenderError> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    pub fn render_into(&self, out: &mut String) -> Result<(), RenderError> {
        match self {
            HtmlNode::Leaf { tag, value, attrs } => {
                if value.is_empty() {
                    return Err(RenderError::EmptyValue { tag: tag.clone() });
                }
                match non_empty(tag.as_deref()) {
                    None => out.push_str(value),
                    Some(tag) => write_element(out, tag, attrs, |out| {
                        out.push_str(value);
                        Ok(())
                    })?,
                }
                Ok(())
            }
            HtmlNode::Parent {
                tag,
                children,
                attrs,
            } => {
                let tag = non_empty(Some(tag.as_str())).ok_or(RenderError::MissingTag)?;
                if children.is_empty() {
                    return Err(RenderError::MissingContent {
                        tag: tag.to_string(),
                    });
                }
                write_element(out, tag, attrs, |out| render_children(children, out))
            }
            HtmlNode::Container {
                tag,
                value,
                children,
                attrs,
            } => {
                let tag = non_empty(tag.as_deref()).ok_or(RenderError::MissingTag)?;
                if !children.is_empty() {
                    return write_element(out, tag, attrs, |out| render_children(children, out));
                }
                match value.as_deref() {
                    Some(value) if !value.is_empty() => write_element(out, tag, attrs, |out| {
                        out.push_str(value);
                        Ok(())
                    }),
                    _ => Err(RenderError::MissingContent {
                        tag: tag.to_string(),
                    }),
                }
            }
            HtmlNode::Void { tag, attrs } => {
                let tag = non_empty(Some(tag.as_str())).ok_or(RenderError::MissingTag)?;
                out.push('<');
                out.push_str(tag);
                attrs.render_into(out);
                out.push_str(" />");
                Ok(())
            }
        }
    }
}

fn non_empty(tag: Option<&str>) -> Option<&str> {
    tag.filter(|t| !t.is_empty())
}

fn render_children(children: &[HtmlNode], out: &mut String) -> Result<(), RenderError> {
    children.iter().try_for_each(|child| child.render_into(out))
}

fn write_element(
    out: &mut String,
    tag: &str,
    attrs: &Attributes,
    body: impl FnOnce(&mut String) -> Result<(), RenderError>,
) -> Result<(), RenderError> {
    out.push('<');
    out.push_str(tag);
    attrs.render_into(out);
    out.push('>');
    body(out)?;
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
    Ok(())
}
