use markdown_sitegen_engine::{HtmlNode, compile_document, extract_title};
use pretty_assertions::assert_eq;

const KITCHEN_SINK: &str = "# Tolkien Fan Club

Here's a **deep** _dive_ with `code`, a [link](https://www.boot.dev) and ![an image](/images/rivendell.png)

- Gandalf
- Bilbo

1. Frodo
2. Sam

```
func main() {
    fmt.Println(\"**not bold**\")
}
```

> All that is gold does not glitter
> Not all those who wander are lost
";

fn child_tags(root: &HtmlNode) -> Vec<&str> {
    root.children().iter().filter_map(HtmlNode::tag).collect()
}

#[test]
fn kitchen_sink_has_one_child_per_block() {
    let root = compile_document(KITCHEN_SINK).unwrap();
    assert_eq!(root.tag(), Some("div"));
    assert_eq!(
        child_tags(&root),
        vec!["h1", "p", "ul", "ol", "pre", "blockquote"]
    );
}

#[test]
fn kitchen_sink_html() {
    let html = compile_document(KITCHEN_SINK).unwrap().render().unwrap();
    assert_eq!(
        html,
        r#"<div><h1>Tolkien Fan Club</h1><p>Here's a <b>deep</b> <i>dive</i> with <code>code</code>, a <a href="https://www.boot.dev">link</a> and <img src="/images/rivendell.png" alt="an image" /></p><ul><li>Gandalf</li><li>Bilbo</li></ul><ol><li>Frodo</li><li>Sam</li></ol><pre><code>func main() {
    fmt.Println("**not bold**")
}</code></pre><blockquote>All that is gold does not glitter
Not all those who wander are lost</blockquote></div>"#
    );
}

#[test]
fn kitchen_sink_title() {
    assert_eq!(extract_title(KITCHEN_SINK).unwrap(), "Tolkien Fan Club");
}

#[test]
fn rendering_twice_is_identical() {
    let root = compile_document(KITCHEN_SINK).unwrap();
    assert_eq!(root.render().unwrap(), root.render().unwrap());
}

#[test]
fn malformed_blocks_degrade_to_paragraphs() {
    let html = compile_document("####### seven\n\n1. one\n3. three\n\n- a\nb")
        .unwrap()
        .render()
        .unwrap();
    insta::assert_snapshot!(html, @"<div><p>####### seven</p><p>1. one 3. three</p><p>- a b</p></div>");
}

#[test]
fn unclosed_fence_fails_as_paragraph() {
    // Falls through to a paragraph, where the stray backticks do not pair up
    let err = compile_document("```\nunclosed").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"Invalid Markdown syntax: unmatched delimiter '`' in text '``` unclosed'");
}
