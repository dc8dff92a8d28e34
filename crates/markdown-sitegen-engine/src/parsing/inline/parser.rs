use std::ops::Range;

use regex::Captures;

use super::{
    kinds::{Delimiter, LinkSyntax},
    types::{InlineSpan, SpanKind},
};
use crate::parsing::error::ParseError;

/// Splits inline text into an ordered sequence of [`InlineSpan`]s.
///
/// Newlines are collapsed to spaces first. Passes then run in precedence
/// order: bold, italic, code, image, link. Each pass only re-splits `Plain`
/// spans, so text already marked by an earlier pass is opaque to later ones.
///
/// Concatenating the `text` of the result reproduces the collapsed input
/// minus the syntax characters of every recognised construct.
///
/// # Errors
/// [`ParseError::UnmatchedDelimiter`] when a delimiter opens without closing.
pub fn tokenize(text: &str) -> Result<Vec<InlineSpan>, ParseError> {
    let mut spans = vec![InlineSpan::plain(collapse_newlines(text))];
    for delimiter in Delimiter::PASSES {
        spans = split_delimiter(spans, delimiter)?;
    }
    spans = split_images(spans);
    spans = split_links(spans);
    Ok(spans)
}

/// Joins a multi-line inline run into one line.
pub fn collapse_newlines(text: &str) -> String {
    text.replace('\n', " ")
}

/// Re-splits every `Plain` span on `delimiter`, alternating plain and marked text.
///
/// Empty parts are kept so that `**a****b**` yields an empty plain span
/// between the two bold spans.
pub fn split_delimiter(
    spans: Vec<InlineSpan>,
    delimiter: Delimiter,
) -> Result<Vec<InlineSpan>, ParseError> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let parts: Vec<&str> = span.text.split(delimiter.marker).collect();
        // An odd part count means every opener has a closer
        if parts.len() % 2 == 0 {
            return Err(ParseError::UnmatchedDelimiter {
                delimiter: delimiter.marker,
                text: span.text,
            });
        }

        for (i, part) in parts.into_iter().enumerate() {
            let kind = if i % 2 == 0 {
                SpanKind::Plain
            } else {
                delimiter.kind
            };
            out.push(InlineSpan::delimited(part, kind));
        }
    }
    Ok(out)
}

/// Pulls `![alt](url)` images out of every `Plain` span.
pub fn split_images(spans: Vec<InlineSpan>) -> Vec<InlineSpan> {
    split_with(spans, image_matches)
}

/// Pulls `[text](url)` links out of every `Plain` span.
pub fn split_links(spans: Vec<InlineSpan>) -> Vec<InlineSpan> {
    split_with(spans, link_matches)
}

/// Returns `(alt, url)` for every image in `text`.
pub fn extract_images(text: &str) -> Vec<(&str, &str)> {
    LinkSyntax::image_regex()
        .captures_iter(text)
        .map(|caps| label_and_url(&caps, text))
        .collect()
}

/// Returns `(text, url)` for every link in `text`, ignoring images.
pub fn extract_links(text: &str) -> Vec<(&str, &str)> {
    LinkSyntax::link_regex()
        .captures_iter(text)
        .filter(|caps| !is_image(caps, text))
        .map(|caps| label_and_url(&caps, text))
        .collect()
}

/// A recognised construct and the byte range it covers in the source span.
struct Extracted {
    range: Range<usize>,
    span: InlineSpan,
}

fn split_with(spans: Vec<InlineSpan>, find: fn(&str) -> Vec<Extracted>) -> Vec<InlineSpan> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let found = find(&span.text);
        if found.is_empty() {
            // Passes through untouched, even when empty
            out.push(span);
            continue;
        }

        let mut cursor = 0;
        for extracted in found {
            push_plain(&mut out, &span.text[cursor..extracted.range.start]);
            out.push(extracted.span);
            cursor = extracted.range.end;
        }
        push_plain(&mut out, &span.text[cursor..]);
    }
    out
}

/// Emits the text around an extracted construct, skipping it when empty.
fn push_plain(out: &mut Vec<InlineSpan>, text: &str) {
    if !text.is_empty() {
        out.push(InlineSpan::plain(text));
    }
}

fn image_matches(text: &str) -> Vec<Extracted> {
    LinkSyntax::image_regex()
        .captures_iter(text)
        .map(|caps| {
            let (alt, url) = label_and_url(&caps, text);
            Extracted {
                range: whole_match(&caps),
                span: InlineSpan::image(alt, url),
            }
        })
        .collect()
}

fn link_matches(text: &str) -> Vec<Extracted> {
    LinkSyntax::link_regex()
        .captures_iter(text)
        .filter(|caps| !is_image(caps, text))
        .map(|caps| {
            let (label, url) = label_and_url(&caps, text);
            Extracted {
                range: whole_match(&caps),
                span: InlineSpan::link(label, url),
            }
        })
        .collect()
}

fn is_image(caps: &Captures<'_>, text: &str) -> bool {
    LinkSyntax::preceded_by_bang(text, whole_match(caps).start)
}

fn whole_match(caps: &Captures<'_>) -> Range<usize> {
    caps.get(0).map_or(0..0, |m| m.range())
}

fn label_and_url<'t>(caps: &Captures<'_>, text: &'t str) -> (&'t str, &'t str) {
    let group = |i| caps.get(i).map_or("", |m| &text[m.range()]);
    (group(1), group(2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn plain_text_is_one_span() {
        assert_eq!(
            tokenize("just words").unwrap(),
            vec![InlineSpan::plain("just words")]
        );
    }

    #[test]
    fn code_span_in_the_middle() {
        assert_eq!(
            tokenize("text `code` end").unwrap(),
            vec![
                InlineSpan::plain("text "),
                InlineSpan::code("code"),
                InlineSpan::plain(" end"),
            ]
        );
    }

    #[test]
    fn leading_delimiter_keeps_empty_plain_span() {
        assert_eq!(
            tokenize("**bold** text").unwrap(),
            vec![
                InlineSpan::plain(""),
                InlineSpan::bold("bold"),
                InlineSpan::plain(" text"),
            ]
        );
    }

    #[test]
    fn adjacent_bold_spans_keep_the_empty_gap() {
        assert_eq!(
            tokenize("**a****b**").unwrap(),
            vec![
                InlineSpan::plain(""),
                InlineSpan::bold("a"),
                InlineSpan::plain(""),
                InlineSpan::bold("b"),
                InlineSpan::plain(""),
            ]
        );
    }

    #[test]
    fn every_kind_in_one_line() {
        let spans = tokenize(
            "This is **bold** and _italic_ with `code`, \
             ![cat](/cat.png) and [home](https://example.com)",
        )
        .unwrap();
        assert_eq!(
            spans,
            vec![
                InlineSpan::plain("This is "),
                InlineSpan::bold("bold"),
                InlineSpan::plain(" and "),
                InlineSpan::italic("italic"),
                InlineSpan::plain(" with "),
                InlineSpan::code("code"),
                InlineSpan::plain(", "),
                InlineSpan::image("cat", "/cat.png"),
                InlineSpan::plain(" and "),
                InlineSpan::link("home", "https://example.com"),
            ]
        );
    }

    #[rstest]
    #[case("a `b", "`")]
    #[case("**open bold", "**")]
    #[case("some _italic", "_")]
    fn unmatched_delimiter_fails(#[case] input: &str, #[case] delimiter: &str) {
        let err = tokenize(input).unwrap_err();
        assert_eq!(
            err,
            ParseError::UnmatchedDelimiter {
                delimiter: Delimiter::PASSES
                    .iter()
                    .find(|d| d.marker == delimiter)
                    .unwrap()
                    .marker,
                text: input.to_string(),
            }
        );
    }

    #[test]
    fn unmatched_delimiter_error_names_delimiter_and_text() {
        let err = tokenize("a `b").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid Markdown syntax: unmatched delimiter '`' in text 'a `b'"
        );
    }

    #[test]
    fn newlines_collapse_to_spaces() {
        assert_eq!(
            tokenize("first line\nsecond _line_").unwrap(),
            vec![
                InlineSpan::plain("first line second "),
                InlineSpan::italic("line"),
                InlineSpan::plain(""),
            ]
        );
    }

    #[test]
    fn code_span_is_a_raw_zone_for_links() {
        assert_eq!(
            tokenize("`[not](link)`").unwrap(),
            vec![
                InlineSpan::plain(""),
                InlineSpan::code("[not](link)"),
                InlineSpan::plain(""),
            ]
        );
    }

    #[test]
    fn bold_wins_over_code_markers_inside_it() {
        assert_eq!(
            tokenize("**a `b` c**").unwrap(),
            vec![
                InlineSpan::plain(""),
                InlineSpan::bold("a `b` c"),
                InlineSpan::plain(""),
            ]
        );
    }

    #[test]
    fn consecutive_links_emit_no_empty_spans() {
        assert_eq!(
            tokenize("[a](/a)[b](/b)").unwrap(),
            vec![InlineSpan::link("a", "/a"), InlineSpan::link("b", "/b")]
        );
    }

    #[test]
    fn image_is_not_also_a_link() {
        assert_eq!(
            tokenize("![logo](/logo.svg)").unwrap(),
            vec![InlineSpan::image("logo", "/logo.svg")]
        );
    }

    #[test]
    fn image_then_link() {
        assert_eq!(
            tokenize("![a](/a.png) then [b](/b)").unwrap(),
            vec![
                InlineSpan::image("a", "/a.png"),
                InlineSpan::plain(" then "),
                InlineSpan::link("b", "/b"),
            ]
        );
    }

    #[rstest]
    #[case("plain words only")]
    #[case("mixed **bold** _it_ `code`")]
    #[case("multi\nline\ntext with `code`")]
    fn span_text_reproduces_input_without_delimiters(#[case] input: &str) {
        let joined: String = tokenize(input)
            .unwrap()
            .into_iter()
            .map(|s| s.text)
            .collect();
        let expected = collapse_newlines(input)
            .replace("**", "")
            .replace(['_', '`'], "");
        assert_eq!(joined, expected);
    }

    #[test]
    fn extract_images_returns_alt_and_url() {
        assert_eq!(
            extract_images("![one](/1.png) and ![two](/2.png)"),
            vec![("one", "/1.png"), ("two", "/2.png")]
        );
    }

    #[test]
    fn extract_links_skips_images() {
        assert_eq!(
            extract_links("![img](/i.png) [link](/l)"),
            vec![("link", "/l")]
        );
    }

    #[test]
    fn non_plain_spans_pass_through_link_extraction() {
        let spans = vec![InlineSpan::code("[x](y)")];
        assert_eq!(split_links(spans.clone()), spans);
    }
}
