//! Best-effort formatter for assistant replies.
//!
//! Replies use a constrained markdown-like subset: a line prefix picks the
//! block kind, and `**` pairs inside a line mark bold runs. The formatter is
//! line-oriented and non-recursive; it never builds a tree and malformed
//! input falls through as literal text.

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Bold(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    Heading1(Vec<Inline>),
    Heading2(Vec<Inline>),
    ListItem(Vec<Inline>),
    Paragraph(Vec<Inline>),
}

/// Split a reply into display blocks, one per input line.
pub fn parse_message(text: &str) -> Vec<Block> {
    text.lines().map(parse_line).collect()
}

fn parse_line(line: &str) -> Block {
    if let Some(rest) = line.strip_prefix("# ") {
        return Block::Heading1(parse_inline(rest));
    }
    if let Some(rest) = line.strip_prefix("## ") {
        return Block::Heading2(parse_inline(rest));
    }
    if let Some(rest) = line.strip_prefix("- ") {
        return Block::ListItem(parse_inline(rest));
    }
    if let Some(rest) = ordered_item_content(line) {
        return Block::ListItem(parse_inline(rest));
    }
    Block::Paragraph(parse_inline(line))
}

/// A line opening with digits followed by a dot is an ordered list item; its
/// content is everything after the first dot, trimmed.
fn ordered_item_content(line: &str) -> Option<&str> {
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 || !line[digits..].starts_with('.') {
        return None;
    }
    Some(line[digits + 1..].trim())
}

/// Split a line into literal and bold runs. A bold run is the text between a
/// `**` pair, asterisks stripped; a `**` with no closing partner stays
/// literal.
pub fn parse_inline(line: &str) -> Vec<Inline> {
    let mut spans = Vec::new();
    let mut rest = line;

    while let Some(open) = rest.find("**") {
        let Some(close) = rest[open + 2..].find("**") else {
            break;
        };
        if open > 0 {
            spans.push(Inline::Text(rest[..open].to_string()));
        }
        spans.push(Inline::Bold(rest[open + 2..open + 2 + close].to_string()));
        rest = &rest[open + 2 + close + 2..];
    }

    if !rest.is_empty() {
        spans.push(Inline::Text(rest.to_string()));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Inline {
        Inline::Text(s.to_string())
    }

    fn bold(s: &str) -> Inline {
        Inline::Bold(s.to_string())
    }

    #[test]
    fn heading_one() {
        assert_eq!(
            parse_message("# Title"),
            vec![Block::Heading1(vec![text("Title")])]
        );
    }

    #[test]
    fn heading_two() {
        assert_eq!(
            parse_message("## Section"),
            vec![Block::Heading2(vec![text("Section")])]
        );
    }

    #[test]
    fn heading_marker_needs_trailing_space() {
        assert_eq!(
            parse_message("#Title"),
            vec![Block::Paragraph(vec![text("#Title")])]
        );
    }

    #[test]
    fn dash_list_item() {
        assert_eq!(
            parse_message("- item"),
            vec![Block::ListItem(vec![text("item")])]
        );
    }

    #[test]
    fn ordered_list_item() {
        assert_eq!(
            parse_message("1. first"),
            vec![Block::ListItem(vec![text("first")])]
        );
        assert_eq!(
            parse_message("12. twelfth"),
            vec![Block::ListItem(vec![text("twelfth")])]
        );
    }

    #[test]
    fn ordered_item_content_is_after_first_dot() {
        // "12.5 things" classifies as ordered; content starts past the dot.
        assert_eq!(
            parse_message("12.5 things"),
            vec![Block::ListItem(vec![text("5 things")])]
        );
    }

    #[test]
    fn digits_without_dot_are_a_paragraph() {
        assert_eq!(
            parse_message("1944 was a year"),
            vec![Block::Paragraph(vec![text("1944 was a year")])]
        );
    }

    #[test]
    fn plain_line_is_a_paragraph() {
        assert_eq!(
            parse_message("just text"),
            vec![Block::Paragraph(vec![text("just text")])]
        );
    }

    #[test]
    fn empty_line_is_an_empty_paragraph() {
        assert_eq!(parse_message(""), vec![Block::Paragraph(vec![])]);
        assert_eq!(
            parse_message("a\n\nb"),
            vec![
                Block::Paragraph(vec![text("a")]),
                Block::Paragraph(vec![]),
                Block::Paragraph(vec![text("b")]),
            ]
        );
    }

    #[test]
    fn bold_run_strips_asterisks() {
        assert_eq!(parse_inline("**bold**"), vec![bold("bold")]);
    }

    #[test]
    fn bold_run_in_context() {
        assert_eq!(
            parse_inline("a **b** c"),
            vec![text("a "), bold("b"), text(" c")]
        );
    }

    #[test]
    fn multiple_bold_runs() {
        assert_eq!(
            parse_inline("**x** and **y**"),
            vec![bold("x"), text(" and "), bold("y")]
        );
    }

    #[test]
    fn unpaired_marker_stays_literal() {
        assert_eq!(parse_inline("**open"), vec![text("**open")]);
        assert_eq!(
            parse_inline("a **b** c **d"),
            vec![text("a "), bold("b"), text(" c **d")]
        );
    }

    #[test]
    fn adjacent_markers_make_an_empty_bold_run() {
        assert_eq!(parse_inline("****"), vec![bold("")]);
    }

    #[test]
    fn bold_inside_heading() {
        assert_eq!(
            parse_message("# A **big** title"),
            vec![Block::Heading1(vec![
                text("A "),
                bold("big"),
                text(" title"),
            ])]
        );
    }

    #[test]
    fn mixed_reply() {
        assert_eq!(
            parse_message("## Summary\n- point one\n**key** finding"),
            vec![
                Block::Heading2(vec![text("Summary")]),
                Block::ListItem(vec![text("point one")]),
                Block::Paragraph(vec![bold("key"), text(" finding")]),
            ]
        );
    }
}
