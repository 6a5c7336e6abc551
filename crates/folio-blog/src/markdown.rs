//! Restricted markdown-to-markup conversion.
//!
//! A best-effort subset renderer, not a compliant markdown parser: headers
//! (`#`..`###`), blank-line paragraphs, `**bold**`, `*italic*`, inline
//! code, fenced code blocks, `[text](url)` links, and flat `- ` lists.
//! Anything else passes through as literal text. Pass order matters:
//! fences and headers are taken out of the stream before paragraph
//! wrapping so they never end up inside `<p>` tags.
//!
//! The output is markup, not markdown; feeding it back in is unsupported.

/// Convert a markdown document to structural markup.
pub fn to_markup(markdown: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut para: Vec<String> = Vec::new();
    let mut list: Vec<String> = Vec::new();
    let mut fence: Option<Vec<String>> = None;

    for line in markdown.lines() {
        if let Some(code) = fence.as_mut() {
            if line.trim_start().starts_with("```") {
                out.push(format!("<pre><code>{}</code></pre>", code.join("\n")));
                fence = None;
            } else {
                code.push(line.to_string());
            }
            continue;
        }

        let trimmed = line.trim_end();
        if trimmed.trim_start().starts_with("```") {
            flush_para(&mut para, &mut out);
            flush_list(&mut list, &mut out);
            fence = Some(Vec::new());
        } else if let Some(rest) = trimmed.strip_prefix("### ") {
            flush_para(&mut para, &mut out);
            flush_list(&mut list, &mut out);
            out.push(format!("<h3>{}</h3>", inline(rest)));
        } else if let Some(rest) = trimmed.strip_prefix("## ") {
            flush_para(&mut para, &mut out);
            flush_list(&mut list, &mut out);
            out.push(format!("<h2>{}</h2>", inline(rest)));
        } else if let Some(rest) = trimmed.strip_prefix("# ") {
            flush_para(&mut para, &mut out);
            flush_list(&mut list, &mut out);
            out.push(format!("<h1>{}</h1>", inline(rest)));
        } else if let Some(item) = trimmed.strip_prefix("- ") {
            flush_para(&mut para, &mut out);
            list.push(format!("<li>{}</li>", inline(item)));
        } else if trimmed.is_empty() {
            flush_para(&mut para, &mut out);
            flush_list(&mut list, &mut out);
        } else {
            flush_list(&mut list, &mut out);
            para.push(trimmed.to_string());
        }
    }

    // An unterminated fence still renders as a code block.
    if let Some(code) = fence {
        out.push(format!("<pre><code>{}</code></pre>", code.join("\n")));
    }
    flush_para(&mut para, &mut out);
    flush_list(&mut list, &mut out);

    out.join("\n")
}

fn flush_para(para: &mut Vec<String>, out: &mut Vec<String>) {
    if !para.is_empty() {
        out.push(format!("<p>{}</p>", inline(&para.join("\n"))));
        para.clear();
    }
}

fn flush_list(list: &mut Vec<String>, out: &mut Vec<String>) {
    if !list.is_empty() {
        out.push(format!("<ul>{}</ul>", list.join("")));
        list.clear();
    }
}

/// Inline substitutions. Code spans come first and their contents are
/// protected from the emphasis and link passes.
fn inline(text: &str) -> String {
    let mut out = String::new();
    let mut rest = text;
    while let Some(start) = rest.find('`') {
        match rest[start + 1..].find('`') {
            Some(len) => {
                out.push_str(&spans(&rest[..start]));
                out.push_str("<code>");
                out.push_str(&rest[start + 1..start + 1 + len]);
                out.push_str("</code>");
                rest = &rest[start + len + 2..];
            },
            None => {
                // Unpaired backtick: literal.
                out.push_str(&spans(rest));
                return out;
            },
        }
    }
    out.push_str(&spans(rest));
    out
}

fn spans(text: &str) -> String {
    let linked = links(text);
    let bolded = wrap_pairs(&linked, "**", "strong");
    wrap_pairs(&bolded, "*", "em")
}

/// `[label](url)` -> `<a href="url">label</a>`.
fn links(text: &str) -> String {
    let mut out = String::new();
    let mut rest = text;
    while let Some(open) = rest.find('[') {
        if let Some(mid) = rest[open..].find("](") {
            let mid = open + mid;
            if let Some(end) = rest[mid + 2..].find(')') {
                let label = &rest[open + 1..mid];
                let url = &rest[mid + 2..mid + 2 + end];
                out.push_str(&rest[..open]);
                out.push_str(&format!("<a href=\"{url}\">{label}</a>"));
                rest = &rest[mid + 3 + end..];
                continue;
            }
        }
        // Not a complete link; keep the bracket literal and move on.
        out.push_str(&rest[..=open]);
        rest = &rest[open + 1..];
    }
    out.push_str(rest);
    out
}

/// Wrap text between balanced `delim` pairs in `<tag>..</tag>`.
fn wrap_pairs(text: &str, delim: &str, tag: &str) -> String {
    let mut out = String::new();
    let mut rest = text;
    while let Some(start) = rest.find(delim) {
        match rest[start + delim.len()..].find(delim) {
            Some(len) => {
                let inner = &rest[start + delim.len()..start + delim.len() + len];
                out.push_str(&rest[..start]);
                out.push_str(&format!("<{tag}>{inner}</{tag}>"));
                rest = &rest[start + 2 * delim.len() + len..];
            },
            None => break,
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_and_paragraph() {
        assert_eq!(
            to_markup("# Title\n\nBody **bold**."),
            "<h1>Title</h1>\n<p>Body <strong>bold</strong>.</p>"
        );
    }

    #[test]
    fn all_header_levels() {
        assert_eq!(
            to_markup("# One\n## Two\n### Three"),
            "<h1>One</h1>\n<h2>Two</h2>\n<h3>Three</h3>"
        );
    }

    #[test]
    fn headers_are_never_paragraph_wrapped() {
        let html = to_markup("intro\n# Title\noutro");
        assert!(!html.contains("<p><h1>"));
        assert!(html.contains("<h1>Title</h1>"));
    }

    #[test]
    fn fenced_code_is_verbatim() {
        let html = to_markup("```\nlet x = **not bold**;\n```");
        assert_eq!(html, "<pre><code>let x = **not bold**;</code></pre>");
    }

    #[test]
    fn fence_interrupts_paragraph() {
        let html = to_markup("before\n```\ncode\n```\nafter");
        assert_eq!(
            html,
            "<p>before</p>\n<pre><code>code</code></pre>\n<p>after</p>"
        );
    }

    #[test]
    fn unterminated_fence_still_renders() {
        let html = to_markup("```\ndangling");
        assert_eq!(html, "<pre><code>dangling</code></pre>");
    }

    #[test]
    fn inline_code_protects_contents() {
        assert_eq!(
            to_markup("use `**raw**` here"),
            "<p>use <code>**raw**</code> here</p>"
        );
    }

    #[test]
    fn italic_and_bold() {
        assert_eq!(
            to_markup("*em* and **strong**"),
            "<p><em>em</em> and <strong>strong</strong></p>"
        );
    }

    #[test]
    fn links_render_anchors() {
        assert_eq!(
            to_markup("see [docs](https://example.com/x)"),
            "<p>see <a href=\"https://example.com/x\">docs</a></p>"
        );
    }

    #[test]
    fn incomplete_link_stays_literal() {
        assert_eq!(to_markup("just [a bracket"), "<p>just [a bracket</p>");
    }

    #[test]
    fn simple_list() {
        assert_eq!(
            to_markup("- one\n- two"),
            "<ul><li>one</li><li>two</li></ul>"
        );
    }

    #[test]
    fn list_then_paragraph() {
        assert_eq!(
            to_markup("- item\nplain text"),
            "<ul><li>item</li></ul>\n<p>plain text</p>"
        );
    }

    #[test]
    fn paragraph_keeps_single_newlines() {
        assert_eq!(to_markup("line one\nline two"), "<p>line one\nline two</p>");
    }

    #[test]
    fn unsupported_constructs_pass_through() {
        let html = to_markup("> not a quote we support");
        assert_eq!(html, "<p>> not a quote we support</p>");
    }

    #[test]
    fn unpaired_emphasis_stays_literal() {
        assert_eq!(to_markup("a * b"), "<p>a * b</p>");
    }
}
