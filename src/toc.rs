//! Anchor slugs and index links shared by the HTML and Markdown renderers.

/// Markdown link for an index item or `@see` target.
///
/// Relative paths and URLs link to themselves, text that is already a
/// markdown link is kept, anything else links to its heading anchor.
pub fn render_toc_link(text: &str) -> String {
    if is_external(text) {
        return format!("[{}]({})", text, text);
    }

    if contains_markdown_link(text) {
        return text.to_string();
    }

    format!("[{}](#{})", text, github_slug(text))
}

/// Markdown index list item.
pub fn render_toc_item(title: &str) -> String {
    format!("* {}", render_toc_link(title))
}

/// Link target for a reference: external targets as is, names as anchors.
pub fn anchor_href(target: &str) -> String {
    if is_external(target) || target.starts_with('#') {
        target.to_string()
    } else {
        format!("#{}", github_slug(target))
    }
}

/// GitHub heading anchor slug.
///
/// Lowercase, keep alphanumerics, spaces and hyphens, then turn spaces into
/// hyphens. Dots and underscores are dropped, so `splunkjs.Service.get`
/// becomes `splunkjsserviceget`.
pub fn github_slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        if c.is_alphanumeric() || c == ' ' || c == '-' {
            slug.push(c);
        }
    }
    slug.replace(' ', "-")
}

fn is_external(text: &str) -> bool {
    text.starts_with('/')
        || text.starts_with("./")
        || text.starts_with("../")
        || text.contains("://")
}

/// Check if text contains a markdown link `[...](...)`.
fn contains_markdown_link(text: &str) -> bool {
    let bytes = text.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if *b != b'[' {
            continue;
        }
        if let Some(close) = text[i + 1..].find(']') {
            let after = i + 1 + close + 1;
            if after < bytes.len() && bytes[after] == b'(' {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_simple() {
        assert_eq!(github_slug("hello world"), "hello-world");
    }

    #[test]
    fn slug_drops_dots() {
        assert_eq!(github_slug("splunkjs.Service"), "splunkjsservice");
        assert_eq!(github_slug("Utils.for_each"), "utilsforeach");
    }

    #[test]
    fn slug_keeps_hyphens() {
        assert_eq!(github_slug("drop-index"), "drop-index");
    }

    #[test]
    fn toc_link_name() {
        assert_eq!(
            render_toc_link("splunkjs.Service"),
            "[splunkjs.Service](#splunkjsservice)"
        );
    }

    #[test]
    fn toc_link_external() {
        assert_eq!(render_toc_link("./other"), "[./other](./other)");
        assert_eq!(
            render_toc_link("https://dev.splunk.com"),
            "[https://dev.splunk.com](https://dev.splunk.com)"
        );
    }

    #[test]
    fn toc_link_existing_markdown() {
        assert_eq!(render_toc_link("[x](y)"), "[x](y)");
    }

    #[test]
    fn toc_item() {
        assert_eq!(render_toc_item("Client"), "* [Client](#client)");
    }

    #[test]
    fn anchors() {
        assert_eq!(anchor_href("Client.get"), "#clientget");
        assert_eq!(anchor_href("https://x.y/z"), "https://x.y/z");
        assert_eq!(anchor_href("#top"), "#top");
    }
}
