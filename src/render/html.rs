//! HTML renderer: standalone HTML page with semantic markup.
//!
//! Descriptions arrive from the comment parser as HTML and are inserted as
//! is; everything else is escaped.

use crate::entry::Entry;
use crate::module::ModuleEntry;
use crate::render::template::{Template, TemplateValues};
use crate::render::{RenderModel, Renderer};
use crate::toc;
use std::borrow::Cow;

const DEFAULT_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>${title}</title>
<style>
body { font-family: system-ui, sans-serif; max-width: 56em; margin: 2em auto; padding: 0 1em; }
code { background: #f4f4f4; padding: 0.15em 0.3em; border-radius: 3px; }
pre { background: #f4f4f4; padding: 1em; border-radius: 5px; overflow-x: auto; }
dt { font-weight: bold; margin-top: 0.5em; }
dd { margin-left: 1.5em; }
.tag { display: inline-block; font-size: 0.75em; padding: 0.1em 0.4em; border-radius: 3px; margin-left: 0.5em; background: #e0e0e0; }
.tag-constructor { background: #4eaa25; color: white; }
.source { font-size: 0.85em; }
</style>
</head>
<body>
<header><h1>${title}</h1><p class="version">Version ${version}</p></header>
${content}
<script type="application/json" id="doc-model">${raw}</script>
</body>
</html>
"#;

pub struct HtmlRenderer {
    page: Cow<'static, str>,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self {
            page: Cow::Borrowed(DEFAULT_PAGE),
        }
    }

    /// Use a custom page shell. It is compiled on each render, so a broken
    /// template fails the run instead of this call.
    pub fn with_page(source: impl Into<String>) -> Self {
        Self {
            page: Cow::Owned(source.into()),
        }
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, model: &RenderModel) -> anyhow::Result<String> {
        let page = Template::compile(&self.page)?;

        let mut content = String::new();

        // Index
        if !model.modules.is_empty() {
            content.push_str("<nav>\n<h2>Modules</h2>\n<ul>\n");
            for module in &model.modules {
                content.push_str(&format!(
                    "  <li><a href=\"#{}\">{}</a></li>\n",
                    html_escape(&toc::github_slug(module.name())),
                    html_escape(module.name())
                ));
            }
            content.push_str("</ul>\n</nav>\n");
        }

        for module in &model.modules {
            content.push_str(&render_module_html(module));
        }

        let title = model.title();
        Ok(page.render(&TemplateValues {
            title: &html_escape(&title),
            version: &html_escape(&model.version),
            content: &content,
            raw: &script_escape(&model.raw),
        }))
    }

    fn file_extension(&self) -> &str {
        "html"
    }
}

fn render_module_html(module: &ModuleEntry) -> String {
    let mut out = String::new();
    let entry = &module.entry;

    out.push_str(&format!(
        "<section class=\"module\" id=\"{}\">\n<h2>{}</h2>\n",
        html_escape(&toc::github_slug(&entry.name)),
        html_escape(&entry.name)
    ));

    if entry.is_extends {
        out.push_str(&format!(
            "<p class=\"extends\">Extends <a href=\"{}\">{}</a></p>\n",
            html_escape(&toc::anchor_href(&entry.extends)),
            html_escape(&entry.extends)
        ));
    }

    if !entry.full_description.is_empty() {
        out.push_str(&format!(
            "<div class=\"description\">{}</div>\n",
            entry.full_description
        ));
    }

    if !module.methods.is_empty() {
        out.push_str("<h3>Methods</h3>\n");
        for method in &module.methods {
            out.push_str(&render_entry_html(method));
        }
    }

    if module.has_globals {
        out.push_str("<h3>Globals</h3>\n");
        for helper in &module.helpers {
            out.push_str(&render_entry_html(helper));
        }
    }

    out.push_str("</section>\n");
    out
}

fn render_entry_html(entry: &Entry) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "<div class=\"entry\" id=\"{}\">\n<h4><code>{}</code>",
        html_escape(&toc::github_slug(&entry.signature)),
        html_escape(&entry.signature)
    ));
    if let Some(ref kind) = entry.kind {
        out.push_str(&format!(
            " <span class=\"tag tag-{}\">{}</span>",
            html_escape(kind),
            html_escape(kind)
        ));
    }
    out.push_str("</h4>\n");

    if !entry.full_description.is_empty() {
        out.push_str(&format!(
            "<div class=\"description\">{}</div>\n",
            entry.full_description
        ));
    }

    if entry.has_params {
        out.push_str("<h5>Parameters</h5>\n<dl>\n");
        for param in &entry.params {
            out.push_str(&format!(
                "  <dt><code>{}</code>",
                html_escape(param.name.as_deref().unwrap_or(""))
            ));
            if !param.types.is_empty() {
                out.push_str(&format!(" <em>{}</em>", html_escape(&param.types.join(" | "))));
            }
            out.push_str("</dt>\n");
            if let Some(ref desc) = param.description {
                out.push_str(&format!("  <dd>{}</dd>\n", desc));
            }
        }
        out.push_str("</dl>\n");
    }

    if let Some(ref returns) = entry.returns {
        out.push_str("<h5>Returns</h5>\n<p>");
        if !returns.types.is_empty() {
            out.push_str(&format!("<em>{}</em> ", html_escape(&returns.types.join(" | "))));
        }
        out.push_str(returns.description.as_deref().unwrap_or(""));
        out.push_str("</p>\n");
    }

    if !entry.code.is_empty() {
        out.push_str(&format!(
            "<pre><code class=\"language-javascript\">{}</code></pre>\n",
            html_escape(&entry.code)
        ));
    }

    if let Some(ref related) = entry.related {
        if !related.href.is_empty() {
            out.push_str(&format!(
                "<p class=\"related\">See <a href=\"{}\">{}</a></p>\n",
                html_escape(&toc::anchor_href(&related.href)),
                html_escape(&related.name)
            ));
        }
    }

    if !entry.filename.is_empty() {
        let (href, label) = match entry.line {
            Some(line) => (
                format!("{}#L{}", entry.url, line),
                format!("{}:{}", entry.filename, line),
            ),
            None => (entry.url.clone(), entry.filename.clone()),
        };
        out.push_str(&format!(
            "<p class=\"source\"><a href=\"{}\">{}</a></p>\n",
            html_escape(&href),
            html_escape(&label)
        ));
    }

    out.push_str("</div>\n");
    out
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Keep embedded JSON from closing its `<script>` element.
fn script_escape(s: &str) -> String {
    s.replace("</", "<\\/")
}
