//! GitHub-flavored markdown renderer.
//!
//! One `##` section per module with an index on top; methods and helpers get
//! `####` headings so their anchors match the index links.

use crate::comment::RawTag;
use crate::entry::Entry;
use crate::module::ModuleEntry;
use crate::render::{RenderModel, Renderer};
use crate::toc;

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, model: &RenderModel) -> anyhow::Result<String> {
        let mut output = String::new();

        output.push_str(&format!("# {}\n\n", model.title()));

        if !model.modules.is_empty() {
            output.push_str("## Index\n\n");
            for module in &model.modules {
                output.push_str(&toc::render_toc_item(module.name()));
                output.push('\n');
            }
            output.push('\n');
        }

        for module in &model.modules {
            output.push_str(&render_module(module));
            output.push('\n');
        }

        Ok(output)
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

fn render_module(module: &ModuleEntry) -> String {
    let mut lines: Vec<String> = Vec::new();
    let entry = &module.entry;

    lines.push(format!("## {}\n", entry.name));

    if entry.is_extends {
        lines.push(format!("> Extends {}\n", toc::render_toc_link(&entry.extends)));
    }

    if !entry.full_description.is_empty() {
        lines.push(entry.full_description.clone());
        lines.push(String::new());
    }

    if !module.methods.is_empty() {
        lines.push("### Methods\n".to_string());
        for method in &module.methods {
            lines.push(render_entry(method));
        }
    }

    if module.has_globals {
        lines.push("### Globals\n".to_string());
        for helper in &module.helpers {
            lines.push(render_entry(helper));
        }
    }

    lines.join("\n")
}

fn render_entry(entry: &Entry) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("#### {}\n", entry.signature));

    if let Some(ref kind) = entry.kind {
        lines.push(format!("> `{}`\n", kind));
    }

    if !entry.full_description.is_empty() {
        lines.push(entry.full_description.clone());
        lines.push(String::new());
    }

    if entry.has_params {
        lines.push("##### Parameters\n".to_string());
        for param in &entry.params {
            lines.push(format!("* {}", render_param(param)));
        }
        lines.push(String::new());
    }

    if let Some(ref returns) = entry.returns {
        lines.push("##### Returns\n".to_string());
        lines.push(format!("* {}", render_returns(returns)));
        lines.push(String::new());
    }

    if !entry.code.is_empty() {
        lines.push("```javascript".to_string());
        lines.push(entry.code.clone());
        lines.push("```".to_string());
        lines.push(String::new());
    }

    if let Some(ref related) = entry.related {
        if !related.href.is_empty() {
            lines.push(format!("See also: {}\n", toc::render_toc_link(&related.name)));
        }
    }

    if !entry.filename.is_empty() {
        let link = match entry.line {
            Some(line) => format!("[{}:{}]({}#L{})", entry.filename, line, entry.url, line),
            None => format!("[{}]({})", entry.filename, entry.url),
        };
        lines.push(format!("Source: {}\n", link));
    }

    lines.join("\n")
}

/// `name types desc` → `**name** (`String`): desc`
fn render_param(tag: &RawTag) -> String {
    let mut out = format!("**{}**", tag.name.as_deref().unwrap_or(""));
    if !tag.types.is_empty() {
        out.push_str(&format!(" (`{}`)", tag.types.join(" | ")));
    }
    match tag.description.as_deref() {
        Some(desc) if !desc.is_empty() => format!("{}: {}", out, desc),
        _ => out,
    }
}

/// `types desc` → `(`Object`): desc`
fn render_returns(tag: &RawTag) -> String {
    let types = if tag.types.is_empty() {
        String::new()
    } else {
        format!("(`{}`)", tag.types.join(" | "))
    };
    let desc = tag.description.as_deref().unwrap_or("");
    match (types.is_empty(), desc.is_empty()) {
        (false, false) => format!("{}: {}", types, desc),
        (false, true) => types,
        _ => desc.to_string(),
    }
}
