//! JSON renderer: structured output for tooling integration.
//!
//! Serializes the grouped module list plus the version label. Useful for
//! custom rendering pipelines that bring their own templates.

use crate::module::ModuleEntry;
use crate::render::{RenderModel, Renderer};
use serde::Serialize;

pub struct JsonRenderer;

#[derive(Serialize)]
struct JsonDocument<'a> {
    version: &'a str,
    modules: &'a [ModuleEntry],
}

impl Renderer for JsonRenderer {
    fn render(&self, model: &RenderModel) -> anyhow::Result<String> {
        let doc = JsonDocument {
            version: &model.version,
            modules: &model.modules,
        };
        let mut out = serde_json::to_string_pretty(&doc)?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
