//! Renderer module: trait-based format dispatch.

pub mod html;
pub mod json;
pub mod markdown;
pub mod template;

use crate::error::Error;
use crate::module::ModuleEntry;
use serde::Serialize;

/// Everything a renderer gets to see for one run.
#[derive(Debug, Clone, Serialize)]
pub struct RenderModel {
    pub modules: Vec<ModuleEntry>,
    /// JSON serialization of `modules`, for embedding in pages
    pub raw: String,
    /// Opaque version label, passed through untouched
    pub version: String,
}

impl RenderModel {
    pub fn new(modules: Vec<ModuleEntry>, version: impl Into<String>) -> Result<Self, Error> {
        let raw = serde_json::to_string(&modules).map_err(Error::Serialize)?;
        Ok(Self {
            modules,
            raw,
            version: version.into(),
        })
    }

    /// Page title shared by the built-in renderers.
    pub fn title(&self) -> String {
        if self.version.is_empty() {
            "API Reference".to_string()
        } else {
            format!("API Reference ({})", self.version)
        }
    }
}

/// Trait for rendering a model into a specific output format.
///
/// A call resolves exactly once, to the complete text or an error.
pub trait Renderer {
    fn render(&self, model: &RenderModel) -> anyhow::Result<String>;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>, Error> {
    match format {
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer)),
        "html" => Ok(Box::new(html::HtmlRenderer::new())),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(Error::UnknownFormat(format.to_string())),
    }
}
