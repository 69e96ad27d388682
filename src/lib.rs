//! doxgen: build module-grouped documentation from parsed doc comments.
//!
//! The comment parser hands over one record per documentation comment. This
//! crate turns them into renderer-ready entries, groups the entries under the
//! modules they belong to, and renders the result:
//!
//! 1. **Build**: drop ignored/private comments, classify tags, dedent code
//! 2. **Group**: attach methods and helpers to each module root
//! 3. **Render**: hand `{ modules, raw, version }` to a [`Renderer`]
//!
//! ```no_run
//! use doxgen::{comment, render, Generator};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let comments = comment::parse_comments(r#"[{"tags": [{"type": "moduleRoot", "content": "Client"}]}]"#)?;
//! let renderer = render::create_renderer("html")?;
//! let _page = Generator::default().generate(&comments, "1.0.0", renderer.as_ref())?;
//! # Ok(())
//! # }
//! ```

pub mod code;
pub mod comment;
pub mod config;
pub mod entry;
pub mod error;
pub mod module;
pub mod render;
pub mod tag;
pub mod toc;

pub use comment::{RawComment, RawTag};
pub use config::DocConfig;
pub use entry::{build_entry, Entry, IdGenerator};
pub use error::{Error, TemplateError};
pub use module::{group_into_modules, ModuleEntry};
pub use render::{RenderModel, Renderer};

use tracing::debug;

/// Document model builder.
///
/// Owns the configuration and the id counter; ids stay unique across every
/// run made with the same generator.
#[derive(Debug, Default)]
pub struct Generator {
    config: DocConfig,
    ids: IdGenerator,
}

impl Generator {
    pub fn new(config: DocConfig) -> Self {
        Self {
            config,
            ids: IdGenerator::new(),
        }
    }

    /// Use a specific id source, e.g. one with a fixed clock.
    pub fn with_ids(mut self, ids: IdGenerator) -> Self {
        self.ids = ids;
        self
    }

    pub fn config(&self) -> &DocConfig {
        &self.config
    }

    /// Build every entry, in input order, without grouping.
    pub fn entries(&mut self, docs: &[RawComment]) -> Vec<Entry> {
        entry::build_entries(docs, &self.config, &mut self.ids)
    }

    /// Build entries and group them into modules.
    pub fn build(&mut self, docs: &[RawComment]) -> Vec<ModuleEntry> {
        let entries = self.entries(docs);
        let modules = group_into_modules(&entries);
        debug!(
            comments = docs.len(),
            entries = entries.len(),
            modules = modules.len(),
            "built document model"
        );
        modules
    }

    /// Build, group and render in one go.
    ///
    /// Issues exactly one render request; a template or render failure
    /// aborts the run with no output.
    pub fn generate(
        &mut self,
        docs: &[RawComment],
        version: &str,
        renderer: &dyn Renderer,
    ) -> Result<String, Error> {
        let modules = self.build(docs);
        let model = RenderModel::new(modules, version)?;
        renderer.render(&model).map_err(Error::from_render)
    }
}

/// One-shot [`Generator::generate`] with the default config and a fresh
/// id counter.
pub fn generate(docs: &[RawComment], version: &str, renderer: &dyn Renderer) -> Result<String, Error> {
    Generator::default().generate(docs, version, renderer)
}
