//! Tag classification: reduce a comment's tags into structured directives.

use crate::comment::RawTag;

/// Known tag types. Anything else is kept as [`TagKind::Other`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagKind {
    Param,
    Return,
    See,
    Module,
    Globals,
    ModuleRoot,
    Constructor,
    Extends,
    Other(String),
}

impl From<&str> for TagKind {
    fn from(kind: &str) -> Self {
        match kind {
            "param" => TagKind::Param,
            "return" => TagKind::Return,
            "see" => TagKind::See,
            "module" => TagKind::Module,
            "globals" => TagKind::Globals,
            "moduleRoot" => TagKind::ModuleRoot,
            "constructor" => TagKind::Constructor,
            "extends" => TagKind::Extends,
            other => TagKind::Other(other.to_string()),
        }
    }
}

impl RawTag {
    pub fn tag_kind(&self) -> TagKind {
        TagKind::from(self.kind.as_str())
    }
}

/// Everything the builder needs to know about a comment's tags.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Directives {
    /// Content of the last `module` or `globals` tag, untrimmed
    pub module: Option<String>,
    pub constructor: bool,
    /// Content of the first `moduleRoot` tag
    pub module_root: Option<String>,
    /// Content of the first `globals` tag
    pub global_owner: Option<String>,
    /// Content of the first `extends` tag
    pub extends: Option<String>,
    /// First `see` tag
    pub see: Option<RawTag>,
}

impl Directives {
    /// Walk the tags once, in order.
    ///
    /// `module` and `globals` tags share one slot and the last one seen wins,
    /// so `@module A` followed by `@globals B` yields `B`.
    pub fn from_tags(tags: &[RawTag]) -> Self {
        let mut d = Directives::default();

        for tag in tags {
            match tag.tag_kind() {
                TagKind::Module => {
                    d.module = Some(tag.content().to_string());
                }
                TagKind::Globals => {
                    d.module = Some(tag.content().to_string());
                    if d.global_owner.is_none() {
                        d.global_owner = Some(tag.content().to_string());
                    }
                }
                TagKind::ModuleRoot => {
                    if d.module_root.is_none() {
                        d.module_root = Some(tag.content().to_string());
                    }
                }
                TagKind::Constructor => d.constructor = true,
                TagKind::Extends => {
                    if d.extends.is_none() {
                        d.extends = Some(tag.content().to_string());
                    }
                }
                TagKind::See => {
                    if d.see.is_none() {
                        d.see = Some(tag.clone());
                    }
                }
                TagKind::Param | TagKind::Return | TagKind::Other(_) => {}
            }
        }

        d
    }

    /// Owning module name, trimmed; `default` when absent or blank.
    pub fn parent(&self, default: &str) -> String {
        match self.module.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => default.to_string(),
        }
    }

    pub fn is_module(&self) -> bool {
        self.module_root.is_some()
    }

    pub fn is_global(&self) -> bool {
        self.global_owner.is_some()
    }

    pub fn is_extends(&self) -> bool {
        self.extends.is_some()
    }
}
