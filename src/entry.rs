//! Entry construction: one renderer-ready record per public comment.

use crate::code::format_code;
use crate::comment::{Context, Description, RawComment, RawTag};
use crate::config::DocConfig;
use crate::tag::{Directives, TagKind};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use tracing::debug;

static RE_LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<br( /)?>").unwrap());

/// Enriched documentation unit handed to the renderer.
///
/// Field names follow the template model (`has_params`, `is_global`, ...),
/// so the serialized form can be consumed directly by page templates.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Entry {
    pub id: String,
    pub name: String,
    pub signature: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    pub filename: String,
    pub url: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ctx: Option<Context>,
    pub description: Description,
    pub full_description: String,
    pub code: String,
    pub params: Vec<RawTag>,
    pub has_params: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub returns: Option<RawTag>,
    pub has_returns: bool,
    pub tags: Vec<RawTag>,
    pub module: bool,
    pub parent: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related: Option<Related>,
    pub has_related: bool,
    pub is_global: bool,
    pub global: String,
    pub is_extends: bool,
    pub extends: String,
}

/// Cross-link built from a `@see` tag.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Related {
    pub name: String,
    pub href: String,
}

impl From<&RawTag> for Related {
    fn from(tag: &RawTag) -> Self {
        let local = tag.local.clone().unwrap_or_default();
        Related {
            name: local.clone(),
            href: local,
        }
    }
}

/// Source of entry identifiers for one run.
///
/// Ids are `"<counter>-<millis>"`; the counter alone keeps them distinct.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    counter: u64,
    clock: fn() -> i64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::with_clock(|| chrono::Utc::now().timestamp_millis())
    }

    pub fn with_clock(clock: fn() -> i64) -> Self {
        Self { counter: 0, clock }
    }

    pub fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.counter, (self.clock)());
        self.counter += 1;
        id
    }

    /// Number of ids handed out so far.
    pub fn issued(&self) -> u64 {
        self.counter
    }
}

/// Replace `<br>` and `<br />` with a single space.
pub fn strip_line_breaks(text: &str) -> String {
    RE_LINE_BREAK.replace_all(text, " ").into_owned()
}

/// Build the entry for one comment, or `None` for ignored and private ones.
pub fn build_entry(doc: &RawComment, config: &DocConfig, ids: &mut IdGenerator) -> Option<Entry> {
    if doc.ignore || doc.is_private {
        debug!(
            filename = doc.filename.as_deref().unwrap_or(""),
            line = doc.line,
            "skipping ignored or private comment"
        );
        return None;
    }

    let directives = Directives::from_tags(&doc.tags);
    let parent = directives.parent(&config.default_module);
    let code = format_code(doc.code.as_deref().unwrap_or(""));

    let ctx = doc.ctx.as_ref();
    let name = directives
        .module_root
        .clone()
        .filter(|root| !root.is_empty())
        .or_else(|| ctx.and_then(|c| c.name.clone()))
        .unwrap_or_default();

    let is_module = directives.is_module();
    let is_global = directives.is_global();
    let is_extends = directives.is_extends();
    let signature = if is_global || !is_module {
        format!("{}.{}", parent, name)
    } else {
        ctx.and_then(|c| c.string.clone()).unwrap_or_default()
    };

    let kind = if directives.constructor {
        Some("constructor".to_string())
    } else {
        ctx.and_then(|c| c.kind.clone())
    };

    let params: Vec<RawTag> = doc
        .tags
        .iter()
        .filter(|t| t.tag_kind() == TagKind::Param)
        .cloned()
        .collect();
    let returns = doc
        .tags
        .iter()
        .find(|t| t.tag_kind() == TagKind::Return)
        .cloned();
    let related = directives.see.as_ref().map(Related::from);
    let filename = doc.filename.clone().unwrap_or_default();

    Some(Entry {
        id: ids.next_id(),
        name,
        signature,
        line: doc.line,
        url: format!("{}{}", config.url_root, filename),
        filename,
        kind,
        ctx: doc.ctx.clone(),
        description: doc.description.clone(),
        full_description: strip_line_breaks(&doc.description.full),
        code,
        has_params: !params.is_empty(),
        params,
        has_returns: returns.is_some(),
        returns,
        tags: doc.tags.clone(),
        module: is_module,
        parent,
        has_related: related.is_some(),
        related,
        is_global,
        global: directives.global_owner.unwrap_or_default(),
        is_extends,
        extends: directives.extends.unwrap_or_default(),
    })
}

/// Build entries for every comment, dropping the omitted ones.
pub fn build_entries(docs: &[RawComment], config: &DocConfig, ids: &mut IdGenerator) -> Vec<Entry> {
    docs.iter()
        .filter_map(|doc| build_entry(doc, config, ids))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn fixed_clock() -> i64 {
        1_700_000_000_000
    }

    fn ids() -> IdGenerator {
        IdGenerator::with_clock(fixed_clock)
    }

    fn named(name: &str, tags: Vec<RawTag>) -> RawComment {
        RawComment {
            tags,
            ctx: Some(Context {
                kind: Some("method".to_string()),
                name: Some(name.to_string()),
                string: Some(format!("{}()", name)),
                ..Default::default()
            }),
            filename: Some("lib/client.js".to_string()),
            line: Some(10),
            ..Default::default()
        }
    }

    fn build(doc: &RawComment) -> Option<Entry> {
        build_entry(doc, &DocConfig::default(), &mut ids())
    }

    #[test]
    fn ignored_and_private_are_omitted() {
        let ignored = RawComment {
            ignore: true,
            ..named("a", vec![])
        };
        let private = RawComment {
            is_private: true,
            ..named("b", vec![])
        };
        assert!(build(&ignored).is_none());
        assert!(build(&private).is_none());
    }

    #[test]
    fn omitted_comments_do_not_consume_ids() {
        let mut idgen = ids();
        let ignored = RawComment {
            ignore: true,
            ..Default::default()
        };
        assert!(build_entry(&ignored, &DocConfig::default(), &mut idgen).is_none());
        assert_eq!(idgen.issued(), 0);
    }

    #[test]
    fn plain_comment_defaults_to_global() {
        let entry = build(&named("request", vec![])).unwrap();
        assert_eq!(entry.parent, "Global");
        assert_eq!(entry.name, "request");
        assert_eq!(entry.signature, "Global.request");
        assert_eq!(entry.kind.as_deref(), Some("method"));
        assert!(!entry.module);
        assert!(!entry.is_global);
        assert_eq!(entry.global, "");
    }

    #[test]
    fn empty_record_still_has_parent() {
        let entry = build(&RawComment::default()).unwrap();
        assert_eq!(entry.parent, "Global");
        assert_eq!(entry.name, "");
        assert_eq!(entry.code, "");
        assert_eq!(entry.signature, "Global.");
        assert!(entry.kind.is_none());
        assert_eq!(entry.url, crate::config::DEFAULT_URL_ROOT);
    }

    #[test]
    fn globals_signature() {
        let entry = build(&named("helper", vec![RawTag::new("globals", "Utils")])).unwrap();
        assert_eq!(entry.signature, "Utils.helper");
        assert!(entry.is_global);
        assert_eq!(entry.global, "Utils");
        assert_eq!(entry.parent, "Utils");
    }

    #[test]
    fn module_root_uses_context_signature() {
        let doc = named(
            "Client",
            vec![
                RawTag::new("moduleRoot", "splunkjs.Client"),
                RawTag::new("module", "splunkjs"),
            ],
        );
        let entry = build(&doc).unwrap();
        assert!(entry.module);
        assert_eq!(entry.name, "splunkjs.Client");
        assert_eq!(entry.signature, "Client()");
        assert_eq!(entry.parent, "splunkjs");
    }

    #[test]
    fn empty_module_root_falls_back_to_context_name() {
        let entry = build(&named("Client", vec![RawTag::new("moduleRoot", "")])).unwrap();
        assert!(entry.module);
        assert_eq!(entry.name, "Client");
    }

    #[test]
    fn global_module_root_uses_qualified_signature() {
        let doc = named(
            "Utils",
            vec![RawTag::new("moduleRoot", "Utils"), RawTag::new("globals", "Top")],
        );
        let entry = build(&doc).unwrap();
        assert_eq!(entry.signature, "Top.Utils");
    }

    #[test]
    fn later_module_tag_moves_signature_but_not_global_owner() {
        let doc = named(
            "x",
            vec![RawTag::new("globals", "B"), RawTag::new("module", "A")],
        );
        let entry = build(&doc).unwrap();
        assert_eq!(entry.signature, "A.x");
        assert_eq!(entry.parent, "A");
        assert!(entry.is_global);
        assert_eq!(entry.global, "B");

        let roots = [
            named("A", vec![RawTag::new("moduleRoot", "A")]),
            named("B", vec![RawTag::new("moduleRoot", "B")]),
            doc,
        ];
        let entries = build_entries(&roots, &DocConfig::default(), &mut ids());
        let modules = crate::module::group_into_modules(&entries);
        assert_eq!(modules.len(), 2);
        assert_eq!(modules[0].name(), "A");
        assert!(modules[0].methods.is_empty());
        assert!(modules[0].helpers.is_empty());
        assert_eq!(modules[1].name(), "B");
        let helpers: Vec<_> = modules[1].helpers.iter().map(|e| e.signature.as_str()).collect();
        assert_eq!(helpers, vec!["A.x"]);
        assert!(modules[1].methods.is_empty());
    }

    #[test]
    fn absent_optionals_are_not_serialized() {
        let value = serde_json::to_value(build(&RawComment::default()).unwrap()).unwrap();
        for key in ["line", "type", "ctx", "returns", "related"] {
            assert!(value.get(key).is_none(), "unexpected key {}", key);
        }
        assert_eq!(value["parent"], "Global");

        let value = serde_json::to_value(build(&named("a", vec![])).unwrap()).unwrap();
        assert_eq!(value["line"], 10);
        assert_eq!(value["type"], "method");
        assert_eq!(value["ctx"]["name"], "a");
    }

    #[test]
    fn constructor_overrides_type() {
        let entry = build(&named("Service", vec![RawTag::new("constructor", "")])).unwrap();
        assert_eq!(entry.kind.as_deref(), Some("constructor"));
    }

    #[test]
    fn full_description_line_breaks() {
        let mut doc = named("a", vec![]);
        doc.description.full = "Line one<br>Line two<br />Line three".to_string();
        doc.description.summary = "Line one<br>".to_string();
        let entry = build(&doc).unwrap();
        assert_eq!(entry.full_description, "Line one Line two Line three");
        // Only the full description is normalized
        assert_eq!(entry.description.summary, "Line one<br>");
    }

    #[test]
    fn params_and_returns() {
        let param = |name: &str| RawTag {
            kind: "param".to_string(),
            name: Some(name.to_string()),
            types: vec!["String".to_string()],
            ..Default::default()
        };
        let ret = |desc: &str| RawTag {
            kind: "return".to_string(),
            description: Some(desc.to_string()),
            ..Default::default()
        };
        let doc = named(
            "request",
            vec![param("path"), ret("first"), param("method"), ret("second")],
        );
        let entry = build(&doc).unwrap();
        assert!(entry.has_params);
        let names: Vec<_> = entry.params.iter().map(|p| p.name.as_deref().unwrap()).collect();
        assert_eq!(names, vec!["path", "method"]);
        assert!(entry.has_returns);
        assert_eq!(entry.returns.unwrap().description.as_deref(), Some("first"));
        assert_eq!(entry.tags.len(), 4);

        let bare = build(&named("x", vec![])).unwrap();
        assert!(!bare.has_params);
        assert!(!bare.has_returns);
        assert!(bare.returns.is_none());
    }

    #[test]
    fn related_from_first_see() {
        let see = |local: Option<&str>| RawTag {
            kind: "see".to_string(),
            local: local.map(String::from),
            ..Default::default()
        };
        let entry = build(&named("a", vec![see(Some("Client.get")), see(Some("Client.post"))])).unwrap();
        assert!(entry.has_related);
        assert_eq!(
            entry.related,
            Some(Related {
                name: "Client.get".to_string(),
                href: "Client.get".to_string()
            })
        );

        let entry = build(&named("a", vec![see(None)])).unwrap();
        assert!(entry.has_related);
        assert_eq!(entry.related.unwrap().href, "");

        let entry = build(&named("a", vec![])).unwrap();
        assert!(!entry.has_related);
        assert!(entry.related.is_none());
    }

    #[test]
    fn extends() {
        let entry = build(&named("Job", vec![RawTag::new("extends", "splunkjs.Entity")])).unwrap();
        assert!(entry.is_extends);
        assert_eq!(entry.extends, "splunkjs.Entity");
    }

    #[test]
    fn url_and_code() {
        let mut doc = named("a", vec![]);
        doc.code = Some("a = function() {\n        return 1;\n    }".to_string());
        let config = DocConfig::default().with_url_root("https://example.com/");
        let entry = build_entry(&doc, &config, &mut ids()).unwrap();
        assert_eq!(entry.url, "https://example.com/lib/client.js");
        assert_eq!(entry.code, "a = function() {\n    return 1;\n}");
    }

    #[test]
    fn ids_are_counter_and_timestamp() {
        let mut idgen = ids();
        assert_eq!(idgen.next_id(), "0-1700000000000");
        assert_eq!(idgen.next_id(), "1-1700000000000");
        assert_eq!(idgen.issued(), 2);
    }

    #[test]
    fn ids_are_unique_across_builds() {
        let mut idgen = IdGenerator::new();
        let docs: Vec<RawComment> = (0..50).map(|i| named(&format!("f{}", i), vec![])).collect();
        let entries = build_entries(&docs, &DocConfig::default(), &mut idgen);
        assert_eq!(entries.len(), 50);
        let unique: HashSet<_> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(unique.len(), 50);
    }

    #[test]
    fn custom_default_module() {
        let config = DocConfig::default().with_default_module("Top");
        let entry = build_entry(&named("a", vec![]), &config, &mut ids()).unwrap();
        assert_eq!(entry.parent, "Top");
        assert_eq!(entry.signature, "Top.a");
    }
}
