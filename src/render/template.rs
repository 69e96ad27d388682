//! Page templates with `${name}` placeholders.
//!
//! Known placeholders are `${title}`, `${version}`, `${content}` and `${raw}`.
//! A template must contain `${content}`; anything else is rejected at compile
//! time so a broken template never produces partial output.

use crate::error::TemplateError;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Var {
    Title,
    Version,
    Content,
    Raw,
}

impl Var {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "title" => Some(Var::Title),
            "version" => Some(Var::Version),
            "content" => Some(Var::Content),
            "raw" => Some(Var::Raw),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Var(Var),
}

/// Values substituted into a compiled template.
#[derive(Debug, Default, Clone, Copy)]
pub struct TemplateValues<'a> {
    pub title: &'a str,
    pub version: &'a str,
    pub content: &'a str,
    pub raw: &'a str,
}

/// A compiled page template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    pub fn compile(source: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut rest = source;
        let mut offset = 0;

        while let Some(start) = rest.find("${") {
            if start > 0 {
                segments.push(Segment::Text(rest[..start].to_string()));
            }
            let after = &rest[start + 2..];
            let end = after
                .find('}')
                .ok_or(TemplateError::Unterminated(offset + start))?;
            let name = after[..end].trim();
            if name.is_empty() {
                return Err(TemplateError::Empty(offset + start));
            }
            let var = Var::parse(name).ok_or_else(|| TemplateError::Unknown(name.to_string()))?;
            segments.push(Segment::Var(var));

            let consumed = start + 2 + end + 1;
            offset += consumed;
            rest = &rest[consumed..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Text(rest.to_string()));
        }

        if !segments.contains(&Segment::Var(Var::Content)) {
            return Err(TemplateError::MissingContent);
        }
        Ok(Self { segments })
    }

    /// Read and compile a template file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TemplateError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| TemplateError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::compile(&source)
    }

    pub fn render(&self, values: &TemplateValues) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Var(Var::Title) => out.push_str(values.title),
                Segment::Var(Var::Version) => out.push_str(values.version),
                Segment::Var(Var::Content) => out.push_str(values.content),
                Segment::Var(Var::Raw) => out.push_str(values.raw),
            }
        }
        out
    }
}
