mod catalog;

use std::fmt;

use camino::{Utf8Path, Utf8PathBuf};
use tracing::info;

use crate::builder::ScaffoldBuilder;
use crate::error::{ScaffoldError, ScaffoldResult};
use crate::templates::{self, Placeholders};

pub use catalog::CATALOG;

/// One step of a template, as declared in the catalog.
///
/// Paths are relative to the project root and may contain `{{name}}`,
/// `{{ident}}` or `{{Ident}}`; file bodies are named by their embedded asset path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaffoldOperation {
    CreateDirectory(&'static str),
    WriteFile {
        path: &'static str,
        asset: &'static str,
    },
}

#[derive(Debug)]
pub struct TemplateEntry {
    pub id: &'static str,
    pub summary: &'static str,
    pub operations: &'static [ScaffoldOperation],
}

/// A catalog step with the project name substituted in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedOperation {
    CreateDirectory(Utf8PathBuf),
    WriteFile { path: Utf8PathBuf, contents: String },
}

impl RenderedOperation {
    pub fn path(&self) -> &Utf8Path {
        match self {
            RenderedOperation::CreateDirectory(path) => path.as_path(),
            RenderedOperation::WriteFile { path, .. } => path.as_path(),
        }
    }

    pub fn apply(&self, builder: &mut ScaffoldBuilder) {
        match self {
            RenderedOperation::CreateDirectory(path) => builder.create_dir(path),
            RenderedOperation::WriteFile { path, contents } => builder.write_file(path, contents),
        };
    }
}

impl fmt::Display for RenderedOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderedOperation::CreateDirectory(_) => write!(f, "mkdir  {}/", self.path()),
            RenderedOperation::WriteFile { path, contents } => {
                write!(f, "write  {} ({} bytes)", path, contents.trim().len())
            }
        }
    }
}

impl TemplateEntry {
    /// Resolve every path and file body for `project_name` without touching disk.
    pub fn render(&self, project_name: &str) -> ScaffoldResult<Vec<RenderedOperation>> {
        let values = Placeholders::for_project(project_name);
        self.operations
            .iter()
            .map(|operation| match *operation {
                ScaffoldOperation::CreateDirectory(path) => Ok(RenderedOperation::CreateDirectory(
                    Utf8PathBuf::from(values.apply(path)),
                )),
                ScaffoldOperation::WriteFile { path, asset } => {
                    let body = templates::get_string(asset)?;
                    Ok(RenderedOperation::WriteFile {
                        path: Utf8PathBuf::from(values.apply(path)),
                        contents: values.apply(&body),
                    })
                }
            })
            .collect()
    }
}

pub fn supported() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|entry| entry.id)
}

pub fn supported_list() -> String {
    supported().collect::<Vec<_>>().join(", ")
}

pub fn lookup(template_id: &str) -> ScaffoldResult<&'static TemplateEntry> {
    CATALOG
        .iter()
        .find(|entry| entry.id == template_id)
        .ok_or_else(|| ScaffoldError::UnsupportedTemplate {
            requested: template_id.to_owned(),
            supported: supported_list(),
        })
}

/// Build the `template_id` layout at `destination`.
///
/// Unknown templates fail before the filesystem is touched. Otherwise the first
/// failing step is returned and whatever was already written stays on disk for
/// the caller to clean up.
pub fn scaffold(
    template_id: &str,
    destination: &Utf8Path,
    project_name: &str,
) -> ScaffoldResult<()> {
    let entry = lookup(template_id)?;
    let plan = entry.render(project_name)?;

    info!(
        "scaffolding `{}` project `{}` at {} ({} steps)",
        entry.id,
        project_name,
        destination,
        plan.len()
    );

    let mut builder = ScaffoldBuilder::new(destination);
    for operation in &plan {
        operation.apply(&mut builder);
    }
    builder.finish()
}
