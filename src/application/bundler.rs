//! Bundler Use Case
//!
//! Orchestrates a build around the template graph:
//! 1. Resolve the graph and its entry point registry (`entry`)
//! 2. Answer where each compiled entry point goes (`output_path`)
//! 3. Write every rewritten template once compilation is done (`write_templates`)
//!
//! The bundler holds at most one resolved graph. Every resolution replaces
//! it wholesale; a failed resolution leaves nothing behind.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::domain::entities::TemplateGraph;
use crate::domain::ports::{FileSystem, TemplateSource};
use crate::domain::services::{DiffResult, Differ, EntryPointRegistry, GraphResolver};
use crate::domain::value_objects::ResolveOptions;
use crate::error::{SamError, SamResult};
use crate::infrastructure::template::{render, TemplateLoader, TemplateWriter};

/// Default root template, relative to the working directory
pub const DEFAULT_TEMPLATE: &str = "template.yml";

#[derive(Debug)]
struct Resolved {
    graph: TemplateGraph,
    registry: EntryPointRegistry,
}

/// Outcome of writing every stack. Each write is attempted independently.
#[derive(Debug, Default)]
pub struct WriteReport {
    pub written: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, SamError)>,
}

impl WriteReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// The written paths, or the first failure
    pub fn into_result(self) -> SamResult<Vec<PathBuf>> {
        match self.failed.into_iter().next() {
            Some((_, err)) => Err(err),
            None => Ok(self.written),
        }
    }
}

/// What writing one stack would change
#[derive(Debug, Clone)]
pub struct TemplatePreview {
    pub template_path: PathBuf,
    pub destination: PathBuf,
    pub diff: DiffResult,
}

pub struct Bundler<FS: FileSystem> {
    fs: FS,
    options: ResolveOptions,
    template: PathBuf,
    resolved: Option<Resolved>,
}

impl<FS: FileSystem> Bundler<FS> {
    pub fn new(fs: FS, options: ResolveOptions, template: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            options,
            template: template.into(),
            resolved: None,
        }
    }

    pub fn options(&self) -> &ResolveOptions {
        &self.options
    }

    pub fn template(&self) -> &Path {
        &self.template
    }

    /// Resolve the graph and return the compilation manifest
    pub fn entry(&mut self) -> SamResult<&EntryPointRegistry> {
        self.resolved = None;

        let loader = TemplateLoader::new(&self.fs, self.options.working_dir());
        let graph = GraphResolver::new(&loader, &self.options).resolve(&self.template)?;
        let registry = EntryPointRegistry::build(&graph, self.options.duplicates())?;

        info!(
            stacks = graph.nested.len() + 1,
            entry_points = registry.len(),
            "resolved template graph"
        );

        let resolved = self.resolved.insert(Resolved { graph, registry });
        Ok(&resolved.registry)
    }

    pub fn graph(&self) -> SamResult<&TemplateGraph> {
        self.resolved().map(|r| &r.graph)
    }

    pub fn registry(&self) -> SamResult<&EntryPointRegistry> {
        self.resolved().map(|r| &r.registry)
    }

    /// Where the compiled output for `resource_key` belongs
    pub fn output_path(&self, resource_key: &str) -> SamResult<&Path> {
        self.registry()?.output_path(resource_key)
    }

    /// Write every stack's rewritten template, nested stacks first.
    ///
    /// A failed write does not stop the others; inspect the report.
    pub fn write_templates(&self) -> SamResult<WriteReport> {
        let resolved = self.resolved()?;
        let writer = TemplateWriter::new(&self.fs, &self.options);
        let mut report = WriteReport::default();

        for stack in resolved.graph.stacks() {
            let is_root = std::ptr::eq(stack, &resolved.graph.root);
            match writer.write(stack) {
                Ok(path) => {
                    if is_root {
                        info!(path = %path.display(), "wrote root template");
                    } else {
                        info!(path = %path.display(), "wrote nested template");
                    }
                    report.written.push(path);
                }
                Err(err) => {
                    warn!(template = %stack.template_path().display(), error = %err, "template write failed");
                    report.failed.push((stack.template_path().to_path_buf(), err));
                }
            }
        }

        Ok(report)
    }

    /// Diff of each stack's source template against what `write_templates`
    /// would produce, in write order.
    pub fn preview(&self) -> SamResult<Vec<TemplatePreview>> {
        let resolved = self.resolved()?;
        let loader = TemplateLoader::new(&self.fs, self.options.working_dir());
        let writer = TemplateWriter::new(&self.fs, &self.options);
        let differ = Differ::new();

        resolved
            .graph
            .stacks()
            .map(|stack| -> SamResult<TemplatePreview> {
                let path = stack.template_path();
                let render_err = |message| SamError::Write {
                    path: path.to_path_buf(),
                    message,
                };
                let before = render(&loader.load(path)?).map_err(render_err)?;
                let after = render(stack.document()).map_err(render_err)?;

                Ok(TemplatePreview {
                    template_path: path.to_path_buf(),
                    destination: writer.destination(stack)?,
                    diff: differ.diff(&path.to_string_lossy(), &before, &after),
                })
            })
            .collect()
    }

    fn resolved(&self) -> SamResult<&Resolved> {
        self.resolved.as_ref().ok_or(SamError::NotResolved)
    }
}
