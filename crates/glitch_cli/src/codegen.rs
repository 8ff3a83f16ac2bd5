//! `glitch codegen` and `glitch check`: the collection pipeline.
//!
//! 1. Find the project root and load `glitch.toml`
//! 2. Collect the schema and documents from disk
//! 3. Run the codegen session against the manifest in the codegen root
//! 4. Render diagnostics and the change summary
//! 5. On a refreshed `codegen` run, write `artifacts.json`

use std::fs;
use std::path::{Path, PathBuf};

use glitch_cache::{CodegenSession, CodegenState, CollectOptions, SourceCollector};
use glitch_diagnostics::DiagnosticSink;
use glitch_document::ArtifactKind;
use serde::Serialize;

use crate::pipeline::{load_project, render_diagnostics};
use crate::{CodegenArgs, GlobalArgs};

/// Name of the artifact index written next to the manifest.
pub const ARTIFACT_INDEX_FILE: &str = "artifacts.json";

#[derive(Serialize)]
struct IndexEntry<'a> {
    kind: ArtifactKind,
    name: &'a str,
    file_path: String,
}

/// Runs the `glitch codegen` command.
///
/// Returns exit code 0 on success, 1 if any document failed.
pub fn run(args: &CodegenArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let options = CollectOptions {
        force: args.force,
        persist: true,
    };
    execute("Collecting", options, global)
}

/// Runs the `glitch check` command: every document is parsed and validated,
/// nothing is written.
pub fn run_check(global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let options = CollectOptions {
        force: true,
        persist: false,
    };
    execute("Checking", options, global)
}

fn execute(
    verb: &str,
    options: CollectOptions,
    global: &GlobalArgs,
) -> Result<i32, Box<dyn std::error::Error>> {
    let project = load_project(global)?;
    if !global.quiet {
        eprintln!("   {verb} {}", project.config.project.name);
    }

    let inputs = project.collector().collect()?;
    if inputs.document_count() == 0 {
        log::warn!("no documents match {}", project.paths.include.join(", "));
    }

    let sink = DiagnosticSink::new();
    let mut session = CodegenSession::new(&project.paths.codegen_root);
    let outcome = session.collect_documents(&inputs, options, &sink);

    render_diagnostics(&sink, inputs.source_db(), global.color);

    if !outcome.success {
        eprintln!(
            "   Failed: {} error(s), {} warning(s)",
            sink.error_count(),
            sink.warning_count()
        );
        return Ok(1);
    }

    if !global.quiet {
        for event in outcome.diff.events() {
            eprintln!("{event}");
        }
    }

    if options.persist && outcome.refreshed {
        let path = write_artifact_index(session.codegen_root(), session.state())?;
        log::debug!("wrote {}", path.display());
    }

    if !global.quiet {
        let status = if outcome.refreshed { "refreshed" } else { "up to date" };
        eprintln!(
            "   Finished: {} document(s), {status}",
            inputs.document_count()
        );
    }
    Ok(0)
}

/// Writes `artifacts.json` listing every artifact in insertion order.
fn write_artifact_index(
    codegen_root: &Path,
    state: &CodegenState,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let entries: Vec<IndexEntry<'_>> = state
        .artifacts()
        .map(|a| IndexEntry {
            kind: a.kind,
            name: &a.name,
            file_path: a.file_path.to_string_lossy().replace('\\', "/"),
        })
        .collect();
    let json = serde_json::to_string_pretty(&entries)?;
    fs::create_dir_all(codegen_root)?;
    let path = codegen_root.join(ARTIFACT_INDEX_FILE);
    fs::write(&path, json)?;
    Ok(path)
}
