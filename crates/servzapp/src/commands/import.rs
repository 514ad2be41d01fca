use crate::commands::{CmdMessage, CmdResult};
use crate::document::import_document;
use crate::error::{Result, ServzError};
use crate::model::ServerRecord;
use crate::store::{DataStore, ImportMode, ImportReport};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Import every document found at `paths`.
///
/// Files are read regardless of extension; directories contribute their direct
/// children whose extension is listed in `import_exts`. Nothing is written unless every
/// document reads and parses.
pub fn run<S: DataStore>(
    store: &mut S,
    paths: Vec<PathBuf>,
    import_exts: &[String],
    mode: ImportMode,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut sources = Vec::new();

    for path in paths {
        if path.is_dir() {
            let found = importable_files(&path, import_exts)?;
            if found.is_empty() {
                result.add_message(CmdMessage::warning(format!(
                    "No importable files in: {}",
                    path.display()
                )));
            }
            sources.extend(found);
        } else if path.is_file() {
            sources.push(path);
        } else {
            return Err(ServzError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Path not found: {}", path.display()),
            )));
        }
    }

    if sources.is_empty() {
        result.add_message(CmdMessage::warning("Nothing to import."));
        return Ok(result);
    }

    let mut records = Vec::new();
    for source in &sources {
        records.extend(read_document(source)?);
    }

    let report = store.bulk_import(records, mode)?;
    info!(
        files = sources.len(),
        imported = report.imported(),
        ?mode,
        "import finished"
    );

    for source in &sources {
        result.add_message(CmdMessage::info(format!("Imported: {}", source.display())));
    }
    add_report_messages(&mut result, &report);
    Ok(result)
}

/// Import a single in-memory document.
pub fn run_text<S: DataStore>(store: &mut S, text: &str, mode: ImportMode) -> Result<CmdResult> {
    let records = import_document(text)?;
    let report = store.bulk_import(records, mode)?;
    info!(imported = report.imported(), ?mode, "import finished");

    let mut result = CmdResult::default();
    add_report_messages(&mut result, &report);
    Ok(result)
}

fn importable_files(dir: &Path, import_exts: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(ServzError::Io)? {
        let entry = entry.map_err(ServzError::Io)?;
        let sub_path = entry.path();
        if !sub_path.is_file() {
            continue;
        }
        if let Some(ext) = sub_path.extension() {
            let ext_str = format!(".{}", ext.to_string_lossy());
            if import_exts.contains(&ext_str) {
                files.push(sub_path);
            }
        }
    }
    // read_dir order is platform dependent
    files.sort();
    Ok(files)
}

fn read_document(path: &Path) -> Result<Vec<ServerRecord>> {
    let text = fs::read_to_string(path).map_err(ServzError::Io)?;
    import_document(&text).inspect_err(|err| {
        warn!(path = %path.display(), error = %err, "rejected import document");
    })
}

fn add_report_messages(result: &mut CmdResult, report: &ImportReport) {
    if report.removed > 0 {
        result.add_message(CmdMessage::warning(format!(
            "Replaced collection, removed {} existing",
            report.removed
        )));
    }
    result.add_message(CmdMessage::success(format!(
        "Total imported: {} ({} new, {} updated)",
        report.imported(),
        report.created,
        report.replaced
    )));
}
