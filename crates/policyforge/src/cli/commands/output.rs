//! # Document Output
//!
//! Shared by every command that produces a policy document: stdout by
//! default, `-o PATH` instead of stdout, and `--download` to additionally
//! write `<sanitized name>.json` into `output.directory`.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use policyforge_core::{expand_path, Config, ConfigError, PolicyDocument};
use policyforge_policy::{export_file_name, format_policy_json};

use crate::cli::args::OutputArgs;

/// Errors writing a document.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    /// The output directory could not be resolved.
    #[error("Invalid output directory: {0}")]
    Directory(#[from] ConfigError),

    /// Writing a file failed.
    #[error("Failed to write {path}: {source}")]
    Write {
        /// Target path.
        path: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// Whether to pretty-print: the configured layout unless `--compact`.
#[must_use]
pub const fn use_pretty(args: &OutputArgs, config: &Config) -> bool {
    config.output.pretty && !args.compact
}

/// Path `--download` writes to for `document`.
///
/// # Errors
///
/// Returns [`OutputError::Directory`] if `output.directory` cannot be expanded.
pub fn download_path(document: &PolicyDocument, config: &Config) -> Result<PathBuf, OutputError> {
    let directory = expand_path(&config.output.directory)?;
    Ok(directory.join(export_file_name(document)))
}

/// Print or write `document` as directed by `args`.
///
/// # Errors
///
/// Returns [`OutputError`] if a file cannot be written. A failed stdout
/// write is logged and ignored.
pub fn emit_document(
    document: &PolicyDocument,
    args: &OutputArgs,
    config: &Config,
) -> Result<(), OutputError> {
    let json = format_policy_json(document, use_pretty(args, config));
    emit_text(&json, args.output.as_deref())?;

    if args.download {
        let path = download_path(document, config)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| OutputError::Write {
                path: parent.display().to_string(),
                source,
            })?;
        }
        write_file(&path, &json)?;
        tracing::info!(path = %path.display(), "downloaded policy");
    }

    Ok(())
}

/// Write `text` to `path`, or stdout when `path` is `None`.
///
/// # Errors
///
/// Returns [`OutputError::Write`] if the file cannot be written.
pub fn emit_text(text: &str, path: Option<&Path>) -> Result<(), OutputError> {
    match path {
        Some(path) => {
            write_file(path, text)?;
            tracing::info!(path = %path.display(), "wrote policy");
            Ok(())
        }
        None => {
            write_stdout(text);
            Ok(())
        }
    }
}

/// Print `text` followed by a newline.
///
/// Failures (e.g. a closed pipe) are logged at `warn`; the command still
/// succeeds.
pub fn write_stdout(text: &str) {
    let mut stdout = std::io::stdout().lock();
    if let Err(err) = writeln!(stdout, "{text}").and_then(|()| stdout.flush()) {
        tracing::warn!(error = %err, "failed to write to stdout");
    }
}

fn write_file(path: &Path, text: &str) -> Result<(), OutputError> {
    let mut contents = text.to_string();
    contents.push('\n');
    fs::write(path, contents).map_err(|source| OutputError::Write {
        path: path.display().to_string(),
        source,
    })
}
