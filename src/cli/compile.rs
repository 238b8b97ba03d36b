//! Compile command implementation.
//!
//! Shells out to the `typst` binary. Compilation is a black box here:
//! each file either produces its PNG(s) or fails, and the first stderr
//! lines are surfaced on failure.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use clap::Args;
use walkdir::WalkDir;

use crate::error::{Result, RrssError};
use crate::output::{display_size, plural, Printer};

/// Compile Typst documents to PNG
#[derive(Args, Debug)]
pub struct CompileArgs {
    /// Files to compile (default: main.typ)
    pub files: Vec<PathBuf>,

    /// Pixels per inch
    #[arg(long, default_value_t = 144)]
    pub ppi: u32,

    /// Output directory
    #[arg(long, short = 'd', default_value = "output")]
    pub output_dir: PathBuf,

    /// Compile every .typ under content/
    #[arg(long, short = 'a')]
    pub all: bool,

    /// Page-numbering pattern (e.g. "{0p}") for multipage documents
    #[arg(long)]
    pub template: Option<String>,

    /// Typst project root
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

pub fn run(args: CompileArgs, printer: &Printer) -> Result<()> {
    let files = resolve_files(&args);
    if files.is_empty() {
        printer.warning("Skipping", "no files to compile");
        return Ok(());
    }

    fs::create_dir_all(&args.output_dir).map_err(|e| RrssError::Io {
        path: args.output_dir.clone(),
        message: format!("Failed to create output directory: {}", e),
    })?;

    printer.info(
        "Compiling",
        &format!(
            "{} at {} ppi into {}/",
            plural(files.len(), "file", "files"),
            args.ppi,
            args.output_dir.display(),
        ),
    );

    let mut success = 0usize;
    let mut failed = 0usize;

    for target in &files {
        let name = target
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| target.display().to_string());
        let out_filename = match &args.template {
            Some(pattern) => format!("{}-{}.png", name, pattern),
            None => format!("{}.png", name),
        };
        let output = args.output_dir.join(out_filename);

        match compile_file(target, &output, args.ppi, &args.root) {
            Ok(()) => {
                printer.status("Compiled", &format!("{} ({})", name, result_size(&args, &name, &output)));
                success += 1;
            }
            Err(RrssError::Compile { message, .. }) => {
                printer.error("Failed", &name);
                for line in message.lines().take(5) {
                    eprintln!("    {}", printer.dim(line));
                }
                failed += 1;
            }
            Err(other) => return Err(other),
        }
    }

    printer.info(
        "Finished",
        &format!("{} compiled, {} failed", success, failed),
    );
    if failed > 0 {
        return Err(RrssError::Compile {
            message: format!("{} failed to compile", plural(failed, "file", "files")),
            help: None,
        });
    }
    Ok(())
}

/// Invoke `typst compile` once. Used by both `compile` and `build`.
pub(crate) fn compile_file(target: &Path, output: &Path, ppi: u32, root: &Path) -> Result<()> {
    let result = Command::new("typst")
        .arg("compile")
        .arg("--root")
        .arg(root)
        .arg(format!("--ppi={}", ppi))
        .arg(target)
        .arg(output)
        .output()
        .map_err(|e| RrssError::Compile {
            message: format!("Failed to run typst: {}", e),
            help: Some("Is typst installed and on your PATH?".to_string()),
        })?;

    if result.status.success() {
        Ok(())
    } else {
        Err(RrssError::Compile {
            message: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            help: None,
        })
    }
}

fn resolve_files(args: &CompileArgs) -> Vec<PathBuf> {
    if args.all {
        let mut files: Vec<PathBuf> = WalkDir::new(args.root.join("content"))
            .max_depth(1)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "typ"))
            .collect();
        files.sort();
        files
    } else if !args.files.is_empty() {
        args.files.clone()
    } else {
        vec![PathBuf::from("main.typ")]
    }
}

/// Status-line summary of what a compilation produced: file size for a
/// single page, image count for a multipage pattern.
fn result_size(args: &CompileArgs, name: &str, output: &Path) -> String {
    if args.template.is_some() {
        let prefix = format!("{}-", name);
        let count = fs::read_dir(&args.output_dir)
            .map(|entries| {
                entries
                    .filter_map(|e| e.ok())
                    .filter(|e| {
                        let file_name = e.file_name().to_string_lossy().into_owned();
                        file_name.starts_with(&prefix) && file_name.ends_with(".png")
                    })
                    .count()
            })
            .unwrap_or(0);
        plural(count, "image", "images")
    } else {
        fs::metadata(output)
            .map(|m| display_size(m.len()))
            .unwrap_or_else(|_| "?".to_string())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    fn args() -> CompileArgs {
        CompileArgs {
            files: Vec::new(),
            ppi: 144,
            output_dir: PathBuf::from("output"),
            all: false,
            template: None,
            root: PathBuf::from("."),
        }
    }

    #[test]
    fn test_default_target_is_main_typ() {
        assert_eq!(resolve_files(&args()), vec![PathBuf::from("main.typ")]);
    }

    #[test]
    fn test_explicit_files_pass_through() {
        let mut a = args();
        a.files = vec![PathBuf::from("intro.typ"), PathBuf::from("outro.typ")];
        assert_eq!(resolve_files(&a), a.files);
    }

    #[test]
    fn test_all_scans_content_dir() {
        let dir = tempdir().unwrap();
        let content = dir.path().join("content");
        fs::create_dir_all(&content).unwrap();
        fs::write(content.join("b.typ"), "").unwrap();
        fs::write(content.join("a.typ"), "").unwrap();
        fs::write(content.join("notes.md"), "").unwrap();

        let mut a = args();
        a.all = true;
        a.root = dir.path().to_path_buf();

        let files = resolve_files(&a);
        assert_eq!(files, vec![content.join("a.typ"), content.join("b.typ")]);
    }

    #[test]
    fn test_compile_failure_is_a_compile_error() {
        // Fails whether typst is installed (missing source) or not (spawn)
        let dir = tempdir().unwrap();
        let err = compile_file(
            &dir.path().join("absent.typ"),
            &dir.path().join("absent.png"),
            144,
            dir.path(),
        )
        .unwrap_err();
        assert!(matches!(err, RrssError::Compile { .. }));
    }
}
