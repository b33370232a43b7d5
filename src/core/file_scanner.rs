use std::{
    env,
    path::{self, Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use colored::Colorize;
use glob::Pattern;
use walkdir::{DirEntry, WalkDir};

/// Directory extensions Finder presents as a single file. Their contents are
/// never walked.
const PACKAGE_EXTENSIONS: &[&str] = &[
    "app",
    "bundle",
    "framework",
    "playground",
    "xcframework",
    "xcodeproj",
    "xcworkspace",
];

/// Options controlling which files a scan picks up.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// File extensions (without the dot) to analyze.
    pub extensions: Vec<String>,
    /// Paths to skip. Entries with `*` or `?` are globs, anything else is a
    /// path relative to `base_dir` that skips everything below it.
    pub ignores: Vec<String>,
    /// Directory ignore entries are resolved against, usually the one holding
    /// the config file. Empty means the current directory.
    pub base_dir: PathBuf,
    pub verbose: bool,
}

/// Result of scanning files.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Files to analyze, sorted.
    pub files: Vec<PathBuf>,
    /// Entries that could not be accessed.
    pub skipped_count: usize,
}

/// Check if a pattern contains glob wildcards (* or ?).
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

struct IgnoreRules {
    literal_paths: Vec<PathBuf>,
    globs: Vec<Pattern>,
    base_dir: PathBuf,
}

impl IgnoreRules {
    fn new(options: &ScanOptions) -> Result<Self> {
        let base_dir = if options.base_dir.as_os_str().is_empty() {
            env::current_dir()?
        } else {
            path::absolute(&options.base_dir)?
        };
        let mut literal_paths = Vec::new();
        let mut globs = Vec::new();

        for p in &options.ignores {
            if is_glob_pattern(p) {
                globs.push(
                    Pattern::new(p)
                        .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", p))?,
                );
            } else {
                literal_paths.push(base_dir.join(p));
            }
        }

        Ok(Self {
            literal_paths,
            globs,
            base_dir,
        })
    }

    /// `absolute` is the walked path anchored at the current directory.
    fn is_ignored(&self, path: &Path, absolute: &Path) -> bool {
        if self
            .literal_paths
            .iter()
            .any(|ignore_path| absolute.starts_with(ignore_path))
        {
            return true;
        }

        let relative = absolute.strip_prefix(&self.base_dir).ok();
        self.globs.iter().any(|p| {
            p.matches_path(path) || relative.is_some_and(|rel| p.matches_path(rel))
        })
    }
}

/// Collect the source files under `root`.
///
/// A regular file is returned as-is, whatever its extension. A directory is
/// walked recursively, keeping files with a configured extension and skipping
/// hidden entries, package bundles and ignored paths. A missing path is an
/// error.
pub fn scan_files(root: &Path, options: &ScanOptions) -> Result<ScanResult> {
    if !root.exists() {
        bail!("File doesn't exist at path: {}", root.display());
    }

    if root.is_file() {
        return Ok(ScanResult {
            files: vec![root.to_path_buf()],
            skipped_count: 0,
        });
    }

    if !root.is_dir() {
        bail!("Unable to read input path: {}", root.display());
    }

    let ignores = IgnoreRules::new(options)?;
    let absolute_root = path::absolute(root)?;
    let mut files = Vec::new();
    let mut skipped_count = 0;

    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !(is_hidden(entry) || is_package(entry)));

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if options.verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };

        let path = entry.path();
        let absolute = match path.strip_prefix(root) {
            Ok(rel) => absolute_root.join(rel),
            Err(_) => path.to_path_buf(),
        };

        if ignores.is_ignored(path, &absolute) {
            continue;
        }

        if entry.file_type().is_file() && has_extension(path, &options.extensions) {
            files.push(path.to_path_buf());
        }
    }

    files.sort();

    Ok(ScanResult {
        files,
        skipped_count,
    })
}

fn is_package(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .path()
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| PACKAGE_EXTENSIONS.contains(&ext))
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed == ext))
}
