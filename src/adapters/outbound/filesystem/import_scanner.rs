use crate::shared::Result;
use anyhow::Context;
use regex::Regex;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

/// Maximum Go source file size read by the scanner (10 MB)
const MAX_SOURCE_SIZE: u64 = 10 * 1024 * 1024;

static BLOCK_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("block comment pattern"));

static LINE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)//.*$").expect("line comment pattern"));

/// First top-level declaration; imports cannot appear after it
static FIRST_DECL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(?:func|type|var|const)\b").expect("declaration pattern"));

static GROUPED_IMPORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\bimport\s*\((.*?)\)").expect("grouped import pattern"));

static SINGLE_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^\s*import\s+(?:[\w.]+\s+)?(?:"([^"]+)"|`([^`]+)`)"#)
        .expect("single import pattern")
});

static IMPORT_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]+)"|`([^`]+)`"#).expect("import path pattern"));

/// Extracts the import paths declared in one Go source file
///
/// Handles `import "x"`, `import alias "x"` and grouped `import ( ... )`
/// declarations. Comments and everything after the first top-level
/// declaration are ignored.
pub fn scan_imports_in_source(src: &str) -> BTreeSet<String> {
    let stripped = BLOCK_COMMENT.replace_all(src, " ");
    let stripped = LINE_COMMENT.replace_all(&stripped, "");
    let text: &str = &stripped;
    let header = match FIRST_DECL.find(text) {
        Some(decl) => &text[..decl.start()],
        None => text,
    };

    let mut imports = BTreeSet::new();

    for group in GROUPED_IMPORT.captures_iter(header) {
        if let Some(body) = group.get(1) {
            imports.extend(capture_paths(&IMPORT_PATH, body.as_str()));
        }
    }
    imports.extend(capture_paths(&SINGLE_IMPORT, header));

    imports
}

fn capture_paths(pattern: &Regex, text: &str) -> Vec<String> {
    pattern
        .captures_iter(text)
        .filter_map(|c| c.get(1).or_else(|| c.get(2)))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Returns true for files that contribute to a package build
fn is_package_source(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    name.ends_with(".go") && !name.ends_with("_test.go") && !name.starts_with('.') && !name.starts_with('_')
}

/// Returns true if a constraint above the package clause excludes the file
/// from every build, as `//go:build ignore` generator scripts do
fn is_build_ignored(src: &str) -> bool {
    src.lines()
        .map(str::trim)
        .take_while(|line| !line.starts_with("package"))
        .any(|line| {
            let constraint = line
                .strip_prefix("//go:build ")
                .or_else(|| line.strip_prefix("// +build "));
            constraint.is_some_and(|expr| expr.trim() == "ignore")
        })
}

/// Collects the sorted, de-duplicated imports of the Go package in `dir`
///
/// # Errors
/// Returns an error if the directory cannot be read, a source file is
/// unreadable or oversized, or the directory holds no buildable Go files.
pub fn scan_package_imports(dir: &Path) -> Result<Vec<String>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read directory {}", dir.display()))?;

    let mut imports = BTreeSet::new();
    let mut source_files = 0usize;

    for entry in entries {
        let path = entry?.path();
        if !path.is_file() || !is_package_source(&path) {
            continue;
        }

        let size = fs::metadata(&path)?.len();
        if size > MAX_SOURCE_SIZE {
            anyhow::bail!(
                "{} is too large ({} bytes). Maximum allowed size is {} bytes.",
                path.display(),
                size,
                MAX_SOURCE_SIZE
            );
        }

        let src = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if is_build_ignored(&src) {
            tracing::debug!(file = %path.display(), "skipping build-ignored file");
            continue;
        }
        imports.extend(scan_imports_in_source(&src));
        source_files += 1;
    }

    if source_files == 0 {
        anyhow::bail!("no buildable Go source files in {}", dir.display());
    }

    Ok(imports.into_iter().collect())
}
