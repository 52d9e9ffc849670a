// SPDX-License-Identifier: MPL-2.0
//! Strips `name@version` suffixes from quoted import specifiers in a
//! TypeScript source tree, e.g. `"lucide-react@0.487.0"` becomes
//! `"lucide-react"`. With `--dry-run` it prints a per-line diff preview
//! and leaves every file untouched.

use arcana::error::{Error, Result};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing_subscriber::EnvFilter;

/// Extensions of files worth scanning.
const EXTENSIONS: [&str; 2] = ["ts", "tsx"];

/// Directories that never contain project sources.
const SKIP_DIRS: [&str; 4] = ["node_modules", ".git", "dist", ".vite"];

/// Matches a quoted specifier carrying a version suffix. Group 2 is the
/// bare package name; the suffix starts at the last `@`.
static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(['"])([@\w\-/]+)@[\d.\-\w]+(['"])"#).expect("version pattern is valid")
});

/// Removes version suffixes from every import specifier in `content`.
fn strip_import_versions(content: &str) -> String {
    VERSION_RE.replace_all(content, "${1}${2}${3}").into_owned()
}

/// Collects scannable source files under `root`, depth-first, sorted for
/// stable output.
fn collect_source_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    walk(root, &mut files)?;
    files.sort();
    Ok(files)
}

fn walk(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            let name = entry.file_name();
            let skip = name
                .to_str()
                .is_some_and(|name| SKIP_DIRS.contains(&name));
            if !skip {
                walk(&path, files)?;
            }
        } else if path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| EXTENSIONS.contains(&ext))
        {
            files.push(path);
        }
    }
    Ok(())
}

/// Processes one file; returns whether it needed changes.
fn process_file(path: &Path, root: &Path, dry_run: bool) -> Result<bool> {
    let content = fs::read_to_string(path)?;
    let cleaned = strip_import_versions(&content);

    if content == cleaned {
        return Ok(false);
    }

    let display = path.strip_prefix(root).unwrap_or(path).display();
    println!("✓ {display}");

    if dry_run {
        // Show what would change, line by line.
        for (number, (old, new)) in content.lines().zip(cleaned.lines()).enumerate() {
            if old != new {
                println!("  line {}:", number + 1);
                println!("    - {}", old.trim());
                println!("    + {}", new.trim());
            }
        }
    } else {
        fs::write(path, cleaned)?;
        println!("  updated");
    }

    Ok(true)
}

fn print_help() {
    println!(
        "\
Usage: remove-versions [options] [path]

Strips name@version suffixes from quoted import specifiers in .ts/.tsx
files under the given path (default: current directory).

Options:
  --dry-run, -d    preview changes without touching any file
  --help,    -h    show this help"
    );
}

fn run() -> Result<()> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print_help();
        return Ok(());
    }

    let dry_run = args.contains(["-d", "--dry-run"]);
    let root: PathBuf = args
        .opt_free_from_str()
        .map_err(|e| Error::Io(e.to_string()))?
        .unwrap_or_else(|| PathBuf::from("."));

    let files = collect_source_files(&root)?;
    println!("scanned {} source files", files.len());
    if dry_run {
        println!("\n=== dry run ===");
    }

    let mut processed = 0usize;
    for file in &files {
        if process_file(file, &root, dry_run)? {
            processed += 1;
        }
    }

    println!("\ndone, {processed} files needed changes");
    if dry_run && processed > 0 {
        println!("run again without --dry-run to apply them");
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(err) = run() {
        eprintln!("remove-versions: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn strips_versions_from_plain_and_scoped_packages() {
        let input = concat!(
            "import x from \"lucide-react@0.487.0\";\n",
            "import { Slot } from '@radix-ui/react-slot@1.1.2';\n",
            "import cva from \"class-variance-authority@0.7.1\";\n",
        );
        let expected = concat!(
            "import x from \"lucide-react\";\n",
            "import { Slot } from '@radix-ui/react-slot';\n",
            "import cva from \"class-variance-authority\";\n",
        );
        assert_eq!(strip_import_versions(input), expected);
    }

    #[test]
    fn clean_input_passes_through_unchanged() {
        let input = concat!(
            "import x from \"lucide-react\";\n",
            "import { Slot } from '@radix-ui/react-slot';\n",
            "import local from './components/Button';\n",
        );
        assert_eq!(strip_import_versions(input), input);
    }

    #[test]
    fn stripping_is_idempotent() {
        let input = "import x from \"motion@11.0.4\";\n";
        let once = strip_import_versions(input);
        assert_eq!(strip_import_versions(&once), once);
    }

    #[test]
    fn collect_skips_excluded_directories_and_other_extensions() {
        let dir = tempdir().expect("temp dir");
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::create_dir_all(dir.path().join("node_modules/pkg")).unwrap();
        fs::write(dir.path().join("src/App.tsx"), "").unwrap();
        fs::write(dir.path().join("src/util.ts"), "").unwrap();
        fs::write(dir.path().join("src/styles.css"), "").unwrap();
        fs::write(dir.path().join("node_modules/pkg/index.ts"), "").unwrap();

        let files = collect_source_files(dir.path()).expect("collect");
        let names: Vec<String> = files
            .iter()
            .map(|p| {
                p.strip_prefix(dir.path())
                    .unwrap()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        assert_eq!(names, vec!["src/App.tsx", "src/util.ts"]);
    }

    #[test]
    fn dry_run_reports_but_does_not_modify() {
        let dir = tempdir().expect("temp dir");
        let file = dir.path().join("a.tsx");
        let original = "import x from \"lucide-react@0.487.0\";\n";
        fs::write(&file, original).unwrap();

        let changed = process_file(&file, dir.path(), true).expect("process");
        assert!(changed);
        assert_eq!(fs::read_to_string(&file).unwrap(), original);
    }

    #[test]
    fn real_run_rewrites_the_file() {
        let dir = tempdir().expect("temp dir");
        let file = dir.path().join("a.tsx");
        fs::write(&file, "import x from \"lucide-react@0.487.0\";\n").unwrap();

        let changed = process_file(&file, dir.path(), false).expect("process");
        assert!(changed);
        assert_eq!(
            fs::read_to_string(&file).unwrap(),
            "import x from \"lucide-react\";\n"
        );

        // A second pass finds nothing to do.
        let changed = process_file(&file, dir.path(), false).expect("process");
        assert!(!changed);
    }
}
