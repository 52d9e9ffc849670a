// SPDX-License-Identifier: MPL-2.0
//! Scans a TypeScript source tree for package imports, strips version
//! suffixes, and writes a JSON report (`detected-dependencies.json`)
//! grouping packages with the files that reference them. Also prints a
//! `dependencies` / `devDependencies` partition with pinned versions for a
//! handful of well-known packages.

use arcana::error::{Error, Result};
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing_subscriber::EnvFilter;

/// Extensions of files worth scanning.
const EXTENSIONS: [&str; 2] = ["ts", "tsx"];

/// Directories that never contain project sources.
const SKIP_DIRS: [&str; 4] = ["node_modules", ".git", "dist", ".vite"];

/// Report file written into the scanned root.
const REPORT_FILE: &str = "detected-dependencies.json";

/// The three import forms: static `import … from "x"`, bare `import "x"`,
/// and dynamic `import("x")`.
static IMPORT_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(
            r#"import\s+(?:(?:\{[^}]*\}|\*\s+as\s+\w+|\w+)(?:\s*,\s*(?:\{[^}]*\}|\*\s+as\s+\w+|\w+))*\s+)?from\s+['"]([^'"]+)['"]"#,
        )
        .expect("static import pattern is valid"),
        Regex::new(r#"import\s+['"]([^'"]+)['"]"#).expect("bare import pattern is valid"),
        Regex::new(r#"import\s*\(\s*['"]([^'"]+)['"]\s*\)"#)
            .expect("dynamic import pattern is valid"),
    ]
});

/// Matches the version suffix of a specifier (`@` followed by a digit or
/// dot, through the end).
static VERSION_SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@[\d.]+.*$").expect("version suffix pattern is valid"));

/// Packages that belong in `devDependencies` (matched by substring, as the
/// scoped prefixes show).
const DEV_PACKAGES: [&str; 9] = [
    "typescript",
    "vite",
    "@vitejs/plugin-react",
    "tailwindcss",
    "postcss",
    "autoprefixer",
    "eslint",
    "@types/",
    "@typescript-eslint/",
];

/// Pinned versions for well-known packages; everything else gets "latest".
fn known_version(name: &str) -> &'static str {
    match name {
        "react" => "^18.3.0",
        "react-dom" => "^18.3.0",
        "typescript" => "^5.2.2",
        "vite" => "^5.0.0",
        "@vitejs/plugin-react" => "^4.0.0",
        "tailwindcss" => "^3.4.0",
        "motion" => "^11.0.4",
        "lucide-react" => "^0.332.0",
        "clsx" => "^2.1.0",
        "tailwind-merge" => "^2.3.0",
        "class-variance-authority" => "^0.7.1",
        "react-hook-form" => "^7.55.0",
        _ => "latest",
    }
}

/// Extracts the non-relative import specifiers from one file's content.
fn parse_imports(content: &str) -> Vec<String> {
    let mut imports = Vec::new();
    for pattern in IMPORT_PATTERNS.iter() {
        for capture in pattern.captures_iter(content) {
            let specifier = &capture[1];
            if !specifier.starts_with('.') && !specifier.starts_with('/') {
                imports.push(specifier.to_string());
            }
        }
    }
    imports
}

/// Normalizes a specifier to its package name: strips the version suffix;
/// scoped packages keep the org prefix, others keep only the root segment.
fn clean_package_name(specifier: &str) -> String {
    let clean = VERSION_SUFFIX_RE.replace(specifier, "").into_owned();

    if clean.starts_with('@') && clean.contains('/') {
        return clean;
    }

    clean
        .split('/')
        .next()
        .unwrap_or(clean.as_str())
        .to_string()
}

fn is_dev_package(name: &str) -> bool {
    DEV_PACKAGES.iter().any(|dev| name.contains(dev))
}

/// One package in the report.
#[derive(Debug, Serialize)]
struct PackageReport {
    name: String,
    version: &'static str,
    files: Vec<String>,
}

/// Scans the tree and groups imports per package.
fn build_report(root: &Path) -> Result<BTreeMap<String, PackageReport>> {
    let mut files = Vec::new();
    walk(root, &mut files)?;
    files.sort();
    println!("scanned {} source files", files.len());

    let mut report: BTreeMap<String, PackageReport> = BTreeMap::new();
    for file in &files {
        let content = fs::read_to_string(file)?;
        let relative = file
            .strip_prefix(root)
            .unwrap_or(file)
            .to_string_lossy()
            .into_owned();

        for specifier in parse_imports(&content) {
            let name = clean_package_name(&specifier);
            let entry = report.entry(name.clone()).or_insert_with(|| PackageReport {
                version: known_version(&name),
                name,
                files: Vec::new(),
            });
            if !entry.files.contains(&relative) {
                entry.files.push(relative.clone());
            }
        }
    }
    Ok(report)
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

/// Splits the report into dependency / dev-dependency version maps.
fn partition(
    report: &BTreeMap<String, PackageReport>,
) -> (BTreeMap<&str, &str>, BTreeMap<&str, &str>) {
    let mut dependencies = BTreeMap::new();
    let mut dev_dependencies = BTreeMap::new();
    for (name, package) in report {
        if is_dev_package(name) {
            dev_dependencies.insert(name.as_str(), package.version);
        } else {
            dependencies.insert(name.as_str(), package.version);
        }
    }
    (dependencies, dev_dependencies)
}

fn print_help() {
    println!(
        "\
Usage: scan-imports [options] [path]

Scans .ts/.tsx files under the given path (default: current directory)
for package imports, writes {REPORT_FILE} into that path, and prints
dependency / devDependency partitions.

Options:
  --help, -h    show this help"
    );
}

fn run() -> Result<()> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print_help();
        return Ok(());
    }

    let root: PathBuf = args
        .opt_free_from_str()
        .map_err(|e| Error::Io(e.to_string()))?
        .unwrap_or_else(|| PathBuf::from("."));

    let report = build_report(&root)?;

    println!("\ndetected packages:");
    println!("{}", serde_json::to_string_pretty(&report)?);

    let report_path = root.join(REPORT_FILE);
    fs::write(&report_path, serde_json::to_string_pretty(&report)?)?;
    println!("\nreport written to {}", report_path.display());

    let (dependencies, dev_dependencies) = partition(&report);
    println!("\n=== dependencies ===");
    println!("{}", serde_json::to_string_pretty(&dependencies)?);
    println!("\n=== devDependencies ===");
    println!("{}", serde_json::to_string_pretty(&dev_dependencies)?);

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(err) = run() {
        eprintln!("scan-imports: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parses_the_three_import_forms() {
        let content = concat!(
            "import React from \"react\";\n",
            "import \"./globals.css\";\n",
            "import \"side-effect-pkg\";\n",
            "const mod = await import('lazy-pkg');\n",
            "import { motion } from 'motion/react';\n",
        );
        let imports = parse_imports(content);
        assert!(imports.contains(&"react".to_string()));
        assert!(imports.contains(&"side-effect-pkg".to_string()));
        assert!(imports.contains(&"lazy-pkg".to_string()));
        assert!(imports.contains(&"motion/react".to_string()));
        // Relative imports are skipped.
        assert!(!imports.iter().any(|i| i.starts_with('.')));
    }

    #[test]
    fn clean_name_strips_versions_and_subpaths() {
        assert_eq!(clean_package_name("lucide-react@0.487.0"), "lucide-react");
        assert_eq!(clean_package_name("motion/react"), "motion");
        assert_eq!(
            clean_package_name("@radix-ui/react-slot@1.1.2"),
            "@radix-ui/react-slot"
        );
        assert_eq!(clean_package_name("react"), "react");
    }

    #[test]
    fn dev_packages_are_partitioned_by_substring() {
        assert!(is_dev_package("typescript"));
        assert!(is_dev_package("@types/node"));
        assert!(is_dev_package("@typescript-eslint/parser"));
        assert!(!is_dev_package("react"));
        assert!(!is_dev_package("motion"));
    }

    #[test]
    fn known_versions_are_pinned_and_unknown_default_to_latest() {
        assert_eq!(known_version("react"), "^18.3.0");
        assert_eq!(known_version("motion"), "^11.0.4");
        assert_eq!(known_version("some-unknown-pkg"), "latest");
    }

    #[test]
    fn report_groups_files_per_package() {
        let dir = tempdir().expect("temp dir");
        fs::create_dir_all(dir.path().join("components")).unwrap();
        fs::write(
            dir.path().join("App.tsx"),
            "import { motion } from 'motion/react';\nimport Home from './components/Home';\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("components/Home.tsx"),
            "import { motion } from 'motion/react';\nimport { Star } from \"lucide-react@0.487.0\";\n",
        )
        .unwrap();

        let report = build_report(dir.path()).expect("report");
        let motion = report.get("motion").expect("motion entry");
        assert_eq!(motion.files.len(), 2);
        let lucide = report.get("lucide-react").expect("lucide entry");
        assert_eq!(lucide.files, vec!["components/Home.tsx"]);
        assert!(!report.contains_key("./components/Home"));
    }

    #[test]
    fn report_serializes_to_valid_json() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join("a.ts"), "import \"react\";\n").unwrap();

        let report = build_report(dir.path()).expect("report");
        let json = serde_json::to_string_pretty(&report).expect("serialize");
        let value: serde_json::Value = serde_json::from_str(&json).expect("round trip");
        assert!(value.get("react").is_some());
    }
}
