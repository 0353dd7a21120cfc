use std::env;
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

fn main() {
    let manifest_dir =
        PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR is set"));
    let assets_root = manifest_dir.join("assets");

    println!("cargo:rerun-if-changed={}", assets_root.display());

    let mut entries = Vec::new();
    if assets_root.is_dir() {
        discover(&assets_root, &assets_root, &mut entries)
            .unwrap_or_else(|err| panic!("Failed scanning {}: {err}", assets_root.display()));
    }

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set"));
    let out_file = out_dir.join("embedded_assets.rs");

    fs::write(&out_file, generate_table(&entries)).expect("write generated embedded_assets.rs");
}

/// A bundled entry: forward-slash relative path plus the absolute source path
/// for files (`None` for directories).
struct Entry {
    rel: String,
    file: Option<PathBuf>,
}

/// Depth-first, parent before children, names sorted for deterministic output.
fn discover(root: &Path, dir: &Path, out: &mut Vec<Entry>) -> io::Result<()> {
    let mut children = dir.read_dir()?.collect::<Result<Vec<_>, _>>()?;
    children.sort_by_key(|e| e.file_name());

    for child in children {
        let path = child.path();
        println!("cargo:rerun-if-changed={}", path.display());

        let rel = to_forward_slash_path(path.strip_prefix(root).unwrap_or(&path));
        if path.is_dir() {
            out.push(Entry { rel, file: None });
            discover(root, &path, out)?;
        } else {
            out.push(Entry {
                rel,
                file: Some(path),
            });
        }
    }

    Ok(())
}

fn generate_table(entries: &[Entry]) -> String {
    let mut out = String::new();

    out.push_str("// @generated by build.rs from the assets/ directory.\n");
    out.push_str("// This file is auto-generated. Do not edit by hand.\n\n");
    out.push_str("pub static EMBEDDED: &[EmbeddedEntry] = &[\n");

    for entry in entries {
        match &entry.file {
            Some(file) => {
                let _ = writeln!(
                    out,
                    "    EmbeddedEntry {{ path: {:?}, contents: Some(include_bytes!({:?})) }},",
                    entry.rel,
                    file.display().to_string()
                );
            }
            None => {
                let _ = writeln!(
                    out,
                    "    EmbeddedEntry {{ path: {:?}, contents: None }},",
                    entry.rel
                );
            }
        }
    }

    out.push_str("];\n");
    out
}

fn to_forward_slash_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
