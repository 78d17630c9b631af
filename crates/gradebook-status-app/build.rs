use std::fs;
use std::path::Path;

fn main() {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir");
    let workspace_root = Path::new(&manifest_dir)
        .ancestors()
        .nth(2)
        .expect("crate should live under <root>/crates/");
    let version_path = workspace_root.join("VERSION");
    println!("cargo:rerun-if-changed={}", version_path.display());

    let version = fs::read_to_string(&version_path)
        .map(|raw| raw.trim().to_string())
        .unwrap_or_else(|error| panic!("read {}: {error}", version_path.display()));
    assert!(!version.is_empty(), "VERSION must not be blank");

    println!("cargo:rustc-env=GRADEBOOK_STATUS_VERSION={version}");
}
