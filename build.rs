use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");

    let hash = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_default();

    let version = env!("CARGO_PKG_VERSION");
    let long_version = if hash.is_empty() {
        version.to_string()
    } else {
        format!("{} ({})", version, hash)
    };

    println!("cargo:rustc-env=SHELF_LONG_VERSION={}", long_version);
}
