use std::path::Path;
use std::process::Command;

/// Commit shown by `kaspi --version`. `GIT_SHA` wins over asking git, for
/// builds from source tarballs or sandboxes without a checkout.
fn build_sha(repo_root: &Path) -> Option<String> {
    if let Ok(sha) = std::env::var("GIT_SHA") {
        let sha = sha.trim();
        if !sha.is_empty() {
            return Some(sha.chars().take(12).collect());
        }
    }

    let out = Command::new("git")
        .arg("-C")
        .arg(repo_root)
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    out.status.success().then(|| String::from_utf8_lossy(&out.stdout).trim().to_string())
}

fn main() {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let repo_root = Path::new(&manifest_dir).join("..");

    println!("cargo:rerun-if-env-changed=GIT_SHA");
    for tracked in [".git/HEAD", ".git/refs/heads"] {
        let p = repo_root.join(tracked);
        if p.exists() {
            println!("cargo:rerun-if-changed={}", p.display());
        }
    }

    let sha = build_sha(&repo_root)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=KASPI_BUILD_SHA={sha}");
}
