//! Embeds the commit, build date and cargo profile shown by `arcade --version`.

use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

/// Short hash of `HEAD`, or "unknown" outside a git checkout.
fn git_commit() -> String {
    Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

fn main() {
    // Packagers can pin both values for reproducible builds
    let commit = env::var("ARCADE_BUILD_COMMIT").unwrap_or_else(|_| git_commit());
    let date = env::var("ARCADE_BUILD_DATE")
        .unwrap_or_else(|_| chrono::Utc::now().format("%Y-%m-%d").to_string());
    let profile = env::var("PROFILE").unwrap_or_else(|_| "debug".to_string());

    let generated = format!(
        "pub const BUILD_COMMIT: &str = {:?};\n\
         pub const BUILD_DATE: &str = {:?};\n\
         pub const BUILD_PROFILE: &str = {:?};\n",
        commit, date, profile
    );

    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR for build scripts");
    fs::write(Path::new(&out_dir).join("build_info.rs"), generated)
        .expect("failed to write build_info.rs");

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-env-changed=ARCADE_BUILD_COMMIT");
    println!("cargo:rerun-if-env-changed=ARCADE_BUILD_DATE");
}
