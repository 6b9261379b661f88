//! Stamps the crawler binary with the git commit and build date.
//!
//! Both values reach the crate as `CRAWLER_BUILD_COMMIT` and
//! `CRAWLER_BUILD_DATE`, read back with `env!` in `src/build_info.rs`.
//! Release pipelines can pin them through `BUILD_COMMIT` / `BUILD_DATE`.

use std::env;
use std::process::Command;

const UNKNOWN: &str = "unknown";

fn git_short_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8(output.stdout).ok()?.trim().to_string();
    (!hash.is_empty()).then_some(hash)
}

fn main() {
    let commit = env::var("BUILD_COMMIT")
        .ok()
        .or_else(git_short_hash)
        .unwrap_or_else(|| UNKNOWN.to_string());
    let date = env::var("BUILD_DATE")
        .unwrap_or_else(|_| chrono::Utc::now().format("%Y-%m-%d").to_string());

    println!("cargo:rustc-env=CRAWLER_BUILD_COMMIT={}", commit);
    println!("cargo:rustc-env=CRAWLER_BUILD_DATE={}", date);

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-env-changed=BUILD_COMMIT");
    println!("cargo:rerun-if-env-changed=BUILD_DATE");
}
