//! Custom cargo commands for the search widget.
//!
//! Usage:
//!   cargo xtask verify       - Run full verification suite
//!   cargo xtask test         - Run all tests
//!   cargo xtask check        - Quick check (check + test + clippy)
//!   cargo xtask bench        - Run benchmarks
//!   cargo xtask build-wasm   - Build the browser bundle into pkg/

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("build-wasm") => build_wasm()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify       Run full verification suite (markers + tests + clippy + wasm build)
  test         Run all Rust tests
  check        Quick check (cargo check + test + clippy)
  bench        Run benchmarks
  build-wasm   Build the browser bundle with wasm-pack (--target web)
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("Search Widget Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking invariant markers...");
    check_invariant_markers()?;
    println!("✓ Invariant markers present\n");

    println!("[2/4] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    run_cargo(&[
        "clippy",
        "--quiet",
        "--target",
        "wasm32-unknown-unknown",
        "--features",
        "wasm",
        "--",
        "-D",
        "warnings",
    ])?;
    println!("✓ Clippy passed\n");

    println!("[4/4] Building wasm bundle...");
    build_wasm()?;
    println!("✓ Bundle built\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Build `pkg/` for `<script type="module">` use, then shrink it with
/// wasm-opt when one is installed.
fn build_wasm() -> Result<()> {
    let root = project_root()?;

    let status = Command::new("wasm-pack")
        .args([
            "build",
            "--target",
            "web",
            "--release",
            "--out-dir",
            "pkg",
            "--",
            "--features",
            "wasm",
        ])
        .current_dir(&root)
        .status()
        .context("Failed to run wasm-pack (is it installed?)")?;

    if !status.success() {
        bail!("wasm-pack build failed");
    }

    let wasm = root.join("pkg/sift_bg.wasm");
    match Command::new("wasm-opt")
        .arg("-O3")
        .arg(&wasm)
        .arg("-o")
        .arg(&wasm)
        .status()
    {
        Ok(status) if status.success() => println!("  wasm-opt applied"),
        Ok(_) => bail!("wasm-opt failed on {}", wasm.display()),
        Err(_) => println!("  (wasm-opt not found, skipping)"),
    }

    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

fn check_invariant_markers() -> Result<()> {
    let root = project_root()?;
    let src_dir = root.join("src");

    let output = Command::new("grep")
        .args(["-r", "INVARIANT:", "--include=*.rs"])
        .current_dir(&src_dir)
        .output()
        .context("Failed to run grep")?;

    let count = output.stdout.split(|&b| b == b'\n').filter(|l| !l.is_empty()).count();

    if count < 5 {
        bail!(
            "Expected at least 5 INVARIANT markers, found {}. Someone may have removed contract checks!",
            count
        );
    }

    Ok(())
}
