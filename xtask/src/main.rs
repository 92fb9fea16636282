//! Build automation tasks for Forest Dash
//!
//! Usage:
//!   cargo xtask build-web                    # Build WASM into dist/web
//!   cargo xtask build-web --zip              # ...and zip it for upload
//!   cargo xtask package-native [--platform]  # Release binary + assets into dist/native

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::Command;

const BIN_NAME: &str = "forest-dash";

/// Pinned to the macroquad version in Cargo.toml
const MQ_JS_BUNDLE_URL: &str =
    "https://raw.githubusercontent.com/not-fl3/macroquad/v0.4.14/js/mq_js_bundle.js";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for Forest Dash")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build WASM for web deployment
    BuildWeb {
        /// Also create dist/forest-dash-web.zip
        #[arg(long)]
        zip: bool,
    },
    /// Build a native release with its assets
    PackageNative {
        /// Target platform label: windows, macos, linux (defaults to host)
        #[arg(long)]
        platform: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::BuildWeb { zip } => {
            build_web()?;
            if zip {
                zip_web()?;
            }
            Ok(())
        }
        Commands::PackageNative { platform } => package_native(platform),
    }
}

/// Copy assets/ into the dist folder. Returns false and skips when the
/// project has no assets/ directory yet; the game draws placeholders then.
fn copy_assets(root: &Path, dist: &Path) -> Result<bool> {
    let assets = root.join("assets");
    if !assets.is_dir() {
        println!("No assets/ directory, skipping asset copy");
        return Ok(false);
    }
    copy_dir_recursive(&assets, &dist.join("assets"))?;
    Ok(true)
}

/// Get the project root directory
fn project_root() -> Result<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask must live one level below the project root")
}

/// Run a command and check for success
fn run_cmd(cmd: &mut Command) -> Result<()> {
    let status = cmd.status().context("Failed to execute command")?;
    if !status.success() {
        anyhow::bail!("Command failed with status: {}", status);
    }
    Ok(())
}

/// Download a file from URL to destination
fn download_file(url: &str, dest: &Path) -> Result<()> {
    println!("Downloading {}...", url);
    run_cmd(
        Command::new("curl")
            .args(["-L", "-o"])
            .arg(dest)
            .arg(url),
    )
}

/// Copy directory recursively
fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<()> {
    std::fs::create_dir_all(dst)?;
    for entry in std::fs::read_dir(src).with_context(|| format!("reading {}", src.display()))? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Clean and recreate an output folder
fn fresh_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        std::fs::remove_dir_all(dir)?;
    }
    std::fs::create_dir_all(dir)?;
    Ok(())
}

/// Copy settings.ron next to the binary if the project has one
fn copy_settings(root: &Path, dist: &Path) -> Result<()> {
    let settings = root.join("settings.ron");
    if settings.exists() {
        std::fs::copy(&settings, dist.join("settings.ron"))?;
    }
    Ok(())
}

/// Build WASM for web deployment
fn build_web() -> Result<()> {
    let root = project_root()?;
    let dist = root.join("dist/web");

    println!("Building WASM...");
    run_cmd(
        Command::new("cargo")
            .current_dir(&root)
            .args(["build", "--release", "--target", "wasm32-unknown-unknown", "--bin", BIN_NAME]),
    )?;

    fresh_dir(&dist)?;

    println!("Copying files to dist/web...");
    let wasm = format!("{}.wasm", BIN_NAME);
    std::fs::copy(
        root.join("target/wasm32-unknown-unknown/release").join(&wasm),
        dist.join(&wasm),
    )
    .context("copying wasm binary")?;

    std::fs::copy(root.join("web/index.html"), dist.join("index.html"))
        .context("copying web/index.html")?;

    let mq_js = dist.join("mq_js_bundle.js");
    download_file(MQ_JS_BUNDLE_URL, &mq_js)?;

    copy_assets(&root, &dist)?;

    println!("Web build complete: dist/web/");
    Ok(())
}

/// Zip dist/web for upload to a web game host
fn zip_web() -> Result<()> {
    let dist = project_root()?.join("dist");
    let zip_name = format!("{}-web.zip", BIN_NAME);
    let zip_path = dist.join(&zip_name);

    if zip_path.exists() {
        std::fs::remove_file(&zip_path)?;
    }

    println!("Creating {}...", zip_name);
    run_cmd(
        Command::new("zip")
            .current_dir(dist.join("web"))
            .arg("-r")
            .arg(format!("../{}", zip_name))
            .arg("."),
    )?;

    println!("Web package ready: dist/{}", zip_name);
    Ok(())
}

/// Build a native release and gather everything it needs at runtime
fn package_native(platform: Option<String>) -> Result<()> {
    let root = project_root()?;
    let platform = platform.unwrap_or_else(|| {
        if cfg!(target_os = "windows") {
            "windows".to_string()
        } else if cfg!(target_os = "macos") {
            "macos".to_string()
        } else {
            "linux".to_string()
        }
    });

    let dist = root.join(format!("dist/native/{}", platform));

    println!("Building native release for {}...", platform);
    fresh_dir(&dist)?;

    run_cmd(
        Command::new("cargo")
            .current_dir(&root)
            .args(["build", "--release", "--bin", BIN_NAME]),
    )?;

    let binary_name = if platform == "windows" {
        format!("{}.exe", BIN_NAME)
    } else {
        BIN_NAME.to_string()
    };

    std::fs::copy(
        root.join("target/release").join(&binary_name),
        dist.join(&binary_name),
    )
    .context("copying release binary")?;

    copy_assets(&root, &dist)?;
    copy_settings(&root, &dist)?;

    println!("Native build complete: dist/native/{}/", platform);
    Ok(())
}
