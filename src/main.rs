use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use gwc_decomp::gwc::{self, Cartridge};

#[derive(Parser, Debug)]
struct Args {
    /// Path to the .gwc cartridge
    input: PathBuf,

    /// Directory where extracted files are written
    #[arg(long, default_value = ".")]
    output: PathBuf,

    /// Extract the compiled Lua bytecode
    #[arg(long)]
    lua: bool,

    /// Show the completion code
    #[arg(long)]
    completion: bool,

    /// Extract media files
    #[arg(long)]
    media: bool,

    /// Show all header fields
    #[arg(short, long)]
    verbose: bool,

    /// Do everything
    #[arg(long)]
    all: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut cart = Cartridge::open(&args.input)
        .with_context(|| format!("failed to decode {}", args.input.display()))?;

    if !args.output.is_dir() {
        println!("creating directory {}", args.output.display());
        fs::create_dir_all(&args.output)
            .with_context(|| format!("failed to create {}", args.output.display()))?;
    }

    if args.lua || args.all {
        let path = args.output.join("cartridge.luac");
        write(&path, &cart.extract_bytecode()?)?;
        println!("luac file extracted: {}", path.display());
    }

    if args.completion || args.all {
        let code = &cart.data().header().completion_code;
        let short: String = code.chars().take(15).collect();
        println!("completion code: {short} (full: {code})");
    }

    if args.media || args.all {
        println!("extracting media from {}", args.input.display());
        for asset in cart.extract_media()? {
            let path = args
                .output
                .join(format!("media_{}.{}", asset.id, asset.extension()));
            write(&path, &asset.data)?;
            println!(" - extracted: {}", path.display());
        }
    }

    if args.verbose || args.all {
        print_header(cart.data().header());
    }

    Ok(())
}

fn write(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).with_context(|| format!("failed to write {}", path.display()))
}

fn print_header(header: &gwc::CartridgeHeader) {
    println!("relative data about the cartridge");
    for (name, value) in header.describe() {
        println!(" - {name}: {value}");
    }
}
