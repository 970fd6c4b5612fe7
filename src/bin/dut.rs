//! Disk Usage Tree (dut) - Main binary entry point

use dut::cli::args::{Command, FlatArgs, TreeArgs, parse_args};
use dut::cli::output::{RenderOptions, format_json, render_flat, render_tree};
use dut::services::format::format_size;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

fn main() {
    // Initialize logger (controlled by RUST_LOG environment variable)
    // Example: RUST_LOG=debug dut flat /path
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_help();
        return;
    }

    match args[1].as_str() {
        "--help" | "-h" => {
            print_help();
            return;
        }
        "--version" | "-v" => {
            print_version();
            return;
        }
        _ => {}
    }

    let cli_args = match parse_args(&args) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Use --help for usage information");
            process::exit(2);
        }
    };

    let exit_code = match &cli_args.command {
        Command::Flat(flat_args) => handle_flat(flat_args),
        Command::Tree(tree_args) => handle_tree(tree_args),
    };

    process::exit(exit_code);
}

fn handle_flat(args: &FlatArgs) -> i32 {
    let root = absolute_root(&args.path);

    if !args.quiet {
        eprintln!("Scanning: {}", root.display());
    }

    let result = dut::scan_flat(&root);

    if !args.quiet {
        eprintln!(
            "Found {} entries ({})",
            result.summary.recursive_counts.total(),
            format_size(result.summary.size_bytes)
        );
    }

    let report = || -> dut::Result<()> {
        let mut out = open_sink(args.output.as_deref())?;
        if args.json {
            writeln!(out, "{}", format_json(&result))?;
        } else {
            render_flat(&mut out, &result, &args.render)?;
        }
        out.flush()?;
        Ok(())
    };

    match report() {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: Failed to write report: {e}");
            4
        }
    }
}

fn handle_tree(args: &TreeArgs) -> i32 {
    let root = absolute_root(&args.path);

    if !args.quiet {
        eprintln!("Scanning: {}", root.display());
    }

    let node = dut::scan_tree(&root, args.levels);

    if !args.quiet {
        eprintln!(
            "Found {} entries ({})",
            node.summary.recursive_counts.total(),
            format_size(node.summary.size_bytes)
        );
    }

    let report = || -> dut::Result<()> {
        let mut out = open_sink(args.output.as_deref())?;
        render_tree(&mut out, &node, &args.render)?;
        out.flush()?;
        Ok(())
    };

    match report() {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: Failed to write report: {e}");
            4
        }
    }
}

/// Resolve the scan root to an absolute path. If canonicalization fails the
/// path is passed through as given and the scanner degrades it per its
/// unreachable-root policy.
fn absolute_root(path: &str) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|err| {
        log::warn!("cannot canonicalize {path}: {err}");
        PathBuf::from(path)
    })
}

/// Open the report sink: a freshly created file, or stdout when no output
/// path was given.
fn open_sink(output: Option<&str>) -> dut::Result<Box<dyn Write>> {
    match output {
        Some(path) => Ok(Box::new(File::create(path)?)),
        None => Ok(Box::new(io::stdout().lock())),
    }
}

fn print_help() {
    let defaults = RenderOptions::default();
    println!("Disk Usage Tree (dut) - Report disk usage as a depth-annotated tree");
    println!();
    println!("USAGE:");
    println!("    dut flat <PATH> [OPTIONS]");
    println!("    dut tree <PATH> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    flat      Walk the whole subtree and list every entry, depth-sorted");
    println!("    tree      Walk to a level bound and print a nested per-directory view");
    println!();
    println!("GLOBAL OPTIONS:");
    println!("    -h, --help                 Show this help message");
    println!("    -v, --version              Show version information");
    println!();
    println!("COMMON OPTIONS:");
    println!(
        "    --max-display-depth <N>   Deepest level to print (default: {})",
        defaults.max_display_depth
    );
    println!(
        "    --indent-width <N>        Indent unit width (default: {})",
        defaults.indent_width
    );
    println!("    --indent-style <S>        Indentation: branch (default) or flat");
    println!("    --output <FILE>           Write the report to a file instead of stdout");
    println!("    --quiet                   Suppress non-error progress output");
    println!();
    println!("FLAT OPTIONS:");
    println!(
        "    --max-rows <N>            Row cap per depth band (default: {})",
        defaults.max_rows_per_band
    );
    println!("    --json                    Emit machine-readable output");
    println!();
    println!("TREE OPTIONS:");
    println!("    --levels <N>              Enumerate N levels of children (default: unbounded)");
    println!();
    println!("EXAMPLES:");
    println!("    dut flat /var/log --max-display-depth 2 --max-rows 10");
    println!("    dut tree /home --levels 1 --indent-style flat");
    println!("    dut flat /data --json --output data.json");
}

fn print_version() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_DATE: &str = env!("GIT_DATE");
    const BUILD_TARGET: &str = env!("BUILD_TARGET");

    println!("dut {VERSION}");
    println!("Commit: {GIT_HASH} ({GIT_DATE})");
    println!("Target: {BUILD_TARGET}");

    #[cfg(debug_assertions)]
    println!("Build: debug");
    #[cfg(not(debug_assertions))]
    println!("Build: release");
}
