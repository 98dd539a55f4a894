//! CLI tool for bentogrid - builds a grid, applies merges and outputs SVG
//!
//! Usage:
//!   bentogrid_cli --rows 2 --cols 3 --merge A1:B2        # SVG to stdout
//!   bentogrid_cli --width 1200 --height 800 --stroke -o out.svg
//!   bentogrid_cli --config sizing.json --json             # Geometry as JSON
//!
//! Set `RUST_LOG=debug` to trace clicks and merges.

#![allow(clippy::exit)]

use std::env;
use std::fs;
use std::io;
use std::process;

use bentogrid::cell_ref::require_cell_range;
use bentogrid::error::Result;
use bentogrid::export::{ExportSink, FileSink, WriterSink};
use bentogrid::merge::MergeOptions;
use bentogrid::types::{CellRange, RenderStyle, SizingConfig, DEFAULT_COLS, DEFAULT_ROWS};
use bentogrid::viewer::Session;

const USAGE: &str = "Usage: bentogrid_cli [--rows N] [--cols N] [--width W] [--height H] \
[--no-gap] [--stroke] [--safe-area] [--toggle-region] [--merge A1:B2]... \
[--config sizing.json] [--style style.json] [--json] [-o output.svg]";

struct Args {
    rows: f64,
    cols: f64,
    width: Option<f64>,
    height: Option<f64>,
    no_gap: bool,
    stroke: bool,
    safe_area: bool,
    toggle_region: bool,
    merges: Vec<CellRange>,
    config: Option<String>,
    style: Option<String>,
    json: bool,
    output: Option<String>,
}

fn fail(message: &str) -> ! {
    eprintln!("{message}");
    eprintln!("{USAGE}");
    process::exit(1);
}

fn number(flag: &str, value: Option<String>) -> f64 {
    let Some(value) = value else {
        fail(&format!("{flag} needs a value"));
    };
    value
        .parse()
        .unwrap_or_else(|_| fail(&format!("{flag}: '{value}' is not a number")))
}

fn parse_args() -> Args {
    let mut args = Args {
        rows: f64::from(DEFAULT_ROWS),
        cols: f64::from(DEFAULT_COLS),
        width: None,
        height: None,
        no_gap: false,
        stroke: false,
        safe_area: false,
        toggle_region: false,
        merges: Vec::new(),
        config: None,
        style: None,
        json: false,
        output: None,
    };

    let mut iter = env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--rows" => args.rows = number(&arg, iter.next()),
            "--cols" | "--columns" => args.cols = number(&arg, iter.next()),
            "--width" => args.width = Some(number(&arg, iter.next())),
            "--height" => args.height = Some(number(&arg, iter.next())),
            "--no-gap" => args.no_gap = true,
            "--stroke" => args.stroke = true,
            "--safe-area" => args.safe_area = true,
            "--toggle-region" => args.toggle_region = true,
            "--merge" => {
                let Some(range) = iter.next() else {
                    fail("--merge needs a range like A1:B2");
                };
                match require_cell_range(&range) {
                    Ok(range) => args.merges.push(range),
                    Err(e) => fail(&e.to_string()),
                }
            }
            "--config" => args.config = iter.next(),
            "--style" => args.style = iter.next(),
            "--json" => args.json = true,
            "-o" | "--output" => args.output = iter.next(),
            "-h" | "--help" => {
                println!("{USAGE}");
                process::exit(0);
            }
            other => fail(&format!("Unknown argument: {other}")),
        }
    }
    args
}

fn load_sizing(args: &Args) -> Result<SizingConfig> {
    let mut sizing = match &args.config {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => SizingConfig::default(),
    };
    sizing.remove_gap |= args.no_gap;
    sizing.add_stroke |= args.stroke;
    sizing.add_safe_area |= args.safe_area;
    Ok(sizing)
}

fn load_style(args: &Args) -> Result<RenderStyle> {
    match &args.style {
        Some(path) => Ok(serde_json::from_str(&fs::read_to_string(path)?)?),
        None => Ok(RenderStyle::default()),
    }
}

fn run(args: &Args) -> Result<()> {
    let mut session = Session::new(MergeOptions {
        toggle_region_selection: args.toggle_region,
    });
    session.set_style(load_style(args)?)?;
    session.on_sizing_option_changed(load_sizing(args)?)?;
    if args.width.is_some() || args.height.is_some() {
        let sizing = session.sizing();
        let width = args.width.unwrap_or(f64::from(sizing.width));
        let height = args.height.unwrap_or(f64::from(sizing.height));
        session.set_canvas_size(width, height)?;
    }
    session.on_dimensions_changed(args.rows, args.cols)?;

    for range in &args.merges {
        match session.merge_range(range) {
            Ok(region) => eprintln!("Merged {range} as {}", region.id),
            // Rejected merges leave the grid untouched; keep going
            Err(e) => eprintln!("Skipped {range}: {e}"),
        }
    }

    let document = if args.json {
        serde_json::to_string_pretty(&session.layout()?)?
    } else {
        session.on_export_requested()?
    };

    match &args.output {
        Some(path) => {
            FileSink::new(path).write_document(&document)?;
            eprintln!("Written: {path}");
        }
        None => WriterSink::new(io::stdout().lock()).write_document(&document)?,
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = parse_args();
    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
