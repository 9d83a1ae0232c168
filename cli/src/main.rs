use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use ooc::consts::{DEFAULT_SURFACE_HEIGHT, DEFAULT_SURFACE_WIDTH};
use ooc::error::LayoutError;
use ooc::geom::PxSize;
use ooc::scene::{Scene, SceneError};
use ooc::unit::UnitValue;
use ooc::viewport::ViewportLayout;
use serde_json::{Value, json};


#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: std::io::Error },
    #[error(transparent)]
    Scene(#[from] SceneError),
    #[error("viewport cannot be placed: {0}")]
    Layout(#[from] LayoutError),
    #[error("invalid JSON value: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "ooc", about = "Resolve object oriented canvas scenes to pixel frames")]
struct Cli {
    /// Surface width used when a scene does not declare one.
    #[arg(long, env = "OOC_WIDTH", default_value_t = DEFAULT_SURFACE_WIDTH)]
    width: i64,

    /// Surface height used when a scene does not declare one.
    #[arg(long, env = "OOC_HEIGHT", default_value_t = DEFAULT_SURFACE_HEIGHT)]
    height: i64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load a scene document and print every drawing's pixel frame.
    Layout {
        /// Path to a JSON scene document.
        file: PathBuf,
    },
    /// Parse a single unit value and resolve it.
    Unit {
        /// Unit string such as `12px`, `50%` or `1.5in`.
        value: String,
        /// Parent extent in pixels that percentages resolve against.
        #[arg(long, default_value_t = 0)]
        reference: i64,
        /// Treat VALUE as a JSON value (number or `{"val", "unit"}` object).
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let default_size = PxSize::new(cli.width, cli.height);

    match cli.command {
        Command::Layout { file } => run_layout(&file, default_size),
        Command::Unit { value, reference, json } => run_unit(&value, reference, json),
    }
}

fn run_layout(file: &Path, default_size: PxSize) -> Result<(), CliError> {
    let text = fs::read_to_string(file).map_err(|source| CliError::Read { path: file.to_path_buf(), source })?;
    let canvas = Scene::from_json(&text)?.into_canvas(default_size);
    let layout = canvas.layout()?;
    tracing::info!(items = layout.items.len(), "scene resolved");
    print_json(&layout_json(canvas.size(), &layout))
}

fn run_unit(raw: &str, reference: i64, as_json: bool) -> Result<(), CliError> {
    let value = if as_json {
        UnitValue::parse(&serde_json::from_str::<Value>(raw)?)
    } else {
        UnitValue::from_text(raw)
    };
    print_json(&unit_json(value, reference))
}

fn layout_json(surface: PxSize, layout: &ViewportLayout) -> Value {
    let items: Vec<Value> = layout
        .items
        .iter()
        .map(|item| match item.frame {
            Ok(frame) => json!({ "id": item.id, "frame": frame }),
            Err(err) => json!({ "id": item.id, "axis": err.axis(), "error": err.to_string() }),
        })
        .collect();
    json!({
        "surface": surface,
        "viewport": layout.frame,
        "items": items,
    })
}

fn unit_json(value: UnitValue, reference: i64) -> Value {
    json!({
        "value": value.to_string(),
        "kind": value.kind(),
        "magnitude": value.magnitude(),
        "reference": reference,
        "px": value.to_px(reference),
    })
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
