#![warn(clippy::pedantic)]

use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use crossterm::style::Stylize;
use map_forge_ascii::{Ascii, Grid, Plane, Resolution};
use map_forge_json::Json;
use map_forge_mesh::Mesh;
use map_forge_models::{Params, Registry};

#[derive(Debug, Parser)]
#[command(name = "Map-Forge")]
#[command(version)]
#[command(about = "Tool for procedurally generating static map meshes.", long_about = None)]
struct Args {
    /// The model to build.
    model: Option<String>,
    /// Construction parameters as `name=value` pairs.
    params: Vec<String>,
    /// The view to project the console preview along.
    #[arg(long, short, default_value_t = View::Top, value_enum)]
    view: View,
    /// Preview grid width. Derived from the mesh extent when omitted.
    #[arg(long)]
    width: Option<usize>,
    /// Preview grid height.
    #[arg(long, default_value_t = Resolution::PREVIEW_HEIGHT)]
    height: usize,
    /// Output format to use.
    #[arg(long, short, default_value_t = Format::Ascii, value_enum)]
    format: Format,
    /// List the registered models and exit.
    #[arg(long)]
    list: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
enum View {
    /// Look down the Z axis.
    Top,
    /// Look down the Y axis.
    Front,
    /// Look down the X axis.
    Side,
}

impl From<View> for Plane {
    fn from(view: View) -> Self {
        match view {
            View::Top => Plane::Top,
            View::Front => Plane::Front,
            View::Side => Plane::Side,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
enum Format {
    /// The console preview renderer.
    Ascii,
    /// The JSON (machine-readable) format renderer.
    Json,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let registry = Registry::default();

    if args.list {
        for name in registry.names() {
            println!("{name}");
        }
        return ExitCode::SUCCESS;
    }

    match run(&args, &registry) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{} {message}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, registry: &Registry) -> Result<(), String> {
    let Some(model) = args.model.as_deref() else {
        return Err(String::from("no model given; try --list"));
    };

    let params = parse_params(&args.params)?;
    let mesh = registry
        .build(model, &params)
        .map_err(|err| err.to_string())?;

    match args.format {
        Format::Ascii => preview(&mesh, args).map_err(|err| err.to_string()),
        Format::Json => {
            println!("{}", Json::draw(&mesh));
            Ok(())
        }
    }
}

/// Project the mesh and print it, deriving the grid width from the
/// projected extent unless one was given.
fn preview(mesh: &Mesh, args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let plane = Plane::from(args.view);

    let resolution = match args.width {
        Some(width) => Resolution::new(width, args.height),
        None => {
            let bounds = mesh.bounding_box()?;
            let (min_h, min_v) = plane.project(bounds.min);
            let (max_h, max_v) = plane.project(bounds.max);
            Resolution::proportional((max_h - min_h, max_v - min_v), args.height)
        }
    };

    let grid = Grid::project(mesh, plane, resolution)?;
    Ascii::draw(&grid, io::stdout().lock())?;
    io::stdout().flush()?;

    Ok(())
}

/// Collect `name=value` pairs into [`Params`].
fn parse_params(pairs: &[String]) -> Result<Params, String> {
    let mut params = Params::new();

    for pair in pairs {
        let Some((name, value)) = pair.split_once('=') else {
            return Err(format!("malformed parameter '{pair}', expected name=value"));
        };
        let value: f64 = value
            .parse()
            .map_err(|_| format!("parameter '{name}' has a non-numeric value '{value}'"))?;
        params.set(name, value);
    }

    Ok(params)
}
