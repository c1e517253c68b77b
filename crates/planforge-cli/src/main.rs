use planforge::FloorPlanDocument;
use planforge::render::raster::{RasterError, RasterOptions, svg_to_jpeg, svg_to_png};
use planforge::render::{Surface, ViewState, floor_label, render_svg};
use serde::Serialize;
use std::io::Read;
use std::str::FromStr;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Plan(planforge::Error),
    Raster(RasterError),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Plan(err) => write!(f, "{err}"),
            CliError::Raster(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<planforge::Error> for CliError {
    fn from(value: planforge::Error) -> Self {
        Self::Plan(value)
    }
}

impl From<RasterError> for CliError {
    fn from(value: RasterError) -> Self {
        Self::Raster(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Render,
    Inspect,
}

#[derive(Debug, Clone, Copy, Default)]
enum RenderFormat {
    #[default]
    Svg,
    Png,
    Jpeg,
}

impl FromStr for RenderFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    pretty: bool,
    render_format: RenderFormat,
    floor: i32,
    zoom: f64,
    compact: bool,
    no_furniture: bool,
    no_grid: bool,
    dimensions: bool,
    render_scale: f32,
    background: Option<String>,
    out: Option<String>,
}

#[derive(Serialize)]
struct FloorOut {
    floor: i32,
    label: String,
    rooms: usize,
    area_m2: f64,
}

#[derive(Serialize)]
struct InspectOut<'a> {
    design_name: Option<&'a str>,
    total_area: Option<f64>,
    rooms: usize,
    floors: Vec<FloorOut>,
}

fn usage() -> &'static str {
    "planforge-cli\n\
\n\
USAGE:\n\
  planforge-cli [render] [--format svg|png|jpg] [--floor <n>] [--zoom <f>] [--compact] [--no-furniture] [--no-grid] [--dimensions] [--scale <n>] [--background <css-color>] [--out <path>] [<path>|-]\n\
  planforge-cli inspect [--pretty] [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', the floor-plan JSON is read from stdin.\n\
  - render prints SVG to stdout by default; use --out to write a file.\n\
  - PNG output defaults to writing next to the input file (or ./out.png for stdin).\n\
  - JPG output defaults to writing next to the input file (or ./out.jpg for stdin).\n\
  - --zoom is clamped to [0.5, 3.0]; --scale multiplies the raster pixel density.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args {
        zoom: 1.0,
        render_scale: 1.0,
        ..Default::default()
    };

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "render" => args.command = Command::Render,
            "inspect" => args.command = Command::Inspect,
            "--pretty" => args.pretty = true,
            "--compact" => args.compact = true,
            "--no-furniture" => args.no_furniture = true,
            "--no-grid" => args.no_grid = true,
            "--dimensions" => args.dimensions = true,
            "--format" => {
                let Some(fmt) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.render_format = fmt
                    .parse::<RenderFormat>()
                    .map_err(|_| CliError::Usage(usage()))?;
            }
            "--floor" => {
                let Some(floor) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.floor = floor.parse::<i32>().map_err(|_| CliError::Usage(usage()))?;
            }
            "--zoom" => {
                let Some(zoom) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.zoom = zoom.parse::<f64>().map_err(|_| CliError::Usage(usage()))?;
            }
            "--scale" => {
                let Some(scale) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.render_scale = scale.parse::<f32>().map_err(|_| CliError::Usage(usage()))?;
                if !(args.render_scale.is_finite() && args.render_scale > 0.0) {
                    return Err(CliError::Usage(usage()));
                }
            }
            "--background" => {
                let Some(bg) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                if !bg.trim().is_empty() {
                    args.background = Some(bg.trim().to_string());
                }
            }
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None => {
            print!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

fn write_bytes(bytes: &[u8], out: &str) -> Result<(), CliError> {
    if out == "-" {
        use std::io::Write;
        std::io::stdout().lock().write_all(bytes)?;
    } else {
        std::fs::write(out, bytes)?;
    }
    Ok(())
}

fn default_raster_out_path(input: Option<&str>, ext: &str) -> std::path::PathBuf {
    match input {
        Some(path) if path != "-" => std::path::PathBuf::from(path).with_extension(ext),
        _ => std::path::PathBuf::from(format!("out.{ext}")),
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let doc = FloorPlanDocument::from_json_str(&text)?;

    match args.command {
        Command::Inspect => {
            let floors = doc
                .floors()
                .into_iter()
                .map(|floor| FloorOut {
                    floor,
                    label: floor_label(floor),
                    rooms: doc.rooms_on(floor).count(),
                    area_m2: doc.floor_area(floor),
                })
                .collect();
            let out = InspectOut {
                design_name: doc.display_name(),
                total_area: doc.total_area,
                rooms: doc.rooms.len(),
                floors,
            };
            write_json(&out, args.pretty)?;
            Ok(())
        }
        Command::Render => {
            let mut state = ViewState {
                floor: args.floor,
                show_furniture: !args.no_furniture,
                show_grid: !args.no_grid,
                show_dimensions: args.dimensions,
                ..ViewState::default()
            };
            state.set_zoom(args.zoom);
            let surface = if args.compact {
                Surface::compact()
            } else {
                Surface::interactive()
            };

            let svg = render_svg(&doc, &state, surface);
            let raster = RasterOptions {
                scale: args.render_scale,
                background: args.background.clone(),
                ..RasterOptions::default()
            };

            match args.render_format {
                RenderFormat::Svg => write_text(&svg, args.out.as_deref()),
                RenderFormat::Png => {
                    let bytes = svg_to_png(&svg, &raster)?;
                    let out = args.out.clone().unwrap_or_else(|| {
                        default_raster_out_path(args.input.as_deref(), "png")
                            .to_string_lossy()
                            .to_string()
                    });
                    write_bytes(&bytes, &out)
                }
                RenderFormat::Jpeg => {
                    let bytes = svg_to_jpeg(&svg, &raster)?;
                    let out = args.out.clone().unwrap_or_else(|| {
                        default_raster_out_path(args.input.as_deref(), "jpg")
                            .to_string_lossy()
                            .to_string()
                    });
                    write_bytes(&bytes, &out)
                }
            }
        }
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
