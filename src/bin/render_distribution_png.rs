#[cfg(feature = "cairo-backend")]
use polygon_chart::{AttributeSet, ChartConfig, PolygonChartLayout, Viewport};
#[cfg(feature = "cairo-backend")]
use std::path::PathBuf;

#[cfg(feature = "cairo-backend")]
const DEFAULT_OUTPUT_PATH: &str = "distribution.png";
#[cfg(feature = "cairo-backend")]
const DEFAULT_SIZE_PX: i32 = 250;
#[cfg(feature = "cairo-backend")]
const SAMPLE_VALUES: [f64; 3] = [0.5, 0.1, 1.0];

#[cfg(feature = "cairo-backend")]
#[derive(Debug)]
struct CliArgs {
    arity: u8,
    ring_count: u32,
    size_px: i32,
    output_path: PathBuf,
    config_path: Option<PathBuf>,
}

#[cfg(feature = "cairo-backend")]
fn main() {
    let _ = polygon_chart::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cairo-backend"))]
fn main() {
    eprintln!("this tool requires feature `cairo-backend`");
    std::process::exit(1);
}

#[cfg(feature = "cairo-backend")]
fn run() -> Result<(), String> {
    use polygon_chart::render::{CairoRenderer, Renderer};

    let args = parse_args()?;
    let config = match &args.config_path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            ChartConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => ChartConfig::new(args.arity, args.ring_count),
    };

    let attributes = sample_attributes(config.arity);
    let size = f64::from(args.size_px);
    let frame = PolygonChartLayout::build(&config, &attributes, Viewport::new(size, size))
        .map_err(|err| err.to_string())?;

    let mut renderer =
        CairoRenderer::new(args.size_px, args.size_px).map_err(|err| err.to_string())?;
    renderer.render(&frame).map_err(|err| err.to_string())?;
    renderer
        .write_png(&args.output_path)
        .map_err(|err| err.to_string())?;

    let stats = renderer.last_stats();
    println!(
        "done: {} ({} polygons, {} lines, {} markers, {} labels)",
        args.output_path.display(),
        stats.polygons_filled,
        stats.lines_drawn,
        stats.circles_drawn,
        stats.labels_drawn
    );
    Ok(())
}

/// Demo data: titles 数据1..数据N with the stock scores repeated.
#[cfg(feature = "cairo-backend")]
fn sample_attributes(arity: u8) -> AttributeSet {
    AttributeSet::from_pairs((0..usize::from(arity)).map(|index| {
        (
            format!("数据{}", index + 1),
            SAMPLE_VALUES[index % SAMPLE_VALUES.len()],
        )
    }))
}

#[cfg(feature = "cairo-backend")]
fn parse_args() -> Result<CliArgs, String> {
    let mut parsed = CliArgs {
        arity: 3,
        ring_count: 3,
        size_px: DEFAULT_SIZE_PX,
        output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        config_path: None,
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        let mut value = |flag: &str| {
            args.next()
                .ok_or_else(|| format!("missing value for {flag}"))
        };
        match arg.as_str() {
            "--arity" => {
                parsed.arity = value("--arity")?
                    .parse()
                    .map_err(|err| format!("invalid --arity: {err}"))?;
            }
            "--rings" => {
                parsed.ring_count = value("--rings")?
                    .parse()
                    .map_err(|err| format!("invalid --rings: {err}"))?;
            }
            "--size" => {
                parsed.size_px = value("--size")?
                    .parse()
                    .map_err(|err| format!("invalid --size: {err}"))?;
            }
            "--config" => parsed.config_path = Some(PathBuf::from(value("--config")?)),
            "--output" => parsed.output_path = PathBuf::from(value("--output")?),
            "--help" | "-h" => {
                println!("{}", usage_message());
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    Ok(parsed)
}

#[cfg(feature = "cairo-backend")]
fn usage_message() -> String {
    format!(
        "Usage: cargo run --features cairo-backend --bin render_distribution_png -- [options]\n\nOptions:\n  --arity <3..8>     Number of attributes (default: 3)\n  --rings <n>        Number of grid rings (default: 3)\n  --size <px>        Square surface size (default: {DEFAULT_SIZE_PX})\n  --config <path>    Chart config JSON, overrides --arity/--rings\n  --output <path>    PNG output path (default: {DEFAULT_OUTPUT_PATH})\n  -h, --help         Show this message"
    )
}
