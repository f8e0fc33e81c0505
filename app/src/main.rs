//! Command-line front end for the `koch` crate.
//!
//! Usage:
//!     snowflake points --order 3 --size 300
//!     snowflake curve --order 2 --from 0,0 --to 3,0 --format json
//!     snowflake compare --orders 0,1,2,3 --size 200

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, Subcommand, ValueEnum};
use koch::utils::validate_order;
use koch::{
    KochError, KochSnowflake, MAX_ORDER, Point, Polyline, SnowflakeConfig,
    assemble_orders_with_max, subdivide,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "snowflake")]
#[command(version)]
#[command(about = "Koch snowflake point generator", long_about = None)]
struct Cli {
    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Highest order the generator accepts (at most the library maximum)
    #[arg(
        long,
        global = true,
        default_value_t = MAX_ORDER,
        value_parser = clap::value_parser!(u32).range(..=MAX_ORDER as i64)
    )]
    max_order: u32,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the closed snowflake outline
    Points {
        #[arg(short, long, default_value_t = 3, allow_negative_numbers = true)]
        order: i32,

        /// Edge length of the base triangle
        #[arg(short, long, default_value_t = 300.0, allow_negative_numbers = true)]
        size: f64,

        #[arg(short, long, value_enum, default_value_t = Format::Csv)]
        format: Format,
    },

    /// Print one Koch curve between two points
    Curve {
        #[arg(short, long, default_value_t = 3, allow_negative_numbers = true)]
        order: i32,

        /// Start point as X,Y (use --from=-1,2 for negative x)
        #[arg(long, value_parser = parse_point, default_value = "0,0")]
        from: Point,

        /// End point as X,Y
        #[arg(long, value_parser = parse_point, default_value = "3,0")]
        to: Point,

        #[arg(short, long, value_enum, default_value_t = Format::Csv)]
        format: Format,
    },

    /// Summarise several orders side by side
    Compare {
        #[arg(long, value_delimiter = ',', default_value = "0,1,2,3")]
        orders: Vec<i32>,

        #[arg(short, long, default_value_t = 200.0, allow_negative_numbers = true)]
        size: f64,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Csv,
    Json,
}

#[derive(Serialize)]
struct OrderSummary {
    order: u32,
    points: usize,
    perimeter: f64,
    area: f64,
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got `{s}`"))?;
    let x = x.trim().parse::<f64>().map_err(|e| format!("bad x `{x}`: {e}"))?;
    let y = y.trim().parse::<f64>().map_err(|e| format!("bad y `{y}`: {e}"))?;
    Ok(Point::new(x, y))
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Koch(#[from] KochError),

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

fn write_points<W: Write>(out: &mut W, points: &[Point], format: Format) -> Result<(), AppError> {
    match format {
        Format::Csv => {
            writeln!(out, "x,y")?;
            for p in points {
                writeln!(out, "{},{}", p.x, p.y)?;
            }
        }
        Format::Json => {
            serde_json::to_writer(&mut *out, points)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn cmd_points(order: i32, size: f64, format: Format, max_order: u32) -> Result<(), AppError> {
    let order = validate_order(order, max_order)?;
    let generator = KochSnowflake::new(SnowflakeConfig::new(order, size))?;

    let start = Instant::now();
    let flake = generator.generate();
    info!(
        order,
        size,
        points = flake.len(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "snowflake generated"
    );

    let mut out = BufWriter::new(io::stdout().lock());
    write_points(&mut out, flake.points(), format)?;
    out.flush()?;
    Ok(())
}

fn cmd_curve(
    order: i32,
    from: Point,
    to: Point,
    format: Format,
    max_order: u32,
) -> Result<(), AppError> {
    validate_order(order, max_order)?;

    let start = Instant::now();
    let curve = subdivide(from, to, order)?;
    info!(
        order,
        points = curve.len(),
        length = curve.length(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "curve generated"
    );

    let mut out = BufWriter::new(io::stdout().lock());
    write_points(&mut out, curve.points(), format)?;
    out.flush()?;
    Ok(())
}

fn cmd_compare(orders: &[i32], size: f64, max_order: u32) -> Result<(), AppError> {
    debug!(?orders, size, "comparing orders");

    let start = Instant::now();
    let flakes = assemble_orders_with_max(orders, size, max_order)?;
    info!(
        count = flakes.len(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "orders generated"
    );

    let mut out = BufWriter::new(io::stdout().lock());
    for (order, flake) in &flakes {
        let summary = OrderSummary {
            order: *order,
            points: flake.len(),
            perimeter: flake.perimeter(),
            area: flake.signed_area(),
        };
        serde_json::to_writer(&mut out, &summary)?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_writer(io::stderr).init();

    let result = match cli.command {
        Commands::Points {
            order,
            size,
            format,
        } => cmd_points(order, size, format, cli.max_order),
        Commands::Curve {
            order,
            from,
            to,
            format,
        } => cmd_curve(order, from, to, format, cli.max_order),
        Commands::Compare { orders, size } => cmd_compare(&orders, size, cli.max_order),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
