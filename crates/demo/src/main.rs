// File: crates/demo/src/main.rs
// Summary: Demo renders a line chart (built-in samples or x,y CSV) to a PNG.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chartesque_core::{Chart, Dataset};
use chartesque_skia::{render_to_file, PngOptions};
use clap::Parser;

const SAMPLE_X: [f64; 11] = [250.0, 350.0, 450.0, 550.0, 650.0, 750.0, 850.0, 950.0, 1050.0, 1150.0, 1250.0];
const SAMPLE_Y: [f64; 11] = [10.1, 20.2, 10.1, 35.1, 40.2, 45.3, 30.35, 20.4, 10.35, 5.3, 1.0];

#[derive(Parser, Debug)]
#[command(name = "chartesque-demo", about = "Render a simple line chart to PNG")]
struct Args {
    /// Output PNG path
    #[arg(short, long, default_value = "stuff.png")]
    output: PathBuf,

    #[arg(long, default_value_t = 640)]
    width: u32,

    #[arg(long, default_value_t = 280)]
    height: u32,

    /// X-axis limits
    #[arg(long, num_args = 2, value_names = ["MIN", "MAX"], default_values_t = [200.0, 2000.0], allow_negative_numbers = true)]
    x_limit: Vec<f64>,

    /// Y-axis limits
    #[arg(long, num_args = 2, value_names = ["MIN", "MAX"], default_values_t = [1.0, 50.0], allow_negative_numbers = true)]
    y_limit: Vec<f64>,

    /// CSV with a header row and two numeric columns (x, y); built-in samples otherwise
    #[arg(long)]
    data: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let data = match &args.data {
        Some(path) => {
            let d = load_xy_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            println!("Loaded {} points from {}", d.len(), path.display());
            d
        }
        None => Dataset::try_new(SAMPLE_X.to_vec(), SAMPLE_Y.to_vec())?,
    };

    let mut chart = Chart::new();
    chart.set_width(args.width);
    chart.set_height(args.height);
    chart.set_output_file(&args.output);
    chart.set_dataset(data);
    chart
        .x_axis_mut()
        .set_limit(args.x_limit[0], args.x_limit[1])
        .context("invalid --x-limit")?;
    chart
        .y_axis_mut()
        .set_limit(args.y_limit[0], args.y_limit[1])
        .context("invalid --y-limit")?;

    let out = render_to_file(&mut chart, &PngOptions::default())?;
    println!(
        "Wrote {} ({} x ticks, {} y ticks)",
        out.display(),
        chart.x_axis().ticks_count(),
        chart.y_axis().ticks_count()
    );
    Ok(())
}

/// Load the first two columns of a CSV as x/y samples, skipping unparsable rows.
fn load_xy_csv(path: &Path) -> Result<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut points = Vec::new();
    let mut skipped = 0usize;
    for rec in rdr.records() {
        let rec = rec?;
        let parse = |i: usize| rec.get(i).and_then(|s| s.parse::<f64>().ok());
        match (parse(0), parse(1)) {
            (Some(x), Some(y)) => points.push((x, y)),
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        println!("Warning: skipped {skipped} rows without two numeric columns.");
    }
    Ok(Dataset::from_points(points))
}
