//! Renders a single request locally and writes it as a plain-text PGM image.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;

use mandelbrot_server::{render_grid_rayon, write_pgm, RenderRequest};

#[derive(Parser, Debug)]
#[command(name = "render-pgm")]
#[command(about = "Render a Mandelbrot grid to a PGM file")]
struct Args {
    /// Left edge of the sampled region
    #[arg(default_value_t = -1.5, allow_negative_numbers = true)]
    x_min: f64,

    /// Bottom edge of the sampled region
    #[arg(default_value_t = -1.0, allow_negative_numbers = true)]
    y_min: f64,

    /// Right edge of the sampled region
    #[arg(default_value_t = 0.5, allow_negative_numbers = true)]
    x_max: f64,

    /// Top edge of the sampled region
    #[arg(default_value_t = 1.0, allow_negative_numbers = true)]
    y_max: f64,

    /// Sample points along the x axis
    #[arg(default_value_t = 600)]
    x_num: u32,

    /// Sample points along the y axis
    #[arg(default_value_t = 600)]
    y_num: u32,

    /// Iteration cap, a multiple of 256
    #[arg(default_value_t = 1024)]
    n_lim: u32,

    /// Output file
    #[arg(short, long, default_value = "mandelbrot.pgm")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let req = RenderRequest::new(
        args.x_min, args.x_max, args.y_min, args.y_max, args.x_num, args.y_num, args.n_lim,
    )?;

    println!("Rendering {}x{} grid...", req.x_num(), req.y_num());
    println!("Iteration limit: {}", req.iteration_limit());

    let start = Instant::now();
    let buffer = render_grid_rayon(&req);
    println!("Duration:   {:?}", start.elapsed());

    write_pgm(&buffer, &args.output)?;
    println!("Saved to {}", args.output.display());

    Ok(())
}
