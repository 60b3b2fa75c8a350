use planck_curves::{Color, CurveSet, PlotBuilder, ViewConfig};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "planck-curves", about = "Plotting blackbody emission spectra")]
struct Opt {
    /// Blackbody temperatures [K]; defaults to a single Sun-like 5778 K curve
    #[structopt(short, long = "temperature")]
    temperatures: Vec<f64>,
    /// Curve colors as `r,g,b`, paired with the temperatures in order;
    /// unpaired curves cycle through a default palette
    #[structopt(short, long = "color")]
    colors: Vec<Color>,
    /// Frequency window start [Hz]
    #[structopt(short, long, default_value = "1e11")]
    start: f64,
    /// Frequency window end [Hz]
    #[structopt(short, long, default_value = "1e15")]
    end: f64,
    /// Number of samples per curve
    #[structopt(long, default_value = "100")]
    steps: usize,
    /// Normalize all curves to a common unit peak and label each peak
    #[structopt(short, long)]
    normalize: bool,
    /// Rendering surface height [pixel]
    #[structopt(long, default_value = "512")]
    height: u32,
    /// Save the sampled series to a CSV file
    #[structopt(long)]
    csv: Option<String>,
    /// Draw the render plan to an SVG or PNG file
    #[cfg(feature = "plot")]
    #[structopt(short, long)]
    plot: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let opt = Opt::from_args();

    let temperatures = if opt.temperatures.is_empty() {
        vec![5778f64]
    } else {
        opt.temperatures.clone()
    };
    let mut palette = colorous::TABLEAU10
        .iter()
        .map(|c| Color::new(c.r, c.g, c.b))
        .cycle();
    let mut curves = CurveSet::default();
    for (k, &temperature) in temperatures.iter().enumerate() {
        let color = match opt.colors.get(k) {
            Some(&color) => color,
            // cycling over a non-empty palette never runs out
            None => palette.next().unwrap(),
        };
        curves.add(temperature, color)?;
    }
    curves.summary();

    let config = ViewConfig {
        freq_start: opt.start,
        freq_end: opt.end,
        steps: opt.steps,
        normalize: opt.normalize,
    };
    let plan = PlotBuilder::new(config)
        .surface_height(opt.height)
        .build(&curves)?;

    if let Some(filename) = opt.csv {
        plan.to_csv(&filename)?;
        log::info!("series saved to {}", filename);
    }
    #[cfg(feature = "plot")]
    if let Some(filename) = opt.plot {
        plan.plot(&filename, 768, opt.height)?;
        log::info!("render plan drawn to {}", filename);
    }

    Ok(())
}
