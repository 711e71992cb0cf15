extern crate clap;
extern crate diskwarp;
extern crate log4rs;
#[macro_use]
extern crate log;

use clap::builder::PossibleValuesParser;
use clap::Parser;
use diskwarp::harness;
use diskwarp::plot::{self, PlotStyle};
use diskwarp::registry::{DiskStrategy, StrategyRegistry};
use diskwarp::samplers::independent::IndependentSampler;
use log::LevelFilter;
use log4rs::{
    append::{
        console::{ConsoleAppender, Target},
        file::FileAppender,
    },
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};
use std::error::Error;

#[derive(Debug, Parser)]
#[command(author, version, about = "Plot random points drawn from the unit disk", long_about = None)]
pub struct Cli {
    /// Distribution to use (defaults to the first registered one, 'cartesian')
    #[arg(long, short, value_parser = PossibleValuesParser::new(DiskStrategy::ALL.iter().map(|s| s.name())))]
    distribution: Option<String>,
    /// Number of points to sample and plot
    #[arg(long, short, default_value_t = harness::DEFAULT_NB_POINTS)]
    nb_points: usize,
    /// Output image file (png or pfm)
    #[arg(long, short, value_name = "FILE", default_value = "disk.png")]
    output: String,
    /// Seed of the random number generator
    #[arg(long, short)]
    seed: Option<u64>,
    /// Image size in pixels
    #[arg(long, default_value_t = 800)]
    size: u32,
    /// Color of the points
    #[arg(long, short, default_value = "#008888")]
    color: String,
    /// Logs
    #[arg(long, short)]
    log: Option<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    /////////////// Setup logging system
    let _handle = {
        let level = LevelFilter::Info;
        let stderr = ConsoleAppender::builder()
            .target(Target::Stderr)
            .encoder(Box::new(PatternEncoder::new("{l} {M} - {m}\n")))
            .build();
        let config = if let Some(log) = &cli.log {
            let logfile = FileAppender::builder()
                .encoder(Box::new(PatternEncoder::new("{l} {M} - {m}\n")))
                .build(log)?;

            Config::builder()
                .appender(Appender::builder().build("logfile", Box::new(logfile)))
                .appender(
                    Appender::builder()
                        .filter(Box::new(ThresholdFilter::new(level)))
                        .build("stderr", Box::new(stderr)),
                )
                .build(
                    Root::builder()
                        .appender("logfile")
                        .appender("stderr")
                        .build(LevelFilter::Debug),
                )?
        } else {
            Config::builder()
                .appender(
                    Appender::builder()
                        .filter(Box::new(ThresholdFilter::new(level)))
                        .build("stderr", Box::new(stderr)),
                )
                .build(Root::builder().appender("stderr").build(level))?
        };

        log4rs::init_config(config)?
    };

    //////////////// Pick the distribution
    let registry = StrategyRegistry::default();
    let strategy = match &cli.distribution {
        Some(name) => registry.parse(name)?,
        None => registry.default_strategy(),
    };
    let style = PlotStyle {
        size: cli.size,
        point_color: plot::parse_color(&cli.color)
            .ok_or_else(|| format!("invalid color (expected #rrggbb): {}", cli.color))?,
        ..PlotStyle::default()
    };

    //////////////// Sample
    let mut sampler = match cli.seed {
        Some(seed) => {
            info!("Seed: {}", seed);
            IndependentSampler::from_seed(seed)
        }
        None => IndependentSampler::default(),
    };
    let points = harness::generate(strategy, &mut sampler, cli.nb_points);
    harness::summarize(strategy, &points);

    //////////////// Plot
    let img = plot::render(&points, &style);
    plot::save(&cli.output, &img)?;
    Ok(())
}
