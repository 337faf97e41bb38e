//! Parsing command-line arguments.

use clap::{command, error::ErrorKind, value_parser, Arg, ArgAction, Command, Error};
use log::{debug, info};
use rlife_lib::{Boundary, Config, GlyphRenderer, Simulation};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

/// A struct to store the parse results.
pub(crate) struct Args {
    pub(crate) simulation: Simulation,
    pub(crate) generations: u64,
    pub(crate) delay: Duration,
    pub(crate) renderer: GlyphRenderer,
    pub(crate) stop_when_still: bool,
    pub(crate) rle: bool,
    #[cfg(feature = "tui")]
    pub(crate) no_tui: bool,
}

/// Reads a config file. The format is chosen by the extension.
fn read_config(path: &Path) -> Result<Config, String> {
    let text = fs::read_to_string(path).map_err(|e| e.to_string())?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&text).map_err(|e| e.to_string()),
        Some("yaml") | Some("yml") => serde_yaml::from_str(&text).map_err(|e| e.to_string()),
        Some("toml") => toml::from_str(&text).map_err(|e| e.to_string()),
        _ => Err(String::from(
            "unknown config format, expected .json, .yaml, .yml or .toml",
        )),
    }
}

fn build_command() -> Command {
    let mut app = command!()
        .long_about(
            "Conway's Game of Life on a bounded grid\n\
             \n\
             Every cell has up to eight neighbors. A dead cell with exactly 3 living \
             neighbors is born; a living cell with 2 or 3 living neighbors survives; \
             every other cell is dead in the next generation.\n\
             \n\
             The first generation is random unless a pattern is given.\n\
             Settings are read from the config file first, then from the command line.\n",
        )
        .arg(
            Arg::new("X")
                .help("Width of the grid [default: 40]")
                .index(1)
                .value_parser(value_parser!(i32).range(1..)),
        )
        .arg(
            Arg::new("Y")
                .help("Height of the grid [default: 30]")
                .index(2)
                .value_parser(value_parser!(i32).range(1..)),
        )
        .arg(
            Arg::new("BOUNDARY")
                .help("What happens at the edges of the grid [default: clipped]")
                .long_help(
                    "What happens at the edges of the grid\n\
                     \"clipped\" means that cells outside the grid are not counted.\n\
                     \"torus\" means that opposite edges are stitched together.\n",
                )
                .short('b')
                .long("boundary")
                .value_parser(value_parser!(Boundary)),
        )
        .arg(
            Arg::new("FILL")
                .help("Probability for a cell in the first generation to be alive [default: 0.5]")
                .short('f')
                .long("fill")
                .value_parser(value_parser!(f64)),
        )
        .arg(
            Arg::new("SEED")
                .help("Seed of the random number generator")
                .long_help(
                    "Seed of the random number generator\n\
                     The same seed always gives the same first generation.\n\
                     If it is not set, the seed is chosen randomly.\n",
                )
                .short('s')
                .long("seed")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("PATTERN")
                .help("Reads the first generation from an RLE or Plaintext file")
                .long_help(
                    "Reads the first generation from an RLE or Plaintext file\n\
                     The pattern is placed at the center of the grid.\n\
                     The fill rate and the seed are ignored.\n",
                )
                .short('p')
                .long("pattern")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("CONFIG")
                .help("Reads the settings from a JSON, YAML or TOML file")
                .short('c')
                .long("config")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("GENERATIONS")
                .help("Number of generations to run")
                .short('g')
                .long("generations")
                .default_value("100")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("DELAY")
                .help("Delay between two generations, in milliseconds")
                .short('d')
                .long("delay")
                .default_value("30")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("GLYPHS")
                .help("How to display the cells")
                .long_help(
                    "How to display the cells\n\
                     \"plaintext\" uses `o` for living cells and `.` for dead cells.\n\
                     \"hearts\" uses hearts and skulls.\n",
                )
                .long("glyphs")
                .default_value("plaintext")
                .value_parser(["plaintext", "hearts"]),
        )
        .arg(
            Arg::new("STILL")
                .help("Stops when a generation is the same as the one before it")
                .long("stop-when-still")
                .action(ArgAction::SetTrue),
        );

    #[cfg(feature = "tui")]
    {
        app = app
            .arg(
                Arg::new("NOTUI")
                    .help("Prints the generations instead of entering the TUI")
                    .short('n')
                    .long("no-tui")
                    .action(ArgAction::SetTrue),
            )
            .arg(
                Arg::new("RLE")
                    .help("Prints only the last generation, in RLE format")
                    .long("rle")
                    .action(ArgAction::SetTrue)
                    .requires("NOTUI"),
            );
    }

    #[cfg(not(feature = "tui"))]
    {
        app = app.arg(
            Arg::new("RLE")
                .help("Prints only the last generation, in RLE format")
                .long("rle")
                .action(ArgAction::SetTrue),
        );
    }

    app
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> Result<Self, Error> {
        let mut app = build_command();
        let matches = app.try_get_matches_from_mut(std::env::args_os())?;

        let mut config = match matches.get_one::<PathBuf>("CONFIG") {
            Some(path) => {
                debug!("reading config from {}", path.display());
                read_config(path).map_err(|e| {
                    app.error(
                        ErrorKind::InvalidValue,
                        format!("invalid config file {}: {}", path.display(), e),
                    )
                })?
            }
            None => Config::default(),
        };

        if let Some(&width) = matches.get_one::<i32>("X") {
            config.width = width;
        }
        if let Some(&height) = matches.get_one::<i32>("Y") {
            config.height = height;
        }
        if let Some(&boundary) = matches.get_one::<Boundary>("BOUNDARY") {
            config.boundary = boundary;
        }
        if let Some(&fill_rate) = matches.get_one::<f64>("FILL") {
            config.fill_rate = fill_rate;
        }
        if let Some(&seed) = matches.get_one::<u64>("SEED") {
            config.seed = Some(seed);
        }
        if let Some(path) = matches.get_one::<PathBuf>("PATTERN") {
            let pattern = fs::read_to_string(path).map_err(|e| {
                app.error(
                    ErrorKind::Io,
                    format!("cannot read pattern {}: {}", path.display(), e),
                )
            })?;
            config.pattern = Some(pattern);
        }

        let generations = matches.get_one::<u64>("GENERATIONS").copied().unwrap_or(100);
        let delay = Duration::from_millis(matches.get_one::<u64>("DELAY").copied().unwrap_or(30));
        let renderer = match matches.get_one::<String>("GLYPHS").map(String::as_str) {
            Some("hearts") => GlyphRenderer::hearts(),
            _ => GlyphRenderer::plaintext(),
        };
        let stop_when_still = matches.get_flag("STILL");
        let rle = matches.get_flag("RLE");
        #[cfg(feature = "tui")]
        let no_tui = matches.get_flag("NOTUI");

        info!(
            "{} x {} grid, boundary {}, {} generations",
            config.width, config.height, config.boundary, generations
        );
        let simulation = config
            .simulation()
            .map_err(|e| app.error(ErrorKind::InvalidValue, e))?;

        Ok(Args {
            simulation,
            generations,
            delay,
            renderer,
            stop_when_still,
            rle,
            #[cfg(feature = "tui")]
            no_tui,
        })
    }
}
