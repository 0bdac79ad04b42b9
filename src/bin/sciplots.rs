use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, info};

use sciplots::charts::{error_bars_with_theme, CentralTendency, Dispersion, ErrorBarOptions, ObservationTable};
use sciplots::config::SciplotsConfig;
use sciplots::plotting::{Color, Figure, ThemeConfig};
use sciplots::styles::{self, Stylesheet};
use sciplots::{export, fonts, palettes, polish};

#[derive(Parser)]
#[command(name = "sciplots")]
#[command(
    about = "Scientific plot styles, palettes and error-bar charts",
    long_about = "Inspect the bundled stylesheets and color palettes, register fonts, and render example figures to PDF, PNG, EPS, SVG and JPG."
)]
struct Cli {
    /// Log verbosity level
    #[arg(long, global = true, default_value = "info")]
    log_level: LogLevel,
    /// Write log output to a file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<String>,
    /// Append to log file instead of truncating
    #[arg(long, global = true)]
    append_log: bool,
    /// Path to a sciplots configuration JSON file (directories, export defaults).
    #[arg(long, global = true)]
    config: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum DemoKind {
    /// Grouped error bars over the tips sample
    ErrorBars,
    /// Sepal length against sepal width from the iris sample
    Scatter,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the colors of a palette, or list the palettes when no name is given
    Palette {
        /// Palette name (e.g., "nature-reviews", "economist").
        #[arg(long)]
        name: Option<String>,
        /// Print RGB triples instead of hex strings.
        #[arg(long)]
        rgb: bool,
    },
    /// Resolve a stylesheet path
    Style {
        /// Stylesheet name; defaults to the configured default style.
        #[arg(long)]
        name: Option<String>,
        /// Print the parsed stylesheet entries as well.
        #[arg(long)]
        show: bool,
    },
    /// Register the fonts found in the sub-folders of a font directory
    Fonts {
        /// Font directory; defaults to the configured one.
        #[arg(long)]
        dir: Option<String>,
    },
    /// Render an example figure and save it in every configured format
    Demo {
        /// Output path. A trailing separator names the output directory; otherwise a directory named after the file stem is created.
        #[arg(long, required = true)]
        out: String,
        /// Which example to render.
        #[arg(long, value_enum, default_value_t = DemoKind::ErrorBars)]
        kind: DemoKind,
        /// Group the days into working days and weekend.
        #[arg(long)]
        sections: bool,
        /// Central tendency: "median" or "mean".
        #[arg(long, default_value = "median")]
        central_tendency: String,
        /// Error method: "percentile", "standard_deviation", "confidence_interval" or "none".
        #[arg(long, default_value = "percentile")]
        error_method: String,
        /// Trim the axes to their outer ticks (scatter example).
        #[arg(long)]
        polish: bool,
        /// Stylesheet to apply; defaults to the configured default style.
        #[arg(long)]
        style: Option<String>,
        /// Palette for the group colors.
        #[arg(long)]
        palette: Option<String>,
    },
}

/// `total_bill` by `day`, a slice of the classic restaurant tips dataset.
const TIPS: [(&str, &[f64]); 4] = [
    ("Thur", &[27.20, 22.76, 17.29, 19.44, 16.66, 10.07, 32.68, 15.98, 34.83, 13.03]),
    ("Fri", &[28.97, 22.49, 5.75, 16.32, 22.75, 40.17, 27.28, 12.03, 21.01, 12.46]),
    ("Sat", &[20.65, 17.92, 20.29, 15.77, 39.42, 19.82, 17.81, 13.37, 12.69, 21.70]),
    ("Sun", &[16.99, 10.34, 21.01, 23.68, 24.59, 25.29, 8.77, 26.88, 15.04, 14.78]),
];

/// Sepal length and width of the first iris setosa and versicolor samples.
const IRIS_SEPAL_LENGTH: [f64; 12] = [5.1, 4.9, 4.7, 4.6, 5.0, 5.4, 7.0, 6.4, 6.9, 5.5, 6.5, 5.7];
const IRIS_SEPAL_WIDTH: [f64; 12] = [3.5, 3.0, 3.2, 3.1, 3.6, 3.9, 3.2, 3.2, 3.1, 2.3, 2.8, 2.8];

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut log_builder = env_logger::Builder::from_default_env();
    log_builder
        .filter_level(cli.log_level.to_level_filter())
        .format_module_path(false);
    if let Some(ref path) = cli.log_file {
        let file = if cli.append_log {
            std::fs::File::options().create(true).append(true).open(path)
        } else {
            std::fs::File::create(path)
        }
        .with_context(|| format!("Could not open log file '{}'", path))?;
        log_builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    log_builder.init();

    let config = match cli.config {
        Some(ref path) => SciplotsConfig::load(path)
            .with_context(|| format!("Error loading config {}", path))?,
        None => SciplotsConfig::default(),
    };
    debug!("Using config {:?}", config);

    match &cli.command {
        Commands::Palette { name, rgb } => run_palette(name.as_deref(), *rgb),
        Commands::Style { name, show } => run_style(&config, name.as_deref(), *show),
        Commands::Fonts { dir } => run_fonts(&config, dir.as_deref()),
        Commands::Demo {
            out,
            kind,
            sections,
            central_tendency,
            error_method,
            polish,
            style,
            palette,
        } => {
            let theme = load_theme(&config, style.as_deref())?;
            let figure = match kind {
                DemoKind::ErrorBars => {
                    let options = ErrorBarOptions::new("total_bill", "day")
                        .central_tendency(central_tendency.parse::<CentralTendency>()?)
                        .dispersion(error_method.parse::<Dispersion>()?);
                    demo_error_bars(options, *sections, palette.as_deref(), theme)?
                }
                DemoKind::Scatter => demo_scatter(*polish, palette.as_deref(), theme)?,
            };
            let written = export::savefig(&figure, out, &config.export.save_options())
                .with_context(|| format!("Error saving figure to {}", out))?;
            info!("Wrote {} files", written.len());
            Ok(())
        }
    }
}

fn run_palette(name: Option<&str>, rgb: bool) -> Result<()> {
    let Some(name) = name else {
        for name in palettes::supported_palettes() {
            println!("{}", name);
        }
        return Ok(());
    };
    if rgb {
        let Some(colors) = palettes::get_palette_rgb(name) else {
            bail!("Unknown palette '{}'", name);
        };
        for (r, g, b) in colors {
            println!("{} {} {}", r, g, b);
        }
    } else {
        let Some(colors) = palettes::get_palette(name) else {
            bail!("Unknown palette '{}'", name);
        };
        for color in colors {
            println!("{}", color);
        }
    }
    Ok(())
}

fn run_style(config: &SciplotsConfig, name: Option<&str>, show: bool) -> Result<()> {
    let path = config.style_path(name);
    println!("{}", path.display());
    if show {
        let sheet = Stylesheet::load(&path)
            .with_context(|| format!("Error reading stylesheet {}", path.display()))?;
        for (key, value) in sheet.entries() {
            println!("{} : {}", key, value);
        }
    }
    Ok(())
}

fn run_fonts(config: &SciplotsConfig, dir: Option<&str>) -> Result<()> {
    let dir = dir.map(Into::into).unwrap_or_else(|| config.fonts_dir());
    let added = if config.fonts_dir.is_none() && dir == fonts::bundled_fonts_dir() {
        fonts::add_fonts()
    } else {
        fonts::add_fonts_from(&dir)
    }
    .with_context(|| format!("Error scanning font directory {}", dir.display()))?;
    info!("Registered {} fonts from {}", added, dir.display());
    for font in fonts::registered_fonts() {
        println!("{}", font.display());
    }
    Ok(())
}

fn load_theme(config: &SciplotsConfig, style: Option<&str>) -> Result<ThemeConfig> {
    let path = config.style_path(style);
    let sheet = Stylesheet::load(&path)
        .with_context(|| format!("Error reading stylesheet {}", path.display()))?;
    let theme = sheet
        .apply(&ThemeConfig::default())
        .with_context(|| format!("Error applying stylesheet {}", path.display()))?;
    debug!(
        "Applied style {} ({} entries, default {})",
        path.display(),
        sheet.len(),
        styles::DEFAULT_STYLE
    );
    Ok(theme)
}

fn palette_colors(name: Option<&str>, n: usize) -> Result<Option<Vec<Color>>> {
    let Some(name) = name else {
        return Ok(None);
    };
    let Some(colors) = palettes::get_palette_colors(name) else {
        bail!("Unknown palette '{}'", name);
    };
    if colors.len() < n {
        bail!("Palette '{}' has {} colors, {} needed", name, colors.len(), n);
    }
    Ok(Some(colors.into_iter().take(n).collect()))
}

fn demo_error_bars(
    mut options: ErrorBarOptions,
    sections: bool,
    palette: Option<&str>,
    theme: ThemeConfig,
) -> Result<Figure> {
    let groups: Vec<(&str, Vec<f64>)> = TIPS.iter().map(|(day, v)| (*day, v.to_vec())).collect();
    let table = ObservationTable::from_groups("total_bill", "day", &groups)?;

    let n_colors = if sections {
        options = options.sections(vec![
            (
                "Working Days".to_string(),
                vec!["Thur".to_string(), "Fri".to_string()],
            ),
            ("Weekend".to_string(), vec!["Sat".to_string(), "Sun".to_string()]),
        ]);
        2
    } else {
        TIPS.len()
    };
    if let Some(colors) = palette_colors(palette, n_colors)? {
        options = options.colors(colors);
    }

    let plot = error_bars_with_theme(&table, &options, theme).context("Error drawing error bars")?;
    Ok(plot.figure)
}

fn demo_scatter(polish_axes: bool, palette: Option<&str>, theme: ThemeConfig) -> Result<Figure> {
    let color = palette_colors(palette, 1)?
        .and_then(|c| c.into_iter().next())
        .unwrap_or_else(|| theme.cycle_color(0));

    let mut fig = Figure::with_theme(theme);
    let ax = fig.add_subplot(1, 1, 1)?;
    fig.axes_mut(ax)?
        .set_xlabel("sepal_length")
        .set_ylabel("sepal_width")
        .scatter(IRIS_SEPAL_LENGTH, IRIS_SEPAL_WIDTH)
        .color(color)
        .build();
    if polish_axes {
        polish(&mut fig, ax, true).context("Error polishing axes")?;
    } else {
        fig.tight_layout();
    }
    Ok(fig)
}
