use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use terrax::core::catalog::{
    Catalog, CatalogError, DataLayer, Language, Page, SUPPORTED_LANGUAGES, Story, StoryId,
    YearPolicy, resolve_year, showcase,
};
use terrax::core::format::{format_count, format_reading, humanize_key};
use terrax::core::selection::{AtlasSelection, StorySelection};

#[derive(Parser)]
#[command(name = "terrax")]
#[command(about = "TerraX: 25 years of Terra satellite data told through human stories")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the desktop app (default)
    Gui {
        /// Page to open on: /, /atlas, /stories or /vr-demo
        #[arg(long, value_name = "PATH", default_value = "/")]
        page: String,
    },
    /// Show the atlas statistics for a sample year
    Atlas {
        #[arg(long, env = "TERRAX_YEAR", default_value_t = 2025)]
        year: u16,

        /// Snap years between samples to the nearest sample year
        #[arg(long)]
        nearest: bool,

        /// fires, pollution, floods or trends
        #[arg(long, default_value = "fires")]
        layer: DataLayer,
    },
    /// List the stories available in a language
    Stories {
        #[arg(long, env = "TERRAX_LANGUAGE", default_value = "en")]
        language: Language,
    },
    /// Show one story in full
    Story {
        #[arg(value_name = "ID")]
        id: u32,
    },
    /// List the supported languages
    Languages,
    /// List the VR climate hotspots
    Hotspots,
}

/// `--verbose` forces debug output; otherwise `RUST_LOG` decides, falling
/// back to warnings.
fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn init_tracing(verbose: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose, rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .init();
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_story_summary(story: &Story) {
    println!("[{}] {} ({})", story.id, story.title, story.region);
    println!("    {}", story.summary);
}

#[cfg(feature = "gui")]
fn run_gui(catalog: Catalog, path: &str) -> anyhow::Result<()> {
    let page = Page::from_path(path)
        .ok_or_else(|| anyhow::anyhow!("Unknown page {path:?}"))?;
    terrax::gui::run(catalog, page)
}

#[cfg(not(feature = "gui"))]
fn run_gui(_catalog: Catalog, _path: &str) -> anyhow::Result<()> {
    anyhow::bail!("terrax was built without the gui feature; pass a subcommand (see --help)")
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_tracing(args.verbose);

    let catalog = Catalog::load()?;

    match args.command.unwrap_or(Command::Gui {
        page: Page::Home.path().to_string(),
    }) {
        Command::Gui { page } => run_gui(catalog, &page)?,
        Command::Atlas {
            year,
            nearest,
            layer,
        } => {
            let policy = if nearest {
                YearPolicy::Nearest
            } else {
                YearPolicy::Exact
            };
            let mut selection = AtlasSelection::default();
            selection.year.select(resolve_year(year, policy)?);
            selection.layer.select(layer);
            let view = selection.view(&catalog);

            if args.json {
                #[derive(Serialize)]
                struct AtlasOutput<'a> {
                    year: u16,
                    layer: DataLayer,
                    instrument: &'a str,
                    fires: u32,
                    pollution_index: f32,
                    flood_events: u32,
                }
                print_json(&AtlasOutput {
                    year: view.year.year(),
                    layer: view.layer,
                    instrument: view.layer.instrument().name(),
                    fires: view.snapshot.fires,
                    pollution_index: view.snapshot.pollution_index,
                    flood_events: view.snapshot.flood_events,
                })?;
            } else {
                println!("=== {} Statistics ===", view.year);
                println!("Fire Hotspots:   {}", format_count(view.snapshot.fires));
                println!("Pollution Index: {}", view.snapshot.pollution_index);
                println!("Flood Events:    {}", format_count(view.snapshot.flood_events));
                println!();
                match view.reading() {
                    Some(reading) => {
                        println!("Layer: {} = {}", view.layer.label(), format_reading(reading))
                    }
                    None => println!("Layer: {}", view.layer.label()),
                }
                println!(
                    "Source: Terra {} {}",
                    view.layer.instrument().name(),
                    view.layer.instrument().product()
                );
            }
        }
        Command::Stories { language } => {
            let mut selection = StorySelection::default();
            selection.language.select(language);
            let view = selection.view(&catalog);

            if args.json {
                print_json(&view.stories)?;
            } else if view.is_empty() {
                println!("No stories are available in {} yet.", view.language);
            } else {
                println!("=== Stories in {} ===", view.language);
                for story in &view.stories {
                    print_story_summary(story);
                }
            }
        }
        Command::Story { id } => {
            let mut selection = StorySelection::default();
            selection.open(StoryId(id));
            let story = selection
                .open_story(&catalog)
                .ok_or(CatalogError::UnknownStory(StoryId(id)))?;

            if args.json {
                print_json(story)?;
            } else {
                println!("=== {} ===", story.title);
                println!("{}\n", story.region);
                println!("{}\n", story.description);
                let languages: Vec<_> = story
                    .languages
                    .iter()
                    .map(|language| language.native_name())
                    .collect();
                println!("Available in: {}", languages.join(", "));
                println!("Terra data ({}):", story.terra_data.period);
                for product in story.terra_data.products {
                    println!("  {} {}", product.instrument, product.product);
                }
                println!("Impact Statistics:");
                for stat in story.stats {
                    println!("  {}: {}", humanize_key(stat.key), stat.value);
                }
            }
        }
        Command::Languages => {
            if args.json {
                print_json(&SUPPORTED_LANGUAGES)?;
            } else {
                for language in SUPPORTED_LANGUAGES {
                    let count = catalog.stories_in(language).len();
                    println!("{}  {:<10} {} stories", language.code(), language.native_name(), count);
                }
            }
        }
        Command::Hotspots => {
            if args.json {
                print_json(&showcase::HOTSPOTS)?;
            } else {
                for hotspot in &showcase::HOTSPOTS {
                    println!("{} [{}]: {}", hotspot.name, hotspot.kind, hotspot.impact);
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use tracing::level_filters::LevelFilter;

    use super::log_filter;

    #[test]
    fn test_rust_log_sets_level() {
        assert_eq!(log_filter(false, Some("debug")).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(log_filter(false, Some("terrax=trace")).max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn test_default_and_verbose_levels() {
        assert_eq!(log_filter(false, None).max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(log_filter(true, Some("error")).max_level_hint(), Some(LevelFilter::DEBUG));
    }
}
