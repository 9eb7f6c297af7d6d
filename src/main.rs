use clap::{Parser, Subcommand};
use scholar_site::{config, content, generate, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scholar-site")]
#[command(about = "Static site generator for academic homepages")]
#[command(long_about = "\
Static site generator for academic homepages

One content file describes your profile, publications, teaching, and project
pages. The generator renders them to plain HTML.

Source directory:

  .
  ├── content.toml     # Profile, people, publications, courses, projects
  └── config.toml      # Generator settings (optional)

Output directory:

  docs/
  ├── index.html               # Home page (links assets/)
  ├── assets/                  # Your stylesheets and fonts (not generated)
  └── project/
      └── <id>/index.html      # One page per [[projects]] entry

Run 'scholar-site gen-content' for a starter content.toml and
'scholar-site gen-config' for a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Directory containing content.toml and config.toml
    #[arg(long, default_value = ".", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "docs", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the home page and every project page
    Build,
    /// Validate content and config without writing anything
    Check,
    /// Print the resolved content as JSON
    Manifest,
    /// Print a stock config.toml with all options documented
    GenConfig,
    /// Print a starter content.toml with placeholder content
    GenContent,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            println!("==> Loading {}", cli.source.display());
            let site_config = config::load_config(&cli.source)?;
            let site = content::load_content(&cli.source)?;
            output::print_content_output(&site);

            println!("==> Generating HTML \u{2192} {}", cli.output.display());
            init_thread_pool(&site_config.processing);
            let report = generate::generate(&site, &site_config, &cli.output)?;
            output::print_generate_output(&report);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            config::load_config(&cli.source)?;
            let site = content::load_content(&cli.source)?;
            generate::resolve_projects(&site)?;
            output::print_content_output(&site);
            println!("==> Content is valid");
        }
        Command::Manifest => {
            let site = content::load_content(&cli.source)?;
            println!("{}", serde_json::to_string_pretty(&site)?);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::GenContent => {
            print!("{}", content::stock_content_toml());
        }
    }

    Ok(())
}

/// Initialize the rayon thread pool based on processing config.
///
/// Caps at the number of available CPU cores; user can constrain down, not up.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
