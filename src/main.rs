use clap::{Parser, Subcommand};
use docsite_home::{config, generate, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docsite-home")]
#[command(about = "Render a documentation site's homepage from config.toml")]
#[command(long_about = "\
Render a documentation site's homepage from config.toml

The homepage is a splash header, a run of promotional blocks and, when users
are configured, a \"who's using this\" showcase of the pinned users.

Site structure:

  website/
  └── config.toml      # title, tagline, base_url, colors, [[users]]

URLs:
  Images:  <base_url>img/<name>
  Docs:    <base_url>docs/[<language>/]<doc>
  Pages:   <base_url>[<language>/]<page>

Run 'docsite-home gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Site directory containing config.toml
    #[arg(long, default_value = "website", global = true)]
    site: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the homepage as a complete HTML document
    Render {
        /// Language tag inserted into doc and page links (empty for none)
        #[arg(long, default_value = "")]
        language: String,
        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Validate config.toml and summarize the site
    Check {
        /// Print the resolved config as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Render { language, output: target } => match target {
            Some(path) => {
                let site_config = generate::generate(&cli.site, &path, &language)?;
                output::print_render_output(&site_config, &language, &path);
            }
            None => {
                let site_config = config::load_config(&cli.site)?;
                print!(
                    "{}",
                    generate::render_document(&site_config, &language).into_string()
                );
            }
        },
        Command::Check { json } => {
            let site_config = config::load_config(&cli.site)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&site_config)?);
            } else {
                output::print_check_output(&site_config, &cli.site);
                println!("==> Config is valid");
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
