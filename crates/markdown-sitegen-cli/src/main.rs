use anyhow::{Context, Result};
use clap::Parser;
use markdown_sitegen_config::SiteConfig;
use markdown_sitegen_engine::{SiteLayout, build_site};
use std::{path::PathBuf, process};

#[derive(Parser, Debug)]
#[command(name = "markdown-sitegen")]
#[command(about = "Build a static HTML site from a tree of Markdown files")]
struct Cli {
    /// Prefix for root-relative links, e.g. `/my-repo/` when hosted under a subpath
    basepath: Option<String>,

    /// Config file (defaults to sitegen.toml in the working directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Markdown content directory
    #[arg(long)]
    content: Option<PathBuf>,

    /// Static assets directory
    #[arg(long = "static")]
    static_dir: Option<PathBuf>,

    /// Page template containing {{ Title }} and {{ Content }}
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Output directory (deleted and rebuilt)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log every block and file
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Config file settings with command-line overrides applied on top.
    fn resolve_config(&self) -> Result<SiteConfig> {
        let loaded = match &self.config {
            Some(config_path) => {
                log::info!("Config path: {}", config_path.display());
                SiteConfig::load_from_path(config_path)
                    .with_context(|| format!("loading config from {}", config_path.display()))?
            }
            None => {
                log::info!("Config path: {}", SiteConfig::config_path().display());
                SiteConfig::load().context("loading config from the working directory")?
            }
        };
        let mut config = loaded.unwrap_or_else(|| {
            log::info!("No config file found, using defaults");
            SiteConfig::default()
        });

        if let Some(basepath) = &self.basepath {
            config.basepath = SiteConfig::normalize_basepath(basepath);
        }
        if let Some(content) = &self.content {
            config.content_dir = content.clone();
        }
        if let Some(static_dir) = &self.static_dir {
            config.static_dir = static_dir.clone();
        }
        if let Some(template) = &self.template {
            config.template = template.clone();
        }
        if let Some(output) = &self.output {
            config.output_dir = output.clone();
        }
        Ok(config)
    }
}

fn layout_from(config: SiteConfig) -> SiteLayout {
    SiteLayout {
        content_dir: config.content_dir,
        static_dir: config.static_dir,
        template: config.template,
        output_dir: config.output_dir,
        basepath: config.basepath,
    }
}

fn run(cli: &Cli) -> Result<()> {
    let layout = layout_from(cli.resolve_config()?);
    log::info!(
        "Building {} -> {} (basepath {})",
        layout.content_dir.display(),
        layout.output_dir.display(),
        layout.basepath
    );

    let report = build_site(&layout).context("site build failed")?;

    println!(
        "Generated {} pages and copied {} static files into {}",
        report.pages.len(),
        report.assets_copied,
        layout.output_dir.display()
    );
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
