//! Stretchy layout inspector - Entry Point

use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use stretchy::config::CliOverrides;
use stretchy::host::{DemoHost, LayoutReport};
use stretchy::model::AppError;
use tracing::info;

/// Stretchy layout inspector - print what the demo host shows at a scroll offset
#[derive(Parser, Debug)]
#[command(name = "stretchy")]
#[command(version)]
#[command(about = "Print the visible layout of a stretchy-header list at a scroll offset")]
pub struct Args {
    /// Viewport width in points
    #[arg(long)]
    pub width: Option<f64>,

    /// Viewport height in points
    #[arg(long)]
    pub height: Option<f64>,

    /// Vertical scroll offset (negative values overscroll and stretch the header)
    #[arg(short, long, allow_negative_numbers = true)]
    pub offset: Option<f64>,

    /// Number of sections in the demo dataset
    #[arg(long)]
    pub sections: Option<usize>,

    /// Items per section in the demo dataset
    #[arg(long)]
    pub items: Option<usize>,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            viewport_width: self.width,
            viewport_height: self.height,
            sections: self.sections,
            items_per_section: self.items,
        }
    }
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = stretchy::config::load_config_with_precedence(args.config.clone())?;
        let merged = stretchy::config::merge_config(config_file);
        let with_env = stretchy::config::apply_env_overrides(merged)?;
        stretchy::config::apply_cli_overrides(with_env, args.overrides())
    };

    stretchy::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let mut host = DemoHost::new(config)?;
    if let Some(offset) = args.offset {
        host.scroll_to(offset);
    }

    let report = LayoutReport::capture(&host);
    let mut stdout = std::io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut stdout, &report)?;
        writeln!(stdout)?;
    } else {
        writeln!(stdout, "{}", report.render_text())?;
    }

    Ok(())
}
