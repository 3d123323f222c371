//! tessera - CLI entry point

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tessera::markup;
use tessera::style::parse_color;
use tessera::{
    Capabilities, ColorSystem, Column, Config, Console, Paragraph, Renderable, Segment, Style,
    Table,
};

#[derive(Parser)]
#[command(name = "tessera")]
#[command(about = "Render styled markup and tables in the terminal")]
#[command(version)]
struct Cli {
    /// Config file (default: ~/.config/tessera/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Color system to render for (truecolor, eightbit, standard, legacy, nocolors)
    #[arg(long, global = true)]
    color_system: Option<ColorSystem>,

    /// Emit no escape sequences at all
    #[arg(long, global = true)]
    no_ansi: bool,

    /// Use ASCII instead of Unicode glyphs
    #[arg(long, global = true)]
    ascii: bool,

    /// Render width in cells (default: terminal width)
    #[arg(long, global = true)]
    width: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render markup
    Markup {
        /// Markup text, e.g. "[bold red]hello[/]"
        text: String,
    },

    /// Print markup with all tags removed
    Strip {
        text: String,
    },

    /// Escape brackets so text is taken literally
    Escape {
        text: String,
    },

    /// Render markup with the first match of a query highlighted
    Highlight {
        text: String,
        query: String,
        /// Style layered over the match
        #[arg(long, default_value = "reverse")]
        style: String,
    },

    /// Render a table
    Table {
        /// Column header (markup), repeat per column
        #[arg(long = "column", required = true)]
        columns: Vec<String>,
        /// Comma-separated row cells (markup), repeat per row
        #[arg(long = "row")]
        rows: Vec<String>,
        /// Fill the full width
        #[arg(long)]
        expand: bool,
    },

    /// Show how a color degrades in each color system
    Color {
        /// Color name, #hex, rgb(r,g,b) or palette number
        color: String,
    },
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let capabilities = resolve_capabilities(&cli)?;
    debug!(?capabilities, "Resolved capabilities");
    let mut console = Console::stdout(capabilities);

    match cli.command {
        Commands::Markup { text } => console.markup(&text)?,
        Commands::Strip { text } => println!("{}", markup::remove(&text)?),
        Commands::Escape { text } => println!("{}", markup::escape(&text)),
        Commands::Highlight { text, query, style } => {
            let style = Style::parse(&style)?;
            let segments = markup::highlight(&text, &query, &style)?;
            console.write_line(&Paragraph::new(segments))?;
        }
        Commands::Table {
            columns,
            rows,
            expand,
        } => {
            let table = build_table(&columns, &rows, expand)?;
            console.write_line(&table)?;
        }
        Commands::Color { color } => {
            let table = color_table(&color)?;
            console.write_line(&table)?;
        }
    }

    console.flush().context("Failed to flush output")?;
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("TESSERA_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

/// Config file first, then the terminal, then command-line flags.
fn resolve_capabilities(cli: &Cli) -> Result<Capabilities> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let mut capabilities = config.capabilities();

    if config.capabilities.width.is_none() {
        if let Some((width, height)) = terminal_size::terminal_size() {
            capabilities.width = width.0 as usize;
            if config.capabilities.height.is_none() {
                capabilities.height = height.0 as usize;
            }
        }
    }
    if let Some(system) = cli.color_system {
        capabilities.color_system = system;
    }
    if cli.no_ansi {
        capabilities.ansi = false;
    }
    if cli.ascii {
        capabilities.unicode = false;
    }
    if let Some(width) = cli.width {
        capabilities.width = width;
    }
    Ok(capabilities)
}

fn build_table(columns: &[String], rows: &[String], expand: bool) -> Result<Table> {
    let mut table = Table::new().expand(expand);
    for header in columns {
        table.add_column(Column::markup(header)?)?;
    }
    for row in rows {
        let cells: Vec<&str> = row.split(',').map(str::trim).collect();
        table
            .add_row_markup(&cells)
            .with_context(|| format!("Invalid row: {}", row))?;
    }
    Ok(table)
}

fn color_table(spec: &str) -> Result<Table> {
    let color = parse_color(spec)?;
    let mut table = Table::new();
    table.add_column(Column::plain("system"))?;
    table.add_column(Column::plain("color"))?;
    table.add_column(Column::plain("sample").no_wrap())?;

    for system in ColorSystem::ALL {
        let degraded = color.degrade(system);
        let sample = Paragraph::new(vec![Segment::new(
            "      ",
            Style::plain().with_background(degraded),
        )]);
        let cells: Vec<Box<dyn Renderable>> = vec![
            Box::new(Paragraph::plain(system.name())),
            Box::new(Paragraph::plain(&degraded.to_markup())),
            Box::new(sample),
        ];
        table.add_row(cells)?;
    }
    Ok(table)
}
