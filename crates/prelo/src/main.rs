use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use prelo_board::{BoardState, BookCard, CardRow, ChangeEvent, Column, InMemoryFeed, Reconciler};
use prelo_core::types::{CitationStyle, MaterialType};
use prelo_core::{schema, Reference};
use prelo_processor::{io::load_references, Formatter};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tabled::{Table, Tabled};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
use config::Config;

#[derive(Parser)]
#[command(author, version, about = "Portal editorial Prelo", long_about = None)]
struct Cli {
    /// Path to a prelo.toml configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format a batch of references in a citation style
    Format {
        /// Path to the references file (YAML/JSON)
        references: PathBuf,

        /// Citation style (defaults to the configured style)
        #[arg(short, long, value_enum)]
        style: Option<StyleArg>,

        /// Specific reference keys to format (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        keys: Option<Vec<String>>,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Access date substituted when a reference has none (YYYY-MM-DD)
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },
    /// Show the field schema for a material type
    Fields {
        /// Material type identifier (e.g. book, periodical-article)
        material: String,
    },
    /// Validate a batch of references against the field schema
    Validate {
        /// Path to the references file (YAML/JSON)
        references: PathBuf,
    },
    /// Display the logistics board from a row dump
    Board {
        /// Path to the card rows file (YAML/JSON list)
        rows: PathBuf,

        /// Change-event log to replay on top of the rows
        #[arg(long)]
        events: Option<PathBuf>,
    },
    /// Generate shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
enum StyleArg {
    Abnt,
    Vancouver,
    Nlm,
    Mla,
    Apa,
}

impl From<StyleArg> for CitationStyle {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Abnt => CitationStyle::Abnt,
            StyleArg::Vancouver => CitationStyle::Vancouver,
            StyleArg::Nlm => CitationStyle::Nlm,
            StyleArg::Mla => CitationStyle::Mla,
            StyleArg::Apa => CitationStyle::Apa,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "prelo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = Config::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Format {
            references,
            style,
            keys,
            json,
            as_of,
        } => cmd_format(&references, style, keys, json || config.formatting.json, as_of, &config),
        Commands::Fields { material } => cmd_fields(&material),
        Commands::Validate { references } => cmd_validate(&references),
        Commands::Board { rows, events } => cmd_board(&rows, events.as_deref()),
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "prelo",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}

fn resolve_style(style: Option<StyleArg>, config: &Config) -> Result<CitationStyle> {
    match style {
        Some(arg) => Ok(arg.into()),
        None => CitationStyle::from_str(&config.formatting.style)
            .with_context(|| format!("estilo configurado inválido: {}", config.formatting.style)),
    }
}

fn cmd_format(
    references: &Path,
    style: Option<StyleArg>,
    keys: Option<Vec<String>>,
    json: bool,
    as_of: Option<NaiveDate>,
    config: &Config,
) -> Result<()> {
    let style = resolve_style(style, config)?;
    let batch = load_references(references)?;

    let mut formatter = Formatter::new(style);
    if let Some(date) = as_of {
        formatter = formatter.as_of(date);
    }

    let selected: Vec<(&String, &Reference)> = match &keys {
        Some(keys) => {
            let mut picked = Vec::new();
            for key in keys {
                let reference = batch
                    .get(key)
                    .with_context(|| format!("referência não encontrada: {key}"))?;
                picked.push((key, reference));
            }
            picked
        }
        None => batch.iter().collect(),
    };

    let mut failures = 0usize;
    let mut rendered = indexmap::IndexMap::new();
    for (key, reference) in selected {
        if let Err(err) = formatter.validate(reference) {
            failures += 1;
            eprintln!("{} {key}: {err}", "✗".red());
            continue;
        }
        rendered.insert(key.clone(), formatter.format(reference));
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&rendered)?);
    } else {
        for (key, formatted) in &rendered {
            println!("{}  {}", key.cyan(), formatted.text);
        }
    }

    if failures > 0 {
        bail!("{failures} referência(s) inválida(s)");
    }
    Ok(())
}

fn cmd_fields(material: &str) -> Result<()> {
    let material = MaterialType::from_str(material)?;
    println!("{} ({})", material.label().bold(), material.as_str());
    println!("{}", "Campos obrigatórios:".green());
    for field in schema::required_fields(material) {
        println!("  {field}");
    }
    let optional = schema::optional_fields(material);
    if !optional.is_empty() {
        println!("{}", "Campos opcionais:".yellow());
        for field in optional {
            println!("  {field}");
        }
    }
    Ok(())
}

fn cmd_validate(references: &Path) -> Result<()> {
    let batch = load_references(references)?;
    // Validation is style-independent; the house style stands in.
    let formatter = Formatter::new(CitationStyle::Abnt);

    let mut failures = 0usize;
    for (key, reference) in &batch {
        match formatter.validate(reference) {
            Ok(()) => println!("{} {key}", "✓".green()),
            Err(err) => {
                failures += 1;
                println!("{} {key}: {err}", "✗".red());
            }
        }
    }

    if failures > 0 {
        bail!("{failures} de {} referência(s) inválida(s)", batch.len());
    }
    println!("{} referência(s) válida(s)", batch.len());
    Ok(())
}

#[derive(Tabled)]
struct BoardLine {
    #[tabled(rename = "Coluna")]
    column: String,
    #[tabled(rename = "Título")]
    title: String,
    #[tabled(rename = "ISBN")]
    isbn: String,
    #[tabled(rename = "Qtd. prevista")]
    expected: String,
    #[tabled(rename = "Previsão")]
    arrival: String,
}

fn cmd_board(rows: &Path, events: Option<&Path>) -> Result<()> {
    let rows: Vec<CardRow> = load_by_extension(rows)?;
    let mut state = BoardState::new();
    state.load(rows.into_iter().map(BookCard::from).collect());

    if let Some(events_path) = events {
        let log: Vec<ChangeEvent> = load_by_extension(events_path)?;
        let mut feed = InMemoryFeed::new();
        for event in log {
            feed.push(event);
        }
        let applied = Reconciler::new().drain(&mut state, &mut feed);
        println!("{applied} evento(s) aplicados\n");
    }

    let mut lines = Vec::new();
    for column in Column::ALL {
        for card in state.column(column) {
            lines.push(BoardLine {
                column: column.label().to_string(),
                title: card.title.clone(),
                isbn: card.isbn.clone(),
                expected: card
                    .expected_quantity
                    .map(|q| q.to_string())
                    .unwrap_or_default(),
                arrival: card
                    .expected_arrival
                    .map(|d| d.to_string())
                    .unwrap_or_default(),
            });
        }
    }
    println!("{}", Table::new(lines));
    Ok(())
}

fn load_by_extension<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("lendo {}", path.display()))?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");
    let value = match ext {
        "json" => serde_json::from_str(&content)
            .with_context(|| format!("interpretando {}", path.display()))?,
        _ => serde_yaml::from_str(&content)
            .with_context(|| format!("interpretando {}", path.display()))?,
    };
    Ok(value)
}
