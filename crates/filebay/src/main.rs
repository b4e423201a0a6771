//! Filebay - headless host
//!
//! Loads the configuration, ingests the files named on the command line
//! through the picker, applies view options and prints the resulting
//! view with its statistics footer.
//!
//! ## Command line flags
//!
//! - `--table`: Render as a table instead of cards
//! - `--search <TEXT>`: Case-insensitive name search
//! - `--type <MIME>`: Exact type filter
//! - `--sort <name|size|created>`: Sort key
//! - `--desc`: Descending order
//! - `--select <NAME>`: Tick every record with this name (repeatable)
//! - `--delete <NAME>`: Delete every record with this name (asks first)
//! - `--delete-selected`: Delete the ticked records (asks first)
//! - `-y`, `--yes`: Answer every confirmation with yes
//! - `--json`: Print a JSON snapshot instead of text
//! - `--config <PATH>`: Use another config file

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use filebay::config::{default_app_config_path, load_app_config};
use filebay::picker::pick_files;
use filebay::{AutoConfirm, DeleteTarget, FileManagerDomain, Message, Prompter};
use filebay_core::{FileId, FileOpError, SortDirection, SortKey, SystemClock, ViewMode};

/// Asks on stdin; anything but `y`/`yes` declines
struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn confirm(&mut self, target: &DeleteTarget) -> bool {
        print!("{} [y/N] ", target.listing());
        if std::io::stdout().flush().is_err() {
            return false;
        }
        let mut line = String::new();
        match std::io::stdin().lock().read_line(&mut line) {
            Ok(_) => matches!(line.trim().to_lowercase().as_str(), "y" | "yes"),
            Err(e) => {
                log::warn!("TerminalPrompter: failed to read answer: {}", e);
                false
            }
        }
    }

    fn acknowledge(&mut self, message: &str) {
        println!("{}", message);
    }
}

/// Either prompter, picked at startup
enum HostPrompter {
    Terminal(TerminalPrompter),
    Auto(AutoConfirm),
}

impl Prompter for HostPrompter {
    fn confirm(&mut self, target: &DeleteTarget) -> bool {
        match self {
            Self::Terminal(p) => p.confirm(target),
            Self::Auto(p) => p.confirm(target),
        }
    }

    fn acknowledge(&mut self, message: &str) {
        match self {
            Self::Terminal(p) => p.acknowledge(message),
            Self::Auto(p) => p.acknowledge(message),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "filebay")]
#[command(about = "In-memory file manager", long_about = None)]
struct Args {
    /// Files to ingest
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// Render as a table instead of cards
    #[arg(long)]
    table: bool,

    /// Case-insensitive name search
    #[arg(long, value_name = "TEXT")]
    search: Option<String>,

    /// Exact type filter
    #[arg(long = "type", value_name = "MIME")]
    type_filter: Option<String>,

    /// Sort key: name, size or created
    #[arg(long = "sort", value_name = "KEY", value_parser = parse_sort_key)]
    sort_by: Option<SortKey>,

    /// Descending order
    #[arg(long = "desc")]
    descending: bool,

    /// Tick every record with this name (repeatable)
    #[arg(long, value_name = "NAME")]
    select: Vec<String>,

    /// Delete every record with this name (asks first)
    #[arg(long, value_name = "NAME")]
    delete: Vec<String>,

    /// Delete the ticked records (asks first)
    #[arg(long)]
    delete_selected: bool,

    /// Answer every confirmation with yes
    #[arg(short, long)]
    yes: bool,

    /// Print a JSON snapshot instead of text
    #[arg(long)]
    json: bool,

    /// Use another config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn parse_sort_key(raw: &str) -> std::result::Result<SortKey, String> {
    SortKey::parse(raw)
        .ok_or_else(|| format!("unknown sort key {:?} (expected name, size or created)", raw))
}

fn ids_named<P: Prompter>(domain: &FileManagerDomain<P>, name: &str) -> Vec<FileId> {
    domain
        .collection()
        .iter()
        .filter(|r| r.name == name)
        .map(|r| r.id)
        .collect()
}

/// Send a message, logging refusals instead of aborting
fn dispatch<P: Prompter>(domain: &mut FileManagerDomain<P>, message: Message) {
    match domain.update(message) {
        Ok(_) => {}
        Err(FileOpError::UserDeclined) => println!("Cancelled."),
        Err(e) => log::warn!("{}", e),
    }
}

fn print_cards<P: Prompter>(domain: &FileManagerDomain<P>) {
    for record in domain.view() {
        let mark = if domain.selection().is_selected(record.id) { "[x]" } else { "[ ]" };
        println!("{} {} {}", mark, record.kind().glyph(), record.name);
        println!(
            "      {} · {} · {}",
            record.display_size(),
            record.display_date(),
            record.mime
        );
    }
}

fn print_table<P: Prompter>(domain: &FileManagerDomain<P>) {
    println!("{:<3} {:<40} {:>10} {:<10} {}", "", "Name", "Size", "Created", "Type");
    for record in domain.view() {
        let mark = if domain.selection().is_selected(record.id) { "x" } else { "" };
        println!(
            "{:<3} {:<40} {:>10} {:<10} {}",
            mark,
            record.name,
            record.display_size(),
            record.display_date(),
            record.mime
        );
    }
}

fn print_footer<P: Prompter>(domain: &FileManagerDomain<P>) {
    let stats = domain.stats();
    println!();
    println!(
        "{} file(s), {} total, {} average",
        stats.total_files,
        stats.display_total_size(),
        stats.display_average_size()
    );
    println!(
        "Images: {}  PDF: {}  Other: {}",
        stats.image_count, stats.pdf_count, stats.other_count
    );
    if let Some(largest) = stats.largest {
        println!("Largest: {} ({})", largest.name, largest.display_size());
    }
    if let Some(newest) = stats.newest {
        println!("Newest:  {} ({})", newest.name, newest.display_date());
    }
    if let Some(oldest) = stats.oldest {
        println!("Oldest:  {} ({})", oldest.name, oldest.display_date());
    }
    for notice in domain.notices() {
        println!("» {}", notice.message);
    }
}

fn main() -> Result<()> {
    // Initialize logger - set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args = Args::parse();
    log::info!("filebay starting up");

    let config_path = args.config.clone().unwrap_or_else(default_app_config_path);
    let config = load_app_config(&config_path);

    let prompter = if args.yes {
        HostPrompter::Auto(AutoConfirm)
    } else {
        HostPrompter::Terminal(TerminalPrompter)
    };
    let mut domain = FileManagerDomain::new(&config, prompter, Box::new(SystemClock));

    if !args.paths.is_empty() {
        let blobs = pick_files(&args.paths, config.max_picked_file_bytes);
        dispatch(&mut domain, Message::AddFiles(blobs));
    }

    if args.table {
        domain.set_view_mode(ViewMode::Table);
    }
    if let Some(search) = args.search {
        domain.set_search_query(search);
    }
    if args.type_filter.is_some() {
        domain.set_type_filter(args.type_filter);
    }
    if let Some(key) = args.sort_by {
        domain.set_sort_by(key);
    }
    if args.descending && domain.query().sort_dir == SortDirection::Ascending {
        domain.toggle_sort_direction();
    }

    for name in &args.select {
        for id in ids_named(&domain, name) {
            dispatch(&mut domain, Message::ToggleSelect(id));
        }
    }
    for name in &args.delete {
        let ids = ids_named(&domain, name);
        if ids.is_empty() {
            log::warn!("No file named {:?}", name);
        }
        for id in ids {
            dispatch(&mut domain, Message::Delete(id));
        }
    }
    if args.delete_selected {
        dispatch(&mut domain, Message::DeleteSelected);
    }

    if args.json {
        let json = serde_json::to_string_pretty(&domain.snapshot())
            .context("Failed to serialize snapshot")?;
        println!("{}", json);
        return Ok(());
    }

    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║                         Filebay                              ║");
    println!("║                  in-memory file manager                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    match domain.view_mode() {
        ViewMode::Cards => print_cards(&domain),
        ViewMode::Table => print_table(&domain),
    }
    print_footer(&domain);
    Ok(())
}
