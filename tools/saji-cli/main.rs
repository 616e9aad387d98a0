use clap::{Parser, ValueEnum};
use saji::facet::Facet;
use saji::media::{DirBundleSource, fetch_bundle};
use saji::prelude::*;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Direction of the cooking-time sort given with `--sort`.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortCli {
    Asc,
    Desc,
}

/// Browse a recipe catalog from the terminal
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the recipe catalog JSON file (defaults to the configured catalog)
    catalog_path: Option<PathBuf>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Case-insensitive search against recipe names
    #[arg(short, long)]
    search: Option<String>,

    #[arg(long)]
    diet: Option<String>,

    #[arg(long)]
    mode: Option<String>,

    #[arg(long)]
    cuisine: Option<String>,

    #[arg(long)]
    category: Option<String>,

    #[arg(long)]
    accessory: Option<String>,

    /// Ingredient that every result must contain (repeatable)
    #[arg(long = "ingredient")]
    ingredients: Vec<String>,

    /// Maximum cooking time in minutes
    #[arg(short = 't', long)]
    max_time: Option<u32>,

    #[arg(long, value_enum)]
    sort: Option<SortCli>,

    /// Print the distinct values of every facet and exit
    #[arg(long)]
    facets: bool,

    /// Fetch the download bundle of the named recipe
    #[arg(long)]
    bundle: Option<String>,

    /// Run in interactive mode to type query commands
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(cli.config.as_deref());
    let catalog_path = cli
        .catalog_path
        .clone()
        .unwrap_or_else(|| config.catalog.path.clone());

    let mut session = Session::new(&config.browse);
    let load_start = Instant::now();
    if let Err(e) = session.finish_load(Catalog::from_file(&catalog_path)) {
        exit_with_error(&e.to_string());
    }
    if let Some(message) = session.phase().failure() {
        eprintln!("Warning: {}", message);
    }
    let load_duration = load_start.elapsed();

    if cli.facets {
        print_facets(&session);
        return;
    }

    if let Some(name) = &cli.bundle {
        run_bundle_fetch(&session, &config, name);
        return;
    }

    if cli.human {
        run_interactive(&mut session);
    } else {
        run_non_interactive(&cli, &mut session);
        println!("Catalog load: {:?}", load_duration);
    }
}

/// Applies every query flag, then prints the results once.
fn run_non_interactive(cli: &Cli, session: &mut Session) {
    let mut events = Vec::new();
    if let Some(term) = &cli.search {
        events.push(QueryEvent::SetSearch(term.clone()));
    }
    let facet_flags = [
        (Facet::Diet, &cli.diet),
        (Facet::Mode, &cli.mode),
        (Facet::Cuisine, &cli.cuisine),
        (Facet::Category, &cli.category),
        (Facet::Accessory, &cli.accessory),
    ];
    for (facet, value) in facet_flags {
        if let Some(value) = value {
            events.push(QueryEvent::SetFacet {
                facet,
                selection: Selection::Only(value.clone()),
            });
        }
    }
    for ingredient in &cli.ingredients {
        events.push(QueryEvent::AddIngredient(ingredient.clone()));
    }
    if let Some(minutes) = cli.max_time {
        events.push(QueryEvent::SetMaxTime(minutes));
    }
    if let Some(sort) = cli.sort {
        events.push(QueryEvent::SetSort(match sort {
            SortCli::Asc => SortOrder::Ascending,
            SortCli::Desc => SortOrder::Descending,
        }));
    }

    let now = Instant::now();
    for event in events {
        session.handle(event, now);
    }
    session.flush();

    let eval_start = Instant::now();
    print_results(session);
    println!("\nEvaluation: {:?}", eval_start.elapsed());
}

/// Reads query commands line by line until `quit`.
fn run_interactive(session: &mut Session) {
    println!("--- Saji Interactive Mode ---");
    println!("Commands: search <text>, diet|mode|cuisine|category|accessory <value|All>,");
    println!("          time <minutes>, sort asc|desc, add <ingredient>, remove <ingredient>,");
    println!("          facets, clear, quit");
    print_results(session);

    let stdin = io::stdin();
    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let line = line.trim();
        let (command, argument) = line.split_once(' ').unwrap_or((line, ""));
        let argument = argument.trim();

        let event = match command {
            "" => continue,
            "quit" | "exit" => break,
            "facets" => {
                print_facets(session);
                continue;
            }
            "search" => QueryEvent::SetSearch(argument.to_string()),
            "diet" | "mode" | "cuisine" | "category" | "accessory" => {
                let facet = match command {
                    "diet" => Facet::Diet,
                    "mode" => Facet::Mode,
                    "cuisine" => Facet::Cuisine,
                    "category" => Facet::Category,
                    _ => Facet::Accessory,
                };
                let selection = if argument.is_empty() || argument == "All" {
                    Selection::Any
                } else {
                    Selection::Only(argument.to_string())
                };
                QueryEvent::SetFacet { facet, selection }
            }
            "time" => match argument.parse() {
                Ok(minutes) => QueryEvent::SetMaxTime(minutes),
                Err(_) => {
                    println!("Invalid time '{}'. Please enter whole minutes.", argument);
                    continue;
                }
            },
            "sort" => match argument.parse() {
                Ok(order) => QueryEvent::SetSort(order),
                Err(e) => {
                    println!("{}", e);
                    continue;
                }
            },
            "add" => QueryEvent::AddIngredient(argument.to_string()),
            "remove" => QueryEvent::RemoveIngredient(argument.to_string()),
            "clear" => QueryEvent::Clear,
            other => {
                println!("Unknown command '{}'.", other);
                continue;
            }
        };

        // Each line is a complete edit, so a deferred search runs immediately.
        session.handle(event, Instant::now());
        session.flush();
        print_results(session);
    }
}

fn run_bundle_fetch(session: &Session, config: &AppConfig, name: &str) {
    let Some(recipe) = session
        .phase()
        .catalog()
        .and_then(|c| c.iter().find(|r| r.name.eq_ignore_ascii_case(name)))
    else {
        exit_with_error(&format!("No recipe named '{}' in the catalog", name));
    };

    let source = DirBundleSource::new(&config.media.bundle_dir);
    match fetch_bundle(&source, recipe) {
        Ok(bundle) => println!(
            "Fetched '{}' ({} bytes) from '{}'",
            bundle.name,
            bundle.bytes.len(),
            source.root().display()
        ),
        Err(e) => eprintln!("Bundle unavailable: {}", e),
    }
}

fn print_results(session: &Session) {
    let query = session.query();
    println!(
        "\nQuery: search='{}' max_time={} sort={}",
        query.search, query.max_time, query.sort
    );
    if !query.ingredients.is_empty() {
        println!("Ingredients: {}", query.ingredients.join(", "));
    }

    match ResultsView::for_session(session) {
        ResultsView::Cards { count_label, cards } => {
            println!("{}", count_label);
            for card in cards {
                println!("  [{:>4}] {}", card.time_badge, card.title);
                println!("         {} / {}", card.meta, card.category);
                if let Some(line) = card.accessory_line {
                    println!("         {}", line);
                }
            }
        }
        view => {
            if let Some(message) = view.message() {
                println!("{}", message);
            }
        }
    }
}

fn print_facets(session: &Session) {
    for options in FacetOptions::all(session.facets()) {
        let labels: Vec<&str> = options.options.iter().map(|o| o.label.as_str()).collect();
        println!("{}: {}", options.facet, labels.join(", "));
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
