use std::env;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use storefront_core::catalog::JsonCatalogSource;
use storefront_core::config::{resolve_with_base, Config};
use storefront_search::{
    CatalogIndexer, FilterState, SearchIndex, SearchOutcome, SearchPipeline, SearchSession, SortMode,
    UrlLocation, ALL_CATEGORIES,
};

struct Options {
    catalog: Option<PathBuf>,
    filter: FilterState,
    json: bool,
    positional: Vec<String>,
}

fn usage(prog: &str) -> ! {
    eprintln!("Usage: {prog} <search|url|categories> [args...]");
    eprintln!("  {prog} search \"<query>\" [--category <name>] [--sort relevance|name|priceAsc|priceDesc] [--json]");
    eprintln!("  {prog} url \"<https://...?q=...>\" [--category <name>] [--sort <mode>] [--json]");
    eprintln!("  {prog} categories");
    eprintln!("Common: --catalog <file|dir> overrides catalog.path from storefront.toml");
    std::process::exit(1)
}

fn parse_args() -> anyhow::Result<(String, String, Options)> {
    let mut args: Vec<String> = env::args().collect();
    let prog = args.remove(0);
    if args.is_empty() { usage(&prog); }
    let cmd = args.remove(0);

    let mut opts = Options { catalog: None, filter: FilterState::default(), json: false, positional: Vec::new() };
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--catalog" | "-c" => { i += 1; opts.catalog = Some(PathBuf::from(args.get(i).unwrap_or_else(|| usage(&prog)))); }
            "--category" => { i += 1; opts.filter.category = args.get(i).cloned().unwrap_or_else(|| usage(&prog)); }
            "--sort" | "-s" => { i += 1; opts.filter.sort_mode = args.get(i).unwrap_or_else(|| usage(&prog)).parse::<SortMode>()?; }
            "--json" => opts.json = true,
            _ => opts.positional.push(args[i].clone()),
        }
        i += 1;
    }
    Ok((prog, cmd, opts))
}

fn print_outcome(outcome: &SearchOutcome<'_>, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&outcome.to_records())?);
        return Ok(());
    }
    match outcome.summary() {
        Some(line) => println!("{line}"),
        None => println!("Escribe algo para buscar."),
    }
    for hit in outcome.hits() {
        let r = hit.record;
        println!(
            "{:>4}  {:<12} {:<40} {:<12} ${:>8}  {}",
            hit.score,
            r.code,
            r.name,
            r.category,
            r.price,
            r.detail_url.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load().map_err(|e| { eprintln!("Error loading config: {e}"); e })?;
    let settings = config.settings()?;
    let (prog, cmd, opts) = parse_args()?;

    let catalog_path = match &opts.catalog {
        Some(p) => p.clone(),
        None => resolve_with_base(&env::current_dir()?, &settings.catalog.path),
    };
    let index: SearchIndex = CatalogIndexer::new(JsonCatalogSource::new(&catalog_path))
        .with_detail_url_prefix(settings.search.detail_url_prefix.clone())
        .build()?;

    match cmd.as_str() {
        "search" => {
            let query = opts.positional.join(" ");
            let pipeline = SearchPipeline::from_settings(index, &settings.search);
            print_outcome(&pipeline.run(&query, &opts.filter), opts.json)?;
        }
        "url" => {
            let raw = opts.positional.first().cloned().unwrap_or_else(|| usage(&prog));
            let mut session = SearchSession::from_settings(index, &settings.search, UrlLocation::parse(&raw)?);
            if opts.filter.category != ALL_CATEGORIES || opts.filter.sort_mode != SortMode::Relevance {
                session.set_filter(opts.filter.clone());
            }
            tracing::info!(query = %session.query(), "query restored from url");
            print_outcome(&session.outcome(), opts.json)?;
        }
        "categories" => {
            for label in index.category_options().labels() {
                println!("{label}");
            }
        }
        _ => { eprintln!("Unknown command: {cmd}"); usage(&prog); }
    }
    Ok(())
}
