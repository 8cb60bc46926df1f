//! # CLI Layer
//!
//! This module is **one possible UI client** for shelf. It is the only place
//! that knows about stdout, stderr and argument parsing; everything it does
//! goes through [`ShelfApi`].

use super::render;
use super::setup::{Cli, Commands, OutputMode};
use clap::Parser;
use serde::Serialize;
use shelfapp::api::ShelfApi;
use shelfapp::editor::FilterForm;
use shelfapp::error::{Result, ShelfError};
use shelfapp::filter::FilterClause;
use shelfapp::init::{initialize, load_config};
use shelfapp::listing::ProductListing;
use shelfapp::store::DataSource;
use std::path::PathBuf;
use tracing::Level;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let use_color = console::colors_enabled();

    // Config does not need a datastore
    if let Some(Commands::Config) = &cli.command {
        let config = load_config(&cwd);
        let text = toml::to_string(&config).map_err(|e| ShelfError::Config(e.to_string()))?;
        print!("{}", text);
        return Ok(());
    }

    let mut ctx = initialize(&cwd, cli.data.clone())?;

    match cli.command.unwrap_or(Commands::List {
        property: None,
        operator: None,
        value: Vec::new(),
    }) {
        Commands::List {
            property,
            operator,
            value,
        } => {
            if let Some(form) = filter_form(property, operator, value) {
                ctx.api.apply(&form)?;
            }
            handle_list(&ctx.api, cli.output, use_color)
        }
        Commands::Properties => {
            let properties = ctx.api.properties();
            match cli.output {
                OutputMode::Json => print_json(&properties),
                OutputMode::Text => {
                    print!("{}", render::render_properties(properties, use_color));
                    Ok(())
                }
            }
        }
        Commands::Operators { property } => {
            let operators = ctx.api.operators_for(&property)?;
            match cli.output {
                OutputMode::Json => print_json(&operators),
                OutputMode::Text => {
                    print!("{}", render::render_operators(&operators, use_color));
                    Ok(())
                }
            }
        }
        Commands::Config => Ok(()),
    }
}

/// Form input from `list` arguments; `None` when no filter was given.
fn filter_form(
    property: Option<String>,
    operator: Option<String>,
    value: Vec<String>,
) -> Option<FilterForm> {
    let property = property?;
    Some(FilterForm::new(property, operator.unwrap_or_default()).with_value(value.join(" ")))
}

#[derive(Serialize)]
struct ListOutput<'a> {
    filter: Option<&'a FilterClause>,
    #[serde(flatten)]
    listing: ProductListing,
}

fn handle_list<S: DataSource>(api: &ShelfApi<S>, output: OutputMode, use_color: bool) -> Result<()> {
    let listing = api.listing();
    match output {
        OutputMode::Json => print_json(&ListOutput {
            filter: api.current_filter(),
            listing,
        }),
        OutputMode::Text => {
            let filter = api.current_filter().map(|clause| {
                render::describe_filter(clause, &api.store().catalog())
            });
            print!(
                "{}",
                render::render_listing(&listing, filter.as_deref(), use_color)
            );
            Ok(())
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
