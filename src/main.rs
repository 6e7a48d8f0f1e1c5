mod app_dirs;
mod cli;
mod logging;
mod settings;

use std::time::Instant;

use anyhow::{Context, Result};
use cli::{CliArgs, OutputFormat, parse_cli, print_json, print_plain};
use gsearch_core::HttpSearchClient;
use gsearch_tui::{App, SearchOutcome, style};
use settings::ResolvedConfig;
use tracing::info;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		list_themes();
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	init_logging(&cli);

	let outcome = run_search(&resolved)?;
	match cli.output {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	if cli.open
		&& let Some(link) = outcome.link()
	{
		opener::open(link).with_context(|| format!("failed to open {link}"))?;
	}

	Ok(())
}

fn list_themes() {
	for descriptor in style::descriptors() {
		if descriptor.aliases.is_empty() {
			println!("{}", descriptor.name);
		} else {
			println!("{} (aliases: {})", descriptor.name, descriptor.aliases.join(", "));
		}
	}
}

/// Start file logging; the search still runs when the log cannot be opened.
fn init_logging(cli: &CliArgs) {
	let result = app_dirs::get_data_dir()
		.and_then(|dir| logging::initialize(&dir, cli.log_level.as_deref()));
	if let Err(err) = result {
		eprintln!("gsearch: logging disabled: {err:#}");
	}
}

/// Run the interactive search with the resolved settings.
fn run_search(settings: &ResolvedConfig) -> Result<SearchOutcome> {
	let client = HttpSearchClient::new(settings.endpoint.clone(), Some(settings.timeout))
		.context("failed to set up the search client")?;
	info!(endpoint = %client.endpoint(), "starting search session");

	let mut app = App::new(client, settings.widget_options());
	if let Some(name) = &settings.theme
		&& let Some(theme) = style::by_name(name)
	{
		app.set_theme(theme);
	}
	app.set_ui(settings.ui.clone());
	app.set_initial_query(&settings.initial_query, Instant::now());

	app.run()
}
