use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `gsearch` binary.
#[derive(Parser, Debug)]
#[command(
	name = "gsearch",
	version,
	long_version = long_version(),
	about = "Search the product catalogue from the terminal",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "GSEARCH_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'e',
		long,
		value_name = "URL",
		help = "Search endpoint queried with ?q=<query> (default: hosted explore API)"
	)]
	pub(crate) endpoint: Option<String>,
	#[arg(
		long,
		value_name = "URL",
		help = "Portal base used to build result links (default: hosted order portal)"
	)]
	pub(crate) portal: Option<String>,
	#[arg(
		long = "debounce-ms",
		value_name = "MS",
		help = "Quiet period after typing before a search is sent (default: 500)"
	)]
	pub(crate) debounce_ms: Option<u64>,
	#[arg(
		long = "min-chars",
		value_name = "NUM",
		help = "Shortest query that is searched (default: 3)"
	)]
	pub(crate) min_chars: Option<usize>,
	#[arg(
		long = "timeout-secs",
		value_name = "SECS",
		help = "Abort a search request after this many seconds (default: 10)"
	)]
	pub(crate) timeout_secs: Option<u64>,
	#[arg(
		long = "compact-width",
		value_name = "COLUMNS",
		help = "Terminal width below which results fill the screen (default: 60)"
	)]
	pub(crate) compact_width: Option<u16>,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Provide an initial search query (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long,
		value_name = "TEXT",
		help = "Placeholder shown while the prompt is empty (default: built-in text)"
	)]
	pub(crate) placeholder: Option<String>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		long,
		help = "Open the accepted link in the default browser (default: disabled)"
	)]
	pub(crate) open: bool,
	#[arg(
		long = "log-level",
		value_name = "FILTER",
		help = "Log filter directive, e.g. debug or gsearch_core=trace (default: $GSEARCH_LOG or info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
