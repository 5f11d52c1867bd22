use std::path::PathBuf;

use clap::{
	Parser,
	builder::{
		Styles,
		styling::{AnsiColor, Effects},
	},
};

pub const VERSION: &str = concat!(
	env!("CARGO_PKG_VERSION"),
	"-",
	env!("VERGEN_GIT_SHA"),
	"-",
	env!("VERGEN_CARGO_TARGET_TRIPLE"),
);

#[derive(Debug, Parser)]
#[command(
	about = "Serve the in-memory notes API over HTTP.",
	version = VERSION,
	rename_all = "kebab",
	styles = styles(),
)]
pub struct Args {
	/// Path to the TOML config file.
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
}

fn styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Red.on_default() | Effects::BOLD)
		.usage(AnsiColor::Red.on_default() | Effects::BOLD)
		.literal(AnsiColor::Blue.on_default() | Effects::BOLD)
		.placeholder(AnsiColor::Green.on_default())
}
