use std::io::{self, Write};
use std::path::PathBuf;

use bs_gen_core::config::Config;
use bs_gen_core::driver::SCAN_MESSAGE;
use bs_gen_core::io::write_snapshot;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "bs-gen")]
#[command(about = "Generates random sentences from the word sequences of text files")]
struct Args {
	/// Text files to learn from, loaded in order
	sources: Vec<PathBuf>,

	/// Seed for reproducible output (random if omitted)
	#[arg(short, long)]
	seed: Option<u64>,

	/// Start every sentence from this word instead of a random capitalized one
	#[arg(long)]
	start: Option<String>,

	/// Stop a sentence after this many words
	#[arg(long)]
	max_words: Option<usize>,

	/// Read a model snapshot before loading the sources
	#[arg(long)]
	load_model: Option<PathBuf>,

	/// Write the model snapshot once the sources are loaded
	#[arg(long)]
	save_model: Option<PathBuf>,

	/// Print the whole word table after loading
	#[arg(long)]
	dump: bool,

	/// Log more (-v info, -vv debug); RUST_LOG takes precedence
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbose: u8,
}

fn init_logger(verbose: u8) {
	let level = match verbose {
		0 => "warn",
		1 => "info",
		_ => "debug",
	};
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

impl From<Args> for Config {
	fn from(args: Args) -> Self {
		Self {
			sources: args.sources,
			seed: args.seed,
			start: args.start.map(Into::into),
			max_words: args.max_words,
			load_model: args.load_model,
			save_model: args.save_model,
			dump: args.dump,
		}
	}
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();
	init_logger(args.verbose);

	let config = Config::from(args);
	let mut driver = config.driver()?;

	let stdout = io::stdout();
	let mut out = stdout.lock();
	write!(out, "{}", SCAN_MESSAGE)?;
	out.flush()?;

	driver.load_sources(&config.sources);

	if let Some(path) = &config.save_model {
		write_snapshot(path, driver.model())?;
		log::info!("saved snapshot '{}'", path.display());
	}

	if config.dump {
		writeln!(out)?;
		driver.model().dump(&mut out)?;
	}

	driver.run(io::stdin().lock(), out)?;
	Ok(())
}
