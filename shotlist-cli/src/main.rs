use chrono::Local;
use clap::Parser;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use shotlist_compose::PromptComposer;
use shotlist_config::{Catalog, Config, ConfigError, LoadOutcome, load_or_init, load_or_init_at};
use shotlist_input::{InputError, Prompter};
use shotlist_output::{OutputError, render_report, save_report};
use shotlist_utils::trimmed_or_none;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod interview;

use interview::{BuiltPrompt, build_prompt};

/// Shotlist CLI entry point.
///
/// Walks through a series of menus describing a portrait shoot and assembles
/// a prompt and negative prompt for image generators such as Stable Diffusion.
#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "shotlist",
    author,
    version,
    about = "Build ultra realistic image prompts from guided menus.",
    long_about = None
)]
struct Cli {
    /// Seed for every random default, making a session reproducible.
    #[arg(long, value_name = "N")]
    seed: Option<u64>,
    /// Directory receiving saved prompt files (overrides the config file).
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,
    /// Read the configuration from this file instead of ~/.shotlist/config.toml.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Brand text placed on the product label.
    #[arg(long, value_name = "TEXT")]
    brand: Option<String>,
    /// Build a single prompt and exit without asking to repeat.
    #[arg(long)]
    once: bool,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Error)]
enum SessionError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("failed to save prompts: {0}")]
    Output(#[from] OutputError),
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let context = run(&cli);

    for message in &context.infos {
        eprintln!("{message}");
    }

    for warning in &context.warnings {
        eprintln!("{warning}");
    }

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout(), rng);

    match run_session(&mut prompter, &context, cli.once) {
        Ok(()) | Err(SessionError::Input(InputError::Closed)) => {}
        Err(error) => {
            eprintln!("Error: {error}");
            std::process::exit(1);
        }
    }
}

#[derive(Debug)]
struct RunContext {
    catalog: Catalog,
    composer: PromptComposer,
    output_dir: PathBuf,
    infos: Vec<String>,
    warnings: Vec<String>,
}

fn run(cli: &Cli) -> RunContext {
    let mut infos = Vec::new();
    let mut warnings = Vec::new();

    let loaded: Result<LoadOutcome, ConfigError> = match &cli.config {
        Some(path) => load_or_init_at(path),
        None => load_or_init(),
    };

    let config = match loaded {
        Ok(outcome) => {
            if outcome.created {
                infos.push(format!(
                    "Created shotlist configuration at {}",
                    outcome.path.display()
                ));
            }
            outcome.config
        }
        Err(error) => {
            warnings.push(format!(
                "Warning: failed to load shotlist configuration ({error}). Falling back to defaults."
            ));
            Config::default()
        }
    };

    let brand_text = trimmed_or_none(cli.brand.as_deref())
        .or_else(|| trimmed_or_none(Some(config.brand_text.as_str())))
        .unwrap_or(shotlist_compose::DEFAULT_BRAND_TEXT)
        .to_string();
    let output_dir = cli
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output_dir));
    let composer = PromptComposer::new(config.catalog.negative_baseline.clone(), brand_text);

    RunContext {
        catalog: config.catalog,
        composer,
        output_dir,
        infos,
        warnings,
    }
}

fn run_session<R, W, G>(
    prompter: &mut Prompter<R, W, G>,
    context: &RunContext,
    once: bool,
) -> Result<(), SessionError>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    loop {
        let built = build_prompt(prompter, &context.catalog, &context.composer)?;
        debug!(selections = ?built.selections, "composed prompt");
        let settings_block = context.catalog.settings.render();
        present(prompter, &built, &settings_block)?;
        offer_save(prompter, context, &built, &settings_block)?;

        if once {
            return Ok(());
        }

        let again = prompter.ask("\nGenerate another? (ENTER = yes, q = quit): ")?;
        if again.eq_ignore_ascii_case("q") {
            return Ok(());
        }
    }
}

fn present<R, W, G>(
    prompter: &mut Prompter<R, W, G>,
    built: &BuiltPrompt,
    settings_block: &str,
) -> Result<(), InputError>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    prompter.say("\n--- FINAL PROMPT ---")?;
    prompter.say(&built.prompt.positive)?;
    prompter.say("\n--- NEGATIVE PROMPT ---")?;
    prompter.say(&built.prompt.negative)?;
    prompter.say("\n--- SETTINGS ---")?;
    prompter.say(settings_block)
}

fn offer_save<R, W, G>(
    prompter: &mut Prompter<R, W, G>,
    context: &RunContext,
    built: &BuiltPrompt,
    settings_block: &str,
) -> Result<(), SessionError>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    let answer = prompter.ask("Save output to timestamped .txt? (ENTER = don't save, y = save): ")?;
    if !answer.eq_ignore_ascii_case("y") {
        return Ok(());
    }

    let report = render_report(&built.prompt, settings_block);
    let timestamp = Local::now().naive_local();
    let path = save_report(&report, &context.output_dir, &timestamp)?;
    prompter.say(&format!("Saved to {}", path.display()))?;
    Ok(())
}
