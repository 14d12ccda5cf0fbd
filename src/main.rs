use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use debscan::logging::{self, Verbosity};
use debscan::{app, cli, LanguageMap, RunConfig};

fn main() -> Result<()> {
    let args = cli::Args::parse();
    logging::init(Verbosity::from_flags(args.verbose, args.quiet));
    args.validate().context("Invalid arguments")?;

    if args.list_languages {
        let languages = LanguageMap::load(args.language_map.as_deref())
            .context("Failed to load language map")?;
        for spec in languages.iter() {
            let extensions: Vec<&str> = spec.extensions.iter().map(String::as_str).collect();
            println!("{}\t{}\t{}", spec.id, spec.api_code, extensions.join(" "));
        }
        return Ok(());
    }

    let config = RunConfig::from_args(&args);
    tracing::info!(dir = %config.target.display(), mode = ?config.mode, "starting run");

    let summary = app::run(&config).context("Run failed")?;
    println!("{}", summary.results_path.display());

    Ok(())
}
