//! Command-line interface for inspecting resolved settings.

pub mod commands;
pub mod output;
pub mod types;

pub use types::{Cli, Commands};

use anyhow::Result;

/// Run the parsed command.
pub fn run(cli: &Cli) -> Result<()> {
    let base_dir = cli.base_dir.as_deref();
    match &cli.command {
        Commands::Show(args) => commands::show::execute(args, base_dir, cli.json),
        Commands::Get(args) => commands::get::execute(args, cli.json),
        Commands::Apps(args) => commands::apps::execute(args, base_dir, cli.json),
        Commands::Check(args) => commands::check::execute(args, base_dir, cli.json),
    }
}

/// Report a failed command and exit with status 1.
pub fn handle_error(err: &anyhow::Error, json_mode: bool) -> ! {
    tracing::error!(error = %format!("{err:#}"), "command failed");

    if json_mode {
        let chain: Vec<String> = err.chain().map(ToString::to_string).collect();
        let body = serde_json::json!({
            "success": false,
            "error": err.to_string(),
            "causes": &chain[1..],
        });
        println!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    } else {
        eprintln!("Error: {err}");
        for cause in err.chain().skip(1) {
            eprintln!("  caused by: {cause}");
        }
    }

    std::process::exit(1)
}
