use clap::Parser;
use shield_icons::logging::{init_logging, LoggingConfig};
use shield_icons::{generate_all_with, manifest_icons, IconConfig, DEFAULT_OUTPUT_DIR};
use std::path::PathBuf;

/// Regenerate the shield-with-checkmark extension icons (16, 48 and 128 px).
#[derive(Parser, Debug)]
#[command(name = "shield-icons", version, about)]
struct Cli {
    /// Directory to write the PNG files into
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    out_dir: PathBuf,

    /// Stop at the first icon that fails instead of attempting the rest
    #[arg(long)]
    fail_fast: bool,

    /// Print the manifest.json "icons" fragment after generating
    #[arg(long)]
    manifest: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(if cli.verbose {
        LoggingConfig::verbose()
    } else {
        LoggingConfig::default()
    });

    let config = IconConfig {
        output_dir: cli.out_dir,
        fail_fast: cli.fail_fast,
        ..Default::default()
    };

    println!("Creating blue shield with checkmark extension icons...");
    let outcomes = generate_all_with(&config, |outcome| match &outcome.result {
        Ok(icon) => println!("✓ Created {} ({}x{})", outcome.spec.filename, icon.size, icon.size),
        Err(e) => eprintln!("✗ Failed to create {}: {}", outcome.spec.filename, e),
    });

    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    if failed > 0 {
        anyhow::bail!(
            "{} of {} icons could not be created",
            failed,
            config.icons.len()
        );
    }

    println!("\n✅ All icons created successfully!");
    println!("You can now reload the extension in Chrome.");

    if cli.manifest {
        println!("\n{}", manifest_icons(&config).to_json_pretty());
    }
    Ok(())
}
