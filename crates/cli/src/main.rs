use anyhow::Context;
use clap::{Parser, Subcommand};
use hcrm_console::{render, replay_file, OutputFormat};
use hcrm_core::{CoreConfig, Entry, FieldName, Fields, Ledger, Route, SeedData, Shell};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "hcrm")]
#[command(about = "Hospital CRM command line")]
struct Cli {
    /// Application title (overrides HCRM_TITLE)
    #[arg(long, global = true)]
    title: Option<String>,
    /// Seed data: demo or empty (overrides HCRM_SEED)
    #[arg(long, global = true)]
    seed: Option<String>,
    /// Path shown at start-up (overrides HCRM_START_PATH)
    #[arg(long, global = true)]
    start_path: Option<String>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the routes and their sidebar labels
    Routes,
    /// Print the seed data
    Seed {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the screen for a path
    Show {
        /// Path to open, e.g. /appointments
        path: String,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Replay a command script and print the final screen
    Replay {
        /// Script with one command per line
        script: PathBuf,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let cfg = CoreConfig::from_env_values(
        cli.title.or_else(|| std::env::var("HCRM_TITLE").ok()),
        cli.seed.or_else(|| std::env::var("HCRM_SEED").ok()),
        cli.start_path.or_else(|| std::env::var("HCRM_START_PATH").ok()),
    )
    .context("invalid configuration")?;

    match cli.command {
        Some(Commands::Routes) => {
            for route in Route::ALL {
                println!("{:<18} {}", route.path(), route.label());
            }
        }
        Some(Commands::Seed { json }) => {
            let seed = SeedData::load(cfg.seed_mode());
            if json {
                println!("{}", serde_json::to_string_pretty(&seed)?);
            } else {
                print_ledger("Patients", &seed.patients);
                print_ledger("Medical Records", &seed.medical_records);
                print_ledger("Prescriptions", &seed.prescriptions);
                print_ledger("Appointments", &seed.appointments);
            }
        }
        Some(Commands::Show { path, json }) => {
            let mut shell = Shell::new(cfg);
            shell.navigate(&path);
            let out = render(&shell.view(), output_format(json))?;
            std::io::stdout().write_all(out.as_bytes())?;
        }
        Some(Commands::Replay { script, json }) => {
            let stdout = std::io::stdout();
            let (_, summary) = replay_file(Shell::new(cfg), &script, stdout.lock(), output_format(json))
                .with_context(|| format!("replay of {} failed", script.display()))?;
            if summary.errors > 0 {
                tracing::warn!("{} of the script's commands were rejected", summary.errors);
            }
        }
        None => {
            println!("Use 'hcrm --help' for commands");
        }
    }

    Ok(())
}

fn output_format(json: bool) -> OutputFormat {
    if json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    }
}

fn print_ledger<T: Entry>(title: &str, ledger: &Ledger<T>) {
    println!("{title} ({})", ledger.len());
    for entry in ledger.iter() {
        let values: Vec<String> = <<T::Fields as Fields>::Field as FieldName>::ALL
            .iter()
            .map(|field| format!("{}={}", field.name(), entry.fields().get(*field)))
            .collect();
        println!("  #{} {}", entry.id(), values.join(", "));
    }
}
