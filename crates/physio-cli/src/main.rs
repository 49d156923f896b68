use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;

use physio_cli::commands;
use physio_cli::config::{self, OutputFormat, PhysioConfig};

#[derive(Parser)]
#[command(name = "physio")]
#[command(about = "Physiotherapy assessment forms: schemas, defaults and controlled edits")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the config file (default: platform config directory)
    #[arg(short, long, global = true, env = "PHYSIO_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available assessment forms
    Forms,

    /// Print a form's sections and fields as JSON
    Schema {
        /// Form id (default: configured default form)
        form: Option<String>,
    },

    /// Print a form's all-empty default record as JSON
    Defaults { form: Option<String> },

    /// Render a record merged over the form defaults
    Render {
        form: Option<String>,

        /// JSON file holding a full or partial record
        #[arg(short, long)]
        record: Option<PathBuf>,

        /// Output format (default: configured output)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Edit one field and print the complete next record as JSON
    Edit {
        form: Option<String>,

        #[arg(short, long)]
        record: Option<PathBuf>,

        /// Field key, e.g. patientAge
        #[arg(long)]
        field: String,

        #[arg(long)]
        value: String,
    },

    /// Show or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    Show,
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };
    let settings = config::load_or_default(&config_path)?;
    let form_or_default = |form: Option<String>| form.unwrap_or_else(|| settings.default_form.clone());

    let output = match cli.command {
        Commands::Forms => commands::format_form_list(&commands::list_forms()),
        Commands::Schema { form } => commands::schema(&form_or_default(form))?,
        Commands::Defaults { form } => commands::defaults(&form_or_default(form))?,
        Commands::Render {
            form,
            record,
            format,
        } => {
            let record = record.as_deref().map(commands::read_record).transpose()?;
            commands::render(
                &form_or_default(form),
                record.as_ref(),
                format.unwrap_or(settings.output),
            )?
        }
        Commands::Edit {
            form,
            record,
            field,
            value,
        } => {
            let record = record.as_deref().map(commands::read_record).transpose()?;
            let next = commands::edit(&form_or_default(form), record.as_ref(), &field, &value)?;
            serde_json::to_string_pretty(&next)?
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::show_config(&settings)?,
            ConfigAction::Init { force } => {
                if config_path.exists() && !force {
                    return Err(eyre::eyre!(
                        "config already exists at {} (use --force to overwrite)",
                        config_path.display()
                    ));
                }
                config::save_config(&config_path, &PhysioConfig::default())?;
                format!("wrote {}", config_path.display())
            }
        },
    };

    println!("{}", output.trim_end());
    Ok(())
}
