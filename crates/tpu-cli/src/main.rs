mod selection;

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use clap::{Parser, Subcommand};
use serde_json::json;
use tpu_core::{AppConfig, FitmentSelection, ProductRecord};
use tpu_fitment::{FileStorage, FitmentStore};
use tracing_subscriber::EnvFilter;

use crate::selection::{SelectionArgs, SelectionCommands};

#[derive(Debug, Parser)]
#[command(name = "tpu-cli")]
#[command(about = "Trailer-part fitment tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse fitment attributes from a product name and SKU
    Parse {
        name: String,
        #[arg(long, default_value = "")]
        sku: String,
    },
    /// Classify fitment confidence for a product JSON file (`-` for stdin)
    Classify { product: String },
    /// Product-page details: bundles, kit contents, options, stock, shipping
    Details {
        product: String,

        /// Chosen option value as `ID=VALUE`; repeatable
        #[arg(long = "option", value_parser = parse_option_selection)]
        selections: Vec<(String, String)>,
    },
    /// Build a catalog-filter URL from a fitment selection
    FilterUrl {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Use the saved selection, overridden by any flags given
        #[arg(long)]
        saved: bool,

        /// Base path; defaults to TPU_BASE_URL
        #[arg(long)]
        base: Option<String>,

        /// Use the matching-kits path as the base
        #[arg(long, conflicts_with = "base")]
        matching_kits: bool,
    },
    /// List quick-path chips relevant to a category
    Chips {
        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        base: Option<String>,
    },
    /// Show, save, or clear the saved fitment selection
    Selection {
        #[command(subcommand)]
        command: SelectionCommands,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = tpu_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(env = %config.env, storage = ?config.storage_path, "loaded config");

    let cli = Cli::parse();
    let output = run(cli.command, &config)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn open_store(config: &AppConfig) -> FitmentStore<FileStorage> {
    FitmentStore::from_option(config.storage_path.as_ref().map(FileStorage::new))
}

fn read_product(source: &str) -> anyhow::Result<ProductRecord> {
    let content = if source == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(Path::new(source))
            .map_err(|e| anyhow::anyhow!("failed to read product file {source}: {e}"))?
    };
    Ok(serde_json::from_str(&content)?)
}

fn parse_option_selection(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(id, value)| (id.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected ID=VALUE, got `{raw}`"))
}

fn run(command: Commands, config: &AppConfig) -> anyhow::Result<serde_json::Value> {
    let value = match command {
        Commands::Parse { name, sku } => {
            serde_json::to_value(tpu_fitment::parse_fitment_from_product(&name, &sku))?
        }
        Commands::Classify { product } => {
            let product = read_product(&product)?;
            let assessment = tpu_fitment::determine_fitment_state(&product);
            let display = tpu_fitment::fitment_state_config(assessment.state);
            json!({ "assessment": assessment, "display": display })
        }
        Commands::Details {
            product,
            selections,
        } => {
            let product = read_product(&product)?;
            let bundle = tpu_fitment::bundle_recommendations(&product);
            let selections: HashMap<String, String> = selections.into_iter().collect();
            let options: Vec<_> = product
                .options
                .iter()
                .map(|option| {
                    json!({
                        "id": option.id,
                        "displayName": option.display_name,
                        "renderType": tpu_fitment::option_render_type(option),
                        "required": option.is_required(),
                        "values": option
                            .values
                            .iter()
                            .map(|value| tpu_fitment::format_option_value(Some(value)))
                            .collect::<Vec<_>>(),
                    })
                })
                .collect();
            json!({
                "options": options,
                "requiredOptionsSelected":
                    tpu_fitment::are_required_options_selected(&product.options, &selections),
                "shipping": tpu_fitment::shipping_display(&product),
                "bundle": &bundle,
                "bundleTotal": tpu_fitment::bundle_total(bundle.addons),
                "kitIncludes": tpu_fitment::kit_includes(),
                "whatsIncluded": tpu_fitment::whats_included(&product),
                "lighting": tpu_fitment::is_lighting_product(&product),
                "stock": tpu_fitment::stock_status(&product),
                "contactUrl": tpu_fitment::build_contact_url(&product, &config.contact_path),
            })
        }
        Commands::FilterUrl {
            selection,
            saved,
            base,
            matching_kits,
        } => {
            let mut current = if saved {
                open_store(config).saved_fitment()?
            } else {
                FitmentSelection::default()
            };
            selection.apply_to(&mut current);

            let url = if matching_kits {
                tpu_fitment::build_matching_kits_url(&current, &config.matching_kits_path)
            } else {
                let base = base.as_deref().unwrap_or(&config.base_url);
                tpu_fitment::build_filter_url(&current, base)
            };
            json!({ "selection": current, "url": url })
        }
        Commands::Chips { category, base } => {
            let base = base.as_deref().unwrap_or(&config.base_url);
            let chips: Vec<_> = tpu_fitment::relevant_chips(category.as_deref())
                .into_iter()
                .map(|chip| {
                    json!({
                        "chip": chip,
                        "url": tpu_fitment::build_quick_path_url(chip, base),
                    })
                })
                .collect();
            serde_json::Value::Array(chips)
        }
        Commands::Selection { command } => selection::run(command, &open_store(config))?,
    };
    Ok(value)
}
