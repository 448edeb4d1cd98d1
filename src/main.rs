use clap::{Parser, Subcommand};
use pricebook::client::api::ApiClient;
use pricebook::compare;
use pricebook::config::Config;
use pricebook::form::line::split_values;
use pricebook::form::modes::{self, ModeKind};
use pricebook::form::suggest;
use pricebook::form::validation::{check_duplicate_shop, validate_line};
use pricebook::payload::builder::build_body;

#[derive(Parser)]
#[command(name = "pricebook")]
#[command(about = "Record grocery prices and compare them by unit price", long_about = None)]
struct Cli {
    /// Config file (defaults are used when it does not exist)
    #[arg(short, long, default_value = "pricebook.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a price entry: "<product> <price> [volume] <unit> <shop> [date] [notes]"
    Entry {
        /// Free-text entry line, e.g. "banana 42 500 g tesco"
        line: String,

        /// Print the assembled request body instead of sending it
        #[arg(long)]
        dry_run: bool,
    },

    /// Register a product: "<name> [notes] [tags]"
    Product {
        line: String,

        #[arg(long)]
        dry_run: bool,
    },

    /// Register a shop: "<name> [notes]"
    Shop {
        line: String,

        #[arg(long)]
        dry_run: bool,
    },

    /// Rank a product's recorded entries by unit price
    Compare {
        /// Product name to look up
        name: String,
    },

    /// Delete a price entry by id
    DeleteEntry { id: String },

    /// Complete a partial field value from its suggestion list
    Suggest {
        /// Mode key (product-entry, product, shop)
        mode: String,

        /// Field label, e.g. "Shop Name"
        field: String,

        /// Typed input to complete
        input: String,
    },

    /// List entry modes and their field layouts
    Modes,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let config = load_config(&cli.config);

    let result = match cli.command {
        Commands::Entry { line, dry_run } => submit_line(&config, "product-entry", &line, dry_run),
        Commands::Product { line, dry_run } => submit_line(&config, "product", &line, dry_run),
        Commands::Shop { line, dry_run } => submit_line(&config, "shop", &line, dry_run),
        Commands::Compare { name } => compare_entries(&config, &name),
        Commands::DeleteEntry { id } => delete_entry(&config, &id),
        Commands::Suggest { mode, field, input } => suggest_value(&config, &mode, &field, &input),
        Commands::Modes => list_modes(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(path: &str) -> Config {
    if std::path::Path::new(path).exists() {
        match Config::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: failed to load {}: {}", path, e);
                std::process::exit(1);
            }
        }
    } else {
        Config::empty()
    }
}

fn submit_line(
    config: &Config,
    mode_key: &str,
    text: &str,
    dry_run: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mode = modes::find_mode(mode_key).ok_or_else(|| format!("unknown mode: {}", mode_key))?;
    let values = split_values(text, mode.fields.len());

    let mut validation = validate_line(mode, &values);

    let client = ApiClient::new(&config.base_url);

    // Duplicate detection only applies to shops, and only when the API is
    // actually going to be hit.
    if mode.kind == ModeKind::Shop && !dry_run {
        if let Ok(existing) = client.filter_shops(&values[0]) {
            let names: Vec<String> = existing.into_iter().map(|shop| shop.name).collect();
            check_duplicate_shop(&values[0], &names, &mut validation);
        }
    }

    if !validation.is_valid() {
        return Err(format!("{}", validation).into());
    }
    if validation.has_issues() {
        eprintln!("{}", validation);
    }

    let body = build_body(mode, &values);

    if dry_run {
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    let response = match mode.kind {
        ModeKind::ProductEntry => client.create_entry(&body)?,
        ModeKind::Product => client.create_product(&body)?,
        ModeKind::Shop => client.create_shop(&body)?,
    };
    println!("{} created: {}", mode.label, response);
    Ok(())
}

fn compare_entries(config: &Config, name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let client = ApiClient::new(&config.base_url);
    let ranked = compare::compare_product(&client, name)?;

    if ranked.is_empty() {
        println!("No entries recorded for {}", name);
        return Ok(());
    }

    println!("Entries for {} ({}):", name, ranked.len());
    for item in &ranked {
        let entry = &item.entry;
        let shop = entry.shop_name.as_deref().unwrap_or("-");
        let volume = entry
            .product_volume
            .map(|v| format!("{} {}", v, entry.unit))
            .unwrap_or_else(|| format!("per {}", entry.unit));
        println!(
            "  {:>10.2}/{}  {}  (price {}, {}) [{}]",
            item.unit_price, entry.unit, shop, entry.price, volume, entry.id
        );
    }
    Ok(())
}

fn delete_entry(config: &Config, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let client = ApiClient::new(&config.base_url);
    client.delete_entry(id)?;
    println!("Deleted entry {}", id);
    Ok(())
}

fn suggest_value(
    config: &Config,
    mode_key: &str,
    field_label: &str,
    input: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mode = modes::find_mode(mode_key).ok_or_else(|| format!("unknown mode: {}", mode_key))?;
    let field = mode
        .fields
        .iter()
        .find(|f| f.label.eq_ignore_ascii_case(field_label))
        .ok_or_else(|| format!("unknown field for {}: {}", mode.label, field_label))?;

    let candidates = suggest::candidates(field, config.extras_for(field.label));
    match suggest::best_match(&candidates, input) {
        Some(hit) => println!("{}", hit),
        None => println!("(no match)"),
    }
    Ok(())
}

fn list_modes() -> Result<(), Box<dyn std::error::Error>> {
    for mode in modes::MODES {
        println!("{} ({})", mode.label, mode.key);
        for field in mode.fields {
            let marker = if field.required { "*" } else { " " };
            if field.suggestions.is_empty() {
                println!("  {} {}", marker, field.label);
            } else {
                println!(
                    "  {} {} (e.g. {})",
                    marker,
                    field.label,
                    field.suggestions.join(", ")
                );
            }
        }
        println!();
    }
    Ok(())
}
