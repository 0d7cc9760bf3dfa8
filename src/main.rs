use clap::{Parser, Subcommand};
use recipe_units::config::Config;
use recipe_units::format::{format_magnitude, format_quantity};
use recipe_units::quantity::parse_quantity;
use recipe_units::recipe;
use recipe_units::tokens::{QuantityTag, TokenConverter};
use recipe_units::units::{convert_quantity, ConversionOptions, UnitCategory, UnitQuery, UnitSystem};
use std::error::Error;
use std::io::Read;

#[derive(Parser)]
#[command(name = "recipe-units")]
#[command(about = "Recipe quantity parser, scaler and unit converter", long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite the {{ quantity }} tokens of a recipe text
    Render {
        /// Input file (default: stdin)
        file: Option<String>,

        /// Scale unsuppressed tokens by this factor
        #[arg(short, long, default_value_t = 1.0)]
        multiplier: f64,

        /// Convert to this measurement system (US or SI)
        #[arg(short, long)]
        system: Option<UnitSystem>,

        /// Wrap each rendered token in this markup tag
        #[arg(long)]
        tag: Option<String>,

        /// Tag attribute as key=value (repeatable)
        #[arg(long = "attr", value_parser = parse_attribute)]
        attributes: Vec<(String, String)>,
    },

    /// Parse a single quantity, e.g. "1 1/2 cups"
    Quantity {
        text: String,

        /// Convert to this measurement system (US or SI)
        #[arg(short, long)]
        system: Option<UnitSystem>,
    },

    /// Parse an ingredient block, one ingredient per line
    Ingredients {
        /// Input file (default: stdin)
        file: Option<String>,

        #[arg(short, long, default_value_t = 1.0)]
        multiplier: f64,

        #[arg(short, long)]
        system: Option<UnitSystem>,

        /// Print JSON records
        #[arg(long)]
        json: bool,
    },

    /// Parse an instruction block into numbered steps
    Instructions {
        /// Input file (default: stdin)
        file: Option<String>,

        /// Print JSON records
        #[arg(long)]
        json: bool,
    },

    /// List the known units
    Units {
        #[arg(short, long)]
        system: Option<UnitSystem>,

        /// volume or mass
        #[arg(long)]
        category: Option<UnitCategory>,

        /// Only units used as conversion targets
        #[arg(long)]
        convertible: bool,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = load_config(cli.config.as_deref()).and_then(|config| match cli.command {
        Commands::Render {
            file,
            multiplier,
            system,
            tag,
            attributes,
        } => render_text(&config, file.as_deref(), multiplier, system, tag, attributes),
        Commands::Quantity { text, system } => show_quantity(&config, &text, system),
        Commands::Ingredients {
            file,
            multiplier,
            system,
            json,
        } => show_ingredients(&config, file.as_deref(), multiplier, system, json),
        Commands::Instructions { file, json } => show_instructions(file.as_deref(), json),
        Commands::Units {
            system,
            category,
            convertible,
        } => list_units(&config, system, category, convertible),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn parse_attribute(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .filter(|(key, _)| !key.is_empty())
        .ok_or_else(|| format!("Invalid attribute '{}', expected key=value", s))
}

fn load_config(path: Option<&str>) -> Result<Config, Box<dyn Error>> {
    match path {
        Some(path) => Ok(Config::load_from_file(path)?),
        None => Ok(Config::empty()),
    }
}

fn read_input(file: Option<&str>) -> Result<String, Box<dyn Error>> {
    match file {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn conversion_options(config: &Config, system: Option<UnitSystem>) -> ConversionOptions {
    system
        .map(|system| config.conversion_options(system))
        .unwrap_or_default()
}

fn render_text(
    config: &Config,
    file: Option<&str>,
    multiplier: f64,
    system: Option<UnitSystem>,
    tag: Option<String>,
    attributes: Vec<(String, String)>,
) -> Result<(), Box<dyn Error>> {
    let table = config.unit_table()?;
    let text = read_input(file)?;

    // --tag replaces the configured markup; --attr adds to whichever is used
    let mut markup = match tag {
        Some(name) => Some(QuantityTag::new(name)),
        None => config.markup.clone(),
    };
    if !attributes.is_empty() {
        let base = markup.take().ok_or("--attr requires --tag or a [markup] config section")?;
        markup = Some(
            attributes
                .iter()
                .fold(base, |tag, (key, value)| tag.with_attribute(key, value.as_str())),
        );
    }

    let converter = TokenConverter::new(&table)
        .multiplier(multiplier)
        .to_system(system)
        .options(conversion_options(config, system))
        .tag(markup.as_ref());

    print!("{}", converter.convert(&text));
    Ok(())
}

fn show_quantity(
    config: &Config,
    text: &str,
    system: Option<UnitSystem>,
) -> Result<(), Box<dyn Error>> {
    let table = config.unit_table()?;
    let mut quantity = parse_quantity(text)?;

    if quantity.is_dimensionless() {
        println!("{}", format_magnitude(quantity.magnitude));
        return Ok(());
    }

    if let Some(system) = system {
        quantity = convert_quantity(&quantity, system, &table, &config.conversion_options(system))?;
    }

    let symbol = quantity.unit.as_deref().unwrap_or_default();
    let unit = table
        .resolve(symbol)
        .ok_or_else(|| format!("Unknown unit '{}'", symbol))?;
    println!("{}", format_quantity(&quantity, unit)?);
    Ok(())
}

fn show_ingredients(
    config: &Config,
    file: Option<&str>,
    multiplier: f64,
    system: Option<UnitSystem>,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let table = config.unit_table()?;
    let text = read_input(file)?;

    let ingredients: Vec<_> = recipe::parse_ingredients(&text)?
        .into_iter()
        .map(|ingredient| ingredient.fold_unknown_measurement(&table))
        .collect();

    // Unscaled, unconverted output stays in the editable line form
    if multiplier == 1.0 && system.is_none() {
        if json {
            println!("{}", serde_json::to_string_pretty(&ingredients)?);
        } else {
            println!("{}", recipe::format_ingredients(&ingredients)?);
        }
        return Ok(());
    }

    let scaled = recipe::scale_ingredients(
        &ingredients,
        multiplier,
        system,
        &table,
        &conversion_options(config, system),
    );
    if json {
        println!("{}", serde_json::to_string_pretty(&scaled)?);
    } else {
        for ingredient in &scaled {
            println!("{}", ingredient);
        }
    }
    Ok(())
}

fn show_instructions(file: Option<&str>, json: bool) -> Result<(), Box<dyn Error>> {
    let text = read_input(file)?;
    let steps = recipe::parse_instruction_steps(&text);

    if json {
        println!("{}", serde_json::to_string_pretty(&steps)?);
    } else {
        println!("{}", recipe::format_instructions(&steps));
    }
    Ok(())
}

fn list_units(
    config: &Config,
    system: Option<UnitSystem>,
    category: Option<UnitCategory>,
    convertible: bool,
) -> Result<(), Box<dyn Error>> {
    let table = config.unit_table()?;
    let units = table.query(&UnitQuery {
        system,
        category,
        convertible_only: convertible,
    });

    println!("Units ({}):", units.len());
    for unit in units {
        println!(
            "  - {} ({}) [{} {}] = {} {}{}",
            unit.plural_name,
            unit.short_name(),
            unit.system,
            unit.category,
            unit.factor,
            unit.category.base_unit(),
            if unit.include_in_conversions { "" } else { ", not converted" }
        );
    }
    Ok(())
}
