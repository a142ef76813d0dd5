//! Interactive command-line front end for the card-page generator.

use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;

use menagerie::{
    DatasetIndex, DatasetSnapshot, DatasetStore, GeneratorConfig, MenuSelection, RawAnimal,
    generate,
};

#[derive(Debug, Parser)]
#[command(
    name = "menagerie",
    disable_help_subcommand = true,
    about = "Generate a static animal card page",
    long_about = "Look up animal records (or reuse a saved snapshot), pick a skin-type filter, \
and render the result into a static HTML page.",
    after_help = "Without --animal or --skin the program prompts interactively; empty filter \
input displays all animals and the last menu number exits without generating."
)]
struct Cli {
    /// Animal name to look up (prompted when omitted)
    #[arg(long)]
    animal: Option<String>,
    /// Skin-type filter to apply, skipping the interactive menu
    #[arg(long)]
    skin: Option<String>,
    #[arg(
        long,
        value_name = "PATH",
        default_value = "assets/animals_template.html",
        help = "HTML template to assemble into"
    )]
    template: PathBuf,
    #[arg(
        long,
        value_name = "PATH",
        default_value = "animals.html",
        help = "Destination path for the generated page"
    )]
    dest: PathBuf,
    #[arg(
        long,
        value_name = "PATH",
        default_value = "animals_data.json",
        help = "Dataset snapshot path (written after a fetch, read with --offline)"
    )]
    dataset: PathBuf,
    #[arg(long, help = "Generate from the saved snapshot instead of fetching")]
    offline: bool,
    #[arg(long, help = "Skip the post-write verification read")]
    no_verify: bool,
}

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = GeneratorConfig::default()
        .with_template(&cli.template)
        .with_dest(&cli.dest)
        .with_verify_after_save(!cli.no_verify);
    let store = DatasetStore::new(&cli.dataset);

    let animals = if cli.offline {
        store.load()?.animals
    } else {
        let query = match cli.animal {
            Some(ref animal) => animal.clone(),
            None => prompt_animal()?,
        };
        let animals = fetch_animals(&query)?;
        if !animals.is_empty() {
            store.save(&DatasetSnapshot::new(query, animals.clone()))?;
        }
        animals
    };

    if animals.is_empty() {
        let outcome = DatasetIndex::from_records(&[]);
        generate(&config, &outcome.index, "")?;
        println!("website created");
        return Ok(());
    }

    let outcome = DatasetIndex::from_records(&animals);
    if !outcome.skipped.is_empty() {
        eprintln!("Skipped {} malformed record(s).", outcome.skipped.len());
    }

    let skin = match cli.skin {
        Some(skin) => skin,
        None => match prompt_filter(&outcome.index)? {
            Some(skin) => skin,
            None => {
                println!("\nGoodbye!");
                return Ok(());
            }
        },
    };

    if skin.is_empty() {
        println!("\nCreating website without filter\n");
    } else {
        println!("\nCreating website with filter: {skin}\n");
    }

    generate(&config, &outcome.index, &skin)?;
    println!("File saved");
    Ok(())
}

#[cfg(feature = "remote")]
fn fetch_animals(query: &str) -> Result<Vec<RawAnimal>, Box<dyn Error>> {
    use menagerie::{AnimalSource, ApiSource, ApiSourceConfig, GeneratorError};
    use tracing::warn;

    let source = ApiSource::new(ApiSourceConfig::from_env()?)?;
    match source.fetch(query) {
        Ok(animals) => Ok(animals),
        // An unreachable source is handled like an empty lookup result.
        Err(GeneratorError::SourceUnavailable { source_id, reason }) => {
            warn!(%source_id, %reason, "lookup failed, continuing with no records");
            Ok(Vec::new())
        }
        Err(other) => Err(other.into()),
    }
}

#[cfg(not(feature = "remote"))]
fn fetch_animals(_query: &str) -> Result<Vec<RawAnimal>, Box<dyn Error>> {
    Err("built without the 'remote' feature; use --offline with a saved snapshot".into())
}

fn prompt_animal() -> Result<String, Box<dyn Error>> {
    loop {
        let animal = prompt("Enter the name of the animal you would like to search for: ")?;
        if animal.is_empty() {
            println!("can't be empty");
            continue;
        }
        return Ok(animal);
    }
}

/// Returns the chosen skin type (empty = no filter), or `None` on exit.
fn prompt_filter(index: &DatasetIndex) -> Result<Option<String>, Box<dyn Error>> {
    let menu = index.menu();
    println!("Welcome to My Animal Repository\n\nFilter options:");
    println!("{menu}");

    loop {
        let token = prompt(
            "\nEnter number of the filter you would like to use.\n\
             Leave this empty, if you want all animals displayed.\n\nFilter: ",
        )?;
        match menu.resolve(&token) {
            MenuSelection::All => return Ok(Some(String::new())),
            MenuSelection::Filter(skin) => return Ok(Some(skin)),
            MenuSelection::Exit => return Ok(None),
            MenuSelection::Invalid => {
                println!("\n{token} is not a valid option. Try again.");
            }
        }
    }
}

fn prompt(message: &str) -> Result<String, Box<dyn Error>> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
