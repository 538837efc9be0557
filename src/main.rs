use clap::{Parser as ClapParser, Subcommand};
use plainfilter::cli::{self, CliError, TranslateOptions};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "plainfilter")]
#[command(about = "Plainfilter - translate friendly query descriptions into MongoDB-style filter documents")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate a query description into filter and projection documents
    Translate {
        /// The query description as JSON (reads from stdin if not provided)
        description: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,

        /// Print only the filter document
        #[arg(long, conflicts_with = "projection_only")]
        query_only: bool,

        /// Print only the projection document
        #[arg(long)]
        projection_only: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Translate {
            description,
            pretty,
            query_only,
            projection_only,
        } => run_translate(description, pretty, query_only, projection_only),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_translate(
    description: Option<String>,
    pretty: bool,
    query_only: bool,
    projection_only: bool,
) -> Result<(), CliError> {
    let description = match description {
        Some(s) => Some(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).map_err(CliError::Io)?;
            Some(buffer)
        }
        None => None,
    };

    let options = TranslateOptions { description };
    let result = cli::execute_translate(&options)?;

    let output = if query_only {
        result.query
    } else if projection_only {
        result.projection
    } else {
        serde_json::json!({ "query": result.query, "projection": result.projection })
    };

    let json = if pretty {
        serde_json::to_string_pretty(&output)
    } else {
        serde_json::to_string(&output)
    }
    .unwrap();
    println!("{}", json);

    Ok(())
}
