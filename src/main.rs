use clap::{Args, Parser as ClapParser, Subcommand};
use sieve_lang::cli::{self, CheckOptions, CheckResult, CliError, Target};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "sieve")]
#[command(about = "Sieve - parse, evaluate, and translate predicate expressions")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Universe {
    /// Comma-separated variable names the expression may reference
    #[arg(long = "vars", value_delimiter = ',')]
    variables: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate and evaluate an expression
    Check {
        /// The expression to evaluate
        expression: String,

        #[command(flatten)]
        universe: Universe,

        /// JSON object of variable bindings (reads from stdin if not provided)
        #[arg(short, long)]
        bindings: Option<String>,

        /// Only validate syntax, don't evaluate
        #[arg(long)]
        syntax_only: bool,
    },

    /// Translate an expression into a SQL WHERE clause fragment
    Sql {
        expression: String,

        #[command(flatten)]
        universe: Universe,
    },

    /// Translate an expression into Python
    Host {
        expression: String,

        #[command(flatten)]
        universe: Universe,
    },

    /// Print the parsed expression tree as JSON
    Ast {
        expression: String,

        #[command(flatten)]
        universe: Universe,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Suggest variable names completing the last word of a partial expression
    Suggest {
        partial: String,

        #[command(flatten)]
        universe: Universe,
    },

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'sieve docs' to list categories)
        category: String,
    },
}

fn main() {
    // Initialize logging from RUST_LOG environment variable
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            expression,
            universe,
            bindings,
            syntax_only,
        } => run_check(expression, universe.variables, bindings, syntax_only),
        Commands::Sql {
            expression,
            universe,
        } => run_translate(&expression, &universe.variables, Target::Sql),
        Commands::Host {
            expression,
            universe,
        } => run_translate(&expression, &universe.variables, Target::Host),
        Commands::Ast {
            expression,
            universe,
            pretty,
        } => run_translate(&expression, &universe.variables, Target::Ast { pretty }),
        Commands::Suggest { partial, universe } => {
            for name in cli::execute_suggest(&partial, &universe.variables) {
                println!("{}", name);
            }
            Ok(())
        }
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { category } => cli::get_doc_category(&category).map(|content| {
            print!("{}", content);
        }),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_check(
    expression: String,
    variables: Vec<String>,
    bindings: Option<String>,
    syntax_only: bool,
) -> Result<(), CliError> {
    let bindings = match bindings {
        Some(s) => Some(s),
        None if !syntax_only && !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Some(buffer).filter(|b| !b.trim().is_empty())
        }
        None => None,
    };

    let options = CheckOptions {
        expression,
        variables,
        bindings,
        syntax_only,
    };

    match cli::execute_check(&options)? {
        CheckResult::SyntaxValid => println!("Syntax is valid"),
        CheckResult::Evaluated(value) => println!("{}", value),
    }
    Ok(())
}

fn run_translate(expression: &str, variables: &[String], target: Target) -> Result<(), CliError> {
    println!("{}", cli::execute_translate(expression, variables, target)?);
    Ok(())
}
