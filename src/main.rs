use anyhow::Context;
use cart_eligibility::eligibility::{CriteriaLoader, EligibilityEvaluator};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check a cart against a single criteria document
    Check {
        /// Path to the cart document (JSON or YAML)
        #[arg(short, long)]
        cart: PathBuf,

        /// Path to the criteria document (JSON or YAML)
        #[arg(short = 'r', long)]
        criteria: PathBuf,
    },
    /// List the rules of a rule book that a cart satisfies
    Rules {
        /// Path to the cart document (JSON or YAML)
        #[arg(short, long)]
        cart: PathBuf,

        /// Path to the rule book (JSON or YAML)
        #[arg(short, long)]
        rules: PathBuf,
    },
}

fn main() -> ExitCode {
    dotenv().ok();
    env_logger::init();

    let args = Args::parse();

    let outcome = run(args.command);
    if let Err(e) = &outcome {
        log::error!("{:#}", e);
        eprintln!("Error: {:#}", e);
    }
    ExitCode::from(exit_status(&outcome))
}

/// 0 when the cart matched, 1 when it did not, 2 when loading failed
fn exit_status(outcome: &anyhow::Result<bool>) -> u8 {
    match outcome {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(_) => 2,
    }
}

/// Returns whether the cart matched anything
fn run(command: Commands) -> anyhow::Result<bool> {
    let loader = CriteriaLoader::new();

    match command {
        Commands::Check { cart, criteria } => {
            let cart_doc = loader
                .load_cart(&cart)
                .with_context(|| format!("loading cart {}", cart.display()))?;
            let criteria_doc = loader
                .load_criteria(&criteria)
                .with_context(|| format!("loading criteria {}", criteria.display()))?;

            log::info!(
                "Checking {} against {} criteria",
                cart.display(),
                criteria_doc.len()
            );
            let eligible = EligibilityEvaluator::new().is_eligible(&cart_doc, &criteria_doc);
            println!("{}", if eligible { "eligible" } else { "not eligible" });
            Ok(eligible)
        }
        Commands::Rules { cart, rules } => {
            let cart_doc = loader
                .load_cart(&cart)
                .with_context(|| format!("loading cart {}", cart.display()))?;
            let book = loader
                .load_rule_book(&rules)
                .with_context(|| format!("loading rule book {}", rules.display()))?;

            log::info!("Checking {} against {} rules", cart.display(), book.len());
            let matched = book.eligible_rules(&cart_doc);
            for rule in &matched {
                println!("{}", rule.name);
            }
            Ok(!matched.is_empty())
        }
    }
}
