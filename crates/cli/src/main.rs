use std::{error::Error, fs::File, io::BufReader, path::PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use engine::{Expense, MoneyCents};

mod input;

#[derive(Parser, Debug)]
#[command(name = "collie_cli")]
#[command(about = "Settle shared trip expenses from a CSV or JSON file")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print who owes whom.
    Settle(SettleArgs),
    /// Print the net balance of every participant.
    Balances(InputArgs),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Csv,
    Json,
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Expense file.
    #[arg(long)]
    file: PathBuf,
    /// Input format (guessed from the file extension when omitted).
    #[arg(long, value_enum)]
    format: Option<Format>,
}

#[derive(Args, Debug)]
struct SettleArgs {
    #[command(flatten)]
    input: InputArgs,
    /// Also print net balances.
    #[arg(long)]
    balances: bool,
}

impl InputArgs {
    fn format(&self) -> Format {
        self.format.unwrap_or_else(|| {
            match self.file.extension().and_then(|ext| ext.to_str()) {
                Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
                _ => Format::Csv,
            }
        })
    }

    fn read(&self) -> Result<Vec<Expense>, Box<dyn Error + Send + Sync>> {
        let file = File::open(&self.file)
            .map_err(|err| format!("cannot open {}: {err}", self.file.display()))?;
        let reader = BufReader::new(file);
        match self.format() {
            Format::Csv => input::read_csv(reader),
            Format::Json => input::read_json(reader),
        }
    }
}

fn print_balances(expenses: &[Expense]) -> Result<(), Box<dyn Error + Send + Sync>> {
    for line in balance_lines(expenses)? {
        println!("{line}");
    }
    Ok(())
}

/// One `name: +$x.yy` line per participant, using the cents settlement pays.
fn balance_lines(expenses: &[Expense]) -> Result<Vec<String>, Box<dyn Error + Send + Sync>> {
    Ok(engine::settled_balances(expenses)?
        .into_iter()
        .map(|(participant, net)| {
            let sign = if net.is_positive() { "+" } else { "" };
            format!("{participant}: {sign}{net}")
        })
        .collect())
}

fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Settle(args) => {
            let expenses = args.input.read()?;
            let transfers = engine::calculate_settlements(&expenses)?;
            println!("{}", engine::format_settlement_summary(&transfers));

            let total = MoneyCents::from_decimal(engine::total_expenses(&expenses)?)?;
            println!("Total: {total} across {} expenses", expenses.len());

            if args.balances {
                println!();
                print_balances(&expenses)?;
            }
        }
        Command::Balances(args) => {
            let expenses = args.read()?;
            print_balances(&expenses)?;
        }
    }

    Ok(())
}
