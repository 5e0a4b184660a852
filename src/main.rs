use clap::Parser;
use expense_tracker::db::connection::establish_connection;
use expense_tracker::db::repository::load_store;
use expense_tracker::db::storage::SqliteStore;
use expense_tracker::models::filter::Filter;
use expense_tracker::operations::add::add_transaction;
use expense_tracker::operations::import::import_transactions;
use expense_tracker::operations::list::{
    breakdown_lines, category_list_lines, summary_lines, transaction_lines,
};
use expense_tracker::operations::remove::remove_transaction;
use expense_tracker::operations::report::run_report;
use log::{error, info};
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "spend")]
#[command(version)]
#[command(about = "Track income and expenses from the terminal", long_about = None)]
struct Args {
    /// SQLite database holding the saved transactions
    #[arg(long, default_value = "expense_tracker.db")]
    db: PathBuf,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

pub enum UserCommands {
    Add,
    Remove,
    List(Filter),
    Summary,
    Breakdown,
    Categories,
    Import,
    Report,
    Help,
    Exit,
    Invalid(String),
    Unknown(String),
}

fn main() {
    let args = Args::parse();
    let default_level = match args.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let conn = match establish_connection(&args.db) {
        Ok(conn) => conn,
        Err(e) => {
            error!("Failed to open database {}: {}", args.db.display(), e);
            std::process::exit(1);
        }
    };
    let mut storage = SqliteStore::new(conn);

    // Exiting keeps an unreadable entry intact; saving would replace it.
    let mut store = match load_store(&storage) {
        Ok(store) => store,
        Err(e) => {
            error!("Failed to load transactions from {}: {}", args.db.display(), e);
            eprintln!("Saved transactions could not be read; nothing was changed. Exiting.");
            std::process::exit(1);
        }
    };
    info!("Using database {}", args.db.display());

    println!("Welcome to the expense tracker!");
    print_lines(&summary_lines(store.list()));

    loop {
        println!("Please enter a command (add, remove, list, summary, breakdown, categories, import, report, help, exit):");

        let input = match read_user_input() {
            Ok(Some(cmd)) => cmd,
            Ok(None) => {
                println!("Exiting the application.");
                break;
            }
            Err(e) => {
                println!("Error reading input: {}", e);
                continue;
            }
        };
        if input.is_empty() {
            continue;
        }

        match check_for_command(&input) {
            UserCommands::Add => {
                println!("Please enter transaction details in the format:\ndate(YYYY-MM-DD), description, amount, type(income/expense), category\nLeave the date empty for today. Quote a description that contains commas, e.g. 2025-11-11,\"Coffee, milk\",3.50,expense,Food");
                let Some(details) = read_details() else { continue };
                match add_transaction(&mut store, &mut storage, &details) {
                    Ok(transaction) => println!("Transaction {} added successfully!", transaction.id),
                    Err(e) => {
                        println!("Error adding transaction: {}", e);
                        println!("Please try again.");
                    }
                }
            }
            UserCommands::Remove => {
                println!("Provide the transaction ID to remove:");
                let Some(id) = read_details() else { continue };
                match remove_transaction(&mut store, &mut storage, &id) {
                    Ok(true) => println!("Transaction deleted!"),
                    Ok(false) => println!("No transaction with ID {}.", id),
                    Err(e) => println!("Error: {}", e),
                }
            }
            UserCommands::List(filter) => {
                println!("Transactions ({}):", filter);
                print_lines(&transaction_lines(store.list(), filter));
            }
            UserCommands::Summary => print_lines(&summary_lines(store.list())),
            UserCommands::Breakdown => print_lines(&breakdown_lines(store.list())),
            UserCommands::Categories => print_lines(&category_list_lines()),
            UserCommands::Import => {
                println!("Please enter the CSV file path to import from:");
                let Some(path) = read_details() else { continue };
                match import_transactions(&mut store, &mut storage, &path) {
                    Ok(count) => println!("Successfully imported {} transactions.", count),
                    Err(e) => println!("Error importing transactions: {}", e),
                }
            }
            UserCommands::Report => {
                if let Err(e) = run_report(store.list()) {
                    println!("Error showing report: {}", e);
                }
            }
            UserCommands::Help => print_help(),
            UserCommands::Invalid(message) => println!("{}", message),
            UserCommands::Unknown(command) => {
                println!("Unknown command '{}'.", command);
                print_help();
            }
            UserCommands::Exit => {
                println!("Exiting the application.");
                break;
            }
        }
    }
}

// `None` once stdin is closed.
fn read_user_input() -> Result<Option<String>, String> {
    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|_| "Failed to read line".to_string())?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

fn read_details() -> Option<String> {
    match read_user_input() {
        Ok(details) => details,
        Err(e) => {
            println!("Error reading input: {}", e);
            None
        }
    }
}

fn check_for_command(input: &str) -> UserCommands {
    let mut parts = input.split_whitespace();
    let command = parts.next().unwrap_or("");
    match command {
        "add" => UserCommands::Add,
        "remove" | "delete" => UserCommands::Remove,
        "list" => match parts.next().unwrap_or("all").parse::<Filter>() {
            Ok(filter) => UserCommands::List(filter),
            Err(e) => UserCommands::Invalid(e),
        },
        "summary" => UserCommands::Summary,
        "breakdown" => UserCommands::Breakdown,
        "categories" => UserCommands::Categories,
        "import" => UserCommands::Import,
        "report" => UserCommands::Report,
        "help" => UserCommands::Help,
        "exit" | "quit" => UserCommands::Exit,
        other => UserCommands::Unknown(other.to_string()),
    }
}

fn print_help() {
    println!("  add                      record an income or expense");
    println!("  remove                   delete a transaction by ID");
    println!("  list [all|income|expense] show transactions, newest first");
    println!("  summary                  show balance, income and expense totals");
    println!("  breakdown                show expenses grouped by category");
    println!("  categories               show the categories for each type");
    println!("  import                   add transactions from a CSV file");
    println!("  report                   full-screen balance and category view");
    println!("  exit                     quit");
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}
