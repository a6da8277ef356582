use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "calc-cli")]
#[command(about = "Command line client for the calculator service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add two numbers
    Add {
        #[arg(allow_hyphen_values = true)]
        num1: String,
        #[arg(allow_hyphen_values = true)]
        num2: String,
    },
    /// Subtract the second number from the first
    Subtract {
        #[arg(allow_hyphen_values = true)]
        num1: String,
        #[arg(allow_hyphen_values = true)]
        num2: String,
    },
    /// Check service health
    Health,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    match cli.command {
        Commands::Add { num1, num2 } => {
            let res = client
                .post(format!("{base}/add/"))
                .form(&[("num1", num1), ("num2", num2)])
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Subtract { num1, num2 } => {
            let res = client
                .post(format!("{base}/subtract/"))
                .form(&[("num1", num1), ("num2", num2)])
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Health => {
            let res = client.get(format!("{base}/health")).send().await?;
            println!("{}: {}", res.status(), res.text().await?);
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let body: Value = res.json().await?;
    if !status.is_success() {
        eprintln!("Error {status}:");
    }
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}
