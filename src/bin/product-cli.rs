use clap::{Args, Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "product-cli")]
#[command(about = "Command-line client for the product service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all products
    List,
    /// Show one product
    Get { id: i64 },
    /// Create a product
    Add(ProductArgs),
    /// Replace every field of a product
    Update {
        id: i64,
        #[command(flatten)]
        product: ProductArgs,
    },
    /// Delete a product
    Delete { id: i64 },
}

#[derive(Args)]
struct ProductArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    description: String,
    #[arg(long)]
    price: f64,
}

impl ProductArgs {
    fn to_json(&self) -> Value {
        json!({
            "name": self.name,
            "description": self.description,
            "price": self.price,
        })
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = format!("{}/product", cli.url.trim_end_matches('/'));

    let res = match cli.command {
        Commands::List => client.get(&base).send().await?,
        Commands::Get { id } => client.get(format!("{}/{}", base, id)).send().await?,
        Commands::Add(product) => client.post(&base).json(&product.to_json()).send().await?,
        Commands::Update { id, product } => {
            client
                .put(format!("{}/{}", base, id))
                .json(&product.to_json())
                .send()
                .await?
        }
        Commands::Delete { id } => client.delete(format!("{}/{}", base, id)).send().await?,
    };

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    if !status.is_success() {
        eprintln!("Error: product API returned status {}", status);
    } else {
        println!("Status: {}", status);
    }

    if text.is_empty() {
        return Ok(());
    }
    match serde_json::from_str::<Value>(&text) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{}", text),
    }
    Ok(())
}
