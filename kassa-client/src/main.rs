//! `kassa` - operator command line for the register

use std::str::FromStr;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use kassa_client::logger::init_logger;
use kassa_client::{
    AuthSession, ClientConfig, DisplayConfig, ListItemId, NetworkApi, Purchase, PurchaseId,
    Register,
};

#[derive(Debug, Parser)]
#[command(name = "kassa", version, about = "Point-of-sale register client")]
struct Cli {
    /// Backend host, overrides KASSA_API_HOST from the environment
    #[arg(long)]
    api_host: Option<String>,

    #[arg(long, env = "KASSA_LOG_LEVEL", default_value = "warn")]
    log_level: String,

    #[arg(long, env = "KASSA_USER", default_value = "operator")]
    user: String,

    /// Bearer token for checkout and delete
    #[arg(long, env = "KASSA_TOKEN", hide_env_values = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the product catalog
    Products,
    /// Show the most recent purchases
    Purchases {
        #[arg(long, default_value_t = 2)]
        limit: usize,
    },
    /// Build a cart and check it out
    Checkout {
        /// `<product_id>[x<count>][@<list_item>]`, repeatable
        #[arg(long = "item", required = true)]
        items: Vec<ItemSpec>,
    },
    /// Delete a purchase
    Delete { id: String },
}

/// One `--item` argument
#[derive(Debug, Clone, PartialEq, Eq)]
struct ItemSpec {
    product_id: i64,
    count: u32,
    list_item: Option<ListItemId>,
}

impl FromStr for ItemSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (head, list_item) = match s.split_once('@') {
            Some((_, "")) => return Err(format!("'{s}': empty list item after '@'")),
            Some((head, item)) => (head, Some(ListItemId::from_input(item))),
            None => (s, None),
        };
        let (id, count) = match head.split_once('x') {
            Some((id, count)) => (
                id,
                count
                    .parse::<u32>()
                    .map_err(|e| format!("'{s}': invalid count: {e}"))?,
            ),
            None => (head, 1),
        };
        let product_id = id
            .trim()
            .parse::<i64>()
            .map_err(|e| format!("'{s}': invalid product id: {e}"))?;

        Ok(Self {
            product_id,
            count,
            list_item,
        })
    }
}

fn print_purchase(purchase: &Purchase, display: &DisplayConfig) {
    println!(
        "{:<12} {:<18} {:>10.2} {}",
        purchase.id,
        purchase.created_at.format(&display.date_format),
        purchase.total_price,
        display.currency
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_logger(Some(&cli.log_level));

    let mut config = ClientConfig::from_env()?;
    if let Some(host) = cli.api_host {
        config.api_host = host;
    }
    let display = DisplayConfig::from_lookup(|key| std::env::var(key).ok());
    let version = &display.version;
    tracing::debug!(api_host = %config.api_host, version = %version, "Starting");

    let api = NetworkApi::new(&config)?;
    let needs_token = matches!(cli.command, Command::Checkout { .. } | Command::Delete { .. });
    let token = match cli.token {
        Some(token) => token,
        None if needs_token => bail!("a token is required (--token or KASSA_TOKEN)"),
        None => String::new(),
    };
    let mut register = Register::new(api, AuthSession::new(cli.user, token));

    match cli.command {
        Command::Products => {
            register.refresh_products().await.ok();
            for product in register.catalog().products() {
                let stock = product
                    .stock
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "-".into());
                println!(
                    "{:>5} {:<30} {:>10.2} {} stock {}",
                    product.id, product.name, product.price, display.currency, stock
                );
            }
        }
        Command::Purchases { limit } => {
            register.refresh_history().await.ok();
            for purchase in register.history().recent(limit) {
                print_purchase(purchase, &display);
            }
        }
        Command::Checkout { items } => {
            if register.refresh_products().await.is_ok() {
                for item in items {
                    register
                        .add_product(item.product_id, item.count, item.list_item)
                        .with_context(|| format!("cannot add product {}", item.product_id))?;
                }
                println!(
                    "cart: {} lines, {:.2} {}",
                    register.cart().len(),
                    register.cart().total_price(),
                    display.currency
                );
                if let Ok(purchase) = register.checkout().await {
                    print_purchase(&purchase, &display);
                }
            }
        }
        Command::Delete { id } => {
            let id = PurchaseId::from_input(&id);
            if register.delete_purchase(&id).await.is_ok() {
                println!("deleted {}", id);
            }
        }
    }

    if let Some(message) = register.acknowledge_error() {
        bail!(message);
    }
    Ok(())
}
