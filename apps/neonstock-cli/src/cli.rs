//! Command-line arguments.

use clap::{Args, Parser, Subcommand};
use neonstock_core::{Money, ProductId, StockStatus};
use std::path::PathBuf;

/// NeonStock inventory dashboard.
#[derive(Parser, Debug)]
#[command(name = "neonstock", version, about, long_about = None)]
pub struct BaseArgs {
    /// Path to the configuration file.
    #[arg(short, long, global = true, env = "NEONSTOCK_CONFIG")]
    pub config: Option<PathBuf>,

    /// SQLite database file (overrides config and environment).
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Print results and errors as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Seed the starter catalogue if the inventory has never been written
    Init,

    /// List products, optionally narrowed by search, category and status
    List {
        /// Case-insensitive match on name, SKU or category
        #[arg(short, long)]
        search: Option<String>,

        /// Exact category
        #[arg(long)]
        category: Option<String>,

        /// in-stock, low-stock or out-of-stock
        #[arg(long)]
        status: Option<StockStatus>,
    },

    /// Show one product
    Show { id: ProductId },

    /// Add a product
    Add(AddArgs),

    /// Edit fields of a product
    Edit(EditArgs),

    /// Set the quantity on hand
    SetQty {
        id: ProductId,
        #[arg(allow_hyphen_values = true)]
        quantity: i64,
    },

    /// Add to (or with a negative delta, take from) the quantity on hand
    Adjust {
        id: ProductId,
        #[arg(allow_hyphen_values = true)]
        delta: i64,
    },

    /// Delete a product
    Delete { id: ProductId },

    /// List categories
    Categories,

    /// Show inventory statistics
    Stats,

    /// Products, statistics and categories in one view
    Dashboard,

    /// Replace the inventory with the starter catalogue
    Reset,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,

    /// Stock keeping unit
    #[arg(long, conflicts_with = "generate_sku")]
    pub sku: Option<String>,

    /// Derive the SKU from the name and the clock
    #[arg(long)]
    pub generate_sku: bool,

    #[arg(long)]
    pub category: String,

    /// Shelf or bin location
    #[arg(long)]
    pub location: String,

    #[arg(long, allow_hyphen_values = true)]
    pub quantity: i64,

    /// Unit price, e.g. 12.99
    #[arg(long, allow_hyphen_values = true)]
    pub price: Money,

    /// Low-stock threshold
    #[arg(long, default_value_t = neonstock_core::DEFAULT_LOW_STOCK_THRESHOLD, allow_hyphen_values = true)]
    pub threshold: i64,

    #[arg(long)]
    pub image_url: Option<String>,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct EditArgs {
    pub id: ProductId,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub sku: Option<String>,

    #[arg(long)]
    pub category: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub quantity: Option<i64>,

    #[arg(long, allow_hyphen_values = true)]
    pub price: Option<Money>,

    #[arg(long, allow_hyphen_values = true)]
    pub threshold: Option<i64>,

    #[arg(long, conflicts_with = "clear_image")]
    pub image_url: Option<String>,

    /// Remove the product image
    #[arg(long)]
    pub clear_image: bool,

    /// Fail if the product's version is no longer this one
    #[arg(long)]
    pub expect_version: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        BaseArgs::command().debug_assert();
    }

    #[test]
    fn test_parse_list_filters() {
        let args = BaseArgs::try_parse_from([
            "neonstock", "--json", "list", "--search", "neon", "--status", "low-stock",
        ])
        .unwrap();
        assert!(args.json);
        assert_eq!(
            args.command,
            Commands::List {
                search: Some("neon".to_string()),
                category: None,
                status: Some(StockStatus::LowStock),
            }
        );
    }

    #[test]
    fn test_parse_add() {
        let args = BaseArgs::try_parse_from([
            "neonstock", "add", "--name", "Lamp", "--generate-sku", "--category", "Lighting",
            "--location", "A1", "--quantity", "3", "--price", "19.99",
        ])
        .unwrap();
        let Commands::Add(add) = args.command else {
            panic!("expected add");
        };
        assert_eq!(add.price, Money::from_cents(1999));
        assert_eq!(add.threshold, 10);
        assert!(add.generate_sku);
        assert_eq!(add.sku, None);
    }

    #[test]
    fn test_sku_and_generate_conflict() {
        let result = BaseArgs::try_parse_from([
            "neonstock", "add", "--name", "Lamp", "--sku", "L-1", "--generate-sku", "--category",
            "X", "--location", "A1", "--quantity", "1", "--price", "1",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_negative_delta_and_bad_id() {
        let args = BaseArgs::try_parse_from(["neonstock", "adjust", "4", "-3"]).unwrap();
        assert_eq!(
            args.command,
            Commands::Adjust {
                id: ProductId::new(4),
                delta: -3
            }
        );

        assert!(BaseArgs::try_parse_from(["neonstock", "show", "abc"]).is_err());
        assert!(BaseArgs::try_parse_from(["neonstock", "show", "0"]).is_err());
    }
}
