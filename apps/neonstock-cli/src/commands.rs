//! # Command Handlers
//!
//! Each subcommand validates its input with `neonstock-core`, calls the
//! store and returns an [`Output`] for the renderer.
//!
//! ## Command → Store Mapping
//! ```text
//! ┌──────────────┬───────────────────────────────────────────────────────┐
//! │ init         │ initialize                                            │
//! │ list         │ search(filter)                                        │
//! │ show         │ get_by_id                                             │
//! │ add          │ collect_errors → create                               │
//! │ edit         │ validate_patch → update / update_checked              │
//! │ set-qty      │ validate_quantity → update_quantity                   │
//! │ adjust       │ get_by_id → clamp 0..=999 → update_quantity           │
//! │ delete       │ delete                                                │
//! │ categories   │ list_categories                                       │
//! │ stats        │ compute_stats                                         │
//! │ dashboard    │ list + compute_stats + list_categories (concurrent)   │
//! │ reset        │ reset_to_seed                                         │
//! └──────────────┴───────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use neonstock_core::sku::generate_sku;
use neonstock_core::validation::{
    clamp_quantity, collect_errors, validate_patch, validate_quantity, validate_search_query,
};
use neonstock_core::{InventoryStats, NewProduct, Product, ProductFilter, ProductPatch};
use neonstock_store::{InventoryStore, SlotStorage};
use tracing::{debug, info};
use uuid::Uuid;

use crate::cli::{AddArgs, Commands, EditArgs};
use crate::error::CliError;

/// Result of a command, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Products(Vec<Product>),
    Product(Product),
    Categories(Vec<String>),
    Stats(InventoryStats),
    Dashboard {
        products: Vec<Product>,
        stats: InventoryStats,
        categories: Vec<String>,
    },
    Message(String),
}

/// Runs one command against the store.
///
/// The inventory is seeded first if it has never been written, so every
/// command sees the starter catalogue on a fresh database.
pub async fn execute<S: SlotStorage>(
    store: &InventoryStore<S>,
    command: Commands,
) -> Result<Output, CliError> {
    let seeded = store.initialize().await?;
    debug!(?command, seeded, "Executing command");

    match command {
        Commands::Init => Ok(Output::Message(if seeded {
            "Inventory seeded with the starter catalogue".to_string()
        } else {
            "Inventory already initialized".to_string()
        })),

        Commands::List {
            search,
            category,
            status,
        } => {
            let mut filter = ProductFilter::all();
            if let Some(term) = search {
                filter = filter.with_search(validate_search_query(&term)?);
            }
            if let Some(category) = category {
                filter = filter.with_category(category);
            }
            if let Some(status) = status {
                filter = filter.with_status(status);
            }
            Ok(Output::Products(store.search(&filter).await?))
        }

        Commands::Show { id } => Ok(Output::Product(store.get_by_id(id).await?)),

        Commands::Add(args) => {
            let nonce = Uuid::new_v4().as_bytes()[0];
            let form = new_product_from(args, Utc::now().timestamp_millis(), nonce);

            let errors = collect_errors(&form);
            if !errors.is_empty() {
                return Err(CliError::from_field_errors(&errors));
            }

            let product = store.create(form).await?;
            info!(id = %product.id, sku = %product.sku, "Product added");
            Ok(Output::Product(product))
        }

        Commands::Edit(args) => {
            let id = args.id;
            let expected_version = args.expect_version;
            let patch = patch_from(args);

            if patch.is_empty() {
                return Err(CliError::validation("Nothing to update"));
            }
            validate_patch(&patch)?;

            let product = match expected_version {
                Some(version) => store.update_checked(id, version, patch).await?,
                None => store.update(id, patch).await?,
            };
            Ok(Output::Product(product))
        }

        Commands::SetQty { id, quantity } => {
            validate_quantity(quantity)?;
            Ok(Output::Product(store.update_quantity(id, quantity).await?))
        }

        Commands::Adjust { id, delta } => {
            let current = store.get_by_id(id).await?;
            let quantity = clamp_quantity(current.quantity.saturating_add(delta));
            Ok(Output::Product(store.update_quantity(id, quantity).await?))
        }

        Commands::Delete { id } => {
            store.delete(id).await?;
            info!(id = %id, "Product deleted");
            Ok(Output::Message(format!("Deleted product {}", id)))
        }

        Commands::Categories => Ok(Output::Categories(store.list_categories().await?)),

        Commands::Stats => Ok(Output::Stats(store.compute_stats().await?)),

        Commands::Dashboard => {
            let (products, stats, categories) = tokio::try_join!(
                store.list(),
                store.compute_stats(),
                store.list_categories()
            )?;
            Ok(Output::Dashboard {
                products,
                stats,
                categories,
            })
        }

        Commands::Reset => {
            let count = store.reset_to_seed().await?;
            Ok(Output::Message(format!(
                "Inventory reset to the starter catalogue ({} products)",
                count
            )))
        }
    }
}

/// Builds the create form, generating the SKU when asked to.
fn new_product_from(args: AddArgs, epoch_millis: i64, nonce: u8) -> NewProduct {
    let sku = if args.generate_sku {
        generate_sku(&args.name, epoch_millis, nonce)
    } else {
        args.sku.unwrap_or_default()
    };

    NewProduct {
        name: args.name,
        sku,
        category: args.category,
        quantity: args.quantity,
        price_cents: args.price.cents(),
        low_stock_threshold: args.threshold,
        image_url: args.image_url,
        location: Some(args.location),
    }
}

fn patch_from(args: EditArgs) -> ProductPatch {
    let image_url = if args.clear_image {
        Some(None)
    } else {
        args.image_url.map(Some)
    };

    ProductPatch {
        name: args.name,
        sku: args.sku,
        category: args.category,
        quantity: args.quantity,
        price_cents: args.price.map(|price| price.cents()),
        low_stock_threshold: args.threshold,
        image_url,
        location: args.location.map(Some),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
