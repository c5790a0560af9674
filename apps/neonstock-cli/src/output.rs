//! Rendering of command results as text tables or JSON.

use neonstock_core::{InventoryStats, Product, StockStatus};
use serde::Serialize;
use std::io::{self, Write};

use crate::commands::Output;
use crate::error::CliError;

/// A product plus its derived status, for JSON output.
#[derive(Serialize)]
struct ProductView<'a> {
    #[serde(flatten)]
    product: &'a Product,
    status: StockStatus,
}

impl<'a> From<&'a Product> for ProductView<'a> {
    fn from(product: &'a Product) -> Self {
        ProductView {
            product,
            status: product.status(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DashboardView<'a> {
    products: Vec<ProductView<'a>>,
    stats: &'a InventoryStats,
    categories: &'a [String],
}

/// Writes outputs in the format chosen on the command line.
#[derive(Debug, Clone)]
pub struct Renderer {
    pub json: bool,
    pub currency_symbol: String,
}

impl Renderer {
    pub fn new(json: bool, currency_symbol: impl Into<String>) -> Self {
        Renderer {
            json,
            currency_symbol: currency_symbol.into(),
        }
    }

    pub fn render(&self, output: &Output, out: &mut impl Write) -> io::Result<()> {
        if self.json {
            self.render_json(output, out)
        } else {
            self.render_text(output, out)
        }
    }

    /// Writes a failed command's error.
    pub fn render_error(&self, err: &CliError, out: &mut impl Write) -> io::Result<()> {
        if self.json {
            serde_json::to_writer_pretty(&mut *out, err)?;
            writeln!(out)
        } else {
            writeln!(out, "error[{}]: {}", err.code.as_str(), err.message)
        }
    }

    // =========================================================================
    // JSON
    // =========================================================================

    fn render_json(&self, output: &Output, out: &mut impl Write) -> io::Result<()> {
        match output {
            Output::Products(products) => {
                let views: Vec<ProductView> = products.iter().map(ProductView::from).collect();
                serde_json::to_writer_pretty(&mut *out, &views)?;
            }
            Output::Product(product) => {
                serde_json::to_writer_pretty(&mut *out, &ProductView::from(product))?;
            }
            Output::Categories(categories) => serde_json::to_writer_pretty(&mut *out, categories)?,
            Output::Stats(stats) => serde_json::to_writer_pretty(&mut *out, stats)?,
            Output::Dashboard {
                products,
                stats,
                categories,
            } => {
                let view = DashboardView {
                    products: products.iter().map(ProductView::from).collect(),
                    stats,
                    categories,
                };
                serde_json::to_writer_pretty(&mut *out, &view)?;
            }
            Output::Message(message) => {
                serde_json::to_writer_pretty(&mut *out, &serde_json::json!({ "message": message }))?;
            }
        }
        writeln!(out)
    }

    // =========================================================================
    // Text
    // =========================================================================

    fn render_text(&self, output: &Output, out: &mut impl Write) -> io::Result<()> {
        match output {
            Output::Products(products) => self.product_table(products, out),
            Output::Product(product) => self.product_detail(product, out),
            Output::Categories(categories) => {
                if categories.is_empty() {
                    return writeln!(out, "No categories");
                }
                for category in categories {
                    writeln!(out, "{}", category)?;
                }
                Ok(())
            }
            Output::Stats(stats) => self.stats(stats, out),
            Output::Dashboard {
                products,
                stats,
                categories,
            } => {
                self.stats(stats, out)?;
                writeln!(out, "Category list:   {}", categories.join(", "))?;
                writeln!(out)?;
                self.product_table(products, out)
            }
            Output::Message(message) => writeln!(out, "{}", message),
        }
    }

    fn money(&self, cents: i64) -> String {
        neonstock_core::Money::from_cents(cents).format_with(&self.currency_symbol)
    }

    fn stats(&self, stats: &InventoryStats, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "Total products:  {}", stats.total_products)?;
        writeln!(out, "Total value:     {}", self.money(stats.total_value.cents()))?;
        writeln!(out, "Low stock:       {}", stats.low_stock_count)?;
        writeln!(out, "Categories:      {}", stats.category_count)
    }

    fn product_detail(&self, product: &Product, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "Id:              {}", product.id)?;
        writeln!(out, "Name:            {}", product.name)?;
        writeln!(out, "SKU:             {}", product.sku)?;
        writeln!(out, "Category:        {}", product.category)?;
        writeln!(out, "Quantity:        {}", product.quantity)?;
        writeln!(out, "Price:           {}", self.money(product.price_cents))?;
        writeln!(out, "Stock value:     {}", self.money(product.stock_value().cents()))?;
        writeln!(out, "Low stock at:    {}", product.low_stock_threshold)?;
        writeln!(out, "Status:          {}", product.status())?;
        writeln!(out, "Location:        {}", product.location.as_deref().unwrap_or("-"))?;
        if let Some(url) = &product.image_url {
            writeln!(out, "Image:           {}", url)?;
        }
        writeln!(out, "Created:         {}", product.created_at.to_rfc3339())?;
        writeln!(out, "Updated:         {}", product.updated_at.to_rfc3339())?;
        writeln!(out, "Version:         {}", product.version)
    }

    fn product_table(&self, products: &[Product], out: &mut impl Write) -> io::Result<()> {
        if products.is_empty() {
            return writeln!(out, "No products found");
        }

        let header = ["ID", "NAME", "SKU", "CATEGORY", "QTY", "PRICE", "STATUS", "LOCATION"];
        let rows: Vec<[String; 8]> = products
            .iter()
            .map(|p| {
                [
                    p.id.to_string(),
                    p.name.clone(),
                    p.sku.clone(),
                    p.category.clone(),
                    p.quantity.to_string(),
                    self.money(p.price_cents),
                    p.status().to_string(),
                    p.location.clone().unwrap_or_else(|| "-".to_string()),
                ]
            })
            .collect();

        let mut widths = header.map(|h| h.chars().count());
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        write_row(out, header.iter().copied(), &widths)?;
        for row in &rows {
            write_row(out, row.iter().map(String::as_str), &widths)?;
        }
        Ok(())
    }
}

fn write_row<'a>(
    out: &mut impl Write,
    cells: impl Iterator<Item = &'a str>,
    widths: &[usize],
) -> io::Result<()> {
    let line = cells
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(out, "{}", line.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use neonstock_core::Money;
    use neonstock_store::seed::seed_products;

    fn render(renderer: &Renderer, output: &Output) -> String {
        let mut buf = Vec::new();
        renderer.render(output, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_table_columns_align() {
        let text = render(&Renderer::new(false, "$"), &Output::Products(seed_products()));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), seed_products().len() + 1);
        assert!(lines[0].starts_with("ID"));
        let name_col = lines[0].find("NAME").unwrap();
        assert_eq!(&lines[1][name_col..name_col + 4], "Neon");
        assert!(lines[1].contains("$29.99"));
    }

    #[test]
    fn test_empty_table() {
        let text = render(&Renderer::new(false, "$"), &Output::Products(Vec::new()));
        assert_eq!(text, "No products found\n");
    }

    #[test]
    fn test_json_product_has_status() {
        let product = seed_products().remove(3);
        let text = render(&Renderer::new(true, "$"), &Output::Product(product));
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["Id"], 4);
        assert_eq!(json["status"], "out-of-stock");
        assert_eq!(json["priceCents"], 3499);
    }

    #[test]
    fn test_stats_use_currency_symbol() {
        let stats = InventoryStats {
            total_products: 2,
            total_value: Money::from_cents(123_456),
            low_stock_count: 1,
            category_count: 1,
        };
        let text = render(&Renderer::new(false, "€"), &Output::Stats(stats));
        assert!(text.contains("Total value:     €1234.56"));
    }

    #[test]
    fn test_error_rendering() {
        let err = CliError::validation("SKU is required");
        let mut buf = Vec::new();
        Renderer::new(false, "$").render_error(&err, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "error[VALIDATION_ERROR]: SKU is required\n");

        let mut buf = Vec::new();
        Renderer::new(true, "$").render_error(&err, &mut buf).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }
}
