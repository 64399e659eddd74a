//! CSV export of the product catalog

use csv::{Terminator, WriterBuilder};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{ProductError, ProductResult};
use crate::models::Product;

pub const CSV_HEADER: [&str; 4] = ["id", "name", "quantity", "price"];

/// Serialize products as CSV, header first, one `\n`-terminated row each.
///
/// Prices always carry two decimals with ties rounded away from zero.
/// Names are quoted only when they contain a comma, a double quote or a
/// line break; a missing name is an empty field.
pub fn products_to_csv(products: &[Product]) -> ProductResult<String> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    for product in products {
        writer.write_record([
            product.id.to_string(),
            product.name.clone().unwrap_or_default(),
            product.quantity.to_string(),
            format_price(product.price),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ProductError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ProductError::Export(e.to_string()))
}

/// Two decimals, rounding half away from zero on the shortest decimal form
/// of `price` (so `0.125` and `1.005` both round up).
///
/// Values outside `Decimal`'s range (and NaN or infinity) fall back to
/// plain float formatting.
fn format_price(price: f64) -> String {
    match price.to_string().parse::<Decimal>() {
        Ok(exact) => format!(
            "{:.2}",
            exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        ),
        Err(_) => format!("{:.2}", price),
    }
}
