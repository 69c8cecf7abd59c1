use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Product, ProductDraft};
use crate::store::DataStore;
use log::info;

use super::helpers::next_id;

/// Appends a product with the next free id and persists the whole list.
pub fn run<S: DataStore>(
    store: &mut S,
    products: &mut Vec<Product>,
    draft: ProductDraft,
) -> Result<CmdResult> {
    let draft = draft.validated()?;
    let id = next_id(products)?;
    let product = Product::new(id.to_string(), draft);

    products.push(product.clone());
    if let Err(e) = store.save(products) {
        products.pop();
        return Err(e);
    }
    info!("Created product #{} ({})", product.id, product.name);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Product created (#{}): {}",
        product.id, product.name
    )));
    Ok(result.with_affected_products(vec![product]))
}
