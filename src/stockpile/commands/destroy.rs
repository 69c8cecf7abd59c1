use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Product;
use log::info;

use super::helpers::find_position;

/// Removes the first product with a matching id. Not persisted until the session ends.
pub fn run(products: &mut Vec<Product>, id: &str) -> Result<CmdResult> {
    let position = find_position(products, id)?;
    let removed = products.remove(position);
    info!("Destroyed product #{} ({})", removed.id, removed.name);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Product destroyed (#{}): {}",
        removed.id, removed.name
    )));
    Ok(result.with_affected_products(vec![removed]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InventoryError;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::DataStore;

    #[test]
    fn removes_product_with_id() {
        let store = StoreFixture::new().with_products(3).build();
        let mut products = store.load().unwrap();

        let result = run(&mut products, "2").unwrap();

        assert_eq!(result.affected_products[0].id, "2");
        assert_eq!(products.len(), 2);
        assert!(products.iter().all(|p| p.id != "2"));
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn missing_id_leaves_list_alone() {
        let mut products = StoreFixture::new().with_products(2).build().load().unwrap();

        let err = run(&mut products, "7").unwrap_err();
        assert!(matches!(err, InventoryError::ProductNotFound(_)));
        assert_eq!(products.len(), 2);
    }
}
