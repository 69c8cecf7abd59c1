use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Product, ProductDraft};
use log::info;

use super::helpers::{check_new_id, find_position};

/// Overwrites every field of the product with id `id`, including the id itself.
/// Not persisted until the session ends.
pub fn run(
    products: &mut [Product],
    id: &str,
    new_id: &str,
    draft: ProductDraft,
) -> Result<CmdResult> {
    let position = find_position(products, id)?;
    let new_id = check_new_id(products, position, new_id)?;
    let draft = draft.validated()?;

    let product = &mut products[position];
    *product = Product::new(new_id, draft);
    info!("Updated product #{} -> #{} ({})", id, product.id, product.name);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Product updated (#{}): {}",
        product.id, product.name
    )));
    Ok(result.with_affected_products(vec![product.clone()]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InventoryError;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::DataStore;

    #[test]
    fn overwrites_every_field() {
        let store = StoreFixture::new()
            .with_product("1", "Apple")
            .with_product("2", "Banana")
            .build();
        let mut products = store.load().unwrap();

        let result = run(
            &mut products,
            "2",
            "7",
            ProductDraft::new("Plantain", "4", "5", "1.20"),
        )
        .unwrap();

        let expected = Product::new("7", ProductDraft::new("Plantain", "4", "5", "1.2"));
        assert_eq!(products[1], expected);
        assert_eq!(result.affected_products, vec![expected]);
        assert_eq!(products[0].name, "Apple");
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn keeping_the_same_id_is_allowed() {
        let mut products = StoreFixture::new().with_products(2).build().load().unwrap();

        run(
            &mut products,
            "1",
            "1",
            ProductDraft::new("Renamed", "2", "2", "3"),
        )
        .unwrap();
        assert_eq!(products[0].id, "1");
        assert_eq!(products[0].name, "Renamed");
    }

    #[test]
    fn rejects_id_of_another_product() {
        let mut products = StoreFixture::new().with_products(2).build().load().unwrap();
        let before = products.clone();

        let err = run(
            &mut products,
            "1",
            "2",
            ProductDraft::new("Clash", "1", "1", "1"),
        )
        .unwrap_err();

        assert!(matches!(err, InventoryError::DuplicateId(_)));
        assert_eq!(products, before);
    }

    #[test]
    fn unknown_target_is_not_found() {
        let mut products = StoreFixture::new().with_products(1).build().load().unwrap();

        let err = run(
            &mut products,
            "42",
            "42",
            ProductDraft::new("Ghost", "1", "1", "1"),
        )
        .unwrap_err();
        assert!(matches!(err, InventoryError::ProductNotFound(_)));
    }
}
