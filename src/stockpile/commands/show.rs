use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Product;

use super::helpers::find_position;

pub fn run(products: &[Product], id: &str) -> Result<CmdResult> {
    let position = find_position(products, id)?;
    Ok(CmdResult::default().with_listed_products(vec![products[position].clone()]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InventoryError;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::DataStore;

    #[test]
    fn shows_matching_product() {
        let products = StoreFixture::new()
            .with_product("1", "Apple")
            .with_product("2", "Banana")
            .build()
            .load()
            .unwrap();

        let result = run(&products, "2").unwrap();
        assert_eq!(result.listed_products.len(), 1);
        assert_eq!(result.listed_products[0].name, "Banana");
    }

    #[test]
    fn unknown_id_is_not_found() {
        let products = StoreFixture::new().with_products(2).build().load().unwrap();

        let err = run(&products, "99").unwrap_err();
        assert!(matches!(err, InventoryError::ProductNotFound(id) if id == "99"));
    }
}
