use crate::error::{InventoryError, Result};
use crate::model::{parse_id, Product};

/// Position of the first product whose id equals `id` exactly.
pub fn find_position(products: &[Product], id: &str) -> Result<usize> {
    products
        .iter()
        .position(|p| p.id == id)
        .ok_or_else(|| InventoryError::ProductNotFound(id.to_string()))
}

/// One more than the largest id present, or 1 for an empty list.
pub fn next_id(products: &[Product]) -> Result<u64> {
    let mut max: u64 = 0;
    for product in products {
        max = max.max(product.numeric_id()?);
    }
    max.checked_add(1)
        .ok_or_else(|| InventoryError::InvalidId(max.to_string()))
}

/// Checks that `candidate` can replace the id of the product at `position`.
pub fn check_new_id(products: &[Product], position: usize, candidate: &str) -> Result<String> {
    let wanted = parse_id(candidate)?;
    let taken = products
        .iter()
        .enumerate()
        .any(|(i, p)| i != position && p.numeric_id().ok() == Some(wanted));
    if taken {
        return Err(InventoryError::DuplicateId(wanted.to_string()));
    }
    Ok(wanted.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductDraft;

    fn products(ids: &[&str]) -> Vec<Product> {
        ids.iter()
            .map(|id| Product::new(*id, ProductDraft::new("P", "1", "1", "1.0")))
            .collect()
    }

    #[test]
    fn finds_first_match() {
        let list = products(&["4", "7", "7"]);
        assert_eq!(find_position(&list, "7").unwrap(), 1);
    }

    #[test]
    fn lookup_is_exact_text_match() {
        let list = products(&["4"]);
        assert!(matches!(
            find_position(&list, "04"),
            Err(InventoryError::ProductNotFound(id)) if id == "04"
        ));
    }

    #[test]
    fn next_id_is_max_plus_one() {
        assert_eq!(next_id(&products(&["3", "10", "2"])).unwrap(), 11);
    }

    #[test]
    fn next_id_after_largest_id_is_an_error() {
        let list = products(&["3", "18446744073709551615"]);
        assert!(matches!(
            next_id(&list),
            Err(InventoryError::InvalidId(id)) if id == "18446744073709551615"
        ));
    }

    #[test]
    fn next_id_starts_at_one() {
        assert_eq!(next_id(&[]).unwrap(), 1);
    }

    #[test]
    fn next_id_rejects_non_numeric_ids() {
        assert!(matches!(
            next_id(&products(&["1", "x"])),
            Err(InventoryError::InvalidId(_))
        ));
    }

    #[test]
    fn new_id_may_keep_current_value() {
        let list = products(&["1", "2"]);
        assert_eq!(check_new_id(&list, 1, "2").unwrap(), "2");
    }

    #[test]
    fn new_id_must_be_unused_and_positive() {
        let list = products(&["1", "2"]);
        assert!(matches!(
            check_new_id(&list, 1, "1"),
            Err(InventoryError::DuplicateId(_))
        ));
        assert!(matches!(
            check_new_id(&list, 1, "01"),
            Err(InventoryError::DuplicateId(id)) if id == "1"
        ));
        assert!(matches!(
            check_new_id(&list, 1, "zero"),
            Err(InventoryError::InvalidId(_))
        ));
    }
}
