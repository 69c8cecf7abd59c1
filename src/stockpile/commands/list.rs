use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Product;

pub fn run(products: &[Product]) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_products(products.to_vec()))
}
