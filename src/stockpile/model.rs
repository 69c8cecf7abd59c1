use crate::error::{InventoryError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Column order of the products file. Also the header row.
pub const FIELDS: [&str; 5] = ["id", "name", "aisle", "department", "price"];

/// Values accepted for both `aisle` and `department`.
pub const SLOTS: [&str; 5] = ["1", "2", "3", "4", "5"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    Project,
    Global,
}

/// Which of the two slot-constrained fields a value is meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotField {
    Aisle,
    Department,
}

impl SlotField {
    pub fn name(&self) -> &'static str {
        match self {
            SlotField::Aisle => "aisle",
            SlotField::Department => "department",
        }
    }
}

/// One inventory record.
///
/// Every field is kept as text so that a loaded file is written back with the
/// same values. Numeric meaning is applied only where input enters the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub aisle: String,
    pub department: String,
    pub price: String,
}

impl Product {
    pub fn new(id: impl Into<String>, draft: ProductDraft) -> Self {
        Self {
            id: id.into(),
            name: draft.name,
            aisle: draft.aisle,
            department: draft.department,
            price: draft.price,
        }
    }

    /// Numeric value of the id, if it is one.
    pub fn numeric_id(&self) -> Result<u64> {
        parse_id(&self.id)
    }

    pub(crate) fn as_record(&self) -> [&str; 5] {
        [
            &self.id,
            &self.name,
            &self.aisle,
            &self.department,
            &self.price,
        ]
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} | aisle {} | department {} | price {}",
            self.id, self.name, self.aisle, self.department, self.price
        )
    }
}

/// Field values collected for a create or update, before an id is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub aisle: String,
    pub department: String,
    pub price: String,
}

impl ProductDraft {
    pub fn new(
        name: impl Into<String>,
        aisle: impl Into<String>,
        department: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            aisle: aisle.into(),
            department: department.into(),
            price: price.into(),
        }
    }

    /// Checks the slot fields and normalizes the price.
    pub fn validated(self) -> Result<Self> {
        let aisle = validate_slot(SlotField::Aisle, &self.aisle)?;
        let department = validate_slot(SlotField::Department, &self.department)?;
        let price = normalize_price(&self.price)?;
        Ok(Self {
            name: self.name,
            aisle,
            department,
            price,
        })
    }
}

pub fn validate_slot(field: SlotField, value: &str) -> Result<String> {
    if SLOTS.contains(&value) {
        Ok(value.to_string())
    } else {
        Err(InventoryError::InvalidSlot {
            field: field.name(),
            value: value.to_string(),
        })
    }
}

/// Parses a price and renders it as the shortest decimal text that round-trips,
/// always keeping a fractional part: `0.50` becomes `0.5`, `2` becomes `2.0`.
pub fn normalize_price(input: &str) -> Result<String> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| InventoryError::InvalidPrice(input.to_string()))?;
    if !value.is_finite() {
        return Err(InventoryError::InvalidPrice(input.to_string()));
    }

    let text = value.to_string();
    if text.contains('.') {
        Ok(text)
    } else {
        Ok(format!("{}.0", text))
    }
}

/// Ids are positive integers written as plain decimal text.
pub fn parse_id(input: &str) -> Result<u64> {
    match input.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(InventoryError::InvalidId(input.to_string())),
    }
}
