// Book record: one catalog entry plus the only rule that may change its
// stock.

use std::fmt;

use crate::money::{Money, CURRENCY};

/// Catalog identifier. Assigned once, never reused.
pub type BookId = u32;

/// Hands out book ids for one store process: 1, 2, 3, ...
#[derive(Debug, Clone)]
pub struct IdSequence {
    next: BookId,
}

impl IdSequence {
    pub fn new() -> Self {
        IdSequence { next: 1 }
    }

    pub fn next_id(&mut self) -> BookId {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    id: BookId,
    name: String,
    quantity: u32,
    page_count: u32,
    unit_price: Money,
}

impl Book {
    /// Creates a book with the next id from `ids`. Values are taken as
    /// given; range checks belong to whoever collected them.
    pub fn create(
        ids: &mut IdSequence,
        name: impl Into<String>,
        quantity: u32,
        page_count: u32,
        unit_price: Money,
    ) -> Self {
        Book {
            id: ids.next_id(),
            name: name.into(),
            quantity,
            page_count,
            unit_price,
        }
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Takes `requested` copies out of stock if there are enough. On `false`
    /// the stock is untouched.
    pub fn attempt_purchase(&mut self, requested: u32) -> bool {
        if self.quantity >= requested {
            self.quantity -= requested;
            true
        } else {
            false
        }
    }

    /// Case-insensitive name comparison (ASCII fold, independent of locale).
    pub fn matches_name(&self, name: &str) -> bool {
        fold_name(&self.name) == fold_name(name)
    }

    /// One-line view used by the inventory listing.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Quantity: {}, Pages: {}, Price: {} {}",
            self.id, self.name, self.quantity, self.page_count, self.unit_price, CURRENCY
        )
    }
}

fn fold_name(name: &str) -> String {
    name.to_ascii_lowercase()
}
