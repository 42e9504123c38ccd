// Bookstore: the book registry, the ledger and the operations over them.
//
// Operations return values instead of printing; the `ui` module decides how
// an outcome is shown. Every mutation happens inside a single call, so a
// purchase is either fully settled or leaves stock and income untouched.

use tracing::{debug, info};

use crate::book::{Book, IdSequence};
use crate::error::PurchaseError;
use crate::ledger::Ledger;
use crate::money::{Money, CURRENCY};

/// A settled sale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub name: String,
    pub quantity: u32,
    pub total: Money,
    pub change: Money,
}

impl Receipt {
    pub fn log_entry(&self) -> String {
        format!(
            "Purchase successful: {} of '{}' for {} {}.",
            self.quantity, self.name, self.total, CURRENCY
        )
    }
}

#[derive(Debug, Default)]
pub struct Bookstore {
    ids: IdSequence,
    books: Vec<Book>,
    ledger: Ledger,
}

impl Bookstore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new book and returns it. Names are not deduplicated.
    pub fn add_book(
        &mut self,
        name: impl Into<String>,
        quantity: u32,
        page_count: u32,
        unit_price: Money,
    ) -> &Book {
        let book = Book::create(&mut self.ids, name, quantity, page_count, unit_price);
        info!(id = book.id(), name = %book.name(), quantity, price = %unit_price, "book added");
        let index = self.books.len();
        self.books.push(book);
        &self.books[index]
    }

    /// Sells `requested` copies of the first book whose name matches
    /// `name`, paid with `tendered`.
    ///
    /// Checks run in a fixed order: lookup, quantity, funds, stock. Every
    /// outcome except `InvalidQuantity` appends one line to the transaction
    /// log.
    pub fn purchase(
        &mut self,
        name: &str,
        requested: i64,
        tendered: Money,
    ) -> Result<Receipt, PurchaseError> {
        let outcome = self.settle(name, requested, tendered);
        match &outcome {
            Ok(receipt) => {
                info!(name, quantity = receipt.quantity, total = %receipt.total, "purchase settled");
                self.ledger.record(receipt.log_entry());
            }
            Err(err) => {
                debug!(name, requested, tendered = %tendered, error = ?err, "purchase rejected");
                if let Some(entry) = err.log_entry() {
                    self.ledger.record(entry);
                }
            }
        }
        outcome
    }

    fn settle(
        &mut self,
        name: &str,
        requested: i64,
        tendered: Money,
    ) -> Result<Receipt, PurchaseError> {
        let book = self
            .books
            .iter_mut()
            .find(|b| b.matches_name(name))
            .ok_or_else(|| PurchaseError::NotFound {
                name: name.to_string(),
            })?;

        if requested <= 0 {
            return Err(PurchaseError::InvalidQuantity { requested });
        }

        let total = book.unit_price().times(requested);
        if tendered < total {
            return Err(PurchaseError::InsufficientFunds {
                name: name.to_string(),
                required: total,
                provided: tendered,
            });
        }

        let available = book.quantity();
        let insufficient = || PurchaseError::InsufficientStock {
            name: name.to_string(),
            requested,
            available,
        };
        // More than u32::MAX copies can never be in stock.
        let quantity = u32::try_from(requested).map_err(|_| insufficient())?;
        if !book.attempt_purchase(quantity) {
            return Err(insufficient());
        }

        self.ledger.credit(total);
        Ok(Receipt {
            name: name.to_string(),
            quantity,
            total,
            change: tendered - total,
        })
    }

    /// Registry in insertion order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Transaction log in chronological order.
    pub fn transactions(&self) -> &[String] {
        self.ledger.entries()
    }

    pub fn total_income(&self) -> Money {
        self.ledger.income()
    }
}
