// UI layer: the numbered menu loop and the add/purchase flows. Store
// operations return outcomes; this module turns them into operator text.

use anyhow::Result;
use tracing::{debug, info};

use crate::console::Console;
use crate::error::PurchaseError;
use crate::input::{
    parse_menu_choice, read_non_negative_decimal, read_positive_integer, read_text,
    INVALID_CHOICE_INPUT,
};
use crate::money::CURRENCY;
use crate::store::Bookstore;

pub const MENU_TITLE: &str = "--- 📚 Welcome to the Bookstore! ---";
pub const MENU_ITEMS: [&str; 6] = [
    "Add Book",
    "Purchase Book",
    "Display Books",
    "Show Transaction History",
    "Show Total Income",
    "Exit",
];
pub const FAREWELL: &str = "\n👋 Thank you for visiting the bookstore. Goodbye!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddBook,
    PurchaseBook,
    DisplayBooks,
    TransactionHistory,
    TotalIncome,
    Exit,
}

impl MenuChoice {
    pub fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(MenuChoice::AddBook),
            2 => Some(MenuChoice::PurchaseBook),
            3 => Some(MenuChoice::DisplayBooks),
            4 => Some(MenuChoice::TransactionHistory),
            5 => Some(MenuChoice::TotalIncome),
            6 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Runs the menu until the operator picks Exit or input ends.
pub fn main_menu<C: Console + ?Sized>(store: &mut Bookstore, console: &mut C) -> Result<()> {
    info!("session started");
    loop {
        let Some(number) = read_menu_choice(console)? else {
            debug!("input ended, leaving menu");
            break;
        };
        let keep_going = match MenuChoice::from_number(number) {
            Some(MenuChoice::AddBook) => handle_add(store, console)?,
            Some(MenuChoice::PurchaseBook) => handle_purchase(store, console)?,
            Some(MenuChoice::DisplayBooks) => {
                show_books(store, console)?;
                true
            }
            Some(MenuChoice::TransactionHistory) => {
                show_transactions(store, console)?;
                true
            }
            Some(MenuChoice::TotalIncome) => {
                show_income(store, console)?;
                true
            }
            Some(MenuChoice::Exit) => {
                console.show(FAREWELL)?;
                break;
            }
            None => {
                console.show("\n❌ Invalid choice. Please try again.")?;
                true
            }
        };
        if !keep_going {
            debug!("input ended mid-flow, leaving menu");
            break;
        }
    }
    info!(
        books = store.books().len(),
        transactions = store.transactions().len(),
        income = %store.total_income(),
        "session ended"
    );
    Ok(())
}

/// Shows the menu, then keeps asking for an integer until one arrives.
fn read_menu_choice<C: Console + ?Sized>(console: &mut C) -> Result<Option<i64>> {
    let mut raw = console.menu(MENU_TITLE, &MENU_ITEMS)?;
    loop {
        let Some(text) = raw else {
            return Ok(None);
        };
        match parse_menu_choice(&text) {
            Ok(n) => return Ok(Some(n)),
            Err(err) => {
                debug!(error = %err, "menu input rejected");
                console.warn(INVALID_CHOICE_INPUT)?;
                raw = console.line("Enter your choice")?;
            }
        }
    }
}

/// Collects the fields of a new book and registers it. Returns `false` if
/// input ended before the book was complete.
fn handle_add<C: Console + ?Sized>(store: &mut Bookstore, console: &mut C) -> Result<bool> {
    console.show("")?;
    let Some(name) = read_text(console, "Enter Book Name")? else {
        return Ok(false);
    };
    console.show("")?;
    let Some(quantity) = read_positive_integer(console, "Enter Quantity")? else {
        return Ok(false);
    };
    let Some(pages) = read_positive_integer(console, "Enter Pages")? else {
        return Ok(false);
    };
    let Some(price) = read_non_negative_decimal(console, "Enter Price")? else {
        return Ok(false);
    };

    let book = store.add_book(name, quantity, pages, price);
    console.show("\n🎉 Book added successfully! Here are the details:")?;
    console.show(&book.describe())?;
    Ok(true)
}

/// Collects a sale request, runs it against the store and reports the
/// outcome. Returns `false` if input ended first.
fn handle_purchase<C: Console + ?Sized>(store: &mut Bookstore, console: &mut C) -> Result<bool> {
    console.show("")?;
    let Some(name) = read_text(console, "Enter Book Name")? else {
        return Ok(false);
    };
    console.show("")?;
    let Some(quantity) = read_positive_integer(console, "Enter Quantity")? else {
        return Ok(false);
    };
    let Some(tendered) = read_non_negative_decimal(console, "Enter Amount")? else {
        return Ok(false);
    };

    match store.purchase(&name, i64::from(quantity), tendered) {
        Ok(receipt) => {
            console.show("\n✅ Purchase successful!")?;
            console.show(&format!(
                "Book: {}, Quantity: {}, Total Cost: {} {}",
                receipt.name, receipt.quantity, receipt.total, CURRENCY
            ))?;
            if receipt.change.is_positive() {
                console.show(&format!(
                    "You will get change of: {} {}",
                    receipt.change, CURRENCY
                ))?;
            }
        }
        Err(err) => {
            let headline = match &err {
                PurchaseError::NotFound { .. } => {
                    format!("❌ Purchase failed: {}", err)
                }
                _ => format!("⚠️ {}", err),
            };
            console.warn(&headline)?;
            if let Some(detail) = err.detail() {
                console.show(&detail)?;
            }
        }
    }
    Ok(true)
}

fn show_books<C: Console + ?Sized>(store: &Bookstore, console: &mut C) -> Result<()> {
    console.show("\n--- Available Books ---")?;
    for book in store.books() {
        console.show(&book.describe())?;
    }
    Ok(())
}

fn show_transactions<C: Console + ?Sized>(store: &Bookstore, console: &mut C) -> Result<()> {
    console.show("\n--- Transaction History ---")?;
    for entry in store.transactions() {
        console.show(entry)?;
    }
    Ok(())
}

fn show_income<C: Console + ?Sized>(store: &Bookstore, console: &mut C) -> Result<()> {
    console.show(&format!(
        "\n💰 Total Store Income: {} {}",
        store.total_income(),
        CURRENCY
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_numbers() {
        assert_eq!(MenuChoice::from_number(1), Some(MenuChoice::AddBook));
        assert_eq!(MenuChoice::from_number(6), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::from_number(0), None);
        assert_eq!(MenuChoice::from_number(7), None);
        assert_eq!(MenuChoice::from_number(-1), None);
    }

    #[test]
    fn test_menu_items_cover_every_choice() {
        for n in 1..=MENU_ITEMS.len() as i64 {
            assert!(MenuChoice::from_number(n).is_some());
        }
    }
}
