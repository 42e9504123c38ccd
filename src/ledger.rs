// Store ledger: running income plus the append-only transaction log.

use crate::money::Money;

#[derive(Debug, Clone, Default)]
pub struct Ledger {
    income: Money,
    log: Vec<String>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a settled sale to the income total.
    pub fn credit(&mut self, amount: Money) {
        self.income += amount;
    }

    pub fn record(&mut self, entry: impl Into<String>) {
        self.log.push(entry.into());
    }

    pub fn income(&self) -> Money {
        self.income
    }

    /// Entries in the order they were recorded.
    pub fn entries(&self) -> &[String] {
        &self.log
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit_accumulates() {
        let mut ledger = Ledger::new();
        assert_eq!(ledger.income(), Money::zero());
        ledger.credit(Money::from_minor(15000));
        ledger.credit(Money::from_minor(250));
        assert_eq!(ledger.income(), Money::from_minor(15250));
    }

    #[test]
    fn test_record_keeps_order() {
        let mut ledger = Ledger::new();
        ledger.record("first");
        ledger.record(String::from("second"));
        assert_eq!(ledger.entries(), ["first", "second"]);
    }
}
