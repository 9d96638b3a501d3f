use tracing::debug;
use crate::model::{CartLine, Price, Quantity, Totals};


// What a mutation did to the cart, for logging and feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartChange {
    Added,
    Incremented { quantity: Quantity },
    Updated { quantity: Quantity },
    Removed,
    Unchanged,
}

// Insertion-ordered cart lines, unique by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartStore {
    lines: Vec<CartLine>,
}


impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Add one unit; an existing line keeps the price it was first added at
    pub fn add(&mut self, name: &str, unit_price: Price) -> CartChange {
        let change = match self.position(name) {
            Some(i) => {
                let line = &mut self.lines[i];
                line.quantity = line.quantity.saturating_add(1);
                CartChange::Incremented { quantity: line.quantity }
            }
            None => {
                self.lines.push(CartLine {
                    name: name.to_string(),
                    unit_price,
                    quantity: 1,
                });
                CartChange::Added
            }
        };
        debug!(item = name, ?change, "cart add");
        change
    }

    // Shift a line's quantity; anything at or below zero drops the line
    pub fn update_quantity(&mut self, name: &str, delta: i64) -> CartChange {
        let Some(i) = self.position(name) else {
            return CartChange::Unchanged;
        };

        let next = i128::from(self.lines[i].quantity) + i128::from(delta);
        let change = if next <= 0 {
            self.lines.remove(i);
            CartChange::Removed
        } else {
            let quantity = Quantity::try_from(next).unwrap_or(Quantity::MAX);
            self.lines[i].quantity = quantity;
            CartChange::Updated { quantity }
        };
        debug!(item = name, delta, ?change, "cart update");
        change
    }

    pub fn remove(&mut self, name: &str) -> CartChange {
        match self.position(name) {
            Some(i) => {
                self.lines.remove(i);
                debug!(item = name, "cart remove");
                CartChange::Removed
            }
            None => CartChange::Unchanged,
        }
    }

    // Item count and amount due, summed over the current lines
    pub fn totals(&self) -> Totals {
        self.lines.iter().fold(Totals::default(), |acc, line| Totals {
            item_count: acc.item_count.saturating_add(line.quantity),
            amount_due: acc.amount_due.saturating_add(line.line_total()),
        })
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, name: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.lines.iter().position(|l| l.name == name)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn line(name: &str, unit_price: Price, quantity: Quantity) -> CartLine {
        CartLine {
            name: name.to_string(),
            unit_price,
            quantity,
        }
    }

    fn fries_and_coke() -> CartStore {
        let mut cart = CartStore::new();
        cart.add("Fries", 150);
        cart.add("Coke", 100);
        cart.add("Fries", 150);
        cart
    }

    #[test]
    fn repeated_add_aggregates_in_first_add_order() {
        let cart = fries_and_coke();
        assert_eq!(cart.lines(), &[line("Fries", 150, 2), line("Coke", 100, 1)]);
        assert_eq!(
            cart.totals(),
            Totals {
                item_count: 3,
                amount_due: 400
            }
        );
    }

    #[test]
    fn add_keeps_first_price() {
        let mut cart = CartStore::new();
        assert_eq!(cart.add("Momos", 200), CartChange::Added);
        assert_eq!(
            cart.add("Momos", 999),
            CartChange::Incremented { quantity: 2 }
        );
        assert_eq!(cart.line("Momos"), Some(&line("Momos", 200, 2)));
    }

    #[test]
    fn decrement_to_zero_removes_line() {
        let mut cart = fries_and_coke();
        assert_eq!(cart.update_quantity("Coke", -1), CartChange::Removed);
        assert_eq!(cart.lines(), &[line("Fries", 150, 2)]);
        assert_eq!(
            cart.totals(),
            Totals {
                item_count: 2,
                amount_due: 300
            }
        );
    }

    #[test]
    fn large_negative_delta_removes_line() {
        let mut cart = fries_and_coke();
        assert_eq!(cart.update_quantity("Fries", -10), CartChange::Removed);
        assert!(!cart.contains("Fries"));
    }

    #[test]
    fn increment_keeps_position() {
        let mut cart = fries_and_coke();
        assert_eq!(
            cart.update_quantity("Coke", 1),
            CartChange::Updated { quantity: 2 }
        );
        assert_eq!(cart.lines()[1], line("Coke", 100, 2));
    }

    #[test]
    fn unknown_names_are_no_ops() {
        let mut cart = fries_and_coke();
        let before = cart.clone();
        assert_eq!(cart.update_quantity("Lasagne", 1), CartChange::Unchanged);
        assert_eq!(cart.remove("Lasagne"), CartChange::Unchanged);
        assert_eq!(cart, before);
    }

    #[test]
    fn quantity_saturates_at_max() {
        let mut cart = CartStore::new();
        cart.add("Fries", 150);
        cart.update_quantity("Fries", i64::MAX);
        cart.update_quantity("Fries", i64::MAX);
        assert_eq!(cart.line("Fries").map(|l| l.quantity), Some(Quantity::MAX));

        assert_eq!(
            cart.add("Fries", 150),
            CartChange::Incremented { quantity: Quantity::MAX }
        );
        assert_eq!(cart.line("Fries").map(|l| l.quantity), Some(Quantity::MAX));
        assert_eq!(cart.totals().item_count, Quantity::MAX);
        assert_eq!(cart.totals().amount_due, Price::MAX);
    }

    #[test]
    fn remove_last_line_empties_cart() {
        let mut cart = fries_and_coke();
        cart.update_quantity("Coke", -1);
        assert_eq!(cart.remove("Fries"), CartChange::Removed);
        assert!(cart.is_empty());
        assert_eq!(cart.totals(), Totals::default());
    }
}
