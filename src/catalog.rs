// The static menu: categories in listing order, each with its items.

use crate::model::{Category, MenuEntry, Price};


// Read-only catalog supplied at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
}


impl Catalog {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    // Every (category, entry) pair, in catalog order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &MenuEntry)> {
        self.categories
            .iter()
            .flat_map(|c| c.items.iter().map(move |e| (c.category.as_str(), e)))
    }

    // First entry with the given name, whatever its category.
    pub fn find(&self, name: &str) -> Option<&MenuEntry> {
        self.entries().map(|(_, e)| e).find(|e| e.name == name)
    }

    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}


impl Default for Catalog {
    fn default() -> Self {
        Self::new(vec![
            category(
                "Rice & Pasta",
                &[
                    ("Fried Rice Veg", 200),
                    ("Fried Rice Chicken", 250),
                    ("Chilli Chicken", 250),
                    ("Chow Mein", 250),
                    ("Alfredo Pasta", 350),
                    ("Lasagne", 500),
                ],
            ),
            category(
                "Burgers",
                &[
                    ("Bun Kabab", 100),
                    ("Anday Wala Burger", 150),
                    ("Zinger Breast", 300),
                    ("Zinger Breast Cheese", 350),
                    ("Zinger Thigh", 350),
                    ("Zinger Thigh Cheese", 400),
                ],
            ),
            category(
                "Fast Food",
                &[
                    ("Momos", 200),
                    ("Fries", 150),
                    ("Loaded Fries", 300),
                    ("Chicken Nuggets", 350),
                ],
            ),
            category(
                "Drinks",
                &[("Coke", 100), ("Sprite", 100), ("Mint Margarita", 180)],
            ),
        ])
    }
}


fn category(name: &str, items: &[(&str, Price)]) -> Category {
    Category {
        category: name.to_string(),
        items: items
            .iter()
            .map(|&(name, price)| MenuEntry::new(name, price))
            .collect(),
    }
}
