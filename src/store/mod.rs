use crate::models::Item;

/// In-memory item collection. Append-only for the lifetime of the process;
/// insertion order is the storage order observed by `all` and `find`.
///
/// Ids are caller-supplied and deliberately not unique: `append` never
/// rejects, so two items may share an id and `find` resolves to whichever
/// was stored first. A keyed map would silently break that contract, which
/// is why the backing collection is a plain `Vec`.
#[derive(Debug, Default)]
pub struct ItemStore {
    items: Vec<Item>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The three records every fresh process starts with.
    pub fn seeded() -> Self {
        Self {
            items: vec![
                Item {
                    id: 1,
                    name: "Laptop".to_string(),
                    description: "High-performance laptop".to_string(),
                    price: 999.99,
                },
                Item {
                    id: 2,
                    name: "Mouse".to_string(),
                    description: "Wireless mouse".to_string(),
                    price: 29.99,
                },
                Item {
                    id: 3,
                    name: "Keyboard".to_string(),
                    description: "Mechanical keyboard".to_string(),
                    price: 79.99,
                },
            ],
        }
    }

    /// Snapshot of every stored item, in storage order.
    pub fn all(&self) -> Vec<Item> {
        self.items.clone()
    }

    /// First item whose id matches, scanning in storage order.
    pub fn find(&self, id: i64) -> Option<Item> {
        self.items.iter().find(|item| item.id == id).cloned()
    }

    /// Appends unconditionally. No duplicate-id check, no field validation.
    pub fn append(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
