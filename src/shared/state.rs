use dioxus::prelude::*;

/// Shop-wide state shared through `StoreProvider::<ShopStore>`
#[derive(Clone, Copy, PartialEq)]
pub struct ShopStore {
    pub bag_count: Signal<usize>,
}

impl ShopStore {
    pub fn add_to_bag(&mut self) {
        *self.bag_count.write() += 1;
    }

    pub fn bag_label(&self) -> String {
        match (self.bag_count)() {
            1 => "Bag (1 item)".to_string(),
            n => format!("Bag ({n} items)"),
        }
    }
}
