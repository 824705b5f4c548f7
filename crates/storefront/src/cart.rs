//! Shopping bag state.
//!
//! The cart is the single source of truth for the shopping bag: an
//! insertion-ordered list of line items keyed by (product, size), plus
//! the drawer visibility flag. Derived values are recomputed from the
//! line items on every read, so they can never drift from the lines.

use serde::{Deserialize, Serialize};
use tracing::debug;

use fay_core::{Price, ProductId};

use crate::catalog::Product;

/// A line item in the shopping bag.
///
/// Name, price, image, and slug are a snapshot taken when the item was
/// added; later catalogue changes do not flow into existing lines. The
/// (`product_id`, `size`) pair is the line key - the bag holds at most
/// one line per pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: ProductId,
    pub slug: String,
    pub name: String,
    pub price: Price,
    pub size: String,
    pub quantity: u32,
    pub image: String,
}

impl CartItem {
    /// Build a line item snapshot from a catalogue product.
    #[must_use]
    pub fn from_product(product: &Product, size: &str, quantity: u32) -> Self {
        Self {
            product_id: product.id,
            slug: product.slug.clone(),
            name: product.name.clone(),
            price: product.price,
            size: size.to_owned(),
            quantity,
            image: product.primary_image().unwrap_or_default().to_owned(),
        }
    }

    fn matches(&self, product_id: ProductId, size: &str) -> bool {
        self.product_id == product_id && self.size == size
    }
}

/// Shopping bag state container.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<CartItem>,
    is_open: bool,
}

impl Cart {
    /// Create an empty bag with the drawer closed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Whether the bag holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines (not units).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Drawer visibility.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    /// Add a line item to the bag.
    ///
    /// If a line with the same (product, size) key exists, its quantity
    /// is incremented by the new item's quantity and the existing
    /// snapshot fields are kept. Otherwise the item is appended. Adding
    /// always opens the drawer. This layer does not validate the item's
    /// fields - that is the caller's responsibility.
    pub fn add_item(&mut self, item: CartItem) {
        if let Some(line) = self
            .items
            .iter_mut()
            .find(|line| line.matches(item.product_id, &item.size))
        {
            line.quantity += item.quantity;
            debug!(
                product = %line.product_id,
                size = %line.size,
                quantity = line.quantity,
                "merged bag line"
            );
        } else {
            debug!(
                product = %item.product_id,
                size = %item.size,
                quantity = item.quantity,
                "added bag line"
            );
            self.items.push(item);
        }
        self.is_open = true;
    }

    /// Remove the (product, size) line. Removing an absent line is a
    /// no-op, not an error.
    pub fn remove_item(&mut self, product_id: ProductId, size: &str) {
        let before = self.items.len();
        self.items.retain(|line| !line.matches(product_id, size));
        if self.items.len() < before {
            debug!(product = %product_id, size, "removed bag line");
        }
    }

    /// Set a line's quantity exactly. A quantity of zero removes the
    /// line instead of storing an empty one.
    pub fn update_quantity(&mut self, product_id: ProductId, size: &str, quantity: u32) {
        if quantity == 0 {
            self.remove_item(product_id, size);
            return;
        }
        if let Some(line) = self
            .items
            .iter_mut()
            .find(|line| line.matches(product_id, size))
        {
            line.quantity = quantity;
            debug!(product = %product_id, size, quantity, "updated bag line quantity");
        }
    }

    /// Empty the bag, e.g. after an order is placed.
    pub fn clear(&mut self) {
        self.items.clear();
        debug!("cleared bag");
    }

    /// Show the drawer.
    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Hide the drawer.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    /// Sum of price x quantity across all lines.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items
            .iter()
            .map(|line| line.price.times(line.quantity))
            .sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn item(id: i32, size: &str, quantity: u32, units: i64) -> CartItem {
        CartItem {
            product_id: ProductId::new(id),
            slug: format!("product-{id}"),
            name: format!("Product {id}"),
            price: Price::from_units(units),
            size: size.to_owned(),
            quantity,
            image: format!("/images/products/product-{id}.jpg"),
        }
    }

    #[test]
    fn test_add_merges_same_product_and_size() {
        let mut cart = Cart::new();
        cart.add_item(item(1, "M", 1, 895));
        cart.add_item(item(1, "M", 2, 895));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].quantity, 3);
        assert_eq!(cart.total(), Price::from_units(895).times(3));
    }

    #[test]
    fn test_add_keeps_first_snapshot_on_merge() {
        let mut cart = Cart::new();
        cart.add_item(item(1, "M", 1, 895));

        // Same key, different snapshot: the first write wins.
        let mut repriced = item(1, "M", 1, 999);
        repriced.name = "Renamed".to_owned();
        cart.add_item(repriced);

        assert_eq!(cart.items()[0].price, Price::from_units(895));
        assert_eq!(cart.items()[0].name, "Product 1");
        assert_eq!(cart.items()[0].quantity, 2);
    }

    #[test]
    fn test_same_product_different_size_is_a_new_line() {
        let mut cart = Cart::new();
        cart.add_item(item(1, "M", 1, 895));
        cart.add_item(item(1, "L", 1, 895));

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_add_opens_drawer() {
        let mut cart = Cart::new();
        assert!(!cart.is_open());

        cart.add_item(item(1, "M", 1, 895));
        assert!(cart.is_open());

        cart.close();
        cart.add_item(item(1, "M", 1, 895));
        assert!(cart.is_open());
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::new();
        cart.add_item(item(1, "M", 1, 895));
        cart.add_item(item(2, "S", 1, 345));

        cart.remove_item(ProductId::new(1), "M");
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].product_id, ProductId::new(2));

        // Absent line: no-op.
        cart.remove_item(ProductId::new(9), "XL");
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_update_quantity_sets_exactly() {
        let mut cart = Cart::new();
        cart.add_item(item(1, "M", 2, 895));

        cart.update_quantity(ProductId::new(1), "M", 5);
        assert_eq!(cart.items()[0].quantity, 5);
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_update_quantity_zero_removes() {
        let mut cart = Cart::new();
        cart.add_item(item(1, "M", 2, 895));

        cart.update_quantity(ProductId::new(1), "M", 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_derived_values_track_operations() {
        let mut cart = Cart::new();
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total(), Price::ZERO);

        cart.add_item(item(1, "M", 1, 895));
        cart.add_item(item(2, "S", 3, 165));
        assert_eq!(cart.item_count(), 4);
        assert_eq!(cart.total(), Price::from_units(895 + 3 * 165));

        cart.update_quantity(ProductId::new(2), "S", 1);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total(), Price::from_units(895 + 165));

        cart.clear();
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total(), Price::ZERO);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_from_product_snapshot() {
        let product = crate::catalog::product_by_slug("leather-minimal-belt").unwrap();
        let line = CartItem::from_product(product, "M", 1);
        assert_eq!(line.product_id, product.id);
        assert_eq!(line.name, "Leather Minimal Belt");
        assert_eq!(line.price, Price::from_units(195));
        assert_eq!(line.image, "/images/products/product-5.jpg");
    }
}
