//! Bag algebra: merge semantics and derived values across operation
//! sequences.

use fay_core::{Price, ProductId};
use fay_integration_tests::init_tracing;
use fay_storefront::cart::{Cart, CartItem};
use fay_storefront::catalog;

fn line(slug: &str, size: &str, quantity: u32) -> CartItem {
    let product = catalog::product_by_slug(slug).expect("slug exists in the catalogue");
    CartItem::from_product(product, size, quantity)
}

// ============================================================================
// Merge Semantics
// ============================================================================

#[test]
fn repeated_adds_of_the_same_key_merge_into_one_line() {
    init_tracing();
    let mut cart = Cart::new();

    cart.add_item(line("structured-wool-overcoat", "M", 1));
    cart.add_item(line("structured-wool-overcoat", "M", 2));
    cart.add_item(line("structured-wool-overcoat", "M", 1));

    assert_eq!(cart.len(), 1);
    assert_eq!(cart.item_count(), 4);
    assert_eq!(cart.total(), Price::from_units(895).times(4));
}

#[test]
fn distinct_keys_stay_distinct_lines() {
    init_tracing();
    let mut cart = Cart::new();

    cart.add_item(line("structured-wool-overcoat", "M", 1));
    cart.add_item(line("structured-wool-overcoat", "L", 1));
    cart.add_item(line("ribbed-knit-tank", "M", 1));

    assert_eq!(cart.len(), 3);

    // One line per distinct (product, size) pair, whatever the order of adds.
    cart.add_item(line("ribbed-knit-tank", "M", 3));
    cart.add_item(line("structured-wool-overcoat", "L", 2));
    assert_eq!(cart.len(), 3);
    assert_eq!(cart.item_count(), 8);
}

#[test]
fn insertion_order_is_preserved() {
    init_tracing();
    let mut cart = Cart::new();

    cart.add_item(line("wool-cashmere-scarf", "One Size", 1));
    cart.add_item(line("oversized-cotton-tee", "L", 1));
    cart.add_item(line("wool-cashmere-scarf", "One Size", 1));

    let slugs: Vec<&str> = cart.items().iter().map(|l| l.slug.as_str()).collect();
    assert_eq!(slugs, ["wool-cashmere-scarf", "oversized-cotton-tee"]);
}

// ============================================================================
// Quantity Updates
// ============================================================================

#[test]
fn update_to_zero_is_equivalent_to_remove() {
    init_tracing();
    let overcoat = ProductId::new(1);

    let mut updated = Cart::new();
    updated.add_item(line("structured-wool-overcoat", "M", 2));
    updated.update_quantity(overcoat, "M", 0);

    let mut removed = Cart::new();
    removed.add_item(line("structured-wool-overcoat", "M", 2));
    removed.remove_item(overcoat, "M");

    assert_eq!(updated.items(), removed.items());
    assert!(updated.is_empty());
}

#[test]
fn update_sets_quantity_exactly_rather_than_incrementing() {
    init_tracing();
    let mut cart = Cart::new();
    cart.add_item(line("ribbed-knit-tank", "S", 4));

    cart.update_quantity(ProductId::new(7), "S", 2);
    assert_eq!(cart.item_count(), 2);

    cart.update_quantity(ProductId::new(7), "S", 2);
    assert_eq!(cart.item_count(), 2);
}

// ============================================================================
// Derived Values
// ============================================================================

#[test]
fn derived_values_hold_after_any_operation_sequence() {
    init_tracing();
    let mut cart = Cart::new();

    cart.add_item(line("structured-wool-overcoat", "M", 1));
    cart.add_item(line("silk-blend-relaxed-shirt", "S", 2));
    cart.add_item(line("structured-wool-overcoat", "M", 1));
    cart.update_quantity(ProductId::new(2), "S", 1);
    cart.remove_item(ProductId::new(99), "XL"); // absent: no-op
    cart.add_item(line("leather-minimal-belt", "M", 3));
    cart.update_quantity(ProductId::new(5), "M", 0);

    // Recompute expectations directly from the lines.
    let expected_count: u32 = cart.items().iter().map(|l| l.quantity).sum();
    let expected_total: Price = cart
        .items()
        .iter()
        .map(|l| l.price.times(l.quantity))
        .sum();

    assert_eq!(cart.item_count(), expected_count);
    assert_eq!(cart.total(), expected_total);
    assert_eq!(cart.item_count(), 3);
    assert_eq!(cart.total(), Price::from_units(2 * 895 + 345));
}

#[test]
fn worked_example_from_the_product_page() {
    init_tracing();
    let mut cart = Cart::new();

    // Add P1/M qty 1, then P1/M qty 2: one line, quantity 3.
    cart.add_item(line("structured-wool-overcoat", "M", 1));
    cart.add_item(line("structured-wool-overcoat", "M", 2));

    assert_eq!(cart.len(), 1);
    assert_eq!(cart.items()[0].quantity, 3);
    assert_eq!(cart.total(), Price::from_units(895).times(3));
}
