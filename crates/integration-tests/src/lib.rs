//! Integration tests for the Fay Collectibles storefront.
//!
//! Everything runs against in-memory state; there is nothing to start
//! or seed beyond the static fixture tables, so these tests are plain
//! `cargo test -p fay-integration-tests`.
//!
//! # Test Categories
//!
//! - `cart` - Bag algebra and derived values
//! - `checkout` - Step gating, navigation, and order placement
//! - `auth` - Mock credential flows
//! - `fixtures` - Catalogue and account table consistency

#![cfg_attr(not(test), forbid(unsafe_code))]

use fay_storefront::checkout::CheckoutFlow;
use fay_storefront::state::Session;

/// Initialize tracing for a test, honoring `RUST_LOG`. Safe to call from
/// every test; only the first call installs a subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A signed-out session with two bag lines: one overcoat (M) and two
/// ribbed tanks (S).
///
/// # Panics
///
/// Panics if the seeded slugs are missing from the catalogue.
#[must_use]
pub fn seeded_session() -> Session {
    let mut session = Session::new();
    session
        .add_to_bag("structured-wool-overcoat", "M", 1)
        .expect("catalogue has the overcoat");
    session
        .add_to_bag("ribbed-knit-tank", "S", 2)
        .expect("catalogue has the tank");
    session
}

/// Fill every required shipping field with plausible values.
pub fn fill_shipping(flow: &mut CheckoutFlow) {
    let shipping = flow.shipping_mut();
    shipping.first_name = "Amara".to_owned();
    shipping.last_name = "Osei".to_owned();
    shipping.email = "amara.osei@email.com".to_owned();
    shipping.address = "24 Independence Avenue".to_owned();
    shipping.city = "Accra".to_owned();
    shipping.state = "Greater Accra".to_owned();
    shipping.postal_code = "GA-123".to_owned();
}

/// Enter a valid card through the formatting setters.
pub fn fill_payment(flow: &mut CheckoutFlow) {
    flow.set_card_number("4111111111111111");
    flow.set_card_name("Amara Osei");
    flow.set_expiry("1228");
    flow.set_cvc("123");
}
