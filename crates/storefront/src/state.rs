//! Session state shared across the storefront.
//!
//! The session owns the mutable stores (bag and auth) for one browsing
//! session. It replaces the ambient context providers of a client app
//! with an explicit container handed by reference to whatever needs it,
//! which keeps every store testable in isolation. Nothing here survives
//! the end of the session.

use crate::cart::{Cart, CartItem};
use crate::catalog;
use crate::checkout::CheckoutFlow;
use crate::error::{Result, StorefrontError};
use crate::services::auth::AuthService;

/// One shopper's in-memory session state.
#[derive(Debug, Default, Clone)]
pub struct Session {
    cart: Cart,
    auth: AuthService,
}

impl Session {
    /// Create an empty, signed-out session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The shopping bag.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Mutable access to the shopping bag.
    pub const fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    /// The auth store.
    #[must_use]
    pub const fn auth(&self) -> &AuthService {
        &self.auth
    }

    /// Mutable access to the auth store.
    pub const fn auth_mut(&mut self) -> &mut AuthService {
        &mut self.auth
    }

    /// Look up a product by slug and add it to the bag in the given size.
    ///
    /// # Errors
    ///
    /// [`StorefrontError::NotFound`] when the slug is not in the
    /// catalogue.
    pub fn add_to_bag(&mut self, slug: &str, size: &str, quantity: u32) -> Result<()> {
        let product = catalog::product_by_slug(slug)
            .ok_or_else(|| StorefrontError::NotFound(format!("product {slug}")))?;
        self.cart
            .add_item(CartItem::from_product(product, size, quantity));
        Ok(())
    }

    /// Start a checkout flow prefilled from the signed-in user.
    #[must_use]
    pub fn begin_checkout(&self) -> CheckoutFlow {
        CheckoutFlow::new(self.auth.user())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::checkout::Step;

    #[test]
    fn test_add_to_bag_by_slug() {
        let mut session = Session::new();
        session.add_to_bag("oversized-cotton-tee", "L", 2).unwrap();

        assert_eq!(session.cart().len(), 1);
        assert_eq!(session.cart().item_count(), 2);
        assert!(session.cart().is_open());
    }

    #[test]
    fn test_add_to_bag_unknown_slug() {
        let mut session = Session::new();
        let err = session.add_to_bag("no-such-product", "M", 1).unwrap_err();
        assert!(matches!(err, StorefrontError::NotFound(_)));
        assert!(session.cart().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_begin_checkout_prefills_from_session_user() {
        let mut session = Session::new();
        session
            .auth_mut()
            .sign_in("amara.osei@email.com", "hunter22")
            .await
            .unwrap();

        let flow = session.begin_checkout();
        assert_eq!(flow.step(), Step::Bag);
        assert_eq!(flow.shipping().first_name, "Amara");
        assert_eq!(flow.contact_email(), "amara.osei@email.com");
    }
}
