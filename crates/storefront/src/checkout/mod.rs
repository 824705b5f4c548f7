//! Checkout flow state machine.
//!
//! Steps run Bag -> Shipping -> Payment -> Review. Forward transitions
//! are gated on the current step's validation; backward navigation is
//! always permitted, never validated, and never discards entered values.
//! Placing the order is the terminal transition: it clears the bag and
//! yields an [`OrderConfirmation`], after which the flow is done and the
//! surface navigates away.
//!
//! Validation failures are recorded as a single message on the flow (a
//! new failure replaces any prior one) and also returned as typed
//! errors, so a driving surface can render inline copy while tests match
//! on variants.

use core::fmt;
use std::time::Duration;

use chrono::{Datelike, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use fay_core::Price;

use crate::cart::Cart;
use crate::services::auth::User;

/// Simulated payment-processing latency for order placement.
pub const PLACE_ORDER_DELAY: Duration = Duration::from_millis(1500);

/// Digits required of a card number.
const CARD_NUMBER_DIGITS: usize = 16;
/// Minimum digits required of a CVC.
const MIN_CVC_DIGITS: usize = 3;

/// Ordered checkout steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Step {
    Bag,
    Shipping,
    Payment,
    Review,
}

impl Step {
    /// Steps in flow order.
    pub const ALL: [Self; 4] = [Self::Bag, Self::Shipping, Self::Payment, Self::Review];

    /// Position within the flow, for progress displays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Bag => 0,
            Self::Shipping => 1,
            Self::Payment => 2,
            Self::Review => 3,
        }
    }

    /// The step before this one, if any.
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::Bag => None,
            Self::Shipping => Some(Self::Bag),
            Self::Payment => Some(Self::Shipping),
            Self::Review => Some(Self::Payment),
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bag => "Bag",
            Self::Shipping => "Shipping",
            Self::Payment => "Payment",
            Self::Review => "Review",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Delivery options offered during the shipping step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Delivery {
    #[default]
    Standard,
    Express,
}

impl Delivery {
    /// Options in display order.
    pub const ALL: [Self; 2] = [Self::Standard, Self::Express];

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Standard => "Standard Delivery",
            Self::Express => "Express Delivery",
        }
    }

    /// Delivery window copy.
    #[must_use]
    pub const fn window(self) -> &'static str {
        match self {
            Self::Standard => "5\u{2013}7 business days",
            Self::Express => "2\u{2013}3 business days",
        }
    }

    /// Flat delivery cost.
    #[must_use]
    pub fn cost(self) -> Price {
        match self {
            Self::Standard => Price::ZERO,
            Self::Express => Price::from_units(25),
        }
    }
}

/// Shipping form fields.
///
/// Plain transient form state: whatever was entered survives backward
/// navigation and is discarded with the flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub apartment: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

impl ShippingData {
    /// Required fields: everything except phone and apartment.
    fn has_required_fields(&self) -> bool {
        !self.first_name.is_empty()
            && !self.last_name.is_empty()
            && !self.email.is_empty()
            && !self.address.is_empty()
            && !self.city.is_empty()
            && !self.state.is_empty()
            && !self.postal_code.is_empty()
    }
}

/// Payment form fields, stored in display format.
///
/// Inputs are fed through the flow's setters, which normalize
/// continuously as the shopper types; the stored card number is grouped
/// by four, the expiry is `MM/YY`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentData {
    pub card_number: String,
    pub card_name: String,
    pub expiry: String,
    pub cvc: String,
}

/// Validation failures raised by checkout transitions.
///
/// Each variant's message is the inline copy shown for the failing step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// Guest gate email is empty or has no @ symbol.
    #[error("Please enter a valid email address.")]
    InvalidGuestEmail,
    /// A required shipping field is empty.
    #[error("Please fill in all required fields.")]
    IncompleteShipping,
    /// A payment field is empty.
    #[error("Please fill in all payment fields.")]
    IncompletePayment,
    /// Card number has fewer than 16 digits.
    #[error("Please enter a valid card number.")]
    InvalidCardNumber,
    /// Expiry is not MM/YY shaped.
    #[error("Please enter expiry as MM/YY.")]
    InvalidExpiry,
    /// CVC has fewer than 3 digits.
    #[error("Please enter a valid CVC.")]
    InvalidCvc,
}

/// Result of a successfully placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    /// Confirmation number shown to the shopper, e.g. `FAY-20261234`.
    pub order_number: String,
    /// Contact email the confirmation copy is addressed to.
    pub email: String,
    /// Units across all lines at placement time.
    pub item_count: u32,
    /// Charged total including delivery.
    pub total: Price,
}

/// Multi-step checkout state machine.
///
/// Create one per checkout attempt via [`CheckoutFlow::new`] (or
/// [`CheckoutFlow::without_bag`] for surfaces that treat the bag as
/// implicit and start at shipping). The flow reads the bag it is handed
/// but owns no other state; drop it to abandon the checkout.
#[derive(Debug, Clone)]
pub struct CheckoutFlow {
    step: Step,
    gate_open: bool,
    guest_email: String,
    shipping: ShippingData,
    payment: PaymentData,
    delivery: Delivery,
    error: Option<CheckoutError>,
    placing: bool,
}

impl CheckoutFlow {
    /// Begin a checkout at the bag step, prefilled from the signed-in
    /// user when there is one.
    #[must_use]
    pub fn new(user: Option<&User>) -> Self {
        let mut shipping = ShippingData {
            country: "Ghana".to_owned(),
            ..ShippingData::default()
        };
        if let Some(user) = user {
            shipping.first_name = user.first_name.clone();
            shipping.last_name = user.last_name.clone();
            shipping.email = user.email.to_string();
        }
        Self {
            step: Step::Bag,
            gate_open: false,
            guest_email: String::new(),
            shipping,
            payment: PaymentData::default(),
            delivery: Delivery::default(),
            error: None,
            placing: false,
        }
    }

    /// Begin at the shipping step, for surfaces where the bag review is
    /// implicit. Guests must still have supplied a contact email before
    /// shipping validation passes.
    #[must_use]
    pub fn without_bag(user: Option<&User>) -> Self {
        let mut flow = Self::new(user);
        flow.step = Step::Shipping;
        flow
    }

    // =========================================================================
    // State accessors
    // =========================================================================

    /// Current step.
    #[must_use]
    pub const fn step(&self) -> Step {
        self.step
    }

    /// Whether the guest-or-signin gate overlay is showing.
    #[must_use]
    pub const fn is_gate_open(&self) -> bool {
        self.gate_open
    }

    /// Last validation failure, until the next successful transition.
    #[must_use]
    pub const fn error(&self) -> Option<&CheckoutError> {
        self.error.as_ref()
    }

    /// Inline message for the last validation failure.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    /// Whether an order placement is in flight; the driving surface
    /// disables its controls while this is set.
    #[must_use]
    pub const fn is_placing(&self) -> bool {
        self.placing
    }

    /// Shipping form state.
    #[must_use]
    pub const fn shipping(&self) -> &ShippingData {
        &self.shipping
    }

    /// Mutable shipping form state; edits survive navigation.
    pub const fn shipping_mut(&mut self) -> &mut ShippingData {
        &mut self.shipping
    }

    /// Payment form state.
    #[must_use]
    pub const fn payment(&self) -> &PaymentData {
        &self.payment
    }

    /// Contact email for the order: the prefilled account email for
    /// signed-in shoppers, the gate email for guests.
    #[must_use]
    pub fn contact_email(&self) -> &str {
        &self.shipping.email
    }

    /// Selected delivery option.
    #[must_use]
    pub const fn delivery(&self) -> Delivery {
        self.delivery
    }

    /// Buffered guest email, as typed at the gate.
    #[must_use]
    pub fn guest_email(&self) -> &str {
        &self.guest_email
    }

    // =========================================================================
    // Field input
    // =========================================================================

    /// Buffer the guest email as typed; validated on
    /// [`Self::continue_as_guest`].
    pub fn set_guest_email(&mut self, email: impl Into<String>) {
        self.guest_email = email.into();
    }

    /// Choose a delivery option; the cost carries through payment and
    /// review unchanged.
    pub fn select_delivery(&mut self, delivery: Delivery) {
        self.delivery = delivery;
    }

    /// Set the card number from raw input: non-digits stripped,
    /// truncated to 16 digits, grouped by four.
    pub fn set_card_number(&mut self, raw: &str) {
        self.payment.card_number = format_card_number(raw);
    }

    /// Set the name on the card verbatim.
    pub fn set_card_name(&mut self, raw: impl Into<String>) {
        self.payment.card_name = raw.into();
    }

    /// Set the expiry from raw input: non-digits stripped, truncated to
    /// four digits, slash inserted after the month.
    pub fn set_expiry(&mut self, raw: &str) {
        self.payment.expiry = format_expiry(raw);
    }

    /// Set the CVC from raw input: non-digits stripped, truncated to
    /// four digits.
    pub fn set_cvc(&mut self, raw: &str) {
        self.payment.cvc = format_cvc(raw);
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Leave the bag step: signed-in shoppers go straight to shipping,
    /// guests see the guest-or-signin gate. No effect off the bag step.
    pub fn proceed_from_bag(&mut self, authenticated: bool) {
        if self.step != Step::Bag {
            return;
        }
        if authenticated {
            self.advance_to(Step::Shipping);
        } else {
            self.gate_open = true;
            debug!("opened guest checkout gate");
        }
    }

    /// Continue from the gate as a guest, using the buffered email as
    /// the order contact.
    ///
    /// # Errors
    ///
    /// [`CheckoutError::InvalidGuestEmail`] when the trimmed email is
    /// empty or has no @ symbol; the gate stays open and the message is
    /// recorded on the flow.
    pub fn continue_as_guest(&mut self) -> Result<(), CheckoutError> {
        let email = self.guest_email.trim().to_owned();
        if email.is_empty() || !email.contains('@') {
            return Err(self.fail(CheckoutError::InvalidGuestEmail));
        }
        self.shipping.email = email;
        self.gate_open = false;
        self.advance_to(Step::Shipping);
        Ok(())
    }

    /// Close the gate and stay on the bag step, clearing any gate error.
    pub fn close_gate(&mut self) {
        self.gate_open = false;
        self.error = None;
    }

    /// Validate the shipping form and advance to payment. No effect off
    /// the shipping step.
    ///
    /// # Errors
    ///
    /// [`CheckoutError::IncompleteShipping`] when any required field
    /// (first name, last name, email, address, city, state, postal code)
    /// is empty.
    pub fn submit_shipping(&mut self) -> Result<(), CheckoutError> {
        if self.step != Step::Shipping {
            return Ok(());
        }
        if !self.shipping.has_required_fields() {
            return Err(self.fail(CheckoutError::IncompleteShipping));
        }
        self.advance_to(Step::Payment);
        Ok(())
    }

    /// Validate the payment form and advance to review. No effect off
    /// the payment step.
    ///
    /// # Errors
    ///
    /// [`CheckoutError::IncompletePayment`] when any field is empty;
    /// [`CheckoutError::InvalidCardNumber`] under 16 digits;
    /// [`CheckoutError::InvalidExpiry`] when not MM/YY shaped (shape
    /// only - `13/25` passes, calendar plausibility is deliberately not
    /// checked); [`CheckoutError::InvalidCvc`] under 3 digits.
    pub fn submit_payment(&mut self) -> Result<(), CheckoutError> {
        if self.step != Step::Payment {
            return Ok(());
        }
        if self.payment.card_number.is_empty()
            || self.payment.card_name.is_empty()
            || self.payment.expiry.is_empty()
            || self.payment.cvc.is_empty()
        {
            return Err(self.fail(CheckoutError::IncompletePayment));
        }
        if digit_count(&self.payment.card_number) < CARD_NUMBER_DIGITS {
            return Err(self.fail(CheckoutError::InvalidCardNumber));
        }
        if !is_valid_expiry(&self.payment.expiry) {
            return Err(self.fail(CheckoutError::InvalidExpiry));
        }
        if digit_count(&self.payment.cvc) < MIN_CVC_DIGITS {
            return Err(self.fail(CheckoutError::InvalidCvc));
        }
        self.advance_to(Step::Review);
        Ok(())
    }

    /// Step back one step. Never validates, never clears entered values.
    pub fn go_back(&mut self) {
        if let Some(previous) = self.step.previous() {
            self.error = None;
            debug!(from = %self.step, to = %previous, "stepped back");
            self.step = previous;
        }
    }

    /// Jump back to an earlier (or the current) step, as the review
    /// screen's edit actions do. Forward jumps are ignored - forward
    /// movement always goes through the submit transitions.
    pub fn go_to(&mut self, step: Step) {
        if step <= self.step {
            self.error = None;
            self.step = step;
        }
    }

    // =========================================================================
    // Totals
    // =========================================================================

    /// Whether the empty-bag terminal view should replace the flow: the
    /// bag is empty and no placement is in flight.
    #[must_use]
    pub fn is_empty_bag(&self, cart: &Cart) -> bool {
        cart.is_empty() && !self.placing
    }

    /// Delivery cost for the selected option.
    #[must_use]
    pub fn shipping_cost(&self) -> Price {
        self.delivery.cost()
    }

    /// Bag total plus delivery cost.
    #[must_use]
    pub fn order_total(&self, cart: &Cart) -> Price {
        cart.total() + self.shipping_cost()
    }

    // =========================================================================
    // Placement
    // =========================================================================

    /// Place the order from the review step: simulate processing for
    /// [`PLACE_ORDER_DELAY`], clear the bag, and return the
    /// confirmation the surface navigates to.
    ///
    /// Placement cannot fail: once review is reached the order always
    /// goes through. A real payment integration would surface decline,
    /// network, and inventory outcomes here; the mock deliberately has
    /// no such branch.
    pub async fn place_order(&mut self, cart: &mut Cart) -> OrderConfirmation {
        self.placing = true;
        debug!("placing order");
        tokio::time::sleep(PLACE_ORDER_DELAY).await;

        let confirmation = OrderConfirmation {
            order_number: order_number(),
            email: self.shipping.email.clone(),
            item_count: cart.item_count(),
            total: self.order_total(cart),
        };
        cart.clear();
        info!(
            order_number = %confirmation.order_number,
            total = %confirmation.total,
            "order placed"
        );
        confirmation
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn advance_to(&mut self, step: Step) {
        self.error = None;
        debug!(from = %self.step, to = %step, "advanced checkout");
        self.step = step;
    }

    fn fail(&mut self, error: CheckoutError) -> CheckoutError {
        debug!(%error, step = %self.step, "checkout validation failed");
        self.error = Some(error.clone());
        error
    }
}

// =============================================================================
// Input formatting
// =============================================================================

/// Normalize raw card-number input: strip non-digits, truncate to 16
/// digits, insert a space after every fourth digit.
#[must_use]
pub fn format_card_number(raw: &str) -> String {
    let mut out = String::with_capacity(CARD_NUMBER_DIGITS + 3);
    for (i, c) in raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(CARD_NUMBER_DIGITS)
        .enumerate()
    {
        if i > 0 && i % 4 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// Normalize raw expiry input: strip non-digits, truncate to four
/// digits, insert the slash once the month is complete.
#[must_use]
pub fn format_expiry(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).take(4).collect();
    if digits.len() > 2 {
        let (month, year) = digits.split_at(2);
        format!("{month}/{year}")
    } else {
        digits
    }
}

/// Normalize raw CVC input: strip non-digits, truncate to four digits.
#[must_use]
pub fn format_cvc(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).take(4).collect()
}

fn digit_count(s: &str) -> usize {
    s.chars().filter(char::is_ascii_digit).count()
}

/// Shape check only: two digits, a slash, two digits. `13/25` passes;
/// calendar plausibility is not this flow's concern.
fn is_valid_expiry(expiry: &str) -> bool {
    let mut chars = expiry.chars();
    matches!(
        (
            chars.next(),
            chars.next(),
            chars.next(),
            chars.next(),
            chars.next(),
            chars.next(),
        ),
        (Some(m1), Some(m2), Some('/'), Some(y1), Some(y2), None)
            if m1.is_ascii_digit() && m2.is_ascii_digit()
                && y1.is_ascii_digit() && y2.is_ascii_digit()
    )
}

/// Confirmation number in the brand's `FAY-<year><4 digits>` format.
fn order_number() -> String {
    let year = Utc::now().year();
    let suffix = rand::rng().random_range(1000..10_000);
    format!("FAY-{year}{suffix}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_format_card_number_groups_by_four() {
        assert_eq!(
            format_card_number("4111111111111111extra"),
            "4111 1111 1111 1111"
        );
        assert_eq!(format_card_number("4111-1111-2222"), "4111 1111 2222");
        assert_eq!(format_card_number("41"), "41");
        assert_eq!(format_card_number(""), "");
    }

    #[test]
    fn test_format_expiry_inserts_slash() {
        assert_eq!(format_expiry("1225"), "12/25");
        assert_eq!(format_expiry("122"), "12/2");
        assert_eq!(format_expiry("12"), "12");
        assert_eq!(format_expiry("1"), "1");
        assert_eq!(format_expiry("12/25"), "12/25");
        assert_eq!(format_expiry("122534"), "12/25");
    }

    #[test]
    fn test_format_cvc_strips_and_truncates() {
        assert_eq!(format_cvc("12a34b56"), "1234");
        assert_eq!(format_cvc("777"), "777");
    }

    #[test]
    fn test_expiry_shape_check() {
        assert!(is_valid_expiry("12/25"));
        // Shape only: an implausible month still passes.
        assert!(is_valid_expiry("13/25"));
        assert!(!is_valid_expiry("1/25"));
        assert!(!is_valid_expiry("12/2"));
        assert!(!is_valid_expiry("1225"));
        assert!(!is_valid_expiry("12/255"));
        assert!(!is_valid_expiry(""));
    }

    #[test]
    fn test_step_order() {
        assert_eq!(Step::Bag.previous(), None);
        assert_eq!(Step::Review.previous(), Some(Step::Payment));
        assert!(Step::Bag < Step::Review);
        assert_eq!(Step::Payment.index(), 2);
    }

    #[test]
    fn test_delivery_costs() {
        assert!(Delivery::Standard.cost().is_zero());
        assert_eq!(Delivery::Express.cost(), Price::from_units(25));
    }

    #[test]
    fn test_order_number_format() {
        let number = order_number();
        let year = Utc::now().year().to_string();
        assert!(number.starts_with(&format!("FAY-{year}")));
        assert_eq!(number.len(), 4 + year.len() + 4);
    }

    #[test]
    fn test_prefill_from_user() {
        let user = User {
            first_name: "Amara".to_owned(),
            last_name: "Osei".to_owned(),
            email: "amara.osei@email.com".parse().unwrap(),
        };
        let flow = CheckoutFlow::new(Some(&user));
        assert_eq!(flow.shipping().first_name, "Amara");
        assert_eq!(flow.shipping().email, "amara.osei@email.com");
        assert_eq!(flow.shipping().country, "Ghana");
        assert_eq!(flow.contact_email(), "amara.osei@email.com");
    }

    #[test]
    fn test_without_bag_starts_at_shipping() {
        let flow = CheckoutFlow::without_bag(None);
        assert_eq!(flow.step(), Step::Shipping);
    }
}
