//! Mock auth flows: shape validation, fabricated display names, and
//! session lifecycle.

use fay_integration_tests::init_tracing;
use fay_storefront::services::auth::{AuthError, AuthService};
use fay_storefront::state::Session;

// ============================================================================
// Sign In
// ============================================================================

#[tokio::test(start_paused = true)]
async fn any_well_formed_pair_signs_in() {
    init_tracing();
    let mut auth = AuthService::new();

    // There is no backend: "wrong password" cannot exist.
    let user = auth
        .sign_in("kofi_mensah@example.com", "whatever-password")
        .await
        .expect("shape-valid credentials always succeed");

    assert_eq!(user.first_name, "Kofi");
    assert_eq!(user.last_name, "");
    assert_eq!(user.email.as_str(), "kofi_mensah@example.com");
    assert!(auth.is_authenticated());
}

#[tokio::test(start_paused = true)]
async fn sign_in_validation_matrix() {
    init_tracing();
    let mut auth = AuthService::new();

    assert_eq!(
        auth.sign_in("", "").await,
        Err(AuthError::MissingFields)
    );
    assert_eq!(
        auth.sign_in("amara@email.com", "").await,
        Err(AuthError::MissingFields)
    );
    assert!(matches!(
        auth.sign_in("amara", "hunter22").await,
        Err(AuthError::InvalidEmail(_))
    ));
    assert_eq!(
        auth.sign_in("amara@email.com", "five5").await,
        Err(AuthError::WeakPassword { min: 6 })
    );
    assert!(!auth.is_authenticated());

    // Six characters is the sign-in floor.
    assert!(auth.sign_in("amara@email.com", "sixsix").await.is_ok());
}

// ============================================================================
// Sign Up
// ============================================================================

#[tokio::test(start_paused = true)]
async fn sign_up_keeps_supplied_names() {
    init_tracing();
    let mut auth = AuthService::new();

    let user = auth
        .sign_up("Amara", "Osei", "amara.osei@email.com", "eightchars")
        .await
        .expect("shape-valid registration succeeds");

    assert_eq!(user.first_name, "Amara");
    assert_eq!(user.last_name, "Osei");
}

#[tokio::test(start_paused = true)]
async fn sign_up_has_a_stricter_password_floor() {
    init_tracing();
    let mut auth = AuthService::new();

    // Seven characters passes sign-in but not sign-up.
    assert_eq!(
        auth.sign_up("Amara", "Osei", "amara@email.com", "seven77").await,
        Err(AuthError::WeakPassword { min: 8 })
    );
    assert!(
        auth.sign_in("amara@email.com", "seven77").await.is_ok()
    );
}

// ============================================================================
// Session Lifecycle
// ============================================================================

#[tokio::test(start_paused = true)]
async fn sign_out_ends_the_session_but_keeps_the_bag() {
    init_tracing();
    let mut session = Session::new();
    session
        .add_to_bag("wool-cashmere-scarf", "One Size", 1)
        .expect("catalogue has the scarf");
    session
        .auth_mut()
        .sign_in("amara@email.com", "hunter22")
        .await
        .expect("valid credentials");

    session.auth_mut().sign_out();

    assert!(!session.auth().is_authenticated());
    assert_eq!(session.cart().item_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn signing_in_again_replaces_the_user() {
    init_tracing();
    let mut auth = AuthService::new();

    auth.sign_in("first@example.com", "hunter22")
        .await
        .expect("valid credentials");
    auth.sign_in("second@example.com", "hunter22")
        .await
        .expect("valid credentials");

    let user = auth.user().expect("signed in");
    assert_eq!(user.email.as_str(), "second@example.com");
}
