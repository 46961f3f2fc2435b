use crate::{AuthError, SessionClaims, SessionIssuer};

use warden_core::AuthenticatedIdentity;

use googletest::prelude::*;
use uuid::Uuid;

fn identity(image: Option<&str>) -> AuthenticatedIdentity {
    AuthenticatedIdentity {
        id: Uuid::new_v4(),
        email: "a@x.com".to_string(),
        name: Some("Ada".to_string()),
        image: image.map(str::to_string),
    }
}

#[test]
fn given_identity_when_issued_then_claims_copy_fields_verbatim() {
    let source = identity(Some("https://img/a.png"));

    let claims = SessionIssuer::new().issue(&source);

    assert_that!(claims.id, eq(&source.id.to_string()));
    assert_that!(claims.email, eq("a@x.com"));
    assert_that!(claims.name, some(eq("Ada")));
    assert_that!(claims.image, some(eq("https://img/a.png")));
}

#[test]
fn given_claims_when_viewed_then_identity_fields_preserved() {
    let issuer = SessionIssuer::new();
    let source = identity(Some("https://img/a.png"));

    let view = issuer.to_session_view(&issuer.issue(&source));

    assert_that!(view.user.id, eq(&source.id.to_string()));
    assert_that!(view.user.email, eq("a@x.com"));
    assert_that!(view.user.name, some(eq("Ada")));
    assert_that!(view.user.image, some(eq("https://img/a.png")));
}

#[test]
fn given_empty_or_missing_image_when_viewed_then_image_omitted() {
    let issuer = SessionIssuer::new();

    for image in [None, Some("")] {
        let view = issuer.to_session_view(&issuer.issue(&identity(image)));
        assert_that!(view.user.image, none());

        let json = serde_json::to_value(&view).unwrap();
        assert!(json["user"].get("image").is_none());
    }
}

#[test]
fn given_empty_id_or_email_when_validated_then_invalid_claim() {
    let claims = SessionIssuer::new().issue(&identity(None));

    let no_id = SessionClaims {
        id: String::new(),
        ..claims.clone()
    };
    let no_email = SessionClaims {
        email: String::new(),
        ..claims.clone()
    };

    assert!(claims.validate().is_ok());
    assert!(matches!(
        no_id.validate(),
        Err(AuthError::InvalidClaim { ref claim, .. }) if claim == "id"
    ));
    assert!(matches!(
        no_email.validate(),
        Err(AuthError::InvalidClaim { ref claim, .. }) if claim == "email"
    ));
}
