//! Serde roundtrip and JsonSchema validation for the identity and token shapes.

use pretty_assertions::assert_eq;
use schemars::schema_for;
use tur_core::{Capabilities, Identity, Role, RoleProfile, TokenKind, TokenPayload, TokenPurpose};

fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(recovered, val, "serde roundtrip failed for {}", stringify!($ty));

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    admin_identity_roundtrip,
    Identity,
    Identity {
        id: "1".into(),
        email: "admin@turismo.test".into(),
        name: "Admin".into(),
        avatar: Some("uploads/avatars/1.png".into()),
        phone: None,
        profile: RoleProfile::Admin {
            permissions: vec!["users:read".into(), "categories:write".into()],
        },
    }
);

roundtrip_and_validate!(
    entrepreneur_identity_roundtrip,
    Identity,
    Identity {
        id: "12".into(),
        email: "finca@turismo.test".into(),
        name: "Marta".into(),
        avatar: None,
        phone: Some("3001234567".into()),
        profile: RoleProfile::Entrepreneur {
            business_name: Some("Finca La Esperanza".into()),
        },
    }
);

roundtrip_and_validate!(
    client_identity_roundtrip,
    Identity,
    Identity {
        id: "30".into(),
        email: "cliente@turismo.test".into(),
        name: "Luis".into(),
        avatar: None,
        phone: None,
        profile: RoleProfile::Client { address: None },
    }
);

roundtrip_and_validate!(
    reset_token_payload_roundtrip,
    TokenPayload,
    TokenPayload {
        userid: "42".into(),
        role: None,
        purpose: Some(TokenPurpose::PasswordReset),
        exp: Some(1_900_000_000),
    }
);

#[test]
fn backend_profile_ignores_fields_of_other_roles() {
    let body = serde_json::json!({
        "id": "12",
        "email": "finca@turismo.test",
        "name": "Marta",
        "role": "emprendedor",
        "businessName": "Finca La Esperanza",
        "address": "should be ignored",
        "permissions": ["ignored"]
    });
    let identity: Identity = serde_json::from_value(body).unwrap();
    assert_eq!(identity.role(), Role::Entrepreneur);
    assert_eq!(identity.business_name(), Some("Finca La Esperanza"));
    assert_eq!(identity.address(), None);
    assert!(identity.permissions().is_empty());
}

#[test]
fn profile_with_unknown_role_is_rejected() {
    let body = serde_json::json!({
        "id": "1",
        "email": "x@turismo.test",
        "name": "X",
        "role": "guia"
    });
    assert!(serde_json::from_value::<Identity>(body).is_err());
}

#[test]
fn admin_profile_derives_admin_capabilities() {
    let body = serde_json::json!({
        "id": "1",
        "email": "admin@turismo.test",
        "name": "Admin",
        "role": "administrador"
    });
    let identity: Identity = serde_json::from_value(body).unwrap();
    assert_eq!(
        Capabilities::derive(Some(&identity)),
        Capabilities {
            is_admin: true,
            is_entrepreneur: false,
            is_client: false,
            current_role: Some(Role::Admin),
        }
    );
}

#[test]
fn single_use_payload_without_role_is_single_use() {
    let payload: TokenPayload =
        serde_json::from_value(serde_json::json!({"userid": "42", "purpose": "password_reset"}))
            .unwrap();
    assert_eq!(payload.kind(), TokenKind::SingleUse(TokenPurpose::PasswordReset));
    assert!(payload.into_session().is_err());
}
