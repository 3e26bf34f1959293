//! Contract Test: Credential Store
//!
//! Constraints verified:
//! - save() followed by load() returns an equal credential
//! - load() of a missing file is an Io error rendered as a failure envelope
//! - A failed load leaves the context unready

use cfcli_core::config::Credential;
use cfcli_core::envelope::Envelope;
use cfcli_core::store::FileCredentialStore;
use cfcli_core::traits::CredentialStore;
use cfcli_core::{Context, Error};
use tempfile::tempdir;

#[tokio::test]
async fn save_then_load_round_trips() {
    let dir = tempdir().unwrap();
    let store = FileCredentialStore::new(dir.path().join(".cf_cli_config"));

    let credential = Credential::new("dns-admin@example.com", "c2547eb745079dac9320b638f5e225cf483cc5cfdda41");
    store.save(&credential).await.unwrap();

    let loaded = store.load().await.unwrap();
    assert_eq!(loaded.auth_email, credential.auth_email);
    assert_eq!(loaded.auth_key, credential.auth_key);
}

#[tokio::test]
async fn saved_file_uses_fixed_key_names() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".cf_cli_config");
    FileCredentialStore::new(&path)
        .save(&Credential::new("user@example.com", "key"))
        .await
        .unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["x_auth_email"], "user@example.com");
    assert_eq!(raw["x_auth_key"], "key");
}

#[tokio::test]
async fn missing_file_fails_with_io_and_renders_failure() {
    let dir = tempdir().unwrap();
    let store = FileCredentialStore::new(dir.path().join("does-not-exist"));

    let err = store.load().await.unwrap_err();
    assert!(matches!(err, Error::Io(_)));

    let envelope = Envelope::from_error(&err);
    assert!(!envelope.success);
    assert!(!envelope.errors[0].message.is_empty());

    let json: serde_json::Value = serde_json::from_str(&envelope.to_json()).unwrap();
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn failed_load_leaves_context_unready() {
    let dir = tempdir().unwrap();
    let store = FileCredentialStore::new(dir.path().join("does-not-exist"));

    let context = Context::load(&store).await;
    assert!(!context.is_ready());
}
