//! HTTP integration tests over a real ephemeral server

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use uuid::Uuid;

use agencia_core::{AgencyService, InMemoryRegistry, OsRandom, RegistrationForm};
use agencia_http::{router, AgenciaClient, AppState, ClientError};
use agencia_qr::FsArtifactStore;

/// Start a server backed by a fresh registry and a temp QR directory.
///
/// The tempdir guard is returned so the artifact directory outlives the
/// test body.
async fn start_test_server() -> (SocketAddr, tempfile::TempDir) {
    let qr_dir = tempfile::tempdir().unwrap();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let service = AgencyService::new(
        Arc::new(InMemoryRegistry::new()),
        Arc::new(FsArtifactStore::new(qr_dir.path())),
        Arc::new(OsRandom),
        format!("http://{addr}"),
    );
    let app = router(AppState::new(Arc::new(service)));

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // Give the server a moment to start
    tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

    (addr, qr_dir)
}

fn sample_form() -> RegistrationForm {
    RegistrationForm::new("Aventuras Colombia Ltda", "900123456-1", "RNT-12345")
}

#[tokio::test]
async fn test_register_verify_roundtrip() {
    let (addr, _qr_dir) = start_test_server().await;
    let client = AgenciaClient::new(format!("http://{addr}"));

    let registered = client.register(&sample_form()).await.unwrap();

    assert_eq!(registered.id.to_string().len(), 36);
    assert_eq!(registered.certificate.len(), 64);
    assert!(registered
        .verification_url
        .ends_with(&format!("/verificar_agencia/{}", registered.id)));

    let page = client.verify(registered.id).await.unwrap();
    assert!(page.verified);
    assert!(page.html.contains("900123456-1"));
    assert!(page.html.contains("RNT-12345"));
}

#[tokio::test]
async fn test_unknown_id_gets_fraud_warning_404() {
    let (addr, _qr_dir) = start_test_server().await;
    let client = AgenciaClient::new(format!("http://{addr}"));

    let page = client.verify(Uuid::new_v4()).await.unwrap();

    assert!(!page.verified);
    assert!(page.html.contains("POSIBLE FRAUDE"));
}

#[tokio::test]
async fn test_duplicate_nit_is_409() {
    let (addr, _qr_dir) = start_test_server().await;
    let client = AgenciaClient::new(format!("http://{addr}"));

    client.register(&sample_form()).await.unwrap();
    let err = client
        .register(&RegistrationForm::new(
            "Otro Nombre",
            "900123456-1",
            "RNT-99999",
        ))
        .await
        .unwrap_err();

    match err {
        ClientError::Api { status, .. } => assert_eq!(status, 409),
        other => panic!("expected API error, got {other:?}"),
    }

    let listing = client.list().await.unwrap();
    assert_eq!(listing.total, 1);
    assert_eq!(listing.agencies[0].name, "Aventuras Colombia Ltda");
}

#[tokio::test]
async fn test_missing_field_is_400() {
    let (addr, _qr_dir) = start_test_server().await;
    let client = AgenciaClient::new(format!("http://{addr}"));

    let err = client
        .register(&RegistrationForm {
            name: Some("Sin NIT".to_string()),
            nit: None,
            rnt: Some("RNT-1".to_string()),
        })
        .await
        .unwrap_err();

    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 400);
            assert!(message.contains("nit"));
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_qr_bytes_stable_and_regenerated_after_cache_loss() {
    let (addr, qr_dir) = start_test_server().await;
    let client = AgenciaClient::new(format!("http://{addr}"));

    let registered = client.register(&sample_form()).await.unwrap();

    let first = client.qr_png(registered.id).await.unwrap();
    let second = client.qr_png(registered.id).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(&first[..8], b"\x89PNG\r\n\x1a\n");

    // Remove the backing file: the next request regenerates an identical
    // artifact from the record.
    let path = qr_dir.path().join(format!("{}.png", registered.id));
    assert!(path.is_file());
    std::fs::remove_file(&path).unwrap();

    let regenerated = client.qr_png(registered.id).await.unwrap();
    assert_eq!(first, regenerated);
}

#[tokio::test]
async fn test_qr_for_unknown_id_is_404() {
    let (addr, _qr_dir) = start_test_server().await;
    let client = AgenciaClient::new(format!("http://{addr}"));

    let err = client.qr_png(Uuid::new_v4()).await.unwrap_err();
    match err {
        ClientError::Api { status, .. } => assert_eq!(status, 404),
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_listing_has_no_certificates() {
    let (addr, _qr_dir) = start_test_server().await;
    let client = AgenciaClient::new(format!("http://{addr}"));

    for i in 0..2 {
        client
            .register(&RegistrationForm::new(
                format!("Agencia {i}"),
                format!("900-{i}"),
                format!("RNT-{i}"),
            ))
            .await
            .unwrap();
    }

    // Hit the endpoint raw to assert on the exact JSON shape.
    let body: serde_json::Value = reqwest::get(format!("http://{addr}/api/agencias"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["total"], 2);
    for agencia in body["agencias"].as_array().unwrap() {
        assert!(agencia.get("certificado").is_none());
        assert!(agencia.get("nombre").is_some());
        assert!(agencia.get("fecha_registro").is_some());
    }
}

#[tokio::test]
async fn test_home_page_serves_registration_form() {
    let (addr, _qr_dir) = start_test_server().await;

    let response = reqwest::get(format!("http://{addr}/")).await.unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let html = response.text().await.unwrap();
    assert!(html.contains("registroForm"));
}
