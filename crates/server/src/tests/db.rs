use bson::oid::ObjectId;
use once_cell::sync::Lazy;
use tokio::sync::Mutex;

use crate::database::connection::DbConfig;
use crate::database::schema::drop_all;
use crate::database::{DbConnection, ResourceStore};
use crate::error::{StoreError, ValidationError};
use crate::models::resource::{NewResource, ResourceUpdate};

/// Tests share one database, prevent them from breaking each other's state
static SERIAL_LOCK: Lazy<Mutex<()>> = Lazy::new(Mutex::default);

const DEVELOPMENT_URI: &str = "mongodb://localhost:27017/vrs_test";

async fn init_and_get_db() -> DbConnection {
    let _ = tracing_subscriber::fmt::try_init();

    let uri = std::env::var("MONGODB_URI").unwrap_or_else(|_| DEVELOPMENT_URI.to_string());
    let mut config = DbConfig::development(&uri);
    config.collection = Some("resources_test".to_string());
    let db = DbConnection::new(&config);
    drop_all(&db.collection().await.unwrap()).await.unwrap();
    db
}

#[tokio::test]
#[ignore = "requires a running MongoDB server"]
async fn create_list_and_fetch() {
    let _lock = SERIAL_LOCK.lock().await;
    let db = init_and_get_db().await;

    let a = db.create(NewResource::new("A", "PDF")).await.unwrap();
    let b = db.create(NewResource::new("B", "Video")).await.unwrap();
    let c = db.create(NewResource::new("C", "Presentation")).await.unwrap();
    assert_eq!(a.downloads, 0);

    let listed = db.list().await.unwrap();
    assert_eq!(listed, vec![c.clone(), b, a]);

    assert_eq!(db.get(&c.id).await.unwrap(), Some(c));
    assert_eq!(db.get(&ObjectId::new().to_hex()).await.unwrap(), None);
    assert!(matches!(
        db.get("not-an-id").await,
        Err(StoreError::MalformedId(_))
    ));
}

#[tokio::test]
#[ignore = "requires a running MongoDB server"]
async fn invalid_resources_are_not_stored() {
    let _lock = SERIAL_LOCK.lock().await;
    let db = init_and_get_db().await;

    let err = db
        .create(NewResource::new(&"x".repeat(61), "PDF"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(ValidationError::TooLong { .. })
    ));
    assert!(db.list().await.unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires a running MongoDB server"]
async fn update_and_delete() {
    let _lock = SERIAL_LOCK.lock().await;
    let db = init_and_get_db().await;

    let uploader = ObjectId::new().to_hex();
    let created = db
        .create(NewResource::new("Intro to React", "PDF"))
        .await
        .unwrap();

    let updated = db
        .update(
            &created.id,
            ResourceUpdate {
                downloads: Some(1),
                uploaded_by: Some(uploader.clone()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.downloads, 1);
    assert_eq!(updated.uploaded_by, Some(uploader));
    assert_eq!(updated.title, created.title);
    assert_eq!(updated.created_at, created.created_at);

    let unchanged = db
        .update(&created.id, ResourceUpdate::default())
        .await
        .unwrap();
    assert_eq!(unchanged, Some(updated));

    let missing = db
        .update(&ObjectId::new().to_hex(), ResourceUpdate::default())
        .await
        .unwrap();
    assert_eq!(missing, None);

    assert!(db.delete(&created.id).await.unwrap());
    assert!(!db.delete(&created.id).await.unwrap());
    assert_eq!(db.get(&created.id).await.unwrap(), None);
}
