//! Storage layer tests

#[cfg(test)]
mod tests {
    use crate::config::StorageConfig;
    use crate::core::models::{UserLookup, UserPatch};
    use crate::storage::{MemoryUserStore, UserStore, connect};
    use crate::utils::error::AuthError;
    use std::sync::Arc;

    async fn exercise_store(store: Arc<dyn UserStore>) {
        assert_eq!(store.count().await.unwrap(), 0);

        let bob = store.insert("bob@example.com", "hash-b").await.unwrap();
        let amy = store.insert("amy@example.com", "hash-a").await.unwrap();
        assert_ne!(bob.id, amy.id);
        assert_eq!(bob.id.len(), 36);
        assert_eq!(store.count().await.unwrap(), 2);

        // Duplicate email
        let dup = store.insert("bob@example.com", "other").await;
        assert!(matches!(dup, Err(AuthError::AlreadyExists(_))));
        assert_eq!(store.count().await.unwrap(), 2);

        let found = store
            .find(UserLookup::Email("bob@example.com".into()))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found, bob);
        assert!(
            store
                .find(UserLookup::Email("nobody@example.com".into()))
                .await
                .unwrap()
                .is_none()
        );

        // Set then look up by the nullable columns
        store
            .update(
                &bob.id,
                UserPatch::new()
                    .session_id(Some("sid-1".into()))
                    .reset_token(Some("tok-1".into())),
            )
            .await
            .unwrap();
        let by_session = store
            .find(UserLookup::SessionId("sid-1".into()))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_session.id, bob.id);
        let by_token = store
            .find(UserLookup::ResetToken("tok-1".into()))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_token.id, bob.id);

        // Clearing only touches the named column
        store
            .update(&bob.id, UserPatch::new().reset_token(None).hashed_password("hash-b2"))
            .await
            .unwrap();
        let bob = store
            .find(UserLookup::Id(bob.id.clone()))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(bob.hashed_password, "hash-b2");
        assert!(bob.reset_token.is_none());
        assert_eq!(bob.session_id.as_deref(), Some("sid-1"));

        let amy = store
            .find(UserLookup::Id(amy.id.clone()))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(amy.hashed_password, "hash-a");
        assert!(amy.session_id.is_none());

        let missing = store.update("no-such-id", UserPatch::new().reset_token(None)).await;
        assert!(matches!(missing, Err(AuthError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_memory_store() {
        exercise_store(Arc::new(MemoryUserStore::new())).await;
    }

    #[tokio::test]
    async fn test_connect_without_url_uses_memory() {
        let store = connect(&StorageConfig::default()).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[cfg(feature = "sqlite")]
    #[tokio::test]
    async fn test_database_store_sqlite() {
        let config = StorageConfig {
            database_url: Some("sqlite::memory:".to_string()),
            max_connections: 1,
            ..StorageConfig::default()
        };
        let store = connect(&config).await.unwrap();
        exercise_store(store).await;
    }

    #[cfg(feature = "sqlite")]
    #[tokio::test]
    async fn test_database_migrate_is_repeatable() {
        let config = StorageConfig {
            database_url: Some("sqlite::memory:".to_string()),
            max_connections: 1,
            ..StorageConfig::default()
        };
        let url = config.database_url.clone().unwrap();
        let database = crate::storage::Database::new(&url, &config).await.unwrap();
        database.migrate().await.unwrap();
        database.migrate().await.unwrap();
        database.health_check().await.unwrap();
        assert_eq!(
            database.backend_type(),
            crate::storage::database::seaorm_db::DatabaseBackendType::SQLite
        );
    }
}
