//! Database-backed repository tests
//!
//! Each test runs against a fresh database provisioned by `#[sqlx::test]`
//! with the workspace migrations applied.

use sqlx::PgPool;
use timekeeper_artifacts::{ArchiveRepositories, Artifact, ArtifactDetails};
use uuid::Uuid;

fn sample_artifact(name: &str, adder_email: &str) -> Artifact {
    Artifact::new(
        ArtifactDetails {
            name: Some(name.to_string()),
            ..Default::default()
        },
        None,
        adder_email.to_string(),
    )
}

/// An artifact carrying `likes` pre-existing likers, invariant intact
fn liked_artifact(name: &str, likes: usize) -> Artifact {
    let mut artifact = sample_artifact(name, "curator@example.com");
    artifact.like_count = likes as i64;
    artifact.liked_by = if likes == 0 {
        None
    } else {
        Some((0..likes).map(|n| format!("fan{n}@example.com")).collect())
    };
    artifact
}

mod toggle {
    use super::*;

    #[sqlx::test(migrations = "../../migrations")]
    async fn toggle_twice_returns_artifact_to_original_state(pool: PgPool) {
        let repos = ArchiveRepositories::new(pool);
        let created = repos
            .artifacts
            .create(&sample_artifact("Rosetta Stone", "curator@example.com"))
            .await
            .unwrap();

        let liked = repos
            .artifacts
            .toggle_like(created.id, "x@y.com")
            .await
            .unwrap()
            .expect("artifact exists");
        assert_eq!(liked.like_count, 1);
        assert_eq!(liked.liked_by, Some(vec!["x@y.com".to_string()]));

        let unliked = repos
            .artifacts
            .toggle_like(created.id, "x@y.com")
            .await
            .unwrap()
            .expect("artifact exists");
        assert_eq!(unliked.like_count, 0);
        // Emptying the liker set drops it rather than storing an empty array
        assert!(unliked.liked_by.is_none());

        let row = repos.artifacts.find(created.id).await.unwrap().unwrap();
        assert_eq!(row.like_count, 0);
        assert!(row.liked_by.is_none());
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn counter_matches_liker_set_after_every_toggle(pool: PgPool) {
        let repos = ArchiveRepositories::new(pool);
        let created = repos
            .artifacts
            .create(&sample_artifact("Antikythera Mechanism", "curator@example.com"))
            .await
            .unwrap();

        for email in ["a@example.com", "b@example.com", "c@example.com"] {
            let status = repos
                .artifacts
                .toggle_like(created.id, email)
                .await
                .unwrap()
                .unwrap();
            assert_eq!(
                status.like_count,
                status.liked_by.as_ref().map_or(0, |s| s.len() as i64)
            );
        }

        // Unlike the middle liker; the invariant still holds
        let status = repos
            .artifacts
            .toggle_like(created.id, "b@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(status.like_count, 2);
        assert_eq!(
            status.liked_by,
            Some(vec!["a@example.com".to_string(), "c@example.com".to_string()])
        );
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn relike_after_unlike_does_not_duplicate(pool: PgPool) {
        let repos = ArchiveRepositories::new(pool);
        let created = repos
            .artifacts
            .create(&sample_artifact("Dead Sea Scrolls", "curator@example.com"))
            .await
            .unwrap();

        for _ in 0..3 {
            repos
                .artifacts
                .toggle_like(created.id, "x@y.com")
                .await
                .unwrap()
                .unwrap();
        }

        let row = repos.artifacts.find(created.id).await.unwrap().unwrap();
        assert_eq!(row.like_count, 1);
        assert_eq!(row.liked_by, Some(vec!["x@y.com".to_string()]));
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn toggle_on_missing_artifact_returns_none(pool: PgPool) {
        let repos = ArchiveRepositories::new(pool);
        let status = repos
            .artifacts
            .toggle_like(Uuid::new_v4(), "x@y.com")
            .await
            .unwrap();
        assert!(status.is_none());
    }
}

mod listings {
    use super::*;

    async fn seed_with_varied_likes(repos: &ArchiveRepositories, count: usize) {
        for n in 0..count {
            repos
                .artifacts
                .create(&liked_artifact(&format!("Artifact {n}"), n))
                .await
                .unwrap();
        }
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn top_liked_is_capped_and_non_increasing(pool: PgPool) {
        let repos = ArchiveRepositories::new(pool);
        seed_with_varied_likes(&repos, 8).await;

        let top = repos.artifacts.list_top_liked(6).await.unwrap();
        assert_eq!(top.len(), 6);
        assert!(top.windows(2).all(|w| w[0].like_count >= w[1].like_count));
        assert_eq!(top[0].like_count, 7);
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn list_all_is_complete_and_non_decreasing(pool: PgPool) {
        let repos = ArchiveRepositories::new(pool);
        seed_with_varied_likes(&repos, 8).await;

        let all = repos.artifacts.list_all().await.unwrap();
        assert_eq!(all.len(), 8);
        assert!(all.windows(2).all(|w| w[0].like_count <= w[1].like_count));
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn liked_listing_matches_set_membership(pool: PgPool) {
        let repos = ArchiveRepositories::new(pool);
        let a = repos
            .artifacts
            .create(&sample_artifact("Rosetta Stone", "curator@example.com"))
            .await
            .unwrap();
        let b = repos
            .artifacts
            .create(&sample_artifact("Sutton Hoo Helmet", "curator@example.com"))
            .await
            .unwrap();

        repos
            .artifacts
            .toggle_like(a.id, "x@y.com")
            .await
            .unwrap()
            .unwrap();
        repos
            .artifacts
            .toggle_like(b.id, "other@y.com")
            .await
            .unwrap()
            .unwrap();

        let liked = repos.artifacts.list_liked_by("x@y.com").await.unwrap();
        assert_eq!(liked.len(), 1);
        assert_eq!(liked[0].id, a.id);
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn added_listing_filters_by_owner_and_search(pool: PgPool) {
        let repos = ArchiveRepositories::new(pool);
        repos
            .artifacts
            .create(&sample_artifact("Rosetta Stone", "curator@example.com"))
            .await
            .unwrap();
        repos
            .artifacts
            .create(&sample_artifact("Dead Sea Scrolls", "curator@example.com"))
            .await
            .unwrap();
        repos
            .artifacts
            .create(&sample_artifact("Rosetta Replica", "someone-else@example.com"))
            .await
            .unwrap();

        let mine = repos
            .artifacts
            .list_by_adder("curator@example.com", None)
            .await
            .unwrap();
        assert_eq!(mine.len(), 2);

        // Case-insensitive substring match
        let filtered = repos
            .artifacts
            .list_by_adder("curator@example.com", Some("rosetta"))
            .await
            .unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name.as_deref(), Some("Rosetta Stone"));
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn search_term_wildcards_match_literally(pool: PgPool) {
        let repos = ArchiveRepositories::new(pool);
        repos
            .artifacts
            .create(&sample_artifact("100% Genuine Amphora", "curator@example.com"))
            .await
            .unwrap();
        repos
            .artifacts
            .create(&sample_artifact("1000 Year Old Amphora", "curator@example.com"))
            .await
            .unwrap();

        // "%" is a literal character, not a wildcard swallowing everything
        let filtered = repos
            .artifacts
            .list_by_adder("curator@example.com", Some("100%"))
            .await
            .unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name.as_deref(), Some("100% Genuine Amphora"));
    }
}

mod upsert_and_delete {
    use super::*;

    #[sqlx::test(migrations = "../../migrations")]
    async fn upsert_with_missing_id_creates_record(pool: PgPool) {
        let repos = ArchiveRepositories::new(pool);
        let id = Uuid::new_v4();

        let details = ArtifactDetails {
            name: Some("Benin Bronze".to_string()),
            artifact_type: Some("Plaque".to_string()),
            ..Default::default()
        };
        let artifact = repos.artifacts.upsert_details(id, &details).await.unwrap();

        assert_eq!(artifact.id, id);
        assert_eq!(artifact.name.as_deref(), Some("Benin Bronze"));
        assert_eq!(artifact.like_count, 0);
        assert!(artifact.liked_by.is_none());

        assert!(repos.artifacts.find(id).await.unwrap().is_some());
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn upsert_replaces_whitelist_fields_only(pool: PgPool) {
        let repos = ArchiveRepositories::new(pool);
        let created = repos
            .artifacts
            .create(&sample_artifact("Rosetta Stone", "curator@example.com"))
            .await
            .unwrap();
        repos
            .artifacts
            .toggle_like(created.id, "x@y.com")
            .await
            .unwrap()
            .unwrap();

        let details = ArtifactDetails {
            name: Some("Rosetta Stone (restored)".to_string()),
            ..Default::default()
        };
        let updated = repos
            .artifacts
            .upsert_details(created.id, &details)
            .await
            .unwrap();

        assert_eq!(updated.name.as_deref(), Some("Rosetta Stone (restored)"));
        // Ownership and like state survive an update
        assert_eq!(updated.adder_email.as_deref(), Some("curator@example.com"));
        assert_eq!(updated.like_count, 1);
        assert_eq!(updated.liked_by, Some(vec!["x@y.com".to_string()]));
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn delete_of_missing_record_acks_zero(pool: PgPool) {
        let repos = ArchiveRepositories::new(pool);
        let deleted = repos.artifacts.delete(Uuid::new_v4()).await.unwrap();
        assert_eq!(deleted, 0);
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn delete_removes_the_record(pool: PgPool) {
        let repos = ArchiveRepositories::new(pool);
        let created = repos
            .artifacts
            .create(&sample_artifact("Rosetta Stone", "curator@example.com"))
            .await
            .unwrap();

        let deleted = repos.artifacts.delete(created.id).await.unwrap();
        assert_eq!(deleted, 1);
        assert!(repos.artifacts.find(created.id).await.unwrap().is_none());
    }
}

mod contacts {
    use super::*;

    #[sqlx::test(migrations = "../../migrations")]
    async fn contact_submission_is_stored_verbatim(pool: PgPool) {
        let repos = ArchiveRepositories::new(pool.clone());
        let payload = serde_json::json!({
            "name": "A Visitor",
            "message": "How do I donate an artifact?",
        });

        let id = repos.contacts.create(&payload).await.unwrap();

        let stored: (serde_json::Value,) =
            sqlx::query_as("SELECT payload FROM contact_submissions WHERE id = $1")
                .bind(id)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(stored.0, payload);
    }
}
