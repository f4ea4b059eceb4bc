//! Integration tests for the playlist store
//!
//! Tests the durable mutation layer end to end over real files:
//! - CRUD with per-user partitioning
//! - Cross-playlist dedup under the per-user critical section
//! - Idempotent removal and rating bounds
//! - The favorited read-side query


use test_helpers::*;
use tubedeck_core::{DeckError, NewVideo, VideoId};

#[tokio::test]
async fn create_and_read_playlist() {
    let test = TestStore::new().await;
    let alice = test_user("alice");

    let playlist = test
        .store
        .create_playlist(&alice, "My Favorites")
        .await
        .expect("Failed to create playlist");

    assert_eq!(playlist.name, "My Favorites");
    assert!(playlist.items.is_empty());

    let retrieved = test.store.playlist(&alice, &playlist.id).await.unwrap();
    assert_eq!(retrieved, playlist);

    let library = test.store.library(&alice).await.unwrap();
    assert_eq!(library.playlists().len(), 1);
}

#[tokio::test]
async fn libraries_are_partitioned_per_user() {
    let test = TestStore::new().await;
    let alice = test_user("alice");
    let bob = test_user("bob");

    let playlist = test.store.create_playlist(&alice, "Mix").await.unwrap();
    test.store
        .add_video(&alice, &playlist.id, NewVideo::new("yt1", "Song A"))
        .await
        .unwrap();

    // bob's library is untouched, and he can hold the same video id
    assert!(test.store.library(&bob).await.unwrap().playlists().is_empty());

    let bobs = test.store.create_playlist(&bob, "Mix").await.unwrap();
    test.store
        .add_video(&bob, &bobs.id, NewVideo::new("yt1", "Song A"))
        .await
        .unwrap();
}

#[tokio::test]
async fn add_video_enforces_cross_playlist_dedup() {
    let test = TestStore::new().await;
    let alice = test_user("alice");

    let favorites = test.store.create_playlist(&alice, "Favorites").await.unwrap();
    let chill = test.store.create_playlist(&alice, "Chill").await.unwrap();

    test.store
        .add_video(&alice, &favorites.id, NewVideo::new("yt1", "Song A"))
        .await
        .unwrap();

    let err = test
        .store
        .add_video(&alice, &chill.id, NewVideo::new("yt1", "dup"))
        .await
        .unwrap_err();
    assert!(matches!(err, DeckError::DuplicateVideo(_)));

    // the failed call persisted nothing
    let library = test.store.library(&alice).await.unwrap();
    assert!(library.playlist(&chill.id).unwrap().items.is_empty());
    assert_eq!(library.playlist(&favorites.id).unwrap().items.len(), 1);
}

#[tokio::test]
async fn concurrent_adds_of_same_video_commit_once() {
    let test = TestStore::new().await;
    let alice = test_user("alice");

    let p1 = test.store.create_playlist(&alice, "One").await.unwrap();
    let p2 = test.store.create_playlist(&alice, "Two").await.unwrap();

    let (r1, r2) = tokio::join!(
        test.store
            .add_video(&alice, &p1.id, NewVideo::new("yt1", "Song A")),
        test.store
            .add_video(&alice, &p2.id, NewVideo::new("yt1", "Song A")),
    );

    // exactly one of the two racing adds wins
    assert_eq!(u8::from(r1.is_ok()) + u8::from(r2.is_ok()), 1);

    let library = test.store.library(&alice).await.unwrap();
    let total: usize = library.playlists().iter().map(|p| p.items.len()).sum();
    assert_eq!(total, 1);
}

#[tokio::test]
async fn remove_video_is_idempotent() {
    let test = TestStore::new().await;
    let alice = test_user("alice");

    let playlist = test.store.create_playlist(&alice, "Favorites").await.unwrap();
    test.store
        .add_video(&alice, &playlist.id, NewVideo::new("yt1", "Song A"))
        .await
        .unwrap();

    test.store
        .remove_video(&alice, &playlist.id, &VideoId::new("yt1"))
        .await
        .unwrap();
    // second removal succeeds as a no-op
    test.store
        .remove_video(&alice, &playlist.id, &VideoId::new("yt1"))
        .await
        .unwrap();

    let retrieved = test.store.playlist(&alice, &playlist.id).await.unwrap();
    assert!(retrieved.items.is_empty());

    // but a missing playlist is an error
    let err = test
        .store
        .remove_video(&alice, &tubedeck_core::PlaylistId::new("nope"), &VideoId::new("yt1"))
        .await
        .unwrap_err();
    assert!(matches!(err, DeckError::NotFound { .. }));
}

#[tokio::test]
async fn set_rating_is_bound_checked_and_durable() {
    let test = TestStore::new().await;
    let alice = test_user("alice");

    let playlist = test.store.create_playlist(&alice, "Favorites").await.unwrap();
    test.store
        .add_video(&alice, &playlist.id, NewVideo::new("yt1", "Song A"))
        .await
        .unwrap();

    let err = test
        .store
        .set_rating(&alice, &playlist.id, &VideoId::new("yt1"), 99)
        .await
        .unwrap_err();
    assert!(matches!(err, DeckError::InvalidInput(_)));

    test.store
        .set_rating(&alice, &playlist.id, &VideoId::new("yt1"), 3)
        .await
        .unwrap();

    let retrieved = test.store.playlist(&alice, &playlist.id).await.unwrap();
    assert_eq!(retrieved.video(&VideoId::new("yt1")).unwrap().rating, 3);
}

#[tokio::test]
async fn favorited_query_tracks_store_state() {
    let test = TestStore::new().await;
    let alice = test_user("alice");
    let video_id = VideoId::new("yt1");

    assert!(!test.store.is_video_favorited(&alice, &video_id).await.unwrap());

    let playlist = test.store.create_playlist(&alice, "Favorites").await.unwrap();
    test.store
        .add_video(&alice, &playlist.id, NewVideo::new("yt1", "Song A"))
        .await
        .unwrap();
    assert!(test.store.is_video_favorited(&alice, &video_id).await.unwrap());

    test.store
        .remove_video(&alice, &playlist.id, &video_id)
        .await
        .unwrap();
    assert!(!test.store.is_video_favorited(&alice, &video_id).await.unwrap());
}

#[tokio::test]
async fn delete_playlist_removes_contents() {
    let test = TestStore::new().await;
    let alice = test_user("alice");

    let playlist = test.store.create_playlist(&alice, "Favorites").await.unwrap();
    test.store
        .add_video(&alice, &playlist.id, NewVideo::new("yt1", "Song A"))
        .await
        .unwrap();

    test.store.delete_playlist(&alice, &playlist.id).await.unwrap();

    assert!(!test
        .store
        .is_video_favorited(&alice, &VideoId::new("yt1"))
        .await
        .unwrap());
    let err = test.store.delete_playlist(&alice, &playlist.id).await.unwrap_err();
    assert!(matches!(err, DeckError::NotFound { .. }));
}

#[tokio::test]
async fn end_to_end_scenario() {
    let test = TestStore::new().await;
    let registry = test.registry().await;

    let alice = registry
        .register(tubedeck_core::NewUser {
            username: "alice".to_string(),
            display_name: "Alice".to_string(),
            image_url: None,
        })
        .await
        .unwrap();

    let favorites = test
        .store
        .create_playlist(&alice.id, "Favorites")
        .await
        .unwrap();
    test.store
        .add_video(&alice.id, &favorites.id, NewVideo::new("yt1", "Song A"))
        .await
        .unwrap();
    test.store
        .add_video(&alice.id, &favorites.id, NewVideo::new("yt2", "Song B"))
        .await
        .unwrap();

    assert!(test
        .store
        .is_video_favorited(&alice.id, &VideoId::new("yt1"))
        .await
        .unwrap());

    let chill = test.store.create_playlist(&alice.id, "Chill").await.unwrap();
    let err = test
        .store
        .add_video(&alice.id, &chill.id, NewVideo::new("yt1", "dup"))
        .await
        .unwrap_err();
    assert!(matches!(err, DeckError::DuplicateVideo(_)));

    let items = &test.store.playlist(&alice.id, &favorites.id).await.unwrap().items;
    let view = tubedeck_core::view::project(items, "", tubedeck_core::SortMode::TitleAscending);
    let titles: Vec<&str> = view.iter().map(|v| v.title.as_str()).collect();
    assert_eq!(titles, ["Song A", "Song B"]);
}
