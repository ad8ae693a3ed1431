use super::*;
use crate::state::post::post_id_at;
use crate::util::storage::MemoryStorage;

fn post(id: &str, author: &str, caption: &str) -> Post {
    Post {
        id: id.to_owned(),
        author_name: author.to_owned(),
        author_avatar: "a.jpg".to_owned(),
        image: "i.jpg".to_owned(),
        caption: caption.to_owned(),
        likes: 0,
        liked: false,
        comments: Vec::new(),
    }
}

fn store_with(posts: &[Post]) -> FeedStore<MemoryStorage> {
    let raw = serde_json::to_string(posts).unwrap_or_default();
    FeedStore::open(MemoryStorage::new().with_item(config::POSTS_KEY, &raw))
}

fn persisted(store: &FeedStore<MemoryStorage>) -> Vec<Post> {
    load_posts(store.storage())
}

/// Memory storage that rejects writes larger than `limit` bytes, like a full
/// `localStorage` quota.
#[derive(Clone, Debug)]
struct QuotaStorage {
    inner: MemoryStorage,
    limit: usize,
}

impl KeyValueStore for QuotaStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if value.len() > self.limit {
            return Err(StorageError::Write("QuotaExceededError".to_owned()));
        }
        self.inner.set_item(key, value)
    }
}

fn quota_store(limit: usize) -> FeedStore<QuotaStorage> {
    FeedStore::open(QuotaStorage { inner: MemoryStorage::new(), limit })
}

fn quota_persisted(store: &FeedStore<QuotaStorage>) -> Vec<Post> {
    load_posts(store.storage())
}

fn large_image() -> String {
    format!("data:image/jpeg;base64,{}", "A".repeat(5000))
}

// =============================================================
// Opening
// =============================================================

#[test]
fn empty_store_seeds_and_persists_one_post() {
    let store = FeedStore::open(MemoryStorage::new());
    assert_eq!(store.posts().len(), 1);
    assert_eq!(store.posts()[0].id, "post-1");

    let saved = persisted(&store);
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].id, "post-1");
}

#[test]
fn corrupt_store_is_reseeded() {
    let store = FeedStore::open(MemoryStorage::new().with_item(config::POSTS_KEY, "]["));
    assert_eq!(store.posts().len(), 1);
    assert_eq!(persisted(&store)[0].id, "post-1");
}

#[test]
fn existing_posts_are_loaded_in_order_without_seeding() {
    let store = store_with(&[post("b", "Bea", "dos"), post("a", "Ana", "uno")]);
    let ids: Vec<_> = store.posts().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a"]);
    assert!(store.get("post-1").is_none());
}

#[test]
fn unreachable_storage_still_seeds_in_memory() {
    let store = FeedStore::open(BrowserStorage);
    assert_eq!(store.posts().len(), 1);
}

// =============================================================
// Mutation
// =============================================================

#[test]
fn mutate_persists_entire_list() {
    let mut store = store_with(&[post("a", "Ana", "uno"), post("b", "Bea", "dos")]);
    assert!(store.mutate("b", |p| {
        p.toggle_like();
        true
    }));

    let saved = persisted(&store);
    assert_eq!(saved.len(), 2);
    assert_eq!(saved[0], post("a", "Ana", "uno"));
    assert!(saved[1].liked);
    assert_eq!(saved[1].likes, 1);
}

#[test]
fn mutate_unknown_id_is_noop() {
    let mut store = store_with(&[post("a", "Ana", "uno")]);
    let before = store.storage().clone();
    assert!(!store.mutate("missing", |p| {
        p.toggle_like();
        true
    }));
    assert_eq!(store.storage(), &before);
}

#[test]
fn blank_comment_does_not_persist() {
    let mut store = store_with(&[post("a", "Ana", "uno")]);
    assert!(!store.mutate("a", |p| p.add_comment("   ")));
    assert!(persisted(&store)[0].comments.is_empty());

    assert!(store.mutate("a", |p| p.add_comment("hi")));
    assert_eq!(persisted(&store)[0].comments, vec!["hi".to_owned()]);
}

#[test]
fn like_toggle_twice_round_trips_through_storage() {
    let mut store = store_with(&[post("a", "Ana", "uno")]);
    for _ in 0..2 {
        store.mutate("a", |p| {
            p.toggle_like();
            true
        });
    }
    assert_eq!(persisted(&store)[0], post("a", "Ana", "uno"));
}

#[test]
fn double_tap_n_times_adds_n_likes() {
    let mut store = store_with(&[post("a", "Ana", "uno")]);
    for _ in 0..5 {
        store.mutate("a", |p| {
            p.double_tap_like();
            true
        });
    }
    let saved = &persisted(&store)[0];
    assert!(saved.liked);
    assert_eq!(saved.likes, 5);
}

// =============================================================
// Compose
// =============================================================

#[test]
fn prepend_puts_new_post_first_and_persists() {
    let mut store = FeedStore::open(MemoryStorage::new());
    let id = store
        .prepend(Post::composed(post_id_at(42), "data:image/png;base64,AA==".to_owned(), "hello"))
        .expect("prepend");
    assert_eq!(id, "post-42");

    let saved = persisted(&store);
    assert_eq!(saved.len(), 2);
    assert_eq!(saved[0].id, "post-42");
    assert_eq!(saved[0].caption, "hello");
    assert_eq!(saved[0].likes, 0);
    assert!(!saved[0].liked);
    assert!(saved[0].comments.is_empty());
    assert_eq!(saved[1].id, "post-1");
}

#[test]
fn prepend_disambiguates_colliding_ids() {
    let mut store = FeedStore::open(MemoryStorage::new());
    let first = store.prepend(Post::composed(post_id_at(7), "x".to_owned(), "")).expect("first");
    let second = store.prepend(Post::composed(post_id_at(7), "y".to_owned(), "")).expect("second");
    assert_eq!(first, "post-7");
    assert_ne!(first, second);
    assert!(second.starts_with("post-7-"));
    assert_eq!(second.len(), "post-7-".len() + 8);
}

// =============================================================
// Rejected writes
// =============================================================

#[test]
fn oversized_post_is_rejected_and_not_kept() {
    let mut store = quota_store(2000);
    let result = store.prepend(Post::composed(post_id_at(9), large_image(), "grande"));

    assert!(matches!(result, Err(StorageError::Write(_))));
    assert_eq!(store.posts().len(), 1);
    assert!(store.get("post-9").is_none());
    assert_eq!(quota_persisted(&store).len(), 1);
}

#[test]
fn likes_still_persist_after_a_rejected_post() {
    let mut store = quota_store(2000);
    assert!(store.prepend(Post::composed(post_id_at(9), large_image(), "")).is_err());

    assert!(store.mutate("post-1", |p| {
        p.toggle_like();
        true
    }));
    assert_eq!(store.get("post-1").map(|p| p.likes), Some(1));
    assert_eq!(quota_persisted(&store)[0].likes, 1);
}

#[test]
fn rejected_mutation_is_rolled_back() {
    let mut store = quota_store(1000);
    let before = store.get("post-1").cloned();
    let long_comment = "x".repeat(2000);

    assert!(!store.mutate("post-1", |p| p.add_comment(&long_comment)));
    assert_eq!(store.get("post-1").cloned(), before);
    assert!(quota_persisted(&store)[0].comments.is_empty());
}

#[test]
fn memory_matches_storage_after_every_outcome() {
    let mut store = quota_store(2000);
    assert!(store.prepend(Post::composed(post_id_at(1), large_image(), "")).is_err());
    store.mutate("post-1", |p| {
        p.double_tap_like();
        true
    });
    assert!(!store.mutate("post-1", |p| p.add_comment(&"y".repeat(3000))));
    assert_eq!(store.posts(), quota_persisted(&store).as_slice());
}

// =============================================================
// Search
// =============================================================

#[test]
fn empty_query_keeps_all_posts() {
    let posts = vec![post("a", "Ana", "uno"), post("b", "Bea", "dos")];
    assert_eq!(filter_posts(&posts, "").len(), 2);
}

#[test]
fn query_is_case_insensitive_on_author() {
    let posts = vec![post("a", "Abril González", "uno"), post("b", "Bea", "dos")];
    assert_eq!(visible_ids(&posts, "ABRIL"), vec!["a".to_owned()]);
}

#[test]
fn query_matches_caption() {
    let posts = vec![post("a", "Ana", "Día de Playa"), post("b", "Bea", "montaña")];
    assert_eq!(visible_ids(&posts, "playa"), vec!["a".to_owned()]);
}

#[test]
fn unmatched_query_yields_nothing() {
    let posts = vec![post("a", "Ana", "uno")];
    assert!(filter_posts(&posts, "zzz").is_empty());
}

#[test]
fn search_does_not_touch_storage() {
    let store = store_with(&[post("a", "Ana", "uno")]);
    let before = store.storage().clone();
    assert!(visible_ids(store.posts(), "nada").is_empty());
    assert_eq!(store.storage(), &before);
}

// =============================================================
// Card keys
// =============================================================

#[test]
fn card_keys_follow_visible_order() {
    let posts = vec![post("a", "Ana", "playa"), post("b", "Bea", "monte"), post("c", "Cris", "playa")];
    let ids: Vec<_> = card_keys(&posts, "playa").into_iter().map(|k| k.id).collect();
    assert_eq!(ids, vec!["a".to_owned(), "c".to_owned()]);
}

#[test]
fn new_query_changes_every_card_key() {
    let posts = vec![post("a", "Ana", "playa"), post("b", "Bea", "playa")];
    let all = card_keys(&posts, "");
    let searched = card_keys(&posts, "pla");
    assert_eq!(all.len(), searched.len());
    assert!(all.iter().all(|key| !searched.contains(key)));
}

#[test]
fn mutation_keeps_card_keys() {
    let mut store = store_with(&[post("a", "Ana", "uno"), post("b", "Bea", "dos")]);
    let before = card_keys(store.posts(), "");
    store.mutate("b", |p| p.add_comment("hola"));
    assert_eq!(card_keys(store.posts(), ""), before);
}

#[test]
fn new_post_changes_every_card_key() {
    let mut store = store_with(&[post("a", "Ana", "uno")]);
    let before = card_keys(store.posts(), "");
    store.prepend(Post::composed(post_id_at(5), "x".to_owned(), "")).expect("prepend");
    let after = card_keys(store.posts(), "");
    assert_eq!(after.len(), 2);
    assert!(before.iter().all(|key| !after.contains(key)));
}
