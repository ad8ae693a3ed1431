//! Feed store: the single writer for the persisted post list.
//!
//! DESIGN
//! ======
//! The store owns the in-memory list and the storage backend together. Every
//! mutation is read-modify-persist on the whole list; the caller wraps the
//! store in a reactive signal so the signal update doubles as the change
//! notification. A change whose write is rejected (quota, disabled storage)
//! is rolled back, so the in-memory list always mirrors what was last
//! written and views read from memory.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use crate::config;
use crate::state::post::Post;
use crate::util::storage::{BrowserStorage, KeyValueStore, StorageError, load_posts, save_posts};

/// Feed store backed by the browser's `localStorage`.
pub type BrowserFeed = FeedStore<BrowserStorage>;

/// Owns the ordered post list and persists it after every change.
#[derive(Clone, Debug)]
pub struct FeedStore<S> {
    storage: S,
    posts: Vec<Post>,
}

impl<S: KeyValueStore> FeedStore<S> {
    /// Load persisted posts, seeding and persisting the sample post when the
    /// store is empty or unreadable.
    pub fn open(storage: S) -> Self {
        let posts = load_posts(&storage);
        let mut store = Self { storage, posts };
        if store.posts.is_empty() {
            store.posts.push(Post::seed());
            match store.persist() {
                Ok(()) => log::info!("seeded empty feed with {}", config::SEED_POST_ID),
                Err(err) => log::warn!("seed post {} kept in memory only: {err}", config::SEED_POST_ID),
            }
        } else {
            log::debug!("loaded {} posts", store.posts.len());
        }
        store
    }

    /// Posts in display order.
    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id)
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Apply `f` to the post with `id` and persist the whole list when `f`
    /// reports a change.
    ///
    /// Returns whether the post existed, changed, and the change was stored.
    /// Unknown ids are a no-op; a rejected write restores the previous record.
    pub fn mutate<F>(&mut self, id: &str, f: F) -> bool
    where
        F: FnOnce(&mut Post) -> bool,
    {
        let Some(index) = self.posts.iter().position(|post| post.id == id) else {
            log::debug!("ignoring mutation of unknown post {id}");
            return false;
        };
        let before = self.posts[index].clone();
        if !f(&mut self.posts[index]) {
            return false;
        }
        if let Err(err) = self.persist() {
            log::warn!("reverting change to post {id}: {err}");
            self.posts[index] = before;
            return false;
        }
        true
    }

    /// Insert `post` at the top of the feed and persist.
    ///
    /// A colliding id gets a short random suffix so ids stay unique within the
    /// list. Returns the id the post was stored under.
    ///
    /// # Errors
    ///
    /// Returns the [`StorageError`] when the list cannot be written; the post
    /// is not kept.
    pub fn prepend(&mut self, mut post: Post) -> Result<String, StorageError> {
        if self.get(&post.id).is_some() {
            let suffix = uuid::Uuid::new_v4().simple().to_string();
            post.id = format!("{}-{}", post.id, &suffix[..8]);
        }
        let id = post.id.clone();
        self.posts.insert(0, post);
        if let Err(err) = self.persist() {
            log::warn!("dropping unsaved post {id}: {err}");
            self.posts.remove(0);
            return Err(err);
        }
        log::info!("published post {id}");
        Ok(id)
    }

    fn persist(&mut self) -> Result<(), StorageError> {
        save_posts(&mut self.storage, &self.posts)
    }
}

/// Posts whose caption or author contains `query`, case-insensitively, in
/// feed order. An empty query keeps everything.
#[must_use]
pub fn filter_posts<'a>(posts: &'a [Post], query: &str) -> Vec<&'a Post> {
    let needle = query.to_lowercase();
    posts.iter().filter(|post| post.matches(&needle)).collect()
}

/// Render key for one feed card.
///
/// Besides the post id it carries the query and list length the card was
/// rendered for: a new query or a new post changes every key and rebuilds the
/// whole feed, while a like or comment keeps the keys and the mounted cards.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CardKey {
    pub id: String,
    pub query: String,
    pub total: usize,
}

/// Keys of the cards visible for `query`, in feed order.
#[must_use]
pub fn card_keys(posts: &[Post], query: &str) -> Vec<CardKey> {
    visible_ids(posts, query)
        .into_iter()
        .map(|id| CardKey { id, query: query.to_owned(), total: posts.len() })
        .collect()
}

/// Ids of the posts visible for `query`, in feed order.
#[must_use]
pub fn visible_ids(posts: &[Post], query: &str) -> Vec<String> {
    filter_posts(posts, query)
        .into_iter()
        .map(|post| post.id.clone())
        .collect()
}
