//! Post record and the per-post state transitions.
//!
//! DESIGN
//! ======
//! `likes` is an independent popularity counter, not a value derived from
//! `liked`. Liking increments it, unliking decrements it (floored at zero),
//! and a double-tap always increments. Views read labels from the helpers
//! below so the data-to-markup mapping stays testable without a browser.

#[cfg(test)]
#[path = "post_test.rs"]
mod post_test;

use serde::{Deserialize, Deserializer, Serialize};

use crate::config;

/// One feed entry as persisted under [`config::POSTS_KEY`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Stable identifier correlating a rendered card with this record.
    pub id: String,
    pub author_name: String,
    pub author_avatar: String,
    /// Image path or `data:` URI.
    pub image: String,
    /// Empty when the post has no caption.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub caption: String,
    #[serde(default)]
    pub likes: u32,
    /// Whether the current viewer has liked the post.
    #[serde(default)]
    pub liked: bool,
    /// Comments in insertion order.
    #[serde(default)]
    pub comments: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Post {
    /// The sample post written into an empty store on first run.
    #[must_use]
    pub fn seed() -> Self {
        Self {
            id: config::SEED_POST_ID.to_owned(),
            author_name: config::SEED_AUTHOR_NAME.to_owned(),
            author_avatar: config::DEFAULT_AVATAR.to_owned(),
            image: config::DEFAULT_AVATAR.to_owned(),
            caption: config::SEED_CAPTION.to_owned(),
            likes: 0,
            liked: false,
            comments: Vec::new(),
        }
    }

    /// A fresh post authored by the local user.
    #[must_use]
    pub fn composed(id: String, image: String, caption: &str) -> Self {
        Self {
            id,
            author_name: config::COMPOSER_NAME.to_owned(),
            author_avatar: config::DEFAULT_AVATAR.to_owned(),
            image,
            caption: caption.trim().to_owned(),
            likes: 0,
            liked: false,
            comments: Vec::new(),
        }
    }

    /// Flip `liked`, moving `likes` one step in the same direction.
    pub fn toggle_like(&mut self) {
        self.liked = !self.liked;
        if self.liked {
            self.likes = self.likes.saturating_add(1);
        } else {
            self.likes = self.likes.saturating_sub(1);
        }
    }

    /// Double-tap on the image: force `liked` and always count one more like.
    pub fn double_tap_like(&mut self) {
        self.liked = true;
        self.likes = self.likes.saturating_add(1);
    }

    /// Append a trimmed comment. Returns `false` and leaves the post untouched
    /// when the text is blank.
    pub fn add_comment(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.comments.push(text.to_owned());
        true
    }

    /// Text placed on the clipboard by the share action.
    #[must_use]
    pub fn share_text(&self) -> String {
        format!("Post de {}: {}", self.author_name, self.caption)
    }

    #[must_use]
    pub fn likes_label(&self) -> String {
        format!("A {} personas les gusta esto", self.likes)
    }

    #[must_use]
    pub fn comments_label(&self) -> String {
        format!("Ver los {} comentarios", self.comments.len())
    }

    #[must_use]
    pub fn heart_icon(&self) -> &'static str {
        if self.liked { config::HEART_LIKED_ICON } else { config::HEART_ICON }
    }

    /// Case-insensitive substring match on caption or author name.
    ///
    /// `needle` must already be lowercased.
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        self.caption.to_lowercase().contains(needle) || self.author_name.to_lowercase().contains(needle)
    }
}

/// Build the id for a post composed at `epoch_millis`.
#[must_use]
pub fn post_id_at(epoch_millis: u64) -> String {
    format!("{}{epoch_millis}", config::POST_ID_PREFIX)
}
