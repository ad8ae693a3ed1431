//! Compile-time configuration for the feed.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app has no server, CLI, or environment to read settings from, so every
//! tunable lives here as a constant. Storage keys are part of the persisted
//! layout and must not change without a data migration.

use std::time::Duration;

/// `localStorage` key holding the JSON array of posts.
pub const POSTS_KEY: &str = "instafront_posts";

/// `localStorage` key holding the bare `"light"` / `"dark"` theme string.
pub const THEME_KEY: &str = "instafront_theme";

/// Id of the post seeded into an empty store.
pub const SEED_POST_ID: &str = "post-1";
pub const SEED_AUTHOR_NAME: &str = "Abril González";
pub const SEED_CAPTION: &str = "Primera publicación en InstaFront ✨";

/// Avatar shared by the seeded author and the local composer.
pub const DEFAULT_AVATAR: &str = "img/fotoPerfil.jpg";

/// Author name stamped on posts created through the compose flow.
pub const COMPOSER_NAME: &str = "Tú";

/// Prefix for generated post ids (`post-{epoch millis}`).
pub const POST_ID_PREFIX: &str = "post-";

/// Glyphs offered by the per-card emoji picker, in display order.
pub const EMOJI_PALETTE: &[&str] = &["🙂", "😃", "❤️", "🔥", "🎉"];

pub const HEART_LIKED_ICON: &str = "img/cora_rojo.png";
pub const HEART_ICON: &str = "img/heart.png";
pub const COMMENT_ICON: &str = "img/comment.png";
pub const SHARE_ICON: &str = "img/paper.png";
pub const EMOJI_ICON: &str = "img/smile.png";

/// Label shown on the share control after a successful clipboard copy.
pub const SHARE_CONFIRMATION: &str = "Copiado!";

/// How long the share confirmation stays visible.
pub const SHARE_CONFIRMATION_DELAY: Duration = Duration::from_millis(1200);

/// Upper bound on reading a selected image before the compose flow gives up.
pub const READ_TIMEOUT: Duration = Duration::from_secs(10);

/// Message shown in the compose modal when the image cannot be read.
pub const READ_FAILED_MESSAGE: &str = "No se pudo leer la imagen.";

/// Message shown in the compose modal when the new post cannot be stored.
pub const SAVE_FAILED_MESSAGE: &str = "No se pudo guardar la publicación.";
