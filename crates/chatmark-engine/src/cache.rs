//! Memoisation of rendered messages.
//!
//! Long conversations re-render every message whenever anything changes.
//! Messages are cached without copy state, and copy flags are applied on the
//! way out, so toggling a copied marker never invalidates an entry.

use std::num::NonZeroUsize;

use lru::LruCache;

use crate::{
    options::RenderOptions,
    render::{Block, CopyState, apply_copy_state, assemble},
    transcript::{ChatMessage, RenderedMessage, render_transcript_with},
};

pub const DEFAULT_CAPACITY: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    message_index: usize,
    content: String,
    options: RenderOptions,
}

/// LRU cache of assembled messages.
pub struct RenderCache {
    entries: LruCache<CacheKey, Vec<Block>>,
    hits: u64,
    misses: u64,
}

impl RenderCache {
    /// Creates a cache holding at most `capacity` messages (at least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// Same result as [`render_message`](crate::render::render_message),
    /// reusing earlier work for identical input.
    pub fn render(
        &mut self,
        message: &str,
        message_index: usize,
        copy_state: &impl CopyState,
        options: &RenderOptions,
    ) -> Vec<Block> {
        let key = CacheKey {
            message_index,
            content: message.to_string(),
            options: options.clone(),
        };

        let mut blocks = if let Some(blocks) = self.entries.get(&key) {
            self.hits += 1;
            log::debug!("render cache hit for message {message_index}");
            blocks.clone()
        } else {
            self.misses += 1;
            log::debug!("render cache miss for message {message_index}");
            let blocks = assemble(message, message_index, options);
            self.entries.put(key, blocks.clone());
            blocks
        };

        apply_copy_state(&mut blocks, copy_state);
        blocks
    }

    /// Renders a whole transcript through the cache.
    pub fn render_transcript(
        &mut self,
        messages: &[ChatMessage],
        copy_state: &impl CopyState,
        options: &RenderOptions,
    ) -> Vec<RenderedMessage> {
        render_transcript_with(messages, copy_state, |content, index| {
            self.render(content, index, copy_state, options)
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for RenderCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
