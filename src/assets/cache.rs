use std::{
    collections::HashMap,
    path::{Component, Path, PathBuf},
    sync::{Arc, Mutex, MutexGuard},
};

use anyhow::Context;
use image::RgbaImage;

use crate::{assets::decode::decode_image, foundation::error::WrittenBookResult};

#[derive(Default)]
struct SlotState {
    image: Option<Arc<RgbaImage>>,
    decodes: u32,
}

#[derive(Default)]
struct Slot {
    state: Mutex<SlotState>,
}

/// Registry of decoded bitmaps keyed by canonical absolute path.
///
/// Each distinct path is decoded at most once. Population is atomic per key: concurrent loads of
/// the same path block on that path's slot while the first caller decodes, while loads of other
/// paths proceed independently.
///
/// Entries live until [`AssetCache::evict`]/[`AssetCache::clear`] or until the cache is dropped.
/// Bitmaps are reference counted, so an [`crate::AssetResource`] keeps its pixels alive after
/// eviction.
#[derive(Default)]
pub struct AssetCache {
    slots: Mutex<HashMap<PathBuf, Arc<Slot>>>,
}

impl std::fmt::Debug for AssetCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetCache")
            .field("entries", &self.len())
            .finish()
    }
}

impl AssetCache {
    /// Construct an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `source` to the canonical key used by the cache.
    ///
    /// Expands a leading `~`, joins relative paths onto `base` (or the current directory), folds
    /// `.`/`..` segments, and resolves symlinks when the file exists.
    pub fn canonical_path(source: impl AsRef<Path>, base: Option<&Path>) -> PathBuf {
        let source = source.as_ref();
        let expanded = match source.to_str() {
            Some(s) => PathBuf::from(shellexpand::tilde(s).into_owned()),
            None => source.to_path_buf(),
        };

        let absolute = if expanded.is_absolute() {
            expanded
        } else {
            match base {
                Some(base) if base.is_absolute() => base.join(&expanded),
                Some(base) => current_dir().join(base).join(&expanded),
                None => current_dir().join(&expanded),
            }
        };

        let lexical = fold_segments(&absolute);
        lexical.canonicalize().unwrap_or(lexical)
    }

    /// Return the bitmap at `path`, decoding it on first access.
    ///
    /// The returned path is the canonical key the bitmap is stored under.
    pub fn load(&self, path: impl AsRef<Path>) -> WrittenBookResult<(PathBuf, Arc<RgbaImage>)> {
        let key = Self::canonical_path(path, None);
        let slot = {
            let mut slots = lock(&self.slots);
            Arc::clone(slots.entry(key.clone()).or_default())
        };

        let mut state = lock(&slot.state);
        if let Some(image) = &state.image {
            tracing::debug!(path = %key.display(), "asset cache hit");
            return Ok((key, Arc::clone(image)));
        }

        let bytes = match std::fs::read(&key)
            .with_context(|| format!("read asset bytes from '{}'", key.display()))
        {
            Ok(bytes) => bytes,
            Err(e) => {
                drop(state);
                self.discard_empty(&key, &slot);
                return Err(e.into());
            }
        };
        let image = match decode_image(&bytes)
            .with_context(|| format!("decode asset '{}'", key.display()))
        {
            Ok(image) => Arc::new(image),
            Err(e) => {
                drop(state);
                self.discard_empty(&key, &slot);
                return Err(e.into());
            }
        };

        tracing::debug!(
            path = %key.display(),
            width = image.width(),
            height = image.height(),
            "decoded asset"
        );
        state.image = Some(Arc::clone(&image));
        state.decodes += 1;
        Ok((key, image))
    }

    /// Return the cached bitmap for `path` without decoding.
    pub fn get(&self, path: impl AsRef<Path>) -> Option<Arc<RgbaImage>> {
        let slot = self.slot(path.as_ref())?;
        let state = lock(&slot.state);
        state.image.clone()
    }

    /// Whether a decoded bitmap is cached for `path`.
    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.get(path).is_some()
    }

    /// Number of successful decodes for `path` during this entry's lifetime.
    pub fn decode_count(&self, path: impl AsRef<Path>) -> u32 {
        self.slot(path.as_ref())
            .map(|slot| lock(&slot.state).decodes)
            .unwrap_or(0)
    }

    /// Number of entries, including paths whose first decode is still running.
    ///
    /// Failed loads leave no entry, so once every load has returned this equals the number of
    /// distinct decoded paths.
    pub fn len(&self) -> usize {
        lock(&self.slots).len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop the entry for `path`. Returns whether an entry existed.
    pub fn evict(&self, path: impl AsRef<Path>) -> bool {
        let key = Self::canonical_path(path, None);
        let removed = lock(&self.slots).remove(&key).is_some();
        if removed {
            tracing::debug!(path = %key.display(), "evicted asset");
        }
        removed
    }

    /// Drop every entry.
    pub fn clear(&self) {
        lock(&self.slots).clear();
    }

    fn slot(&self, path: &Path) -> Option<Arc<Slot>> {
        let key = Self::canonical_path(path, None);
        lock(&self.slots).get(&key).cloned()
    }

    // A failed load must not leave an empty entry behind.
    fn discard_empty(&self, key: &Path, slot: &Arc<Slot>) {
        let mut slots = lock(&self.slots);
        let still_empty = lock(&slot.state).image.is_none();
        if still_empty && slots.get(key).is_some_and(|s| Arc::ptr_eq(s, slot)) {
            slots.remove(key);
        }
    }
}

// Bitmaps are immutable once inserted, so a poisoned lock still guards consistent data.
fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn current_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/"))
}

fn fold_segments(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // Popping past the root is a no-op, matching how the OS resolves `/..`.
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/assets/cache.rs"]
mod tests;
