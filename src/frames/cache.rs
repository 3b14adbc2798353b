//! Bounded least-recently-used cache of decoded frames.
//!
//! Entries are keyed by file path. A monotonically increasing stamp records
//! when each entry was last used; an ordered index from stamp to path gives
//! the eviction candidate in O(log n).

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use super::loader::FrameLoader;

struct Entry<H> {
    handle: H,
    stamp: u64,
}

pub struct ImageCache<L: FrameLoader> {
    loader: L,
    capacity: usize,
    entries: HashMap<PathBuf, Entry<L::Handle>>,
    /// stamp -> path, oldest first
    recency: BTreeMap<u64, PathBuf>,
    next_stamp: u64,
}

impl<L: FrameLoader> ImageCache<L> {
    /// Create a cache holding at most `capacity` frames (at least one).
    pub fn new(loader: L, capacity: usize) -> Self {
        Self {
            loader,
            capacity: capacity.max(1),
            entries: HashMap::new(),
            recency: BTreeMap::new(),
            next_stamp: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether `path` is cached. Does not touch recency.
    #[cfg(test)]
    pub fn contains(&self, path: &Path) -> bool {
        self.entries.contains_key(path)
    }

    /// Return the frame at `path`, decoding it on a miss.
    ///
    /// A path that does not exist, or a file that fails to decode, yields
    /// `None` and is not cached.
    pub fn get_or_load(&mut self, path: &Path) -> Option<L::Handle> {
        if !path.exists() {
            return None;
        }

        let stamp = self.bump();

        if let Some(entry) = self.entries.get_mut(path) {
            self.recency.remove(&entry.stamp);
            entry.stamp = stamp;
            self.recency.insert(stamp, path.to_path_buf());
            return Some(entry.handle.clone());
        }

        let handle = match self.loader.load(path) {
            Ok(handle) => handle,
            Err(e) => {
                log::warn!("⚠️  {}", e);
                return None;
            }
        };

        self.entries.insert(
            path.to_path_buf(),
            Entry {
                handle: handle.clone(),
                stamp,
            },
        );
        self.recency.insert(stamp, path.to_path_buf());

        while self.entries.len() > self.capacity {
            self.evict_oldest();
        }

        Some(handle)
    }

    fn bump(&mut self) -> u64 {
        let stamp = self.next_stamp;
        self.next_stamp += 1;
        stamp
    }

    fn evict_oldest(&mut self) {
        if let Some((_, path)) = self.recency.pop_first() {
            self.entries.remove(&path);
            log::debug!("🧹 Evicted frame {}", path.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Result, VoteError};
    use std::cell::Cell;
    use std::rc::Rc;

    /// Loader that hands out the path itself and counts decodes
    #[derive(Clone, Default)]
    struct CountingLoader {
        loads: Rc<Cell<usize>>,
    }

    impl FrameLoader for CountingLoader {
        type Handle = PathBuf;

        fn load(&self, path: &Path) -> Result<PathBuf> {
            self.loads.set(self.loads.get() + 1);
            if path.extension().is_some_and(|ext| ext == "bad") {
                return Err(VoteError::io(
                    path,
                    std::io::Error::new(std::io::ErrorKind::InvalidData, "corrupt"),
                ));
            }
            Ok(path.to_path_buf())
        }
    }

    fn touch_files(dir: &Path, count: usize) -> Vec<PathBuf> {
        (0..count)
            .map(|i| {
                let path = dir.join(format!("person_1_frame_{}.jpg", i));
                std::fs::write(&path, b"").unwrap();
                path
            })
            .collect()
    }

    #[test]
    fn test_never_exceeds_capacity() {
        let dir = tempfile::tempdir().unwrap();
        let paths = touch_files(dir.path(), 60);
        let mut cache = ImageCache::new(CountingLoader::default(), 50);

        for path in &paths {
            assert!(cache.get_or_load(path).is_some());
            assert!(cache.len() <= 50);
        }
        assert_eq!(cache.len(), 50);
        assert!(!cache.contains(&paths[9]));
        assert!(cache.contains(&paths[10]));
    }

    #[test]
    fn test_fifty_first_evicts_least_recently_used() {
        let dir = tempfile::tempdir().unwrap();
        let paths = touch_files(dir.path(), 51);
        let mut cache = ImageCache::new(CountingLoader::default(), 50);

        for path in &paths[..50] {
            cache.get_or_load(path);
        }
        // refresh the oldest; the second-oldest becomes the victim
        cache.get_or_load(&paths[0]);
        cache.get_or_load(&paths[50]);

        assert_eq!(cache.len(), 50);
        assert!(cache.contains(&paths[0]));
        assert!(!cache.contains(&paths[1]));
        assert!(cache.contains(&paths[50]));
    }

    #[test]
    fn test_hit_does_not_reload_or_grow() {
        let dir = tempfile::tempdir().unwrap();
        let paths = touch_files(dir.path(), 2);
        let loader = CountingLoader::default();
        let loads = loader.loads.clone();
        let mut cache = ImageCache::new(loader, 50);

        cache.get_or_load(&paths[0]);
        cache.get_or_load(&paths[1]);
        assert_eq!(cache.get_or_load(&paths[0]), Some(paths[0].clone()));

        assert_eq!(cache.len(), 2);
        assert_eq!(loads.get(), 2);
    }

    #[test]
    fn test_missing_file_is_not_cached() {
        let dir = tempfile::tempdir().unwrap();
        let loader = CountingLoader::default();
        let loads = loader.loads.clone();
        let mut cache = ImageCache::new(loader, 5);

        assert!(cache.get_or_load(&dir.path().join("absent.jpg")).is_none());
        assert!(cache.is_empty());
        assert_eq!(loads.get(), 0);
    }

    #[test]
    fn test_decode_failure_is_not_cached() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.bad");
        std::fs::write(&path, b"").unwrap();
        let mut cache = ImageCache::new(CountingLoader::default(), 5);

        assert!(cache.get_or_load(&path).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_zero_capacity_holds_one() {
        let dir = tempfile::tempdir().unwrap();
        let paths = touch_files(dir.path(), 3);
        let mut cache = ImageCache::new(CountingLoader::default(), 0);
        assert_eq!(cache.capacity(), 1);

        for path in &paths {
            assert!(cache.get_or_load(path).is_some());
        }
        assert_eq!(cache.len(), 1);
        assert!(cache.contains(&paths[2]));
    }
}
