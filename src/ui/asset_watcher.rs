// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! File system watcher for the images directory
//!
//! Uses OS-level file watching via the notify crate. The GTK main loop
//! polls [`AssetWatcher::check_for_changes`] on a timer, so a replaced or
//! newly added `<key>.png` shows up without restarting.

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::{
    path::Path,
    sync::mpsc::{channel, Receiver},
};

/// Watches the images directory and reports changes on demand
pub struct AssetWatcher {
    _watcher: RecommendedWatcher,
    rx: Receiver<notify::Result<Event>>,
}

impl AssetWatcher {
    pub fn new(images_dir: &Path) -> notify::Result<Self> {
        let (tx, rx) = channel();

        let mut watcher = RecommendedWatcher::new(
            move |res| {
                let _ = tx.send(res);
            },
            Config::default(),
        )?;

        watcher.watch(images_dir, RecursiveMode::NonRecursive)?;

        Ok(AssetWatcher {
            _watcher: watcher,
            rx,
        })
    }

    /// Drains pending events (non-blocking)
    ///
    /// Returns `true` if any file was created, modified or removed since the
    /// last call.
    pub fn check_for_changes(&self) -> bool {
        let mut changed = false;
        while let Ok(event_result) = self.rx.try_recv() {
            match event_result {
                Ok(event) => {
                    if is_content_change(&event.kind) {
                        tracing::debug!(paths = ?event.paths, "Image directory changed");
                        changed = true;
                    }
                }
                Err(e) => tracing::warn!("Image watcher error: {}", e),
            }
        }
        changed
    }
}

fn is_content_change(kind: &EventKind) -> bool {
    matches!(
        kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{AccessKind, CreateKind, ModifyKind, RemoveKind};

    #[test]
    fn test_content_change_kinds() {
        assert!(is_content_change(&EventKind::Create(CreateKind::File)));
        assert!(is_content_change(&EventKind::Modify(ModifyKind::Any)));
        assert!(is_content_change(&EventKind::Remove(RemoveKind::File)));
        assert!(!is_content_change(&EventKind::Access(AccessKind::Any)));
    }

    #[test]
    fn test_watcher_on_missing_directory_fails() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");

        assert!(AssetWatcher::new(&missing).is_err());
    }

    #[test]
    fn test_no_changes_without_events() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let watcher = AssetWatcher::new(temp_dir.path()).unwrap();

        assert!(!watcher.check_for_changes());
    }
}
