// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Background image loading off the UI thread.
//!
//! Every request gets a new generation number. Results arriving for an
//! older generation are dropped, so a slow decode can never replace the
//! image the user asked for last.

use super::media::{self, LoadedImage};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};

struct LoadMessage {
    generation: u64,
    result: Result<LoadedImage, String>,
}

pub struct ImageLoader {
    generation: u64,
    pending: bool,
    sender: Sender<LoadMessage>,
    receiver: Receiver<LoadMessage>,
}

impl Default for ImageLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageLoader {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self {
            generation: 0,
            pending: false,
            sender,
            receiver,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Decode `path` on a background thread.
    pub fn request(&mut self, path: PathBuf) -> u64 {
        self.spawn(move || {
            let loaded = media::load_image(&path).map_err(|e| format!("{:#}", e))?;
            log::info!("Loaded image: {} ({}x{})", path.display(), loaded.width, loaded.height);
            Ok(loaded)
        })
    }

    /// Run `job` on a background thread under a new generation.
    pub fn spawn<F>(&mut self, job: F) -> u64
    where
        F: FnOnce() -> Result<LoadedImage, String> + Send + 'static,
    {
        self.generation += 1;
        self.pending = true;
        let generation = self.generation;
        let sender = self.sender.clone();

        std::thread::spawn(move || {
            let result = job();
            let _ = sender.send(LoadMessage { generation, result });
        });

        generation
    }

    /// Collect finished loads without blocking. Returns the result of the
    /// latest request once it has arrived; stale results are discarded.
    pub fn poll(&mut self) -> Option<Result<LoadedImage, String>> {
        let mut latest = None;
        while let Ok(message) = self.receiver.try_recv() {
            if message.generation == self.generation {
                latest = Some(message.result);
            } else {
                log::debug!(
                    "Dropping stale image load (generation {}, current {})",
                    message.generation,
                    self.generation
                );
            }
        }
        if latest.is_some() {
            self.pending = false;
        }
        latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::sync_channel;
    use std::time::{Duration, Instant};

    fn image(width: u32) -> LoadedImage {
        LoadedImage {
            width,
            height: 1,
            pixels: vec![0; width as usize * 4],
        }
    }

    fn poll_until(loader: &mut ImageLoader) -> Option<Result<LoadedImage, String>> {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if let Some(result) = loader.poll() {
                return Some(result);
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        None
    }

    #[test]
    fn test_delivers_result() {
        let mut loader = ImageLoader::new();
        let generation = loader.spawn(|| Ok(image(3)));
        assert_eq!(generation, 1);
        assert!(loader.is_pending());

        let result = poll_until(&mut loader).unwrap();
        assert_eq!(result.unwrap().width, 3);
        assert!(!loader.is_pending());
    }

    #[test]
    fn test_failure_is_delivered() {
        let mut loader = ImageLoader::new();
        loader.spawn(|| Err("broken".to_string()));
        assert_eq!(poll_until(&mut loader), Some(Err("broken".to_string())));
    }

    #[test]
    fn test_slow_stale_load_is_dropped() {
        let mut loader = ImageLoader::new();
        let (release, gate) = sync_channel::<()>(0);

        // First request blocks until released, i.e. finishes after the second.
        loader.spawn(move || {
            let _ = gate.recv();
            Ok(image(1))
        });
        loader.spawn(|| Ok(image(2)));

        let result = poll_until(&mut loader).unwrap();
        assert_eq!(result.unwrap().width, 2);

        release.send(()).unwrap();
        std::thread::sleep(Duration::from_millis(50));
        assert_eq!(loader.poll(), None);
        assert!(!loader.is_pending());
    }

    #[test]
    fn test_missing_file_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut loader = ImageLoader::new();
        loader.request(dir.path().join("nope.png"));
        assert!(matches!(poll_until(&mut loader), Some(Err(_))));
    }
}
