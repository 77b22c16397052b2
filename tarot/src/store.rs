use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;

use color_eyre::eyre::Result;
use tracing::{info, warn};

use tarot_core::CardArt;

/// Thumbnail size the worker decodes into, preserving the card ratio.
const ART_WIDTH: u32 = 60;
const ART_HEIGHT: u32 = 102;

struct Request {
    card_id: usize,
    path: PathBuf,
}

/// Outcome of one load; `art` is `None` when decoding failed.
pub struct LoadResult {
    pub card_id: usize,
    pub art: Option<CardArt>,
}

/// Fire-and-forget image loader on a background thread. Requests go in over
/// a channel, decoded thumbnails come back; the app drains results each
/// tick. Dropping the store closes the request channel and ends the worker.
pub struct ImageStore {
    requests: mpsc::Sender<Request>,
    results: mpsc::Receiver<LoadResult>,
}

impl ImageStore {
    pub fn spawn() -> Self {
        let (req_tx, req_rx) = mpsc::channel::<Request>();
        let (res_tx, res_rx) = mpsc::channel::<LoadResult>();

        thread::spawn(move || {
            for request in req_rx {
                let art = match load_art(&request.path) {
                    Ok(art) => {
                        info!(card_id = request.card_id, path = %request.path.display(), "image loaded");
                        Some(art)
                    }
                    Err(e) => {
                        warn!(
                            card_id = request.card_id,
                            path = %request.path.display(),
                            error = %e,
                            "image load failed, placeholder stays"
                        );
                        None
                    }
                };
                if res_tx.send(LoadResult { card_id: request.card_id, art }).is_err() {
                    break;
                }
            }
        });

        Self { requests: req_tx, results: res_rx }
    }

    /// Non-blocking; the result arrives through `drain` on a later tick.
    pub fn request(&self, card_id: usize, path: PathBuf) {
        let _ = self.requests.send(Request { card_id, path });
    }

    /// All results that arrived since the last drain.
    pub fn drain(&self) -> Vec<LoadResult> {
        self.results.try_iter().collect()
    }
}

fn load_art(path: &Path) -> Result<CardArt> {
    let bytes = std::fs::read(path)?;
    let decoded = image::load_from_memory(&bytes)?;
    let thumb = decoded.thumbnail(ART_WIDTH, ART_HEIGHT).to_rgb8();
    let (width, height) = thumb.dimensions();
    let pixels = thumb.pixels().map(|p| p.0).collect();
    Ok(CardArt::new(width, height, pixels))
}
