//! In-memory media backend for tests
//!
//! Records every write instead of producing files and plays back scripted
//! frames for scene detection. Deterministic and filesystem-free apart from
//! the source-existence check the engine performs itself.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::VideoInfo;
use crate::error::{CutError, CutResult};
use crate::media::{ClipHandle, FrameBuffer, MediaBackend, OpenVideo, WriteSettings};

/// One recorded output write
#[derive(Debug, Clone, PartialEq)]
pub struct WriteRecord {
    pub path: PathBuf,
    pub ranges: Vec<(f64, f64)>,
    pub settings: WriteSettings,
}

#[derive(Default)]
struct MockState {
    writes: Vec<WriteRecord>,
    attempts: usize,
    fail_write_at: Option<usize>,
}

/// Scripted media backend
pub struct MockBackend {
    info: VideoInfo,
    frames: Vec<Option<FrameBuffer>>,
    state: Arc<Mutex<MockState>>,
}

impl MockBackend {
    pub fn new(info: VideoInfo) -> Self {
        Self {
            info,
            frames: Vec::new(),
            state: Arc::new(Mutex::new(MockState::default())),
        }
    }

    /// Script the frames returned by `sample_frame`, one per whole second.
    /// A `None` entry simulates a decode failure at that timestamp.
    pub fn with_frames(mut self, frames: Vec<Option<FrameBuffer>>) -> Self {
        self.frames = frames;
        self
    }

    /// Make the n-th write attempt (0-based) fail with an encode error
    pub fn failing_write_at(self, attempt: usize) -> Self {
        self.state.lock().unwrap().fail_write_at = Some(attempt);
        self
    }

    /// Every write recorded so far, in the order it happened
    pub fn writes(&self) -> Vec<WriteRecord> {
        self.state.lock().unwrap().writes.clone()
    }

    /// Open the scripted video directly, bypassing the path check
    pub fn video(&self) -> MockVideo {
        MockVideo {
            info: self.info.clone(),
            frames: self.frames.clone(),
            state: Arc::clone(&self.state),
        }
    }
}

/// A uniform single-color frame, handy for scripting scene changes
pub fn uniform_frame(value: u8) -> FrameBuffer {
    FrameBuffer {
        width: 4,
        height: 4,
        channels: 3,
        data: vec![value; 48],
    }
}

pub struct MockVideo {
    info: VideoInfo,
    frames: Vec<Option<FrameBuffer>>,
    state: Arc<Mutex<MockState>>,
}

impl OpenVideo for MockVideo {
    type Clip = MockClip;

    fn info(&self) -> &VideoInfo {
        &self.info
    }

    fn subclip(&self, start_seconds: f64, end_seconds: f64) -> CutResult<MockClip> {
        Ok(MockClip {
            ranges: vec![(start_seconds, end_seconds)],
            state: Arc::clone(&self.state),
        })
    }

    fn sample_frame(&self, t: f64) -> CutResult<FrameBuffer> {
        match self.frames.get(t as usize) {
            Some(Some(frame)) => Ok(frame.clone()),
            _ => Err(CutError::DecodeError {
                message: format!("No scripted frame at {:.1}s", t),
            }),
        }
    }
}

pub struct MockClip {
    ranges: Vec<(f64, f64)>,
    state: Arc<Mutex<MockState>>,
}

impl ClipHandle for MockClip {
    fn duration_seconds(&self) -> f64 {
        self.ranges.iter().map(|(start, end)| end - start).sum()
    }

    fn write(&self, output_path: &Path, settings: &WriteSettings) -> CutResult<()> {
        let mut state = self.state.lock().unwrap();
        let attempt = state.attempts;
        state.attempts += 1;
        if state.fail_write_at == Some(attempt) {
            return Err(CutError::EncodeError {
                path: output_path.display().to_string(),
                message: "scripted write failure".to_string(),
            });
        }
        state.writes.push(WriteRecord {
            path: output_path.to_path_buf(),
            ranges: self.ranges.clone(),
            settings: settings.clone(),
        });
        Ok(())
    }
}

impl MediaBackend for MockBackend {
    type Video = MockVideo;

    fn open_video(&self, path: &Path) -> CutResult<MockVideo> {
        if !path.exists() {
            return Err(CutError::SourceNotFound {
                path: path.display().to_string(),
            });
        }
        Ok(MockVideo {
            info: self.info.clone(),
            frames: self.frames.clone(),
            state: Arc::clone(&self.state),
        })
    }

    fn concatenate(&self, clips: Vec<MockClip>) -> CutResult<MockClip> {
        if clips.is_empty() {
            return Err(CutError::NoClipsToMerge);
        }
        let ranges = clips.into_iter().flat_map(|clip| clip.ranges).collect();
        Ok(MockClip {
            ranges,
            state: Arc::clone(&self.state),
        })
    }
}
