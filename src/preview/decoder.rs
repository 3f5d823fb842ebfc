// SPDX-License-Identifier: MPL-2.0
//! Muted preview decoder using FFmpeg.
//!
//! Only the best video stream is decoded; audio packets are skipped, so a
//! preview can never make a sound. Frames are converted to RGBA, paced by
//! their presentation timestamps and handed over a small bounded channel.
//! Reaching the end of the clip rewinds it and keeps playing.

use crate::error::PreviewError;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Idle poll interval while paused.
const IDLE_POLL: Duration = Duration::from_millis(10);

/// A decoded preview frame.
#[derive(Debug, Clone)]
pub struct PreviewFrame {
    /// RGBA pixel data (width × height × 4 bytes).
    pub rgba_data: Arc<Vec<u8>>,
    pub width: u32,
    pub height: u32,
}

/// Commands sent to the decoder task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoderCommand {
    /// Move back to the first frame, keeping the play/pause state.
    Rewind,
    /// Start or resume decoding from the current position.
    Play,
    /// Stop sending frames; the position is kept.
    Pause,
    /// Terminate the task.
    Stop,
}

/// Events sent from the decoder to the UI.
#[derive(Debug, Clone)]
pub enum DecoderEvent {
    FrameReady(PreviewFrame),
    /// A [`DecoderCommand::Rewind`] was applied; frames sent before this
    /// event come from the old position.
    Rewound,
    /// The clip ended and was rewound.
    EndOfStream,
    Error(PreviewError),
}

/// Preview decoder running on a blocking Tokio thread.
pub struct PreviewDecoder {
    command_tx: mpsc::UnboundedSender<DecoderCommand>,
    /// Bounded so a slow UI applies backpressure instead of buffering frames.
    event_rx: mpsc::Receiver<DecoderEvent>,
}

impl PreviewDecoder {
    /// Spawns a decoder for `source`, a local path or a URL FFmpeg can open.
    ///
    /// The clip is opened on the decoder thread; failures to open it arrive
    /// as a [`DecoderEvent::Error`] and end the task.
    ///
    /// # Errors
    ///
    /// Returns [`PreviewError::OpenFailed`] if `source` is a local path that
    /// does not exist.
    pub fn new(source: impl Into<String>) -> Result<Self, PreviewError> {
        let source = source.into();
        if !is_remote(&source) && !std::path::Path::new(&source).exists() {
            return Err(PreviewError::OpenFailed(format!("file not found: {source}")));
        }

        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::channel(2);

        // FFmpeg contexts are not Send; keep them on one blocking thread.
        tokio::task::spawn_blocking(move || {
            if let Err(err) = decoder_loop_blocking(&source, command_rx, &event_tx) {
                log::debug!("Preview decoder for {source} stopped: {err}");
                let _ = event_tx.blocking_send(DecoderEvent::Error(err));
            }
        });

        Ok(Self {
            command_tx,
            event_rx,
        })
    }

    /// Sends a command to the decoder task.
    ///
    /// # Errors
    ///
    /// Returns [`PreviewError::NotRunning`] once the task has ended.
    pub fn send_command(&self, command: DecoderCommand) -> Result<(), PreviewError> {
        self.command_tx
            .send(command)
            .map_err(|_| PreviewError::NotRunning)
    }

    /// Returns a sender the UI can keep to control this decoder.
    #[must_use]
    pub fn command_sender(&self) -> mpsc::UnboundedSender<DecoderCommand> {
        self.command_tx.clone()
    }

    /// Receives the next event, or `None` once the task has terminated.
    pub async fn recv_event(&mut self) -> Option<DecoderEvent> {
        self.event_rx.recv().await
    }
}

/// Senders handed out by [`PreviewDecoder::command_sender`] keep the command
/// channel open, so a paused task would never notice it was abandoned.
impl Drop for PreviewDecoder {
    fn drop(&mut self) {
        let _ = self.send_command(DecoderCommand::Stop);
    }
}

/// True for sources FFmpeg must fetch over the network.
fn is_remote(source: &str) -> bool {
    source.contains("://")
}

/// Play/pause bookkeeping shared by the command handler and the decode step.
#[derive(Debug, Default)]
struct Pacing {
    is_playing: bool,
    /// Wall-clock instant matching `first_pts`.
    started_at: Option<Instant>,
    first_pts: Option<f64>,
}

impl Pacing {
    fn play(&mut self) {
        self.is_playing = true;
        self.restart();
    }

    fn pause(&mut self) {
        self.is_playing = false;
        self.started_at = None;
        self.first_pts = None;
    }

    fn restart(&mut self) {
        self.started_at = self.is_playing.then(Instant::now);
        self.first_pts = None;
    }

    /// How long to wait before showing a frame stamped `pts_secs`.
    fn delay_for(&mut self, pts_secs: f64) -> Option<Duration> {
        let started_at = self.started_at?;
        let first = *self.first_pts.get_or_insert(pts_secs);
        let target = started_at + Duration::from_secs_f64((pts_secs - first).max(0.0));
        target.checked_duration_since(Instant::now())
    }
}

fn decoder_loop_blocking(
    source: &str,
    mut command_rx: mpsc::UnboundedReceiver<DecoderCommand>,
    event_tx: &mpsc::Sender<DecoderEvent>,
) -> Result<(), PreviewError> {
    super::init_ffmpeg()?;

    let mut ictx =
        ffmpeg_next::format::input(&source).map_err(|e| PreviewError::OpenFailed(e.to_string()))?;

    let input = ictx
        .streams()
        .best(ffmpeg_next::media::Type::Video)
        .ok_or(PreviewError::NoVideoStream)?;
    let video_stream_index = input.index();
    let time_base = input.time_base();
    let time_base_f64 = f64::from(time_base.numerator()) / f64::from(time_base.denominator());

    let context = ffmpeg_next::codec::context::Context::from_parameters(input.parameters())
        .map_err(|e| PreviewError::OpenFailed(format!("codec context: {e}")))?;
    let mut decoder = context
        .decoder()
        .video()
        .map_err(|e| PreviewError::OpenFailed(format!("video decoder: {e}")))?;

    let width = decoder.width();
    let height = decoder.height();
    let mut scaler = ffmpeg_next::software::scaling::Context::get(
        decoder.format(),
        width,
        height,
        ffmpeg_next::format::Pixel::RGBA,
        width,
        height,
        ffmpeg_next::software::scaling::Flags::BILINEAR,
    )
    .map_err(|e| PreviewError::DecodingFailed(format!("scaler: {e}")))?;

    let mut pacing = Pacing::default();

    loop {
        match command_rx.try_recv() {
            Ok(DecoderCommand::Rewind) => {
                rewind(&mut ictx, &mut decoder)?;
                pacing.restart();
                if event_tx.blocking_send(DecoderEvent::Rewound).is_err() {
                    return Ok(());
                }
            }
            Ok(DecoderCommand::Play) => pacing.play(),
            Ok(DecoderCommand::Pause) => pacing.pause(),
            Ok(DecoderCommand::Stop) | Err(mpsc::error::TryRecvError::Disconnected) => break,
            Err(mpsc::error::TryRecvError::Empty) => {}
        }

        if !pacing.is_playing {
            std::thread::sleep(IDLE_POLL);
            continue;
        }

        let mut frame_sent = false;
        for (stream, packet) in ictx.packets() {
            if stream.index() != video_stream_index {
                continue;
            }
            if let Err(e) = decoder.send_packet(&packet) {
                log::debug!("Skipping undecodable preview packet: {e}");
                continue;
            }

            let mut decoded = ffmpeg_next::frame::Video::empty();
            if decoder.receive_frame(&mut decoded).is_err() {
                continue;
            }

            let mut rgba = ffmpeg_next::frame::Video::empty();
            scaler
                .run(&decoded, &mut rgba)
                .map_err(|e| PreviewError::DecodingFailed(format!("scaling: {e}")))?;

            let pts_secs = decoded
                .timestamp()
                .map_or(0.0, |pts| pts as f64 * time_base_f64);
            if let Some(delay) = pacing.delay_for(pts_secs) {
                std::thread::sleep(delay);
            }

            let frame = PreviewFrame {
                rgba_data: Arc::new(extract_rgba_data(&rgba)),
                width,
                height,
            };
            if event_tx.blocking_send(DecoderEvent::FrameReady(frame)).is_err() {
                return Ok(());
            }
            frame_sent = true;
            break;
        }

        if !frame_sent {
            // Loop the clip like a muted inline preview does.
            rewind(&mut ictx, &mut decoder)?;
            pacing.restart();
            if event_tx.blocking_send(DecoderEvent::EndOfStream).is_err() {
                return Ok(());
            }
        }
    }

    Ok(())
}

fn rewind(
    ictx: &mut ffmpeg_next::format::context::Input,
    decoder: &mut ffmpeg_next::decoder::Video,
) -> Result<(), PreviewError> {
    ictx.seek(0, ..0)
        .map_err(|e| PreviewError::DecodingFailed(format!("rewind: {e}")))?;
    decoder.flush();
    Ok(())
}

/// Copies RGBA rows out of a frame whose stride may exceed `width * 4`.
fn extract_rgba_data(frame: &ffmpeg_next::frame::Video) -> Vec<u8> {
    copy_rows(
        frame.data(0),
        frame.stride(0),
        frame.width() as usize * 4,
        frame.height() as usize,
    )
}

fn copy_rows(data: &[u8], stride: usize, row_bytes: usize, rows: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(row_bytes * rows);
    for row in data.chunks(stride.max(1)).take(rows) {
        out.extend_from_slice(&row[..row_bytes.min(row.len())]);
    }
    out
}
