// SPDX-License-Identifier: MPL-2.0
//! Iced subscription wrapping one preview decoder.
//!
//! The subscription is identified by the video and its clip URL, so it lives
//! exactly as long as the app keeps returning it. Its first message hands a
//! [`PreviewHandle`] to the app; frames follow as image handles.

use super::{DecoderCommand, DecoderEvent, PreviewDecoder, PreviewMedia};
use crate::catalog::VideoId;
use crate::error::PreviewError;
use futures_util::SinkExt;
use iced::widget::image;
use iced::{stream, Subscription};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Cloneable sender the UI uses to control a running decoder.
#[derive(Clone)]
pub struct PreviewHandle {
    commands: mpsc::UnboundedSender<DecoderCommand>,
}

impl PreviewHandle {
    fn send(&self, command: DecoderCommand) -> Result<(), PreviewError> {
        self.commands
            .send(command)
            .map_err(|_| PreviewError::NotRunning)
    }

    /// Asks the decoder to terminate. Ignored if it already has.
    pub fn stop(&self) {
        let _ = self.send(DecoderCommand::Stop);
    }

    /// A handle whose commands land in the returned receiver.
    #[cfg(test)]
    pub(crate) fn detached() -> (Self, mpsc::UnboundedReceiver<DecoderCommand>) {
        let (commands, receiver) = mpsc::unbounded_channel();
        (Self { commands }, receiver)
    }
}

impl PreviewMedia for PreviewHandle {
    fn rewind(&mut self) -> Result<(), PreviewError> {
        self.send(DecoderCommand::Rewind)
    }

    fn play(&mut self) -> Result<(), PreviewError> {
        self.send(DecoderCommand::Play)
    }

    fn pause(&mut self) -> Result<(), PreviewError> {
        self.send(DecoderCommand::Pause)
    }
}

impl std::fmt::Debug for PreviewHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreviewHandle")
            .field("running", &!self.commands.is_closed())
            .finish()
    }
}

/// Messages emitted by a preview subscription.
#[derive(Debug, Clone)]
pub enum PreviewMessage {
    /// The decoder is running and accepts commands.
    Started(PreviewHandle),
    /// A new frame is ready for display.
    FrameReady(image::Handle),
    /// The decoder moved back to the first frame.
    Rewound,
    /// The clip looped back to its start.
    EndOfStream,
    Error(PreviewError),
}

impl From<DecoderEvent> for PreviewMessage {
    fn from(event: DecoderEvent) -> Self {
        match event {
            DecoderEvent::FrameReady(frame) => PreviewMessage::FrameReady(
                image::Handle::from_rgba(
                    frame.width,
                    frame.height,
                    Arc::unwrap_or_clone(frame.rgba_data),
                ),
            ),
            DecoderEvent::Rewound => PreviewMessage::Rewound,
            DecoderEvent::EndOfStream => PreviewMessage::EndOfStream,
            DecoderEvent::Error(err) => PreviewMessage::Error(err),
        }
    }
}

/// Identity of a preview subscription.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct PreviewSource {
    video_id: VideoId,
    url: String,
}

/// Creates the preview subscription for one warm card.
///
/// Every message is tagged with `video_id` so a single app-level mapping can
/// route it back to its card.
pub fn preview_playback(video_id: VideoId, url: String) -> Subscription<(VideoId, PreviewMessage)> {
    Subscription::run_with(PreviewSource { video_id, url }, |source| {
        preview_stream(source.clone())
    })
}

fn preview_stream(
    source: PreviewSource,
) -> impl futures_util::Stream<Item = (VideoId, PreviewMessage)> {
    stream::channel(100, move |mut output| async move {
        let PreviewSource { video_id, url } = source;

        let mut decoder = match PreviewDecoder::new(url) {
            Ok(decoder) => decoder,
            Err(err) => {
                let _ = output.send((video_id, PreviewMessage::Error(err))).await;
                return;
            }
        };

        let handle = PreviewHandle {
            commands: decoder.command_sender(),
        };
        if output
            .send((video_id.clone(), PreviewMessage::Started(handle)))
            .await
            .is_err()
        {
            return;
        }

        while let Some(event) = decoder.recv_event().await {
            let message = PreviewMessage::from(event);
            let is_error = matches!(message, PreviewMessage::Error(_));
            if output.send((video_id.clone(), message)).await.is_err() || is_error {
                break;
            }
        }

        log::debug!("Preview subscription for {video_id} finished");
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_forwards_media_commands() {
        let (mut handle, mut commands) = PreviewHandle::detached();
        handle.rewind().unwrap();
        handle.play().unwrap();
        handle.pause().unwrap();

        assert_eq!(commands.try_recv(), Ok(DecoderCommand::Rewind));
        assert_eq!(commands.try_recv(), Ok(DecoderCommand::Play));
        assert_eq!(commands.try_recv(), Ok(DecoderCommand::Pause));
    }

    #[test]
    fn closed_handle_reports_not_running() {
        let (mut handle, commands) = PreviewHandle::detached();
        drop(commands);
        assert_eq!(handle.play(), Err(PreviewError::NotRunning));
        // Stopping a dead decoder is silent.
        handle.stop();
    }

    #[test]
    fn decoder_errors_become_error_messages() {
        let message = PreviewMessage::from(DecoderEvent::Error(PreviewError::NoVideoStream));
        assert!(matches!(
            message,
            PreviewMessage::Error(PreviewError::NoVideoStream)
        ));
    }

    #[test]
    fn frames_become_image_handles() {
        let frame = super::super::PreviewFrame {
            rgba_data: Arc::new(vec![0; 2 * 2 * 4]),
            width: 2,
            height: 2,
        };
        assert!(matches!(
            PreviewMessage::from(DecoderEvent::FrameReady(frame)),
            PreviewMessage::FrameReady(_)
        ));
    }
}
