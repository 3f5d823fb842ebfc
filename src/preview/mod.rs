// SPDX-License-Identifier: MPL-2.0
//! Muted hover previews.
//!
//! Each recently hovered card keeps a decoder session warm so that hovering
//! it again resumes instantly. Sessions live in a bounded [`WarmSet`]; the
//! app turns every warm entry into a [`preview_playback`] subscription. An
//! evicted entry has its decoder stopped, and leaving the page detaches every
//! session so the decoders end while their subscriptions are gone.
//!
//! Cards never talk to the decoder directly. They produce an effect that is
//! applied to a [`PreviewMedia`], the seam that tests replace with a fake.

mod decoder;
mod subscription;

pub use decoder::{DecoderCommand, DecoderEvent, PreviewDecoder, PreviewFrame};
pub use subscription::{preview_playback, PreviewHandle, PreviewMessage};

use crate::catalog::VideoId;
use crate::config;
use crate::error::PreviewError;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Once;

static FFMPEG_INIT: Once = Once::new();

/// Initializes FFmpeg once per process and silences its console output.
///
/// # Errors
///
/// Returns [`PreviewError::OpenFailed`] if FFmpeg cannot be initialized.
pub fn init_ffmpeg() -> Result<(), PreviewError> {
    let mut init_result = Ok(());

    FFMPEG_INIT.call_once(|| {
        if let Err(e) = ffmpeg_next::init() {
            init_result = Err(PreviewError::OpenFailed(format!(
                "FFmpeg initialization failed: {e}"
            )));
            return;
        }

        // SAFETY: av_log_set_level is thread-safe and only affects logging
        unsafe {
            ffmpeg_next::ffi::av_log_set_level(ffmpeg_next::ffi::AV_LOG_ERROR);
        }
    });

    init_result
}

/// Media element controls a card needs to drive its preview.
pub trait PreviewMedia {
    /// Moves back to the first frame.
    fn rewind(&mut self) -> Result<(), PreviewError>;

    /// Begins or resumes playback.
    fn play(&mut self) -> Result<(), PreviewError>;

    /// Pauses playback, keeping the position.
    fn pause(&mut self) -> Result<(), PreviewError>;
}

/// A warm preview session.
#[derive(Debug, Clone)]
pub struct WarmPreview {
    /// Clip location, also the identity of the subscription.
    pub url: String,
    /// Present once the subscription has started its decoder.
    pub handle: Option<PreviewHandle>,
    /// Playback was requested before the handle arrived.
    pub play_requested: bool,
}

/// Commands reach the decoder once it has started. Until then a play
/// request is remembered and replayed by [`WarmSet::attach`]; a fresh decoder
/// already sits on the first frame, so rewinding early is a no-op.
impl PreviewMedia for WarmPreview {
    fn rewind(&mut self) -> Result<(), PreviewError> {
        match self.handle.as_mut() {
            Some(handle) => handle.rewind(),
            None => Ok(()),
        }
    }

    fn play(&mut self) -> Result<(), PreviewError> {
        match self.handle.as_mut() {
            Some(handle) => handle.play(),
            None => {
                self.play_requested = true;
                Ok(())
            }
        }
    }

    fn pause(&mut self) -> Result<(), PreviewError> {
        self.play_requested = false;
        match self.handle.as_mut() {
            Some(handle) => handle.pause(),
            None => Ok(()),
        }
    }
}

/// Recently hovered previews, least recently used evicted first.
#[derive(Debug)]
pub struct WarmSet {
    entries: LruCache<VideoId, WarmPreview>,
}

impl WarmSet {
    /// Creates a set holding at most `capacity` sessions (at least one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(config::MIN_WARM_PREVIEWS))
            .unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
        }
    }

    /// Marks `id` as most recently used, inserting it if needed.
    ///
    /// Returns the id of the session evicted to make room, if any.
    pub fn touch(&mut self, id: &VideoId, url: &str) -> Option<VideoId> {
        if self.entries.get(id).is_some() {
            return None;
        }

        let evicted = self.entries.push(
            id.clone(),
            WarmPreview {
                url: url.to_string(),
                handle: None,
                play_requested: false,
            },
        );

        evicted.map(|(evicted_id, preview)| {
            if let Some(handle) = preview.handle {
                handle.stop();
            }
            log::debug!("Evicted warm preview {evicted_id}");
            evicted_id
        })
    }

    /// Stores the handle of a started session.
    ///
    /// A play request made while the decoder was starting is honored here.
    /// Handles for sessions that were already evicted are stopped.
    pub fn attach(&mut self, id: &VideoId, mut handle: PreviewHandle) {
        let Some(preview) = self.entries.peek_mut(id) else {
            handle.stop();
            return;
        };

        if std::mem::take(&mut preview.play_requested) {
            start(&mut handle);
        }
        preview.handle = Some(handle);
    }

    /// Stops every running decoder and forgets its handle.
    ///
    /// The entries stay warm: when their subscriptions start again, commands
    /// issued in between are deferred to the new decoders.
    pub fn detach_all(&mut self) {
        for (_, preview) in self.entries.iter_mut() {
            if let Some(handle) = preview.handle.take() {
                handle.stop();
            }
            preview.play_requested = false;
        }
    }

    /// The warm session of `id`, as media a card can drive.
    pub fn get_mut(&mut self, id: &VideoId) -> Option<&mut WarmPreview> {
        self.entries.peek_mut(id)
    }

    /// Forgets a session whose decoder failed.
    pub fn remove(&mut self, id: &VideoId) {
        self.entries.pop(id);
    }

    #[must_use]
    pub fn contains(&self, id: &VideoId) -> bool {
        self.entries.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Warm sessions, most recently used first.
    pub fn iter(&self) -> impl Iterator<Item = (&VideoId, &WarmPreview)> {
        self.entries.iter()
    }
}

/// Rewinds then plays. Failures are not surfaced to the user.
pub fn start(media: &mut impl PreviewMedia) {
    if let Err(err) = media.rewind() {
        log::debug!("Preview rewind failed: {err}");
    }
    if let Err(err) = media.play() {
        log::debug!("Preview play failed: {err}");
    }
}

/// Pauses, keeping the current position.
pub fn pause(media: &mut impl PreviewMedia) {
    if let Err(err) = media.pause() {
        log::debug!("Preview pause failed: {err}");
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Records the calls made on it.
    #[derive(Debug, Default)]
    pub struct RecordingMedia {
        pub calls: Vec<&'static str>,
        pub fail_play: bool,
    }

    impl PreviewMedia for RecordingMedia {
        fn rewind(&mut self) -> Result<(), PreviewError> {
            self.calls.push("rewind");
            Ok(())
        }

        fn play(&mut self) -> Result<(), PreviewError> {
            self.calls.push("play");
            if self.fail_play {
                Err(PreviewError::NotRunning)
            } else {
                Ok(())
            }
        }

        fn pause(&mut self) -> Result<(), PreviewError> {
            self.calls.push("pause");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingMedia;
    use super::*;

    fn id(value: &str) -> VideoId {
        VideoId::from(value)
    }

    #[test]
    fn start_rewinds_before_playing() {
        let mut media = RecordingMedia::default();
        start(&mut media);
        assert_eq!(media.calls, vec!["rewind", "play"]);
    }

    #[test]
    fn failed_play_is_swallowed() {
        let mut media = RecordingMedia {
            fail_play: true,
            ..RecordingMedia::default()
        };
        start(&mut media);
        pause(&mut media);
        assert_eq!(media.calls, vec!["rewind", "play", "pause"]);
    }

    #[test]
    fn warm_set_evicts_least_recently_used() {
        let mut warm = WarmSet::new(2);
        assert_eq!(warm.touch(&id("a"), "a.mp4"), None);
        assert_eq!(warm.touch(&id("b"), "b.mp4"), None);
        // Re-hovering "a" makes "b" the oldest.
        assert_eq!(warm.touch(&id("a"), "a.mp4"), None);
        assert_eq!(warm.touch(&id("c"), "c.mp4"), Some(id("b")));

        assert!(warm.contains(&id("a")));
        assert!(!warm.contains(&id("b")));
        assert_eq!(warm.len(), 2);
    }

    #[test]
    fn warm_set_capacity_is_at_least_one() {
        let mut warm = WarmSet::new(0);
        warm.touch(&id("a"), "a.mp4");
        assert_eq!(warm.touch(&id("b"), "b.mp4"), Some(id("a")));
        assert_eq!(warm.len(), 1);
    }

    #[test]
    fn iteration_is_most_recent_first() {
        let mut warm = WarmSet::new(3);
        warm.touch(&id("a"), "a.mp4");
        warm.touch(&id("b"), "b.mp4");
        let ids: Vec<_> = warm.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn play_before_handle_is_deferred_until_attach() {
        let mut warm = WarmSet::new(2);
        warm.touch(&id("a"), "a.mp4");
        start(warm.get_mut(&id("a")).unwrap());

        let (handle, mut commands) = PreviewHandle::detached();
        warm.attach(&id("a"), handle);

        assert_eq!(commands.try_recv(), Ok(DecoderCommand::Rewind));
        assert_eq!(commands.try_recv(), Ok(DecoderCommand::Play));
        assert!(commands.try_recv().is_err());
    }

    #[test]
    fn pause_cancels_a_deferred_play() {
        let mut warm = WarmSet::new(2);
        warm.touch(&id("a"), "a.mp4");
        start(warm.get_mut(&id("a")).unwrap());
        pause(warm.get_mut(&id("a")).unwrap());

        let (handle, mut commands) = PreviewHandle::detached();
        warm.attach(&id("a"), handle);
        assert!(commands.try_recv().is_err());
    }

    #[test]
    fn attached_session_forwards_commands() {
        let mut warm = WarmSet::new(2);
        warm.touch(&id("a"), "a.mp4");
        let (handle, mut commands) = PreviewHandle::detached();
        warm.attach(&id("a"), handle);

        pause(warm.get_mut(&id("a")).unwrap());
        assert_eq!(commands.try_recv(), Ok(DecoderCommand::Pause));
        assert!(warm.get_mut(&id("missing")).is_none());
    }

    #[test]
    fn attaching_to_an_evicted_session_stops_it() {
        let mut warm = WarmSet::new(1);
        let (handle, mut commands) = PreviewHandle::detached();
        warm.attach(&id("gone"), handle);
        assert_eq!(commands.try_recv(), Ok(DecoderCommand::Stop));
    }

    #[test]
    fn detach_all_stops_decoders_and_defers_later_plays() {
        let mut warm = WarmSet::new(2);
        warm.touch(&id("a"), "a.mp4");
        let (old, mut old_commands) = PreviewHandle::detached();
        warm.attach(&id("a"), old);

        warm.detach_all();
        assert_eq!(old_commands.try_recv(), Ok(DecoderCommand::Stop));
        assert!(warm.contains(&id("a")));

        start(warm.get_mut(&id("a")).unwrap());
        assert!(old_commands.try_recv().is_err());

        let (new, mut new_commands) = PreviewHandle::detached();
        warm.attach(&id("a"), new);
        assert_eq!(new_commands.try_recv(), Ok(DecoderCommand::Rewind));
        assert_eq!(new_commands.try_recv(), Ok(DecoderCommand::Play));
    }

    #[test]
    fn eviction_stops_the_evicted_decoder() {
        let mut warm = WarmSet::new(1);
        warm.touch(&id("a"), "a.mp4");
        let (handle, mut commands) = PreviewHandle::detached();
        warm.attach(&id("a"), handle);

        warm.touch(&id("b"), "b.mp4");
        assert_eq!(commands.try_recv(), Ok(DecoderCommand::Stop));
    }
}
