use std::io::Cursor;
use std::time::Duration;

use iced::widget::image::Handle;
use image::codecs::gif::GifDecoder;
use image::AnimationDecoder;

// Near-zero GIF delays play at 100ms.
const MINIMUM_FRAME_DELAY: Duration = Duration::from_millis(20);
const FALLBACK_FRAME_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Clone)]
pub struct AnimationFrame {
    pub handle: Handle,
    pub delay: Duration,
}

/// Decoded frames of an animated GIF plus the playback position.
#[derive(Debug, Clone)]
pub struct GifAnimation {
    frames: Vec<AnimationFrame>,
    current: usize,
    elapsed: Duration,
}

impl GifAnimation {
    fn new(frames: Vec<AnimationFrame>) -> Self {
        Self {
            frames,
            current: 0,
            elapsed: Duration::ZERO,
        }
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    #[cfg(test)]
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_handle(&self) -> &Handle {
        &self.frames[self.current].handle
    }

    pub fn advance(&mut self, tick: Duration) {
        self.elapsed += tick;

        while self.elapsed >= self.frames[self.current].delay {
            self.elapsed -= self.frames[self.current].delay;
            self.current = (self.current + 1) % self.frames.len();
        }
    }
}

#[derive(Debug, Clone)]
pub enum DecodedImage {
    Still(Handle),
    Animated(GifAnimation),
}

impl DecodedImage {
    pub fn current_handle(&self) -> &Handle {
        match self {
            DecodedImage::Still(handle) => handle,
            DecodedImage::Animated(animation) => animation.current_handle(),
        }
    }

    pub fn is_animated(&self) -> bool {
        matches!(self, DecodedImage::Animated(_))
    }

    pub fn advance(&mut self, tick: Duration) {
        if let DecodedImage::Animated(animation) = self {
            animation.advance(tick);
        }
    }
}

/// Splits GIF bytes into frames. Anything that is not a multi-frame GIF is
/// handed to iced as-is and shown still.
pub fn decode_image_bytes(bytes: Vec<u8>) -> DecodedImage {
    match decode_gif_frames(&bytes) {
        Ok(frames) if frames.len() > 1 => {
            let animation = GifAnimation::new(frames);
            log::debug!("[ANIMATION] Decoded {} frames", animation.frame_count());
            DecodedImage::Animated(animation)
        }
        Ok(_) => DecodedImage::Still(Handle::from_bytes(bytes)),
        Err(e) => {
            log::debug!("[ANIMATION] Not an animated GIF ({}), showing still image", e);
            DecodedImage::Still(Handle::from_bytes(bytes))
        }
    }
}

fn decode_gif_frames(bytes: &[u8]) -> image::ImageResult<Vec<AnimationFrame>> {
    let decoder = GifDecoder::new(Cursor::new(bytes))?;
    let frames = decoder.into_frames().collect_frames()?;

    Ok(frames
        .into_iter()
        .map(|frame| {
            let delay = normalize_delay(Duration::from(frame.delay()));
            let buffer = frame.into_buffer();
            let (width, height) = buffer.dimensions();

            AnimationFrame {
                handle: Handle::from_rgba(width, height, buffer.into_raw()),
                delay,
            }
        })
        .collect())
}

fn normalize_delay(delay: Duration) -> Duration {
    if delay < MINIMUM_FRAME_DELAY {
        FALLBACK_FRAME_DELAY
    } else {
        delay
    }
}
