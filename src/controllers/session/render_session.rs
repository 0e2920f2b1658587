use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use log::{debug, info, warn};

use crate::controllers::session::errors::SessionError;
use crate::core::actions::cancellation::{CancelToken, GenerationToken};
use crate::core::actions::render::{render_cancelable, validate};
use crate::core::colour_mapping::colour_spec::ColourSpec;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::params::FractalSpec;

/// How a render that did not fail ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Completed { generation: u64, elapsed: Duration },
    Cancelled { generation: u64 },
}

impl RenderOutcome {
    #[must_use]
    pub fn generation(&self) -> u64 {
        match *self {
            Self::Completed { generation, .. } | Self::Cancelled { generation } => generation,
        }
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}

/// Holds the last finished image and the cancellation state of the render in
/// flight.
///
/// Every render is tagged with a generation. Starting a new render bumps the
/// generation, which makes any older render still running abort at its next
/// cancellation poll. Starting a render or calling [`cancel`](Self::cancel)
/// discards the stored image, so [`image`](Self::image) only ever returns a
/// buffer whose render ran to completion and was not cancelled or superseded.
#[derive(Debug, Default)]
pub struct RenderSession {
    image: Mutex<Option<Arc<PixelBuffer>>>,
    cancelled: AtomicBool,
    generation: AtomicU64,
    active_renders: AtomicUsize,
}

impl RenderSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders synchronously on the calling thread, using rayon for the
    /// per-pixel work.
    ///
    /// An invalid configuration is rejected without touching the session: the
    /// stored image, the generation and any render in flight are left alone.
    pub fn start_render(
        &self,
        viewport: &Viewport,
        fractal: &FractalSpec,
        colour: &ColourSpec,
    ) -> Result<RenderOutcome, SessionError> {
        let generation = self.admit(viewport, fractal, colour)?;
        self.run(generation, viewport, fractal, colour)
    }

    /// Starts a render on a background thread. The new generation is claimed
    /// before this returns, so a [`cancel`](Self::cancel) issued right after
    /// applies to it. Invalid configurations are rejected here, as in
    /// [`start_render`](Self::start_render), and no thread is spawned.
    pub fn spawn_render(
        self: &Arc<Self>,
        viewport: Viewport,
        fractal: FractalSpec,
        colour: ColourSpec,
    ) -> Result<JoinHandle<Result<RenderOutcome, SessionError>>, SessionError> {
        let generation = self.admit(&viewport, &fractal, &colour)?;
        let session = Arc::clone(self);

        Ok(thread::spawn(move || {
            session.run(generation, &viewport, &fractal, &colour)
        }))
    }

    /// The last completed image, if any.
    #[must_use]
    pub fn image(&self) -> Option<Arc<PixelBuffer>> {
        self.lock_image().clone()
    }

    /// Requests that the current render stop and drops the stored image.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        self.lock_image().take();
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn is_rendering(&self) -> bool {
        self.active_renders.load(Ordering::SeqCst) > 0
    }

    /// Generation of the most recently started render, `0` before the first.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    fn admit(
        &self,
        viewport: &Viewport,
        fractal: &FractalSpec,
        colour: &ColourSpec,
    ) -> Result<u64, SessionError> {
        if let Err(err) = validate(viewport, fractal, colour) {
            warn!("render rejected: {}", err);
            return Err(err.into());
        }

        Ok(self.begin())
    }

    fn begin(&self) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        self.cancelled.store(false, Ordering::SeqCst);
        self.lock_image().take();

        generation
    }

    fn run(
        &self,
        generation: u64,
        viewport: &Viewport,
        fractal: &FractalSpec,
        colour: &ColourSpec,
    ) -> Result<RenderOutcome, SessionError> {
        let _active = ActiveRender::enter(&self.active_renders);

        debug!(
            "render {} started: {}x{} {} with {}",
            generation,
            viewport.width,
            viewport.height,
            fractal.display_name(),
            colour.theme
        );

        let cancel_token = GenerationToken::new(&self.cancelled, &self.generation, generation);

        let start = Instant::now();
        let mut buffer = PixelBuffer::new(viewport.width, viewport.height);
        let result = render_cancelable(&mut buffer, viewport, fractal, colour, &cancel_token);
        let elapsed = start.elapsed();

        if let Err(err) = result {
            return match SessionError::from_render_error(err) {
                Some(err) => Err(err),
                None => {
                    info!("render {} cancelled after {:?}", generation, elapsed);
                    Ok(RenderOutcome::Cancelled { generation })
                }
            };
        }

        // Checked under the lock so a concurrent cancel or restart either
        // sees the stored image and clears it, or wins and the image is dropped.
        let mut image = self.lock_image();
        if cancel_token.is_cancelled() {
            info!("render {} discarded after {:?}", generation, elapsed);
            return Ok(RenderOutcome::Cancelled { generation });
        }
        *image = Some(Arc::new(buffer));

        info!(
            "render {} completed: {}x{} in {:?}",
            generation, viewport.width, viewport.height, elapsed
        );

        Ok(RenderOutcome::Completed {
            generation,
            elapsed,
        })
    }

    fn lock_image(&self) -> MutexGuard<'_, Option<Arc<PixelBuffer>>> {
        self.image.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

struct ActiveRender<'a>(&'a AtomicUsize);

impl<'a> ActiveRender<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for ActiveRender<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}
