use rayon::prelude::*;
use thiserror::Error;

use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError, write_colour};
use crate::core::data::point::Point;

/// Error type for pixel buffer generation.
///
/// Distinguishes between processing errors and cancellation, allowing callers
/// to handle each case appropriately.
#[derive(Debug, Error)]
pub enum GeneratePixelBufferError<A, M> {
    /// The operation was cancelled before completion.
    #[error("{0}")]
    Cancelled(Cancelled),
    /// The fractal algorithm reported a failure.
    #[error("algorithm error: {0}")]
    Algorithm(#[source] A),
    /// A colour mapping error occurred.
    #[error("colour map error: {0}")]
    ColourMap(#[source] M),
    /// The target buffer does not fit the request.
    #[error("pixel buffer error: {0}")]
    PixelBuffer(#[source] PixelBufferError),
}

/// Fills `pixel_buffer` by evaluating and colouring every pixel in place.
///
/// For cancel-aware generation, use [`generate_pixel_buffer_cancelable`].
pub fn generate_pixel_buffer<Alg, CMap>(
    pixel_buffer: &mut PixelBuffer,
    algorithm: &Alg,
    colour_map: &CMap,
) -> Result<(), GeneratePixelBufferError<Alg::Failure, CMap::Failure>>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Failure: Send,
    CMap: ColourMap<T = Alg::Success> + Sync,
    CMap::Failure: Send,
{
    generate_pixel_buffer_cancelable(pixel_buffer, algorithm, colour_map, &NeverCancel)
}

/// Cancel-aware in-place rendering.
///
/// Rows are coloured in parallel, each one writing only its own slice of the
/// buffer. Every row checks `cancel` at its start and every
/// [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels. On
/// [`GeneratePixelBufferError::Cancelled`] the buffer contents are partial and
/// must not be presented as a finished image.
pub fn generate_pixel_buffer_cancelable<Alg, CMap, C>(
    pixel_buffer: &mut PixelBuffer,
    algorithm: &Alg,
    colour_map: &CMap,
    cancel: &C,
) -> Result<(), GeneratePixelBufferError<Alg::Failure, CMap::Failure>>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Failure: Send,
    CMap: ColourMap<T = Alg::Success> + Sync,
    CMap::Failure: Send,
    C: CancelToken,
{
    let row_stride = pixel_buffer.row_stride();

    if row_stride == 0 {
        return Ok(());
    }

    pixel_buffer
        .data_mut()
        .par_chunks_mut(row_stride)
        .enumerate()
        .try_for_each(|(y, row)| {
            for (i, rgb) in row.chunks_exact_mut(3).enumerate() {
                if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 {
                    cancel.check().map_err(GeneratePixelBufferError::Cancelled)?;
                }

                let pixel = Point {
                    x: i as u32,
                    y: y as u32,
                };
                let value = algorithm
                    .compute(pixel)
                    .map_err(GeneratePixelBufferError::Algorithm)?;
                let colour = colour_map
                    .map(value)
                    .map_err(GeneratePixelBufferError::ColourMap)?;

                write_colour(rgb, colour);
            }

            Ok(())
        })
}
