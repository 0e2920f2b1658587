use rayon::prelude::*;
use thiserror::Error;

use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Why a cancel-aware escape grid was not produced.
#[derive(Debug, Error)]
pub enum GenerateFractalError<E> {
    #[error("{0}")]
    Cancelled(#[from] Cancelled),
    #[error("algorithm error: {0}")]
    Algorithm(#[source] E),
}

/// Evaluates a `width`×`height` grid with one rayon task per row and returns
/// the results in row-major order.
pub fn generate_fractal_parallel_rayon<Alg>(
    width: u32,
    height: u32,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    match generate_fractal_parallel_rayon_cancelable(width, height, algorithm, &NeverCancel) {
        Ok(grid) => Ok(grid),
        Err(GenerateFractalError::Algorithm(err)) => Err(err),
        Err(GenerateFractalError::Cancelled(_)) => {
            unreachable!("NeverCancel token should never signal cancellation")
        }
    }
}

/// Cancel-aware [`generate_fractal_parallel_rayon`]. Each row polls `cancel`
/// before its first pixel and then every [`CANCEL_CHECK_INTERVAL_PIXELS`].
pub fn generate_fractal_parallel_rayon_cancelable<Alg, C>(
    width: u32,
    height: u32,
    algorithm: &Alg,
    cancel: &C,
) -> Result<Vec<Alg::Success>, GenerateFractalError<Alg::Failure>>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
    C: CancelToken,
{
    let evaluate_row = |y: u32| -> Result<Vec<Alg::Success>, GenerateFractalError<Alg::Failure>> {
        (0..width)
            .map(|x| {
                if x as usize % CANCEL_CHECK_INTERVAL_PIXELS == 0 {
                    cancel.check()?;
                }

                algorithm
                    .compute(Point { x, y })
                    .map_err(GenerateFractalError::Algorithm)
            })
            .collect()
    };

    let rows: Vec<Vec<Alg::Success>> = (0..height)
        .into_par_iter()
        .map(evaluate_row)
        .collect::<Result<_, _>>()?;

    let mut grid = Vec::with_capacity(width as usize * height as usize);
    for row in rows {
        grid.extend(row);
    }

    Ok(grid)
}
