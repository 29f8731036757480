use rayon::prelude::*;

use crate::{
    bitmap::container::Bitmap,
    composite::over::blend_pixel_pair_checked,
    foundation::core::{BYTES_PER_PIXEL, PAIR_PIXELS, PixelPair},
    foundation::error::{OverError, OverResult},
};

const PAIR_LEN: usize = BYTES_PER_PIXEL * PAIR_PIXELS;

/// How the blend driver spreads work.
#[derive(Clone, Debug, Default)]
pub struct BlendOpts {
    /// Split foreground rows across a rayon pool.
    pub parallel: bool,
    /// Pool size when `parallel` is set; `None` uses rayon's default.
    pub threads: Option<usize>,
}

/// Counters collected by [`blend_with_opts`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct BlendStats {
    /// Foreground rows that held at least one pixel pair.
    pub rows: u64,
    /// Pixel pairs blended.
    pub pairs: u64,
    /// Lanes whose result alpha was zero (color channels divided by zero).
    pub zero_alpha_lanes: u64,
    /// Channel lanes whose value wrapped when packed to 8 bits.
    pub wrapped_lanes: u64,
}

impl BlendStats {
    fn merge(self, other: Self) -> Self {
        Self {
            rows: self.rows + other.rows,
            pairs: self.pairs + other.pairs,
            zero_alpha_lanes: self.zero_alpha_lanes + other.zero_alpha_lanes,
            wrapped_lanes: self.wrapped_lanes + other.wrapped_lanes,
        }
    }
}

/// Composite `fg` over `bg` with its top-left corner at `(offset_x, offset_y)`.
///
/// See [`blend_with_opts`].
pub fn blend(bg: &Bitmap, fg: &Bitmap, offset_x: u32, offset_y: u32) -> OverResult<Bitmap> {
    blend_with_opts(bg, fg, offset_x, offset_y, &BlendOpts::default()).map(|(out, _)| out)
}

/// Composite `fg` over `bg` and report what happened.
///
/// The result has the background's size and its compression and resolution header fields.
/// Only the foreground footprint is written: every pixel outside it stays transparent zero,
/// it is not copied from the background. Pixels are blended two at a time along each row, so
/// with an odd foreground width the last column is skipped and also stays zero.
///
/// The foreground must fit inside the background at the given offset; otherwise this returns
/// [`OverError::OutOfBounds`] before touching any pixel.
#[tracing::instrument(
    skip(bg, fg, opts),
    fields(
        bg_w = bg.width(),
        bg_h = bg.height(),
        fg_w = fg.width(),
        fg_h = fg.height(),
        parallel = opts.parallel,
    )
)]
pub fn blend_with_opts(
    bg: &Bitmap,
    fg: &Bitmap,
    offset_x: u32,
    offset_y: u32,
    opts: &BlendOpts,
) -> OverResult<(Bitmap, BlendStats)> {
    check_placement(bg, fg, offset_x, offset_y)?;

    let mut out = Bitmap::new(bg.width(), bg.height())?;
    out.set_compression(bg.header().compression);
    out.set_resolution(bg.header().h_resolution, bg.header().v_resolution);

    let fg_rows = fg.height() as usize;
    if fg_rows == 0 || (fg.width() as usize) < PAIR_PIXELS {
        tracing::debug!("foreground has no complete pixel pair; nothing to blend");
        return Ok((out, BlendStats::default()));
    }

    let row_len = bg.row_len();
    let fg_row_len = fg.row_len();
    let x0 = offset_x as usize * BYTES_PER_PIXEL;
    let y0 = offset_y as usize;

    let job = |(i, out_row): (usize, &mut [u8])| -> BlendStats {
        let bg_start = (y0 + i) * row_len + x0;
        let fg_start = i * fg_row_len;
        blend_row(
            &mut out_row[x0..x0 + fg_row_len],
            &bg.pixels()[bg_start..bg_start + fg_row_len],
            &fg.pixels()[fg_start..fg_start + fg_row_len],
        )
    };

    let stats = if opts.parallel {
        let pool = thread_pool(opts.threads)?;
        pool.install(|| {
            out.pixels_mut()
                .par_chunks_mut(row_len)
                .skip(y0)
                .take(fg_rows)
                .enumerate()
                .map(job)
                .reduce(BlendStats::default, BlendStats::merge)
        })
    } else {
        out.pixels_mut()
            .chunks_mut(row_len)
            .skip(y0)
            .take(fg_rows)
            .enumerate()
            .map(job)
            .fold(BlendStats::default(), BlendStats::merge)
    };

    tracing::debug!(
        rows = stats.rows,
        pairs = stats.pairs,
        zero_alpha_lanes = stats.zero_alpha_lanes,
        wrapped_lanes = stats.wrapped_lanes,
        "blend finished"
    );
    if stats.zero_alpha_lanes > 0 || stats.wrapped_lanes > 0 {
        tracing::warn!(
            zero_alpha_lanes = stats.zero_alpha_lanes,
            wrapped_lanes = stats.wrapped_lanes,
            "blend hit zero result alpha or 8-bit wrap; affected channels are not saturated"
        );
    }

    Ok((out, stats))
}

/// Blend one foreground row. All three slices cover the same `fg.width` pixels; a trailing
/// unpaired pixel is left as is in `out`.
fn blend_row(out: &mut [u8], bg: &[u8], fg: &[u8]) -> BlendStats {
    let mut stats = BlendStats::default();
    for ((o, b), f) in out
        .chunks_exact_mut(PAIR_LEN)
        .zip(bg.chunks_exact(PAIR_LEN))
        .zip(fg.chunks_exact(PAIR_LEN))
    {
        let (pair, hazards) = blend_pixel_pair_checked(&to_pair(b), &to_pair(f));
        o.copy_from_slice(&pair);
        stats.pairs += 1;
        stats.zero_alpha_lanes += u64::from(hazards.zero_alpha_lanes);
        stats.wrapped_lanes += u64::from(hazards.wrapped_lanes);
    }
    stats.rows = u64::from(stats.pairs > 0);
    stats
}

fn to_pair(chunk: &[u8]) -> PixelPair {
    let mut pair = [0u8; PAIR_LEN];
    pair.copy_from_slice(chunk);
    pair
}

fn check_placement(bg: &Bitmap, fg: &Bitmap, offset_x: u32, offset_y: u32) -> OverResult<()> {
    let right = u64::from(offset_x) + u64::from(fg.width());
    let bottom = u64::from(offset_y) + u64::from(fg.height());
    if right > u64::from(bg.width()) || bottom > u64::from(bg.height()) {
        return Err(OverError::out_of_bounds(format!(
            "{}x{} foreground at ({offset_x}, {offset_y}) exceeds {}x{} background",
            fg.width(),
            fg.height(),
            bg.width(),
            bg.height()
        )));
    }
    Ok(())
}

fn thread_pool(threads: Option<usize>) -> OverResult<rayon::ThreadPool> {
    let builder = match threads {
        Some(0) => return Err(OverError::validation("blend needs at least one thread")),
        Some(n) => rayon::ThreadPoolBuilder::new().num_threads(n),
        None => rayon::ThreadPoolBuilder::new(),
    };
    builder
        .thread_name(|i| format!("bmpover-blend-{i}"))
        .build()
        .map_err(|e| OverError::validation(format!("start blend pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/blend.rs"]
mod tests;
