//! Linear value scale with rounded bounds.

/// Maps data values onto a vertical pixel range.
///
/// The domain always contains zero and is widened to whole multiples of a
/// 1/2/5 x 10^n step, so tick labels come out as round numbers.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct LinearScale {
    min: f64,
    max: f64,
    step: f64,
    /// Pixel y of `min`
    bottom: f64,
    /// Pixel y of `max`
    top: f64,
}

impl LinearScale {
    /// Build a scale covering `lo..=hi` plus `headroom` (fraction of the span)
    /// on the side(s) away from zero.
    pub fn nice(lo: f64, hi: f64, target_ticks: usize, headroom: f64, bottom: f64, top: f64) -> Self {
        let mut lo = lo.min(0.0);
        let mut hi = hi.max(0.0);
        if hi - lo <= f64::EPSILON {
            hi = 1.0;
        }

        let span = hi - lo;
        if hi > 0.0 {
            hi += span * headroom;
        }
        if lo < 0.0 {
            lo -= span * headroom;
        }

        let step = nice_step((hi - lo) / target_ticks.max(1) as f64);
        let min = (lo / step).floor() * step;
        let max = (hi / step).ceil() * step;

        Self {
            min,
            max,
            step,
            bottom,
            top,
        }
    }

    /// Pixel y for a data value.
    pub fn map(&self, value: f64) -> f64 {
        let t = (value - self.min) / (self.max - self.min);
        self.bottom + (self.top - self.bottom) * t
    }

    /// Tick values from the lower to the upper bound, inclusive.
    pub fn ticks(&self) -> Vec<f64> {
        let count = ((self.max - self.min) / self.step).round() as usize;
        (0..=count)
            .map(|i| self.min + i as f64 * self.step)
            .collect()
    }

    /// Decimals needed to print ticks without losing precision.
    pub fn tick_decimals(&self) -> usize {
        if self.step >= 1.0 {
            0
        } else {
            (-self.step.log10()).ceil() as usize
        }
    }

    #[cfg(test)]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[cfg(test)]
    pub fn max(&self) -> f64 {
        self.max
    }
}

/// Round a raw step up to 1, 2 or 5 times a power of ten.
fn nice_step(raw: f64) -> f64 {
    if raw <= 0.0 || !raw.is_finite() {
        return 1.0;
    }
    let exp = 10f64.powi(raw.log10().floor() as i32);
    let fraction = raw / exp;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * exp
}
