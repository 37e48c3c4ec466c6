use lps_core::{
    models::{FitError, InsufficientData, Regression, Sample},
    ports::Fitter,
};
use tracing::{Level, event};

/// Ordinary least squares regression of quantity on price.
///
/// The sums of squares are accumulated about the sample means (a two-pass
/// scheme), which keeps the fit well-conditioned for prices far from zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct OlsFitter;

impl Fitter for OlsFitter {
    fn fit(&self, samples: &[Sample]) -> Result<Regression, FitError> {
        let n = samples.len();
        let Some(first) = samples.first() else {
            return Err(InsufficientData::TooFewSamples(0).into());
        };
        if n < 2 {
            return Err(InsufficientData::TooFewSamples(n).into());
        }
        if samples.iter().all(|sample| sample.price() == first.price()) {
            return Err(InsufficientData::ConstantPrice(n).into());
        }

        let count = n as f64;
        let mean_p = samples.iter().map(Sample::price).sum::<f64>() / count;
        let mean_q = samples.iter().map(Sample::quantity).sum::<f64>() / count;

        let (sxx, sxy, syy) = samples.iter().fold((0.0, 0.0, 0.0), |(sxx, sxy, syy), s| {
            let dp = s.price() - mean_p;
            let dq = s.quantity() - mean_q;
            (sxx + dp * dp, sxy + dp * dq, syy + dq * dq)
        });

        // Distinct prices imply sxx > 0 in exact arithmetic, but the deviations can still underflow
        if !(sxx > 0.0) {
            return Err(InsufficientData::ConstantPrice(n).into());
        }

        let slope = sxy / sxx;
        let intercept = mean_q - slope * mean_p;
        if !(slope.is_finite() && intercept.is_finite()) {
            return Err(FitError::NonFinite);
        }

        let ss_res = samples
            .iter()
            .map(|s| {
                let residual = s.quantity() - (intercept + slope * s.price());
                residual * residual
            })
            .sum::<f64>();

        let r2 = coefficient_of_determination(ss_res, syy);

        event!(
            Level::DEBUG,
            samples = n,
            intercept,
            slope,
            r2 = ?r2,
            "fitted linear demand"
        );

        Ok(Regression {
            intercept,
            slope,
            r2,
            samples: n,
        })
    }
}

/// R² = 1 − SS_res/SS_tot, clamped to [0, 1] to absorb round-off.
///
/// When every quantity is identical SS_tot is zero; the fit is then perfect
/// (R² = 1) if it reproduces every sample, and undefined otherwise. It is also
/// undefined when the sums of squares overflow.
fn coefficient_of_determination(ss_res: f64, ss_tot: f64) -> Option<f64> {
    if !(ss_res.is_finite() && ss_tot.is_finite()) {
        None
    } else if ss_tot > 0.0 {
        Some((1.0 - ss_res / ss_tot).clamp(0.0, 1.0))
    } else if ss_res == 0.0 {
        Some(1.0)
    } else {
        None
    }
}
