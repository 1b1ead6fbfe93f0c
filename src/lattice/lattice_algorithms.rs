use log::{trace, warn};
use serde::{Deserialize, Serialize};

/// Rational approximation `numerator / denominator` of a real number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rational {
    pub numerator: i64,
    pub denominator: i64,
    /// Absolute error `|numerator / denominator - x|` against the approximated value.
    pub error: f64,
}

impl Rational {
    pub fn value(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    pub fn as_pair(&self) -> (i64, i64) {
        (self.numerator, self.denominator)
    }
}

/// Find a small-denominator rational approximation of `x` by continued-fraction expansion.
///
/// Convergents `p_i / q_i` are generated term by term. Expansion stops as soon as a
/// convergent is within `accuracy` of `x`, after `max_iterations` terms, when the
/// remainder vanishes (x is rational), or when the next convergent would overflow.
/// The best convergent seen is returned; the call never fails.
///
/// # Arguments
/// * `x` - Value to approximate (any sign)
/// * `max_iterations` - Maximum number of continued-fraction terms (at least one is evaluated)
/// * `accuracy` - Termination threshold for `|p/q - x|`
///
/// # Returns
/// The best convergent found. Non-finite input yields `0/1` with infinite error.
pub fn rationalize(x: f64, max_iterations: usize, accuracy: f64) -> Rational {
    if !x.is_finite() {
        warn!("Cannot rationalize non-finite value {}", x);
        return Rational {
            numerator: 0,
            denominator: 1,
            error: f64::INFINITY,
        };
    }

    let sign = if x < 0.0 { -1 } else { 1 };
    let target = x.abs();

    // Convergent recurrences p_i = a_i p_{i-1} + p_{i-2}, q_i = a_i q_{i-1} + q_{i-2}
    let (mut p_prev, mut p_prev2) = (1_i64, 0_i64);
    let (mut q_prev, mut q_prev2) = (0_i64, 1_i64);

    let mut remainder = target;
    let mut best: Option<Rational> = None;

    for iteration in 0..max_iterations.max(1) {
        let term_f = remainder.floor();
        if term_f > i64::MAX as f64 {
            break;
        }
        let term = term_f as i64;

        let next = term
            .checked_mul(p_prev)
            .and_then(|v| v.checked_add(p_prev2))
            .zip(term.checked_mul(q_prev).and_then(|v| v.checked_add(q_prev2)));
        let Some((p, q)) = next else {
            trace!("rationalize({}): convergent overflow after {} terms", x, iteration);
            break;
        };

        let error = (p as f64 / q as f64 - target).abs();
        if best.map_or(true, |b| error < b.error) {
            best = Some(Rational {
                numerator: sign * p,
                denominator: q,
                error,
            });
        }

        if error <= accuracy {
            break;
        }

        let fraction = remainder - term_f;
        if fraction <= f64::EPSILON {
            break;
        }
        remainder = 1.0 / fraction;

        p_prev2 = p_prev;
        p_prev = p;
        q_prev2 = q_prev;
        q_prev = q;
    }

    // Only empty when |x| itself does not fit in an i64.
    let best = best.unwrap_or(Rational {
        numerator: 0,
        denominator: 1,
        error: target,
    });
    if best.error > accuracy {
        warn!(
            "rationalize({}) reached {}/{} with error {:.3e} above accuracy {:.3e}",
            x, best.numerator, best.denominator, best.error, accuracy
        );
    }
    best
}
