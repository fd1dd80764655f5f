//! Temperature-scaled categorical sampling over a probability vector.

use ndarray::ArrayView1;
use rand::Rng;

/// Smallest temperature used when the caller passes a non-positive value.
pub const TEMPERATURE_FLOOR: f32 = 1e-6;

/// Draw one vocabulary index from a vector of non-negative likelihoods.
///
/// The entries are moved to the log domain and divided by `temperature`
/// before the draw, so lower temperatures sharpen the distribution toward
/// `argmax(probs)` and higher temperatures flatten it. Zero entries become
/// `-inf` logits and are never selected; this is tolerated, not an error.
/// Temperatures `<= 0` are clamped to [`TEMPERATURE_FLOOR`].
///
/// The RNG is caller-supplied so tests can seed the draw.
pub fn sample<R: Rng + ?Sized>(probs: ArrayView1<'_, f32>, temperature: f32, rng: &mut R) -> usize {
    let t = temperature.max(TEMPERATURE_FLOOR);
    let logits: Vec<f32> = probs.iter().map(|&p| p.ln() / t).collect();

    // Softmax with the max subtracted to keep the exponentials finite.
    let max = logits.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
    if !max.is_finite() {
        // Every entry was zero likelihood; nothing to distinguish.
        return 0;
    }
    let weights: Vec<f32> = logits.iter().map(|&l| (l - max).exp()).collect();
    let total: f32 = weights.iter().sum();

    // Cumulative draw over the unnormalized weights. Rounding can leave a
    // sliver past the last weight, so remember the last selectable index.
    let mut draw = rng.gen::<f32>() * total;
    let mut winner = 0;
    for (i, &w) in weights.iter().enumerate() {
        if w <= 0.0 {
            continue;
        }
        winner = i;
        if draw < w {
            break;
        }
        draw -= w;
    }
    winner
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_index_in_range() {
        let mut rng = StdRng::seed_from_u64(1);
        let probs = array![0.2_f32, 0.3, 0.1, 0.4];
        for _ in 0..500 {
            let idx = sample(probs.view(), 0.8, &mut rng);
            assert!(idx < 4);
        }
    }

    #[test]
    fn test_zero_probability_never_selected() {
        let mut rng = StdRng::seed_from_u64(2);
        let probs = array![0.0_f32, 1.0, 3.0];
        for _ in 0..1000 {
            let idx = sample(probs.view(), 1.0, &mut rng);
            assert_ne!(idx, 0);
        }
    }

    #[test]
    fn test_low_temperature_converges_to_argmax() {
        let mut rng = StdRng::seed_from_u64(3);
        let probs = array![0.1_f32, 0.2, 0.6, 0.1];
        for _ in 0..500 {
            assert_eq!(sample(probs.view(), 0.01, &mut rng), 2);
        }
    }

    #[test]
    fn test_non_positive_temperature_is_clamped() {
        let mut rng = StdRng::seed_from_u64(4);
        let probs = array![0.25_f32, 0.75];
        // Clamped to the floor, which acts like argmax; must not panic.
        assert_eq!(sample(probs.view(), 0.0, &mut rng), 1);
        assert_eq!(sample(probs.view(), -1.0, &mut rng), 1);
    }

    #[test]
    fn test_high_temperature_spreads_mass() {
        let mut rng = StdRng::seed_from_u64(5);
        let probs = array![0.5_f32, 0.5];
        let mut seen = [false; 2];
        for _ in 0..200 {
            seen[sample(probs.view(), 1.0, &mut rng)] = true;
        }
        assert!(seen[0] && seen[1]);
    }

    #[test]
    fn test_all_zero_probabilities_fall_back() {
        let mut rng = StdRng::seed_from_u64(6);
        let probs = array![0.0_f32, 0.0, 0.0];
        assert_eq!(sample(probs.view(), 0.5, &mut rng), 0);
    }
}
