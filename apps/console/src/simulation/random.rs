/// Source of uniform samples in `[0, 1)`.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// Uniform pick from a fixed pool. Panics on an empty pool.
pub fn pick<'a, T>(pool: &'a [T], rng: &mut dyn RandomSource) -> &'a T {
    let scaled = rng.next_f64().clamp(0.0, 1.0) * pool.len() as f64;
    let index = (scaled as usize).min(pool.len().saturating_sub(1));
    &pool[index]
}

/// `Math.random()` of the host page.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserRandom;

#[cfg(target_arch = "wasm32")]
impl RandomSource for BrowserRandom {
    fn next_f64(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
pub struct ThreadRandom(rand::rngs::ThreadRng);

#[cfg(not(target_arch = "wasm32"))]
impl Default for ThreadRandom {
    fn default() -> Self {
        Self(rand::thread_rng())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl RandomSource for ThreadRandom {
    fn next_f64(&mut self) -> f64 {
        use rand::Rng;
        self.0.gen::<f64>()
    }
}

pub fn default_random() -> Box<dyn RandomSource> {
    #[cfg(target_arch = "wasm32")]
    {
        Box::new(BrowserRandom)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Box::new(ThreadRandom::default())
    }
}

/// Replays a fixed list of samples, wrapping around at the end.
#[cfg(test)]
#[derive(Clone, Debug)]
pub struct SequenceRandom {
    values: Vec<f64>,
    cursor: usize,
}

#[cfg(test)]
impl SequenceRandom {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }
}

#[cfg(test)]
impl RandomSource for SequenceRandom {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_maps_samples_to_indices() {
        let pool = ["a", "b", "c", "d"];
        let mut rng = SequenceRandom::new(vec![0.0, 0.26, 0.74, 0.999_9, 1.0]);
        let picked: Vec<_> = (0..5).map(|_| *pick(&pool, &mut rng)).collect();
        assert_eq!(picked, vec!["a", "b", "c", "d", "d"]);
    }

    #[test]
    fn sequence_wraps_around() {
        let mut rng = SequenceRandom::new(vec![0.1, 0.2]);
        assert_eq!(rng.next_f64(), 0.1);
        assert_eq!(rng.next_f64(), 0.2);
        assert_eq!(rng.next_f64(), 0.1);
    }

    #[test]
    fn thread_random_stays_in_unit_interval() {
        let mut rng = ThreadRandom::default();
        for _ in 0..100 {
            let value = rng.next_f64();
            assert!((0.0..1.0).contains(&value));
        }
    }
}
