use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
/// Chooses which records of a dataset get analysed.
pub trait IndexSelector {
    /// One index in `0..len`, or `None` for an empty dataset.
    fn pick(&mut self, len: usize) -> Option<usize>;
    /// Up to `count` distinct indices in `0..len`, ascending.
    fn sample(&mut self, len: usize, count: usize) -> Vec<usize>;
}
/// Uniform selection driven by an explicit RNG so runs can be replayed.
pub struct RandomSelector {
    rng: StdRng,
}
impl RandomSelector {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}
impl IndexSelector for RandomSelector {
    fn pick(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.rng.gen_range(0..len))
    }
    fn sample(&mut self, len: usize, count: usize) -> Vec<usize> {
        let amount = count.min(len);
        let mut picked = rand::seq::index::sample(&mut self.rng, len, amount).into_vec();
        picked.sort_unstable();
        picked
    }
}
/// Always returns the same record.
pub struct FixedSelector {
    index: usize,
}
impl FixedSelector {
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}
impl IndexSelector for FixedSelector {
    fn pick(&mut self, len: usize) -> Option<usize> {
        (self.index < len).then_some(self.index)
    }
    fn sample(&mut self, len: usize, count: usize) -> Vec<usize> {
        if count == 0 {
            return Vec::new();
        }
        self.pick(len).into_iter().collect()
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn same_seed_same_choices() {
        let mut a = RandomSelector::from_seed(7);
        let mut b = RandomSelector::from_seed(7);
        for _ in 0..20 {
            assert_eq!(a.pick(1000), b.pick(1000));
        }
        assert_eq!(a.sample(1000, 12), b.sample(1000, 12));
    }
    #[test]
    fn pick_stays_in_range() {
        let mut selector = RandomSelector::from_entropy();
        for _ in 0..100 {
            let index = selector.pick(5).unwrap();
            assert!(index < 5);
        }
        assert_eq!(selector.pick(0), None);
    }
    #[test]
    fn sample_is_distinct_sorted_and_capped() {
        let mut selector = RandomSelector::from_seed(42);
        let picked = selector.sample(50, 10);
        assert_eq!(picked.len(), 10);
        assert!(picked.windows(2).all(|w| w[0] < w[1]));
        assert!(picked.iter().all(|&i| i < 50));
        assert_eq!(selector.sample(3, 10), vec![0, 1, 2]);
        assert!(selector.sample(0, 4).is_empty());
    }
    #[test]
    fn fixed_selector_is_bounds_checked() {
        let mut selector = FixedSelector::new(4);
        assert_eq!(selector.pick(10), Some(4));
        assert_eq!(selector.pick(4), None);
        assert_eq!(selector.sample(10, 3), vec![4]);
        assert!(selector.sample(10, 0).is_empty());
    }
}
