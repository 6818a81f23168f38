use rand::Rng;

use crate::grid::Dir;

/// In-place Fisher-Yates: for `counter` from `n` down to 1, swap slot
/// `counter - 1` with a uniformly drawn index in `0..counter`.
pub fn fisher_yates<T>(items: &mut [T], rng: &mut impl Rng) {
    for counter in (1..=items.len()).rev() {
        let index = rng.gen_range(0..counter);
        items.swap(counter - 1, index);
    }
}

/// Decides the order in which a freshly visited cell tries its neighbors.
pub trait NeighborOrder {
    fn order(&mut self, dirs: &mut [Dir; 4]);
}

/// Uniform random order drawn from `R`.
pub struct RandomOrder<R> {
    rng: R,
}

impl<R: Rng> RandomOrder<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> NeighborOrder for RandomOrder<R> {
    fn order(&mut self, dirs: &mut [Dir; 4]) {
        fisher_yates(dirs, &mut self.rng);
    }
}

/// Leaves the candidates as built: up, right, down, left.
pub struct Identity;

impl NeighborOrder for Identity {
    fn order(&mut self, _dirs: &mut [Dir; 4]) {}
}

/// Always tries the directions in the given order.
pub struct Fixed(pub [Dir; 4]);

impl NeighborOrder for Fixed {
    fn order(&mut self, dirs: &mut [Dir; 4]) {
        *dirs = self.0;
    }
}
