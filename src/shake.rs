use rand::Rng;

/// Screen-shake state: a single strength value that decays linearly and
/// produces a fresh random render offset each frame while active.
pub struct ScreenShake {
    amount: f32,
    decay: f32,
}

impl ScreenShake {
    pub fn new(decay: f32) -> Self {
        ScreenShake { amount: 0.0, decay }
    }

    /// Raises the shake to at least `strength`. Overlapping triggers keep
    /// the strongest shake rather than stacking.
    pub fn trigger(&mut self, strength: f32) {
        self.amount = self.amount.max(strength);
    }

    pub fn update(&mut self) {
        self.amount = (self.amount - self.decay).max(0.0);
    }

    pub fn is_active(&self) -> bool {
        self.amount > 0.0
    }

    /// Render offset for this frame: uniform in [-amount, amount] per axis,
    /// (0, 0) once the shake has decayed.
    pub fn offset(&self, rng: &mut impl Rng) -> (i32, i32) {
        if self.amount <= 0.0 {
            return (0, 0);
        }
        let range = self.amount as i32;
        (
            rng.gen_range(-range..=range),
            rng.gen_range(-range..=range),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn decays_to_zero() {
        let mut shake = ScreenShake::new(0.5);
        shake.trigger(5.0);

        for _ in 0..10 {
            shake.update();
        }
        assert!(!shake.is_active());
    }

    #[test]
    fn trigger_keeps_the_stronger_shake() {
        let mut shake = ScreenShake::new(0.5);
        shake.trigger(10.0);
        shake.trigger(5.0);
        assert_eq!(shake.amount, 10.0);
    }

    #[test]
    fn offset_is_bounded_by_amount() {
        let mut shake = ScreenShake::new(0.5);
        shake.trigger(5.0);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let (dx, dy) = shake.offset(&mut rng);
            assert!(dx.abs() <= 5);
            assert!(dy.abs() <= 5);
        }
    }

    #[test]
    fn idle_shake_offsets_nothing() {
        let shake = ScreenShake::new(0.5);
        let mut rng = StdRng::seed_from_u64(43);
        assert_eq!(shake.offset(&mut rng), (0, 0));
    }
}
