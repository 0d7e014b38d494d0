/// Potential energy split by interaction kind.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EnergyTerm {
    pub pair: f64,
    pub bonded: f64,
}

impl EnergyTerm {
    pub fn new(pair: f64, bonded: f64) -> Self {
        Self { pair, bonded }
    }

    #[inline]
    pub fn total(&self) -> f64 {
        self.pair + self.bonded
    }
}
