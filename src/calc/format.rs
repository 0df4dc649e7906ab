/// Fixed-precision rendering of every number shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    precision: usize,
}

impl NumberFormat {
    pub const DEFAULT_PRECISION: usize = 6;

    pub fn new(precision: usize) -> Self {
        Self { precision }
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn num(&self, value: f64) -> String {
        format!("{:.*}", self.precision, value)
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PRECISION)
    }
}
