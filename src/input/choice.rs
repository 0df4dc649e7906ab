/// A closed set of options the user picks by 1-based number
pub trait Choice: Copy + 'static {
    /// Every option, in menu order
    const ALL: &'static [Self];

    /// Map a 1-based menu number to its option
    fn from_number(number: i64) -> Option<Self> {
        if number < 1 {
            return None;
        }
        Self::ALL.get((number - 1) as usize).copied()
    }

    /// Number of options, the upper bound of a selection prompt
    fn count() -> i64 {
        Self::ALL.len() as i64
    }
}
