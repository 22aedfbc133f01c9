//! Width breakpoints for layout decisions
//!
//! Views ask the breakpoint instead of comparing raw column counts.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    /// < 60 cols: tab numbers only, single-column views
    Compact,
    /// 60-99 cols
    Normal,
    /// 100+ cols: side-by-side panels
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Inclusive comparison
    pub fn at_least(&self, min: Breakpoint) -> bool {
        *self >= min
    }
}
