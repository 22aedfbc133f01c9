//! Gate stages and dashboard tabs

use std::fmt;

/// Which screen the session has reached; only ever advances
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum GateStage {
    Unauthenticated,
    AwaitingLocation,
    Active,
}

impl GateStage {
    pub fn name(&self) -> &'static str {
        match self {
            GateStage::Unauthenticated => "Sign in",
            GateStage::AwaitingLocation => "Location",
            GateStage::Active => "Dashboard",
        }
    }
}

impl fmt::Display for GateStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GateStage::Unauthenticated => "signed out",
            GateStage::AwaitingLocation => "waiting for a location",
            GateStage::Active => "the dashboard is active",
        };
        f.write_str(text)
    }
}

/// Dashboard views; the selector can only hold one of these
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Map,
    Alerts,
    Reforestation,
    Marketplace,
    Social,
    Aqi,
}

impl Tab {
    pub const ALL: [Tab; 7] = [
        Tab::Home,
        Tab::Map,
        Tab::Alerts,
        Tab::Reforestation,
        Tab::Marketplace,
        Tab::Social,
        Tab::Aqi,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Map => "Map",
            Tab::Alerts => "Alerts",
            Tab::Reforestation => "Reforestation",
            Tab::Marketplace => "Marketplace",
            Tab::Social => "Social",
            Tab::Aqi => "AQI",
        }
    }

    /// Position in the tab bar (0-based)
    pub fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|tab| tab == self)
            .unwrap_or_default()
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next tab in the bar, wrapping at the end
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous tab in the bar, wrapping at the start
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_are_ordered() {
        assert!(GateStage::Unauthenticated < GateStage::AwaitingLocation);
        assert!(GateStage::AwaitingLocation < GateStage::Active);
    }

    #[test]
    fn tab_index_roundtrip() {
        for (i, tab) in Tab::ALL.iter().enumerate() {
            assert_eq!(tab.index(), i);
            assert_eq!(Tab::from_index(i), Some(*tab));
        }
        assert_eq!(Tab::from_index(7), None);
    }

    #[test]
    fn tab_cycle_wraps() {
        assert_eq!(Tab::Aqi.next(), Tab::Home);
        assert_eq!(Tab::Home.prev(), Tab::Aqi);
        assert_eq!(Tab::Map.next(), Tab::Alerts);

        let mut tab = Tab::Home;
        for _ in 0..Tab::ALL.len() {
            tab = tab.next();
        }
        assert_eq!(tab, Tab::Home);
    }
}
