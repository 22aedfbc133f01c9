//! Air-quality index value and display classification

use std::fmt;

/// Conventional upper end of the AQI scale
pub const AQI_MAX: u32 = 500;

/// Severity band for a given AQI reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AqiBand {
    Good,
    Moderate,
    UnhealthyForSensitive,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AqiBand {
    /// Bands partition `[0, ∞)` with upper bounds 50/100/150/200/300 (inclusive)
    pub fn classify(aqi: u32) -> Self {
        match aqi {
            0..=50 => AqiBand::Good,
            51..=100 => AqiBand::Moderate,
            101..=150 => AqiBand::UnhealthyForSensitive,
            151..=200 => AqiBand::Unhealthy,
            201..=300 => AqiBand::VeryUnhealthy,
            _ => AqiBand::Hazardous,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AqiBand::Good => "Good",
            AqiBand::Moderate => "Moderate",
            AqiBand::UnhealthyForSensitive => "Unhealthy for Sensitive Groups",
            AqiBand::Unhealthy => "Unhealthy",
            AqiBand::VeryUnhealthy => "Very Unhealthy",
            AqiBand::Hazardous => "Hazardous",
        }
    }
}

impl fmt::Display for AqiBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One derived pollutant reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollutantReading {
    pub name: &'static str,
    pub value: u32,
    pub unit: &'static str,
}

const BREAKDOWN: [(&str, f64, &str); 4] = [
    ("PM2.5", 0.4, "µg/m³"),
    ("PM10", 0.6, "µg/m³"),
    ("Ozone", 0.3, "ppb"),
    ("NO2", 0.2, "ppb"),
];

/// Decorative sub-pollutant readings, fixed fractions of the AQI
pub fn breakdown(aqi: u32) -> [PollutantReading; 4] {
    BREAKDOWN.map(|(name, factor, unit)| PollutantReading {
        name,
        value: (aqi as f64 * factor).round() as u32,
        unit,
    })
}

/// Current index value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aqi(u32);

impl Aqi {
    /// Clamp an initial reading into `[0, 500]`
    pub fn new(value: u32) -> Self {
        Self(value.min(AQI_MAX))
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn band(&self) -> AqiBand {
        AqiBand::classify(self.0)
    }

    /// Lower the index, flooring at 0; returns the amount actually removed
    pub fn improve(&mut self, by: u32) -> u32 {
        let before = self.0;
        self.0 = self.0.saturating_sub(by);
        before - self.0
    }

    /// Fraction of the 0-500 scale, for gauges
    pub fn ratio(&self) -> f64 {
        f64::from(self.0) / f64::from(AQI_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries() {
        let cases = [
            (0, AqiBand::Good),
            (50, AqiBand::Good),
            (51, AqiBand::Moderate),
            (100, AqiBand::Moderate),
            (101, AqiBand::UnhealthyForSensitive),
            (150, AqiBand::UnhealthyForSensitive),
            (151, AqiBand::Unhealthy),
            (200, AqiBand::Unhealthy),
            (201, AqiBand::VeryUnhealthy),
            (300, AqiBand::VeryUnhealthy),
            (301, AqiBand::Hazardous),
            (500, AqiBand::Hazardous),
            (u32::MAX, AqiBand::Hazardous),
        ];
        for (aqi, band) in cases {
            assert_eq!(AqiBand::classify(aqi), band, "aqi {aqi}");
        }
    }

    #[test]
    fn bands_are_monotonic() {
        let mut previous = AqiBand::classify(0);
        for aqi in 1..=600 {
            let band = AqiBand::classify(aqi);
            assert!(band >= previous, "band regressed at {aqi}");
            previous = band;
        }
    }

    #[test]
    fn breakdown_rounds_fractions() {
        let readings = breakdown(137);
        let values: Vec<u32> = readings.iter().map(|r| r.value).collect();
        // 54.8, 82.2, 41.1, 27.4
        assert_eq!(values, vec![55, 82, 41, 27]);
        assert_eq!(readings[0].name, "PM2.5");
        assert_eq!(readings[3].unit, "ppb");
    }

    #[test]
    fn improve_floors_at_zero() {
        let mut aqi = Aqi::new(25);
        assert_eq!(aqi.improve(40), 25);
        assert_eq!(aqi.value(), 0);
        assert_eq!(aqi.improve(15), 0);
        assert_eq!(aqi.value(), 0);
    }

    #[test]
    fn new_clamps_to_scale() {
        assert_eq!(Aqi::new(900).value(), 500);
        assert!((Aqi::new(250).ratio() - 0.5).abs() < f64::EPSILON);
    }
}
