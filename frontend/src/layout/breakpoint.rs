use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Breakpoint {
    MobileSmall,
    MobileMedium,
    Tablet,
    Desktop,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 4] = [
        Breakpoint::MobileSmall,
        Breakpoint::MobileMedium,
        Breakpoint::Tablet,
        Breakpoint::Desktop,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Breakpoint::MobileSmall => "mobile-small",
            Breakpoint::MobileMedium => "mobile-medium",
            Breakpoint::Tablet => "tablet",
            Breakpoint::Desktop => "desktop",
        }
    }

    pub fn is_mobile(self) -> bool {
        self <= Breakpoint::MobileMedium
    }

    /// The next narrower breakpoint, if any.
    pub fn smaller(self) -> Option<Breakpoint> {
        match self {
            Breakpoint::MobileSmall => None,
            Breakpoint::MobileMedium => Some(Breakpoint::MobileSmall),
            Breakpoint::Tablet => Some(Breakpoint::MobileMedium),
            Breakpoint::Desktop => Some(Breakpoint::Tablet),
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Minimum viewport widths, in pixels, at which each breakpoint begins.
/// Must be ascending. Anything narrower than `mobile_medium` is
/// `MobileSmall`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakpointThresholds {
    pub mobile_medium: f64,
    pub tablet: f64,
    pub desktop: f64,
}

impl BreakpointThresholds {
    pub fn classify(&self, width: f64) -> Breakpoint {
        if width >= self.desktop {
            Breakpoint::Desktop
        } else if width >= self.tablet {
            Breakpoint::Tablet
        } else if width >= self.mobile_medium {
            Breakpoint::MobileMedium
        } else {
            Breakpoint::MobileSmall
        }
    }

    #[cfg(test)]
    pub fn is_ascending(&self) -> bool {
        self.mobile_medium < self.tablet && self.tablet < self.desktop
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BREAKPOINTS;

    #[test]
    fn classifies_at_threshold_edges() {
        assert_eq!(BREAKPOINTS.classify(0.0), Breakpoint::MobileSmall);
        assert_eq!(BREAKPOINTS.classify(374.9), Breakpoint::MobileSmall);
        assert_eq!(BREAKPOINTS.classify(375.0), Breakpoint::MobileMedium);
        assert_eq!(BREAKPOINTS.classify(767.0), Breakpoint::MobileMedium);
        assert_eq!(BREAKPOINTS.classify(768.0), Breakpoint::Tablet);
        assert_eq!(BREAKPOINTS.classify(1023.0), Breakpoint::Tablet);
        assert_eq!(BREAKPOINTS.classify(1024.0), Breakpoint::Desktop);
        assert_eq!(BREAKPOINTS.classify(3840.0), Breakpoint::Desktop);
    }

    #[test]
    fn classification_is_monotone() {
        assert!(BREAKPOINTS.is_ascending());
        let mut previous = Breakpoint::MobileSmall;
        for width in (0..2000).step_by(7) {
            let current = BREAKPOINTS.classify(f64::from(width));
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn ordering_and_names() {
        assert!(Breakpoint::MobileSmall < Breakpoint::Desktop);
        assert!(Breakpoint::MobileMedium.is_mobile());
        assert!(!Breakpoint::Tablet.is_mobile());
        assert_eq!(Breakpoint::Desktop.smaller(), Some(Breakpoint::Tablet));
        assert_eq!(Breakpoint::MobileSmall.smaller(), None);
        assert_eq!(Breakpoint::MobileMedium.to_string(), "mobile-medium");
        let parsed: Breakpoint = serde_json::from_str("\"tablet\"").unwrap();
        assert_eq!(parsed, Breakpoint::Tablet);
    }
}
