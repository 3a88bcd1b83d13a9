//! Responsive breakpoint definitions for the dashboard.

/// Individual breakpoint with an inclusive minimum width and optional maximum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Breakpoint {
    /// Short name used in CSS variables and logs.
    pub name: &'static str,
    /// Inclusive lower bound in CSS pixels.
    pub min_width: u16,
    /// Inclusive upper bound in CSS pixels, `None` for the last breakpoint.
    pub max_width: Option<u16>,
}

/// Phones in portrait.
pub const XS: Breakpoint = Breakpoint {
    name: "xs",
    min_width: 0,
    max_width: Some(479),
};
/// Large phones.
pub const SM: Breakpoint = Breakpoint {
    name: "sm",
    min_width: 480,
    max_width: Some(767),
};
/// Tablets.
pub const MD: Breakpoint = Breakpoint {
    name: "md",
    min_width: 768,
    max_width: Some(1023),
};
/// Laptops.
pub const LG: Breakpoint = Breakpoint {
    name: "lg",
    min_width: 1024,
    max_width: None,
};

/// Ordered breakpoints used for layout decisions.
pub const BREAKPOINTS: [Breakpoint; 4] = [XS, SM, MD, LG];

/// Find the first breakpoint matching the supplied width.
#[must_use]
pub fn for_width(width: u16) -> Breakpoint {
    BREAKPOINTS
        .iter()
        .copied()
        .find(|bp| width >= bp.min_width && bp.max_width.is_none_or(|max| width <= max))
        .unwrap_or(LG)
}

impl Breakpoint {
    /// Narrow viewports render compact labels and drawers instead of menus.
    #[must_use]
    pub const fn is_narrow(self) -> bool {
        self.min_width < MD.min_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_selection_matches_ranges() {
        assert_eq!(for_width(0), XS);
        assert_eq!(for_width(480), SM);
        assert_eq!(for_width(767), SM);
        assert_eq!(for_width(768), MD);
        assert_eq!(for_width(4000), LG);
    }

    #[test]
    fn narrow_stops_at_md() {
        assert!(for_width(320).is_narrow());
        assert!(for_width(767).is_narrow());
        assert!(!for_width(768).is_narrow());
        assert!(!for_width(1440).is_narrow());
    }
}
