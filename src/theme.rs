//! Visual themes for the page shell.

/// The three site themes. `Minimal` is the bare layout; `Day` and `Night`
/// add a full-page backdrop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Minimal,
    Day,
    Night,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Minimal, Theme::Day, Theme::Night];

    /// The class written to `document.body` and to session storage. The empty
    /// string is the stored spelling of the minimal theme.
    pub fn class(self) -> &'static str {
        match self {
            Theme::Minimal => "",
            Theme::Day => "theme-day",
            Theme::Night => "theme-night",
        }
    }

    pub fn from_class(class: &str) -> Option<Theme> {
        match class {
            "" => Some(Theme::Minimal),
            "theme-day" => Some(Theme::Day),
            "theme-night" => Some(Theme::Night),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Minimal => "Minimal",
            Theme::Day => "Daylight",
            Theme::Night => "Night",
        }
    }

    /// Icon name understood by the `Icon` component.
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Minimal => "sparkles",
            Theme::Day => "sun",
            Theme::Night => "moon",
        }
    }

    /// Whether the theme paints a full-page background image.
    pub fn has_backdrop(self) -> bool {
        !matches!(self, Theme::Minimal)
    }

    /// First-visit default: daytime hours get the day theme, the rest of the
    /// clock gets night.
    pub fn default_for_hour(hour: u32) -> Theme {
        if (6..18).contains(&hour) {
            Theme::Day
        } else {
            Theme::Night
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_round_trips() {
        for theme in Theme::ALL {
            assert_eq!(Theme::from_class(theme.class()), Some(theme));
        }
        assert_eq!(Theme::from_class("theme-sepia"), None);
    }

    #[test]
    fn default_follows_the_clock() {
        assert_eq!(Theme::default_for_hour(6), Theme::Day);
        assert_eq!(Theme::default_for_hour(12), Theme::Day);
        assert_eq!(Theme::default_for_hour(17), Theme::Day);
        assert_eq!(Theme::default_for_hour(18), Theme::Night);
        assert_eq!(Theme::default_for_hour(23), Theme::Night);
        assert_eq!(Theme::default_for_hour(0), Theme::Night);
        assert_eq!(Theme::default_for_hour(5), Theme::Night);
    }

    #[test]
    fn only_day_and_night_carry_backdrops() {
        assert!(!Theme::Minimal.has_backdrop());
        assert!(Theme::Day.has_backdrop());
        assert!(Theme::Night.has_backdrop());
    }
}
