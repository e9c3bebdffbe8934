/// Collapsible panels of the "failure highlight reel".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    Music,
    Business,
    Education,
    Startup,
}

impl Panel {
    pub const ALL: [Panel; 4] = [
        Panel::Music,
        Panel::Business,
        Panel::Education,
        Panel::Startup,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Panel::Music => "MUSIC CAREER",
            Panel::Business => "BUSINESS VENTURES",
            Panel::Education => "EDUCATIONAL ACHIEVEMENTS",
            Panel::Startup => "STARTUP FAILURE",
        }
    }

    pub fn aka(self) -> &'static str {
        match self {
            Panel::Music => "AKA \"MY PARENTS PAID FOR LESSONS\"",
            Panel::Business => "AKA \"STUFF I STARTED THEN ABANDONED\"",
            Panel::Education => "AKA \"PLACES I DIDN'T STAY\"",
            Panel::Startup => "AKA \"MY GAP YEAR\"",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Panel::Music => "🎵",
            Panel::Business => "🛍",
            Panel::Education => "🎓",
            Panel::Startup => "💼",
        }
    }

    pub fn bullets(self) -> &'static [&'static str] {
        match self {
            Panel::Music => &[
                "Endured 6 years of Indian classical singing (mostly because couldn't figure out how to quit)",
                "Released music that 3M+ people accidentally played while trying to find something better",
                "1M+ monthly listeners who probably have \"autoplay\" turned on and fell asleep",
            ],
            Panel::Business => &[
                "Created e-commerce store at 16 that sold 26,800+ orders of products nobody actually needed",
                "Bragged about order numbers but mysteriously never mentions profit margins",
                "Shut it down with the classic excuse of \"juggling business and school\" (translation: got bored)",
            ],
            Panel::Education => &[
                "Engineering school survivor (for approximately 7 minutes)",
                "Self-certified PhD in finding YouTube videos more interesting than lectures",
                "Made engineering drawing sound like torture when really just couldn't draw a straight line",
                "Claims dyslexia only affects him in classrooms (convenient!)",
            ],
            Panel::Startup => &[
                "Briefly worked at something called \"Ghost Pay\" which, appropriately, disappeared",
                "Main achievement: Using company money to \"travel half of India\"",
                "Calls this experience \"valuable\" (valuable for the Instagram pics, maybe)",
            ],
        }
    }
}

/// Opens `panel`, or closes it when it is already the open one.
pub fn toggle(active: Option<Panel>, panel: Panel) -> Option<Panel> {
    if active == Some(panel) {
        None
    } else {
        Some(panel)
    }
}

pub const PROFIT_MARGIN_PERCENT: u8 = 3;
pub const ATTENDANCE_SLOTS: usize = 30;
pub const ATTENDED_SLOTS: usize = 3;
pub const TRAVEL_PHOTOS: [&str; 3] = [
    "Beach selfie with company laptop",
    "Taj Mahal 'business meeting'",
    "Startup culture = hammock",
];

pub fn attendance() -> impl Iterator<Item = bool> {
    (0..ATTENDANCE_SLOTS).map(|i| i < ATTENDED_SLOTS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_opens_and_closes() {
        let active = toggle(None, Panel::Music);
        assert_eq!(active, Some(Panel::Music));
        assert_eq!(toggle(active, Panel::Music), None);
    }

    #[test]
    fn test_toggle_switches_panel() {
        let active = toggle(Some(Panel::Music), Panel::Startup);
        assert_eq!(active, Some(Panel::Startup));
    }

    #[test]
    fn test_at_most_one_open() {
        let mut active = None;
        for panel in Panel::ALL.iter().chain(Panel::ALL.iter().rev()) {
            active = toggle(active, *panel);
            let open = Panel::ALL.iter().filter(|p| Some(**p) == active).count();
            assert!(open <= 1);
        }
    }

    #[test]
    fn test_attendance_record() {
        let slots = attendance().collect::<Vec<_>>();
        assert_eq!(slots.len(), 30);
        assert_eq!(slots.iter().filter(|s| **s).count(), 3);
        assert!(slots[..3].iter().all(|s| *s));
    }

    #[test]
    fn test_every_panel_has_content() {
        for panel in Panel::ALL {
            assert!(!panel.title().is_empty());
            assert!(panel.aka().starts_with("AKA"));
            assert!(!panel.bullets().is_empty());
        }
    }
}
