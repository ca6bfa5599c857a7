use serde::Serialize;

use crate::lecture::HazardTopic;

/// Accent class bundle applied across a game's chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub accent: &'static str,
    pub border: &'static str,
    pub bg: &'static str,
    pub glow: &'static str,
}

const EARTHQUAKE: Theme = Theme {
    accent: "text-orange-400",
    border: "border-orange-500",
    bg: "bg-orange-500",
    glow: "shadow-orange-500/20",
};

const FLOOD: Theme = Theme {
    accent: "text-cyan-400",
    border: "border-cyan-500",
    bg: "bg-cyan-500",
    glow: "shadow-cyan-500/20",
};

const VOLCANO: Theme = Theme {
    accent: "text-red-400",
    border: "border-red-500",
    bg: "bg-red-500",
    glow: "shadow-red-500/20",
};

const NEUTRAL: Theme = Theme {
    accent: "text-emerald-400",
    border: "border-emerald-500",
    bg: "bg-emerald-500",
    glow: "shadow-emerald-500/20",
};

impl Theme {
    /// Exact-match lookup on the topic label; unknown labels get the neutral theme.
    #[must_use]
    pub fn for_topic(topic: &str) -> Self {
        match topic {
            "Earthquake" => EARTHQUAKE,
            "Flood" => FLOOD,
            "Volcano" => VOLCANO,
            _ => NEUTRAL,
        }
    }

    #[must_use]
    pub const fn for_hazard(topic: HazardTopic) -> Self {
        match topic {
            HazardTopic::Earthquake => EARTHQUAKE,
            HazardTopic::Flood => FLOOD,
            HazardTopic::Volcano => VOLCANO,
            HazardTopic::General => NEUTRAL,
        }
    }

    #[must_use]
    pub const fn neutral() -> Self {
        NEUTRAL
    }
}

impl Default for Theme {
    fn default() -> Self {
        NEUTRAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_topics_pick_their_colour() {
        assert_eq!(Theme::for_topic("Earthquake").accent, "text-orange-400");
        assert_eq!(Theme::for_topic("Flood").bg, "bg-cyan-500");
        assert_eq!(Theme::for_topic("Volcano").border, "border-red-500");
    }

    #[test]
    fn unknown_topics_fall_back_to_neutral() {
        assert_eq!(Theme::for_topic("Tsunami"), Theme::neutral());
        assert_eq!(Theme::for_topic("flood"), Theme::neutral());
        assert_eq!(Theme::for_topic(""), Theme::default());
    }

    #[test]
    fn hazard_enum_matches_string_lookup() {
        for topic in [
            HazardTopic::Earthquake,
            HazardTopic::Flood,
            HazardTopic::Volcano,
            HazardTopic::General,
        ] {
            assert_eq!(Theme::for_hazard(topic), Theme::for_topic(topic.as_str()));
        }
    }
}
