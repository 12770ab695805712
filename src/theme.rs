use serde::{Deserialize, Serialize};
use std::fmt;

/// Colour palette used by the search bar and rails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg_color: &'static str,
    pub main1: &'static str,
    pub main2: &'static str,
    pub main3: &'static str,
    pub main4: &'static str,
    pub text_color: &'static str,
}

impl Palette {
    /// CSS custom properties consumed by the stylesheet
    pub fn css_variables(&self) -> String {
        format!(
            "--palette-bg: {}; --palette-main1: {}; --palette-main2: {}; \
             --palette-main3: {}; --palette-main4: {}; --palette-text: {};",
            self.bg_color, self.main1, self.main2, self.main3, self.main4, self.text_color
        )
    }
}

/// Named palettes, stored by display name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaletteName {
    #[default]
    CoolBlue,
    WarmSunset,
    ForestGreen,
    VividPurple,
    EarthTone,
}

impl PaletteName {
    pub fn display_name(self) -> &'static str {
        match self {
            PaletteName::CoolBlue => "Cool Blue",
            PaletteName::WarmSunset => "Warm Sunset",
            PaletteName::ForestGreen => "Forest Green",
            PaletteName::VividPurple => "Ellie's Purple",
            PaletteName::EarthTone => "Earth Tone",
        }
    }

    /// Look a palette up by display name, falling back to Cool Blue
    pub fn from_display_name(name: &str) -> Self {
        match name {
            "Warm Sunset" => PaletteName::WarmSunset,
            "Forest Green" => PaletteName::ForestGreen,
            "Ellie's Purple" => PaletteName::VividPurple,
            "Earth Tone" => PaletteName::EarthTone,
            _ => PaletteName::CoolBlue,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            PaletteName::CoolBlue => Palette {
                bg_color: "#eff6ff",
                main1: "#63a3f7",
                main2: "#3378f1",
                main3: "#2962e7",
                main4: "#203988",
                text_color: "#ffffff",
            },
            PaletteName::WarmSunset => Palette {
                bg_color: "#fef9ec",
                main1: "#e5901b",
                main2: "#cb6d14",
                main3: "#a84e15",
                main4: "#893c17",
                text_color: "#ffffff",
            },
            PaletteName::ForestGreen => Palette {
                bg_color: "#edfff7",
                main1: "#00965b",
                main2: "#06754a",
                main3: "#07603f",
                main4: "#003722",
                text_color: "#fefefe",
            },
            PaletteName::VividPurple => Palette {
                bg_color: "#f6f3ff",
                main1: "#b388fd",
                main2: "#9d58fa",
                main3: "#9235f2",
                main4: "#380e67",
                text_color: "#ffffff",
            },
            PaletteName::EarthTone => Palette {
                bg_color: "#f7f2e8",
                main1: "#a68a64",
                main2: "#7f6240",
                main3: "#4f3625",
                main4: "#2e1f13",
                text_color: "#ffffff",
            },
        }
    }
}

impl fmt::Display for PaletteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl From<String> for PaletteName {
    fn from(value: String) -> Self {
        Self::from_display_name(&value)
    }
}

impl From<PaletteName> for String {
    fn from(value: PaletteName) -> Self {
        value.display_name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_name_falls_back() {
        assert_eq!(PaletteName::from_display_name("Neon"), PaletteName::CoolBlue);
        assert_eq!(
            PaletteName::from_display_name("Ellie's Purple"),
            PaletteName::VividPurple
        );
    }

    #[test]
    fn test_serializes_as_display_name() {
        let json = serde_json::to_string(&PaletteName::EarthTone).unwrap();
        assert_eq!(json, r#""Earth Tone""#);
        let parsed: PaletteName = serde_json::from_str(r#""Forest Green""#).unwrap();
        assert_eq!(parsed, PaletteName::ForestGreen);
    }

    #[test]
    fn test_css_variables() {
        let css = PaletteName::CoolBlue.palette().css_variables();
        assert!(css.contains("--palette-main2: #3378f1;"));
        assert!(css.contains("--palette-text: #ffffff;"));
    }
}
