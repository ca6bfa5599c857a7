//! Font and colour extensions handed to the stylesheet build.

use serde::Serialize;
use serde_json::{Map, Value, json};

/// A named font family and its fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FontFamily {
    pub name: &'static str,
    pub stack: &'static [&'static str],
}

/// One shade of the brand palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BrandShade {
    pub step: u16,
    pub hex: &'static str,
}

const FONT_FAMILIES: &[FontFamily] = &[
    FontFamily {
        name: "sans",
        stack: &["Outfit", "sans-serif"],
    },
    FontFamily {
        name: "russo",
        stack: &["\"Russo One\"", "sans-serif"],
    },
    FontFamily {
        name: "chakra",
        stack: &["\"Chakra Petch\"", "sans-serif"],
    },
    FontFamily {
        name: "fredoka",
        stack: &["\"Fredoka\"", "sans-serif"],
    },
    FontFamily {
        name: "quicksand",
        stack: &["\"Quicksand\"", "sans-serif"],
    },
    FontFamily {
        name: "carter",
        stack: &["\"Carter One\"", "cursive"],
    },
    FontFamily {
        name: "signika",
        stack: &["\"Signika Negative\"", "sans-serif"],
    },
];

const BRAND: &[BrandShade] = &[
    BrandShade {
        step: 50,
        hex: "#f0f9ff",
    },
    BrandShade {
        step: 100,
        hex: "#e0f2fe",
    },
    BrandShade {
        step: 500,
        hex: "#0ea5e9",
    },
    BrandShade {
        step: 600,
        hex: "#0284c7",
    },
    BrandShade {
        step: 900,
        hex: "#0c4a6e",
    },
];

const CONTENT_GLOBS: &[&str] = &[
    "./index.html",
    "./src/**/*.rs",
    "./static/**/*.html",
];

/// Static style extension consumed by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StyleConfig {
    pub fonts: &'static [FontFamily],
    pub brand: &'static [BrandShade],
    pub content: &'static [&'static str],
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl StyleConfig {
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            fonts: FONT_FAMILIES,
            brand: BRAND,
            content: CONTENT_GLOBS,
        }
    }

    #[must_use]
    pub fn font(&self, name: &str) -> Option<&FontFamily> {
        self.fonts.iter().find(|font| font.name == name)
    }

    /// CSS `font-family` value for a semantic font name.
    #[must_use]
    pub fn font_stack(&self, name: &str) -> Option<String> {
        self.font(name).map(|font| font.stack.join(", "))
    }

    #[must_use]
    pub fn brand_shade(&self, step: u16) -> Option<&'static str> {
        self.brand
            .iter()
            .find(|shade| shade.step == step)
            .map(|shade| shade.hex)
    }

    /// The `theme.extend` object in the shape the stylesheet tooling expects.
    #[must_use]
    pub fn theme_extend_json(&self) -> Value {
        let font_family: Map<String, Value> = self
            .fonts
            .iter()
            .map(|font| (font.name.to_string(), json!(font.stack)))
            .collect();
        let brand: Map<String, Value> = self
            .brand
            .iter()
            .map(|shade| (shade.step.to_string(), json!(shade.hex)))
            .collect();
        json!({
            "fontFamily": font_family,
            "colors": { "brand": brand },
        })
    }

    /// Full config document including content globs.
    #[must_use]
    pub fn to_config_json(&self) -> Value {
        json!({
            "content": self.content,
            "theme": { "extend": self.theme_extend_json() },
            "plugins": [],
        })
    }
}
