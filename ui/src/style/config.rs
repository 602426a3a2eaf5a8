use serde::{Deserialize, Serialize};

use super::content::ContentPattern;
use super::error::{Error, Result};
use super::palette::{HexColor, Palette};

const CONFIG_TYPE_ANNOTATION: &str = "/** @type {import('tailwindcss').Config} */";

/// Brand accent used by the topbar and highlights.
pub const RABBIT_RED: (&str, HexColor) = ("rabbit-red", HexColor::rgb(0xea, 0x2e, 0x0e));

/// Tailwind configuration object, serialized with the same shape Tailwind
/// reads from `tailwind.config.js`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    pub content: Vec<ContentPattern>,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub plugins: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default)]
    pub extend: ThemeExtension,
}

/// Additions layered over Tailwind's defaults rather than replacing them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeExtension {
    #[serde(default)]
    pub colors: Palette,
}

impl StyleConfig {
    /// Config for the web launcher: its HTML entry, its own sources and the
    /// shared UI crate's sources.
    pub fn storefront() -> Result<Self> {
        let content = [
            "./index.html",
            "./src/**/*.{rs,html,css}",
            "../ui/src/**/*.{rs,html,css}",
        ]
        .into_iter()
        .map(ContentPattern::parse)
        .collect::<Result<Vec<_>>>()?;

        let (name, color) = RABBIT_RED;
        let colors = [(name, color)].into_iter().collect();

        Ok(Self {
            content,
            theme: Theme {
                extend: ThemeExtension { colors },
            },
            plugins: Vec::new(),
        })
    }

    /// Parse the JSON form of a config and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.content.is_empty() {
            return Err(Error::EmptyContent);
        }
        Ok(())
    }

    /// Whether the scanner reads `path` (relative to the config file).
    pub fn scans(&self, path: &str) -> bool {
        self.content.iter().any(|p| p.matches(path))
    }

    /// Colors available to utilities once the extension is merged over `base`.
    pub fn resolved_palette(&self, base: &Palette) -> Palette {
        base.extended_with(&self.theme.extend.colors)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Body of `tailwind.config.js`.
    pub fn to_js_module(&self) -> Result<String> {
        let json = self.to_json()?;
        Ok(format!("{CONFIG_TYPE_ANNOTATION}\nexport default {json};\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storefront_extends_palette_with_rabbit_red() {
        let config = StyleConfig::storefront().unwrap();
        let colors = &config.theme.extend.colors;
        assert_eq!(colors.len(), 1);
        assert_eq!(colors.get("rabbit-red").unwrap().to_string(), "#ea2e0e");
        assert!(config.plugins.is_empty());
    }

    #[test]
    fn merged_palette_keeps_defaults() {
        let config = StyleConfig::storefront().unwrap();
        let base = Palette::tailwind_base();
        let merged = config.resolved_palette(&base);
        assert!(merged.contains("rabbit-red"));
        for (name, _) in base.iter() {
            assert!(merged.contains(name), "default token {name} was dropped");
        }
    }

    #[test]
    fn scans_entry_html_and_sources_recursively() {
        let config = StyleConfig::storefront().unwrap();
        for path in [
            "index.html",
            "./index.html",
            "src/main.rs",
            "src/views/profile.rs",
            "../ui/src/components/navbar.rs",
        ] {
            assert!(config.scans(path), "{path} should be scanned");
        }
        assert!(!config.scans("assets/tailwind.css"));
        assert!(!config.scans("Cargo.toml"));
    }

    #[test]
    fn json_keeps_tailwind_shape() {
        let json = StyleConfig::storefront().unwrap().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["theme"]["extend"]["colors"]["rabbit-red"], "#ea2e0e");
        assert_eq!(value["content"][0], "./index.html");
        assert_eq!(value["plugins"], serde_json::json!([]));
    }

    #[test]
    fn from_json_round_trips_and_validates() {
        let config = StyleConfig::storefront().unwrap();
        let parsed = StyleConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(parsed, config);

        assert!(matches!(
            StyleConfig::from_json(r#"{"content": []}"#),
            Err(Error::EmptyContent)
        ));
        assert!(matches!(
            StyleConfig::from_json(
                r##"{"content": ["./index.html"], "theme": {"extend": {"colors": {"x": "red"}}}}"##
            ),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn js_module_exports_config() {
        let js = StyleConfig::storefront().unwrap().to_js_module().unwrap();
        assert!(js.starts_with(CONFIG_TYPE_ANNOTATION));
        assert!(js.contains("export default {"));
        assert!(js.ends_with("};\n"));
    }
}
