use crate::assets::AssetLoader;
use serde::{Deserialize, Serialize};

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Page chrome handed to the renderer
    #[serde(default)]
    pub page: PageConfig,
}

/// Page-level settings: browser title, icon and layout.
///
/// Set once before rendering and read-only afterwards.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct PageConfig {
    /// Browser tab title
    #[serde(default = "default_title")]
    pub title: String,

    /// Icon shown in the tab (an emoji is rendered as an SVG favicon)
    #[serde(default = "default_icon")]
    pub icon: String,

    /// Content width
    #[serde(default)]
    pub layout: PageLayout,
}

fn default_title() -> String {
    "Control Ciudadano Condominio".to_string()
}

fn default_icon() -> String {
    "🏢".to_string()
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            icon: default_icon(),
            layout: PageLayout::default(),
        }
    }
}

/// Content width of the page
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PageLayout {
    /// Use the full browser width
    #[default]
    Wide,
    /// Narrow reading column
    Centered,
}

impl PageLayout {
    /// CSS class applied to the page container
    pub fn css_class(self) -> &'static str {
        match self {
            PageLayout::Wide => "layout-wide",
            PageLayout::Centered => "layout-centered",
        }
    }
}

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match Self::parse(&content) {
                Ok(config) => {
                    tracing::info!(
                        title = %config.page.title,
                        layout = ?config.page.layout,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Parse configuration from YAML text
    pub fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }
}
