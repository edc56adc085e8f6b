//! Icon identifiers used by the menu catalog.

use serde::{Deserialize, Serialize};

/// Known menu icon, resolved from a catalog identifier.
///
/// Unknown identifiers degrade to [`Icon::Circle`] rather than failing the
/// entry they appear on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Dashboard,
    Users,
    Shield,
    Folder,
    Document,
    Chart,
    Settings,
    #[default]
    Circle,
}

impl Icon {
    /// Resolve a catalog icon identifier, falling back to the default.
    pub fn resolve(identifier: Option<&str>) -> Self {
        let Some(identifier) = identifier else {
            return Self::default();
        };

        match identifier {
            "dashboard" => Self::Dashboard,
            "users" => Self::Users,
            "shield" => Self::Shield,
            "folder" => Self::Folder,
            "document" => Self::Document,
            "chart" => Self::Chart,
            "settings" => Self::Settings,
            "circle" => Self::Circle,
            other => {
                tracing::warn!(icon = other, "unknown menu icon, using fallback");
                Self::default()
            }
        }
    }
}
