//! Literal lookup tables shipped with the NTB deployment.
//!
//! None of these are environment driven; they are carried in [`Settings`]
//! so the host reads every deployment value from one place.
//!
//! [`Settings`]: super::settings::Settings

use serde::Serialize;
use std::collections::BTreeMap;

/// Target box for a generated image rendition, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RenditionSize {
    /// Maximum width
    pub width: u32,
    /// Maximum height
    pub height: u32,
}

impl RenditionSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Rendition sizes per media kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Renditions {
    /// Renditions generated for newsroom pictures
    pub picture: BTreeMap<&'static str, RenditionSize>,
    /// Renditions generated for user avatars
    pub avatar: BTreeMap<&'static str, RenditionSize>,
}

impl Default for Renditions {
    fn default() -> Self {
        Self {
            picture: BTreeMap::from([
                ("thumbnail", RenditionSize::new(220, 120)),
                ("viewImage", RenditionSize::new(640, 640)),
                ("baseImage", RenditionSize::new(1400, 1400)),
            ]),
            avatar: BTreeMap::from([
                ("thumbnail", RenditionSize::new(60, 60)),
                ("viewImage", RenditionSize::new(200, 200)),
            ]),
        }
    }
}

/// A content language and whether it can be translated from or into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Language {
    /// BCP 47 language tag
    pub language: &'static str,
    /// Name shown in the client
    pub label: &'static str,
    /// Can be translated from
    pub source: bool,
    /// Can be translated into
    pub destination: bool,
}

/// Languages offered in the client, Norwegian Bokmål first.
pub fn default_languages() -> Vec<Language> {
    vec![
        Language {
            language: "nb-NO",
            label: "Bokmål",
            source: true,
            destination: false,
        },
        Language {
            language: "nn-NO",
            label: "Nynorsk",
            source: false,
            destination: true,
        },
        Language {
            language: "en",
            label: "English",
            source: false,
            destination: false,
        },
        Language {
            language: "de",
            label: "German",
            source: false,
            destination: false,
        },
    ]
}

/// Defaults stamped on articles created by hand in the newsroom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManualArticleDefaults {
    /// Credited source
    pub source: &'static str,
    /// News value, 1 (highest) to 6
    pub urgency: u8,
    /// Genre qcodes
    pub genre: Vec<String>,
}

impl Default for ManualArticleDefaults {
    fn default() -> Self {
        Self {
            source: "NTB",
            urgency: 3,
            genre: Vec::new(),
        }
    }
}

/// Mappings from NIFS sports-data identifiers to newsroom vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NifsMappings {
    /// NIFS stage id to competition name.
    pub stage_map: BTreeMap<u32, &'static str>,
    /// NIFS sport id to IPTC subject qcode.
    pub qcode_map: BTreeMap<u32, &'static str>,
}

impl Default for NifsMappings {
    fn default() -> Self {
        Self {
            stage_map: BTreeMap::from([(6, "Eliteserien menn"), (676_155, "Eliteserien menn")]),
            qcode_map: BTreeMap::from([
                // Fotball
                (1, "15054000"),
                // Håndball
                (3, "15029000"),
            ]),
        }
    }
}

/// Jinja body template used when exporting planning items to an article.
pub const PLANNING_EXPORT_BODY_TEMPLATE: &str = r"
{% for item in items %}
<p><b>{{ item.name or item.headline or item.slugline }}</b></p>
<p>{{ item.description_text }}</p>
<p></p>
{% if item.get('event', {}).get('location') %}
<p>Sted: {{ item.event.location[0].name }}.</p>
{% endif %}
{% if item.get('ednote', '') != '' %}
<p>Til red: {{ item.ednote }}</p>
{% endif %}
{% if item.coverages %}
<p>Dekning: {{ item.coverages | join(', ') }}
{% endif %}
<p>---</p>
{% endfor %}
";
