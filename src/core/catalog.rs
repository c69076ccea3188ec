/// Display metadata for one portfolio category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub source_url: &'static str,
}

/// Entry used for any category key the catalog does not know.
pub const FALLBACK: CatalogEntry = CatalogEntry {
    key: "commercial",
    title: "Brand Campaign - TechStart",
    description: "30-second commercial for a tech startup featuring motion graphics and product demonstrations",
    source_url: "https://commondatastorage.googleapis.com/gtv-videos-library/sample/BigBuckBunny.mp4",
};

pub const CATALOG: &[CatalogEntry] = &[
    FALLBACK,
    CatalogEntry {
        key: "documentary",
        title: "Wildlife Documentary - \"Voices of Nature\"",
        description: "45-minute documentary featuring nature footage with professional color grading and sound design",
        source_url: "https://commondatastorage.googleapis.com/gtv-videos-library/sample/ElephantsDream.mp4",
    },
    CatalogEntry {
        key: "music",
        title: "Indie Music Video - \"Neon Dreams\"",
        description: "Visually stunning music video with creative color grading and motion graphics",
        source_url: "https://commondatastorage.googleapis.com/gtv-videos-library/sample/ForBiggerBlazes.mp4",
    },
    CatalogEntry {
        key: "social",
        title: "Social Reels Collection",
        description: "Viral-worthy short-form content optimized for social platforms",
        source_url: "https://commondatastorage.googleapis.com/gtv-videos-library/sample/ForBiggerEscapes.mp4",
    },
];

/// Look up a category, substituting [`FALLBACK`] for unknown keys.
pub fn lookup(key: &str) -> &'static CatalogEntry {
    CATALOG.iter().find(|e| e.key == key).unwrap_or(&FALLBACK)
}

/// What a click on a preview tile asks the modal to show.
///
/// A tile with an explicit media source always takes the `Explicit` path; its
/// own heading and paragraph supply the text shown next to the player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionRequest {
    Explicit {
        source_url: String,
        title: String,
        description: String,
    },
    Category(String),
}

impl SelectionRequest {
    /// Build a request from a tile's `data-video` / `data-category` attributes.
    ///
    /// An empty `data-video` counts as absent.
    pub fn from_attributes(
        video: Option<&str>,
        category: Option<&str>,
        title: &str,
        description: &str,
    ) -> Self {
        match video.map(str::trim).filter(|v| !v.is_empty()) {
            Some(url) => SelectionRequest::Explicit {
                source_url: url.to_string(),
                title: title.trim().to_string(),
                description: description.trim().to_string(),
            },
            None => SelectionRequest::Category(category.unwrap_or_default().to_string()),
        }
    }
}

/// Fields the modal displays for one selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Resolved {
    pub source_url: String,
    pub title: String,
    pub description: String,
}

impl From<&CatalogEntry> for Resolved {
    fn from(e: &CatalogEntry) -> Self {
        Self {
            source_url: e.source_url.to_string(),
            title: e.title.to_string(),
            description: e.description.to_string(),
        }
    }
}

pub fn resolve(request: &SelectionRequest) -> Resolved {
    match request {
        SelectionRequest::Explicit {
            source_url,
            title,
            description,
        } => Resolved {
            source_url: source_url.clone(),
            title: title.clone(),
            description: description.clone(),
        },
        SelectionRequest::Category(key) => lookup(key).into(),
    }
}
