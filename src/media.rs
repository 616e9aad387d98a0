//! Detail media for a selected recipe.
//!
//! A recipe may reference a larger "popup" asset, which is either an image or
//! a paginated document, and may have a downloadable bundle (a ZIP archive
//! named after the recipe). Bundle fetches are probed before any bytes are
//! transferred; a missing bundle or one with the wrong content type is
//! reported to the caller and never affects the catalog.

use crate::error::MediaError;
use crate::recipe::Recipe;
use std::fmt;
use std::fs;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// How a popup asset should be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Image,
    /// A paginated document (PDF).
    Document,
}

/// Reference to the larger media shown in the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PopupMedia {
    pub path: String,
    pub kind: MediaKind,
}

impl PopupMedia {
    /// Classifies a media path by its extension. Returns `None` for an empty path.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.trim();
        if path.is_empty() {
            return None;
        }
        let is_document = Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        Some(Self {
            path: path.to_string(),
            kind: if is_document {
                MediaKind::Document
            } else {
                MediaKind::Image
            },
        })
    }

    pub fn is_document(&self) -> bool {
        self.kind == MediaKind::Document
    }
}

/// Content type detected from the leading bytes of an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Zip,
    Pdf,
    Png,
    Jpeg,
    Unknown,
}

impl ContentType {
    /// Number of leading bytes needed by [`ContentType::sniff`].
    pub const SNIFF_LEN: usize = 8;

    pub fn sniff(bytes: &[u8]) -> Self {
        match bytes {
            [b'P', b'K', 0x03, 0x04, ..] | [b'P', b'K', 0x05, 0x06, ..] => ContentType::Zip,
            [b'%', b'P', b'D', b'F', ..] => ContentType::Pdf,
            [0x89, b'P', b'N', b'G', ..] => ContentType::Png,
            [0xFF, 0xD8, 0xFF, ..] => ContentType::Jpeg,
            _ => ContentType::Unknown,
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            ContentType::Zip => "application/zip",
            ContentType::Pdf => "application/pdf",
            ContentType::Png => "image/png",
            ContentType::Jpeg => "image/jpeg",
            ContentType::Unknown => "application/octet-stream",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime())
    }
}

/// The file name of the download bundle for a recipe.
///
/// Spaces and slashes become hyphens and the name is upper-cased:
/// `"Tomato Gravy"` → `"TOMATO-GRAVY.zip"`.
pub fn bundle_name(recipe_name: &str) -> String {
    let stem: String = recipe_name
        .trim()
        .chars()
        .map(|c| if c == ' ' || c == '/' { '-' } else { c })
        .collect();
    format!("{}.zip", stem.to_uppercase())
}

/// What a probe learned about a bundle without transferring it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleProbe {
    pub name: String,
    pub size: u64,
    pub content_type: ContentType,
}

/// A fetched bundle.
#[derive(Debug, Clone)]
pub struct MediaBundle {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// A place download bundles can be fetched from.
pub trait BundleSource {
    /// Checks that a bundle exists and reports its content type.
    fn probe(&self, name: &str) -> Result<BundleProbe, MediaError>;

    /// Transfers the full bundle.
    fn fetch(&self, name: &str) -> Result<Vec<u8>, MediaError>;
}

/// Serves bundles from a directory on disk.
#[derive(Debug, Clone)]
pub struct DirBundleSource {
    root: PathBuf,
}

impl DirBundleSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn io_error(name: &str, e: std::io::Error) -> MediaError {
        if e.kind() == ErrorKind::NotFound {
            MediaError::NotFound(name.to_string())
        } else {
            MediaError::Io {
                name: name.to_string(),
                message: e.to_string(),
            }
        }
    }
}

impl BundleSource for DirBundleSource {
    fn probe(&self, name: &str) -> Result<BundleProbe, MediaError> {
        let path = self.root.join(name);
        let metadata = fs::metadata(&path).map_err(|e| Self::io_error(name, e))?;
        if !metadata.is_file() {
            return Err(MediaError::NotFound(name.to_string()));
        }

        let mut head = Vec::with_capacity(ContentType::SNIFF_LEN);
        fs::File::open(&path)
            .and_then(|file| file.take(ContentType::SNIFF_LEN as u64).read_to_end(&mut head))
            .map_err(|e| Self::io_error(name, e))?;

        Ok(BundleProbe {
            name: name.to_string(),
            size: metadata.len(),
            content_type: ContentType::sniff(&head),
        })
    }

    fn fetch(&self, name: &str) -> Result<Vec<u8>, MediaError> {
        fs::read(self.root.join(name)).map_err(|e| Self::io_error(name, e))
    }
}

/// Fetches the download bundle for a recipe.
///
/// The bundle is probed first; nothing is transferred unless it exists and
/// looks like a ZIP archive. Failures are logged and returned, and only
/// abort this one request.
pub fn fetch_bundle(source: &dyn BundleSource, recipe: &Recipe) -> Result<MediaBundle, MediaError> {
    let name = bundle_name(&recipe.name);

    let result = source.probe(&name).and_then(|probe| {
        debug!(bundle = %name, size = probe.size, content_type = %probe.content_type, "probed bundle");
        if probe.content_type != ContentType::Zip {
            return Err(MediaError::WrongContentType {
                name: name.clone(),
                expected: ContentType::Zip.mime(),
                found: probe.content_type.mime().to_string(),
            });
        }
        source.fetch(&name)
    });

    match result {
        Ok(bytes) => Ok(MediaBundle { name, bytes }),
        Err(e) => {
            warn!(recipe = %recipe.name, "bundle fetch failed: {}", e);
            Err(e)
        }
    }
}
