#![forbid(unsafe_code)]

//! Image sources a host can attach to an avatar.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use image::RgbaImage;

/// Host-defined identifier of a packaged image resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId(pub u32);

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08x}", self.0)
    }
}

/// Resolves [`ResourceId`]s to decoded images.
///
/// Hosts implement this over their asset system. [`MemoryResources`] is a
/// simple map-backed implementation.
pub trait ResourceResolver {
    /// Load the image registered under `id`.
    fn load_image(&self, id: ResourceId) -> Result<Arc<RgbaImage>, ImageError>;
}

/// An in-memory [`ResourceResolver`].
#[derive(Debug, Clone, Default)]
pub struct MemoryResources {
    images: HashMap<ResourceId, Arc<RgbaImage>>,
}

impl MemoryResources {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an image under `id`, replacing any previous one.
    pub fn insert(&mut self, id: ResourceId, image: RgbaImage) {
        self.images.insert(id, Arc::new(image));
    }

    /// Register encoded bytes (PNG, JPEG or GIF) under `id`.
    pub fn insert_encoded(&mut self, id: ResourceId, bytes: &[u8]) -> Result<(), ImageError> {
        let decoded = decode(bytes)?;
        self.images.insert(id, decoded);
        Ok(())
    }
}

impl ResourceResolver for MemoryResources {
    fn load_image(&self, id: ResourceId) -> Result<Arc<RgbaImage>, ImageError> {
        self.images
            .get(&id)
            .cloned()
            .ok_or(ImageError::MissingResource(id))
    }
}

/// Anything a host can hand to `set_image`.
#[derive(Debug, Clone)]
pub enum ImageSource {
    /// An already decoded bitmap, shared with the host.
    Bitmap(Arc<RgbaImage>),
    /// Encoded image bytes, decoded on attach.
    Encoded(Vec<u8>),
    /// A packaged resource, resolved on attach.
    Resource(ResourceId),
}

impl ImageSource {
    /// Turn the source into a decoded bitmap.
    pub fn resolve(
        self,
        resources: Option<&dyn ResourceResolver>,
    ) -> Result<Arc<RgbaImage>, ImageError> {
        match self {
            Self::Bitmap(bitmap) => Ok(bitmap),
            Self::Encoded(bytes) => decode(&bytes),
            Self::Resource(id) => resources
                .ok_or(ImageError::NoResolver(id))?
                .load_image(id),
        }
    }
}

impl From<RgbaImage> for ImageSource {
    fn from(image: RgbaImage) -> Self {
        Self::Bitmap(Arc::new(image))
    }
}

impl From<Arc<RgbaImage>> for ImageSource {
    fn from(image: Arc<RgbaImage>) -> Self {
        Self::Bitmap(image)
    }
}

impl From<ResourceId> for ImageSource {
    fn from(id: ResourceId) -> Self {
        Self::Resource(id)
    }
}

fn decode(bytes: &[u8]) -> Result<Arc<RgbaImage>, ImageError> {
    let image = image::load_from_memory(bytes)?;
    Ok(Arc::new(image.into_rgba8()))
}

/// Errors raised while attaching an image.
#[derive(Debug)]
pub enum ImageError {
    /// Encoded bytes could not be decoded.
    Decode(image::ImageError),
    /// The resolver has nothing registered under this id.
    MissingResource(ResourceId),
    /// A resource was requested but no resolver is installed.
    NoResolver(ResourceId),
}

impl From<image::ImageError> for ImageError {
    fn from(err: image::ImageError) -> Self {
        Self::Decode(err)
    }
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode(err) => write!(f, "image decode error: {err}"),
            Self::MissingResource(id) => write!(f, "no image resource {id}"),
            Self::NoResolver(id) => write!(f, "cannot load resource {id}: no resolver installed"),
        }
    }
}

impl std::error::Error for ImageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode(err) => Some(err),
            Self::MissingResource(_) | Self::NoResolver(_) => None,
        }
    }
}
