#![forbid(unsafe_code)]

//! Host adapter around [`CircleAvatar`].
//!
//! [`CircleView`] implements the host [`View`] contract by delegating to the
//! rendering core. It also resolves image sources and converts density
//! units. Setter calls never redraw directly. They record [`Invalidation`]
//! flags that the host drains with [`CircleView::take_invalidation`] and
//! acts on in its next frame.

use std::fmt;
use std::sync::Arc;

use bitflags::bitflags;
use circlet_core::{Density, MeasureSpec, Size, debug, measure_square, warn};
use circlet_render::surface::Surface;
use circlet_style::{Argb, BorderStyle};
use image::RgbaImage;

use crate::View;
use crate::circle::{AvatarMode, CircleAvatar};
use crate::config::{CircleConfig, DEFAULT_SIZE_DP};
use crate::image_source::{ImageError, ImageSource, ResourceId, ResourceResolver};
use crate::stateful::{CircleSnapshot, HostState, Stateful, VersionedState, ViewSnapshot};

bitflags! {
    /// Work the host owes a view after a setter call.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Invalidation: u8 {
        /// The view must be drawn again.
        const REDRAW = 0b01;
        /// The view must be measured again.
        const LAYOUT = 0b10;
    }
}

/// State every view carries on the host side.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewBase {
    host_state: HostState,
    measured: Size,
    size: Size,
}

impl ViewBase {
    /// Host state that travels with snapshots.
    #[inline]
    pub fn host_state(&self) -> &HostState {
        &self.host_state
    }

    pub fn set_host_state(&mut self, state: HostState) {
        self.host_state = state;
    }

    /// Result of the last measure pass.
    #[inline]
    pub fn measured(&self) -> Size {
        self.measured
    }

    /// Size last assigned by the host.
    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    fn save(&self) -> HostState {
        self.host_state.clone()
    }

    fn restore(&mut self, state: HostState) {
        self.host_state = state;
    }
}

/// A circular avatar view.
pub struct CircleView {
    base: ViewBase,
    avatar: CircleAvatar,
    density: Density,
    min_size: u32,
    resources: Option<Arc<dyn ResourceResolver>>,
    invalidation: Invalidation,
}

impl CircleView {
    /// Build a view with no image attached. It starts in initials mode.
    #[must_use]
    pub fn new(config: &CircleConfig, density: Density) -> Self {
        Self::build(config, density, None)
    }

    /// Build a view with an image already attached. It starts in avatar mode.
    #[must_use]
    pub fn with_image(config: &CircleConfig, density: Density, image: Arc<RgbaImage>) -> Self {
        Self::build(config, density, Some(image))
    }

    fn build(config: &CircleConfig, density: Density, image: Option<Arc<RgbaImage>>) -> Self {
        let border = BorderStyle::new(config.border_width.to_px(density), config.border_color);
        let min_size = config.size.map_or(0, |size| size.to_px(density) as u32);
        Self {
            base: ViewBase::default(),
            avatar: CircleAvatar::new(border, config.initials.clone(), image),
            density,
            min_size,
            resources: None,
            invalidation: Invalidation::empty(),
        }
    }

    /// Install the resolver used by [`set_image_resource`](Self::set_image_resource).
    #[must_use]
    pub fn with_resources(mut self, resources: Arc<dyn ResourceResolver>) -> Self {
        self.resources = Some(resources);
        self
    }

    /// The rendering core.
    #[inline]
    pub fn avatar(&self) -> &CircleAvatar {
        &self.avatar
    }

    #[inline]
    pub fn base(&self) -> &ViewBase {
        &self.base
    }

    #[inline]
    pub fn base_mut(&mut self) -> &mut ViewBase {
        &mut self.base
    }

    #[inline]
    pub fn density(&self) -> Density {
        self.density
    }

    #[inline]
    pub fn mode(&self) -> AvatarMode {
        self.avatar.mode()
    }

    /// Explicit size override in pixels (0 when none).
    #[inline]
    pub fn min_size(&self) -> u32 {
        self.min_size
    }

    pub fn set_min_size(&mut self, px: u32) {
        if self.min_size != px {
            self.min_size = px;
            self.invalidation |= Invalidation::LAYOUT | Invalidation::REDRAW;
        }
    }

    /// Drain pending invalidation flags.
    pub fn take_invalidation(&mut self) -> Invalidation {
        std::mem::replace(&mut self.invalidation, Invalidation::empty())
    }

    /// Pending invalidation flags, without draining them.
    #[inline]
    pub fn invalidation(&self) -> Invalidation {
        self.invalidation
    }

    /// Replace the initials. A redraw is requested only in initials mode.
    pub fn set_initials(&mut self, initials: impl Into<String>) {
        if self.avatar.set_initials(initials) {
            self.invalidation |= Invalidation::REDRAW;
        }
    }

    pub fn set_border_color(&mut self, color: Argb) {
        self.avatar.set_border_color(color);
        self.invalidation |= Invalidation::REDRAW;
    }

    /// Set the ring width in density-independent units.
    pub fn set_border_width(&mut self, dp: u32) {
        self.set_border_width_px(self.density.dp_to_px(dp as f32));
    }

    /// Ring width in pixels.
    #[inline]
    pub fn border_width(&self) -> f32 {
        self.avatar.border().width_px
    }

    /// Set the ring width in pixels.
    pub fn set_border_width_px(&mut self, px: f32) {
        self.avatar.set_border_width(px);
        self.invalidation |= Invalidation::REDRAW;
    }

    /// Flip between avatar and initials. No-op without an image.
    pub fn toggle_mode(&mut self) {
        if self.avatar.toggle_mode() {
            self.invalidation |= Invalidation::REDRAW;
        }
    }

    /// Attach a decoded bitmap, or detach with `None`.
    pub fn set_image_bitmap(&mut self, image: Option<Arc<RgbaImage>>) {
        debug!(attached = image.is_some(), "image changed");
        self.avatar.set_image(image);
        self.invalidation |= Invalidation::LAYOUT | Invalidation::REDRAW;
    }

    /// Decode and attach encoded image bytes.
    pub fn set_image_encoded(&mut self, bytes: &[u8]) -> Result<(), ImageError> {
        self.set_image(ImageSource::Encoded(bytes.to_vec()))
    }

    /// Resolve and attach a packaged resource.
    pub fn set_image_resource(&mut self, id: ResourceId) -> Result<(), ImageError> {
        self.set_image(ImageSource::Resource(id))
    }

    /// Attach an image from any source.
    ///
    /// On failure the previously attached image stays in place.
    pub fn set_image(&mut self, source: impl Into<ImageSource>) -> Result<(), ImageError> {
        match source.into().resolve(self.resources.as_deref()) {
            Ok(image) => {
                self.set_image_bitmap(Some(image));
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "image rejected, keeping previous");
                Err(err)
            }
        }
    }

    pub fn clear_image(&mut self) {
        self.set_image_bitmap(None);
    }
}

impl fmt::Debug for CircleView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircleView")
            .field("base", &self.base)
            .field("avatar", &self.avatar)
            .field("density", &self.density)
            .field("min_size", &self.min_size)
            .field("resources", &self.resources.is_some())
            .field("invalidation", &self.invalidation)
            .finish()
    }
}

impl View for CircleView {
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        let default_px = self.density.dp_to_px_truncated(DEFAULT_SIZE_DP);
        let size = measure_square(width, height, default_px, self.min_size);
        debug!(?width, ?height, side = size.width, "measured");
        self.base.measured = size;
        size
    }

    fn on_size_changed(&mut self, width: u32, height: u32, _old_width: u32, _old_height: u32) {
        self.base.size = Size::new(width, height);
        self.avatar.on_bounds_changed(width, height);
    }

    fn draw(&self, surface: &mut dyn Surface) {
        self.avatar.draw(surface);
    }

    fn save_state(&self) -> ViewSnapshot {
        ViewSnapshot::Circle(VersionedState::new(
            CircleAvatar::state_version(),
            CircleSnapshot {
                host: self.base.save(),
                state: self.avatar.save_state(),
            },
        ))
    }

    fn restore_state(&mut self, snapshot: ViewSnapshot) {
        match snapshot {
            ViewSnapshot::Host(host) => {
                debug!("foreign snapshot, restoring host state only");
                self.base.restore(host);
            }
            ViewSnapshot::Circle(versioned) if !versioned.matches::<CircleAvatar>() => {
                warn!(
                    found = versioned.version,
                    expected = CircleAvatar::state_version(),
                    "circle snapshot version mismatch, restoring host state only"
                );
                self.base.restore(versioned.data.host);
            }
            ViewSnapshot::Circle(versioned) => {
                let CircleSnapshot { host, state } = versioned.data;
                self.base.restore(host);
                self.avatar.restore_state(state);
                self.invalidation |= Invalidation::REDRAW;
            }
        }
    }
}
