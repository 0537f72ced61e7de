#![forbid(unsafe_code)]

//! Circular avatar rendering core.
//!
//! [`CircleAvatar`] holds geometry and paint state and issues draw commands
//! to a [`Surface`]. It knows nothing about the host's view tree; the
//! [`CircleView`](crate::view::CircleView) adapter wires it to one.
//!
//! # Modes
//!
//! - **Avatar**: the attached image, center-cropped to the bounds, fills the
//!   circle.
//! - **Initials**: a palette color picked from the initials fills the
//!   circle, with the initials centered on top in white.
//!
//! Avatar is only ever effective while an image is attached. The requested
//! mode is kept separately so toggling and restoring behave predictably when
//! an image arrives later.
//!
//! A ring is stroked on top in both modes, along the bounds inset by half the
//! stroke width (truncated to whole pixels).

use std::sync::Arc;

use circlet_core::geometry::Rect;
use circlet_core::{debug, trace};
use circlet_render::sampler::sample_center_crop;
use circlet_render::surface::{Fill, Surface, TextAlign, TextPaint};
use circlet_style::{Argb, BorderStyle, DEFAULT_INITIALS, InitialsStyle, initials_to_color};
use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::stateful::{CIRCLE_STATE_VERSION, CircleState, Stateful};

/// What the circle shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvatarMode {
    Avatar,
    Initials,
}

/// The circle avatar rendering core.
#[derive(Debug, Clone)]
pub struct CircleAvatar {
    image: Option<Arc<RgbaImage>>,
    avatar_requested: bool,
    initials: String,
    initials_style: InitialsStyle,
    border: BorderStyle,
    bounds: Rect,
    /// Center-cropped copy of `image` sized to `bounds`.
    sample: Option<Arc<RgbaImage>>,
}

impl CircleAvatar {
    /// Create a core with the given ring style and initials.
    ///
    /// Avatar mode is requested only when an image is supplied up front.
    /// Empty initials are replaced by [`DEFAULT_INITIALS`].
    #[must_use]
    pub fn new(border: BorderStyle, initials: impl Into<String>, image: Option<Arc<RgbaImage>>) -> Self {
        Self {
            avatar_requested: image.is_some(),
            image,
            initials: normalize_initials(initials.into()),
            initials_style: InitialsStyle::default(),
            border,
            bounds: Rect::default(),
            sample: None,
        }
    }

    /// The mode that [`draw`](Self::draw) will render.
    #[inline]
    pub fn mode(&self) -> AvatarMode {
        if self.avatar_requested && self.image.is_some() {
            AvatarMode::Avatar
        } else {
            AvatarMode::Initials
        }
    }

    /// The mode last requested, regardless of whether an image is attached.
    #[inline]
    pub fn requested_mode(&self) -> AvatarMode {
        if self.avatar_requested {
            AvatarMode::Avatar
        } else {
            AvatarMode::Initials
        }
    }

    #[inline]
    pub fn initials(&self) -> &str {
        &self.initials
    }

    #[inline]
    pub fn border(&self) -> BorderStyle {
        self.border
    }

    #[inline]
    pub fn image(&self) -> Option<&Arc<RgbaImage>> {
        self.image.as_ref()
    }

    /// Last bounds received through [`on_bounds_changed`](Self::on_bounds_changed).
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// The rect the ring is stroked along.
    #[inline]
    pub fn border_bounds(&self) -> Rect {
        let half = self.border.half_inset();
        self.bounds.inset(half, half)
    }

    /// The current center-cropped sample, if one has been prepared.
    #[inline]
    pub fn sample(&self) -> Option<&Arc<RgbaImage>> {
        self.sample.as_ref()
    }

    /// Background color used in initials mode.
    #[inline]
    pub fn background_color(&self) -> Argb {
        initials_to_color(&self.initials)
    }

    /// React to a new view size.
    ///
    /// A zero width is ignored. Otherwise the bounds become
    /// `(0, 0, width, height)` and the sample is rebuilt. Returns whether the
    /// bounds were applied.
    pub fn on_bounds_changed(&mut self, width: u32, height: u32) -> bool {
        if width == 0 {
            debug!(width, height, "ignoring zero-width bounds");
            return false;
        }
        self.bounds = Rect::from_size(width, height);
        debug!(width, height, "bounds changed");
        self.prepare_sample();
        true
    }

    /// Rebuild the center-cropped sample for the current bounds.
    ///
    /// No-op while the bounds are empty or no image is attached.
    fn prepare_sample(&mut self) {
        let (width, height) = (self.bounds.width(), self.bounds.height());
        let Some(image) = self.image.as_deref() else {
            return;
        };
        if width == 0 {
            return;
        }
        self.sample = sample_center_crop(image, width, height).map(Arc::new);
        debug!(
            width,
            height,
            prepared = self.sample.is_some(),
            "sample recomputed"
        );
    }

    /// Attach or detach the image.
    ///
    /// While Avatar is requested the sample is rebuilt right away; otherwise it
    /// is dropped and rebuilt when Avatar is toggled back on.
    pub fn set_image(&mut self, image: Option<Arc<RgbaImage>>) {
        self.image = image;
        self.sample = None;
        if self.avatar_requested {
            self.prepare_sample();
        }
    }

    /// Replace the initials. Returns whether a redraw is needed.
    ///
    /// Empty text is replaced by [`DEFAULT_INITIALS`]. The initials are not
    /// visible in Avatar mode, so no redraw is requested there.
    pub fn set_initials(&mut self, initials: impl Into<String>) -> bool {
        self.initials = normalize_initials(initials.into());
        self.mode() == AvatarMode::Initials
    }

    /// Replace the ring color.
    pub fn set_border_color(&mut self, color: Argb) {
        self.border = self.border.with_color(color);
    }

    /// Replace the ring width, in pixels.
    pub fn set_border_width(&mut self, width_px: f32) {
        self.border = self.border.with_width(width_px);
    }

    /// Flip between Avatar and Initials. Returns whether anything changed.
    ///
    /// Without an attached image this is a no-op.
    pub fn toggle_mode(&mut self) -> bool {
        if self.image.is_none() {
            return false;
        }
        self.avatar_requested = !self.avatar_requested;
        if self.avatar_requested && self.sample.is_none() {
            self.prepare_sample();
        }
        true
    }

    /// Paint the circle and its ring onto `surface`.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        let mode = self.mode();
        trace!(?mode, bounds = ?self.bounds, "draw");

        match (mode, &self.sample) {
            (AvatarMode::Avatar, Some(sample)) => {
                surface.fill_oval(self.bounds, &Fill::Texture(Arc::clone(sample)));
            }
            (AvatarMode::Avatar, None) => {
                trace!("no sample prepared, skipping avatar fill");
            }
            (AvatarMode::Initials, _) => self.draw_initials(surface),
        }

        surface.stroke_oval(self.border_bounds(), self.border.into());
    }

    fn draw_initials<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_oval(self.bounds, &Fill::Solid(self.background_color()));

        let paint = TextPaint {
            color: self.initials_style.color,
            size: self.initials_style.text_size(self.bounds.height()),
            align: TextAlign::Center,
        };
        let metrics = surface.font_metrics(paint.size);
        let baseline = metrics.centered_baseline(self.bounds.exact_center_y());
        surface.draw_text(&self.initials, self.bounds.exact_center_x(), baseline, &paint);
    }
}

impl Stateful for CircleAvatar {
    type State = CircleState;

    fn save_state(&self) -> CircleState {
        CircleState {
            mode: self.requested_mode(),
            border_width: self.border.width_px,
            border_color: self.border.color,
        }
    }

    fn restore_state(&mut self, state: CircleState) {
        self.avatar_requested = state.mode == AvatarMode::Avatar;
        self.border = BorderStyle::new(state.border_width, state.border_color);
        if self.avatar_requested && self.sample.is_none() {
            self.prepare_sample();
        }
    }

    fn state_version() -> u32 {
        CIRCLE_STATE_VERSION
    }
}

fn normalize_initials(initials: String) -> String {
    if initials.is_empty() {
        DEFAULT_INITIALS.to_owned()
    } else {
        initials
    }
}
