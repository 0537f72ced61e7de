#![forbid(unsafe_code)]

//! Circular avatar widget for circlet.

pub mod circle;
pub mod config;
pub mod image_source;
pub mod stateful;
pub mod view;

pub use circle::{AvatarMode, CircleAvatar};
pub use config::{CircleConfig, ConfigError, DEFAULT_BORDER_WIDTH_DP, DEFAULT_SIZE_DP};
pub use image_source::{ImageError, ImageSource, MemoryResources, ResourceId, ResourceResolver};
pub use stateful::{
    CIRCLE_STATE_VERSION, CircleSnapshot, CircleState, HostState, StateError, Stateful,
    VersionedState, ViewSnapshot,
};
pub use view::{CircleView, Invalidation, ViewBase};

use circlet_core::{MeasureSpec, Size};
use circlet_render::surface::Surface;

/// The contract between a host view tree and a view.
///
/// The host drives every call from its single UI thread: measure, then size
/// changes, then draws. Saves and restores happen independently of that cycle.
pub trait View {
    /// Propose a size for the given per-axis constraints.
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size;

    /// The host assigned a new size.
    fn on_size_changed(&mut self, width: u32, height: u32, old_width: u32, old_height: u32);

    /// Issue draw commands to `surface`.
    fn draw(&self, surface: &mut dyn Surface);

    /// Capture state for the host to carry across a lifecycle transition.
    fn save_state(&self) -> ViewSnapshot;

    /// Reapply a snapshot the host kept.
    ///
    /// Snapshots of another kind must be accepted and restored through
    /// host handling only.
    fn restore_state(&mut self, snapshot: ViewSnapshot);
}
