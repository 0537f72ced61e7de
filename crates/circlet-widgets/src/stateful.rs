#![forbid(unsafe_code)]

//! Save/restore of widget state across host lifecycle transitions.
//!
//! The host owns snapshot transport (e.g. across a configuration change);
//! widgets only produce and consume values.
//!
//! # Design Invariants
//!
//! 1. **Round-trip fidelity**: `restore_state(save_state())` reproduces the
//!    persisted fields exactly. Derived data (the sampled image) is rebuilt,
//!    not persisted.
//!
//! 2. **Chained host state**: a circle snapshot carries the host's own state
//!    alongside the widget fields, so the host's default handling still sees
//!    what it saved.
//!
//! 3. **Foreign snapshots pass through**: handing a view a
//!    [`ViewSnapshot::Host`] restores the host part only and leaves widget
//!    fields untouched.
//!
//! 4. **Versioned encoding**: encoded snapshots carry a schema version.
//!    Decoding a different version fails with [`StateError::VersionMismatch`]
//!    instead of guessing.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Outcome |
//! |---------|-------|---------|
//! | Malformed bytes | Corrupt transport | `StateError::Json` |
//! | Version mismatch | Widget upgraded | `StateError::VersionMismatch` |
//! | Foreign snapshot | Host handed another view's state | Passed to host handling |

use std::fmt;

use circlet_style::Argb;
use serde::{Deserialize, Serialize};

use crate::circle::AvatarMode;

/// Opaque state owned by the host's view base.
pub type HostState = serde_json::Value;

/// Opt-in trait for widgets with persistable state.
///
/// `save_state` must be a pure read; `restore_state` must only mutate `self`.
pub trait Stateful: Sized {
    /// The state type that gets persisted.
    ///
    /// Must implement `Default` so a missing snapshot degrades gracefully.
    type State: Default;

    /// Extract current state for persistence.
    fn save_state(&self) -> Self::State;

    /// Restore state from persistence.
    fn restore_state(&mut self, state: Self::State);

    /// State schema version.
    ///
    /// Bump this when the `State` type's serialized form changes in a
    /// backwards-incompatible way.
    fn state_version() -> u32 {
        1
    }
}

/// Version-tagged wrapper for widget state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VersionedState<S> {
    /// Schema version (from `Stateful::state_version()`).
    pub version: u32,
    /// The actual state payload.
    pub data: S,
}

impl<S> VersionedState<S> {
    /// Wrap state with its version tag.
    #[must_use]
    pub fn new(version: u32, data: S) -> Self {
        Self { version, data }
    }

    /// Check the version tag against `W::state_version()`.
    #[inline]
    pub fn matches<W: Stateful>(&self) -> bool {
        self.version == W::state_version()
    }
}

/// Persisted fields of a circle avatar.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CircleState {
    /// Requested render mode. Avatar only takes effect while an image is attached.
    pub mode: AvatarMode,
    /// Ring stroke width in pixels.
    pub border_width: f32,
    pub border_color: Argb,
}

impl Default for CircleState {
    fn default() -> Self {
        Self {
            mode: AvatarMode::Avatar,
            border_width: 0.0,
            border_color: Argb::TRANSPARENT,
        }
    }
}

/// Circle fields chained to the host's own state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CircleSnapshot {
    pub host: HostState,
    #[serde(flatten)]
    pub state: CircleState,
}

/// What a view hands the host on save, and receives back on restore.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum ViewSnapshot {
    /// A circle avatar's snapshot.
    Circle(VersionedState<CircleSnapshot>),
    /// State produced by something else; restored through host handling only.
    Host(HostState),
}

impl ViewSnapshot {
    /// Encode as JSON bytes.
    pub fn encode(&self) -> Result<Vec<u8>, StateError> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Decode JSON bytes, rejecting circle snapshots of another schema version.
    pub fn decode(bytes: &[u8]) -> Result<Self, StateError> {
        let snapshot: Self = serde_json::from_slice(bytes)?;
        if let Self::Circle(versioned) = &snapshot {
            if versioned.version != CIRCLE_STATE_VERSION {
                return Err(StateError::VersionMismatch {
                    found: versioned.version,
                    expected: CIRCLE_STATE_VERSION,
                });
            }
        }
        Ok(snapshot)
    }
}

/// Current schema version of [`CircleSnapshot`].
pub const CIRCLE_STATE_VERSION: u32 = 1;

/// Errors raised while encoding or decoding snapshots.
#[derive(Debug)]
pub enum StateError {
    /// Malformed or unencodable JSON.
    Json(serde_json::Error),
    /// The snapshot was written by a different schema version.
    VersionMismatch { found: u32, expected: u32 },
}

impl From<serde_json::Error> for StateError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(err) => write!(f, "snapshot encoding error: {err}"),
            Self::VersionMismatch { found, expected } => {
                write!(f, "snapshot version {found} does not match expected {expected}")
            }
        }
    }
}

impl std::error::Error for StateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::VersionMismatch { .. } => None,
        }
    }
}
