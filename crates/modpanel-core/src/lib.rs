//! # modpanel-core - Core Types
//!
//! Foundation crate for the moderation panel. Provides the relative
//! geometry model, the element tree a surface is built from, its wire
//! encoding, user snapshot types, error handling and logging.
//!
//! This crate has **zero internal dependencies**.
//!
//! ## Public API
//!
//! ### Geometry (`geometry`)
//! - [`Rect`] - Relative bounding box with `position_min`/`position_max`
//! - [`Color`] - RGB + alpha with a normalized wire form
//!
//! ### Element Tree (`element`)
//! - [`Surface`] - Ordered element list with a designated main panel
//! - [`Element`], [`ElementKind`] - One node and its variant payload
//! - [`Panel`], [`Label`], [`Button`], [`InputField`] - Variant payloads
//!
//! ### Domain Types (`types`)
//! - [`UserRecord`], [`Vitals`], [`Position`] - Registry snapshots
//! - [`Viewer`] - The user operating the panel
//!
//! ### Error Handling (`error`)
//! - [`Error`], [`Result`], [`ResultExt`]
//!
//! ## Prelude
//!
//! ```rust
//! use modpanel_core::prelude::*;
//! ```

pub mod element;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod prelude;
pub mod types;
pub mod wire;

pub use element::{
    Button, Element, ElementKind, InputField, Label, Panel, Surface, TextAlign, DEFAULT_CHAR_LIMIT,
    DEFAULT_FONT_SIZE,
};
pub use error::{Error, Result, ResultExt};
pub use geometry::{Color, Rect};
pub use types::{Position, UserId, UserRecord, Viewer, Vitals};
