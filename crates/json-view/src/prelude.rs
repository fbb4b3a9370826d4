//! json-view prelude.
//!
//! ```rust,ignore
//! use json_view::prelude::*;
//! ```

// ── Core types ─────────────────────────────────────────────────
pub use crate::JsonModel;
pub use crate::ViewConfig;
pub use crate::ViewError;

// ── Variables ──────────────────────────────────────────────────
pub use crate::hal::{Collection, Entity};
pub use crate::traversable::{Pairs, Sequence, Traversable};
pub use crate::{IntoVariables, JsonSerializable, Key, Variable, Variables};
