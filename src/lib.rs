//! Object oriented canvas: a unit-aware geometry model for drawing surfaces.
//!
//! A [`canvas::Canvas`] is bound to a surface of known pixel size and owns a
//! default [`viewport::Viewport`] spanning the whole surface. Viewports hold
//! drawings whose positions and sizes are written in pixels, percentages of
//! the parent, or inches, and are only turned into pixels at layout time.
//!
//! Parsing is forgiving: input that cannot be understood becomes an unset
//! value instead of an error, and only surfaces as an
//! [`error::LayoutError`] when a consumer asks for concrete pixels.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`unit`] | Single unit values: parsing and pixel resolution |
//! | [`pair`] | Position and size pairs built from two unit values |
//! | [`viewport`] | Coordinate frames holding ordered drawings, and layout |
//! | [`content`] | Content objects and references to them |
//! | [`library`] | Two-level name lookup for `category#id` references |
//! | [`canvas`] | Canvas roots and the per-surface registry |
//! | [`scene`] | JSON scene documents |
//! | [`geom`] | Resolved pixel points, sizes and rectangles |
//! | [`error`] | Layout failure reporting |
//! | [`consts`] | Shared constants (DPI, content type, default surface size) |

pub mod canvas;
pub mod consts;
pub mod content;
pub mod error;
pub mod geom;
pub mod library;
pub mod pair;
pub mod scene;
pub mod unit;
pub mod viewport;
