//! Shared constants for the geometry model.

// ── Units ───────────────────────────────────────────────────────

/// Dots per inch assumed when resolving inch units. There is no DPI
/// negotiation with the host surface.
pub const DPI: f64 = 72.0;

// ── Content ─────────────────────────────────────────────────────

/// The only content `type` a viewport admits.
pub const DRAWING_TYPE: &str = "drawing";

/// Library category used when a reference is written as a bare `#id`.
pub const DEFAULT_CATEGORY: &str = "drawing";

// ── Surfaces ────────────────────────────────────────────────────

/// Default width of an HTML canvas element, in pixels.
pub const DEFAULT_SURFACE_WIDTH: i64 = 300;

/// Default height of an HTML canvas element, in pixels.
pub const DEFAULT_SURFACE_HEIGHT: i64 = 150;
