//! Constants for MATEX.
//!
//! The formula list and field set mirror what the frontend's homepage and
//! `Material` interface expect; changing either changes the API contract.

// ═══════════════════════════════════════════════════════════════════════════════
// POPULAR MATERIALS
// ═══════════════════════════════════════════════════════════════════════════════

/// Formulas fetched for the homepage "popular materials" list, in display
/// order. The aggregate fetch preserves this order for every formula that
/// resolves successfully.
pub const POPULAR_FORMULAS: &[&str] = &[
    "Si", "GaAs", "NaCl", "Fe2O3", "TiO2", "Al2O3", "MgO", "CaF2",
];

// ═══════════════════════════════════════════════════════════════════════════════
// FIELD PROJECTION
// ═══════════════════════════════════════════════════════════════════════════════

/// Scalar fields copied verbatim from an upstream record into the projected
/// shape. `symmetry` is requested upstream as well but handled separately:
/// it is flattened into `crystal_system` and `space_group`.
pub const ESSENTIAL_FIELDS: &[&str] = &[
    "material_id",
    "formula_pretty",
    "nsites",
    "volume",
    "density",
    "band_gap",
    "formation_energy_per_atom",
    "energy_above_hull",
    "is_stable",
    "theoretical",
];

/// Field list sent upstream via `_fields` so the provider projects
/// server-side. `ESSENTIAL_FIELDS` plus the nested `symmetry` record.
pub const REQUESTED_FIELDS: &[&str] = &[
    "material_id",
    "formula_pretty",
    "nsites",
    "volume",
    "density",
    "symmetry",
    "band_gap",
    "formation_energy_per_atom",
    "energy_above_hull",
    "is_stable",
    "theoretical",
];

// ═══════════════════════════════════════════════════════════════════════════════
// CACHING
// ═══════════════════════════════════════════════════════════════════════════════

/// Default time-to-live for the popular-materials cache slot, in seconds.
/// After this elapses the slot is stale and the next request re-fetches.
pub const DEFAULT_CACHE_TTL_SECONDS: u64 = 3600;

/// Default result limit for search when the caller does not supply one.
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Minimum length of a search query; anything shorter is rejected before
/// any upstream call is made.
pub const MIN_QUERY_LENGTH: usize = 2;
