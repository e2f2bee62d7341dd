//! Domain types for MATEX.
//!
//! - [`RawMaterialRecord`]: open-ended record as returned by the upstream
//!   provider; may carry any set of fields
//! - [`ProjectedMaterial`]: the fixed shape surfaced to the frontend
//! - [`SpaceGroup`]: nested space-group object on the projected shape

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An upstream material record. The provider applies a server-side field
/// projection, but nothing here assumes which fields arrived; the record is
/// an open mapping and absent fields are simply absent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawMaterialRecord(pub Map<String, Value>);

impl RawMaterialRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Returns the value for a field, if present.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }
}

impl From<Map<String, Value>> for RawMaterialRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Space-group information on the projected shape.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SpaceGroup {
    /// Hermann-Mauguin symbol, e.g. "Fd-3m". Empty when the upstream
    /// symmetry record carries no symbol.
    pub symbol: String,
}

/// A material record trimmed to the fields the frontend's `Material`
/// interface consumes. Every field is optional and omitted from the JSON
/// output when the upstream record did not carry it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectedMaterial {
    /// Provider identifier, e.g. "mp-149".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material_id: Option<String>,
    /// Reduced formula in display form, e.g. "Fe2O3".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formula_pretty: Option<String>,
    /// Number of sites in the unit cell.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nsites: Option<u64>,
    /// Unit cell volume in cubic angstroms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    /// Density in g/cm^3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub density: Option<f64>,
    /// Band gap in eV.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub band_gap: Option<f64>,
    /// Formation energy per atom in eV.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formation_energy_per_atom: Option<f64>,
    /// Energy above the convex hull in eV/atom.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy_above_hull: Option<f64>,
    /// Whether the material sits on the convex hull.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_stable: Option<bool>,
    /// Whether the entry is theoretical (not experimentally observed).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theoretical: Option<bool>,
    /// Crystal system label derived from the upstream symmetry record.
    /// Present only when the record carried a non-empty symmetry object;
    /// empty string when the object had no crystal-system field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crystal_system: Option<String>,
    /// Space group derived from the upstream symmetry record, under the
    /// same presence rule as `crystal_system`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_group: Option<SpaceGroup>,
}
