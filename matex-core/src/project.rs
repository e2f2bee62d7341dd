//! Field projection from upstream records to the frontend shape.
//!
//! The projection is pure and total: any record, including an empty one or
//! one with unexpected value types, produces a `ProjectedMaterial` without
//! failing. Fields that are absent or of the wrong type are left out.

use serde_json::Value;

use crate::types::{ProjectedMaterial, RawMaterialRecord, SpaceGroup};

/// Projects an upstream record onto the fixed frontend shape.
///
/// Scalar essential fields are copied when present. The nested `symmetry`
/// record, when present and non-empty, is flattened into `crystal_system`
/// (string form, empty if the sub-field is missing) and
/// `space_group.symbol` (empty if missing). When `symmetry` is absent,
/// neither derived field is produced.
pub fn project_material(raw: &RawMaterialRecord) -> ProjectedMaterial {
    let mut out = ProjectedMaterial {
        material_id: string_field(raw, "material_id"),
        formula_pretty: string_field(raw, "formula_pretty"),
        nsites: raw.get("nsites").and_then(Value::as_u64),
        volume: float_field(raw, "volume"),
        density: float_field(raw, "density"),
        band_gap: float_field(raw, "band_gap"),
        formation_energy_per_atom: float_field(raw, "formation_energy_per_atom"),
        energy_above_hull: float_field(raw, "energy_above_hull"),
        is_stable: raw.get("is_stable").and_then(Value::as_bool),
        theoretical: raw.get("theoretical").and_then(Value::as_bool),
        ..Default::default()
    };

    if let Some(symmetry) = raw.get("symmetry").filter(|s| is_non_empty(s)) {
        out.crystal_system = Some(display_string(symmetry.get("crystal_system")));
        out.space_group = Some(SpaceGroup {
            symbol: display_string(symmetry.get("symbol")),
        });
    }

    out
}

fn string_field(raw: &RawMaterialRecord, field: &str) -> Option<String> {
    raw.get(field).and_then(Value::as_str).map(str::to_owned)
}

fn float_field(raw: &RawMaterialRecord, field: &str) -> Option<f64> {
    raw.get(field).and_then(Value::as_f64)
}

/// A symmetry value counts as present only when it is a non-empty object.
/// The provider sends `null` or `{}` for materials without symmetry data.
fn is_non_empty(value: &Value) -> bool {
    match value {
        Value::Object(map) => !map.is_empty(),
        _ => false,
    }
}

/// String form of a sub-field: the string itself, empty for missing or
/// null, and the JSON rendering for anything else (the provider encodes
/// crystal systems as plain strings, but the projection must not fail on
/// other shapes).
fn display_string(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
