//! Layered merging of YAML configuration values.
//!
//! # Merge Rules
//!
//! - Mappings are merged key by key, recursively
//! - Sequences and scalars in the overlay replace the base
//! - A null in the overlay removes the key from the base

use serde_yaml::{Mapping, Value};

/// Merge `overlay` on top of `base`, returning a new value.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    let (Value::Mapping(base_map), Value::Mapping(overlay_map)) = (base, overlay) else {
        return overlay.clone();
    };

    let mut merged = base_map.clone();
    for (key, value) in overlay_map {
        if value.is_null() {
            merged.remove(key);
            continue;
        }
        let next = match base_map.get(key) {
            Some(existing) => deep_merge(existing, value),
            None => value.clone(),
        };
        merged.insert(key.clone(), next);
    }
    Value::Mapping(merged)
}

/// Merge layers in order; the last layer has the highest priority.
pub fn merge_layers(layers: &[Value]) -> Value {
    layers
        .iter()
        .fold(Value::Mapping(Mapping::new()), |acc, layer| {
            deep_merge(&acc, layer)
        })
}
