use crate::animation::apply::{Appearance, apply};
use crate::foundation::core::Affine;
use crate::project::model::{BlendMode, Layer, Project};

/// Counters from one update pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PassStats {
    /// Layers visible and inside their window.
    pub active_layers: usize,
    /// Animations that produced a value.
    pub applied: usize,
    /// Writes dropped because of an unknown property or a mismatched value.
    pub ignored_writes: usize,
}

/// Resolve every layer's live state at timeline `time`.
///
/// Each layer is reset to its authored values first, so the result depends only on the project
/// and `time`.
#[tracing::instrument(skip(project), fields(layers = project.layers.len()))]
pub fn evaluate(project: &mut Project, time: f64) -> PassStats {
    let mut stats = PassStats::default();
    for layer in &mut project.layers {
        layer.reset_state();
        if !layer.visible || !layer.contains(time) {
            continue;
        }
        layer.state.active = true;
        stats.active_layers += 1;
        evaluate_layer(layer, time, &mut stats);
    }
    stats
}

fn evaluate_layer(layer: &mut Layer, time: f64, stats: &mut PassStats) {
    let local = layer.local_time(time);
    for anim in &layer.animations {
        let Some(value) = anim.sample(local) else {
            continue;
        };
        let outcome = apply(&mut layer.state, anim.property, &value);
        if outcome.is_ignored() {
            stats.ignored_writes += 1;
            tracing::debug!(
                layer = %layer.id,
                animation = %anim.id,
                property = ?anim.property,
                ?outcome,
                "ignored property write"
            );
        } else {
            stats.applied += 1;
        }
    }
}

/// Render-ready view of one layer, ordered for painting by [`snapshot`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluatedLayer {
    pub id: String,
    pub z_index: i32,
    pub blend_mode: BlendMode,
    pub opacity: f64,
    /// Final affine for a content box the size of the project resolution.
    pub transform: Affine,
    pub appearance: Appearance,
}

/// Active layers in paint order (ascending z-index, then authored order).
pub fn snapshot(project: &Project) -> Vec<EvaluatedLayer> {
    let size = project.resolution.size();
    let mut out: Vec<(usize, EvaluatedLayer)> = project
        .layers
        .iter()
        .enumerate()
        .filter(|(_, l)| l.state.active)
        .map(|(i, l)| {
            let node = EvaluatedLayer {
                id: l.id.clone(),
                z_index: l.z_index,
                blend_mode: l.blend_mode,
                opacity: l.state.opacity,
                transform: l.state.transform.to_affine(size),
                appearance: l.state.appearance.clone(),
            };
            (i, node)
        })
        .collect();
    out.sort_by_key(|(i, n)| (n.z_index, *i));
    out.into_iter().map(|(_, n)| n).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/project/eval.rs"]
mod tests;
