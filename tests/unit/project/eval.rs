use super::*;
use crate::animation::apply::AnimatableProperty;
use crate::foundation::core::Resolution;
use crate::project::dsl::{AnimationBuilder, LayerBuilder, ProjectBuilder};
use crate::project::model::LayerKind;

fn project() -> Project {
    let slide = AnimationBuilder::new(AnimatableProperty::X, 2.0)
        .id("slide")
        .keyframe(0.0, 0.0)
        .keyframe(1.0, 100.0)
        .build()
        .unwrap();
    let late = AnimationBuilder::new(AnimatableProperty::X, 2.0)
        .id("late")
        .delay(1.0)
        .keyframe(0.0, 500.0)
        .keyframe(1.0, 700.0)
        .build()
        .unwrap();
    let bogus: crate::animation::anim::Animation = serde_json::from_str(
        r#"{"id": "bogus", "property": "textShadow", "duration": 1,
            "keyframes": [{"time": 0, "value": 1}]}"#,
    )
    .unwrap();

    ProjectBuilder::new("p", 10.0, 30.0, Resolution::new(200, 100).unwrap())
        .layer(
            LayerBuilder::new("a", LayerKind::Shape, 1.0, 5.0)
                .z_index(2)
                .animation(slide)
                .animation(late)
                .animation(bogus)
                .build()
                .unwrap(),
        )
        .layer(
            LayerBuilder::new("b", LayerKind::Text, 0.0, 10.0)
                .opacity(0.5)
                .build()
                .unwrap(),
        )
        .layer(
            LayerBuilder::new("hidden", LayerKind::Text, 0.0, 10.0)
                .visible(false)
                .build()
                .unwrap(),
        )
        .build()
        .unwrap()
}

#[test]
fn inactive_layers_fall_back_to_authored_values() {
    let mut p = project();
    let stats = evaluate(&mut p, 0.5);
    assert_eq!(stats.active_layers, 1);
    assert!(!p.layers[0].state.active);
    assert_eq!(p.layers[0].state.transform.x, 0.0);
    assert!(p.layers[1].state.active);
    assert_eq!(p.layers[1].state.opacity, 0.5);
    assert!(!p.layers[2].state.active);
}

#[test]
fn later_animations_override_earlier_ones() {
    let mut p = project();
    // Layer-local 0.5: only "slide" is running; "bogus" targets an unknown property.
    let stats = evaluate(&mut p, 1.5);
    assert_eq!(p.layers[0].state.transform.x, 25.0);
    assert_eq!(stats.applied, 1);
    assert_eq!(stats.ignored_writes, 1);

    // Layer-local 2.0: "late" has started and wins.
    let stats = evaluate(&mut p, 3.0);
    assert_eq!(p.layers[0].state.transform.x, 600.0);
    assert_eq!(stats.ignored_writes, 0);
    assert_eq!(stats.applied, 2);
}

#[test]
fn evaluation_is_pure_in_time() {
    let mut p = project();
    evaluate(&mut p, 3.0);
    let first: Vec<_> = p.layers.iter().map(|l| l.state.clone()).collect();
    evaluate(&mut p, 1.2);
    evaluate(&mut p, 3.0);
    let second: Vec<_> = p.layers.iter().map(|l| l.state.clone()).collect();
    assert_eq!(first, second);
}

#[test]
fn snapshot_orders_active_layers_by_z() {
    let mut p = project();
    evaluate(&mut p, 1.5);
    let nodes = snapshot(&p);
    let ids: Vec<_> = nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, ["b", "a"]);
    assert_eq!(nodes[1].transform.translation().x, 25.0);
}
