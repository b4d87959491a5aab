//! Plan/explain surface and config round-trips.

mod common;

use common::{consultants, Developer};
use lazyseq::prelude::*;

#[test]
fn test_explain_marks_full_buffer_stages() {
    let all = consultants();
    let chain = (&all)
        .filter(|c| c.project() != "Audit")
        .order_by(|c| c.first_name().to_string())
        .map(|c| c.first_name());

    assert_eq!(
        chain.explain(),
        "map\n  order_by [full buffer]\n    filter\n      vec\n"
    );
    assert_eq!(chain.plan().buffering_stages(), vec!["order_by"]);
    assert_eq!(chain.plan().depth(), 4);
}

#[test]
fn test_streaming_chain_has_no_buffering() {
    let all = consultants();
    let chain = (&all)
        .flat_map(|c| c.skills().iter())
        .zip(from_fn(|| 0..))
        .filter(|(_, i)| *i < 3);
    let plan = chain.plan();
    assert!(plan.buffering_stages().is_empty());
    assert_eq!(plan.inputs[0].name, "zip");
    assert_eq!(plan.inputs[0].inputs.len(), 2);
    assert_eq!(plan.inputs[0].inputs[1].name, "from_fn");
}

#[test]
fn test_grouping_pipeline_plan() {
    let all = consultants();
    let chain = (&all)
        .of_type::<&Developer>()
        .group_by(|d| d.project.clone())
        .map(|g| g.len())
        .reverse();
    let plan = chain.plan();
    assert_eq!(plan.buffering_stages(), vec!["reverse", "group_by"]);
    assert_eq!(plan.materialization, Materialization::FullBuffer);
}

#[test]
fn test_plan_serializes() {
    let data = vec![1, 2, 3];
    let plan = (&data).reverse().plan();
    let json = serde_json::to_value(&plan).unwrap();
    assert_eq!(json["name"], "reverse");
    assert_eq!(json["materialization"], "full_buffer");
    assert_eq!(json["inputs"][0]["materialization"], "streaming");

    let back: OpPlan = serde_json::from_value(json).unwrap();
    assert_eq!(back, plan);
}

#[test]
fn test_config_from_json() {
    let cfg: PipelineConfig =
        serde_json::from_str(r#"{"buffer_limit": null, "buffer_capacity_hint": 64}"#).unwrap();
    assert_eq!(cfg.buffer_limit, None);
    assert_eq!(cfg.buffer_capacity_hint, 64);
    assert!(cfg.validate().is_ok());
}
