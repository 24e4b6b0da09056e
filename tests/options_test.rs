//! Option resolution: last-write-wins builders and snapshot merging.

use secrecy::ExposeSecret;
use serde_json::json;

use unillm::prelude::*;

#[test]
fn later_temperature_wins() {
    let config = ModelConfig::builder().temperature(0.2).temperature(0.7).build();
    assert_eq!(config.temperature, Some(0.7));
}

#[test]
fn single_setter_sticks() {
    let config = ModelConfig::builder().temperature(0.7).build();
    assert_eq!(config.temperature, Some(0.7));
}

#[test]
fn no_setter_means_absent() {
    let config = ModelConfig::builder().build();
    assert_eq!(config.temperature, None);
    assert_eq!(config, ModelConfig::default());
}

#[test]
fn setters_do_not_disturb_unrelated_fields() {
    let config = ModelConfig::builder()
        .temperature(0.5)
        .seed(99)
        .top_p(0.8)
        .temperature(1.0)
        .build();
    assert_eq!(config.temperature, Some(1.0));
    assert_eq!(config.seed, Some(99));
    assert_eq!(config.top_p, Some(0.8));
    assert!(config.max_tokens.is_none());
}

#[test]
fn merge_is_last_write_wins_across_snapshots() {
    let defaults = ModelConfig::builder()
        .temperature(0.2)
        .max_tokens(1024)
        .track_usage(true)
        .build();
    let per_call = ModelConfig::builder().temperature(0.9).build();

    let effective = defaults.clone().merge(per_call);
    assert_eq!(effective.temperature, Some(0.9));
    assert_eq!(effective.max_tokens, Some(1024));
    assert_eq!(effective.track_usage, Some(true));

    // Merging an empty snapshot changes nothing.
    let unchanged = defaults.clone().merge(ModelConfig::default());
    assert_eq!(unchanged, defaults);
}

#[test]
fn usage_and_cost_switches_are_independent() {
    let config = ModelConfig::builder()
        .track_usage(true)
        .compute_cost(false)
        .build();
    assert_eq!(config.track_usage, Some(true));
    assert_eq!(config.compute_cost, Some(false));

    let config = ModelConfig::builder().compute_cost(true).build();
    assert!(config.track_usage.is_none());
    assert_eq!(config.compute_cost, Some(true));
}

#[test]
fn embedding_config_last_write_wins() {
    let config = EmbeddingModelConfig::builder()
        .dimensions(256)
        .dimensions(1536)
        .build();
    assert_eq!(config.dimensions, Some(1536));
    assert!(config.track_usage.is_none());
}

#[test]
fn image_config_merge() {
    let base = ImageModelConfig::builder().size("512x512").quality("standard").build();
    let overlay = ImageModelConfig::builder().quality("hd").count(2).build();
    let effective = base.merge(overlay);
    assert_eq!(effective.size.as_deref(), Some("512x512"));
    assert_eq!(effective.quality.as_deref(), Some("hd"));
    assert_eq!(effective.count, Some(2));
}

#[test]
fn client_config_resolution() {
    let defaults = ClientConfig::builder()
        .api_key("sk-default")
        .base_url("https://api.example.com")
        .extra("organization", json!("acme"))
        .build();
    let overrides = ClientConfig::builder()
        .api_key("sk-override")
        .api_version("2026-02-01")
        .extra("project", json!("demo"))
        .build();

    let effective = defaults.merge(overrides);
    assert_eq!(
        effective.api_key.as_ref().map(|k| k.expose_secret()),
        Some("sk-override")
    );
    assert_eq!(effective.base_url.as_deref(), Some("https://api.example.com"));
    assert_eq!(effective.api_version.as_deref(), Some("2026-02-01"));
    assert_eq!(effective.extra["organization"], json!("acme"));
    assert_eq!(effective.extra["project"], json!("demo"));
}

#[test]
fn request_builder_applies_setters_in_order() {
    let request = CompletionRequest::builder("m")
        .message(ModelMessage::user("hi"))
        .temperature(0.2)
        .temperature(0.7)
        .build();
    assert_eq!(request.config.temperature, Some(0.7));
    assert!(request.validate().is_ok());
}
