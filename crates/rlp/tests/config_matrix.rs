//! Decoder configuration loading.

use rlp_tree::{decode_with_config, DecoderConfig, RlpError, DEFAULT_MAX_DEPTH};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct HostConfig {
    #[serde(default)]
    rlp: DecoderConfig,
}

#[test]
fn config_defaults() {
    let config = DecoderConfig::default();
    assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
    assert_eq!(config.with_max_depth(8).max_depth, 8);
}

#[test]
fn config_from_toml_matrix() {
    let host: HostConfig = toml::from_str("[rlp]\nmax_depth = 16\n").unwrap();
    assert_eq!(host.rlp.max_depth, 16);

    let host: HostConfig = toml::from_str("[rlp]\n").unwrap();
    assert_eq!(host.rlp, DecoderConfig::default());

    let host: HostConfig = toml::from_str("").unwrap();
    assert_eq!(host.rlp, DecoderConfig::default());

    assert!(toml::from_str::<HostConfig>("[rlp]\nmax_depth = -1\n").is_err());
}

#[test]
fn config_json_roundtrip() {
    let config = DecoderConfig::default().with_max_depth(3);
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(json, r#"{"max_depth":3}"#);
    let back: DecoderConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn config_limits_decoding() {
    let config: DecoderConfig = serde_json::from_str(r#"{"max_depth":1}"#).unwrap();
    assert!(decode_with_config(&[0xc1, 0x80], config).is_ok());
    assert_eq!(
        decode_with_config(&[0xc1, 0xc0], config),
        Err(RlpError::DepthExceeded { max_depth: 1 })
    );
}
