// Copyright 2025 the Jumplist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON configuration for the adapter.
//!
//! Hosts pass an optional JSON object; every field is optional and every
//! failure mode degrades to keeping the current value. A config error is
//! never fatal and never blocks an adaptation cycle.

use alloc::string::String;

use jumplist_detect::DetectorConfig;
use jumplist_truncate::Bias;
use serde::Deserialize;

/// Effective adapter configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Config {
    /// Detector thresholds.
    pub detector: DetectorConfig,
    /// Weighting bias for truncation group distribution.
    pub bias: Bias,
}

/// The raw JSON shape: all fields optional, camelCase keys.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawConfig {
    height_width_min_ratio: Option<f64>,
    identification_min_size: Option<i64>,
    distribute_weight_type: Option<String>,
}

impl Config {
    /// Applies a JSON config object on top of the current values.
    ///
    /// Malformed JSON keeps everything as-is; individually out-of-range
    /// values keep only that field as-is. Both are logged.
    pub fn apply_json(&mut self, json: &str) {
        let raw: RawConfig = match serde_json::from_str(json) {
            Ok(raw) => raw,
            Err(err) => {
                log::warn!("ignoring malformed config: {err}");
                return;
            }
        };
        if let Some(ratio) = raw.height_width_min_ratio {
            self.detector.apply_ratio(ratio);
        }
        if let Some(size) = raw.identification_min_size {
            self.detector.apply_min_size(size);
        }
        if let Some(kind) = raw.distribute_weight_type.as_deref() {
            match parse_bias(kind) {
                Some(bias) => self.bias = bias,
                None => log::warn!("ignoring unknown distributeWeightType {kind:?}"),
            }
        }
    }
}

fn parse_bias(kind: &str) -> Option<Bias> {
    if kind.eq_ignore_ascii_case("start") {
        Some(Bias::Start)
    } else if kind.eq_ignore_ascii_case("center") {
        Some(Bias::Center)
    } else if kind.eq_ignore_ascii_case("end") {
        Some(Bias::End)
    } else {
        None
    }
}
