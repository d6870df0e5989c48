use std::path::PathBuf;

use anyhow::Context;
use chrono::{DateTime, Utc};
use exposure_core::{DeliveryContext, FilterMode, GeoPoint, PolicyConfig};
use exposure_policy::{Clock, ExposureEvaluator, FixedClock, SearchRequest, SystemClock};

#[derive(Debug)]
pub(crate) struct EvaluateArgs {
    pub file: PathBuf,
    pub filter: FilterMode,
    pub at: Option<DateTime<Utc>>,
    pub delivery: Option<DeliveryContext>,
    pub pretty: bool,
}

/// Build the requester context. clap guarantees the three flags arrive together.
pub(crate) fn delivery_context(
    center: Option<String>,
    lat: Option<f64>,
    lng: Option<f64>,
) -> Option<DeliveryContext> {
    match (center, lat, lng) {
        (Some(center_id), Some(lat), Some(lng)) => Some(DeliveryContext {
            center_id,
            location: GeoPoint { lat, lng },
        }),
        _ => None,
    }
}

/// Evaluate a candidates file and render the response as JSON.
pub(crate) fn run_evaluate(config: PolicyConfig, args: EvaluateArgs) -> anyhow::Result<String> {
    let file = exposure_core::load_candidates(&args.file)?;
    tracing::info!(
        path = %args.file.display(),
        candidates = file.candidates.len(),
        ads = file.ads.len(),
        filter = %args.filter,
        "loaded candidates"
    );

    if let Some(delivery) = args.delivery.as_ref() {
        anyhow::ensure!(
            delivery.location.is_valid(),
            "requester location ({}, {}) is not a valid coordinate",
            delivery.location.lat,
            delivery.location.lng
        );
    }

    let now = match args.at {
        Some(at) => at,
        None => SystemClock.now()?,
    };

    let evaluator = ExposureEvaluator::new(config, FixedClock(now), ());
    let response = evaluator.search(SearchRequest {
        filter_mode: args.filter,
        delivery: args.delivery,
        candidates: file.candidates,
        ads: file.ads,
    })?;

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&response)
    } else {
        serde_json::to_string(&response)
    };
    rendered.context("failed to serialize response")
}
