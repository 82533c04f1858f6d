//! OpenTelemetry tracer provider setup.

use std::time::Duration;

use opentelemetry::KeyValue;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{
    Resource,
    trace::{RandomIdGenerator, Sampler, SdkTracerProvider},
};

use crate::config::observability::ObservabilityConfig;

use super::ObservabilityError;

/// Groups every Beacon process under one namespace in the trace backend.
const SERVICE_NAMESPACE: &str = "beacon";

pub(super) fn build_tracer_provider(
    config: &ObservabilityConfig,
) -> Result<SdkTracerProvider, ObservabilityError> {
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(config.otel_exporter_otlp_endpoint.clone())
        .with_timeout(Duration::from_secs(config.otel_exporter_otlp_timeout_seconds))
        .build()?;

    Ok(SdkTracerProvider::builder()
        .with_sampler(sampler(config.otel_trace_sample_ratio))
        .with_id_generator(RandomIdGenerator::default())
        .with_resource(resource(config))
        .with_batch_exporter(exporter)
        .build())
}

fn resource(config: &ObservabilityConfig) -> Resource {
    Resource::builder_empty()
        .with_service_name(config.otel_service_name.clone())
        .with_attributes([
            KeyValue::new("service.namespace", SERVICE_NAMESPACE),
            KeyValue::new("service.version", config.otel_service_version.clone()),
            KeyValue::new(
                "deployment.environment.name",
                config.otel_deployment_environment.clone(),
            ),
        ])
        .build()
}

/// Upstream sampling decisions win; root spans use the configured ratio.
fn sampler(ratio: f64) -> Sampler {
    let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };

    Sampler::ParentBased(Box::new(Sampler::TraceIdRatioBased(ratio)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root_ratio(sampler: &Sampler) -> Option<f64> {
        let Sampler::ParentBased(root) = sampler else {
            return None;
        };

        match root.as_ref() {
            Sampler::TraceIdRatioBased(ratio) => Some(*ratio),
            _ => None,
        }
    }

    #[test]
    fn sample_ratio_is_clamped() {
        assert_eq!(root_ratio(&sampler(2.5)), Some(1.0), "upper bound");
        assert_eq!(root_ratio(&sampler(-1.0)), Some(0.0), "lower bound");
        assert_eq!(root_ratio(&sampler(f64::NAN)), Some(0.0), "nan");
        assert_eq!(root_ratio(&sampler(0.25)), Some(0.25), "in range");
    }
}
