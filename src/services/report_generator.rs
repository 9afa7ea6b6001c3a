use std::sync::Mutex;
use std::time::Duration;
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use crate::config::constants::{
    AEO_SCORE_DETECTED, AEO_SCORE_MISSING, COPY_TONE, IMPACT_LABEL_DETECTED, IMPACT_LABEL_MISSING,
    JSON_LD_DETECTED, JSON_LD_MISSING, LCP_GOOD_UPPER_BOUND_SECS, LOAD_SPEED_RANGE_SECS, REVENUE_FACTOR,
    REVENUE_PROJECTION, SCHEMA_DETECTION_PROBABILITY, SCORE_RANGE, SEO_SCORE_RANGE, SHOPIFY_PROBABILITY,
    SSL_STATUS, VALUE_PROPOSITION, VIP_RECOMMENDATION,
};
use crate::enums::platform::Platform;
use crate::enums::priority::Priority;
use crate::enums::status::Status;
use crate::errors::AuditResult;
use crate::services::status_classifier::StatusClassifier;
use crate::structs::config::config::Config;
use crate::structs::config::generator_config::GeneratorConfig;
use crate::structs::report::ai_readiness::AiReadiness;
use crate::structs::report::audit_report::AuditReport;
use crate::structs::report::marketing_insights::MarketingInsights;
use crate::structs::report::revenue_impact::RevenueImpact;
use crate::structs::report::roadmap_item::RoadmapItem;
use crate::structs::report::technical_metrics::TechnicalMetrics;
use crate::structs::report::trust_check_item::TrustCheckItem;
use crate::traits::report_source::ReportSource;

/// Fabricates plausible-looking audit reports after an artificial delay.
///
/// Every field is an independent draw from the shared random source. With a
/// seed the sequence of reports is reproducible; without one it is seeded
/// from OS entropy.
pub struct SimulatedReportSource {
    config: GeneratorConfig,
    classifier: StatusClassifier,
    rng: Mutex<StdRng>,
}

impl SimulatedReportSource {
    pub fn new(config: GeneratorConfig, classifier: StatusClassifier) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            config,
            classifier,
            rng: Mutex::new(rng),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.generator.clone(), StatusClassifier::from_config(config))
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut rng)
    }

    fn draw_delay(&self) -> Duration {
        let (min, max) = (self.config.min_delay_ms, self.config.max_delay_ms);
        if min >= max {
            return Duration::from_millis(min);
        }
        Duration::from_millis(self.with_rng(|rng| rng.gen_range(min..=max)))
    }

    /// Draws a report without waiting.
    pub fn build_report(&self, url: &str) -> AuditReport {
        let (is_shopify, load_speed_secs, score, seo_score, schema_detected) = self.with_rng(|rng| {
            let is_shopify = url.to_lowercase().contains("shopify") || rng.gen_bool(SHOPIFY_PROBABILITY);
            let load_speed_secs = rng.gen_range(LOAD_SPEED_RANGE_SECS.0..LOAD_SPEED_RANGE_SECS.1);
            let schema_detected = rng.gen_bool(SCHEMA_DETECTION_PROBABILITY);
            let score = rng.gen_range(SCORE_RANGE.0..SCORE_RANGE.1);
            let seo_score = rng.gen_range(SEO_SCORE_RANGE.0..SEO_SCORE_RANGE.1);
            (is_shopify, load_speed_secs, score, seo_score, schema_detected)
        });

        let load_speed = format!("{:.1}s", load_speed_secs);
        let load_speed_status = self.classifier.classify(&load_speed);
        let lcp_target = self.classifier.success_upper_bound().unwrap_or(LCP_GOOD_UPPER_BOUND_SECS);

        AuditReport {
            url: url.to_string(),
            score: round_to_tenth(score),
            technical: TechnicalMetrics {
                platform: if is_shopify { Platform::ShopifyPlus } else { Platform::CustomReact },
                load_speed: load_speed.clone(),
                seo_score,
                ssl: SSL_STATUS.to_string(),
                mobile_responsive: true,
            },
            marketing: MarketingInsights {
                value_proposition: VALUE_PROPOSITION.to_string(),
                copy_tone: COPY_TONE.to_string(),
                vip_recommendation: VIP_RECOMMENDATION.to_string(),
            },
            ai_readiness: ai_readiness(schema_detected),
            revenue_impact: RevenueImpact {
                projection: REVENUE_PROJECTION.to_string(),
                factor: REVENUE_FACTOR.to_string(),
            },
            roadmap_30_days: roadmap(schema_detected, &load_speed, load_speed_status, lcp_target),
            trust_checklist: vec![
                TrustCheckItem { item: "SSL Certificate".to_string(), status: true },
                TrustCheckItem { item: "Data Privacy Policy".to_string(), status: true },
                TrustCheckItem { item: "Product Schema".to_string(), status: schema_detected },
            ],
        }
    }
}

#[async_trait]
impl ReportSource for SimulatedReportSource {
    async fn generate(&self, url: &str) -> AuditResult<AuditReport> {
        let delay = self.draw_delay();
        log::debug!("Simulating analysis of {} for {}ms", url, delay.as_millis());
        tokio::time::sleep(delay).await;
        Ok(self.build_report(url))
    }

    fn name(&self) -> &'static str {
        "simulated"
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn ai_readiness(schema_detected: bool) -> AiReadiness {
    if schema_detected {
        AiReadiness {
            schema_detected,
            json_ld_type: JSON_LD_DETECTED.to_string(),
            aeo_score: AEO_SCORE_DETECTED,
            impact_label: IMPACT_LABEL_DETECTED.to_string(),
        }
    } else {
        AiReadiness {
            schema_detected,
            json_ld_type: JSON_LD_MISSING.to_string(),
            aeo_score: AEO_SCORE_MISSING,
            impact_label: IMPACT_LABEL_MISSING.to_string(),
        }
    }
}

fn roadmap(schema_detected: bool, load_speed: &str, load_speed_status: Status, lcp_target: f64) -> Vec<RoadmapItem> {
    vec![
        RoadmapItem {
            day: "1-7".to_string(),
            task: "Implementación de JSON-LD (Schema.org) para habilitar la lectura de agentes de IA.".to_string(),
            target: "AI Readiness".to_string(),
            priority: Priority::when(!schema_detected),
        },
        RoadmapItem {
            day: "8-15".to_string(),
            task: format!(
                "Optimización de activos multimedia para reducir el LCP por debajo de los {}s (Actual: {}).",
                lcp_target, load_speed
            ),
            target: "Performance".to_string(),
            priority: Priority::when(load_speed_status != Status::Success),
        },
        RoadmapItem {
            day: "16-30".to_string(),
            task: "Refactorización de la Propuesta de Valor para indexado semántico (NLP Optimization).".to_string(),
            target: "Marketing".to_string(),
            priority: Priority::Normal,
        },
    ]
}
