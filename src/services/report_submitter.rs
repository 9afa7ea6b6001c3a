use chrono::Utc;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use crate::enums::speed_label::SpeedLabel;
use crate::errors::{AuditError, AuditResult};
use crate::helpers::input_validator::InputValidator;
use crate::services::status_classifier::StatusClassifier;
use crate::structs::config::webhook_config::WebhookConfig;
use crate::structs::report::audit_report::AuditReport;
use crate::structs::webhook::marketing_summary::MarketingSummary;
use crate::structs::webhook::performance_data::PerformanceData;
use crate::structs::webhook::submission_metadata::SubmissionMetadata;
use crate::structs::webhook::submission_payload::SubmissionPayload;

/// Posts finished reports to the lead-capture webhook.
///
/// One attempt per call. Anything other than a 2xx response is a failure;
/// the response body is never read.
#[derive(Clone)]
pub struct ReportSubmitter {
    client: Client,
    config: WebhookConfig,
    classifier: StatusClassifier,
}

impl ReportSubmitter {
    pub fn new(config: WebhookConfig, classifier: StatusClassifier) -> Self {
        Self {
            client: Client::new(),
            config,
            classifier,
        }
    }

    pub fn build_payload(&self, email: &str, report: &AuditReport) -> SubmissionPayload {
        let speed = SpeedLabel::from(self.classifier.classify(&report.technical.load_speed));

        SubmissionPayload {
            email: email.to_string(),
            url: report.url.clone(),
            technical_score: report.technical_score(),
            seo_score: report.technical.seo_score,
            platform: report.technical.platform.to_string(),
            performance_data: PerformanceData {
                lcp: report.technical.load_speed.clone(),
                speed,
            },
            marketing_insights: MarketingSummary {
                value_prop: report.marketing.value_proposition.clone(),
                tone: report.marketing.copy_tone.clone(),
            },
            growth_opportunity: report.marketing.vip_recommendation.clone(),
            revenue_impact: report.revenue_impact.clone(),
            roadmap: report.roadmap_30_days.clone(),
            metadata: SubmissionMetadata {
                date: Utc::now(),
                consultant: self.config.consultant.clone(),
            },
        }
    }

    /// Configured extra headers plus the JSON content type, which always wins
    /// over a configured `Content-Type`.
    pub fn request_headers(&self) -> AuditResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        for (name, value) in &self.config.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| AuditError::validation_error("webhook.headers", name, "must be a valid header name", None))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|_| AuditError::validation_error("webhook.headers", value, "must be a valid header value", None))?;
            headers.insert(header_name, header_value);
        }
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    /// Validates everything locally before touching the network: a missing
    /// report, a bad email or an unset endpoint never produce a request.
    pub async fn submit(&self, email: &str, report: Option<&AuditReport>) -> AuditResult<()> {
        let report = report.ok_or_else(|| {
            AuditError::validation_error("report", "none", "an analysis must finish first", Some("Analyze a URL before requesting the report"))
        })?;
        let email = InputValidator::validate_email(email)?;

        let endpoint = self.config.resolve_url().ok_or_else(|| {
            AuditError::config_error(
                "No webhook endpoint configured",
                Some("webhook.url"),
                Some(&format!("Set {} or [webhook] url in the config file", self.config.url_env)),
            )
        })?;

        let payload = self.build_payload(&email, report);

        let request = self.client.post(&endpoint).headers(self.request_headers()?).json(&payload);

        log::info!("📨 Sending report for {} to webhook", report.url);
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuditError::network_error(
                "webhook delivery",
                Some(&endpoint),
                Some(status.as_u16()),
                "endpoint did not accept the report",
            ));
        }

        log::info!("✅ Report for {} delivered ({})", report.url, status);
        Ok(())
    }
}
