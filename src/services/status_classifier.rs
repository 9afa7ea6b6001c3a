use once_cell::sync::Lazy;
use crate::config::constants::LCP_METRIC;
use crate::enums::status::Status;
use crate::helpers::config_helper::ConfigHelper;
use crate::structs::config::config::Config;
use crate::structs::threshold_rule::ThresholdRule;

static DEFAULT_LCP_CLASSIFIER: Lazy<StatusClassifier> =
    Lazy::new(|| StatusClassifier::new(LCP_METRIC, &ConfigHelper::default_thresholds()));

/// Maps a measured duration onto a display status using an ordered band table.
///
/// Bands are inclusive on their upper bound. Anything above the last band,
/// including input without a numeric prefix (parsed as NaN), lands on
/// `Status::Critical`. Bands labelled `info` are not classifier outcomes and
/// are skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusClassifier {
    rules: Vec<ThresholdRule>,
    fallback: Status,
}

impl StatusClassifier {
    pub fn new(metric: &str, rules: &[ThresholdRule]) -> Self {
        let mut rules: Vec<ThresholdRule> = rules
            .iter()
            .filter(|rule| rule.metric == metric && rule.label.is_classifier_outcome())
            .cloned()
            .collect();
        rules.sort_by(|a, b| a.upper_bound.total_cmp(&b.upper_bound));

        Self {
            rules,
            fallback: Status::Critical,
        }
    }

    /// Load-speed classifier built from the configured `[[thresholds]]` table.
    pub fn from_config(config: &Config) -> Self {
        Self::new(LCP_METRIC, &config.thresholds)
    }

    /// Classifier with the stock Core Web Vitals LCP bands.
    pub fn lcp() -> &'static StatusClassifier {
        &DEFAULT_LCP_CLASSIFIER
    }

    pub fn rules(&self) -> &[ThresholdRule] {
        &self.rules
    }

    /// Upper bound of the `success` band, if the table has one.
    pub fn success_upper_bound(&self) -> Option<f64> {
        self.rules
            .iter()
            .filter(|rule| rule.label == Status::Success)
            .map(|rule| rule.upper_bound)
            .last()
    }

    pub fn classify(&self, duration: &str) -> Status {
        self.classify_value(parse_duration(duration))
    }

    pub fn classify_value(&self, value: f64) -> Status {
        self.rules
            .iter()
            .find(|rule| rule.matches(value))
            .map(|rule| rule.label)
            .unwrap_or(self.fallback)
    }
}

/// Classifies with the default LCP bands.
pub fn classify(duration: &str) -> Status {
    StatusClassifier::lcp().classify(duration)
}

/// Reads the longest numeric prefix of `input`, ignoring leading whitespace
/// and any trailing unit. Returns NaN when there is no numeric prefix.
pub fn parse_duration(input: &str) -> f64 {
    let trimmed = input.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts when at least one digit follows it.
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    trimmed[..end].parse::<f64>().unwrap_or(f64::NAN)
}
