use crate::error::ConfigError;
use crate::overrides::InputOverrides;
use core_types::{CampaignInputs, GrowthInputs};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub defaults: DefaultInputs,
    pub assistant: AssistantConfig,
    pub logging: LoggingConfig,
    pub server: ServerConfig,
}

/// The input record used when the user does not provide a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultInputs {
    pub visits: u64,
    pub sales: u64,
    pub ad_spend: f64,
    pub price: f64,
    pub fixed_costs: f64,
    pub variable_cost_per_unit: f64,
    /// Average purchases per customer, used for lifetime value.
    pub purchase_frequency: u32,
    pub projection_months: u32,
    /// Month-over-month growth, in percent.
    pub monthly_growth_pct: f64,
}

/// Settings for the hosted text-completion assistant.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    pub endpoint: String,
    /// Bearer token. Usually supplied through `KPI__ASSISTANT__TOKEN`.
    pub token: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// An `EnvFilter` directive such as `info` or `analytics=debug,info`.
    /// `RUST_LOG` takes precedence when set.
    pub level: String,
    /// When set, logs are also written to a daily-rolling file in this directory.
    pub directory: Option<PathBuf>,
    pub file_prefix: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.defaults
            .campaign()
            .validate()
            .map_err(|e| ConfigError::ValidationError(format!("[defaults] {}", e)))?;
        self.defaults
            .growth()
            .validate()
            .map_err(|e| ConfigError::ValidationError(format!("[defaults] {}", e)))?;

        if self.assistant.endpoint.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "[assistant] endpoint must not be empty".to_string(),
            ));
        }
        if self.assistant.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "[assistant] timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl DefaultInputs {
    pub fn campaign(&self) -> CampaignInputs {
        CampaignInputs {
            visits: self.visits,
            sales: self.sales,
            ad_spend: self.ad_spend,
            price: self.price,
            fixed_costs: self.fixed_costs,
            variable_cost_per_unit: self.variable_cost_per_unit,
        }
    }

    pub fn growth(&self) -> GrowthInputs {
        GrowthInputs {
            purchase_frequency: self.purchase_frequency,
            projection_months: self.projection_months,
            monthly_growth_pct: self.monthly_growth_pct,
        }
    }

    /// Returns a copy with every provided override applied.
    pub fn with_overrides(&self, overrides: &InputOverrides) -> Self {
        Self {
            visits: overrides.visits.unwrap_or(self.visits),
            sales: overrides.sales.unwrap_or(self.sales),
            ad_spend: overrides.ad_spend.unwrap_or(self.ad_spend),
            price: overrides.price.unwrap_or(self.price),
            fixed_costs: overrides.fixed_costs.unwrap_or(self.fixed_costs),
            variable_cost_per_unit: overrides
                .variable_cost_per_unit
                .unwrap_or(self.variable_cost_per_unit),
            purchase_frequency: overrides.purchase_frequency.unwrap_or(self.purchase_frequency),
            projection_months: overrides.projection_months.unwrap_or(self.projection_months),
            monthly_growth_pct: overrides.monthly_growth_pct.unwrap_or(self.monthly_growth_pct),
        }
    }
}

// --- Default Implementations ---
// These allow a user to omit any section, or the whole file, and still get the
// stock dashboard.

impl Default for DefaultInputs {
    fn default() -> Self {
        Self {
            visits: 10_000,
            sales: 100,
            ad_spend: 500.0,
            price: 50.0,
            fixed_costs: 1_000.0,
            variable_cost_per_unit: 10.0,
            purchase_frequency: 3,
            projection_months: 6,
            monthly_growth_pct: 10.0,
        }
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api-inference.huggingface.co/models/google/flan-t5-small".to_string(),
            token: String::new(),
            timeout_secs: 30,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
            file_prefix: "kpi-dashboard.log".to_string(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}
