#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
    #[default]
    Unknown,
}

impl HealthStatus {
    /// Anything the backend reports other than `healthy` counts as unhealthy.
    pub fn parse(text: &str) -> HealthStatus {
        if text == "healthy" {
            return HealthStatus::Healthy;
        }

        return HealthStatus::Unhealthy;
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub indexed_documents: Option<u64>,
}

impl HealthReport {
    pub fn unhealthy() -> HealthReport {
        return HealthReport {
            status: HealthStatus::Unhealthy,
            indexed_documents: None,
        };
    }
}
