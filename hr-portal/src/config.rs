//! Portal configuration

use std::str::FromStr;

/// Placeholder password the village dashboard sends when creating accounts
pub const VILLAGE_TEMP_PASSWORD: &str = "TempPassword123!";

/// Which admin front end the portal backs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardVariant {
    /// SME HR / user-management portal
    #[default]
    Sme,
    /// Village-management admin dashboard
    Village,
}

impl FromStr for DashboardVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sme" | "hr" => Ok(Self::Sme),
            "village" => Ok(Self::Village),
            other => Err(format!("unknown dashboard variant: {other}")),
        }
    }
}

/// Portal configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | DASHBOARD_VARIANT | sme | `sme` or `village` |
#[derive(Debug, Clone, Default)]
pub struct PortalConfig {
    pub variant: DashboardVariant,
}

impl PortalConfig {
    pub fn new(variant: DashboardVariant) -> Self {
        Self { variant }
    }

    pub fn from_env() -> Self {
        let variant = std::env::var("DASHBOARD_VARIANT")
            .ok()
            .and_then(|v| match v.parse() {
                Ok(variant) => Some(variant),
                Err(e) => {
                    tracing::warn!("{e}, falling back to sme");
                    None
                }
            })
            .unwrap_or_default();
        Self { variant }
    }

    /// Password injected into create payloads that carry none
    pub fn placeholder_password(&self) -> Option<&'static str> {
        match self.variant {
            DashboardVariant::Sme => None,
            DashboardVariant::Village => Some(VILLAGE_TEMP_PASSWORD),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_parse() {
        assert_eq!("Village".parse::<DashboardVariant>(), Ok(DashboardVariant::Village));
        assert_eq!(" sme ".parse::<DashboardVariant>(), Ok(DashboardVariant::Sme));
        assert!("kiosk".parse::<DashboardVariant>().is_err());
    }

    #[test]
    fn test_placeholder_password() {
        assert_eq!(PortalConfig::default().placeholder_password(), None);
        assert_eq!(
            PortalConfig::new(DashboardVariant::Village).placeholder_password(),
            Some("TempPassword123!")
        );
    }
}
