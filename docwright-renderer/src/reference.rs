//! Configuration reference tables for the configuration page.
//!
//! Each documented property resolves against the project config; absent
//! optional properties fall back to the documented default, absent required
//! properties fail the render.

use serde::Serialize;
use serde_yaml::Value as YamlValue;

use docwright_core::ProjectConfig;

use crate::error::RenderError;

/// A documented config property.
#[derive(Debug, Clone, Copy)]
pub struct ConfigProperty {
    pub section: &'static str,
    pub key: &'static str,
    /// `None` marks the property as required.
    pub default: Option<&'static str>,
    pub description: &'static str,
}

pub const REFERENCE: &[ConfigProperty] = &[
    ConfigProperty {
        section: "Application Settings",
        key: "app.port",
        default: Some("${APP_PORT:8761}"),
        description: "Port on which the application will run. Can be overridden by the `APP_PORT` environment variable.",
    },
    ConfigProperty {
        section: "Application Settings",
        key: "app.logging",
        default: Some("debug"),
        description: "Default logging level for the application.",
    },
    ConfigProperty {
        section: "Server Configuration",
        key: "server.port",
        default: Some("${app.port}"),
        description: "Inherits the port from the `app.port` property.",
    },
    ConfigProperty {
        section: "Spring Application",
        key: "spring.application.name",
        default: None,
        description: "Name of the Spring application.",
    },
    ConfigProperty {
        section: "Eureka Configuration",
        key: "eureka.instance.hostname",
        default: Some("localhost"),
        description: "The hostname of the Eureka server instance.",
    },
    ConfigProperty {
        section: "Eureka Configuration",
        key: "eureka.client.register-with-eureka",
        default: Some("false"),
        description: "This instance should not register itself with another Eureka server.",
    },
    ConfigProperty {
        section: "Eureka Configuration",
        key: "eureka.client.fetch-registry",
        default: Some("false"),
        description: "This instance should not fetch the registry from another Eureka server.",
    },
    ConfigProperty {
        section: "Eureka Configuration",
        key: "eureka.client.server-url.defaultZone",
        default: Some("http://${eureka.instance.hostname}:${server.port}/eureka/"),
        description: "The URL for other services to connect to this Eureka server.",
    },
    ConfigProperty {
        section: "Logging",
        key: "logging.level.eterea.eureka.service",
        default: Some("${app.logging}"),
        description: "Logging level for the main application package.",
    },
    ConfigProperty {
        section: "Logging",
        key: "logging.level.web",
        default: Some("${app.logging}"),
        description: "Logging level for web-related components.",
    },
    ConfigProperty {
        section: "Logging",
        key: "logging.level.org.springframework.cloud.config",
        default: Some("${app.logging}"),
        description: "Logging level for Spring Cloud Config client.",
    },
    ConfigProperty {
        section: "Management Endpoints",
        key: "management.endpoints.web.exposure.include",
        default: Some("*"),
        description: "Exposes all Actuator endpoints over HTTP.",
    },
    ConfigProperty {
        section: "Management Endpoints",
        key: "management.endpoint.health.show-details",
        default: Some("always"),
        description: "Always shows full details in the `/actuator/health` endpoint.",
    },
];

/// One rendered table.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ConfigSection {
    pub heading: String,
    pub rows: Vec<ConfigRow>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ConfigRow {
    pub key: String,
    pub value: String,
    pub description: String,
    /// The value came from the documented default, not the config file.
    pub defaulted: bool,
}

/// Resolve [`REFERENCE`] against `config`, grouping rows by section in
/// declaration order.
pub fn build_reference(config: &ProjectConfig) -> Result<Vec<ConfigSection>, RenderError> {
    let mut sections: Vec<ConfigSection> = Vec::new();
    for prop in REFERENCE {
        let found = config.lookup(prop.key).filter(|v| !v.is_null());
        let (value, defaulted) = match (found, prop.default) {
            (Some(v), _) => (display_value(v), false),
            (None, Some(default)) => (default.to_string(), true),
            (None, None) => {
                return Err(RenderError::MissingConfigKey {
                    key: prop.key.to_string(),
                })
            }
        };

        let row = ConfigRow {
            key: prop.key.to_string(),
            value,
            description: prop.description.to_string(),
            defaulted,
        };
        match sections.iter_mut().find(|s| s.heading == prop.section) {
            Some(section) => section.rows.push(row),
            None => sections.push(ConfigSection {
                heading: prop.section.to_string(),
                rows: vec![row],
            }),
        }
    }
    Ok(sections)
}

fn display_value(value: &YamlValue) -> String {
    match value {
        YamlValue::String(s) => s.clone(),
        YamlValue::Bool(b) => b.to_string(),
        YamlValue::Number(n) => n.to_string(),
        YamlValue::Null => String::new(),
        other => serde_json::to_string(&ProjectConfig(other.clone()).to_json())
            .unwrap_or_default(),
    }
}
