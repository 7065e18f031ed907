//! Data model shared between the state controller and the HTTP API.
//!
//! Everything here crosses the wire to the dashboard client, so the serde
//! attributes are part of the API contract: camelCase field names, lowercase
//! source status, capitalized alert severity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---

/// One synthesized snapshot of sensor metrics for a source.
///
/// Recreated wholesale on every refresh; individual fields are never patched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterData {
    // ---
    /// Total dissolved solids, ppm.
    pub tds: f32,
    /// Nephelometric turbidity units.
    pub turbidity: f32,
    /// Degrees Celsius.
    pub temperature: f32,
    pub estimated_ph: f32,
    /// Derived 0-100 summary, higher is better.
    pub health_score: f32,
    /// Wall-clock generation time, already rendered for display.
    pub timestamp: String,
}

/// A physical water point instrumented with a sensor device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceInfo {
    // ---
    pub id: String,
    pub name: String,
    pub device_id: String,
    pub location: String,
    pub usage_type: String,
    pub status: SourceStatus,
    /// 0-100.
    pub signal_strength: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceStatus {
    Online,
    Offline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

/// An alert raised against a source (or the whole system).
///
/// `source` is a display label, not a foreign key: alerts outlive the source
/// entries they mention.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    // ---
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub source: String,
    pub severity: Severity,
    pub timestamp: String,
}

/// Static metadata for the sensor hardware module, shown on the settings page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceConfig {
    // ---
    pub core_module: String,
    pub firmware_version: String,
    pub ip_address: String,
    pub uptime: String,
}

/// Display profile for the signed-in user. Editable from the settings page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    // ---
    pub name: String,
    pub email: String,
}
