//! Initial in-memory state for a fresh session.
//!
//! Applied once on startup from `main.rs`. The session is reseeded on every
//! launch; nothing persists across restarts.

use uuid::Uuid;

use crate::{Alert, DeviceConfig, Profile, Severity, SourceInfo, SourceStatus};

// ---

/// The two instrumented sources the demo installation ships with.
pub fn initial_sources() -> Vec<SourceInfo> {
    // ---
    vec![
        SourceInfo {
            id: "overhead-tank".to_string(),
            name: "Overhead Tank".to_string(),
            device_id: "AQ-OHT-001".to_string(),
            location: "Building A, Terrace".to_string(),
            usage_type: "Smart Home / General Use".to_string(),
            status: SourceStatus::Online,
            signal_strength: 85,
        },
        SourceInfo {
            id: "borewell".to_string(),
            name: "Borewell".to_string(),
            device_id: "AQ-BW-002".to_string(),
            location: "Campus Ground, East".to_string(),
            usage_type: "Hostel / Auxiliary Tank".to_string(),
            status: SourceStatus::Online,
            signal_strength: 72,
        },
    ]
}

/// Alerts pending at session start. Runtime alert production belongs to the
/// (not yet integrated) alerting pipeline; until then the session starts
/// with this set and only ever shrinks it.
pub fn initial_alerts() -> Vec<Alert> {
    // ---
    vec![
        Alert {
            id: Uuid::new_v4(),
            title: "Critical TDS Spike".to_string(),
            description: "TDS reached 1240 ppm at Borewell source. Immediate attention required."
                .to_string(),
            source: "Borewell".to_string(),
            severity: Severity::Critical,
            timestamp: "2 mins ago".to_string(),
        },
        Alert {
            id: Uuid::new_v4(),
            title: "High Turbidity Warning".to_string(),
            description: "Water clarity decreased. Filter check recommended.".to_string(),
            source: "Overhead Tank".to_string(),
            severity: Severity::Warning,
            timestamp: "1 hour ago".to_string(),
        },
        Alert {
            id: Uuid::new_v4(),
            title: "System Maintenance".to_string(),
            description: "Scheduled sensor cleaning in 24 hours.".to_string(),
            source: "All".to_string(),
            severity: Severity::Info,
            timestamp: "4 hours ago".to_string(),
        },
        Alert {
            id: Uuid::new_v4(),
            title: "Connection Restored".to_string(),
            description: "ESP32 module reconnected to local Wi-Fi.".to_string(),
            source: "Borewell".to_string(),
            severity: Severity::Info,
            timestamp: "Yesterday".to_string(),
        },
    ]
}

/// Static hardware metadata shown on the settings page.
pub fn device_info() -> DeviceConfig {
    // ---
    DeviceConfig {
        core_module: "ESP32-WROOM-32D".to_string(),
        firmware_version: "v2.4.1-stable".to_string(),
        ip_address: "192.168.1.142".to_string(),
        uptime: "14d 06h 22m".to_string(),
    }
}

pub fn initial_profile() -> Profile {
    // ---
    Profile {
        name: "Rohan Sharma".to_string(),
        email: "rohan.s@aquasense.io".to_string(),
    }
}
