//! Wire shapes of host messages.
//!
//! Incoming messages are JSON objects with a `type` field plus the fields
//! listed per type below; field names are camelCase.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::core::DsforgeError;
use crate::models::TextStyleProperties;
use crate::query::DocumentData;

pub const GET_VARIABLES: &str = "get-variables";
pub const CREATE_DESIGN_SYSTEM: &str = "create-design-system";
pub const CREATE_CUSTOM_SPACING: &str = "create-custom-spacing";
pub const CREATE_CUSTOM_TYPOGRAPHY: &str = "create-custom-typography";
pub const CREATE_TEXT_STYLE: &str = "create-text-style";
pub const CREATE_TYPOGRAPHY_PRESET: &str = "create-typography-preset";
pub const CREATE_TYPOGRAPHY_SYSTEM: &str = "create-typography-system";
pub const CLOSE: &str = "close";

/// Outgoing: reply to `get-variables`.
pub const VARIABLES_UPDATE: &str = "variables-update";
/// Outgoing: sent after `create-design-system` finishes.
pub const DESIGN_SYSTEM_CREATED: &str = "design-system-created";

/// `create-custom-spacing`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomSpacing {
    pub path: String,
    pub base: f64,
    pub factor: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
}

/// `create-custom-typography`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomTypography {
    pub name: String,
    pub base_size: f64,
    pub factor: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
}

/// `create-text-style`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTextStyle {
    pub name: String,
    #[serde(default)]
    pub properties: TextStyleProperties,
}

/// `create-typography-preset`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyPreset {
    pub preset: String,
}

/// A document snapshot posted to the UI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentMessage {
    #[serde(rename = "type")]
    pub message_type: &'static str,
    #[serde(flatten)]
    pub data: DocumentData,
}

/// The `type` field of a message.
pub fn message_type(message: &serde_json::Value) -> Result<&str, DsforgeError> {
    message.get("type").and_then(serde_json::Value::as_str).ok_or_else(|| {
        DsforgeError::InvalidMessage {
            message_type: "<missing>".to_string(),
            reason: "message has no string 'type' field".to_string(),
        }
    })
}

/// Decode the payload of a `message_type` message.
pub fn decode<T: DeserializeOwned>(
    message_type: &str,
    message: &serde_json::Value,
) -> Result<T, DsforgeError> {
    T::deserialize(message).map_err(|e| DsforgeError::InvalidMessage {
        message_type: message_type.to_string(),
        reason: e.to_string(),
    })
}
