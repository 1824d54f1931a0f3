// @generated by voldelig from container `employee`. Do not edit.

use serde::{Deserialize, Serialize};

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Key field.
    #[serde(rename = "empnr")]
    pub Empnr: String,
    #[serde(rename = "name")]
    pub Name: String,
    #[serde(rename = "gender")]
    pub Gender: GenderType,
    #[serde(rename = "country")]
    pub Country: CountryType,
    #[serde(rename = "first_name")]
    pub FirstName: String,
    #[serde(rename = "createddate")]
    pub CreatedDate: chrono::DateTime<chrono::Utc>,
}

impl Employee {
    /// Raw name of the key field.
    pub const KEY_FIELD: &'static str = "empnr";

    /// Request body for the container's `instances` endpoint.
    pub fn instances_document() -> serde_json::Value {
        serde_json::json!({
            "panes": {
                "card": {
                    "fields": [
                        "empnr",
                        "name",
                        "gender",
                        "country",
                        "first_name",
                        "createddate"
                    ]
                }
            }
        })
    }

    /// Request body for the container's `filter` endpoint.
    ///
    /// `restriction` and `limit` are sent as given.
    pub fn filter_document(restriction: &str, limit: i32) -> serde_json::Value {
        serde_json::json!({
            "restriction": restriction,
            "fields": [
                "empnr",
                "name",
                "gender",
                "country",
                "first_name",
                "createddate"
            ],
            "limit": limit
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CountryType {
    #[default]
    CountryNotHere,
    Denmark,
    Uk,
    Sweden,
    Norway,
    Finland,
}

// Unknown values and null read as the default variant.
impl<'de> Deserialize<'de> for CountryType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(match value.as_deref() {
            Some("COUNTRY_NOT_HERE") => CountryType::CountryNotHere,
            Some("DENMARK") => CountryType::Denmark,
            Some("UK") => CountryType::Uk,
            Some("SWEDEN") => CountryType::Sweden,
            Some("NORWAY") => CountryType::Norway,
            Some("FINLAND") => CountryType::Finland,
            _ => CountryType::default(),
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GenderType {
    #[default]
    GenderNotHere,
    Male,
    Female,
    Nil,
}

// Unknown values and null read as the default variant.
impl<'de> Deserialize<'de> for GenderType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(match value.as_deref() {
            Some("GENDER_NOT_HERE") => GenderType::GenderNotHere,
            Some("MALE") => GenderType::Male,
            Some("FEMALE") => GenderType::Female,
            Some("NIL") => GenderType::Nil,
            _ => GenderType::default(),
        })
    }
}
