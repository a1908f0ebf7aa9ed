//! Core data types for address lookups.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::house_number;
use crate::postcode;

/// A normalized, validated lookup request.
///
/// Construction performs all local validation, so an instance witnesses
/// that its components are safe to use as request path segments. No
/// request reaches the network without passing through here first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    postcode: String,
    house_number: String,
    house_number_addition: String,
    strict_addition_validation: bool,
}

impl LookupRequest {
    /// Normalize and validate raw caller input.
    ///
    /// The postcode is stripped of surrounding whitespace and internal
    /// spaces; the house number and addition are trimmed. When the
    /// addition is empty it is derived by splitting the house number, and
    /// both fields are replaced by the split result.
    ///
    /// # Errors
    /// Returns [`Error::InputInvalid`] when the postcode does not match
    /// the four-digits-two-letters format, or when the house number is
    /// not purely numeric after splitting.
    pub fn new(
        postcode: &str,
        house_number: &str,
        house_number_addition: &str,
        strict_addition_validation: bool,
    ) -> Result<Self> {
        let postcode = postcode::normalize(postcode);
        let mut house_number = house_number.trim().to_string();
        let mut house_number_addition = house_number_addition.trim().to_string();

        if house_number_addition.is_empty() {
            let (number, addition) = house_number::split(&house_number);
            house_number = number;
            house_number_addition = addition;
        }

        if !postcode::is_valid_format(&postcode) {
            return Err(Error::InputInvalid(format!(
                "Invalid postcode format: '{postcode}'. Expected four digits followed by two letters (e.g. 2012ES)"
            )));
        }

        if !house_number::is_all_digits(&house_number) {
            return Err(Error::InputInvalid(format!(
                "Invalid house number: '{house_number}'. Expected only digits"
            )));
        }

        Ok(Self {
            postcode,
            house_number,
            house_number_addition,
            strict_addition_validation,
        })
    }

    /// Normalized postcode, e.g. "2012ES".
    #[must_use]
    pub fn postcode(&self) -> &str {
        &self.postcode
    }

    /// Numeric house-number part.
    #[must_use]
    pub fn house_number(&self) -> &str {
        &self.house_number
    }

    /// House-number addition; empty when there is none.
    #[must_use]
    pub fn house_number_addition(&self) -> &str {
        &self.house_number_addition
    }

    /// Whether the response addition must match exactly.
    #[must_use]
    pub fn strict_addition_validation(&self) -> bool {
        self.strict_addition_validation
    }
}

/// A resolved address as returned by the service.
///
/// A plain value: produced once from a successful response, never
/// mutated by this crate afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressRecord {
    /// Street name in BAG spelling.
    pub street: String,

    /// Numeric house number.
    pub house_number: i32,

    /// The matched addition, or `None` when the requested addition is not
    /// known for this house number.
    #[serde(default)]
    pub house_number_addition: Option<String>,

    /// Postcode in "1234AB" form.
    pub postcode: String,

    pub city: String,

    pub municipality: String,

    pub province: String,

    /// Rijksdriehoek X coordinate; absent for addresses without a
    /// physical location, such as PO boxes.
    #[serde(default)]
    pub rd_x: Option<i32>,

    /// Rijksdriehoek Y coordinate.
    #[serde(default)]
    pub rd_y: Option<i32>,

    #[serde(default)]
    pub latitude: Option<f64>,

    #[serde(default)]
    pub longitude: Option<f64>,

    /// BAG "nummeraanduiding" identifier.
    pub bag_number_designation_id: String,

    /// BAG "verblijfsobject" identifier.
    pub bag_addressable_object_id: String,

    /// Address type: "building", "house boat site" or "mobile home site".
    pub address_type: String,

    /// Usage purposes of the addressable object.
    #[serde(default)]
    pub purposes: Vec<String>,

    /// Surface area in square meters.
    #[serde(default)]
    pub surface_area: Option<i32>,

    /// All additions known for this postcode and house number. Defaults
    /// to empty when the service omits the list.
    #[serde(default)]
    pub house_number_additions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_request_normalizes_postcode() {
        let request = LookupRequest::new(" 1234 AB ", "1", "", false).unwrap();
        assert_eq!(request.postcode(), "1234AB");
        assert_eq!(request.house_number(), "1");
        assert_eq!(request.house_number_addition(), "");
    }

    #[test]
    fn test_request_derives_addition_by_splitting() {
        let request = LookupRequest::new("1234AB", "30a", "", false).unwrap();
        assert_eq!(request.house_number(), "30");
        assert_eq!(request.house_number_addition(), "a");
    }

    #[test]
    fn test_request_keeps_explicit_addition() {
        // An explicit addition suppresses splitting entirely.
        let request = LookupRequest::new("1234AB", "30", "rood", false).unwrap();
        assert_eq!(request.house_number(), "30");
        assert_eq!(request.house_number_addition(), "rood");
    }

    #[test]
    fn test_request_rejects_bad_postcode() {
        let err = LookupRequest::new("123AB", "1", "", false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputInvalid);
        assert!(err.to_string().contains("123AB"));
    }

    #[test]
    fn test_request_rejects_non_numeric_house_number() {
        let err = LookupRequest::new("1234AB", "abc", "", false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputInvalid);
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn test_request_rejects_unsplittable_house_number_with_explicit_addition() {
        // With an explicit addition the house number is not split, so a
        // compound value must be rejected by the digits check.
        let err = LookupRequest::new("1234AB", "30a", "b", false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputInvalid);
    }

    #[test]
    fn test_address_record_decodes_camel_case() {
        let record: AddressRecord = serde_json::from_str(
            r#"{
                "street": "Julianastraat",
                "houseNumber": 30,
                "houseNumberAddition": "",
                "postcode": "2012ES",
                "city": "Haarlem",
                "municipality": "Haarlem",
                "province": "Noord-Holland",
                "rdX": 103242,
                "rdY": 487716,
                "latitude": 52.374108,
                "longitude": 4.61531,
                "bagNumberDesignationId": "0392200000029650",
                "bagAddressableObjectId": "0392010000029650",
                "addressType": "building",
                "purposes": ["assembly"],
                "surfaceArea": 64,
                "houseNumberAdditions": [""]
            }"#,
        )
        .unwrap();

        assert_eq!(record.street, "Julianastraat");
        assert_eq!(record.house_number, 30);
        assert_eq!(record.house_number_addition.as_deref(), Some(""));
        assert_eq!(record.rd_x, Some(103242));
        assert_eq!(record.purposes, vec!["assembly".to_string()]);
    }

    #[test]
    fn test_address_record_null_addition_and_missing_additions_list() {
        let record: AddressRecord = serde_json::from_str(
            r#"{
                "street": "Julianastraat",
                "houseNumber": 30,
                "houseNumberAddition": null,
                "postcode": "2012ES",
                "city": "Haarlem",
                "municipality": "Haarlem",
                "province": "Noord-Holland",
                "rdX": null,
                "rdY": null,
                "latitude": null,
                "longitude": null,
                "bagNumberDesignationId": "0392200000029650",
                "bagAddressableObjectId": "0392010000029650",
                "addressType": "building",
                "purposes": [],
                "surfaceArea": null
            }"#,
        )
        .unwrap();

        assert_eq!(record.house_number_addition, None);
        assert_eq!(record.rd_x, None);
        assert!(record.house_number_additions.is_empty());
    }
}
