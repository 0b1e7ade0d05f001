//! Parsing of geocoding response documents into [`Address`] values.

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::types::{Address, Bounds, Location, LocationType, Status, Viewport};

/// Parser for geocoding response bodies.
///
/// Interprets the top-level `status` field, then turns up to
/// `max_results` entries of the `results` array into [`Address`] values,
/// in response order. Fields absent from the response are left absent on
/// the address; fields that are present but of the wrong JSON type fail
/// the whole parse.
#[derive(Debug, Clone)]
pub struct ResponseParser {
    max_results: usize,
    parse_address_components: bool,
}

impl ResponseParser {
    /// Create a parser that returns at most `max_results` addresses.
    ///
    /// Address component parsing is disabled by default.
    pub fn new(max_results: usize) -> Self {
        Self {
            max_results,
            parse_address_components: false,
        }
    }

    /// Enable or disable parsing of the `address_components` arrays.
    ///
    /// When disabled, only `formatted_address` and the geometry fields are
    /// populated, regardless of what the response contains.
    pub fn with_address_components(mut self, enabled: bool) -> Self {
        self.parse_address_components = enabled;
        self
    }

    /// Parse a response body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedResponse`] if the body is not a JSON
    /// object with a string `status` field, or if a present field has an
    /// inconsistent shape (such as a `location` missing one of its two
    /// coordinates). Returns [`Error::Status`] for any status other than
    /// `OK` and `ZERO_RESULTS`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use geocoder_rs::parser::ResponseParser;
    ///
    /// let addresses = ResponseParser::new(5).parse(br#"{"status":"ZERO_RESULTS"}"#)?;
    /// assert!(addresses.is_empty());
    /// # Ok::<(), geocoder_rs::Error>(())
    /// ```
    pub fn parse(&self, data: &[u8]) -> Result<Vec<Address>> {
        let text = std::str::from_utf8(data)
            .map_err(|e| Error::malformed_response(format!("Response is not UTF-8: {e}")))?;
        let document: Value = serde_json::from_str(text)
            .map_err(|e| Error::malformed_response(format!("Invalid JSON: {e}")))?;
        let root = document
            .as_object()
            .ok_or_else(|| Error::malformed_response("Response root is not an object"))?;

        let status = match root.get("status") {
            Some(value) => Status::from_str(require_str(value, "status")?),
            None => return Err(Error::malformed_response("No \"status\" field")),
        };

        match status {
            Status::Ok => match root.get("results") {
                Some(results) => self.parse_results(require_array(results, "results")?),
                None => Ok(Vec::new()),
            },
            Status::ZeroResults => Ok(Vec::new()),
            status => Err(Error::Status {
                status,
                // A bad error_message never masks the status itself.
                error_message: root
                    .get("error_message")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            }),
        }
    }

    fn parse_results(&self, results: &[Value]) -> Result<Vec<Address>> {
        let count = results.len().min(self.max_results);
        let mut addresses = Vec::with_capacity(count);

        for result in &results[..count] {
            let result = require_object(result, "results entry")?;
            let mut address = Address::default();

            if let Some(value) = result.get("formatted_address") {
                address.formatted_address = Some(require_str(value, "formatted_address")?.to_string());
            }

            parse_geometry(result, &mut address)?;

            if self.parse_address_components {
                parse_address_components(result, &mut address)?;
            }

            addresses.push(address);
        }

        Ok(addresses)
    }
}

fn parse_geometry(result: &Map<String, Value>, address: &mut Address) -> Result<()> {
    let Some(geometry) = result.get("geometry") else {
        return Ok(());
    };
    let geometry = require_object(geometry, "geometry")?;

    if let Some(value) = geometry.get("location_type") {
        address.location_type = Some(LocationType::from_str(require_str(value, "location_type")?));
    }

    if let Some(value) = geometry.get("location") {
        address.location = Some(parse_location(require_object(value, "location")?)?);
    }

    if let Some(value) = geometry.get("viewport") {
        if let Some((southwest, northeast)) = parse_corners(require_object(value, "viewport")?)? {
            address.viewport = Some(Viewport {
                southwest,
                northeast,
            });
        }
    }

    if let Some(value) = geometry.get("bounds") {
        if let Some((southwest, northeast)) = parse_corners(require_object(value, "bounds")?)? {
            address.bounds = Some(Bounds {
                southwest,
                northeast,
            });
        }
    }

    Ok(())
}

/// A coordinate pair requires both fields; a lone `lat` or `lng` is an
/// inconsistent document, not a field to guess at.
fn parse_location(object: &Map<String, Value>) -> Result<Location> {
    Ok(Location::new(
        require_f64(object, "lat")?,
        require_f64(object, "lng")?,
    ))
}

/// A rectangle is only taken when both corners are present. A missing
/// corner skips the rectangle; a present corner missing a coordinate
/// fails the parse.
fn parse_corners(object: &Map<String, Value>) -> Result<Option<(Location, Location)>> {
    let (Some(southwest), Some(northeast)) = (object.get("southwest"), object.get("northeast"))
    else {
        return Ok(None);
    };
    let southwest = parse_location(require_object(southwest, "southwest")?)?;
    let northeast = parse_location(require_object(northeast, "northeast")?)?;
    Ok(Some((southwest, northeast)))
}

fn parse_address_components(result: &Map<String, Value>, address: &mut Address) -> Result<()> {
    let Some(components) = result.get("address_components") else {
        return Ok(());
    };

    for component in require_array(components, "address_components")? {
        let component = require_object(component, "address component")?;
        let Some(types) = component.get("types") else {
            continue;
        };
        let Some(value) = component_value(component)? else {
            continue;
        };

        for component_type in require_array(types, "types")? {
            let component_type = require_str(component_type, "types entry")?;

            // The country component carries the ISO country code as its
            // short name, alongside the display name.
            if component_type == "country" {
                if let Some(code) = component.get("short_name").and_then(Value::as_str) {
                    if !code.is_empty() {
                        address.country_code = Some(code.to_string());
                    }
                }
            }

            if let Some(slot) = component_slot(address, component_type) {
                *slot = Some(value.to_string());
            }
        }
    }

    Ok(())
}

/// Display value of a component: a non-empty `long_name`, then a
/// non-empty `short_name`, else nothing.
fn component_value(component: &Map<String, Value>) -> Result<Option<&str>> {
    let long_name = match component.get("long_name") {
        Some(value) => Some(require_str(value, "long_name")?),
        None => None,
    };
    let short_name = match component.get("short_name") {
        Some(value) => Some(require_str(value, "short_name")?),
        None => None,
    };
    Ok(long_name
        .filter(|value| !value.is_empty())
        .or_else(|| short_name.filter(|value| !value.is_empty())))
}

/// Static component type token to address field mapping.
///
/// Unknown tokens map to `None` and are ignored by the caller. Each token
/// assigns exactly one field; within one result, a later component with
/// the same token overwrites an earlier one.
fn component_slot<'a>(
    address: &'a mut Address,
    component_type: &str,
) -> Option<&'a mut Option<String>> {
    Some(match component_type {
        "street_address" => &mut address.street_address,
        "route" => &mut address.route,
        "intersection" => &mut address.intersection,
        "political" => &mut address.political,
        "country" => &mut address.country,
        "administrative_area_level_1" => &mut address.administrative_area_level_1,
        "administrative_area_level_2" => &mut address.administrative_area_level_2,
        "administrative_area_level_3" => &mut address.administrative_area_level_3,
        "administrative_area_level_4" => &mut address.administrative_area_level_4,
        "administrative_area_level_5" => &mut address.administrative_area_level_5,
        "colloquial_area" => &mut address.colloquial_area,
        "locality" => &mut address.locality,
        "ward" => &mut address.ward,
        "sublocality" => &mut address.sublocality,
        "sublocality_level_1" => &mut address.sublocality_level_1,
        "sublocality_level_2" => &mut address.sublocality_level_2,
        "sublocality_level_3" => &mut address.sublocality_level_3,
        "sublocality_level_4" => &mut address.sublocality_level_4,
        "sublocality_level_5" => &mut address.sublocality_level_5,
        "neighborhood" => &mut address.neighborhood,
        "premise" => &mut address.premise,
        "subpremise" => &mut address.subpremise,
        "postal_code" => &mut address.postal_code,
        "natural_feature" => &mut address.natural_feature,
        "airport" => &mut address.airport,
        "park" => &mut address.park,
        "point_of_interest" => &mut address.point_of_interest,
        "floor" => &mut address.floor,
        "establishment" => &mut address.establishment,
        "parking" => &mut address.parking,
        "post_box" => &mut address.post_box,
        "postal_town" => &mut address.postal_town,
        "room" => &mut address.room,
        "street_number" => &mut address.street_number,
        "bus_station" => &mut address.bus_station,
        "train_station" => &mut address.train_station,
        "transit_station" => &mut address.transit_station,
        _ => return None,
    })
}

fn require_object<'a>(value: &'a Value, field: &str) -> Result<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| Error::malformed_response(format!("\"{field}\" is not an object")))
}

fn require_array<'a>(value: &'a Value, field: &str) -> Result<&'a Vec<Value>> {
    value
        .as_array()
        .ok_or_else(|| Error::malformed_response(format!("\"{field}\" is not an array")))
}

fn require_str<'a>(value: &'a Value, field: &str) -> Result<&'a str> {
    value
        .as_str()
        .ok_or_else(|| Error::malformed_response(format!("\"{field}\" is not a string")))
}

fn require_f64(object: &Map<String, Value>, field: &str) -> Result<f64> {
    object
        .get(field)
        .and_then(Value::as_f64)
        .ok_or_else(|| Error::malformed_response(format!("\"{field}\" is missing or not a number")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    /// One result exercising every known component type token plus the
    /// full geometry payload.
    const ALL_COMPONENTS: &str = r#"{
        "status": "OK",
        "results": [{
            "formatted_address": "1600 Amphitheatre Pkwy, Mountain View, CA 94043, USA",
            "geometry": {
                "location": {"lat": 34.213171, "lng": -118.571022},
                "location_type": "APPROXIMATE",
                "viewport": {
                    "southwest": {"lat": 34.1947148, "lng": -118.6030368},
                    "northeast": {"lat": 34.2316232, "lng": -118.5390072}
                },
                "bounds": {
                    "southwest": {"lat": 34.179105, "lng": -118.58832},
                    "northeast": {"lat": 34.235309, "lng": -118.5534191}
                }
            },
            "address_components": [
                {"long_name": "street_number", "types": ["street_number"]},
                {"long_name": "street_address", "types": ["street_address"]},
                {"long_name": "route", "types": ["route"]},
                {"long_name": "intersection", "types": ["intersection"]},
                {"long_name": "political", "types": ["political"]},
                {"long_name": "country", "short_name": "US", "types": ["country"]},
                {"long_name": "colloquial_area", "types": ["colloquial_area"]},
                {"long_name": "locality", "types": ["locality"]},
                {"long_name": "ward", "types": ["ward"]},
                {"long_name": "administrative_area_level_1", "types": ["administrative_area_level_1"]},
                {"long_name": "administrative_area_level_2", "types": ["administrative_area_level_2"]},
                {"long_name": "administrative_area_level_3", "types": ["administrative_area_level_3"]},
                {"long_name": "administrative_area_level_4", "types": ["administrative_area_level_4"]},
                {"long_name": "administrative_area_level_5", "types": ["administrative_area_level_5"]},
                {"long_name": "sublocality", "types": ["sublocality"]},
                {"long_name": "sublocality_level_1", "types": ["sublocality_level_1"]},
                {"long_name": "sublocality_level_2", "types": ["sublocality_level_2"]},
                {"long_name": "sublocality_level_3", "types": ["sublocality_level_3"]},
                {"long_name": "sublocality_level_4", "types": ["sublocality_level_4"]},
                {"long_name": "sublocality_level_5", "types": ["sublocality_level_5"]},
                {"long_name": "neighborhood", "types": ["neighborhood"]},
                {"long_name": "premise", "types": ["premise"]},
                {"long_name": "subpremise", "types": ["subpremise"]},
                {"long_name": "postal_code", "types": ["postal_code"]},
                {"long_name": "natural_feature", "types": ["natural_feature"]},
                {"long_name": "airport", "types": ["airport"]},
                {"long_name": "park", "types": ["park"]},
                {"long_name": "point_of_interest", "types": ["point_of_interest"]},
                {"long_name": "floor", "types": ["floor"]},
                {"long_name": "establishment", "types": ["establishment"]},
                {"long_name": "parking", "types": ["parking"]},
                {"long_name": "post_box", "types": ["post_box"]},
                {"long_name": "postal_town", "types": ["postal_town"]},
                {"long_name": "room", "types": ["room"]},
                {"long_name": "bus_station", "types": ["bus_station"]},
                {"long_name": "train_station", "types": ["train_station"]},
                {"long_name": "transit_station", "types": ["transit_station"]}
            ]
        }]
    }"#;

    fn parse_with_components(data: &str) -> Result<Vec<Address>> {
        ResponseParser::new(20)
            .with_address_components(true)
            .parse(data.as_bytes())
    }

    #[test]
    fn test_empty_data() {
        let result = ResponseParser::new(20).parse(b"");
        assert_matches!(result, Err(Error::MalformedResponse { .. }));
    }

    #[test]
    fn test_empty_object() {
        let result = ResponseParser::new(20).parse(b"{}");
        assert_matches!(result, Err(Error::MalformedResponse { .. }));
    }

    #[test]
    fn test_non_object_root() {
        let result = ResponseParser::new(20).parse(b"[]");
        assert_matches!(result, Err(Error::MalformedResponse { .. }));
    }

    #[test]
    fn test_non_string_status() {
        let result = ResponseParser::new(20).parse(br#"{"status": 200}"#);
        assert_matches!(result, Err(Error::MalformedResponse { .. }));
    }

    #[test]
    fn test_ok_with_empty_results() {
        let addresses = parse_with_components(r#"{"status": "OK", "results": []}"#).unwrap();
        assert!(addresses.is_empty());
    }

    #[test]
    fn test_ok_without_results() {
        let addresses = parse_with_components(r#"{"status": "OK"}"#).unwrap();
        assert!(addresses.is_empty());
    }

    #[test]
    fn test_zero_results() {
        let addresses = parse_with_components(r#"{"status": "ZERO_RESULTS"}"#).unwrap();
        assert!(addresses.is_empty());
    }

    #[test]
    fn test_error_status_with_message() {
        let result = parse_with_components(
            r#"{"status": "REQUEST_DENIED", "error_message": "The provided API key is invalid."}"#,
        );
        assert_matches!(
            result,
            Err(Error::Status {
                status: Status::RequestDenied,
                error_message: Some(message),
            }) if message == "The provided API key is invalid."
        );
    }

    #[test]
    fn test_error_status_without_message() {
        let result = parse_with_components(r#"{"status": "OVER_QUERY_LIMIT"}"#);
        assert_matches!(
            result,
            Err(Error::Status {
                status: Status::OverQueryLimit,
                error_message: None,
            })
        );
    }

    #[test]
    fn test_unrecognized_status_maps_to_unknown_error() {
        let result = parse_with_components(r#"{"status": "SOMETHING_NEW"}"#);
        assert_matches!(
            result,
            Err(Error::Status {
                status: Status::UnknownError,
                ..
            })
        );
    }

    #[test]
    fn test_all_components() {
        let addresses = parse_with_components(ALL_COMPONENTS).unwrap();
        assert_eq!(addresses.len(), 1);
        let address = &addresses[0];

        assert_eq!(
            address.formatted_address.as_deref(),
            Some("1600 Amphitheatre Pkwy, Mountain View, CA 94043, USA")
        );
        assert_eq!(address.location_type, Some(LocationType::Approximate));

        let location = address.location.unwrap();
        assert_eq!(location.latitude, 34.213171);
        assert_eq!(location.longitude, -118.571022);

        let viewport = address.viewport.unwrap();
        assert_eq!(viewport.southwest.latitude, 34.1947148);
        assert_eq!(viewport.southwest.longitude, -118.6030368);
        assert_eq!(viewport.northeast.latitude, 34.2316232);
        assert_eq!(viewport.northeast.longitude, -118.5390072);

        let bounds = address.bounds.unwrap();
        assert_eq!(bounds.southwest.latitude, 34.179105);
        assert_eq!(bounds.southwest.longitude, -118.58832);
        assert_eq!(bounds.northeast.latitude, 34.235309);
        assert_eq!(bounds.northeast.longitude, -118.5534191);

        assert_eq!(address.street_address.as_deref(), Some("street_address"));
        assert_eq!(address.street_number.as_deref(), Some("street_number"));
        assert_eq!(address.route.as_deref(), Some("route"));
        assert_eq!(address.intersection.as_deref(), Some("intersection"));
        assert_eq!(address.political.as_deref(), Some("political"));
        assert_eq!(address.country.as_deref(), Some("country"));
        assert_eq!(address.country_code.as_deref(), Some("US"));
        assert_eq!(
            address.administrative_area_level_1.as_deref(),
            Some("administrative_area_level_1")
        );
        assert_eq!(
            address.administrative_area_level_2.as_deref(),
            Some("administrative_area_level_2")
        );
        assert_eq!(
            address.administrative_area_level_3.as_deref(),
            Some("administrative_area_level_3")
        );
        assert_eq!(
            address.administrative_area_level_4.as_deref(),
            Some("administrative_area_level_4")
        );
        assert_eq!(
            address.administrative_area_level_5.as_deref(),
            Some("administrative_area_level_5")
        );
        assert_eq!(address.colloquial_area.as_deref(), Some("colloquial_area"));
        assert_eq!(address.locality.as_deref(), Some("locality"));
        assert_eq!(address.ward.as_deref(), Some("ward"));
        assert_eq!(address.sublocality.as_deref(), Some("sublocality"));
        assert_eq!(
            address.sublocality_level_1.as_deref(),
            Some("sublocality_level_1")
        );
        assert_eq!(
            address.sublocality_level_2.as_deref(),
            Some("sublocality_level_2")
        );
        assert_eq!(
            address.sublocality_level_3.as_deref(),
            Some("sublocality_level_3")
        );
        assert_eq!(
            address.sublocality_level_4.as_deref(),
            Some("sublocality_level_4")
        );
        assert_eq!(
            address.sublocality_level_5.as_deref(),
            Some("sublocality_level_5")
        );
        assert_eq!(address.neighborhood.as_deref(), Some("neighborhood"));
        assert_eq!(address.premise.as_deref(), Some("premise"));
        assert_eq!(address.subpremise.as_deref(), Some("subpremise"));
        assert_eq!(address.postal_code.as_deref(), Some("postal_code"));
        assert_eq!(address.natural_feature.as_deref(), Some("natural_feature"));
        assert_eq!(address.airport.as_deref(), Some("airport"));
        assert_eq!(address.park.as_deref(), Some("park"));
        assert_eq!(
            address.point_of_interest.as_deref(),
            Some("point_of_interest")
        );
        assert_eq!(address.floor.as_deref(), Some("floor"));
        assert_eq!(address.establishment.as_deref(), Some("establishment"));
        assert_eq!(address.parking.as_deref(), Some("parking"));
        assert_eq!(address.post_box.as_deref(), Some("post_box"));
        assert_eq!(address.postal_town.as_deref(), Some("postal_town"));
        assert_eq!(address.room.as_deref(), Some("room"));
        assert_eq!(address.bus_station.as_deref(), Some("bus_station"));
        assert_eq!(address.train_station.as_deref(), Some("train_station"));
        assert_eq!(address.transit_station.as_deref(), Some("transit_station"));
    }

    #[test]
    fn test_max_results_truncates_in_order() {
        let data = r#"{"status": "OK", "results": [
            {"formatted_address": "first"},
            {"formatted_address": "second"},
            {"formatted_address": "third"},
            {"formatted_address": "fourth"},
            {"formatted_address": "fifth"}
        ]}"#;
        let addresses = ResponseParser::new(2).parse(data.as_bytes()).unwrap();
        assert_eq!(addresses.len(), 2);
        assert_eq!(addresses[0].formatted_address.as_deref(), Some("first"));
        assert_eq!(addresses[1].formatted_address.as_deref(), Some("second"));
    }

    #[test]
    fn test_max_results_zero() {
        let data = r#"{"status": "OK", "results": [{"formatted_address": "first"}]}"#;
        let addresses = ResponseParser::new(0).parse(data.as_bytes()).unwrap();
        assert!(addresses.is_empty());
    }

    #[test]
    fn test_components_disabled_keeps_geometry() {
        let addresses = ResponseParser::new(20).parse(ALL_COMPONENTS.as_bytes()).unwrap();
        assert_eq!(addresses.len(), 1);
        let address = &addresses[0];

        assert!(address.formatted_address.is_some());
        assert!(address.location.is_some());
        assert!(address.viewport.is_some());
        assert!(address.bounds.is_some());
        assert!(address.location_type.is_some());

        assert_eq!(address.locality, None);
        assert_eq!(address.country, None);
        assert_eq!(address.country_code, None);
        assert_eq!(address.street_number, None);
    }

    #[test]
    fn test_partial_location_is_malformed() {
        let data = r#"{"status": "OK", "results": [
            {"geometry": {"location": {"lat": 34.213171}}}
        ]}"#;
        let result = ResponseParser::new(20).parse(data.as_bytes());
        assert_matches!(result, Err(Error::MalformedResponse { .. }));
    }

    #[test]
    fn test_partial_viewport_corner_is_malformed() {
        let data = r#"{"status": "OK", "results": [
            {"geometry": {"viewport": {
                "southwest": {"lat": 1.0, "lng": 2.0},
                "northeast": {"lat": 3.0}
            }}}
        ]}"#;
        let result = ResponseParser::new(20).parse(data.as_bytes());
        assert_matches!(result, Err(Error::MalformedResponse { .. }));
    }

    #[test]
    fn test_viewport_missing_corner_is_skipped() {
        let data = r#"{"status": "OK", "results": [
            {"geometry": {"viewport": {"southwest": {"lat": 1.0, "lng": 2.0}}}}
        ]}"#;
        let addresses = ResponseParser::new(20).parse(data.as_bytes()).unwrap();
        assert_eq!(addresses.len(), 1);
        assert_eq!(addresses[0].viewport, None);
    }

    #[test]
    fn test_empty_geometry_result_is_valid() {
        let data = r#"{"status": "OK", "results": [{"geometry": {}}]}"#;
        let addresses = ResponseParser::new(20).parse(data.as_bytes()).unwrap();
        assert_eq!(addresses.len(), 1);
        assert!(addresses[0].is_empty());
    }

    #[test]
    fn test_neighborhood_does_not_set_premise() {
        let data = r#"{"status": "OK", "results": [
            {"address_components": [{"long_name": "Noe Valley", "types": ["neighborhood"]}]}
        ]}"#;
        let addresses = parse_with_components(data).unwrap();
        assert_eq!(addresses[0].neighborhood.as_deref(), Some("Noe Valley"));
        assert_eq!(addresses[0].premise, None);
    }

    #[test]
    fn test_component_value_falls_back_to_short_name() {
        let data = r#"{"status": "OK", "results": [
            {"address_components": [
                {"short_name": "CA", "types": ["administrative_area_level_1"]},
                {"long_name": "", "short_name": "US", "types": ["country"]}
            ]}
        ]}"#;
        let addresses = parse_with_components(data).unwrap();
        assert_eq!(
            addresses[0].administrative_area_level_1.as_deref(),
            Some("CA")
        );
        assert_eq!(addresses[0].country.as_deref(), Some("US"));
    }

    #[test]
    fn test_component_without_value_is_skipped() {
        let data = r#"{"status": "OK", "results": [
            {"address_components": [
                {"long_name": "", "short_name": "", "types": ["locality"]},
                {"types": ["route"]}
            ]}
        ]}"#;
        let addresses = parse_with_components(data).unwrap();
        assert_eq!(addresses[0].locality, None);
        assert_eq!(addresses[0].route, None);
    }

    #[test]
    fn test_component_without_types_is_skipped() {
        let data = r#"{"status": "OK", "results": [
            {"address_components": [{"long_name": "Mountain View"}]}
        ]}"#;
        let addresses = parse_with_components(data).unwrap();
        assert!(addresses[0].is_empty());
    }

    #[test]
    fn test_unknown_type_token_is_ignored() {
        let data = r#"{"status": "OK", "results": [
            {"address_components": [
                {"long_name": "Mountain View", "types": ["plus_code", "locality"]}
            ]}
        ]}"#;
        let addresses = parse_with_components(data).unwrap();
        assert_eq!(addresses[0].locality.as_deref(), Some("Mountain View"));
    }

    #[test]
    fn test_later_component_overwrites_earlier() {
        let data = r#"{"status": "OK", "results": [
            {"address_components": [
                {"long_name": "First", "types": ["locality"]},
                {"long_name": "Second", "types": ["locality"]}
            ]}
        ]}"#;
        let addresses = parse_with_components(data).unwrap();
        assert_eq!(addresses[0].locality.as_deref(), Some("Second"));
    }
}
