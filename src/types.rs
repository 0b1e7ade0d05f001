//! Common types for geocoder-rs: the address model and service enums.

use std::fmt;

/// Response status codes of the geocoding service.
///
/// <https://developers.google.com/maps/documentation/geocoding/intro#StatusCodes>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// No errors occurred and at least one geocode was returned.
    Ok,
    /// The geocode was successful but returned no results.
    ZeroResults,
    /// The request is over quota.
    OverQueryLimit,
    /// The request was denied.
    RequestDenied,
    /// The query (address, components or latlng) is missing or invalid.
    InvalidRequest,
    /// The request could not be processed due to a server error.
    UnknownError,
}

impl Status {
    /// Map a status string from the wire to a `Status`.
    ///
    /// Missing, empty, or unrecognized text maps to [`Status::UnknownError`]
    /// rather than failing.
    pub fn from_str(status: &str) -> Self {
        match status {
            "OK" => Status::Ok,
            "ZERO_RESULTS" => Status::ZeroResults,
            "OVER_QUERY_LIMIT" => Status::OverQueryLimit,
            "REQUEST_DENIED" => Status::RequestDenied,
            "INVALID_REQUEST" => Status::InvalidRequest,
            _ => Status::UnknownError,
        }
    }

    /// The wire spelling of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::ZeroResults => "ZERO_RESULTS",
            Status::OverQueryLimit => "OVER_QUERY_LIMIT",
            Status::RequestDenied => "REQUEST_DENIED",
            Status::InvalidRequest => "INVALID_REQUEST",
            Status::UnknownError => "UNKNOWN_ERROR",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Additional data about the kind of geocoded location.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LocationType {
    /// A precise geocode with location accuracy down to street address.
    Rooftop,
    /// An approximation interpolated between two precise points.
    RangeInterpolated,
    /// The geometric center of a result such as a polyline or polygon.
    GeometricCenter,
    /// An approximate location.
    Approximate,
    /// A location type this crate does not know about, passed through as-is.
    Other(String),
}

impl LocationType {
    /// Parse from the `location_type` string of a geometry object.
    pub fn from_str(location_type: &str) -> Self {
        match location_type {
            "ROOFTOP" => LocationType::Rooftop,
            "RANGE_INTERPOLATED" => LocationType::RangeInterpolated,
            "GEOMETRIC_CENTER" => LocationType::GeometricCenter,
            "APPROXIMATE" => LocationType::Approximate,
            _ => LocationType::Other(location_type.to_string()),
        }
    }

    /// The wire spelling of this location type.
    pub fn as_str(&self) -> &str {
        match self {
            LocationType::Rooftop => "ROOFTOP",
            LocationType::RangeInterpolated => "RANGE_INTERPOLATED",
            LocationType::GeometricCenter => "GEOMETRIC_CENTER",
            LocationType::Approximate => "APPROXIMATE",
            LocationType::Other(value) => value,
        }
    }
}

impl fmt::Display for LocationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl Location {
    /// Create a new location.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// The recommended display frame for a result.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    /// Southwest corner
    pub southwest: Location,
    /// Northeast corner
    pub northeast: Location,
}

/// The lat/lng rectangle that fully contains a result.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    /// Southwest corner
    pub southwest: Location,
    /// Northeast corner
    pub northeast: Location,
}

/// One geocoding result.
///
/// Every field is optional: the service omits anything it does not know,
/// and an `Address` with no populated fields is valid. Component fields
/// (everything except `formatted_address` and the geometry) are only
/// populated when address component parsing is enabled for the request.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Address {
    /// Human-readable address of this location
    pub formatted_address: Option<String>,

    /// A precise street address
    pub street_address: Option<String>,
    /// A named route (such as "US 101")
    pub route: Option<String>,
    /// A major intersection, usually of two major roads
    pub intersection: Option<String>,
    /// A political entity, usually some civil administration area
    pub political: Option<String>,
    /// The national political entity, typically the highest order type
    pub country: Option<String>,
    /// ISO 3166-1 code of the country, from the country component's short name
    pub country_code: Option<String>,
    /// A first-order civil entity below the country level
    pub administrative_area_level_1: Option<String>,
    /// A second-order civil entity below the country level
    pub administrative_area_level_2: Option<String>,
    /// A third-order civil entity below the country level
    pub administrative_area_level_3: Option<String>,
    /// A fourth-order civil entity below the country level
    pub administrative_area_level_4: Option<String>,
    /// A fifth-order civil entity below the country level
    pub administrative_area_level_5: Option<String>,
    /// A commonly-used alternative name for the entity
    pub colloquial_area: Option<String>,
    /// An incorporated city or town political entity
    pub locality: Option<String>,
    /// A specific type of Japanese locality
    pub ward: Option<String>,
    /// A first-order civil entity below a locality
    pub sublocality: Option<String>,
    /// First sublocality level, the largest
    pub sublocality_level_1: Option<String>,
    /// Second sublocality level
    pub sublocality_level_2: Option<String>,
    /// Third sublocality level
    pub sublocality_level_3: Option<String>,
    /// Fourth sublocality level
    pub sublocality_level_4: Option<String>,
    /// Fifth sublocality level, the smallest
    pub sublocality_level_5: Option<String>,
    /// A named neighborhood
    pub neighborhood: Option<String>,
    /// A named location, usually a building or collection of buildings
    pub premise: Option<String>,
    /// An entity below premise, such as an apartment or unit
    pub subpremise: Option<String>,
    /// A postal code as used to address mail within the country
    pub postal_code: Option<String>,
    /// A prominent natural feature
    pub natural_feature: Option<String>,
    /// An airport
    pub airport: Option<String>,
    /// A named park
    pub park: Option<String>,
    /// A named point of interest
    pub point_of_interest: Option<String>,
    /// The floor of a building address
    pub floor: Option<String>,
    /// A place that has not yet been categorized
    pub establishment: Option<String>,
    /// A parking lot or parking structure
    pub parking: Option<String>,
    /// A specific postal box
    pub post_box: Option<String>,
    /// A grouping of geographic areas used for mailing addresses
    pub postal_town: Option<String>,
    /// The room of a building address
    pub room: Option<String>,
    /// The precise street number
    pub street_number: Option<String>,
    /// A bus stop
    pub bus_station: Option<String>,
    /// A train station
    pub train_station: Option<String>,
    /// A public transit station
    pub transit_station: Option<String>,

    /// Geocoded coordinate of this result
    pub location: Option<Location>,
    /// Additional data about the geocoded location
    pub location_type: Option<LocationType>,
    /// Recommended display frame
    pub viewport: Option<Viewport>,
    /// Rectangle fully containing this result
    pub bounds: Option<Bounds>,
}

impl Address {
    /// Check if no field of this address is populated.
    pub fn is_empty(&self) -> bool {
        self == &Address::default()
    }
}
