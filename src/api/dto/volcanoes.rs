/*
 * Responsibility
 * - /volcanoes query-string contract
 * - the endpoint accepts exactly `country` and `populatedWithin`; anything
 *   else is rejected by name, so parsing runs over the raw parameter map
 */
use std::collections::HashMap;

use crate::repos::volcano_repo::PopulatedWithin;

const VALID_PARAMS: [&str; 2] = ["country", "populatedWithin"];

#[derive(Debug)]
pub struct VolcanoesQuery {
    pub country: String,
    pub populated_within: Option<PopulatedWithin>,
}

impl VolcanoesQuery {
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, String> {
        let mut invalid: Vec<&str> = params
            .keys()
            .map(String::as_str)
            .filter(|key| !VALID_PARAMS.contains(key))
            .collect();

        if !invalid.is_empty() {
            invalid.sort_unstable();
            return Err(format!(
                "Invalid query parameters: {}. Only 'country' and 'populatedWithin' are permitted.",
                invalid.join(", ")
            ));
        }

        let country = params
            .get("country")
            .filter(|c| !c.is_empty())
            .ok_or_else(|| "Country is a required query parameter.".to_string())?
            .clone();

        let populated_within = match params.get("populatedWithin") {
            None => None,
            Some(value) => Some(PopulatedWithin::parse(value).ok_or_else(|| {
                "Invalid populated within parameter. Valid values are 5km, 10km, 30km, 100km."
                    .to_string()
            })?),
        };

        Ok(Self {
            country,
            populated_within,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn country_alone_is_valid() {
        let q = VolcanoesQuery::from_params(&params(&[("country", "Japan")])).unwrap();
        assert_eq!(q.country, "Japan");
        assert_eq!(q.populated_within, None);
    }

    #[test]
    fn populated_within_maps_to_a_radius() {
        let q = VolcanoesQuery::from_params(&params(&[
            ("country", "Japan"),
            ("populatedWithin", "30km"),
        ]))
        .unwrap();
        assert_eq!(q.populated_within, Some(PopulatedWithin::Km30));
    }

    #[test]
    fn unknown_parameters_are_rejected_by_name() {
        let err =
            VolcanoesQuery::from_params(&params(&[("country", "Japan"), ("region", "Honshu")]))
                .unwrap_err();
        assert!(err.contains("region"));
        assert!(err.starts_with("Invalid query parameters"));
    }

    #[test]
    fn missing_country_is_rejected() {
        let err = VolcanoesQuery::from_params(&params(&[])).unwrap_err();
        assert_eq!(err, "Country is a required query parameter.");

        let err =
            VolcanoesQuery::from_params(&params(&[("populatedWithin", "5km")])).unwrap_err();
        assert_eq!(err, "Country is a required query parameter.");
    }

    #[test]
    fn bad_radius_is_rejected() {
        let err = VolcanoesQuery::from_params(&params(&[
            ("country", "Japan"),
            ("populatedWithin", "7km"),
        ]))
        .unwrap_err();
        assert!(err.starts_with("Invalid populated within parameter"));
    }
}
