use serde::{Deserialize, Serialize};

// The root element name is not checked, so a bare collection and the live
// API's `FHRSEstablishment` envelope both land here.

/// Raw response from API.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Response {
    #[serde(rename = "EstablishmentCollection")]
    pub establishment_collections: Vec<Collection>,
    #[serde(rename = "EstablishmentDetail")]
    pub establishment_details: Vec<Detail>,
}

impl Response {
    pub fn into_details(self) -> Vec<Detail> {
        self.establishment_collections
            .into_iter()
            .flat_map(|collection| collection.establishment_details)
            .chain(self.establishment_details)
            .collect()
    }
}

/// Raw establishment collection from API.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default, rename = "EstablishmentCollection")]
pub struct Collection {
    #[serde(rename = "EstablishmentDetail")]
    pub establishment_details: Vec<Detail>,
}

/// Raw establishment detail from API. Fields not listed here are skipped.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Detail {
    pub business_name: String,
    pub rating_value: String,
    pub address_line1: String,
    pub local_authority_name: String,
}
