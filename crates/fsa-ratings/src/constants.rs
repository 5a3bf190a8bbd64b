/// The default endpoint format for the FSA ratings cafe search, XML flavour
pub const DEFAULT_SEARCH_URL_FORMAT: &str =
    "https://api1-ratings.food.gov.uk/search/cafe/$postcode/xml";
pub const DEFAULT_SEARCH_URL_REPLACE_TOKEN: &str = "$postcode";

/// Label written before reading the postcode from stdin
pub const POSTCODE_PROMPT: &str = "Enter postcode: ";

/// Column titles of the results table, in display order
pub const TABLE_HEADER: [&str; 4] = ["Company", "Rating", "Address", "Local Authority"];
