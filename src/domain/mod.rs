mod capital;
mod card;
mod geo_position;

pub use capital::Capital;
pub use card::{Card, CardParseError, Deck, Rank, Suit};
pub use geo_position::{EARTH_RADIUS_KM, GeoPosition};
