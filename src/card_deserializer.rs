use crate::domain::Card;
use serde::{Deserialize, Deserializer};

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value
            .parse()
            .map_err(|e| serde::de::Error::custom(format!("invalid card '{}': {}", value, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Rank, Suit};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn deserializes_a_card() {
        let parsed: Card = serde_json::from_value(json!("Q♡")).unwrap();
        assert_eq!(parsed, Card::new(Rank::Queen, Suit::Hearts));
    }

    #[test]
    fn deserialize_fails_on_an_unknown_rank() {
        let parsed = serde_json::from_value::<Card>(json!("Z♡"));
        let msg = parsed.expect_err("expected an error but got Ok").to_string();
        assert!(msg.contains("invalid card 'Z♡': unknown rank 'Z'"), "got '{msg}'");
    }

    #[test]
    fn deserialize_fails_on_a_non_string() {
        assert!(serde_json::from_value::<Card>(json!(12)).is_err());
    }
}
