use serde::{Deserialize, Serialize};

/// One of the five bill denominations a drawer accepts. Collaborators
/// exchange denominations as the literal tokens "$20", "$10", "$5", "$2"
/// and "$1", matched exactly and case-sensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Denomination {
    #[serde(rename = "$20")]
    Twenty,
    #[serde(rename = "$10")]
    Ten,
    #[serde(rename = "$5")]
    Five,
    #[serde(rename = "$2")]
    Two,
    #[serde(rename = "$1")]
    One,
}

impl Denomination {
    /// Every denomination, ordered from highest to lowest face value.
    /// Batch arrays and change breakdowns follow this order.
    pub const ALL: [Denomination; 5] = [
        Denomination::Twenty,
        Denomination::Ten,
        Denomination::Five,
        Denomination::Two,
        Denomination::One,
    ];

    /// Face value in whole currency units.
    pub fn value(&self) -> u64 {
        match self {
            Denomination::Twenty => 20,
            Denomination::Ten => 10,
            Denomination::Five => 5,
            Denomination::Two => 2,
            Denomination::One => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Denomination::Twenty => "$20",
            Denomination::Ten => "$10",
            Denomination::Five => "$5",
            Denomination::Two => "$2",
            Denomination::One => "$1",
        }
    }

    /// Parse a boundary token. No case folding or trimming: anything but
    /// the five exact labels is unknown.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "$20" => Some(Denomination::Twenty),
            "$10" => Some(Denomination::Ten),
            "$5" => Some(Denomination::Five),
            "$2" => Some(Denomination::Two),
            "$1" => Some(Denomination::One),
            _ => None,
        }
    }

    /// Position in the canonical highest-to-lowest ordering.
    pub(crate) fn slot(&self) -> usize {
        match self {
            Denomination::Twenty => 0,
            Denomination::Ten => 1,
            Denomination::Five => 2,
            Denomination::Two => 3,
            Denomination::One => 4,
        }
    }
}

impl std::fmt::Display for Denomination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_roundtrip() {
        for d in Denomination::ALL {
            let token = d.as_str();
            let parsed = Denomination::from_token(token).unwrap();
            assert_eq!(d, parsed);
        }
    }

    #[test]
    fn test_values_descend() {
        let values: Vec<u64> = Denomination::ALL.iter().map(|d| d.value()).collect();
        assert_eq!(values, vec![20, 10, 5, 2, 1]);
    }

    #[test]
    fn test_slots_follow_canonical_order() {
        for (slot, d) in Denomination::ALL.into_iter().enumerate() {
            assert_eq!(d.slot(), slot);
        }
    }

    #[test]
    fn test_token_is_exact_match() {
        assert!(Denomination::from_token("£1").is_none());
        assert!(Denomination::from_token("$50").is_none());
        assert!(Denomination::from_token("20").is_none());
        assert!(Denomination::from_token(" $20").is_none());
        assert!(Denomination::from_token("$20 ").is_none());
        assert!(Denomination::from_token("").is_none());
    }

    #[test]
    fn test_serde_uses_boundary_tokens() {
        let json = serde_json::to_string(&Denomination::Twenty).unwrap();
        assert_eq!(json, "\"$20\"");

        let parsed: Denomination = serde_json::from_str("\"$2\"").unwrap();
        assert_eq!(parsed, Denomination::Two);

        assert!(serde_json::from_str::<Denomination>("\"$100\"").is_err());
    }
}
