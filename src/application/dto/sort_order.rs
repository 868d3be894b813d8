/// Order in which report entries are emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// The map's own iteration order, i.e. unspecified (default)
    #[default]
    None,
    /// By word, ascending
    Alphabetical,
    /// By count descending, ties by word ascending
    Frequency,
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(SortOrder::None),
            "alpha" | "alphabetical" => Ok(SortOrder::Alphabetical),
            "count" | "frequency" => Ok(SortOrder::Frequency),
            _ => Err(format!(
                "Invalid sort order: {}. Please specify 'none', 'alpha' or 'count'",
                s
            )),
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::None => write!(f, "none"),
            SortOrder::Alphabetical => write!(f, "alpha"),
            SortOrder::Frequency => write!(f, "count"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_sort_order_from_str_aliases() {
        assert_eq!(SortOrder::from_str("none").unwrap(), SortOrder::None);
        assert_eq!(SortOrder::from_str("alpha").unwrap(), SortOrder::Alphabetical);
        assert_eq!(
            SortOrder::from_str("Alphabetical").unwrap(),
            SortOrder::Alphabetical
        );
        assert_eq!(SortOrder::from_str("COUNT").unwrap(), SortOrder::Frequency);
        assert_eq!(SortOrder::from_str("frequency").unwrap(), SortOrder::Frequency);
    }

    #[test]
    fn test_sort_order_from_str_invalid() {
        let error = SortOrder::from_str("random").unwrap_err();
        assert!(error.contains("Invalid sort order"));
        assert!(error.contains("random"));
    }

    #[test]
    fn test_sort_order_display_parses_back() {
        for order in [SortOrder::None, SortOrder::Alphabetical, SortOrder::Frequency] {
            assert_eq!(SortOrder::from_str(&order.to_string()).unwrap(), order);
        }
    }
}
