use derive_more::Display;

/// COSPAR international designator, line 1 columns 10-17
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display)]
#[display(fmt = "{}-{:03}{}", "launch_year", "launch_number", "launch_piece")]
pub struct InternationalDesignator {
    /// Four digit year, resolved with the same pivot as the epoch year
    pub launch_year: i32,

    /// Launch number of the year
    pub launch_number: u16,

    /// Piece of the launch, e.g. "A"
    pub launch_piece: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_cospar_style() {
        let d = InternationalDesignator {
            launch_year: 1998,
            launch_number: 67,
            launch_piece: "A".to_owned(),
        };
        assert_eq!(d.to_string(), "1998-067A");
    }
}
