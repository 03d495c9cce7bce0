use derive_more::Display;

/// Security classification, line 1 column 8
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display)]
pub enum Classification {
    Unclassified,
    Classified,
    Secret,
}

impl Classification {
    pub const fn from_char(c: char) -> Option<Self> {
        use Classification::*;
        Some(match c {
            'U' => Unclassified,
            'C' => Classified,
            'S' => Secret,
            _ => return None,
        })
    }

    pub const fn as_char(self) -> char {
        use Classification::*;
        match self {
            Unclassified => 'U',
            Classified => 'C',
            Secret => 'S',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes() {
        assert_eq!(Classification::from_char('U'), Some(Classification::Unclassified));
        assert_eq!(Classification::from_char('C'), Some(Classification::Classified));
        assert_eq!(Classification::from_char('S'), Some(Classification::Secret));
        assert_eq!(Classification::from_char('X'), None);
        assert_eq!(Classification::from_char('u'), None);
        assert_eq!(Classification::Secret.as_char(), 'S');
    }
}
