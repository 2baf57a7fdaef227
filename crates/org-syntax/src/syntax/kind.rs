//! SyntaxKind enum for the Org CST.
//!
//! The variant list lives in `kinds.in` so that `build.rs` can read the same
//! list and check the typed-AST schema against it.

macro_rules! syntax_kinds {
    ($($kind:ident),* $(,)?) => {
        /// Every kind of syntax element in the Org CST, tokens and nodes alike.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(u16)]
        #[allow(non_camel_case_types)]
        pub enum SyntaxKind {
            $($kind,)*
        }

        impl SyntaxKind {
            /// All kinds, indexed by discriminant.
            pub const ALL: &'static [SyntaxKind] = &[$(SyntaxKind::$kind,)*];

            pub fn name(self) -> &'static str {
                match self {
                    $(SyntaxKind::$kind => stringify!($kind),)*
                }
            }
        }
    };
}

include!("kinds.in");

impl SyntaxKind {
    /// Look a kind up by its raw discriminant.
    pub fn from_raw(raw: u16) -> Option<SyntaxKind> {
        SyntaxKind::ALL.get(usize::from(raw)).copied()
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        rowan::SyntaxKind(kind as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discriminants_index_all() {
        for (idx, kind) in SyntaxKind::ALL.iter().enumerate() {
            assert_eq!(*kind as usize, idx, "{} out of place", kind.name());
        }
    }

    #[test]
    fn raw_round_trip_and_bounds() {
        let raw = SyntaxKind::HEADLINE as u16;
        assert_eq!(SyntaxKind::from_raw(raw), Some(SyntaxKind::HEADLINE));
        assert_eq!(SyntaxKind::from_raw(SyntaxKind::ALL.len() as u16), None);
    }

    #[test]
    fn names_match_variants() {
        assert_eq!(SyntaxKind::ORG_TABLE_RULE_ROW.name(), "ORG_TABLE_RULE_ROW");
        assert_eq!(format!("{:?}", SyntaxKind::BLANK_LINE), SyntaxKind::BLANK_LINE.name());
    }
}
