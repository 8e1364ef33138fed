use serde::{Deserialize, Serialize};

/// Enemy archetypes. Stats per archetype and level come from the roster data,
/// not from this enum.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum EnemyKind {
    #[strum(serialize = "Real Estate Company")]
    RealEstateCompany,
    #[strum(serialize = "Delinquent Tenant")]
    Delinquent,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_kind_display_names() {
        assert_eq!(
            EnemyKind::RealEstateCompany.to_string(),
            "Real Estate Company"
        );
        assert_eq!(EnemyKind::Delinquent.to_string(), "Delinquent Tenant");
    }

    #[test]
    fn test_all_kinds_iterable() {
        let kinds: Vec<EnemyKind> = EnemyKind::iter().collect();
        assert_eq!(kinds.len(), 2);
        assert!(kinds.contains(&EnemyKind::RealEstateCompany));
        assert!(kinds.contains(&EnemyKind::Delinquent));
    }
}
