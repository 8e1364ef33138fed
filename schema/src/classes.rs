use serde::{Deserialize, Serialize};

/// The player's job class. Growth rates on level-up differ per class.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum PlayerClass {
    #[strum(serialize = "Male Sales")]
    MaleSales,
    #[strum(serialize = "Female Sales")]
    FemaleSales,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_display_names() {
        assert_eq!(PlayerClass::MaleSales.to_string(), "Male Sales");
        assert_eq!(PlayerClass::FemaleSales.to_string(), "Female Sales");
    }
}
