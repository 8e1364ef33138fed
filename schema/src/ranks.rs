//! Company rank titles, derived from the player's level.
//!
//! The rank is not owned state: it is a pure function of level against a
//! static threshold table. The highest threshold at or below the level wins.

/// Minimum-level thresholds and their rank titles, in ascending order.
pub const RANK_TABLE: [(u8, &str); 8] = [
    (1, "Advisor"),
    (11, "Supervisor"),
    (21, "Chief Advisor"),
    (31, "Sub Leader"),
    (41, "Leader"),
    (51, "Manager"),
    (66, "Department Head"),
    (81, "Executive"),
];

/// Look up the rank title for a level.
pub fn rank_for_level(level: u8) -> &'static str {
    let mut rank = RANK_TABLE[0].1;
    for (min_level, name) in RANK_TABLE {
        if level >= min_level {
            rank = name;
        } else {
            break;
        }
    }
    rank
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_thresholds() {
        assert_eq!(rank_for_level(1), "Advisor");
        assert_eq!(rank_for_level(10), "Advisor");
        assert_eq!(rank_for_level(11), "Supervisor");
        assert_eq!(rank_for_level(20), "Supervisor");
        assert_eq!(rank_for_level(21), "Chief Advisor");
        assert_eq!(rank_for_level(65), "Manager");
        assert_eq!(rank_for_level(66), "Department Head");
        assert_eq!(rank_for_level(81), "Executive");
        assert_eq!(rank_for_level(255), "Executive");
    }

    #[test]
    fn test_table_is_ascending() {
        for pair in RANK_TABLE.windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }
    }
}
