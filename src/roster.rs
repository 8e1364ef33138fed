use crate::enemy::Enemy;
use crate::errors::{RosterError, RosterResult};
use schema::EnemyKind;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

/// Stats for one enemy archetype at one level, as stored in the data files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyEntry {
    pub name: String,
    pub hp: u16,
    pub mp: u16,
    pub atk: u16,
    pub def: u16,
    pub spd: u16,
    pub exp: u32,
    pub gold: u32,
    pub special_stat: Option<String>,
}

/// One enemy archetype with its per-level stat table. Level keys may be
/// sparse; lookups fall back to the nearest available level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyArchetype {
    pub kind: EnemyKind,
    pub levels: BTreeMap<u8, EnemyEntry>,
}

impl EnemyArchetype {
    /// Resolve the entry nearest to the requested level (minimum absolute
    /// difference). On a tie the lower level wins: the table is iterated in
    /// ascending order and only a strictly smaller distance replaces the
    /// current pick.
    pub fn nearest_entry(&self, level: u8) -> Option<&EnemyEntry> {
        let mut best: Option<(u8, &EnemyEntry)> = None;
        for (&entry_level, entry) in &self.levels {
            let distance = entry_level.abs_diff(level);
            match best {
                Some((best_distance, _)) if distance >= best_distance => {}
                _ => best = Some((distance, entry)),
            }
        }
        best.map(|(_, entry)| entry)
    }
}

/// Archetype/level -> stat resolver. The battle engine assumes the roster
/// has already produced valid stats before an Enemy is constructed; data
/// problems surface here, never inside a running battle.
#[derive(Debug, Clone, PartialEq)]
pub struct EnemyRoster {
    archetypes: HashMap<EnemyKind, EnemyArchetype>,
}

impl EnemyRoster {
    /// Load every `.ron` archetype file in a directory.
    pub fn load_dir(data_path: &Path) -> RosterResult<Self> {
        let mut archetypes = HashMap::new();

        for entry in fs::read_dir(data_path)? {
            let path = entry?.path();
            if path.extension().and_then(|s| s.to_str()) == Some("ron") {
                let content = fs::read_to_string(&path)?;
                let archetype: EnemyArchetype = ron::from_str(&content)?;
                archetypes.insert(archetype.kind, archetype);
            }
        }

        Ok(EnemyRoster { archetypes })
    }

    /// The default roster, constructed in code so the engine and its tests
    /// work without data files on disk. `data/enemies/` mirrors these tables.
    pub fn builtin() -> Self {
        let mut archetypes = HashMap::new();
        archetypes.insert(
            EnemyKind::RealEstateCompany,
            EnemyArchetype {
                kind: EnemyKind::RealEstateCompany,
                levels: BTreeMap::from([
                    (1, entry("Local Realty Agent", 10, 0, 5, 3, 4, 10, 80, None)),
                    (3, entry("Midtown Realty Office", 22, 4, 8, 5, 6, 28, 200, None)),
                    (5, entry("Regional Realty Branch", 38, 8, 12, 8, 8, 55, 420, None)),
                    (7, entry("Metropolitan Realty HQ", 60, 12, 16, 11, 10, 90, 700, None)),
                    (10, entry("National Realty Group", 95, 20, 22, 15, 13, 150, 1200, None)),
                ]),
            },
        );
        archetypes.insert(
            EnemyKind::Delinquent,
            EnemyArchetype {
                kind: EnemyKind::Delinquent,
                levels: BTreeMap::from([
                    (
                        1,
                        entry("Three-Month Delinquent", 8, 0, 4, 2, 6, 8, 60, Some("3 months in arrears")),
                    ),
                    (
                        3,
                        entry("Six-Month Delinquent", 18, 0, 7, 4, 9, 24, 160, Some("6 months in arrears")),
                    ),
                    (
                        5,
                        entry("One-Year Delinquent", 32, 0, 10, 6, 12, 48, 340, Some("12 months in arrears")),
                    ),
                    (
                        7,
                        entry("Serial Delinquent", 50, 0, 14, 9, 15, 80, 560, Some("24 months in arrears")),
                    ),
                    (
                        10,
                        entry("Legendary Delinquent", 80, 0, 19, 12, 19, 135, 1000, Some("36 months in arrears")),
                    ),
                ]),
            },
        );
        EnemyRoster { archetypes }
    }

    /// Resolve `(kind, level)` to the nearest-level stat entry.
    pub fn resolve(&self, kind: EnemyKind, level: u8) -> RosterResult<&EnemyEntry> {
        let archetype = self
            .archetypes
            .get(&kind)
            .ok_or(RosterError::UnknownKind(kind))?;
        archetype
            .nearest_entry(level)
            .ok_or(RosterError::NoLevelData(kind))
    }

    /// Construct a battle-ready enemy at the requested level.
    pub fn spawn(&self, kind: EnemyKind, level: u8) -> RosterResult<Enemy> {
        let entry = self.resolve(kind, level)?;
        Ok(Enemy::from_entry(kind, level, entry))
    }
}

fn entry(
    name: &str,
    hp: u16,
    mp: u16,
    atk: u16,
    def: u16,
    spd: u16,
    exp: u32,
    gold: u32,
    special_stat: Option<&str>,
) -> EnemyEntry {
    EnemyEntry {
        name: name.to_string(),
        hp,
        mp,
        atk,
        def,
        spd,
        exp,
        gold,
        special_stat: special_stat.map(str::to_string),
    }
}
