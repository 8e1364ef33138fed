//! The shared capability contract between the two sides of a battle.
//!
//! Player and Enemy diverge significantly in the data they own (class and
//! experience vs. archetype and rewards), so they share a small trait rather
//! than a common base type. The damage formulas only ever see this surface.

pub trait Combatant {
    fn name(&self) -> &str;
    fn level(&self) -> u8;
    fn atk(&self) -> u16;
    fn defense(&self) -> u16;
    fn spd(&self) -> u16;
    fn hp(&self) -> u16;
    fn max_hp(&self) -> u16;

    /// Apply damage, clamping HP at 0. Returns the amount actually applied.
    fn take_damage(&mut self, amount: u16) -> u16;

    fn is_alive(&self) -> bool {
        self.hp() > 0
    }
}
