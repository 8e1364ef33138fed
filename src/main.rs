use sales_quest::{
    pick_area_enemy, Battle, BattlePhase, BattleRng, EnemyRoster, Player, PlayerClass,
};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Terminal battle demo. Everything the library treats as external (input,
/// display pacing, the post-defeat recovery policy) lives here.
fn main() {
    let roster = match EnemyRoster::load_dir(Path::new("data/enemies")) {
        Ok(roster) => roster,
        Err(e) => {
            println!("Falling back to the built-in roster ({})", e);
            EnemyRoster::builtin()
        }
    };

    let mut player = Player::new_game("Hero", PlayerClass::MaleSales);
    println!("=== Sales Quest: battle demo ===");
    println!(
        "{} the {} (Lv.{})  HP {}/{}  MP {}/{}",
        player.name, player.class, player.level, player.hp, player.max_hp, player.mp, player.max_mp
    );
    println!();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let area_level = 1;

    loop {
        let mut rng = BattleRng::new_random();
        let (kind, level) = pick_area_enemy(area_level, &mut rng);
        let enemy = match roster.spawn(kind, level) {
            Ok(enemy) => enemy,
            Err(e) => {
                println!("Could not spawn an enemy: {}", e);
                return;
            }
        };
        println!("{}", enemy.status_text());
        println!();

        let mut battle = Battle::new(&mut player, enemy, rng);
        run_battle(&mut battle, &mut lines);
        let result = battle.result();
        drop(battle);

        match result.phase {
            BattlePhase::Victory => {
                println!(
                    "[Victory] +{} EXP, +\u{a5}{} in {} turn(s).",
                    result.exp_gained, result.gold_gained, result.turns
                );
            }
            BattlePhase::Defeat => {
                // Field-layer recovery policy: back on your feet at half HP.
                player.hp = player.max_hp / 2;
                println!("[Defeat] You come to at the office with {} HP.", player.hp);
            }
            BattlePhase::Escaped => println!("[Escaped] You slipped away."),
            _ => unreachable!("battle loop exited before a terminal phase"),
        }

        println!(
            "{} Lv.{} ({})  HP {}/{}  MP {}/{}  EXP {}",
            player.name,
            player.level,
            player.rank(),
            player.hp,
            player.max_hp,
            player.mp,
            player.max_mp,
            player.exp
        );

        if !prompt_yes_no("Another battle? [y/n] ", &mut lines) {
            return;
        }
        println!();
    }
}

fn run_battle(
    battle: &mut Battle,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) {
    loop {
        // One message per tick, like the dialogue box would show them.
        while let Some(message) = battle.pop_message() {
            println!("  {}", message);
        }

        if battle.is_over() {
            return;
        }

        match battle.phase() {
            BattlePhase::PlayerTurn => {
                let enemy = battle.enemy();
                println!(
                    "  [{} HP {}/{}]  (a)ttack  (d)efend  (r)un",
                    enemy.name, enemy.hp, enemy.max_hp
                );
                print!("> ");
                let _ = io::stdout().flush();
                let choice = match lines.next() {
                    Some(Ok(line)) => line.trim().to_lowercase(),
                    _ => return,
                };
                match choice.as_str() {
                    "a" | "attack" => battle.execute_attack(),
                    "d" | "defend" => battle.execute_defend(),
                    "r" | "run" => battle.execute_escape(),
                    _ => println!("  (attack, defend, or run)"),
                }
            }
            BattlePhase::EnemyTurn => battle.execute_enemy_turn(),
            _ => unreachable!("terminal phases are handled above"),
        }
    }
}

fn prompt_yes_no(
    prompt: &str,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> bool {
    print!("{}", prompt);
    let _ = io::stdout().flush();
    matches!(lines.next(), Some(Ok(line)) if line.trim().eq_ignore_ascii_case("y"))
}
