//! Level transitions: advancing after a win, retrying after a loss.

use log::info;
use thiserror::Error;

use super::event::BattleEvent;
use super::resolver::Resolution;
use crate::core::{BattleConfig, BattleState, Enemy, LevelScaling, TurnPhase};

/// Errors from level transitions.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LevelError {
    #[error("cannot advance to the next level before winning this one")]
    NotWon,
}

/// The enemy faced on `level`, scaled from the level 1 enemy.
#[must_use]
pub fn enemy_for_level(base: &Enemy, level: u32, scaling: &LevelScaling) -> Enemy {
    let steps = f64::from(level.saturating_sub(1));
    let scale = |value: u32, factor: f64| ((f64::from(value) * factor).floor() as u32).max(1);

    match scaling {
        LevelScaling::Multiplier { health_step, damage_step } => Enemy::new(
            base.name.clone(),
            scale(base.max_health, 1.0 + steps * health_step),
            scale(base.damage, 1.0 + steps * damage_step),
        ),
        LevelScaling::SecondEnemy { .. } if level <= 1 => base.clone(),
        LevelScaling::SecondEnemy { name, factor } => {
            let factor = factor.powf(steps);
            Enemy::new(name.clone(), scale(base.max_health, factor), scale(base.damage, factor))
        }
    }
}

/// Start the next level after a victory.
///
/// The player returns to full health and mana; passives stay in effect
/// and one-time skills stay spent. Cooldowns persist unless the config
/// says otherwise.
pub fn next_level(state: &BattleState, config: &BattleConfig) -> Result<Resolution, LevelError> {
    if state.phase != TurnPhase::Victory {
        return Err(LevelError::NotWon);
    }

    let mut next = state.clone();
    next.level += 1;
    next.enemy = enemy_for_level(&state.base_enemy, next.level, &config.level_scaling);
    if config.reset_cooldowns_on_level_up {
        next.cooldowns.clear();
    }
    reset_encounter(&mut next, config);

    next.log.push(format!(
        "Level {} - Enemy health increased to {} and damage to {}!",
        next.level, next.enemy.health, next.enemy.damage
    ));
    info!(
        "level {} begins: {} with {} hp, {} damage",
        next.level, next.enemy.name, next.enemy.health, next.enemy.damage
    );

    let event = BattleEvent::LevelStarted {
        level: next.level,
        enemy: next.enemy.name.clone(),
        enemy_health: next.enemy.health,
        enemy_damage: next.enemy.damage,
    };
    Ok(Resolution {
        state: next,
        events: vec![event],
    })
}

/// Restart the encounter at level 1.
///
/// Passive boosts stay applied. Cooldowns, one-time skills, the damage
/// bonus and the action history start over. The RNG stream continues.
#[must_use]
pub fn retry(state: &BattleState, config: &BattleConfig) -> Resolution {
    let mut next = state.clone();
    next.level = 1;
    next.enemy = state.base_enemy.clone();
    next.cooldowns.clear();
    next.history.clear();
    next.player.raw_damage_bonus = 0;
    for skill in next.skills.iter_mut() {
        skill.has_been_used = false;
    }
    reset_encounter(&mut next, config);
    info!("retrying from level 1 against {}", next.enemy.name);

    let event = BattleEvent::LevelStarted {
        level: 1,
        enemy: next.enemy.name.clone(),
        enemy_health: next.enemy.health,
        enemy_damage: next.enemy.damage,
    };
    Resolution {
        state: next,
        events: vec![event],
    }
}

fn reset_encounter(state: &mut BattleState, config: &BattleConfig) {
    state.turn = 1;
    state.phase = TurnPhase::PlayerTurn;
    state.has_acted = false;
    state.is_resting = false;
    state.is_dodging = false;
    state.player.restore_full();
    state.player.mana = state.player.max_mana;
    state.turn_timer = config.turn_timer_secs;
    state.log.clear();
}
