//! Turn resolution.
//!
//! One player turn moves through:
//!
//! ```text
//! PlayerTurn --action--> EnemyAttack --counter--> PlayerTurn
//!      |                      |
//!      +--enemy at 0--> Victory      +--player at 0--> Defeat
//! ```
//!
//! `resolve` runs a whole exchange (the player's action and, unless the
//! battle ended, the enemy's counter). `resolve_player_action` and
//! `resolve_enemy_attack` expose the two halves separately. All of them
//! are pure: they take a state by reference and return a new one.

use log::{debug, info};

use super::error::ActionError;
use super::event::BattleEvent;
use super::params::BattleParams;
use crate::core::{
    ActionRecord, BattleAction, BattleConfig, BattleOutcome, BattleState, Enemy, HealCap, Player, TurnPhase,
};
use crate::skills::{load_selected_skills, PassiveBoost, SkillCatalog, SkillEffect};

/// A new state plus what happened on the way there.
#[derive(Clone, Debug)]
pub struct Resolution {
    pub state: BattleState,
    pub events: Vec<BattleEvent>,
}

impl Resolution {
    /// The refusal reason if the action was rejected.
    #[must_use]
    pub fn rejection(&self) -> Option<&ActionError> {
        self.events.iter().find_map(|event| match event {
            BattleEvent::ActionRejected(err) => Some(err),
            _ => None,
        })
    }

    #[must_use]
    pub fn is_rejected(&self) -> bool {
        self.rejection().is_some()
    }

    /// Terminal outcome reached by this resolution, if any.
    #[must_use]
    pub fn outcome(&self) -> Option<BattleOutcome> {
        self.state.outcome()
    }
}

/// Set up level 1 from the launch parameters.
///
/// Loads the skill payload (an unusable payload yields an empty loadout)
/// and applies every passive skill exactly once.
#[must_use]
pub fn start_battle(params: &BattleParams, config: &BattleConfig, catalog: &SkillCatalog, seed: u64) -> Resolution {
    let skills = load_selected_skills(params.selected_skills.as_deref(), catalog);
    let player = Player::new(params.player_name.clone(), config.starting_health, config.max_mana)
        .with_character(params.character());
    let enemy = Enemy::new(
        config.enemy_name.clone(),
        params.enemy_health(config),
        config.enemy_base_damage,
    );

    let mut state = BattleState::new(player, enemy, skills, config, seed);
    let mut events = Vec::new();
    apply_passives(&mut state, &mut events);

    info!(
        "battle started: {} ({:?}, {:?}) vs {} with {} hp, {} skills",
        state.player.name,
        state.player.character,
        params.difficulty,
        state.enemy.name,
        state.enemy.health,
        state.skills.len()
    );

    Resolution { state, events }
}

/// Resolve a full exchange: the player's action, then the enemy's counter.
#[must_use]
pub fn resolve(state: &BattleState, action: BattleAction, config: &BattleConfig) -> Resolution {
    let mut next = state.clone();
    let mut events = Vec::new();

    apply_action(&mut next, action, config, &mut events);
    if next.phase == TurnPhase::EnemyAttack {
        apply_enemy_attack(&mut next, config, &mut events);
    }

    Resolution { state: next, events }
}

/// Resolve only the player's half of an exchange.
///
/// On success the state is left in `EnemyAttack` (or `Victory`).
#[must_use]
pub fn resolve_player_action(state: &BattleState, action: BattleAction, config: &BattleConfig) -> Resolution {
    let mut next = state.clone();
    let mut events = Vec::new();
    apply_action(&mut next, action, config, &mut events);
    Resolution { state: next, events }
}

/// Resolve only the enemy's counter. Does nothing outside `EnemyAttack`.
#[must_use]
pub fn resolve_enemy_attack(state: &BattleState, config: &BattleConfig) -> Resolution {
    let mut next = state.clone();
    let mut events = Vec::new();
    apply_enemy_attack(&mut next, config, &mut events);
    Resolution { state: next, events }
}

/// Apply every passive in the loadout.
pub(crate) fn apply_passives(state: &mut BattleState, events: &mut Vec<BattleEvent>) {
    let passives: Vec<(String, PassiveBoost)> = state
        .skills
        .iter()
        .filter_map(|skill| match skill.effect {
            SkillEffect::Passive(boost) => Some((skill.name.clone(), boost)),
            _ => None,
        })
        .collect();

    for (skill, boost) in passives {
        match boost {
            PassiveBoost::MaxHealth(max_health) => {
                state.player.max_health = max_health;
                state.player.restore_full();
                state
                    .log
                    .push(format!("Your maximum health has been increased to {max_health}!"));
            }
            PassiveBoost::DodgeChance(bonus) => {
                state.player.dodge_chance = (state.player.dodge_chance + bonus).min(100);
                state
                    .log
                    .push(format!("Your dodge chance has been increased by {bonus}%!"));
            }
        }
        debug!("passive {skill} applied: {boost:?}");
        events.push(BattleEvent::PassiveApplied { skill, boost });
    }
}

/// Check the turn guards shared by every action.
fn check_turn(state: &BattleState) -> Result<(), ActionError> {
    if !state.player.is_alive() || state.phase == TurnPhase::Defeat {
        return Err(ActionError::PlayerDefeated);
    }
    match state.phase {
        TurnPhase::Victory => Err(ActionError::BattleOver),
        TurnPhase::EnemyAttack => Err(ActionError::NotYourTurn),
        _ if state.has_acted => Err(ActionError::AlreadyActed),
        _ => Ok(()),
    }
}

/// Check the skill-specific gates, in the order the player sees them.
fn check_skill(state: &BattleState, slot: usize) -> Result<(), ActionError> {
    let skill = state.skill(slot).ok_or(ActionError::NoSuchSkill(slot))?;

    if skill.is_passive() {
        return Err(ActionError::PassiveSkill(skill.name.clone()));
    }
    if skill.is_spent() {
        return Err(ActionError::AlreadyUsed(skill.name.clone()));
    }
    if state.player.mana < skill.mana_cost {
        return Err(ActionError::InsufficientMana {
            skill: skill.name.clone(),
            cost: skill.mana_cost,
        });
    }
    let remaining = state.cooldown_remaining(&skill.name);
    if remaining > 0 {
        return Err(ActionError::OnCooldown {
            skill: skill.name.clone(),
            remaining,
        });
    }
    Ok(())
}

fn reject(state: &mut BattleState, err: ActionError, events: &mut Vec<BattleEvent>) {
    debug!("action rejected: {err}");
    state.log.push(err.to_string());
    events.push(BattleEvent::ActionRejected(err));
}

fn apply_action(state: &mut BattleState, action: BattleAction, config: &BattleConfig, events: &mut Vec<BattleEvent>) {
    let validation = match action {
        BattleAction::UseSkill { slot } => check_turn(state).and_then(|()| check_skill(state, slot)),
        _ => check_turn(state),
    };
    if let Err(err) = validation {
        reject(state, err, events);
        return;
    }

    debug!("turn {} action {:?}", state.turn, action);
    state.record_action(ActionRecord::new(action, state.level, state.turn));
    state.has_acted = true;

    match action {
        BattleAction::UseSkill { slot } => use_skill(state, slot, events),
        BattleAction::Rest => {
            state.is_resting = true;
            let restored = state.player.restore_mana(config.rest_mana);
            state
                .log
                .push(format!("You take a rest and recover {} mana!", config.rest_mana));
            events.push(BattleEvent::Rested {
                restored,
                mana: state.player.mana,
            });
        }
        BattleAction::Dodge => {
            state.is_dodging = true;
            state.log.push("You prepare to dodge the next attack!");
            events.push(BattleEvent::DodgePrepared);
        }
        BattleAction::Heal => {
            let cap = match config.heal_cap {
                HealCap::MaxHealth => state.player.max_health,
                HealCap::Fixed(cap) => cap,
            };
            let restored = state.player.heal(config.heal_amount, cap);
            state
                .log
                .push(format!("You heal yourself for {} HP!", config.heal_amount));
            events.push(BattleEvent::Healed {
                restored,
                health: state.player.health,
            });
        }
    }

    if state.enemy.is_alive() {
        state.phase = TurnPhase::EnemyAttack;
    } else {
        state.phase = TurnPhase::Victory;
        state.is_resting = false;
        state.is_dodging = false;
        state.log.push("Enemy defeated!");
        info!("level {} won on turn {}", state.level, state.turn);
        events.push(BattleEvent::Victory);
    }
}

/// Spend mana, start the cooldown and apply the skill's effect.
/// Gates have already passed.
fn use_skill(state: &mut BattleState, slot: usize, events: &mut Vec<BattleEvent>) {
    let Some(skill) = state.skills.get(slot).cloned() else {
        return;
    };

    state.player.spend_mana(skill.mana_cost);
    state.set_cooldown(&skill.name, skill.cooldown);

    match skill.effect {
        SkillEffect::FlatDamage { delivery } | SkillEffect::SingleUseDamage { delivery } => {
            let total = skill.damage.saturating_add(state.player.raw_damage_bonus);
            state.enemy.take_damage(total);
            if skill.is_one_time_use() {
                mark_used(state, slot);
            }
            state
                .log
                .push(format!("You used {} and dealt {} damage!", skill.name, total));
            events.push(BattleEvent::SkillUsed {
                skill: skill.name,
                delivery,
                damage: total,
                enemy_health: state.enemy.health,
            });
        }
        SkillEffect::FullRestore => {
            state.player.restore_full();
            mark_used(state, slot);
            state.log.push("Your health has been fully restored!");
            events.push(BattleEvent::HealthRestored {
                skill: skill.name,
                health: state.player.health,
            });
        }
        SkillEffect::Passive(_) => {}
    }
}

fn mark_used(state: &mut BattleState, slot: usize) {
    if let Some(skill) = state.skills.get_mut(slot) {
        skill.has_been_used = true;
    }
}

fn apply_enemy_attack(state: &mut BattleState, config: &BattleConfig, events: &mut Vec<BattleEvent>) {
    if state.phase != TurnPhase::EnemyAttack {
        debug!("enemy attack skipped in phase {:?}", state.phase);
        return;
    }

    // A prepared dodge wins outright and consumes no roll.
    if state.is_dodging {
        state.is_dodging = false;
        state.log.push("You successfully dodged the enemy attack!");
        events.push(BattleEvent::AttackDodged { guaranteed: true });
        return_control(state, config, events);
        return;
    }

    let roll = state.rng.roll_percent();
    if roll < f64::from(state.player.dodge_chance) {
        debug!("dodge roll {roll:.2} < {}", state.player.dodge_chance);
        state.log.push("You successfully dodged the enemy attack!");
        events.push(BattleEvent::AttackDodged { guaranteed: false });
        return_control(state, config, events);
        return;
    }

    let damage = state.player.take_damage(state.enemy.damage);
    state
        .log
        .push(format!("Enemy attacked and dealt {} damage!", state.enemy.damage));
    events.push(BattleEvent::EnemyAttacked {
        damage,
        player_health: state.player.health,
    });

    if state.player.is_alive() {
        return_control(state, config, events);
    } else {
        state.phase = TurnPhase::Defeat;
        state.is_resting = false;
        state.log.push("You have been defeated!");
        info!("level {} lost on turn {}", state.level, state.turn);
        events.push(BattleEvent::Defeat);
    }
}

fn return_control(state: &mut BattleState, config: &BattleConfig, events: &mut Vec<BattleEvent>) {
    state.phase = TurnPhase::PlayerTurn;
    state.has_acted = false;
    state.is_resting = false;
    state.turn += 1;
    state.turn_timer = config.turn_timer_secs;
    events.push(BattleEvent::TurnStarted { turn: state.turn });
}
