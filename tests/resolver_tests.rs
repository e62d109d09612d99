//! Turn resolver integration tests.
//!
//! These tests drive whole exchanges through the public API, from launch
//! parameters to victory or defeat.

use plushie_battle::battle::{
    resolve, resolve_enemy_attack, resolve_player_action, start_battle, ActionError, BattleEvent, BattleParams,
};
use plushie_battle::core::{BattleAction, BattleConfig, BattleOutcome, BattleState, Enemy, Player, TurnPhase};
use plushie_battle::skills::{Loadout, PassiveBoost, Skill, SkillCatalog, SkillEffect};

fn config() -> BattleConfig {
    BattleConfig::default()
}

fn battle(skills: Vec<Skill>, enemy_health: u32) -> BattleState {
    BattleState::new(
        Player::new("Mochi", 100, 100),
        Enemy::new("Samurai", enemy_health, 25),
        Loadout::from_vec(skills),
        &config(),
        42,
    )
}

// =============================================================================
// Core Exchange Tests
// =============================================================================

/// A 30-damage skill against a fresh enemy, followed by the counter.
#[test]
fn test_basic_exchange() {
    let skill = Skill::new("Jab", 30, 3, SkillEffect::GENERIC);
    assert_eq!(skill.mana_cost, 15);

    let state = battle(vec![skill], 100);
    let res = resolve(&state, BattleAction::use_skill(0), &config());

    assert_eq!(res.state.enemy.health, 70);
    assert_eq!(res.state.player.mana, 85);
    assert_eq!(res.state.cooldown_remaining("Jab"), 3);
    assert_eq!(res.state.player.health, 100 - 25);
    assert_eq!(
        res.state.log.iter().collect::<Vec<_>>(),
        vec!["You used Jab and dealt 30 damage!", "Enemy attacked and dealt 25 damage!"]
    );
}

/// A finishing blow ends the battle before the enemy can answer.
#[test]
fn test_finishing_blow_skips_counter() {
    let state = battle(vec![Skill::new("Jab", 30, 3, SkillEffect::GENERIC)], 20);
    let res = resolve(&state, BattleAction::use_skill(0), &config());

    assert_eq!(res.state.enemy.health, 0);
    assert_eq!(res.outcome(), Some(BattleOutcome::Victory));
    assert_eq!(res.state.player.health, 100);
    assert!(!res.events.iter().any(BattleEvent::is_enemy_attack));
    assert_eq!(res.state.log.last(), Some("Enemy defeated!"));
}

/// Insufficient mana changes nothing but the log, by exactly one line.
#[test]
fn test_insufficient_mana_rejected_cleanly() {
    let mut state = battle(vec![Skill::new("Big Swing", 100, 4, SkillEffect::GENERIC)], 100);
    state.player.mana = 10;

    let res = resolve(&state, BattleAction::use_skill(0), &config());

    assert_eq!(
        res.rejection(),
        Some(&ActionError::InsufficientMana {
            skill: "Big Swing".to_string(),
            cost: 50
        })
    );
    assert_eq!(res.state.player, state.player);
    assert_eq!(res.state.enemy, state.enemy);
    assert_eq!(res.state.cooldowns, state.cooldowns);
    assert_eq!(res.state.phase, TurnPhase::PlayerTurn);
    assert_eq!(res.state.log.len(), state.log.len() + 1);
    assert_eq!(
        res.state.log.last(),
        Some("Not enough mana! You need 50 MP to use Big Swing.")
    );
}

/// Only one action resolves per player turn.
#[test]
fn test_one_action_per_turn() {
    let state = battle(vec![], 100);
    let first = resolve_player_action(&state, BattleAction::Rest, &config());
    let second = resolve_player_action(&first.state, BattleAction::Heal, &config());

    assert_eq!(second.rejection(), Some(&ActionError::NotYourTurn));
    assert_eq!(second.state.history.len(), 1);
}

// =============================================================================
// Special Skill Tests
// =============================================================================

/// Replenish works once; later attempts fail even with cooldown cleared.
#[test]
fn test_replenish_once_per_battle() {
    let mut state = battle(vec![Skill::new("Replenish", 0, 12, SkillEffect::FullRestore)], 100);
    state.player.health = 40;

    let res = resolve(&state, BattleAction::use_skill(0), &config());
    assert!(!res.is_rejected());
    assert_eq!(res.state.player.health, 100 - 25);
    assert!(res.state.skills[0].has_been_used);
    assert!(res.events.iter().any(BattleEvent::is_enemy_attack));

    let mut later = res.state;
    later.cooldowns.clear();
    later.player.mana = 100;
    let again = resolve(&later, BattleAction::use_skill(0), &config());

    assert_eq!(again.rejection(), Some(&ActionError::AlreadyUsed("Replenish".to_string())));
    assert_eq!(again.state.player.health, later.player.health);
}

/// Sword Blessing hits with its payload damage once, then is spent.
#[test]
fn test_sword_blessing_single_use_damage() {
    let payload = r#"[{"name": "Sword Blessing", "damage": 40, "description": "", "cooldown": 15, "imageUrl": ""}]"#;
    let params = BattleParams::new("Mochi").with_skills(payload).with_enemy_health("200");
    let config = config();
    let start = start_battle(&params, &config, &SkillCatalog::standard(&config), 4);

    let first = resolve(&start.state, BattleAction::use_skill(0), &config);
    assert!(!first.is_rejected());
    assert_eq!(first.state.enemy.health, 160);
    assert_eq!(first.state.player.mana, 80);
    assert_eq!(first.state.player.raw_damage_bonus, 0);
    assert!(first.state.skills[0].has_been_used);

    let mut later = first.state;
    later.cooldowns.clear();
    let again = resolve(&later, BattleAction::use_skill(0), &config);
    assert_eq!(
        again.rejection(),
        Some(&ActionError::AlreadyUsed("Sword Blessing".to_string()))
    );
    assert_eq!(again.state.enemy.health, 160);
}

/// Huge payload damage plus a bonus saturates instead of overflowing.
#[test]
fn test_damage_total_saturates() {
    let mut state = battle(vec![Skill::new("Colossus", u32::MAX, 1, SkillEffect::GENERIC)], 100);
    state.player.max_mana = u32::MAX;
    state.player.mana = u32::MAX;
    state.player.raw_damage_bonus = 5;

    let res = resolve(&state, BattleAction::use_skill(0), &config());

    assert_eq!(res.state.enemy.health, 0);
    assert_eq!(res.outcome(), Some(BattleOutcome::Victory));
    assert!(res.events.contains(&BattleEvent::SkillUsed {
        skill: "Colossus".to_string(),
        delivery: plushie_battle::skills::Delivery::Immediate,
        damage: u32::MAX,
        enemy_health: 0,
    }));
}

// =============================================================================
// Battle Start Tests
// =============================================================================

/// Passives from the payload apply once at start and cannot be invoked.
#[test]
fn test_passives_from_payload() {
    let payload = r#"[
        {"name": "More Health", "damage": 0, "description": "", "cooldown": 0, "imageUrl": "heart.png"},
        {"name": "Swift", "damage": 0, "description": "", "cooldown": 0, "imageUrl": "wind.png"},
        {"name": "Fireball", "damage": 90, "description": "", "cooldown": 5, "imageUrl": "fire.png"}
    ]"#;
    let params = BattleParams::new("Mochi")
        .with_skills(payload)
        .with_image_url("assets/Purple_Plushie.png");
    let config = config();
    let catalog = SkillCatalog::standard(&config);

    let start = start_battle(&params, &config, &catalog, 9);
    let state = start.state;

    assert_eq!(state.player.max_health, 150);
    assert_eq!(state.player.health, 150);
    assert_eq!(state.player.dodge_chance, 20);
    assert_eq!(
        start.events,
        vec![
            BattleEvent::PassiveApplied {
                skill: "More Health".to_string(),
                boost: PassiveBoost::MaxHealth(150)
            },
            BattleEvent::PassiveApplied {
                skill: "Swift".to_string(),
                boost: PassiveBoost::DodgeChance(20)
            },
        ]
    );

    for slot in 0..2 {
        let res = resolve(&state, BattleAction::use_skill(slot), &config);
        assert!(matches!(res.rejection(), Some(ActionError::PassiveSkill(_))));
        assert_eq!(res.state.player, state.player);
    }
}

/// A malformed payload gives an empty loadout, not a failure.
#[test]
fn test_malformed_payload_starts_empty() {
    let params = BattleParams::new("Mochi").with_skills("{not json");
    let config = config();
    let catalog = SkillCatalog::standard(&config);

    let start = start_battle(&params, &config, &catalog, 1);

    assert!(start.state.skills.is_empty());
    assert_eq!(start.state.enemy.health, 100);
    let res = resolve(&start.state, BattleAction::use_skill(0), &config);
    assert_eq!(res.rejection(), Some(&ActionError::NoSuchSkill(0)));
}

/// Enemy health comes from the launch parameters.
#[test]
fn test_enemy_health_from_params() {
    let params = BattleParams::from_pairs([("playerName", "Mochi"), ("enemyHealth", "250")]);
    let config = config();
    let start = start_battle(&params, &config, &SkillCatalog::standard(&config), 1);

    assert_eq!(start.state.enemy.health, 250);
    assert_eq!(start.state.enemy.max_health, 250);
    assert_eq!(start.state.enemy.name, "Samurai");
}

// =============================================================================
// Dodge Tests
// =============================================================================

/// Swift's 20% dodge chance negates roughly a fifth of attacks.
#[test]
fn test_dodge_chance_statistics() {
    let mut state = battle(vec![], 100);
    state.player.dodge_chance = 20;

    let attacks = 10_000;
    let mut dodged = 0;
    for _ in 0..attacks {
        state.phase = TurnPhase::EnemyAttack;
        state.player.health = 100;
        let res = resolve_enemy_attack(&state, &config());
        if res.events.contains(&BattleEvent::AttackDodged { guaranteed: false }) {
            dodged += 1;
        }
        state = res.state;
    }

    let rate = f64::from(dodged) / f64::from(attacks);
    assert!((0.17..0.23).contains(&rate), "dodge rate {rate}");
}

/// The same seed and actions replay identically.
#[test]
fn test_seeded_replay() {
    let mut state = battle(vec![], 1_000);
    state.player.dodge_chance = 50;

    let run = |mut s: BattleState| {
        let mut healths = Vec::new();
        for _ in 0..6 {
            s = resolve(&s, BattleAction::Rest, &config()).state;
            healths.push(s.player.health);
        }
        healths
    };

    assert_eq!(run(state.clone()), run(state));
}

/// A prepared dodge always negates the counter, even at 0% dodge chance.
#[test]
fn test_prepared_dodge_always_negates() {
    let mut state = battle(vec![], 100);
    for _ in 0..20 {
        let res = resolve(&state, BattleAction::Dodge, &config());
        assert_eq!(res.state.player.health, 100);
        state = res.state;
    }
    assert_eq!(state.turn, 21);
}

// =============================================================================
// Defeat Tests
// =============================================================================

/// Four unanswered hits of 25 defeat a 100 HP player.
#[test]
fn test_defeat_after_four_hits() {
    let mut state = battle(vec![], 100);
    let mut outcome = None;
    for _ in 0..4 {
        let res = resolve(&state, BattleAction::Rest, &config());
        outcome = res.outcome();
        state = res.state;
    }

    assert_eq!(outcome, Some(BattleOutcome::Defeat));
    assert_eq!(state.player.health, 0);
    assert_eq!(
        resolve(&state, BattleAction::Dodge, &config()).rejection(),
        Some(&ActionError::PlayerDefeated)
    );
}
