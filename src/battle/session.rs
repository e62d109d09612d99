//! A live battle screen.
//!
//! `BattleSession` owns the current state and drives it in real time: the
//! host loop feeds elapsed time into `advance`, which ticks cooldowns and
//! the turn timer once per second and releases presentation events as
//! they come due. While an exchange is still playing out the session
//! refuses new actions.

use std::time::Duration;

use log::{debug, info};

use super::clock::{IntervalTimer, TimerStatus};
use super::error::ActionError;
use super::event::BattleEvent;
use super::level::{self, LevelError};
use super::params::BattleParams;
use super::resolver::{resolve, start_battle, Resolution};
use super::timeline::Timeline;
use crate::core::{BattleAction, BattleConfig, BattleOutcome, BattleState, ConfigError};
use crate::skills::SkillCatalog;

/// One battle screen, from mount to teardown.
#[derive(Clone, Debug)]
pub struct BattleSession {
    config: BattleConfig,
    catalog: SkillCatalog,
    params: BattleParams,
    state: BattleState,
    timeline: Timeline,
    cooldown_timer: IntervalTimer,
    turn_timer: IntervalTimer,
    /// Outcome modal currently shown, if any.
    modal: Option<BattleOutcome>,
    torn_down: bool,
}

impl BattleSession {
    /// Mount a battle with the standard skill catalog.
    pub fn new(params: BattleParams, config: BattleConfig, seed: u64) -> Result<Self, ConfigError> {
        let catalog = SkillCatalog::standard(&config);
        Self::with_catalog(params, config, catalog, seed)
    }

    /// Mount a battle against a custom catalog.
    pub fn with_catalog(
        params: BattleParams,
        config: BattleConfig,
        catalog: SkillCatalog,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let Resolution { state, events } = start_battle(&params, &config, &catalog, seed);

        let mut timeline = Timeline::new();
        timeline.schedule(events, &config.delays);

        Ok(Self {
            config,
            catalog,
            params,
            state,
            timeline,
            cooldown_timer: IntervalTimer::every_second(),
            turn_timer: IntervalTimer::every_second(),
            modal: None,
            torn_down: false,
        })
    }

    /// Submit a player action.
    ///
    /// The exchange resolves immediately; its events are queued for
    /// presentation. Rejections leave their message in the combat log.
    pub fn submit(&mut self, action: BattleAction) -> Result<(), ActionError> {
        if self.torn_down {
            return Err(ActionError::BattleOver);
        }
        if self.timeline.is_busy() {
            debug!("{action:?} refused while an exchange is playing out");
            return Err(ActionError::ExchangeInProgress);
        }

        let Resolution { state, events } = resolve(&self.state, action, &self.config);
        self.state = state;

        if let Some(BattleEvent::ActionRejected(err)) = events.first() {
            return Err(err.clone());
        }

        self.turn_timer.restart();
        self.timeline.schedule(events, &self.config.delays);
        Ok(())
    }

    /// Feed elapsed wall time. Returns the events now due for display.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<BattleEvent> {
        if self.torn_down {
            return Vec::new();
        }

        for _ in 0..self.cooldown_timer.advance(elapsed) {
            self.state.tick_cooldowns();
        }

        for _ in 0..self.turn_timer.advance(elapsed) {
            self.state.tick_turn_timer();
        }

        let due = self.timeline.advance(elapsed);
        self.on_shown(&due);
        due
    }

    /// Release every queued event at once.
    pub fn skip_presentation(&mut self) -> Vec<BattleEvent> {
        let due = self.timeline.flush();
        self.on_shown(&due);
        due
    }

    /// Bookkeeping for events that just reached the screen.
    fn on_shown(&mut self, events: &[BattleEvent]) {
        // The countdown restarts when control visibly returns.
        if events.iter().any(|e| matches!(e, BattleEvent::TurnStarted { .. })) {
            self.state.turn_timer = self.config.turn_timer_secs;
            self.turn_timer.restart();
        }
        if let Some(outcome) = events.iter().find_map(BattleEvent::outcome) {
            info!("showing {outcome:?} modal at level {}", self.state.level);
            self.modal = Some(outcome);
        }
    }

    /// Pause the turn countdown. Cooldowns keep running.
    pub fn pause(&mut self) {
        self.turn_timer.pause();
    }

    pub fn resume(&mut self) {
        self.turn_timer.resume();
    }

    /// Move on to the next level after a victory.
    pub fn next_level(&mut self) -> Result<(), LevelError> {
        let Resolution { state, events } = level::next_level(&self.state, &self.config)?;
        self.begin_encounter(state, events);
        Ok(())
    }

    /// Start over from level 1.
    pub fn retry(&mut self) {
        let Resolution { state, events } = level::retry(&self.state, &self.config);
        self.begin_encounter(state, events);
    }

    fn begin_encounter(&mut self, state: BattleState, events: Vec<BattleEvent>) {
        self.state = state;
        self.modal = None;
        self.timeline.clear();
        self.timeline.schedule(events, &self.config.delays);
        self.turn_timer.restart();
    }

    /// Unmount: stop both timers and drop pending presentation.
    pub fn teardown(&mut self) {
        self.cooldown_timer.cancel();
        self.turn_timer.cancel();
        self.timeline.clear();
        self.torn_down = true;
        info!("battle session torn down at level {}", self.state.level);
    }

    #[must_use]
    pub fn state(&self) -> &BattleState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &SkillCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn params(&self) -> &BattleParams {
        &self.params
    }

    #[must_use]
    pub fn modal(&self) -> Option<BattleOutcome> {
        self.modal
    }

    /// True while an exchange is still playing out on screen.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.timeline.is_busy()
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.turn_timer.status() == TimerStatus::Paused
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRUST: &str = r#"[{"name": "Thrust", "damage": 30, "cooldown": 3}]"#;

    fn session(enemy_health: &str) -> BattleSession {
        let params = BattleParams::new("Mochi")
            .with_skills(THRUST)
            .with_enemy_health(enemy_health);
        BattleSession::new(params, BattleConfig::default(), 7).unwrap()
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = BattleConfig {
            max_mana: 0,
            ..BattleConfig::default()
        };
        assert!(BattleSession::new(BattleParams::new("Mochi"), config, 1).is_err());
    }

    #[test]
    fn test_turn_lock_during_exchange() {
        let mut session = session("100");
        session.submit(BattleAction::use_skill(0)).unwrap();

        assert!(session.is_busy());
        assert_eq!(session.submit(BattleAction::Rest), Err(ActionError::ExchangeInProgress));

        session.advance(Duration::from_millis(2_000));
        assert!(!session.is_busy());
        assert!(session.submit(BattleAction::Rest).is_ok());
    }

    #[test]
    fn test_rejection_is_returned_and_logged() {
        let mut session = session("100");
        session.submit(BattleAction::use_skill(0)).unwrap();
        session.advance(Duration::from_millis(2_000));

        let err = session.submit(BattleAction::use_skill(0)).unwrap_err();
        assert!(matches!(err, ActionError::OnCooldown { .. }));
        assert_eq!(session.state().log.last(), Some(err.to_string().as_str()));
        assert!(!session.is_busy());
    }

    #[test]
    fn test_victory_opens_modal() {
        let mut session = session("20");
        session.submit(BattleAction::use_skill(0)).unwrap();
        assert_eq!(session.modal(), None);

        let shown = session.advance(Duration::ZERO);
        assert_eq!(shown.last(), Some(&BattleEvent::Victory));
        assert_eq!(session.modal(), Some(BattleOutcome::Victory));

        session.next_level().unwrap();
        assert_eq!(session.modal(), None);
        assert_eq!(session.state().level, 2);
        assert!(session.state().can_act());
    }

    #[test]
    fn test_next_level_refused_mid_battle() {
        let mut session = session("100");
        assert_eq!(session.next_level(), Err(LevelError::NotWon));
    }

    #[test]
    fn test_teardown_stops_everything() {
        let mut session = session("100");
        session.submit(BattleAction::use_skill(0)).unwrap();
        session.teardown();

        assert!(session.is_torn_down());
        assert!(session.advance(Duration::from_secs(10)).is_empty());
        assert_eq!(session.state().cooldown_remaining("Thrust"), 3);
        assert_eq!(session.submit(BattleAction::Rest), Err(ActionError::BattleOver));
    }
}
