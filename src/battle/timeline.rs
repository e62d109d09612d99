//! Presentation timeline.
//!
//! Resolution is instantaneous; the screen is not. The timeline holds the
//! events of a resolved exchange and releases each one after its staging
//! delay, so the UI shows the hit when the projectile lands and the
//! counter after the enemy's wind-up. It never changes what happened.

use std::collections::VecDeque;
use std::time::Duration;

use super::event::BattleEvent;
use crate::core::PresentationDelays;
use crate::skills::Delivery;

/// Delay before an event is shown, given whether the previous player
/// move was staged (projectile or slash).
#[must_use]
pub fn presentation_delay(event: &BattleEvent, delays: &PresentationDelays, after_staged_move: bool) -> Duration {
    let ms = match event {
        BattleEvent::SkillUsed { delivery, .. } => match delivery {
            Delivery::Immediate => 0,
            Delivery::Elemental => delays.elemental_ms,
            Delivery::Choreographed => delays.choreographed_ms,
        },
        BattleEvent::EnemyAttacked { .. } | BattleEvent::AttackDodged { .. } => {
            if after_staged_move {
                delays.pre_counter_ms + delays.enemy_attack_ms
            } else {
                delays.enemy_attack_ms
            }
        }
        _ => 0,
    };
    Duration::from_millis(ms)
}

/// Queue of resolved events waiting to be shown.
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    pending: VecDeque<(Duration, BattleEvent)>,
    now: Duration,
}

impl Timeline {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue events in order, each after the previous one's delay.
    pub fn schedule(&mut self, events: impl IntoIterator<Item = BattleEvent>, delays: &PresentationDelays) {
        let mut at = self.pending.back().map_or(self.now, |(due, _)| *due);
        let mut after_staged_move = false;

        for event in events {
            at += presentation_delay(&event, delays, after_staged_move);
            after_staged_move = matches!(
                event,
                BattleEvent::SkillUsed { delivery, .. } if delivery != Delivery::Immediate
            );
            self.pending.push_back((at, event));
        }
    }

    /// Advance the clock and return the events now due, in order.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<BattleEvent> {
        self.now += elapsed;
        let mut due = Vec::new();
        while let Some((at, _)) = self.pending.front() {
            if *at > self.now {
                break;
            }
            if let Some((_, event)) = self.pending.pop_front() {
                due.push(event);
            }
        }
        if self.pending.is_empty() {
            self.now = Duration::ZERO;
        }
        due
    }

    /// Release everything immediately.
    pub fn flush(&mut self) -> Vec<BattleEvent> {
        self.now = Duration::ZERO;
        self.pending.drain(..).map(|(_, event)| event).collect()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
        self.now = Duration::ZERO;
    }

    /// True while an exchange is still playing out, i.e. some queued
    /// event is waiting on its delay. Events already due do not count.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.pending.back().map_or(false, |(due, _)| *due > self.now)
    }

    /// True while any event is queued, due or not.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Time until the last queued event is shown.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.pending
            .back()
            .map_or(Duration::ZERO, |(due, _)| due.saturating_sub(self.now))
    }
}
