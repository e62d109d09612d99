//! Battle flow: turn resolution, level transitions, and the live session.
//!
//! `resolver` and `level` are pure functions over `BattleState`. The
//! `session` wraps them with real-time concerns: the one-second timers
//! and the presentation timeline that stages each exchange on screen.

pub mod clock;
pub mod error;
pub mod event;
pub mod level;
pub mod params;
pub mod resolver;
pub mod session;
pub mod timeline;

pub use clock::{IntervalTimer, TimerStatus};
pub use error::ActionError;
pub use event::{modal_choices, BattleEvent, ModalChoice};
pub use level::{enemy_for_level, next_level, retry, LevelError};
pub use params::{BattleParams, Difficulty};
pub use resolver::{resolve, resolve_enemy_attack, resolve_player_action, start_battle, Resolution};
pub use session::BattleSession;
pub use timeline::{presentation_delay, Timeline};
