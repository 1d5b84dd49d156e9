use crate::log;

use super::game_state::TileMatchGameState;
use super::session_rng::SessionRng;
use super::settings::DifficultySettings;
use super::types::{GameEvent, TileId};

pub type CompletionCallback = Box<dyn FnMut(u32)>;

/// Host-facing wrapper around one play session. The host feeds taps in
/// and receives events back; when the session reaches a terminal state
/// the completion callback fires exactly once with the final score.
pub struct TileMatchSession {
    game_state: TileMatchGameState,
    rng: SessionRng,
    seed: u64,
    on_complete: Option<CompletionCallback>,
    completion_reported: bool,
}

impl TileMatchSession {
    pub fn create(settings: DifficultySettings, seed: u64) -> Result<Self, String> {
        let mut rng = SessionRng::new(seed);
        let game_state = TileMatchGameState::new(settings, &mut rng)?;
        log!(
            "Session started: {} tiles, layout {:?}, seed {}",
            settings.tile_count,
            settings.layout,
            seed
        );
        Ok(Self {
            game_state,
            rng,
            seed,
            on_complete: None,
            completion_reported: false,
        })
    }

    pub fn set_completion_callback(&mut self, callback: impl FnMut(u32) + 'static) {
        self.on_complete = Some(Box::new(callback));
    }

    pub fn select_tile(&mut self, id: TileId) -> Vec<GameEvent> {
        let events = self.game_state.select_tile(id);
        self.report_if_finished(&events);
        events
    }

    pub fn undo(&mut self) -> Vec<GameEvent> {
        self.game_state.undo()
    }

    pub fn hint(&mut self) -> Vec<GameEvent> {
        self.game_state.hint()
    }

    pub fn restart(&mut self) -> Result<(), String> {
        self.game_state.restart(&mut self.rng)?;
        self.completion_reported = false;
        log!("Session restarted, seed {}", self.seed);
        Ok(())
    }

    pub fn game_state(&self) -> &TileMatchGameState {
        &self.game_state
    }

    fn report_if_finished(&mut self, events: &[GameEvent]) {
        if self.completion_reported {
            return;
        }
        for event in events {
            if let GameEvent::GameOver {
                status,
                final_score,
            } = event
            {
                self.completion_reported = true;
                log!("Game over: {:?}, final score {}", status, final_score);
                if let Some(callback) = self.on_complete.as_mut() {
                    callback(*final_score);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::AgeGroup;
    use crate::types::{GameStatus, POINTS_PER_TILE};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn preschool_session(seed: u64) -> TileMatchSession {
        let settings = DifficultySettings::for_age_group(AgeGroup::Preschool);
        TileMatchSession::create(settings, seed).unwrap()
    }

    fn play_to_the_end(session: &mut TileMatchSession) {
        while session.game_state().status() == GameStatus::InProgress {
            let (first, second) = session.game_state().board().find_any_match().unwrap();
            session.select_tile(first);
            session.select_tile(second);
        }
    }

    #[test]
    fn test_completion_callback_fires_once_with_final_score() {
        let mut session = preschool_session(4);
        let reported = Rc::new(RefCell::new(Vec::new()));
        let sink = reported.clone();
        session.set_completion_callback(move |score| sink.borrow_mut().push(score));

        play_to_the_end(&mut session);

        assert_eq!(*reported.borrow(), vec![12 * POINTS_PER_TILE]);

        // Taps after the terminal state must not re-report.
        let id = session.game_state().board().tiles()[0].id;
        session.select_tile(id);
        assert_eq!(reported.borrow().len(), 1);
    }

    #[test]
    fn test_restart_allows_a_second_report() {
        let mut session = preschool_session(4);
        let reported = Rc::new(RefCell::new(Vec::new()));
        let sink = reported.clone();
        session.set_completion_callback(move |score| sink.borrow_mut().push(score));

        play_to_the_end(&mut session);
        session.restart().unwrap();
        play_to_the_end(&mut session);

        assert_eq!(reported.borrow().len(), 2);
    }

    #[test]
    fn test_session_without_callback_still_finishes() {
        let mut session = preschool_session(6);

        play_to_the_end(&mut session);

        assert_eq!(session.game_state().status(), GameStatus::Won);
        assert_eq!(session.game_state().final_score(), 12 * POINTS_PER_TILE);
    }
}
