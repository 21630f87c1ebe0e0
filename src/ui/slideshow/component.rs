// SPDX-License-Identifier: MPL-2.0
//! Slideshow component: owns the navigator and turns its schedules into
//! delayed Iced tasks.

use crate::comic::PanelRecord;
use crate::i18n::fluent::I18n;
use crate::slideshow::{Command, Key, Navigator, Outcome, Schedule, TimerToken, Timing};
use iced::{event, keyboard, window, Element, Task};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub enum Message {
    NextPressed,
    PreviousPressed,
    ClosePressed,
    /// Press on the dimmed area around the content card.
    BackdropPressed,
    RawEvent {
        window: window::Id,
        event: event::Event,
    },
    TimerElapsed(TimerToken),
}

/// What the host must do after a slideshow message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Close,
    ReachedEnd,
}

/// Slideshow surface state. Holds no navigator when there is nothing to show.
#[derive(Debug, Default)]
pub struct State {
    navigator: Option<Navigator>,
}

impl State {
    /// Mounts a navigator over `panels` and schedules its reveal.
    pub fn mount(panels: impl Into<Arc<[PanelRecord]>>, timing: Timing) -> (Self, Task<Message>) {
        let (state, schedule) = Self::mount_navigator(panels, timing);
        (state, schedule.map_or_else(Task::none, delayed))
    }

    /// Same as [`State::mount`], handing back the raw reveal schedule.
    pub(crate) fn mount_navigator(
        panels: impl Into<Arc<[PanelRecord]>>,
        timing: Timing,
    ) -> (Self, Option<Schedule>) {
        match Navigator::mount(panels, timing) {
            Some((navigator, schedule)) => (
                Self {
                    navigator: Some(navigator),
                },
                Some(schedule),
            ),
            None => (Self::default(), None),
        }
    }

    #[must_use]
    pub fn navigator(&self) -> Option<&Navigator> {
        self.navigator.as_ref()
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.navigator.is_some()
    }

    /// Drops the navigator. Timers still in flight complete into nothing.
    pub fn unmount(&mut self) {
        if let Some(mut navigator) = self.navigator.take() {
            navigator.teardown();
        }
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        let (effect, schedule) = self.update(message);
        (effect, schedule.map_or_else(Task::none, delayed))
    }

    /// Applies `message` and returns the delay to honor, if any, without
    /// wrapping it in a task.
    pub(crate) fn update(&mut self, message: Message) -> (Effect, Option<Schedule>) {
        let Some(navigator) = self.navigator.as_mut() else {
            return (Effect::None, None);
        };

        let outcome = match message {
            Message::NextPressed => navigator.apply(Command::Advance),
            Message::PreviousPressed => navigator.apply(Command::Retreat),
            Message::ClosePressed | Message::BackdropPressed => navigator.apply(Command::Close),
            Message::RawEvent { event, .. } => match event {
                event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                    navigator.handle_key(key_from_iced(&key))
                }
                _ => Outcome::Ignored,
            },
            Message::TimerElapsed(token) => {
                navigator.complete(token);
                Outcome::Ignored
            }
        };

        match outcome {
            Outcome::Ignored => (Effect::None, None),
            Outcome::Scheduled(schedule) => (Effect::None, Some(schedule)),
            Outcome::ReachedEnd => (Effect::ReachedEnd, None),
            Outcome::Close => (Effect::Close, None),
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        super::view::view(self.navigator.as_ref(), i18n)
    }
}

fn delayed(schedule: Schedule) -> Task<Message> {
    Task::perform(schedule.elapsed(), Message::TimerElapsed)
}

fn key_from_iced(key: &keyboard::Key) -> Key {
    match key {
        keyboard::Key::Named(keyboard::key::Named::ArrowRight) => Key::ArrowRight,
        keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => Key::ArrowLeft,
        keyboard::Key::Named(keyboard::key::Named::Space) => Key::Space,
        keyboard::Key::Named(keyboard::key::Named::Escape) => Key::Escape,
        _ => Key::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slideshow::{Phase, Position};

    fn panels() -> Vec<PanelRecord> {
        vec![
            PanelRecord::new(1, "one.png", "Harbor").with_dialogue(vec!["Hi".into()]),
            PanelRecord::new(2, "two.png", "Sea"),
        ]
    }

    fn key_event(named: keyboard::key::Named) -> Message {
        Message::RawEvent {
            window: window::Id::unique(),
            event: event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(named),
                modified_key: keyboard::Key::Named(named),
                physical_key: keyboard::key::Physical::Unidentified(
                    keyboard::key::NativeCode::Unidentified,
                ),
                location: keyboard::Location::Standard,
                modifiers: keyboard::Modifiers::default(),
                text: None,
                repeat: false,
            }),
        }
    }

    /// Mounts and fires the reveal so the slideshow accepts input.
    fn revealed() -> State {
        let (mut state, schedule) = State::mount_navigator(panels(), Timing::default());
        let token = schedule.expect("reveal scheduled").token;
        let _ = state.update(Message::TimerElapsed(token));
        state
    }

    fn position(state: &State) -> Position {
        state.navigator().expect("mounted").position()
    }

    /// Sends `message` and lands the transition it schedules.
    fn step(state: &mut State, message: Message) -> Effect {
        let (effect, schedule) = state.update(message);
        if let Some(schedule) = schedule {
            let _ = state.update(Message::TimerElapsed(schedule.token));
        }
        effect
    }

    #[test]
    fn empty_comic_mounts_nothing() {
        let (mut state, schedule) = State::mount_navigator(Vec::<PanelRecord>::new(), Timing::default());
        assert!(!state.is_mounted());
        assert!(schedule.is_none());
        assert_eq!(state.update(Message::NextPressed), (Effect::None, None));
    }

    #[test]
    fn input_before_reveal_is_dropped() {
        let (mut state, _) = State::mount_navigator(panels(), Timing::default());
        let (effect, schedule) = state.update(key_event(keyboard::key::Named::ArrowRight));
        assert_eq!(effect, Effect::None);
        assert!(schedule.is_none());
        assert_eq!(position(&state), Position::new(0, 0));
    }

    #[test]
    fn keys_and_buttons_navigate() {
        let mut state = revealed();
        step(&mut state, key_event(keyboard::key::Named::ArrowRight));
        assert_eq!(position(&state), Position::new(0, 1));
        step(&mut state, Message::NextPressed);
        assert_eq!(position(&state), Position::new(0, 2));
        step(&mut state, key_event(keyboard::key::Named::Space));
        assert_eq!(position(&state), Position::new(1, 0));
        step(&mut state, Message::PreviousPressed);
        assert_eq!(position(&state), Position::new(0, 2));
        step(&mut state, key_event(keyboard::key::Named::ArrowLeft));
        assert_eq!(position(&state), Position::new(0, 1));
    }

    #[test]
    fn transition_waits_for_timer() {
        let mut state = revealed();
        let (_, schedule) = state.update(Message::NextPressed);
        let schedule = schedule.expect("transition scheduled");
        assert_eq!(schedule.delay, Timing::default().transition.as_duration());
        assert_eq!(position(&state), Position::new(0, 0));

        // A second press during the transition schedules nothing.
        assert_eq!(state.update(Message::NextPressed), (Effect::None, None));

        let _ = state.update(Message::TimerElapsed(schedule.token));
        assert_eq!(position(&state), Position::new(0, 1));
    }

    #[test]
    fn escape_backdrop_and_close_button_close() {
        let mut state = revealed();
        assert_eq!(step(&mut state, key_event(keyboard::key::Named::Escape)), Effect::Close);
        assert_eq!(step(&mut state, Message::BackdropPressed), Effect::Close);
        assert_eq!(step(&mut state, Message::ClosePressed), Effect::Close);
        assert_eq!(position(&state), Position::new(0, 0));
    }

    #[test]
    fn close_works_while_revealing() {
        let (mut state, _) = State::mount_navigator(panels(), Timing::default());
        assert_eq!(state.update(Message::BackdropPressed).0, Effect::Close);
    }

    #[test]
    fn last_step_reports_end_once() {
        let mut state = revealed();
        for _ in 0..4 {
            assert_eq!(step(&mut state, Message::NextPressed), Effect::None);
        }
        assert_eq!(position(&state), Position::new(1, 1));
        assert_eq!(step(&mut state, Message::NextPressed), Effect::ReachedEnd);
        assert_eq!(step(&mut state, Message::NextPressed), Effect::None);
        assert_eq!(
            state.navigator().map(Navigator::phase),
            Some(Phase::Ended)
        );
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut state = revealed();
        assert_eq!(
            state.update(key_event(keyboard::key::Named::Enter)),
            (Effect::None, None)
        );
    }

    #[test]
    fn timer_after_unmount_is_harmless() {
        let mut state = revealed();
        let (_, schedule) = state.update(Message::NextPressed);
        state.unmount();
        let token = schedule.expect("scheduled").token;
        assert_eq!(state.update(Message::TimerElapsed(token)), (Effect::None, None));
        assert!(!state.is_mounted());
    }

    #[test]
    fn stale_timer_from_previous_mount_is_ignored() {
        let mut first = revealed();
        let (_, schedule) = first.update(Message::NextPressed);
        first.unmount();

        let mut second = revealed();
        let _ = second.update(Message::TimerElapsed(schedule.expect("scheduled").token));
        assert_eq!(position(&second), Position::new(0, 0));
        assert_eq!(
            second.navigator().map(Navigator::phase),
            Some(Phase::Ready)
        );
    }

    #[test]
    fn named_keys_convert() {
        use keyboard::key::Named;
        assert_eq!(key_from_iced(&keyboard::Key::Named(Named::ArrowRight)), Key::ArrowRight);
        assert_eq!(key_from_iced(&keyboard::Key::Named(Named::ArrowLeft)), Key::ArrowLeft);
        assert_eq!(key_from_iced(&keyboard::Key::Named(Named::Space)), Key::Space);
        assert_eq!(key_from_iced(&keyboard::Key::Named(Named::Escape)), Key::Escape);
        assert_eq!(key_from_iced(&keyboard::Key::Character("a".into())), Key::Other);
    }
}
