// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard shortcuts and window resizes come from the native event stream;
//! the tick only runs while toasts are on screen or queued.

use super::section::SectionId;
use super::Message;
use iced::{event, keyboard, time, window, Subscription};
use std::time::Duration;

/// Interval between notification ticks.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Routes native events the shell cares about.
///
/// Keys already captured by a widget (typing in a text input) are ignored so
/// shortcuts never fire while the user types.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => {
            Some(Message::WindowResized(size.width))
        }
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            match status {
                event::Status::Ignored => shortcut(&key, modifiers),
                event::Status::Captured => None,
            }
        }
        _ => None,
    })
}

/// Maps a key press to a shell message.
///
/// - `Ctrl+1` … `Ctrl+4`: jump to the section at that position
/// - `F5`, `Ctrl+R`: reload the active section from the session store
pub fn shortcut(key: &keyboard::Key, modifiers: keyboard::Modifiers) -> Option<Message> {
    match key {
        keyboard::Key::Named(keyboard::key::Named::F5) => Some(Message::Reload),
        keyboard::Key::Character(c) if modifiers.command() && !modifiers.alt() => {
            match c.as_str() {
                "r" | "R" => Some(Message::Reload),
                digit => digit
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|index| SectionId::ALL.get(index).copied())
                    .map(Message::Navigate),
            }
        }
        _ => None,
    }
}

/// Creates the periodic tick used for toast auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::{key::Named, Key, Modifiers};

    fn char_key(c: &str) -> Key {
        Key::Character(c.into())
    }

    #[test]
    fn ctrl_digits_select_sections_in_order() {
        for (index, section) in SectionId::ALL.into_iter().enumerate() {
            let digit = (index + 1).to_string();
            match shortcut(&char_key(&digit), Modifiers::COMMAND) {
                Some(Message::Navigate(target)) => assert_eq!(target, section),
                other => panic!("expected navigation for {digit}, got {other:?}"),
            }
        }
    }

    #[test]
    fn out_of_range_digits_are_ignored() {
        assert!(shortcut(&char_key("0"), Modifiers::COMMAND).is_none());
        assert!(shortcut(&char_key("5"), Modifiers::COMMAND).is_none());
    }

    #[test]
    fn digits_without_modifier_are_ignored() {
        assert!(shortcut(&char_key("1"), Modifiers::empty()).is_none());
    }

    #[test]
    fn reload_shortcuts() {
        assert!(matches!(
            shortcut(&Key::Named(Named::F5), Modifiers::empty()),
            Some(Message::Reload)
        ));
        assert!(matches!(
            shortcut(&char_key("r"), Modifiers::COMMAND),
            Some(Message::Reload)
        ));
        assert!(shortcut(&char_key("r"), Modifiers::empty()).is_none());
    }
}
