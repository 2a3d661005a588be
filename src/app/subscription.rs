// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo shell.

use super::Message;
use iced::{event, mouse, time, window, Subscription};
use std::time::Duration;

/// Tick interval while a banner is on screen (about 60 Hz).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Routes pointer and window events.
///
/// Pointer events are forwarded regardless of capture status: the banner is
/// drawn from plain containers and never captures input itself.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::CursorMoved(position))
        }
        event::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            Some(Message::ButtonPressed)
        }
        event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::ButtonReleased)
        }
        event::Event::Mouse(mouse::Event::CursorLeft) => Some(Message::CursorLeft),
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    })
}

/// Creates the frame tick, only while a banner needs driving.
pub fn create_tick_subscription(banner_active: bool) -> Subscription<Message> {
    if banner_active {
        time::every(FRAME_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
