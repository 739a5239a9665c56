use eframe::egui::{Event, Key, PointerButton, Pos2, Rect, Ui};
use glam::Vec2;

/// Input of a single field, positions are relative to the field's top left
/// corner.
#[allow(unused_variables)]
pub trait EventHandler {
    fn key_down(&mut self, key: Key) {}

    fn mouse_down(&mut self, button: PointerButton, pos: Vec2) {}
    fn mouse_up(&mut self, button: PointerButton, pos: Vec2) {}

    fn mouse_moved(&mut self, pos: Vec2) {}
}

/// Feeds this frame's input to `handler`.
///
/// Presses only count when they start inside `rect`, motion counts inside
/// `rect` or while a button is down. Releases and keys always get through.
pub fn dispatch<H>(ui: &Ui, rect: Rect, handler: &mut H)
where
    H: EventHandler + ?Sized,
{
    let (events, held) = ui.input(|i| (i.events.clone(), i.pointer.any_down()));
    let local = |pos: Pos2| Vec2::new(pos.x - rect.min.x, pos.y - rect.min.y);

    for event in events {
        match event {
            Event::PointerMoved(pos) if held || rect.contains(pos) => {
                handler.mouse_moved(local(pos));
            }
            Event::PointerButton {
                pos,
                button,
                pressed: true,
                ..
            } if rect.contains(pos) => handler.mouse_down(button, local(pos)),
            Event::PointerButton {
                pos,
                button,
                pressed: false,
                ..
            } => handler.mouse_up(button, local(pos)),
            Event::Key {
                key,
                pressed: true,
                repeat: false,
                ..
            } => handler.key_down(key),
            _ => (),
        }
    }
}
