#[derive(Debug, Clone)]
pub enum Event {
    /// Periodic refresh tick
    Tick,
    Input(InputEvent),
}

#[derive(Debug, Clone)]
pub enum InputEvent {
    Key(crossterm::event::KeyEvent),
    Resize,
    /// Terminal input is no longer readable
    Closed,
}
