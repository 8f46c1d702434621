#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    CycleTheme,
    ToggleFormat,
    ToggleSeconds,
    Resize,
}
