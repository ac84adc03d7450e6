pub use fixed_map::Key;

/// The linguistic levels shared by every variable in the controller:
/// temperature readings, temperature targets, and heating power all speak
/// in these three terms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Key)]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Low, Level::Medium, Level::High];
}
