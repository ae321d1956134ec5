/// Placeholder occupying the slot a dragged card would drop into
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Marker;

impl Marker {
    /// Visual class hosts attach to the rendered placeholder
    pub const CLASS: &'static str = "insert-marker";

    /// Creates an unattached marker. Removing any previous marker is the caller's job.
    pub fn new() -> Self {
        Marker
    }

    pub fn class(&self) -> &'static str {
        Self::CLASS
    }
}

pub fn create_marker() -> Marker {
    Marker::new()
}
