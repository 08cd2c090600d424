//! The user's in-progress selection.

/// What the user currently wants to buy.
///
/// Indices are trusted: the controller only passes indices it has checked
/// against the loaded option lists. Quantity never drops below 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    color_index: usize,
    color_name: String,
    size_index: usize,
    size_name: String,
    quantity: u32,
    active_image: usize,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            color_index: 0,
            color_name: String::new(),
            size_index: 0,
            size_name: String::new(),
            quantity: 1,
            active_image: 1,
        }
    }
}

impl SelectionState {
    /// Create the pre-load defaults.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_color(&mut self, index: usize, name: impl Into<String>) {
        self.color_index = index;
        self.color_name = name.into();
    }

    pub fn set_size(&mut self, index: usize, name: impl Into<String>) {
        self.size_index = index;
        self.size_name = name.into();
    }

    /// Add `delta` to the quantity, clamping at 1. Returns the new quantity.
    pub fn adjust_quantity(&mut self, delta: i64) -> u32 {
        let next = (self.quantity as i64).saturating_add(delta);
        self.quantity = next.clamp(1, u32::MAX as i64) as u32;
        self.quantity
    }

    /// Set the 1-based gallery image identifier.
    pub fn set_active_image(&mut self, index: usize) {
        self.active_image = index;
    }

    pub fn color_index(&self) -> usize {
        self.color_index
    }

    pub fn color_name(&self) -> &str {
        &self.color_name
    }

    pub fn size_index(&self) -> usize {
        self.size_index
    }

    pub fn size_name(&self) -> &str {
        &self.size_name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn active_image(&self) -> usize {
        self.active_image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = SelectionState::new();
        assert_eq!(state.color_index(), 0);
        assert_eq!(state.color_name(), "");
        assert_eq!(state.size_index(), 0);
        assert_eq!(state.quantity(), 1);
        assert_eq!(state.active_image(), 1);
    }

    #[test]
    fn test_set_color_and_size() {
        let mut state = SelectionState::new();
        state.set_color(1, "Blue");
        state.set_size(2, "L");
        assert_eq!((state.color_index(), state.color_name()), (1, "Blue"));
        assert_eq!((state.size_index(), state.size_name()), (2, "L"));
    }

    #[test]
    fn test_quantity_clamps_at_one() {
        for start in [1, 2, 7, 500] {
            let mut state = SelectionState::new();
            state.adjust_quantity(start - 1);
            assert_eq!(state.adjust_quantity(-1000), 1);
        }
    }

    #[test]
    fn test_quantity_steps() {
        let mut state = SelectionState::new();
        assert_eq!(state.adjust_quantity(1), 2);
        assert_eq!(state.adjust_quantity(1), 3);
        assert_eq!(state.adjust_quantity(-1), 2);
    }

    #[test]
    fn test_quantity_saturates() {
        let mut state = SelectionState::new();
        assert_eq!(state.adjust_quantity(i64::MAX), u32::MAX);
        assert_eq!(state.adjust_quantity(i64::MIN), 1);
    }
}
