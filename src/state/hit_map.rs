//! Screen regions for mouse event handling
//!
//! The renderer records where each interactive element landed on the last
//! frame. Mouse handling then looks positions up here instead of re-deriving
//! the layout.
//!
//! Later records sit on top of earlier ones, so overlays such as an open
//! dropdown list must be recorded after the widgets they cover.

use super::forms::LoanField;
use ratatui::layout::{Position, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// The input box of a field (a dropdown's trigger for categorical fields)
    Field(LoanField),
    /// The open option list of a dropdown
    DropdownList(LoanField),
    SubmitButton,
    ResultPanel,
}

#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn record(&mut self, area: Rect, target: HitTarget) {
        self.regions.push((area, target));
    }

    /// Topmost target at `position`
    pub fn target_at(&self, position: Position) -> Option<HitTarget> {
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(position))
            .map(|(_, target)| *target)
    }

    #[cfg(test)]
    pub fn area_of(&self, target: HitTarget) -> Option<Rect> {
        self.regions
            .iter()
            .find(|(_, t)| *t == target)
            .map(|(area, _)| *area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_map_hits_nothing() {
        assert_eq!(HitMap::default().target_at(Position::new(0, 0)), None);
    }

    #[test]
    fn test_finds_recorded_region() {
        let mut map = HitMap::default();
        map.record(Rect::new(0, 0, 10, 3), HitTarget::Field(LoanField::LoanAmount));
        map.record(Rect::new(0, 3, 10, 3), HitTarget::SubmitButton);
        assert_eq!(
            map.target_at(Position::new(5, 1)),
            Some(HitTarget::Field(LoanField::LoanAmount))
        );
        assert_eq!(
            map.target_at(Position::new(5, 4)),
            Some(HitTarget::SubmitButton)
        );
        assert_eq!(map.target_at(Position::new(11, 1)), None);
    }

    #[test]
    fn test_later_records_win() {
        let mut map = HitMap::default();
        map.record(Rect::new(0, 0, 10, 10), HitTarget::Field(LoanField::LoanTerm));
        map.record(
            Rect::new(0, 2, 10, 4),
            HitTarget::DropdownList(LoanField::Education),
        );
        assert_eq!(
            map.target_at(Position::new(1, 3)),
            Some(HitTarget::DropdownList(LoanField::Education))
        );
        assert_eq!(
            map.target_at(Position::new(1, 8)),
            Some(HitTarget::Field(LoanField::LoanTerm))
        );
    }

    #[test]
    fn test_clear() {
        let mut map = HitMap::default();
        map.record(Rect::new(0, 0, 1, 1), HitTarget::ResultPanel);
        map.clear();
        assert_eq!(map.area_of(HitTarget::ResultPanel), None);
    }
}
