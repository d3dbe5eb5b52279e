//! Box catalog and pricing.
//!
//! Single source of truth for box sizes, piece multipliers and peso prices.
//! Intake, deletion restore, the production summary and the export all go
//! through these functions so a box is always worth the same number of
//! pieces everywhere.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxKind {
    Box4,
    Box6,
    Box12,
}

impl BoxKind {
    pub const ALL: [BoxKind; 3] = [BoxKind::Box4, BoxKind::Box6, BoxKind::Box12];

    /// Price per box in whole pesos.
    pub fn unit_price(&self) -> i64 {
        match self {
            BoxKind::Box4 => 285,
            BoxKind::Box6 => 425,
            BoxKind::Box12 => 845,
        }
    }

    /// Pieces contained in one box.
    pub fn pieces(&self) -> i32 {
        match self {
            BoxKind::Box4 => 4,
            BoxKind::Box6 => 6,
            BoxKind::Box12 => 12,
        }
    }

    /// Per-customer order limit for this box size.
    pub fn max_per_order(&self) -> i32 {
        match self {
            BoxKind::Box4 => 2,
            BoxKind::Box6 => 2,
            BoxKind::Box12 => 1,
        }
    }

    pub fn field(&self) -> &'static str {
        match self {
            BoxKind::Box4 => "box_of_4",
            BoxKind::Box6 => "box_of_6",
            BoxKind::Box12 => "box_of_12",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BoxKind::Box4 => "Box of 4",
            BoxKind::Box6 => "Box of 6",
            BoxKind::Box12 => "Box of 12",
        }
    }
}

/// How many boxes of each size one order asks for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxSelection {
    pub box_of_4: i32,
    pub box_of_6: i32,
    pub box_of_12: i32,
}

impl BoxSelection {
    pub fn qty(&self, kind: BoxKind) -> i32 {
        match kind {
            BoxKind::Box4 => self.box_of_4,
            BoxKind::Box6 => self.box_of_6,
            BoxKind::Box12 => self.box_of_12,
        }
    }

    pub fn is_empty(&self) -> bool {
        BoxKind::ALL.iter().all(|k| self.qty(*k) == 0)
    }

    /// Total sellable pieces this selection represents. The intake decrement
    /// and the deletion restore must both use this number.
    pub fn pieces(&self) -> i32 {
        BoxKind::ALL.iter().map(|k| self.qty(*k) * k.pieces()).sum()
    }

    pub fn total_price(&self) -> i64 {
        BoxKind::ALL
            .iter()
            .map(|k| self.qty(*k) as i64 * k.unit_price())
            .sum()
    }
}

/// Downpayment in whole pesos, rounded to the nearest peso.
pub fn downpayment(total_price: i64, rate: f64) -> i64 {
    (total_price as f64 * rate).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(b4: i32, b6: i32, b12: i32) -> BoxSelection {
        BoxSelection {
            box_of_4: b4,
            box_of_6: b6,
            box_of_12: b12,
        }
    }

    #[test]
    fn total_price_sums_per_box_prices() {
        assert_eq!(selection(1, 0, 0).total_price(), 285);
        assert_eq!(selection(0, 1, 0).total_price(), 425);
        assert_eq!(selection(0, 0, 1).total_price(), 845);
        assert_eq!(selection(2, 2, 1).total_price(), 2 * 285 + 2 * 425 + 845);
    }

    #[test]
    fn pieces_sums_per_box_multipliers() {
        assert_eq!(selection(1, 1, 0).pieces(), 10);
        assert_eq!(selection(2, 0, 1).pieces(), 20);
        assert_eq!(selection(0, 0, 0).pieces(), 0);
    }

    #[test]
    fn empty_selection_is_empty() {
        assert!(selection(0, 0, 0).is_empty());
        assert!(!selection(0, 1, 0).is_empty());
    }

    #[test]
    fn downpayment_rounds_to_nearest_peso() {
        // 285 * 0.5 = 142.5 rounds up
        assert_eq!(downpayment(285, 0.5), 143);
        assert_eq!(downpayment(425, 0.5), 213);
        assert_eq!(downpayment(850, 0.5), 425);
        assert_eq!(downpayment(0, 0.5), 0);
    }

    #[test]
    fn downpayment_full_rate_is_total() {
        assert_eq!(downpayment(1555, 1.0), 1555);
    }
}
