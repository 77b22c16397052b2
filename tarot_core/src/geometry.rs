use std::f32::consts::PI;

use crate::spread::Spread;

/// Tarot card ratio, width over height.
pub const CARD_ASPECT: f32 = 100.0 / 171.0;

/// Every device-class sizing constant, resolved once at startup and passed
/// into the layout engine instead of re-branching on device class ad hoc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizingProfile {
    pub compact: bool,
    /// Virtual canvas the engine computes in; the presentation layer scales
    /// slots from this space into terminal cells.
    pub canvas_w: f32,
    pub canvas_h: f32,
    pub margin: f32,
    /// Vertical band reserved above grids for the header/labels.
    pub header_band: f32,
    /// Top offset of the default (non-full-deck) grid.
    pub grid_top: f32,
    pub full_deck_rows: usize,
    pub full_deck_top: f32,
    /// Circle radius for the Year spread is canvas_w / this divisor.
    pub year_radius_divisor: f32,
    pub year_card_height: f32,
    pub five_cross_card_height: f32,
    pub celtic_card_height: f32,
    pub celtic_middle_offset: f32,
    pub enlarged_height_frac: f32,
}

impl SizingProfile {
    pub fn new(compact: bool) -> Self {
        let margin = if compact { 12.0 } else { 25.0 };
        let canvas_h = if compact { 640.0 } else { 800.0 };
        Self {
            compact,
            canvas_w: if compact { 360.0 } else { 1200.0 },
            canvas_h,
            margin,
            header_band: if compact { 150.0 } else { 200.0 },
            grid_top: if compact { 70.0 } else { 100.0 },
            full_deck_rows: if compact { 10 } else { 6 },
            full_deck_top: if compact { margin * 3.0 } else { margin * 2.0 },
            year_radius_divisor: if compact { 3.0 } else { 5.0 },
            year_card_height: if compact { 90.0 } else { canvas_h / 6.0 },
            five_cross_card_height: if compact { 170.0 } else { 260.0 },
            celtic_card_height: if compact { 140.0 } else { 220.0 },
            celtic_middle_offset: 50.0,
            enlarged_height_frac: if compact { 0.8 } else { 0.9 },
        }
    }
}

/// Target geometry for one dealt card. `x`/`y` are the center of the slot;
/// `w`/`h` are the upright card dimensions even when `rotated`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    /// The slot draws its card turned 90 degrees (Celtic Cross challenge).
    pub rotated: bool,
}

impl Slot {
    fn upright(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h, rotated: false }
    }

    /// On-screen extent, accounting for rotation.
    pub fn extent(&self) -> (f32, f32) {
        if self.rotated {
            (self.h, self.w)
        } else {
            (self.w, self.h)
        }
    }

    /// Whether a canvas-space point falls inside the slot.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        let (w, h) = self.extent();
        px > self.x - w / 2.0 && px < self.x + w / 2.0 && py > self.y - h / 2.0 && py < self.y + h / 2.0
    }
}

/// Largest aspect-preserving card size that fits a rows x cols grid inside
/// the viewport, minus margins and the reserved header band.
pub fn fit_card_to_grid(
    rows: usize,
    cols: usize,
    viewport_w: f32,
    viewport_h: f32,
    profile: &SizingProfile,
) -> (f32, f32) {
    let margin = profile.margin;
    let available_w = viewport_w - (cols as f32 + 1.0) * margin;
    let card_max_w = available_w / cols as f32;

    let available_h = viewport_h - profile.header_band - (rows as f32 + 1.0) * margin;
    let card_max_h = available_h / rows as f32;

    if card_max_w / card_max_h > CARD_ASPECT {
        // Height-bound cell: the card fills the cell height.
        (card_max_h * CARD_ASPECT, card_max_h)
    } else {
        (card_max_w, card_max_w / CARD_ASPECT)
    }
}

/// Per-card target position and size for a spread. Pure given its inputs;
/// returns exactly `spread.position_count()` slots.
pub fn compute_positions(
    spread: Spread,
    viewport_w: f32,
    viewport_h: f32,
    profile: &SizingProfile,
) -> Vec<Slot> {
    let count = spread.position_count();
    let margin = profile.margin;
    let centre_x = viewport_w / 2.0;
    let centre_y = viewport_h / 2.0;

    match spread {
        Spread::SingleCard => {
            let h = viewport_h * 0.9;
            vec![Slot::upright(centre_x, centre_y, h * CARD_ASPECT, h)]
        }

        Spread::FullDeck => {
            let rows = profile.full_deck_rows;
            let cols = count.div_ceil(rows);
            let (w, h) = fit_card_to_grid(rows, cols, viewport_w, viewport_h, profile);
            grid_slots(count, cols, w, h, margin, profile.full_deck_top + margin)
        }

        Spread::Year => {
            let radius = viewport_w / profile.year_radius_divisor;
            let h = profile.year_card_height;
            let w = h * CARD_ASPECT;
            let mut slots = Vec::with_capacity(count);
            slots.push(Slot::upright(centre_x, centre_y, w, h));
            // Twelve months on a circle, starting at the top, clockwise.
            for i in 1..count {
                let angle = -PI / 2.0 + 2.0 * PI * (i as f32 - 1.0) / 12.0;
                slots.push(Slot::upright(
                    centre_x + radius * angle.cos(),
                    centre_y + radius * angle.sin(),
                    w,
                    h,
                ));
            }
            slots
        }

        Spread::FiveCardCross => {
            let h = profile.five_cross_card_height;
            let w = h * CARD_ASPECT;
            vec![
                Slot::upright(centre_x, centre_y, w, h),
                Slot::upright(centre_x, centre_y - (h + margin), w, h),
                Slot::upright(centre_x, centre_y + (h + margin), w, h),
                Slot::upright(centre_x - (w + margin), centre_y, w, h),
                Slot::upright(centre_x + (w + margin), centre_y, w, h),
            ]
        }

        Spread::CelticCross => {
            let h = profile.celtic_card_height;
            let w = h * CARD_ASPECT;
            let cx = centre_x - profile.celtic_middle_offset;
            let staff_x = cx + 2.0 * (w + margin);
            let step = h + margin;
            vec![
                Slot::upright(cx, centre_y, w, h),
                // Crossing card, drawn turned over the first.
                Slot { x: cx, y: centre_y, w, h, rotated: true },
                Slot::upright(cx, centre_y + step, w, h),
                Slot::upright(cx - (w + margin), centre_y, w, h),
                Slot::upright(cx, centre_y - step, w, h),
                Slot::upright(cx + (w + margin), centre_y, w, h),
                Slot::upright(staff_x, centre_y - step * 1.5, w, h),
                Slot::upright(staff_x, centre_y - step * 0.5, w, h),
                Slot::upright(staff_x, centre_y + step * 0.5, w, h),
                Slot::upright(staff_x, centre_y + step * 1.5, w, h),
            ]
        }

        Spread::PastPresentFuture | Spread::Star | Spread::Smart => {
            let rows = if count > 3 { 2 } else { 1 };
            let cols = count.div_ceil(rows);
            let (w, h) = fit_card_to_grid(rows, cols, viewport_w, viewport_h, profile);
            grid_slots(count, cols, w, h, margin, profile.grid_top + margin)
        }
    }
}

fn grid_slots(count: usize, cols: usize, w: f32, h: f32, margin: f32, top: f32) -> Vec<Slot> {
    let mut slots = Vec::with_capacity(count);
    for i in 0..count {
        let r = (i / cols) as f32;
        let c = (i % cols) as f32;
        let x = margin + (c + 1.0) * margin + c * w + w / 2.0;
        let y = top + (r + 1.0) * margin + r * h + h / 2.0;
        slots.push(Slot::upright(x, y, w, h));
    }
    slots
}

/// Geometry for the enlarged single-card view.
pub fn enlarged_slot(viewport_w: f32, viewport_h: f32, profile: &SizingProfile) -> Slot {
    let h = viewport_h * profile.enlarged_height_frac;
    Slot::upright(viewport_w / 2.0, viewport_h / 2.0, h * CARD_ASPECT, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profiles() -> [SizingProfile; 2] {
        [SizingProfile::new(true), SizingProfile::new(false)]
    }

    #[test]
    fn test_every_spread_yields_position_count_slots() {
        for profile in profiles() {
            for spread in Spread::ALL {
                let slots = compute_positions(spread, profile.canvas_w, profile.canvas_h, &profile);
                assert_eq!(slots.len(), spread.position_count(), "{}", spread);
            }
        }
    }

    #[test]
    fn test_every_slot_keeps_the_card_aspect() {
        for profile in profiles() {
            for spread in Spread::ALL {
                for slot in compute_positions(spread, profile.canvas_w, profile.canvas_h, &profile) {
                    assert!(slot.w > 0.0 && slot.h > 0.0, "{}", spread);
                    assert!(
                        (slot.w / slot.h - CARD_ASPECT).abs() < 1e-4,
                        "{}: {} x {}",
                        spread,
                        slot.w,
                        slot.h
                    );
                }
            }
        }
    }

    #[test]
    fn test_single_card_is_centered_at_ninety_percent_height() {
        let profile = SizingProfile::new(false);
        let slots = compute_positions(Spread::SingleCard, 1200.0, 800.0, &profile);
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].x, 600.0);
        assert_eq!(slots[0].y, 400.0);
        assert!((slots[0].h - 720.0).abs() < 1e-3);
    }

    #[test]
    fn test_year_months_sit_on_the_circle() {
        let profile = SizingProfile::new(false);
        let slots = compute_positions(Spread::Year, 1200.0, 800.0, &profile);
        let radius = 1200.0 / 5.0;
        // First month is straight up from center.
        assert!((slots[1].x - 600.0).abs() < 1e-3);
        assert!((slots[1].y - (400.0 - radius)).abs() < 1e-3);
        for slot in &slots[1..] {
            let d = ((slot.x - 600.0).powi(2) + (slot.y - 400.0).powi(2)).sqrt();
            assert!((d - radius).abs() < 1e-2);
        }
        // Months advance clockwise: the fourth month sits at 3 o'clock.
        assert!((slots[4].x - (600.0 + radius)).abs() < 1e-2);
        assert!((slots[4].y - 400.0).abs() < 1e-2);
    }

    #[test]
    fn test_five_card_cross_shape() {
        let profile = SizingProfile::new(false);
        let slots = compute_positions(Spread::FiveCardCross, 1200.0, 800.0, &profile);
        let (w, h) = (slots[0].w, slots[0].h);
        assert_eq!((slots[0].x, slots[0].y), (600.0, 400.0));
        assert_eq!(slots[1].y, 400.0 - (h + 25.0));
        assert_eq!(slots[2].y, 400.0 + (h + 25.0));
        assert_eq!(slots[3].x, 600.0 - (w + 25.0));
        assert_eq!(slots[4].x, 600.0 + (w + 25.0));
    }

    #[test]
    fn test_celtic_cross_rotates_only_the_challenge_card() {
        let profile = SizingProfile::new(true);
        let slots = compute_positions(Spread::CelticCross, 360.0, 640.0, &profile);
        assert!(slots[1].rotated);
        assert_eq!(slots[1].x, slots[0].x);
        assert_eq!(slots[1].y, slots[0].y);
        assert_eq!(slots.iter().filter(|s| s.rotated).count(), 1);
        // The staff shares one x and is evenly spaced.
        let staff = &slots[6..10];
        assert!(staff.windows(2).all(|p| p[0].x == p[1].x));
        let step = staff[1].y - staff[0].y;
        assert!((step - (slots[0].h + profile.margin)).abs() < 1e-3);
        assert!((staff[3].y - staff[2].y - step).abs() < 1e-3);
    }

    #[test]
    fn test_rotated_slot_hit_testing_swaps_extent() {
        let slot = Slot { x: 0.0, y: 0.0, w: 10.0, h: 20.0, rotated: true };
        assert!(slot.contains(9.0, 0.0));
        assert!(!slot.contains(0.0, 9.0));
    }

    #[test]
    fn test_full_deck_grid_is_row_major_within_the_canvas() {
        for profile in profiles() {
            let slots = compute_positions(Spread::FullDeck, profile.canvas_w, profile.canvas_h, &profile);
            let cols = 78usize.div_ceil(profile.full_deck_rows);
            // Row-major: x repeats every `cols`, y is non-decreasing.
            assert_eq!(slots[0].x, slots[cols].x);
            assert!(slots.windows(2).all(|p| p[1].y >= p[0].y || p[1].x > p[0].x));
            for slot in &slots {
                assert!(slot.x - slot.w / 2.0 >= 0.0);
                assert!(slot.x + slot.w / 2.0 <= profile.canvas_w + 1e-3);
            }
        }
    }

    #[test]
    fn test_default_grid_rows_split_on_three_cards() {
        let profile = SizingProfile::new(false);
        // Three cards stay on one row; more than three wrap onto two.
        let three = compute_positions(Spread::PastPresentFuture, 1200.0, 800.0, &profile);
        assert!(three.windows(2).all(|p| p[0].y == p[1].y && p[0].x < p[1].x));

        let five = compute_positions(Spread::Smart, 1200.0, 800.0, &profile);
        assert_eq!(five[0].y, five[1].y);
        assert_eq!(five[0].x, five[3].x);
        assert!(five[3].y > five[0].y);
    }

    #[test]
    fn test_fit_card_to_grid_respects_both_bounds() {
        let profile = SizingProfile::new(false);
        for (rows, cols) in [(1usize, 3usize), (2, 3), (6, 13), (1, 1)] {
            let (w, h) = fit_card_to_grid(rows, cols, 1200.0, 800.0, &profile);
            assert!((w / h - CARD_ASPECT).abs() < 1e-4);
            let margin = profile.margin;
            assert!(cols as f32 * w <= 1200.0 - (cols as f32 + 1.0) * margin + 1e-3);
            assert!(
                rows as f32 * h
                    <= 800.0 - profile.header_band - (rows as f32 + 1.0) * margin + 1e-3
            );
        }
    }
}
