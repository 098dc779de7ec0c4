//! Edge-redirection policy.
//!
//! Given a cursor sample inside the void, [`RedirectPolicy`] decides which
//! edge the cursor leaves through and returns the [`Displacement`] that puts
//! it on the first pixel past that edge.
//!
//! # Automatic mode
//!
//! In [`RedirectionMode::Auto`] the cursor leaves through the nearest edge,
//! with two exceptions checked first:
//!
//! 1. If the cursor sits on the left or right border of the virtual screen
//!    inside the void, there is no room beyond the void's vertical edges, so
//!    only Top or Bottom are considered.
//! 2. Likewise, on the top or bottom border of the virtual screen only Left
//!    or Right are considered.
//!
//! Otherwise the four distances go through a fixed pairwise cascade (left
//! against right, then the winner against top, then against bottom).  Ties
//! resolve towards the later comparison: an exact tie between the horizontal
//! winner and `top` goes to the top/bottom pair, and an exact tie with
//! `bottom` goes to Bottom.
//!
//! # Postcondition
//!
//! For every sample on a void pixel the landing point is outside the void.
//! A warp that lands inside the void would produce another motion event and
//! another warp, forever.
//!
//! # Screen corners
//!
//! When the void covers a corner of the virtual screen, a sample on that
//! corner triggers both exceptions and the left/right rule wins.  The chosen
//! Top or Bottom edge may then lie on the screen border itself, so the
//! landing row is off-screen (`-1` or `screen.height`).  The X server clamps
//! the warp back onto the last row, which is still inside the void, and the
//! cursor stays pinned in the corner until the user moves it away.

use super::geometry::{CursorSample, Displacement, Edge, ScreenBounds, VoidRegion};
use super::mode::RedirectionMode;

/// Distances from a sample to each edge of the void.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EdgeDistances {
    left: i32,
    right: i32,
    top: i32,
    bottom: i32,
}

impl EdgeDistances {
    fn measure(region: &VoidRegion, sample: CursorSample) -> Self {
        Self {
            left: sample.x,
            right: region.width() as i32 - sample.x,
            top: sample.y,
            bottom: region.height() as i32 - sample.y,
        }
    }

    fn nearer_vertical(&self) -> Edge {
        if self.top < self.bottom {
            Edge::Top
        } else {
            Edge::Bottom
        }
    }

    fn nearer_horizontal(&self) -> Edge {
        if self.left < self.right {
            Edge::Left
        } else {
            Edge::Right
        }
    }

    fn cascade(&self) -> Edge {
        if self.left < self.right {
            if self.left < self.top {
                if self.left < self.bottom {
                    Edge::Left
                } else {
                    Edge::Bottom
                }
            } else {
                self.nearer_vertical()
            }
        } else if self.right < self.top {
            if self.right < self.bottom {
                Edge::Right
            } else {
                Edge::Bottom
            }
        } else {
            self.nearer_vertical()
        }
    }
}

/// The immutable redirection policy: void geometry, screen size and mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedirectPolicy {
    region: VoidRegion,
    screen: ScreenBounds,
    mode: RedirectionMode,
}

impl RedirectPolicy {
    pub fn new(region: VoidRegion, screen: ScreenBounds, mode: RedirectionMode) -> Self {
        Self {
            region,
            screen,
            mode,
        }
    }

    pub fn region(&self) -> &VoidRegion {
        &self.region
    }

    pub fn screen(&self) -> &ScreenBounds {
        &self.screen
    }

    pub fn mode(&self) -> RedirectionMode {
        self.mode
    }

    /// Returns the edge the cursor leaves the void through.
    pub fn escape_edge(&self, sample: CursorSample) -> Edge {
        match self.mode.fixed_edge() {
            Some(edge) => edge,
            None => self.nearest_edge(sample),
        }
    }

    /// Returns the displacement that moves `sample` just outside the void.
    pub fn displacement(&self, sample: CursorSample) -> Displacement {
        self.escape_edge(sample).displacement(&self.region, sample)
    }

    fn nearest_edge(&self, sample: CursorSample) -> Edge {
        let distances = EdgeDistances::measure(&self.region, sample);

        if self.on_vertical_screen_border(sample) {
            return distances.nearer_vertical();
        }
        if self.on_horizontal_screen_border(sample) {
            return distances.nearer_horizontal();
        }
        distances.cascade()
    }

    /// Cursor is on the screen's first or last column, inside the void.
    fn on_vertical_screen_border(&self, sample: CursorSample) -> bool {
        (sample.x == 0 && self.region.x() == 0)
            || i64::from(self.region.x()) + i64::from(sample.x) >= i64::from(self.screen.width) - 1
    }

    /// Cursor is on the screen's first or last row, inside the void.
    fn on_horizontal_screen_border(&self, sample: CursorSample) -> bool {
        (sample.y == 0 && self.region.y() == 0)
            || i64::from(self.region.y()) + i64::from(sample.y) >= i64::from(self.screen.height) - 1
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: ScreenBounds = ScreenBounds {
        width: 4000,
        height: 4000,
    };

    /// A 100x50 void well inside a large screen, so no border override applies.
    fn floating_policy(mode: RedirectionMode) -> RedirectPolicy {
        let region = VoidRegion::new(500, 500, 100, 50).expect("valid region");
        RedirectPolicy::new(region, SCREEN, mode)
    }

    fn policy_at(x: i32, y: i32, w: i32, h: i32, screen: ScreenBounds) -> RedirectPolicy {
        let region = VoidRegion::new(x, y, w, h).expect("valid region");
        RedirectPolicy::new(region, screen, RedirectionMode::Auto)
    }

    fn s(x: i32, y: i32) -> CursorSample {
        CursorSample::new(x, y)
    }

    // ── Fixed modes ───────────────────────────────────────────────────────────

    #[test]
    fn test_down_mode_pushes_to_bottom_edge() {
        // Arrange
        let policy = floating_policy(RedirectionMode::Down);

        // Act
        let d = policy.displacement(s(30, 10));

        // Assert
        assert_eq!(d, Displacement::new(0, 40));
        assert_eq!(d.applied_to(s(30, 10)), s(30, 50));
    }

    #[test]
    fn test_up_mode_pushes_above_top_edge() {
        let policy = floating_policy(RedirectionMode::Up);
        assert_eq!(policy.displacement(s(30, 10)), Displacement::new(0, -11));
    }

    #[test]
    fn test_left_mode_pushes_left_of_left_edge() {
        let policy = floating_policy(RedirectionMode::Left);
        assert_eq!(policy.displacement(s(30, 10)), Displacement::new(-31, 0));
    }

    #[test]
    fn test_right_mode_pushes_to_right_edge() {
        let policy = floating_policy(RedirectionMode::Right);
        assert_eq!(policy.displacement(s(30, 10)), Displacement::new(70, 0));
    }

    #[test]
    fn test_fixed_mode_ignores_screen_border_overrides() {
        // Void anchored at the screen origin; Auto would go vertical here.
        let region = VoidRegion::new(0, 0, 100, 50).expect("valid region");
        let policy = RedirectPolicy::new(region, SCREEN, RedirectionMode::Right);
        assert_eq!(policy.escape_edge(s(0, 20)), Edge::Right);
    }

    #[test]
    fn test_fixed_mode_ignores_entry_point() {
        let policy = floating_policy(RedirectionMode::Down);
        assert_eq!(policy.escape_edge(s(0, 0)), Edge::Bottom);
        assert_eq!(policy.escape_edge(s(99, 49)), Edge::Bottom);
        assert_eq!(policy.escape_edge(s(0, 49)), Edge::Bottom);
    }

    // ── Auto: cascade ─────────────────────────────────────────────────────────

    #[test]
    fn test_auto_top_left_corner_tie_resolves_to_top() {
        // left=0 < right=100, then left=0 vs top=0 is not strictly less,
        // so the top/bottom pair decides: top=0 < bottom=50.
        let policy = floating_policy(RedirectionMode::Auto);
        assert_eq!(policy.escape_edge(s(0, 0)), Edge::Top);
        assert_eq!(policy.displacement(s(0, 0)), Displacement::new(0, -1));
    }

    #[test]
    fn test_auto_picks_left_when_left_is_strictly_nearest() {
        let policy = floating_policy(RedirectionMode::Auto);
        assert_eq!(policy.escape_edge(s(3, 20)), Edge::Left);
        assert_eq!(policy.displacement(s(3, 20)), Displacement::new(-4, 0));
    }

    #[test]
    fn test_auto_picks_right_when_right_is_strictly_nearest() {
        let policy = floating_policy(RedirectionMode::Auto);
        assert_eq!(policy.escape_edge(s(97, 20)), Edge::Right);
        assert_eq!(policy.displacement(s(97, 20)), Displacement::new(3, 0));
    }

    #[test]
    fn test_auto_picks_top_when_top_is_strictly_nearest() {
        let policy = floating_policy(RedirectionMode::Auto);
        assert_eq!(policy.escape_edge(s(50, 2)), Edge::Top);
    }

    #[test]
    fn test_auto_picks_bottom_when_bottom_is_strictly_nearest() {
        let policy = floating_policy(RedirectionMode::Auto);
        assert_eq!(policy.escape_edge(s(50, 47)), Edge::Bottom);
        assert_eq!(policy.displacement(s(50, 47)), Displacement::new(0, 3));
    }

    #[test]
    fn test_auto_left_bottom_tie_resolves_to_bottom() {
        // left=3, bottom=3: a naive argmin in L,R,T,B order would say Left.
        let policy = floating_policy(RedirectionMode::Auto);
        assert_eq!(policy.escape_edge(s(3, 47)), Edge::Bottom);
    }

    #[test]
    fn test_auto_right_bottom_tie_resolves_to_bottom() {
        // right=5, top=45, bottom=5.
        let policy = floating_policy(RedirectionMode::Auto);
        assert_eq!(policy.escape_edge(s(95, 45)), Edge::Bottom);
    }

    #[test]
    fn test_auto_left_top_tie_resolves_to_top() {
        // left=5, top=5, bottom=45.
        let policy = floating_policy(RedirectionMode::Auto);
        assert_eq!(policy.escape_edge(s(5, 5)), Edge::Top);
    }

    #[test]
    fn test_auto_right_top_tie_resolves_to_top() {
        // right=5, top=5, bottom=45.
        let policy = floating_policy(RedirectionMode::Auto);
        assert_eq!(policy.escape_edge(s(95, 5)), Edge::Top);
    }

    #[test]
    fn test_auto_left_right_tie_takes_right_branch() {
        // left=right=50; right=50 vs top=10 -> top/bottom pair -> Top.
        let policy = floating_policy(RedirectionMode::Auto);
        assert_eq!(policy.escape_edge(s(50, 10)), Edge::Top);
    }

    #[test]
    fn test_auto_top_bottom_tie_resolves_to_bottom() {
        // Centre of the void: every comparison ties or loses, ends at Bottom.
        let policy = floating_policy(RedirectionMode::Auto);
        assert_eq!(policy.escape_edge(s(50, 25)), Edge::Bottom);
    }

    // ── Auto: screen-border overrides ─────────────────────────────────────────

    #[test]
    fn test_auto_void_on_left_screen_border_never_escapes_left() {
        // left=0 would win the cascade, but there is no screen to the left.
        let policy = policy_at(0, 500, 100, 50, SCREEN);
        assert_eq!(policy.escape_edge(s(0, 20)), Edge::Top);
        assert_eq!(policy.escape_edge(s(0, 30)), Edge::Bottom);
    }

    #[test]
    fn test_auto_void_on_left_border_cursor_off_border_uses_cascade() {
        let policy = policy_at(0, 500, 100, 50, SCREEN);
        assert_eq!(policy.escape_edge(s(1, 20)), Edge::Left);
    }

    #[test]
    fn test_auto_cursor_on_last_screen_column_goes_vertical() {
        // Void occupies the rightmost 100 columns of a 1920-wide screen.
        let screen = ScreenBounds::new(1920, 1200);
        let policy = policy_at(1820, 500, 100, 50, screen);
        assert_eq!(policy.escape_edge(s(99, 10)), Edge::Top);
        assert_eq!(policy.escape_edge(s(99, 40)), Edge::Bottom);
    }

    #[test]
    fn test_auto_void_reaching_right_border_cursor_inside_uses_cascade() {
        let screen = ScreenBounds::new(1920, 1200);
        let policy = policy_at(1820, 500, 100, 50, screen);
        assert_eq!(policy.escape_edge(s(2, 25)), Edge::Left);
    }

    #[test]
    fn test_auto_void_on_top_screen_border_goes_horizontal() {
        // top=0 would win the cascade, but there is no screen above.
        let policy = policy_at(500, 0, 100, 50, SCREEN);
        assert_eq!(policy.escape_edge(s(20, 0)), Edge::Left);
        assert_eq!(policy.escape_edge(s(80, 0)), Edge::Right);
    }

    #[test]
    fn test_auto_horizontal_override_tie_goes_right() {
        let policy = policy_at(500, 0, 100, 50, SCREEN);
        assert_eq!(policy.escape_edge(s(50, 0)), Edge::Right);
    }

    #[test]
    fn test_auto_cursor_on_last_screen_row_goes_horizontal() {
        // A classic void: 1280x1024 monitor beside 1920x1200, void below the smaller one.
        let screen = ScreenBounds::new(3200, 1200);
        let policy = policy_at(0, 1024, 1280, 176, screen);
        assert_eq!(policy.escape_edge(s(1200, 175)), Edge::Right);
        assert_eq!(policy.displacement(s(1200, 175)), Displacement::new(80, 0));
    }

    #[test]
    fn test_auto_vertical_override_takes_precedence_at_screen_corner() {
        let screen = ScreenBounds::new(3200, 1200);
        let policy = policy_at(0, 1024, 1280, 176, screen);
        // Bottom-left screen pixel: both overrides match, vertical wins.
        assert_eq!(policy.escape_edge(s(0, 175)), Edge::Bottom);
    }

    #[test]
    fn test_auto_screen_corner_lands_one_row_below_the_screen() {
        let screen = ScreenBounds::new(3200, 1200);
        let policy = policy_at(0, 1024, 1280, 176, screen);
        let sample = s(0, 175);

        let d = policy.displacement(sample);

        assert_eq!(d, Displacement::new(0, 1));
        let landing_row = policy.region().y() + d.applied_to(sample).y;
        assert_eq!(landing_row, screen.height as i32, "target row is off-screen");
    }

    #[test]
    fn test_auto_border_checks_handle_void_at_coordinate_limit() {
        let screen = ScreenBounds::new(1920, 1080);
        let policy = policy_at(i32::MAX - 100, 500, 100, 50, screen);
        // Far past the screen's right column: vertical override applies.
        assert_eq!(policy.escape_edge(s(99, 10)), Edge::Top);
    }

    #[test]
    fn test_auto_realistic_void_pushes_up_near_top_edge() {
        let screen = ScreenBounds::new(3200, 1200);
        let policy = policy_at(0, 1024, 1280, 176, screen);
        assert_eq!(policy.displacement(s(600, 1)), Displacement::new(0, -2));
    }

    // ── Purity ────────────────────────────────────────────────────────────────

    #[test]
    fn test_policy_is_deterministic() {
        let policy = floating_policy(RedirectionMode::Auto);
        for (x, y) in [(0, 0), (50, 25), (99, 49), (13, 37)] {
            assert_eq!(policy.displacement(s(x, y)), policy.displacement(s(x, y)));
        }
    }

    #[test]
    fn test_accessors_return_construction_values() {
        let policy = floating_policy(RedirectionMode::Left);
        assert_eq!(policy.mode(), RedirectionMode::Left);
        assert_eq!(policy.region().x(), 500);
        assert_eq!(*policy.screen(), SCREEN);
    }
}
