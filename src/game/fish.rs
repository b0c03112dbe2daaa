//! The fish
//!
//! Swims horizontally at one of ten speed levels, turns around when it touches
//! either side of the tank, and changes depth on Up/Down.

use crate::config::StartDirection;
use crate::input::{HeldKeys, Key};

/// Horizontal heading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// -1 for left, 1 for right
    pub fn sign(self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

impl From<StartDirection> for Direction {
    fn from(d: StartDirection) -> Self {
        match d {
            StartDirection::Left => Direction::Left,
            StartDirection::Right => Direction::Right,
        }
    }
}

/// Depth rules, checked in order; the first held key wins.
/// The sign is applied to the configured depth step.
pub const DEPTH_RULES: [(Key, i32); 2] = [(Key::Down, 1), (Key::Up, -1)];

/// Speed for the held digit keys.
///
/// Keys are scanned 0 through 9 and every held key overwrites the result,
/// so the highest held digit wins. None if no digit is held.
pub fn speed_for_keys(held: HeldKeys, levels: &[i32; 10]) -> Option<i32> {
    let mut speed = None;
    for (key, &level) in Key::DIGITS.iter().zip(levels.iter()) {
        if held.is_down(*key) {
            speed = Some(level);
        }
    }
    speed
}

/// Fish state. The sprite is drawn facing the current direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fish {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub direction: Direction,
    pub speed: i32,
}

impl Fish {
    pub fn new(x: i32, y: i32, width: i32, height: i32, direction: Direction, speed: i32) -> Self {
        Self { x, y, width, height, direction, speed }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn center_y(&self) -> i32 {
        self.y + self.height / 2
    }

    /// Sprite is the loaded image flipped horizontally (source art faces left)
    pub fn mirrored(&self) -> bool {
        self.direction == Direction::Right
    }

    /// Lowest allowed y for a tank of the given height
    fn max_y(&self, tank_height: i32) -> i32 {
        (tank_height - self.height).max(0)
    }

    /// Keep y inside [0, tank_height - height]
    pub fn clamp_depth(&mut self, tank_height: i32) {
        self.y = self.y.clamp(0, self.max_y(tank_height));
    }

    /// Apply the digit-key speed table
    pub fn adjust_speed(&mut self, held: HeldKeys, levels: &[i32; 10]) {
        if let Some(speed) = speed_for_keys(held, levels) {
            self.speed = speed;
        }
    }

    /// Move up or down by `step` according to `DEPTH_RULES`, clamped to the tank
    pub fn adjust_depth(&mut self, held: HeldKeys, step: i32, tank_height: i32) {
        if let Some(&(_, sign)) = DEPTH_RULES.iter().find(|(key, _)| held.is_down(*key)) {
            self.y = (self.y + sign * step).clamp(0, self.max_y(tank_height));
        }
    }

    /// Advance horizontally, then turn around at the tank walls.
    ///
    /// Returns true if the fish turned this frame. The left wall is checked
    /// first, so at most one turn happens per call.
    pub fn swim(&mut self, tank_width: i32) -> bool {
        self.x += self.speed * self.direction.sign();

        let before = self.direction;
        if self.left() <= 0 {
            self.direction = Direction::Right;
        } else if self.right() >= tank_width {
            self.direction = Direction::Left;
        }
        self.direction != before
    }

    /// Midpoint of the edge the fish is swimming towards
    pub fn leading_edge(&self) -> (i32, i32) {
        match self.direction {
            Direction::Right => (self.right(), self.center_y()),
            Direction::Left => (self.left(), self.center_y()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEVELS: [i32; 10] = [1, 3, 5, 7, 9, 11, 13, 15, 17, 19];

    fn fish() -> Fish {
        Fish::new(400, 300, 60, 40, Direction::Left, 5)
    }

    #[test]
    fn test_single_digit_speed() {
        let held = HeldKeys::from_keys(&[Key::Num3]);
        assert_eq!(speed_for_keys(held, &LEVELS), Some(7));

        let held = HeldKeys::from_keys(&[Key::Num0]);
        assert_eq!(speed_for_keys(held, &LEVELS), Some(1));
    }

    #[test]
    fn test_highest_digit_wins() {
        let held = HeldKeys::from_keys(&[Key::Num7, Key::Num3]);
        assert_eq!(speed_for_keys(held, &LEVELS), Some(15));
    }

    #[test]
    fn test_no_digit_keeps_speed() {
        let mut f = fish();
        f.adjust_speed(HeldKeys::from_keys(&[Key::Space]), &LEVELS);
        assert_eq!(f.speed, 5);
    }

    #[test]
    fn test_depth_down_wins_over_up() {
        let mut f = fish();
        f.adjust_depth(HeldKeys::from_keys(&[Key::Up, Key::Down]), 5, 600);
        assert_eq!(f.y, 305);

        f.adjust_depth(HeldKeys::from_keys(&[Key::Up]), 5, 600);
        assert_eq!(f.y, 300);
    }

    #[test]
    fn test_depth_clamps() {
        let mut f = fish();
        let down = HeldKeys::from_keys(&[Key::Down]);
        for _ in 0..200 {
            f.adjust_depth(down, 5, 600);
            assert!(f.y >= 0 && f.y <= 600 - f.height);
        }
        assert_eq!(f.y, 560);

        let up = HeldKeys::from_keys(&[Key::Up]);
        for _ in 0..200 {
            f.adjust_depth(up, 5, 600);
            assert!(f.y >= 0 && f.y <= 600 - f.height);
        }
        assert_eq!(f.y, 0);
    }

    #[test]
    fn test_turns_at_left_wall_after_80_frames() {
        let mut f = fish();
        let mut turns = Vec::new();
        for frame in 1..=81 {
            if f.swim(800) {
                turns.push(frame);
            }
        }
        assert_eq!(turns, vec![80]);
        assert_eq!(f.direction, Direction::Right);
        assert!(f.mirrored());
        assert_eq!(f.x, 5);
    }

    #[test]
    fn test_turns_at_right_wall() {
        let mut f = Fish::new(730, 0, 60, 40, Direction::Right, 10);
        assert!(f.swim(800));
        assert_eq!(f.x, 740);
        assert_eq!(f.direction, Direction::Left);
        assert!(!f.mirrored());
    }

    #[test]
    fn test_left_wall_checked_first() {
        // Wider than the tank: both walls touched after one step
        let mut f = Fish::new(10, 0, 900, 40, Direction::Left, 19);
        assert!(f.swim(800));
        assert_eq!(f.direction, Direction::Right);
    }

    #[test]
    fn test_leading_edge() {
        let mut f = fish();
        assert_eq!(f.leading_edge(), (400, 320));
        f.direction = Direction::Right;
        assert_eq!(f.leading_edge(), (460, 320));
    }
}
