//! Bubbles and anchors
//!
//! Both are tiny value types living in plain `Vec`s. Each frame the whole
//! collection is rebuilt: every item advances one step and the ones that left
//! the tank are dropped.

use rand::Rng;
use crate::config::IntRange;

/// A bubble released by the fish, rising until it reaches the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bubble {
    pub x: i32,
    pub y: i32,
    pub diameter: i32,
}

impl Bubble {
    /// New bubble at `(x, y)` with a random diameter from `diameter`
    pub fn spawn<R: Rng>(x: i32, y: i32, diameter: IntRange, rng: &mut R) -> Self {
        Self {
            x,
            y,
            diameter: rng.gen_range(diameter.min..=diameter.max),
        }
    }
}

/// An anchor dropped with the mouse, sinking at its own weight per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub x: i32,
    pub y: i32,
    pub weight: i32,
}

impl Anchor {
    /// New anchor at `(x, y)` with a random weight from `weight`
    pub fn spawn<R: Rng>(x: i32, y: i32, weight: IntRange, rng: &mut R) -> Self {
        Self {
            x,
            y,
            weight: rng.gen_range(weight.min..=weight.max),
        }
    }
}

/// Raise every bubble by `rise` and drop those at or above the surface (y <= 0)
pub fn advance_bubbles(bubbles: Vec<Bubble>, rise: i32) -> Vec<Bubble> {
    bubbles
        .into_iter()
        .map(|b| Bubble { y: b.y - rise, ..b })
        .filter(|b| b.y > 0)
        .collect()
}

/// Sink every anchor by its weight and drop those at or past the floor
pub fn advance_anchors(anchors: Vec<Anchor>, floor: i32) -> Vec<Anchor> {
    anchors
        .into_iter()
        .map(|a| Anchor { y: a.y + a.weight, ..a })
        .filter(|a| a.y < floor)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_bubble_rises_until_surface() {
        let mut bubbles = vec![Bubble { x: 10, y: 17, diameter: 4 }];
        let mut heights = Vec::new();
        while !bubbles.is_empty() {
            bubbles = advance_bubbles(bubbles, 5);
            heights.extend(bubbles.iter().map(|b| b.y));
        }
        // 17 -> 12 -> 7 -> 2 -> (-3, removed)
        assert_eq!(heights, vec![12, 7, 2]);
    }

    #[test]
    fn test_bubble_removed_exactly_at_zero() {
        let bubbles = advance_bubbles(vec![Bubble { x: 0, y: 5, diameter: 3 }], 5);
        assert!(bubbles.is_empty());
    }

    #[test]
    fn test_anchor_sinks_by_weight() {
        let mut anchors = vec![
            Anchor { x: 100, y: 550, weight: 20 },
            Anchor { x: 200, y: 100, weight: 5 },
        ];
        anchors = advance_anchors(anchors, 600);
        assert_eq!(anchors[0].y, 570);
        assert_eq!(anchors[1].y, 105);

        anchors = advance_anchors(anchors, 600);
        assert_eq!(anchors[0].y, 590);

        // 590 + 20 = 610 >= 600: gone
        anchors = advance_anchors(anchors, 600);
        assert_eq!(anchors.len(), 1);
        assert_eq!(anchors[0].x, 200);
        assert_eq!(anchors[0].y, 115);
    }

    #[test]
    fn test_anchor_removed_exactly_at_floor() {
        let anchors = advance_anchors(vec![Anchor { x: 0, y: 590, weight: 10 }], 600);
        assert!(anchors.is_empty());
    }

    #[test]
    fn test_random_sizes_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let b = Bubble::spawn(0, 0, IntRange::new(3, 10), &mut rng);
            assert!((3..=10).contains(&b.diameter));
            let a = Anchor::spawn(0, 0, IntRange::new(5, 20), &mut rng);
            assert!((5..=20).contains(&a.weight));
        }
    }
}
