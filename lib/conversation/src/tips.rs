//! Canned fashion and health tips.
//!
//! Selection is uniform and ignores whatever the user answered to the
//! clarifying question.

use rand::Rng;

/// Tips returned at the end of the stylist sub-dialogue.
pub const FASHION_TIPS: &[&str] = &[
    "Build your outfit around one statement piece and keep everything else simple.",
    "Neutral basics like white, navy, grey and beige pair with almost anything in your wardrobe.",
    "A well-fitted blazer instantly makes jeans and a t-shirt look put together.",
    "Match your belt to your shoes for a polished, intentional look.",
    "Try the rule of three: pick no more than three colors for a single outfit.",
    "Tailoring is the cheapest upgrade there is; small alterations make off-the-rack clothes look custom.",
    "Roll your sleeves once or twice for a relaxed look that still reads as neat.",
    "Invest in good shoes first; people notice footwear more than you might think.",
    "Monochrome outfits in different shades of one color look effortless and elongate your silhouette.",
    "Accessorize with a watch, scarf or simple jewelry to add personality without clutter.",
];

/// Tips returned at the end of the health sub-dialogue.
pub const HEALTH_TIPS: &[&str] = &[
    "Aim for at least 150 minutes of moderate aerobic activity spread across the week.",
    "Fill half your plate with vegetables and fruit at every meal.",
    "Drink water throughout the day; thirst is often mistaken for hunger.",
    "Keep a consistent sleep schedule and aim for seven to nine hours a night.",
    "Add two strength-training sessions a week to protect muscles and bones.",
    "Take a short walk or stretch break every hour if you sit for long periods.",
    "Swap sugary drinks for water, sparkling water or unsweetened tea.",
    "Practice a few minutes of deep breathing or meditation to manage stress.",
    "Choose whole grains over refined grains for steadier energy.",
    "Warm up before exercise and cool down afterwards to reduce the risk of injury.",
];

/// Picks a fashion tip using the thread-local generator.
#[must_use]
pub fn pick_fashion_tip() -> &'static str {
    pick_fashion_tip_with(&mut rand::thread_rng())
}

/// Picks a health tip using the thread-local generator.
#[must_use]
pub fn pick_health_tip() -> &'static str {
    pick_health_tip_with(&mut rand::thread_rng())
}

/// Picks a fashion tip using the given generator.
pub fn pick_fashion_tip_with<R: Rng>(rng: &mut R) -> &'static str {
    pick(FASHION_TIPS, rng)
}

/// Picks a health tip using the given generator.
pub fn pick_health_tip_with<R: Rng>(rng: &mut R) -> &'static str {
    pick(HEALTH_TIPS, rng)
}

fn pick<R: Rng>(tips: &'static [&'static str], rng: &mut R) -> &'static str {
    tips[rng.gen_range(0..tips.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn picks_come_from_the_lists() {
        for _ in 0..50 {
            assert!(FASHION_TIPS.contains(&pick_fashion_tip()));
            assert!(HEALTH_TIPS.contains(&pick_health_tip()));
        }
    }

    #[test]
    fn seeded_picks_are_reproducible() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            assert_eq!(pick_fashion_tip_with(&mut a), pick_fashion_tip_with(&mut b));
        }
    }

    #[test]
    fn every_tip_is_reachable() {
        let mut rng = StdRng::seed_from_u64(42);
        let seen: HashSet<&str> = (0..2_000)
            .map(|_| pick_health_tip_with(&mut rng))
            .collect();
        assert_eq!(seen.len(), HEALTH_TIPS.len());
    }
}
