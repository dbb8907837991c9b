//! "Surprise me" prompt suggestions.

use rand::Rng;
use rand::seq::SliceRandom;

pub const SURPRISE_PROMPTS: &[&str] = &[
    "an armchair in the shape of an avocado",
    "a surrealist dream-like oil painting by Salvador Dalí of a cat playing checkers",
    "teddy bears shopping for groceries in Japan, ukiyo-e",
    "an oil painting by Matisse of a humanoid robot playing chess",
    "panda mad scientist mixing sparkling chemicals, digital art",
    "a macro 35mm photograph of two mice in Hawaii, they're each wearing tiny swimsuits and are carrying tiny surf boards, digital art",
    "3D render of a cute tropical fish in an aquarium on a dark blue background, digital art",
    "an astronaut lounging in a tropical resort in space, vaporwave",
    "an oil painting portrait of a capybara wearing medieval royal robes and an ornate crown on a dark background",
    "a stained glass window depicting a hamburger and french fries",
    "a pencil and watercolor drawing of a bright city in the future with flying cars",
    "a sunlit indoor lounge area with a pool with clear water and another pool with translucent pastel pink water, next to a big window, digital art",
    "a fortune-telling shiba inu reading your fate in a giant hamburger, digital art",
    "a sea otter with a pearl earring by Johannes Vermeer",
    "an oil pastel drawing of an annoyed cat in a spaceship",
    "a painting of a fox in the style of Starry Night",
    "a bowl of soup that looks like a monster, knitted out of wool",
    "a plush toy robot sitting against a yellow wall",
    "a synthwave style sunset above the reflecting water of the sea, digital art",
    "an impressionist oil painting of sunflowers in a purple vase",
    "a hand drawn sketch of a Porsche 911",
    "a lighthouse on a cliff during a thunderstorm, ink wash painting",
];

/// Picks a suggestion that differs from `current`.
pub fn random_prompt<R: Rng + ?Sized>(current: &str, rng: &mut R) -> String {
    loop {
        // SURPRISE_PROMPTS is a non-empty const, so `choose` always yields.
        let Some(pick) = SURPRISE_PROMPTS.choose(rng) else {
            return String::new();
        };
        if *pick != current {
            return (*pick).to_string();
        }
    }
}
