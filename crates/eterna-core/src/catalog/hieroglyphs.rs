use super::HieroglyphPuzzle;

macro_rules! puzzle {
    ($symbol:expr, $meaning:expr, [$a:expr, $b:expr, $c:expr, $d:expr]) => {
        HieroglyphPuzzle {
            symbol: $symbol,
            meaning: $meaning,
            options: [$a, $b, $c, $d],
            correct_answer: $meaning,
        }
    };
}

pub static HIEROGLYPH_PUZZLES: &[HieroglyphPuzzle] = &[
    puzzle!("𓂀", "Eye of Horus", ["Eye of Horus", "Eye of Ra", "Ankh", "Scarab"]),
    puzzle!("☥", "Ankh", ["Cross", "Ankh", "Djed", "Tyet"]),
    puzzle!("𓊪", "Bread", ["Water", "Bread", "Beer", "Meat"]),
    puzzle!("𓈖", "Water", ["Sand", "Water", "Fire", "Air"]),
    puzzle!("𓃭", "Lion", ["Cat", "Dog", "Lion", "Jackal"]),
    puzzle!("𓅃", "Ibis", ["Eagle", "Falcon", "Ibis", "Vulture"]),
    puzzle!("𓇳", "Sun", ["Moon", "Star", "Sun", "Sky"]),
    puzzle!("𓊽", "House", ["Temple", "House", "Palace", "Tomb"]),
    puzzle!("𓂧", "Hand", ["Foot", "Hand", "Arm", "Finger"]),
    puzzle!("𓄿", "Vulture", ["Eagle", "Hawk", "Vulture", "Falcon"]),
    puzzle!("𓃀", "Bull", ["Cow", "Bull", "Ox", "Buffalo"]),
    puzzle!("𓈗", "Pool", ["River", "Lake", "Pool", "Sea"]),
    puzzle!("𓊃", "Door", ["Window", "Door", "Gate", "Wall"]),
    puzzle!("𓌻", "Papyrus", ["Reed", "Papyrus", "Grass", "Wheat"]),
    puzzle!("𓋹", "Gold", ["Silver", "Gold", "Copper", "Bronze"]),
];
