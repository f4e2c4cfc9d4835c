//! Embedded character list

/// Characters the player can think of, each with its traits
pub const CHARACTERS: &[(&str, &[&str])] = &[
    ("Thor", &["God of Thunder", "Hammer", "Asgardian"]),
    ("Harry Potter", &["Wizard", "Scar", "Hogwarts"]),
    ("Hulk", &["Bruce Banner", "Super Strength", "Avenger"]),
];

/// Number of characters in `CHARACTERS`
pub const CHARACTERS_COUNT: usize = 3;
