//! Published category and technology vocabularies.
//!
//! Tags are stored as plain strings, so existing records stay readable when
//! the vocabulary evolves. Checking user input against these lists is the
//! presentation layer's duty.

/// Categories a project can be filed under.
pub const CATEGORIES: [&str; 10] = [
    "Web App",
    "Mobile App",
    "Game",
    "AI/ML",
    "Developer Tool",
    "E-commerce",
    "Education",
    "Productivity",
    "Social",
    "Other",
];

/// Technologies a project can be tagged with.
pub const TECHNOLOGIES: [&str; 16] = [
    "React",
    "Vue",
    "Svelte",
    "TypeScript",
    "JavaScript",
    "Node.js",
    "Python",
    "Rust",
    "Go",
    "Kotlin",
    "Swift",
    "Tailwind CSS",
    "PostgreSQL",
    "MongoDB",
    "Firebase",
    "Supabase",
];

pub fn is_known_category(name: &str) -> bool {
    CATEGORIES.contains(&name)
}

pub fn is_known_technology(name: &str) -> bool {
    TECHNOLOGIES.contains(&name)
}
