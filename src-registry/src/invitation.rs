//! Invitation Wording
//!
//! Slovenian has singular, dual and plural verb forms, so the greeting depends
//! on how many people the link's display name covers.

/// Greeting for links without a name
pub const FALLBACK_SENTENCE: &str =
    "Vesela bova, če se nama pridružiš, da lahko najin dan praznujeva še s tabo!";

/// Greeting for the general (unaddressed) church invitation
pub const GENERAL_SENTENCE: &str =
    "Vesela bova, če se nama pridružite, da lahko najin dan praznujeva še z vami!";

/// Grammatical number of the addressees
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Addressees {
    One,
    Two,
    Many,
}

impl Addressees {
    fn from_count(n: usize) -> Self {
        match n {
            0 | 1 => Addressees::One,
            2 => Addressees::Two,
            _ => Addressees::Many,
        }
    }
}

fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Households and the band are addressed in plural whatever the name says
fn is_always_plural(name: &str) -> bool {
    let lower = name.to_lowercase();
    lower.starts_with("družina ") || lower == "bend"
}

/// Split "A, B in C" into people
fn split_people(name: &str) -> Vec<String> {
    name.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .flat_map(|p| p.split(" in ").map(str::trim).filter(|x| !x.is_empty()))
        .map(str::to_string)
        .collect()
}

pub fn addressees(display_name: &str) -> Addressees {
    let name = collapse_whitespace(display_name);
    if name.is_empty() {
        return Addressees::One;
    }
    if is_always_plural(&name) {
        return Addressees::Many;
    }
    Addressees::from_count(split_people(&name).len())
}

/// Names as printed: three or more become "A, B in C"
pub fn format_names(display_name: &str) -> String {
    let name = collapse_whitespace(display_name);
    if name.is_empty() || is_always_plural(&name) {
        return name;
    }
    let people = split_people(&name);
    match people.split_last() {
        Some((last, rest)) if rest.len() >= 2 => format!("{} in {}", rest.join(", "), last),
        _ => name,
    }
}

pub fn invitation_sentence(display_name: &str) -> String {
    let names = format_names(display_name);
    match addressees(display_name) {
        Addressees::One => format!(
            "{}, vesela bova, če se nama pridružiš, da lahko najin dan praznujeva še s tabo!",
            names
        ),
        Addressees::Two => format!(
            "{}, vesela bova, če se nama pridružita, da lahko najin dan praznujeva še z vama!",
            names
        ),
        Addressees::Many => format!(
            "{}, vesela bova, če se nam pridružite, da lahko najin dan praznujeva še z vami!",
            names
        ),
    }
}
