use crate::model::{CLASS_LIST, ClassName};

/// A character record parsed from one bulk-entry line, before registration.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedCharacter {
    pub name: String,
    pub class: ClassName,
    pub power: f64,
}

/// Outcome of parsing a pasted block: parsed records plus the 1-based line
/// numbers of non-blank lines that could not be parsed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedBlock {
    pub characters: Vec<ParsedCharacter>,
    pub skipped_lines: Vec<usize>,
}

/// Shorthand forms the fuzzy match alone would not resolve.
const CLASS_ALIASES: [(&str, ClassName); 6] = [
    ("gs", ClassName::Greatsword),
    ("xbow", ClassName::Crossbowman),
    ("db", ClassName::DualBlade),
    ("sm", ClassName::Swordmaster),
    ("wl", ClassName::Warlock),
    ("lmage", ClassName::LightningMage),
];

/// Resolve free-form class input: alias, then exact, then substring, then
/// prefix match. Case-insensitive; spaces and hyphens count as underscores.
pub fn resolve_class(input: &str) -> Option<ClassName> {
    let needle = input
        .trim()
        .to_lowercase()
        .replace([' ', '-'], "_");
    if needle.is_empty() {
        return None;
    }

    if let Some((_, class)) = CLASS_ALIASES.iter().find(|(alias, _)| *alias == needle) {
        return Some(*class);
    }
    if let Some(class) = CLASS_LIST.into_iter().find(|c| c.as_str() == needle) {
        return Some(class);
    }
    if let Some(class) = CLASS_LIST.into_iter().find(|c| c.as_str().contains(&needle)) {
        return Some(class);
    }
    CLASS_LIST
        .into_iter()
        .find(|c| c.as_str().starts_with(&needle))
}

/// Parse one `name / class / power` line.
///
/// Returns `None` for blank lines, lines without a `/` separator, fewer
/// than three fields, an unresolvable class, or a non-numeric power. Power
/// is rounded to one decimal place.
pub fn parse_line(line: &str) -> Option<ParsedCharacter> {
    let line = line.trim();
    if line.is_empty() || !line.contains('/') {
        return None;
    }
    let parts: Vec<&str> = line.split('/').map(str::trim).collect();
    if parts.len() < 3 {
        return None;
    }
    let (name, class_input, power_input) = (parts[0], parts[1], parts[2]);
    if name.is_empty() {
        return None;
    }
    let class = resolve_class(class_input)?;
    let power: f64 = power_input.parse().ok()?;
    Some(ParsedCharacter {
        name: name.to_string(),
        class,
        power: (power * 10.0).round() / 10.0,
    })
}

/// Parse a pasted multi-line block. Blank lines are ignored; any other line
/// that fails to parse is reported in `skipped_lines` by 1-based number.
pub fn parse_block(text: &str) -> ParsedBlock {
    let mut block = ParsedBlock::default();
    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line) {
            Some(character) => block.characters.push(character),
            None => block.skipped_lines.push(index + 1),
        }
    }
    block
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_exact_and_fuzzy_input() {
        assert_eq!(resolve_class("healer"), Some(ClassName::Healer));
        assert_eq!(resolve_class("Fire Mage"), Some(ClassName::FireMage));
        assert_eq!(resolve_class("cross"), Some(ClassName::Crossbowman));
        assert_eq!(resolve_class("warl"), Some(ClassName::Warlock));
        assert_eq!(resolve_class(""), None);
        assert_eq!(resolve_class("necromancer"), None);
    }

    #[test]
    fn resolves_aliases() {
        assert_eq!(resolve_class("gs"), Some(ClassName::Greatsword));
        assert_eq!(resolve_class("xbow"), Some(ClassName::Crossbowman));
        assert_eq!(resolve_class("DB"), Some(ClassName::DualBlade));
    }

    #[test]
    fn substring_beats_prefix_order() {
        // "bow" appears inside crossbowman before any prefix match applies.
        assert_eq!(resolve_class("bow"), Some(ClassName::Crossbowman));
    }

    #[test]
    fn parses_a_full_line() {
        let parsed = parse_line("Dawnblade / swordmaster / 1523.47").unwrap();
        assert_eq!(parsed.name, "Dawnblade");
        assert_eq!(parsed.class, ClassName::Swordmaster);
        assert_eq!(parsed.power, 1523.5);
    }

    #[test]
    fn rejects_malformed_lines() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("no separators here"), None);
        assert_eq!(parse_line("OnlyName / healer"), None);
        assert_eq!(parse_line(" / healer / 100"), None);
        assert_eq!(parse_line("Name / notaclass / 100"), None);
        assert_eq!(parse_line("Name / healer / strong"), None);
    }

    #[test]
    fn block_collects_and_reports_lines() {
        let text = "One / healer / 100\n\ngarbage line\nTwo / bard / 50.25\n";
        let block = parse_block(text);
        assert_eq!(block.characters.len(), 2);
        assert_eq!(block.characters[0].name, "One");
        assert_eq!(block.characters[1].power, 50.3);
        assert_eq!(block.skipped_lines, vec![3]);
    }
}
