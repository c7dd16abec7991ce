use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::model::Roster;

/// Characters shown per CSV row before wrapping to a continuation row.
const CHARS_PER_ROW: usize = 4;

/// Render the party layout as CSV text.
///
/// One block per party: the first cell of the first row is the party name,
/// followed by `name, class` pairs for up to four occupants per row;
/// continuation rows leave the name cell empty. An empty party still gets
/// its name row. Parties are separated by a blank row.
pub fn render_csv(roster: &Roster) -> String {
    let mut rows: Vec<Vec<String>> = Vec::new();

    for (party_index, party) in roster.parties.iter().enumerate() {
        let members: Vec<_> = party
            .occupied()
            .filter_map(|(_, id)| roster.character(id))
            .collect();

        if members.is_empty() {
            rows.push(vec![party.name.clone()]);
        }
        for (chunk_index, chunk) in members.chunks(CHARS_PER_ROW).enumerate() {
            let mut row = Vec::with_capacity(1 + chunk.len() * 2);
            row.push(if chunk_index == 0 {
                party.name.clone()
            } else {
                String::new()
            });
            for character in chunk {
                row.push(character.name.clone());
                row.push(character.class.to_string());
            }
            rows.push(row);
        }

        if party_index + 1 < roster.parties.len() {
            rows.push(Vec::new());
        }
    }

    rows.iter()
        .map(|row| row.join(","))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write the CSV layout to a file, prefixed with a UTF-8 BOM so spreadsheet
/// applications pick the right encoding.
pub fn write_csv(roster: &Roster, path: &Path) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all("\u{FEFF}".as_bytes())?;
    writer.write_all(render_csv(roster).as_bytes())?;
    writer.flush()
}

/// Write an iterator of serializable items to a JSONL file (one JSON object
/// per line).
fn write_jsonl<T: Serialize>(path: &Path, items: impl Iterator<Item = T>) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for item in items {
        serde_json::to_writer(&mut writer, &item)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Flush the roster to JSONL files in the given output directory.
///
/// Creates the output directory if it does not exist. Writes 2 files:
/// - `characters.jsonl` — one character per line, registration order
/// - `parties.jsonl` — one party per line (slots, conditions, time tag)
pub fn flush_to_jsonl(roster: &Roster, output_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(output_dir)?;
    write_jsonl(&output_dir.join("characters.jsonl"), roster.characters.iter())?;
    write_jsonl(&output_dir.join("parties.jsonl"), roster.parties.iter())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::place;
    use crate::model::ClassName;

    fn roster_with_members() -> Roster {
        let mut roster = Roster::new();
        let party = roster.create_party("Raid A");
        roster.create_party("Raid B");
        for (i, (account, name)) in [
            ("a1", "One"),
            ("a2", "Two"),
            ("a3", "Three"),
            ("a4", "Four"),
            ("a5", "Five"),
        ]
        .iter()
        .enumerate()
        {
            let id = roster
                .register(account, name, ClassName::Rogue, 10.0 - i as f64)
                .unwrap()
                .id;
            place(&mut roster, party, i, id).unwrap();
        }
        roster
    }

    #[test]
    fn csv_wraps_after_four_members() {
        let roster = roster_with_members();
        let csv = render_csv(&roster);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Raid A,One,rogue,Two,rogue,Three,rogue,Four,rogue",
                ",Five,rogue",
                "",
                "Raid B",
            ]
        );
    }

    #[test]
    fn csv_of_empty_roster_is_empty() {
        let roster = Roster::new();
        assert_eq!(render_csv(&roster), "");
    }

    #[test]
    fn csv_file_starts_with_bom() {
        let roster = roster_with_members();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.csv");
        write_csv(&roster, &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..3], [0xEF, 0xBB, 0xBF]);
        assert!(String::from_utf8(bytes).unwrap().contains("Raid A"));
    }

    #[test]
    fn jsonl_files_have_one_object_per_line() {
        let roster = roster_with_members();
        let dir = tempfile::tempdir().unwrap();
        flush_to_jsonl(&roster, dir.path()).unwrap();

        let characters = std::fs::read_to_string(dir.path().join("characters.jsonl")).unwrap();
        assert_eq!(characters.lines().count(), 5);
        let first: serde_json::Value =
            serde_json::from_str(characters.lines().next().unwrap()).unwrap();
        assert_eq!(first["name"], "One");

        let parties = std::fs::read_to_string(dir.path().join("parties.jsonl")).unwrap();
        assert_eq!(parties.lines().count(), 2);
    }
}
