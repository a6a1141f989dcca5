use std::fs;

use crate::models::hero::Hero;
use crate::opt::*;

const HERO_DATA_PATH: &str = "./resource/heroes.json";

pub fn load_hero_data() -> Res<Vec<Hero>> {
    load_hero_data_from(HERO_DATA_PATH)
}

pub fn load_hero_data_from(path: &str) -> Res<Vec<Hero>> {
    let hero_data = fs::read_to_string(path)
        .map_err(|err| format!("failed to read hero data at {}: {}", path, err))?;
    let heroes: Vec<Hero> = serde_json::from_str(&hero_data)
        .map_err(|err| format!("failed to parse hero data: {}", err))?;

    Ok(heroes)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_catalog_file() {
        let raw = r#"[
            {"id": "h01", "name": "Ironhide", "role": "Tank", "image": "ironhide.png"},
            {"id": "h02", "name": "Whisper", "role": "Assassin", "image": "whisper.png"}
        ]"#;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(raw.as_bytes()).unwrap();

        let heroes = load_hero_data_from(file.path().to_str().unwrap()).unwrap();
        assert_eq!(heroes.len(), 2);
        assert_eq!(heroes[1].name, "Whisper");
    }

    #[test]
    fn test_missing_catalog_is_an_error() {
        assert!(load_hero_data_from("./resource/does_not_exist.json").is_err());
    }
}
