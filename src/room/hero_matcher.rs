use indicium::simple::SearchIndex;

use crate::models::hero::Hero;
use crate::opt::*;

const SIMILARITY_THRESHOLD: f64 = 0.85;

/// Resolves typed input to exactly one hero. Exact names (case-insensitive)
/// win; otherwise the search index narrows the catalog, and a jaro-winkler
/// pass catches near-miss spellings the index cannot. Ambiguity is an error
/// naming the closest candidates rather than a guess.
pub fn find_hero<'a>(heroes: &'a [Hero], input: &str) -> Res<&'a Hero> {
    if input.trim().is_empty() {
        return Err("No hero name given".to_string());
    }

    if let Some(hero) = heroes
        .iter()
        .find(|hero| hero.name.eq_ignore_ascii_case(input.trim()))
    {
        return Ok(hero);
    }

    let hero_index = heroes.iter().fold(SearchIndex::default(), |mut acc, hero| {
        acc.insert(&hero.name, &hero.name);
        acc
    });
    let search_result = hero_index.search(input);

    match search_result.len() {
        1 => {
            let found_name = search_result[0];
            heroes
                .iter()
                .find(|hero| &hero.name == found_name)
                .ok_or(format!("Hero {} missing from catalog", found_name))
        }
        0 => find_closest(heroes, input),
        _ => {
            let found_heroes = search_result
                .iter()
                .take(3)
                .map(|name| format!("[{}]", name))
                .collect::<Vec<String>>()
                .join(", ");
            Err(format!("Multiple heroes found: {}", &found_heroes))
        }
    }
}

fn find_closest<'a>(heroes: &'a [Hero], input: &str) -> Res<&'a Hero> {
    let scored = heroes
        .iter()
        .map(|hero| {
            let similarity =
                strsim::jaro_winkler(&hero.name.to_lowercase(), &input.to_lowercase());
            (hero, similarity)
        })
        .max_by(|(_, a), (_, b)| a.total_cmp(b));

    match scored {
        Some((hero, similarity)) if similarity > SIMILARITY_THRESHOLD => Ok(hero),
        _ => Err(format!("No hero found for \"{}\"", input)),
    }
}
