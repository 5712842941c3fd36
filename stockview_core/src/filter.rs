use serde::{Deserialize, Serialize};

use std::time::Instant;

use crate::material::{Material, MaterialList};

/// Options controlling how the search filter is matched against material ids.
/// The default is an exact, case-sensitive substring match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    pub case_insensitive: bool,
    pub use_regex: bool,
}

/// Return the materials whose id contains `search_filter`, in their original
/// order.
pub fn filter_materials(material_list: &[Material], search_filter: &str) -> MaterialList {
    filter_materials_with_options(material_list, search_filter, SearchOptions::default())
}

pub fn filter_materials_with_options(
    material_list: &[Material],
    search_filter: &str,
    options: SearchOptions,
) -> MaterialList {
    let filter_start = Instant::now();

    let filtered_material_list = if search_filter.is_empty() {
        // No need to filter
        material_list.to_vec()
    } else if options.use_regex {
        filter_materials_regex(material_list, search_filter, options.case_insensitive)
    } else {
        filter_materials_regular(material_list, search_filter, options.case_insensitive)
    };

    log::debug!(
        "Material filtering took {} ms ({} of {} kept)",
        filter_start.elapsed().as_millis(),
        filtered_material_list.len(),
        material_list.len()
    );

    filtered_material_list
}

/// Filter material list with a regular expression
fn filter_materials_regex(
    material_list: &[Material],
    search_filter: &str,
    case_insensitive_search: bool,
) -> MaterialList {
    match regex::RegexBuilder::new(search_filter)
        .case_insensitive(case_insensitive_search)
        .build()
    {
        // In case of error, return an empty result
        Err(err) => {
            log::debug!("Invalid search expression: {}", err);
            vec![]
        }
        Ok(regex) => material_list
            .iter()
            .filter(|m| m.id.as_deref().is_some_and(|id| regex.is_match(id)))
            .cloned()
            .collect(),
    }
}

/// Filter material list with a plain (sub-)string
fn filter_materials_regular(
    material_list: &[Material],
    search_filter: &str,
    case_insensitive_search: bool,
) -> MaterialList {
    if case_insensitive_search {
        let search_filter = search_filter.to_lowercase();
        material_list
            .iter()
            .filter(|m| {
                m.id.as_deref()
                    .is_some_and(|id| id.to_lowercase().contains(&search_filter))
            })
            .cloned()
            .collect()
    } else {
        material_list
            .iter()
            .filter(|m| m.id.as_deref().is_some_and(|id| id.contains(search_filter)))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_list() -> MaterialList {
        vec![
            Material::new("A1", "Bolt", "yes"),
            Material::new("a2", "Nut", "no"),
            Material {
                id: None,
                name: Some("Washer".to_string()),
                used: None,
            },
        ]
    }

    #[test]
    fn missing_id_only_matches_empty_filter() {
        let list = sample_list();
        assert_eq!(filter_materials(&list, "").len(), 3);
        assert!(filter_materials(&list, "Washer").is_empty());
    }

    #[test]
    fn case_insensitive_substring() {
        let options = SearchOptions {
            case_insensitive: true,
            use_regex: false,
        };
        let filtered = filter_materials_with_options(&sample_list(), "A", options);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filter_materials(&sample_list(), "A").len(), 1);
    }

    #[test]
    fn invalid_regex_yields_nothing() {
        let options = SearchOptions {
            case_insensitive: false,
            use_regex: true,
        };
        assert!(filter_materials_with_options(&sample_list(), "(", options).is_empty());
        let filtered = filter_materials_with_options(&sample_list(), "^[aA]\\d$", options);
        assert_eq!(filtered.len(), 2);
    }
}
