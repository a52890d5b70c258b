// src/data.rs

use crate::model::TestDefinition;

/// Carga el catálogo de tests desde el YAML embebido
pub fn read_tests_embedded() -> Vec<TestDefinition> {
    let file_content = include_str!("data/tests.yaml");
    serde_yaml::from_str(file_content).expect("No se pudo parsear el catálogo de tests YAML")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_parses_and_ids_are_unique() {
        let tests = read_tests_embedded();
        assert!(!tests.is_empty());
        let mut ids: Vec<u32> = tests.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), tests.len(), "ids de test repetidos en el banco");
    }

    #[test]
    fn every_blank_has_official_answers() {
        for test in read_tests_embedded() {
            for blank in test.blanks() {
                assert!(
                    !blank.official_answers.is_empty(),
                    "hueco sin respuestas oficiales en el test {}",
                    test.id
                );
            }
        }
    }
}
