//! Built-in reference dataset for the region (Carabobo state).
//!
//! Ids are fixed so that clients and fixtures can refer to them. Every art
//! category carries exactly one [`OTHER_DISCIPLINE_NAME`] discipline.

use super::{ArtCategory, ArtDiscipline, Municipality, Parish, OTHER_DISCIPLINE_NAME};
use crate::types::DbId;

const MUNICIPALITIES: &[(DbId, &str)] = &[
    (1, "Bejuma"),
    (2, "Carlos Arvelo"),
    (3, "Diego Ibarra"),
    (4, "Guacara"),
    (5, "Juan José Mora"),
    (6, "Libertador"),
    (7, "Los Guayos"),
    (8, "Miranda"),
    (9, "Montalbán"),
    (10, "Naguanagua"),
    (11, "Puerto Cabello"),
    (12, "San Diego"),
    (13, "San Joaquín"),
    (14, "Valencia"),
];

/// `(id, name, municipality_id)`
const PARISHES: &[(DbId, &str, DbId)] = &[
    (1, "Bejuma", 1),
    (2, "Canoabo", 1),
    (3, "Simón Bolívar", 1),
    (4, "Güigüe", 2),
    (5, "Belén", 2),
    (6, "Tacarigua", 2),
    (7, "Mariara", 3),
    (8, "Aguas Calientes", 3),
    (9, "Guacara", 4),
    (10, "Ciudad Alianza", 4),
    (11, "Yagua", 4),
    (12, "Morón", 5),
    (13, "Urama", 5),
    (14, "Tocuyito", 6),
    (15, "Independencia", 6),
    (16, "Los Guayos", 7),
    (17, "Miranda", 8),
    (18, "Montalbán", 9),
    (19, "Naguanagua", 10),
    (20, "Democracia", 11),
    (21, "Fraternidad", 11),
    (22, "Goaigoaza", 11),
    (23, "Juan José Flores", 11),
    (24, "Unión", 11),
    (25, "Borburata", 11),
    (26, "Patanemo", 11),
    (27, "San Diego", 12),
    (28, "San Joaquín", 13),
    (29, "Candelaria", 14),
    (30, "Catedral", 14),
    (31, "El Socorro", 14),
    (32, "Miguel Peña", 14),
    (33, "Rafael Urdaneta", 14),
    (34, "San Blas", 14),
    (35, "San José", 14),
    (36, "Santa Rosa", 14),
    (37, "Negro Primero", 14),
];

const ART_CATEGORIES: &[(DbId, &str)] = &[
    (1, "Artes Plásticas"),
    (2, "Artes Escénicas"),
    (3, "Música"),
    (4, "Danza"),
    (5, "Literatura"),
    (6, "Artesanía"),
    (7, "Audiovisual"),
];

/// `(id, name, art_category_id)`
const ART_DISCIPLINES: &[(DbId, &str, DbId)] = &[
    (1, "Pintura", 1),
    (2, "Escultura", 1),
    (3, "Grabado", 1),
    (4, "Fotografía", 1),
    (5, OTHER_DISCIPLINE_NAME, 1),
    (6, "Teatro", 2),
    (7, "Títeres", 2),
    (8, "Circo", 2),
    (9, OTHER_DISCIPLINE_NAME, 2),
    (10, "Canto", 3),
    (11, "Instrumentista", 3),
    (12, "Composición", 3),
    (13, "Dirección Coral", 3),
    (14, OTHER_DISCIPLINE_NAME, 3),
    (15, "Danza Tradicional", 4),
    (16, "Danza Contemporánea", 4),
    (17, "Ballet", 4),
    (18, OTHER_DISCIPLINE_NAME, 4),
    (19, "Poesía", 5),
    (20, "Narrativa", 5),
    (21, "Crónica", 5),
    (22, OTHER_DISCIPLINE_NAME, 5),
    (23, "Cerámica", 6),
    (24, "Tejido", 6),
    (25, "Talla en Madera", 6),
    (26, OTHER_DISCIPLINE_NAME, 6),
    (27, "Cine", 7),
    (28, "Video", 7),
    (29, OTHER_DISCIPLINE_NAME, 7),
];

pub fn municipalities() -> Vec<Municipality> {
    MUNICIPALITIES
        .iter()
        .map(|&(id, name)| Municipality {
            id,
            name: name.to_string(),
        })
        .collect()
}

pub fn parishes() -> Vec<Parish> {
    PARISHES
        .iter()
        .map(|&(id, name, municipality_id)| Parish {
            id,
            name: name.to_string(),
            municipality_id,
        })
        .collect()
}

pub fn art_categories() -> Vec<ArtCategory> {
    ART_CATEGORIES
        .iter()
        .map(|&(id, name)| ArtCategory {
            id,
            name: name.to_string(),
        })
        .collect()
}

pub fn art_disciplines() -> Vec<ArtDiscipline> {
    ART_DISCIPLINES
        .iter()
        .map(|&(id, name, art_category_id)| ArtDiscipline {
            id,
            name: name.to_string(),
            art_category_id,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_parish_has_a_known_municipality() {
        let ids: HashSet<DbId> = municipalities().iter().map(|m| m.id).collect();
        assert!(parishes().iter().all(|p| ids.contains(&p.municipality_id)));
    }

    #[test]
    fn every_category_has_exactly_one_sentinel() {
        let disciplines = art_disciplines();
        for category in art_categories() {
            let sentinels = disciplines
                .iter()
                .filter(|d| d.art_category_id == category.id && d.is_other())
                .count();
            assert_eq!(sentinels, 1, "category {}", category.name);
        }
    }

    #[test]
    fn names_are_unique_within_parent() {
        let mut seen = HashSet::new();
        for p in parishes() {
            assert!(seen.insert((p.municipality_id, p.name.clone())));
        }
        let mut seen = HashSet::new();
        for d in art_disciplines() {
            assert!(seen.insert((d.art_category_id, d.name.clone())));
        }
    }
}
