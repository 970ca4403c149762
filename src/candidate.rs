#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: i32, full_name: &str, math_grade: f64) -> Candidate {
        Candidate::new(
            id, full_name, "Tunisian", "Sfax", 34.74, 10.76, 'M', 22, 75.0, math_grade, 70.0,
            72.5, 3, 4, 5,
        )
    }

    #[test]
    fn test_id_compares_first() {
        assert!(candidate(1, "Zied", 90.0) < candidate(2, "Amine", 10.0));
    }

    #[test]
    fn test_name_breaks_id_ties() {
        assert!(candidate(1, "Amine", 90.0) < candidate(1, "Zied", 10.0));
    }

    #[test]
    fn test_grades_break_earlier_ties() {
        assert!(candidate(1, "Amine", 70.0) < candidate(1, "Amine", 70.5));
    }

    #[test]
    fn test_identical_candidates_compare_equal() {
        assert_eq!(candidate(1, "Amine", 70.0), candidate(1, "Amine", 70.0));
    }
}

use std::cmp::Ordering;
use std::fmt;

/// Example composite key: an identity-bearing record with numeric, textual and
/// geographic attributes. Candidates order lexicographically across all fields
/// in declaration order, with floats compared under `f64::total_cmp` so the
/// order stays total.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub id: i32,
    pub full_name: String,
    pub nationality: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub gender: char,
    pub age: i32,
    pub english_grade: f64,
    pub math_grade: f64,
    pub sciences_grade: f64,
    pub language_grade: f64,
    pub portfolio_rating: i32,
    pub cover_letter_rating: i32,
    pub reference_letter_rating: i32,
}

impl Candidate {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i32,
        full_name: &str,
        nationality: &str,
        city: &str,
        latitude: f64,
        longitude: f64,
        gender: char,
        age: i32,
        english_grade: f64,
        math_grade: f64,
        sciences_grade: f64,
        language_grade: f64,
        portfolio_rating: i32,
        cover_letter_rating: i32,
        reference_letter_rating: i32,
    ) -> Candidate {
        Candidate {
            id,
            full_name: String::from(full_name),
            nationality: String::from(nationality),
            city: String::from(city),
            latitude,
            longitude,
            gender,
            age,
            english_grade,
            math_grade,
            sciences_grade,
            language_grade,
            portfolio_rating,
            cover_letter_rating,
            reference_letter_rating,
        }
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Candidate) -> Ordering {
        self.id
            .cmp(&other.id)
            .then_with(|| self.full_name.cmp(&other.full_name))
            .then_with(|| self.nationality.cmp(&other.nationality))
            .then_with(|| self.city.cmp(&other.city))
            .then_with(|| self.latitude.total_cmp(&other.latitude))
            .then_with(|| self.longitude.total_cmp(&other.longitude))
            .then_with(|| self.gender.cmp(&other.gender))
            .then_with(|| self.age.cmp(&other.age))
            .then_with(|| self.english_grade.total_cmp(&other.english_grade))
            .then_with(|| self.math_grade.total_cmp(&other.math_grade))
            .then_with(|| self.sciences_grade.total_cmp(&other.sciences_grade))
            .then_with(|| self.language_grade.total_cmp(&other.language_grade))
            .then_with(|| self.portfolio_rating.cmp(&other.portfolio_rating))
            .then_with(|| self.cover_letter_rating.cmp(&other.cover_letter_rating))
            .then_with(|| {
                self.reference_letter_rating
                    .cmp(&other.reference_letter_rating)
            })
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Candidate) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Candidate) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (#{})", self.full_name, self.id)
    }
}
