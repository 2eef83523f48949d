use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use super::data::SCENARIO_ROWS;
use super::dto::Scenario;

/// 시나리오 카탈로그 에러
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Cannot sample {requested} scenarios from a catalog of {available}")]
    SampleTooLarge { requested: usize, available: usize },
}

/// 불변 시나리오 카탈로그
///
/// 서버 시작 시 한 번 생성되어 `Arc`로 핸들러 간에 공유되며, 이후 변경되지 않습니다.
#[derive(Debug, Clone)]
pub struct ScenarioCatalog {
    scenarios: Vec<Scenario>,
}

impl ScenarioCatalog {
    pub fn new(scenarios: Vec<Scenario>) -> Self {
        Self { scenarios }
    }

    /// 내장된 60개 시나리오로 카탈로그를 생성합니다.
    pub fn builtin() -> Self {
        let scenarios = SCENARIO_ROWS
            .iter()
            .map(
                |&(id, category, objection, context, suggested_response)| Scenario {
                    id,
                    category: category.to_string(),
                    objection: objection.to_string(),
                    context: context.to_string(),
                    suggested_response: suggested_response.to_string(),
                },
            )
            .collect();

        Self::new(scenarios)
    }

    /// 전체 시나리오 (ID 순서 유지)
    pub fn all(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// 중복 없는 카테고리 목록 (처음 등장한 순서)
    pub fn categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.scenarios
            .iter()
            .filter(|s| seen.insert(s.category.as_str()))
            .map(|s| s.category.clone())
            .collect()
    }

    /// 요청으로 들어온 임의의 정수 ID로 조회합니다. 범위 밖의 값은 없는 ID와 같습니다.
    pub fn find_by_id(&self, id: i64) -> Option<&Scenario> {
        let id = u32::try_from(id).ok()?;
        self.scenarios.iter().find(|s| s.id == id)
    }

    /// 중복 없이 `n`개의 시나리오를 균등 확률로 뽑습니다.
    pub fn sample<R>(&self, n: usize, rng: &mut R) -> Result<Vec<Scenario>, CatalogError>
    where
        R: Rng + ?Sized,
    {
        if n > self.scenarios.len() {
            return Err(CatalogError::SampleTooLarge {
                requested: n,
                available: self.scenarios.len(),
            });
        }

        Ok(self.scenarios.choose_multiple(rng, n).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn builtin_catalog_should_have_60_complete_records() {
        let catalog = ScenarioCatalog::builtin();

        assert_eq!(catalog.len(), 60);
        for scenario in catalog.all() {
            assert!(!scenario.category.is_empty(), "id {}", scenario.id);
            assert!(!scenario.objection.is_empty(), "id {}", scenario.id);
            assert!(!scenario.context.is_empty(), "id {}", scenario.id);
            assert!(!scenario.suggested_response.is_empty(), "id {}", scenario.id);
        }
    }

    #[test]
    fn builtin_catalog_should_have_sequential_unique_ids() {
        let catalog = ScenarioCatalog::builtin();

        let ids: Vec<u32> = catalog.all().iter().map(|s| s.id).collect();
        let expected: Vec<u32> = (1..=60).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn categories_should_be_unique_and_cover_every_record() {
        let catalog = ScenarioCatalog::builtin();

        let categories = catalog.categories();
        let unique: HashSet<&String> = categories.iter().collect();

        assert_eq!(unique.len(), categories.len());
        assert_eq!(categories.len(), 8);
        for scenario in catalog.all() {
            assert!(categories.contains(&scenario.category));
        }
    }

    #[test]
    fn categories_should_keep_first_appearance_order() {
        let catalog = ScenarioCatalog::builtin();

        let categories = catalog.categories();

        assert_eq!(categories[0], "Pricing & Commission Objections");
        assert_eq!(categories[7], "Miscellaneous & Specific Scenarios");
    }

    #[test]
    fn find_by_id_should_return_matching_record() {
        let catalog = ScenarioCatalog::builtin();

        let scenario = catalog.find_by_id(36).unwrap();

        assert_eq!(scenario.objection, "Let me think about it.");
    }

    #[test]
    fn find_by_id_should_return_none_for_unknown_id() {
        let catalog = ScenarioCatalog::builtin();

        assert!(catalog.find_by_id(0).is_none());
        assert!(catalog.find_by_id(999).is_none());
    }

    #[test]
    fn find_by_id_should_treat_out_of_range_ids_as_unknown() {
        let catalog = ScenarioCatalog::builtin();

        assert!(catalog.find_by_id(-1).is_none());
        assert!(catalog.find_by_id(i64::from(u32::MAX) + 2).is_none());
        assert!(catalog.find_by_id(i64::MIN).is_none());
    }

    #[test]
    fn sample_should_return_distinct_records_from_catalog() {
        let catalog = ScenarioCatalog::builtin();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..20 {
            let sample = catalog.sample(10, &mut rng).unwrap();

            assert_eq!(sample.len(), 10);
            let ids: HashSet<u32> = sample.iter().map(|s| s.id).collect();
            assert_eq!(ids.len(), 10);
            for scenario in &sample {
                assert_eq!(catalog.find_by_id(i64::from(scenario.id)), Some(scenario));
            }
        }
    }

    #[test]
    fn sample_should_allow_whole_catalog() {
        let catalog = ScenarioCatalog::builtin();
        let mut rng = StdRng::seed_from_u64(7);

        let sample = catalog.sample(60, &mut rng).unwrap();

        let ids: HashSet<u32> = sample.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), 60);
    }

    #[test]
    fn sample_should_reject_more_than_available() {
        let catalog = ScenarioCatalog::new(ScenarioCatalog::builtin().all()[..5].to_vec());
        let mut rng = StdRng::seed_from_u64(1);

        let result = catalog.sample(10, &mut rng);

        assert_eq!(
            result,
            Err(CatalogError::SampleTooLarge {
                requested: 10,
                available: 5
            })
        );
    }
}
