//! Test fixtures for integration tests.

use shortlist::{
    Assessment, CatalogStore, LexicalIndex, Recommender, SentenceEncoder, TestType, VectorIndex,
};

#[derive(Default)]
pub struct AssessmentBuilder {
    url: Option<String>,
    name: Option<String>,
    description: Option<String>,
    test_type: Option<TestType>,
    duration_minutes: Option<u32>,
    skills: Vec<String>,
}

impl AssessmentBuilder {
    pub fn new(url: &str) -> Self {
        Self {
            url: Some(url.to_string()),
            ..Default::default()
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn test_type(mut self, test_type: TestType) -> Self {
        self.test_type = Some(test_type);
        self
    }

    pub fn duration(mut self, minutes: u32) -> Self {
        self.duration_minutes = Some(minutes);
        self
    }

    pub fn skill(mut self, skill: &str) -> Self {
        self.skills.push(skill.to_string());
        self
    }

    pub fn build(self) -> Assessment {
        let url = self.url.expect("url is required");
        Assessment {
            name: self.name.unwrap_or_else(|| url.clone()),
            url,
            description: self.description.unwrap_or_default(),
            test_type: self.test_type.unwrap_or(TestType::Knowledge),
            duration_minutes: self.duration_minutes.unwrap_or(30),
            skills: self.skills,
        }
    }
}

/// Catalog with 5 cognitive and 5 personality tests (≤ 30 minutes each)
/// plus a pair of longer knowledge tests.
pub fn balanced_catalog() -> CatalogStore {
    let mut records = Vec::new();

    for i in 0..5 {
        records.push(
            AssessmentBuilder::new(&format!("https://x/cognitive-{i}"))
                .name(&format!("Cognitive Reasoning Test {i}"))
                .description("Cognitive aptitude test with numerical reasoning for analysts")
                .test_type(TestType::Cognitive)
                .duration(20 + i)
                .skill("analytical")
                .build(),
        );
    }

    for i in 0..5 {
        records.push(
            AssessmentBuilder::new(&format!("https://x/personality-{i}"))
                .name(&format!("Personality Profile Test {i}"))
                .description("Personality and behavior questionnaire for workplace fit")
                .test_type(TestType::Personality)
                .duration(15 + i)
                .skill("communication")
                .build(),
        );
    }

    records.push(
        AssessmentBuilder::new("https://x/java-long")
            .name("Java Programming Test")
            .description("Comprehensive java programming knowledge test")
            .test_type(TestType::Knowledge)
            .duration(90)
            .skill("java")
            .build(),
    );
    records.push(
        AssessmentBuilder::new("https://x/sql-long")
            .name("SQL Knowledge Test")
            .description("Comprehensive sql knowledge test for data roles")
            .test_type(TestType::Knowledge)
            .duration(60)
            .skill("sql")
            .build(),
    );

    CatalogStore::from_assessments(records).expect("fixture catalog is valid")
}

pub fn lexical_recommender(store: CatalogStore) -> Recommender {
    let index = LexicalIndex::build(&store);
    Recommender::from_parts(store, Box::new(index), 0, 50)
}

pub fn stub_vector_recommender(store: CatalogStore) -> Recommender {
    let encoder = SentenceEncoder::stub().expect("stub encoder loads");
    let index = VectorIndex::build(&store, encoder).expect("index builds");
    Recommender::from_parts(store, Box::new(index), 0, 50)
}
