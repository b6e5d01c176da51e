//! Canonical skill groups used for alias-aware skill matching.
//!
//! Each entry maps a canonical technology name to its known variant spellings.
//! All members are lowercase and already trimmed. Group membership is tested with
//! substring containment, so no member may hide inside unrelated words: "ts", "ml",
//! "go", "node", "rails" and a bare "rest" are left out, since they occur in
//! "guardrails", "graph nodes" or "interest".

/// A canonical skill name and its aliases.
pub type SynonymGroup = (&'static str, &'static [&'static str]);

pub const SKILL_SYNONYMS: &[SynonymGroup] = &[
    // Languages
    (
        "javascript",
        &["js", "ecmascript", "es6", "es2015", "java script"],
    ),
    ("typescript", &["type script"]),
    ("python", &["python3", "python 3", "cpython"]),
    ("golang", &["go lang"]),
    ("c++", &["cpp", "cplusplus", "c plus plus"]),
    ("c#", &["csharp", "c sharp"]),
    (".net", &["dotnet", "dot net", "asp.net"]),
    ("ruby on rails", &["ruby-on-rails", "rubyonrails"]),
    // Frontend
    ("react", &["reactjs", "react.js", "react js"]),
    ("vue", &["vuejs", "vue.js", "vue js"]),
    ("angular", &["angularjs", "angular.js"]),
    ("nextjs", &["next.js", "next js"]),
    ("nodejs", &["node.js", "node js"]),
    // Data stores
    ("postgres", &["postgresql", "psql", "postgre"]),
    ("mongodb", &["mongo", "mongo db"]),
    ("elasticsearch", &["elastic search", "opensearch"]),
    ("mysql", &["my sql", "mariadb"]),
    ("dynamodb", &["dynamo db", "dynamo"]),
    // Infrastructure
    ("kubernetes", &["k8s", "kube"]),
    ("docker", &["containerization", "dockerfile"]),
    ("aws", &["amazon web services", "amazon aws"]),
    ("gcp", &["google cloud", "google cloud platform"]),
    ("azure", &["microsoft azure"]),
    ("terraform", &["infrastructure as code"]),
    (
        "ci/cd",
        &[
            "cicd",
            "ci cd",
            "continuous integration",
            "continuous delivery",
            "continuous deployment",
        ],
    ),
    // APIs and messaging
    ("rest api", &["restful", "rest apis"]),
    ("graphql", &["gql", "graph ql"]),
    ("kafka", &["apache kafka", "event streaming"]),
    ("rabbitmq", &["rabbit mq", "amqp"]),
    // AI and data
    (
        "machine learning",
        &["machine-learning", "statistical learning"],
    ),
    ("llm", &["large language model", "generative ai"]),
    ("nlp", &["natural language processing"]),
    ("tensorflow", &["tensor flow", "keras"]),
    ("pytorch", &["torch"]),
    // Process
    ("agile", &["scrum", "kanban"]),
];

/// Returns true when `skill` belongs to the group: it equals a member or
/// contains one as a substring. The canonical name counts as a member.
pub fn group_contains(group: &SynonymGroup, skill: &str) -> bool {
    let (canonical, aliases) = group;
    std::iter::once(canonical)
        .chain(aliases.iter())
        .any(|member| skill == *member || skill.contains(*member))
}

/// Returns true when both skills belong to at least one common canonical group.
///
/// Both inputs must already be normalized.
pub fn are_synonyms(a: &str, b: &str) -> bool {
    SKILL_SYNONYMS
        .iter()
        .any(|group| group_contains(group, a) && group_contains(group, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_k8s_is_kubernetes() {
        assert!(are_synonyms("k8s", "kubernetes"));
        assert!(are_synonyms("kubernetes", "k8s"));
    }

    #[test]
    fn test_postgres_variants() {
        assert!(are_synonyms("postgresql", "psql"));
        assert!(are_synonyms("postgres", "psql"));
    }

    #[test]
    fn test_javascript_aliases() {
        assert!(are_synonyms("js", "ecmascript"));
        assert!(are_synonyms("javascript", "es6"));
    }

    #[test]
    fn test_membership_by_containment() {
        // "aws lambda" contains the canonical "aws"
        assert!(are_synonyms("aws lambda", "amazon web services"));
    }

    #[test]
    fn test_unrelated_skills_are_not_synonyms() {
        assert!(!are_synonyms("rust", "python"));
        assert!(!are_synonyms("figma", "kubernetes"));
    }

    #[test]
    fn test_no_member_hides_inside_unrelated_words() {
        assert!(!are_synonyms("ai guardrails", "ruby on rails"));
        assert!(!are_synonyms("random forest", "rest api"));
        assert!(!are_synonyms("graph nodes", "nodejs"));
        assert!(!are_synonyms("maniac", "terraform"));
    }

    #[test]
    fn test_rest_and_rails_spellings() {
        assert!(are_synonyms("restful", "rest api"));
        assert!(are_synonyms("restful services", "rest apis"));
        assert!(are_synonyms("ruby-on-rails", "ruby on rails"));
        assert!(are_synonyms("node.js", "nodejs"));
    }

    #[test]
    fn test_table_is_normalized() {
        for (canonical, aliases) in SKILL_SYNONYMS {
            assert_eq!(*canonical, canonical.trim().to_lowercase());
            for alias in aliases.iter() {
                assert_eq!(*alias, alias.trim().to_lowercase(), "alias {alias:?}");
            }
        }
    }
}
