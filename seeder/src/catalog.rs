//! Job postings written by the seeder. Edit this list to change jobs.json.

use common::Job;

fn job(
    id: &str,
    title: &str,
    location: &str,
    description: &str,
    details: &str,
    requirements: &[&str],
) -> Job {
    Job {
        id: id.to_string(),
        title: title.to_string(),
        location: location.to_string(),
        description: description.to_string(),
        details: details.to_string(),
        requirements: requirements.iter().map(|r| r.to_string()).collect(),
    }
}

/// Returns the postings in the order they are written.
/// Ids are expected to be unique; nothing checks it.
pub fn catalog() -> Vec<Job> {
    vec![
        job(
            "fullstack-pl",
            "Desenvolvedor(a) Full Stack Pleno",
            "Remoto - BR",
            "Desenvolver e evoluir aplicações (front/back), integrações e CI/CD.",
            "React, Node, APIs REST, testes, boas práticas, cloud.",
            &[
                "React",
                "Node",
                "JavaScript",
                "TypeScript",
                "APIs REST",
                "SQL",
                "Docker",
            ],
        ),
        job(
            "cientista-dados-pl",
            "Cientista de Dados Pleno",
            "Híbrido - SP",
            "Modelagem preditiva, EDA, métricas e MLOps.",
            "Pipelines, versionamento, documentação, comunicação.",
            &[
                "Pandas",
                "Scikit-learn",
                "Feature Engineering",
                "Métricas",
                "MLOps",
            ],
        ),
    ]
}
