//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use lazyseq::prelude::Narrow;

#[derive(Debug, Clone, PartialEq)]
pub struct Developer {
    pub first_name: String,
    pub project: String,
    pub language: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QualityEngineer {
    pub first_name: String,
    pub project: String,
    pub testing_tool: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Consultant {
    Developer(Developer),
    QualityEngineer(QualityEngineer),
}

impl Consultant {
    pub fn first_name(&self) -> &str {
        match self {
            Consultant::Developer(d) => &d.first_name,
            Consultant::QualityEngineer(q) => &q.first_name,
        }
    }

    pub fn project(&self) -> &str {
        match self {
            Consultant::Developer(d) => &d.project,
            Consultant::QualityEngineer(q) => &q.project,
        }
    }

    pub fn skills(&self) -> &[String] {
        match self {
            Consultant::Developer(d) => &d.skills,
            Consultant::QualityEngineer(q) => &q.skills,
        }
    }
}

impl<'a> Narrow<&'a Developer> for &'a Consultant {
    fn narrow(self) -> Option<&'a Developer> {
        match self {
            Consultant::Developer(d) => Some(d),
            _ => None,
        }
    }
}

impl<'a> Narrow<&'a QualityEngineer> for &'a Consultant {
    fn narrow(self) -> Option<&'a QualityEngineer> {
        match self {
            Consultant::QualityEngineer(q) => Some(q),
            _ => None,
        }
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

pub fn developer(first_name: &str, project: &str) -> Consultant {
    Consultant::Developer(Developer {
        first_name: first_name.into(),
        project: project.into(),
        language: "Rust".into(),
        skills: strings(&["serde", "tokio", "axum"]),
    })
}

pub fn quality_engineer(first_name: &str, project: &str) -> Consultant {
    Consultant::QualityEngineer(QualityEngineer {
        first_name: first_name.into(),
        project: project.into(),
        testing_tool: "proptest".into(),
        skills: strings(&["fuzzing", "load testing"]),
    })
}

/// Three developers across two projects and one QE on a third.
pub fn consultants() -> Vec<Consultant> {
    vec![
        developer("John", "Mainframe Offload"),
        developer("Kevin", "Mainframe Offload"),
        developer("Kevin", "Billing"),
        quality_engineer("Billy", "Audit"),
    ]
}
