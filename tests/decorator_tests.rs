//! Decorator-composition builder tests.

use std::sync::Arc;

use lazyseq::prelude::*;

trait Employee {
    fn employee_id(&self) -> u32;

    /// The primary action. Implementations append what they did to `journal`.
    fn work(&self, journal: &mut Vec<String>);
}

struct Developer {
    id: u32,
    project: String,
    language: String,
}

impl Employee for Developer {
    fn employee_id(&self) -> u32 {
        self.id
    }

    fn work(&self, journal: &mut Vec<String>) {
        journal.push(format!("working for {}", self.project));
        journal.push(format!("writing code using {}", self.language));
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum WageFrequency {
    #[default]
    Hourly,
    Daily,
}

#[derive(Default)]
struct ContractualEmployee {
    slot: BaseSlot<dyn Employee>,
    rate: u32,
    frequency: WageFrequency,
}

impl ContractualEmployee {
    fn set_pay_rate(&mut self, rate: u32) -> &mut Self {
        self.rate = rate;
        self
    }

    fn set_pay_frequency(&mut self, frequency: WageFrequency) -> &mut Self {
        self.frequency = frequency;
        self
    }

    fn payout(&self) -> String {
        format!(
            "employee {}: {:?} rate {}",
            self.employee_id(),
            self.frequency,
            self.rate
        )
    }
}

impl Decorator for ContractualEmployee {
    type Base = dyn Employee;

    fn slot(&self) -> &BaseSlot<dyn Employee> {
        &self.slot
    }
}

impl Employee for ContractualEmployee {
    fn employee_id(&self) -> u32 {
        self.base().map(|b| b.employee_id()).unwrap_or_default()
    }

    // Delegates first, then logs its own step.
    fn work(&self, journal: &mut Vec<String>) {
        if let Some(base) = self.base() {
            base.work(journal);
        }
        journal.push(format!("billing {} per {:?}", self.rate, self.frequency));
    }
}

/// Has no `Default`, so it goes through `decorate_with`.
struct PermanentEmployee {
    slot: BaseSlot<dyn Employee>,
    salary: u32,
}

impl PermanentEmployee {
    fn with_salary(salary: u32) -> Self {
        Self {
            slot: BaseSlot::new(),
            salary,
        }
    }
}

impl Decorator for PermanentEmployee {
    type Base = dyn Employee;

    fn slot(&self) -> &BaseSlot<dyn Employee> {
        &self.slot
    }
}

impl Employee for PermanentEmployee {
    fn employee_id(&self) -> u32 {
        self.base().map(|b| b.employee_id()).unwrap_or_default()
    }

    // Logs its own step first, then delegates.
    fn work(&self, journal: &mut Vec<String>) {
        journal.push(format!("salaried at {}", self.salary));
        if let Some(base) = self.base() {
            base.work(journal);
        }
    }
}

fn developer(id: u32) -> Arc<dyn Employee> {
    Arc::new(Developer {
        id,
        project: "Mainframe Offload".into(),
        language: "Rust".into(),
    })
}

#[test]
fn test_decorate_as_returns_configured_concrete_wrapper() {
    let base = developer(7);
    let contractor = decorate_as::<ContractualEmployee, _>(Some(Arc::clone(&base)), |c| {
        c.set_pay_frequency(WageFrequency::Daily).set_pay_rate(7);
    })
    .unwrap();

    assert_eq!(contractor.rate, 7);
    assert_eq!(contractor.frequency, WageFrequency::Daily);
    assert!(Arc::ptr_eq(contractor.slot().shared().unwrap(), &base));
    assert_eq!(contractor.employee_id(), 7);
    assert_eq!(contractor.payout(), "employee 7: Daily rate 7");
}

#[test]
fn test_wrapper_action_invokes_base_action() {
    let contractor = developer(1)
        .decorate_as::<ContractualEmployee>(|c| {
            c.set_pay_rate(500);
        })
        .unwrap();

    let mut journal = Vec::new();
    contractor.work(&mut journal);
    assert_eq!(
        journal,
        vec![
            "working for Mainframe Offload",
            "writing code using Rust",
            "billing 500 per Hourly",
        ]
    );
}

#[test]
fn test_delegation_order_is_per_wrapper() {
    let permanent = decorate_with(
        || PermanentEmployee::with_salary(30_000),
        Some(developer(2)),
        |p| p.salary += 1_000,
    )
    .unwrap();

    let mut journal = Vec::new();
    permanent.work(&mut journal);
    assert_eq!(journal[0], "salaried at 31000");
    assert_eq!(journal.len(), 3);
}

#[test]
fn test_absent_base_is_a_precondition_violation() {
    let configured = std::cell::Cell::new(false);
    let result = decorate_as::<ContractualEmployee, _>(None, |_| configured.set(true));
    assert!(matches!(result, Err(Error::MissingBase { .. })));
    assert!(!configured.get());
}

#[test]
fn test_base_is_set_exactly_once() {
    let contractor = developer(3)
        .decorate_as::<ContractualEmployee>(|_| {})
        .unwrap();
    let err = contractor.attach(developer(4)).unwrap_err();
    assert!(matches!(err, Error::BaseAlreadyAttached { .. }));
    assert_eq!(contractor.employee_id(), 3);
}

#[test]
fn test_wrappers_stack() {
    let contractor: Arc<dyn Employee> = Arc::new(
        developer(9)
            .decorate_as::<ContractualEmployee>(|c| {
                c.set_pay_rate(10);
            })
            .unwrap(),
    );
    let permanent = decorate_with(
        || PermanentEmployee::with_salary(1),
        Some(contractor),
        |_| {},
    )
    .unwrap();

    let mut journal = Vec::new();
    permanent.work(&mut journal);
    assert_eq!(journal.first().map(String::as_str), Some("salaried at 1"));
    assert_eq!(journal.last().map(String::as_str), Some("billing 10 per Hourly"));
    assert_eq!(permanent.employee_id(), 9);
}
