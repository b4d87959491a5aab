//! Operator planning surface: `Materialization` and `OpPlan`.
//!
//! A plan is a static description of a chain. It never pulls from the source.

use serde::{Deserialize, Serialize};

/// How an operator consumes its upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Materialization {
    /// One upstream pull per downstream element (filters may pull several).
    Streaming,
    /// Drains the whole upstream into memory on the first pull of a pass.
    FullBuffer,
}

/// Operator plan: name, buffering behaviour, and the plans it reads from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpPlan {
    pub name: String,
    pub materialization: Materialization,

    /// Upstream plans, in argument order (zip has two).
    pub inputs: Vec<OpPlan>,
}

impl OpPlan {
    pub fn new(name: impl Into<String>, materialization: Materialization) -> Self {
        Self {
            name: name.into(),
            materialization,
            inputs: vec![],
        }
    }

    pub fn streaming(name: impl Into<String>) -> Self {
        Self::new(name, Materialization::Streaming)
    }

    pub fn full_buffer(name: impl Into<String>) -> Self {
        Self::new(name, Materialization::FullBuffer)
    }

    pub fn with_input(mut self, input: OpPlan) -> Self {
        self.inputs.push(input);
        self
    }

    /// Number of stages in the chain, sources included.
    pub fn depth(&self) -> usize {
        1 + self.inputs.iter().map(OpPlan::depth).max().unwrap_or(0)
    }

    /// Names of every full-buffer stage, outermost first.
    pub fn buffering_stages(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_buffering(&mut out);
        out
    }

    fn collect_buffering<'a>(&'a self, out: &mut Vec<&'a str>) {
        if self.materialization == Materialization::FullBuffer {
            out.push(&self.name);
        }
        for input in &self.inputs {
            input.collect_buffering(out);
        }
    }

    /// Render the chain one stage per line, consumer on top.
    ///
    /// ```text
    /// filter
    ///   order_by [full buffer]
    ///     slice
    /// ```
    pub fn explain(&self) -> String {
        let mut out = String::new();
        self.render(0, &mut out);
        out
    }

    fn render(&self, depth: usize, out: &mut String) {
        for _ in 0..depth {
            out.push_str("  ");
        }
        out.push_str(&self.name);
        if self.materialization == Materialization::FullBuffer {
            out.push_str(" [full buffer]");
        }
        out.push('\n');
        for input in &self.inputs {
            input.render(depth + 1, out);
        }
    }
}
