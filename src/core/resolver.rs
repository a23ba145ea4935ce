//! Dependency resolution
//!
//! Computes a deterministic build order over named nodes and detects cycles.

use std::collections::{HashMap, HashSet};

use crate::error::ResolverError;

/// Dependency graph over project labels
///
/// Nodes keep the order they were first seen in, and so do each node's
/// edges. The sort is a depth-first post-order walk in that order, so the
/// same input always yields the same build order.
#[derive(Debug, Default)]
pub struct DependencyGraph {
    /// Adjacency list: node -> dependencies
    edges: HashMap<String, Vec<String>>,
    /// All known nodes, in first-seen order
    nodes: Vec<String>,
    known: HashSet<String>,
}

impl DependencyGraph {
    /// Create a new empty dependency graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node with its dependencies
    ///
    /// Adding the same node twice appends to its dependency list.
    pub fn add_node(&mut self, name: &str, dependencies: Vec<String>) {
        self.insert_node(name);
        for dep in &dependencies {
            self.insert_node(dep);
        }
        self.edges
            .entry(name.to_string())
            .or_default()
            .extend(dependencies);
    }

    fn insert_node(&mut self, name: &str) {
        if self.known.insert(name.to_string()) {
            self.nodes.push(name.to_string());
        }
    }

    /// Dependencies recorded for a node
    pub fn dependencies(&self, name: &str) -> &[String] {
        self.edges.get(name).map_or(&[], Vec::as_slice)
    }

    /// Compute topological sort (build order)
    ///
    /// Returns nodes in order such that dependencies come before dependents.
    pub fn topological_sort(&self) -> Result<Vec<String>, ResolverError> {
        let mut visited = HashSet::new();
        let mut temp_visited = HashSet::new();
        let mut result = Vec::with_capacity(self.nodes.len());
        let mut path = Vec::new();

        for node in &self.nodes {
            if !visited.contains(node.as_str()) {
                self.visit(node, &mut visited, &mut temp_visited, &mut result, &mut path)?;
            }
        }

        Ok(result)
    }

    fn visit<'a>(
        &'a self,
        node: &'a str,
        visited: &mut HashSet<&'a str>,
        temp_visited: &mut HashSet<&'a str>,
        result: &mut Vec<String>,
        path: &mut Vec<&'a str>,
    ) -> Result<(), ResolverError> {
        if temp_visited.contains(node) {
            // Report only the loop itself, not the path that led into it
            let start = path.iter().position(|n| *n == node).unwrap_or(0);
            let mut cycle: Vec<String> = path[start..].iter().map(|n| (*n).to_string()).collect();
            cycle.push(node.to_string());
            return Err(ResolverError::CircularDependency { cycle });
        }

        if visited.contains(node) {
            return Ok(());
        }

        temp_visited.insert(node);
        path.push(node);

        for dep in self.dependencies(node) {
            self.visit(dep, visited, temp_visited, result, path)?;
        }

        path.pop();
        temp_visited.remove(node);
        visited.insert(node);
        result.push(node.to_string());

        Ok(())
    }
}
