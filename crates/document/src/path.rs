//! Path parsing and element selection.
//!
//! The dialect is the absolute, child-axis subset of XPath used by TIXI
//! callers: `/root/child[2]/leaf`. A step is a (possibly prefixed) element
//! name or `*`, with an optional 1-based position among matching siblings.

use crate::tree::{NodeId, XmlTree, is_xml_name};
use log::trace;
use std::collections::HashSet;
use tixi_types::ReturnCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step<'p> {
    pub name: &'p str,
    pub position: Option<usize>,
}

impl Step<'_> {
    fn matches(&self, name: &str) -> bool {
        self.name == "*" || self.name == name
    }

    fn prefix(&self) -> Option<&str> {
        self.name.split_once(':').map(|(prefix, _)| prefix)
    }
}

/// Parses an absolute path into its steps.
pub fn parse_path(xpath: &str) -> Result<Vec<Step<'_>>, ReturnCode> {
    let rest = xpath.strip_prefix('/').ok_or(ReturnCode::InvalidXpath)?;
    rest.split('/').map(parse_step).collect()
}

fn parse_step(step: &str) -> Result<Step<'_>, ReturnCode> {
    let (name, position) = match step.split_once('[') {
        Some((name, predicate)) => {
            let digits = predicate
                .strip_suffix(']')
                .ok_or(ReturnCode::InvalidXpath)?;
            let position: usize = digits.parse().map_err(|_| ReturnCode::InvalidXpath)?;
            if position == 0 {
                return Err(ReturnCode::InvalidXpath);
            }
            (name, Some(position))
        }
        None => (step, None),
    };

    if name != "*" && !is_xml_name(name) {
        return Err(ReturnCode::InvalidXpath);
    }
    Ok(Step { name, position })
}

/// Selects every element matched by `steps`, in document order.
///
/// Prefixed steps resolve only when the prefix is in `known_prefixes`.
pub fn select(
    tree: &XmlTree,
    steps: &[Step<'_>],
    known_prefixes: &HashSet<String>,
) -> Result<Vec<NodeId>, ReturnCode> {
    if let Some(step) = steps
        .iter()
        .find(|step| step.prefix().is_some_and(|p| !known_prefixes.contains(p)))
    {
        trace!("Unregistered namespace prefix in step '{}'", step.name);
        return Err(ReturnCode::InvalidXpath);
    }

    let Some((first, rest)) = steps.split_first() else {
        return Err(ReturnCode::InvalidXpath);
    };

    let root = tree.root();
    let mut current = Vec::new();
    if first.matches(&tree.element(root).name) && first.position.is_none_or(|p| p == 1) {
        current.push(root);
    }

    for step in rest {
        let mut next = Vec::new();
        for &node in &current {
            let mut matching = tree
                .element(node)
                .children
                .iter()
                .copied()
                .filter(|&child| step.matches(&tree.element(child).name));
            match step.position {
                Some(position) => next.extend(matching.nth(position - 1)),
                None => next.extend(matching),
            }
        }
        current = next;
        if current.is_empty() {
            break;
        }
    }
    Ok(current)
}

/// Resolves `xpath` to exactly one element.
pub fn resolve_unique(
    tree: &XmlTree,
    xpath: &str,
    known_prefixes: &HashSet<String>,
) -> Result<NodeId, ReturnCode> {
    let steps = parse_path(xpath)?;
    let matches = select(tree, &steps, known_prefixes)?;
    trace!("'{}' matched {} element(s)", xpath, matches.len());
    match matches.as_slice() {
        [] => Err(ReturnCode::ElementNotFound),
        [only] => Ok(*only),
        _ => Err(ReturnCode::ElementPathNotUnique),
    }
}
